//! Screen flows: session guard, list load, create-and-refresh, login,
//! registration, and logout.
//!
//! DESIGN
//! ======
//! State transitions are plain methods on [`DashboardState`] so the browser
//! client can run them inside reactive signals around its own `await`
//! points. [`Dashboard`] strings the same transitions together over a
//! [`WheelsApi`] and a [`SessionStore`] for the CLI and for tests.
//!
//! ```text
//! Unauthenticated --token found--> Loading --fetch settles--> Ready
//! Ready --submit--> Ready   (success: draft reset + refetch; failure: draft kept)
//! ```

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::api::{ApiError, WheelsApi};
use crate::draft::{FieldBinding, RideDraft};
use crate::notice::Notice;
use crate::route::Route;
use crate::session::{AuthToken, DriverId, SessionStore};
use crate::types::{Credentials, RegistrationProfile, RideOffer};

/// Where a screen stands in its mount/load lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unauthenticated,
    Loading,
    Ready,
}

/// Result of the session guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mount {
    /// No usable token: leave for this route and do nothing else.
    Redirect(Route),
    /// Token present: proceed to the initial load with it.
    Load(AuthToken),
}

/// Check the session once on mount of a protected screen.
pub fn guard<S: SessionStore + ?Sized>(session: &S) -> Mount {
    match session.token() {
        Some(token) => Mount::Load(token),
        None => {
            tracing::debug!("no session token; redirecting to login");
            Mount::Redirect(Route::Login)
        }
    }
}

/// Where to go and what to tell the user after a flow settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub notice: Option<Notice>,
    pub navigate: Option<Route>,
}

impl Transition {
    fn to(route: Route, notice: Notice) -> Self {
        Self { notice: Some(notice), navigate: Some(route) }
    }

    fn stay(notice: Notice) -> Self {
        Self { notice: Some(notice), navigate: None }
    }
}

/// A ride creation request ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub token: AuthToken,
    pub driver: DriverId,
    pub ride: RideOffer,
}

/// Result of starting a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStart {
    /// A previous submission has not settled; nothing was started.
    Busy,
    /// The submission could not be built; the draft is untouched.
    Rejected(Notice),
    /// Send this request, then call [`DashboardState::finish_submit`].
    Send(Submission),
}

/// Result of a settled submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settled {
    pub notice: Notice,
    /// Whether the list must be refetched.
    pub refresh: bool,
}

/// Dashboard screen state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub phase: Phase,
    /// Last successfully fetched list, in server order.
    pub rides: Vec<RideOffer>,
    pub draft: RideDraft,
    /// Set while a creation request is outstanding.
    pub in_flight: bool,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Replace the list on success; keep the previous list on failure.
    pub fn apply_rides(&mut self, result: Result<Vec<RideOffer>, ApiError>) {
        match result {
            Ok(rides) => {
                tracing::debug!(count = rides.len(), "rides loaded");
                self.rides = rides;
            }
            Err(err) => tracing::warn!(error = %err, "failed to load rides"),
        }
        self.phase = Phase::Ready;
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.draft.set_field(name, value)
    }

    /// Build a creation request from the draft and mark it in flight.
    ///
    /// The acting driver is the subject of the stored session token.
    pub fn begin_submit<S: SessionStore + ?Sized>(&mut self, session: &S) -> SubmitStart {
        if self.in_flight {
            tracing::debug!("ride submission already in flight; ignoring");
            return SubmitStart::Busy;
        }
        let Some(token) = session.token() else {
            tracing::warn!("ride submission without a session token");
            return SubmitStart::Rejected(Notice::RideCreateFailed);
        };
        let driver = match token.driver_id() {
            Ok(driver) => driver,
            Err(err) => {
                tracing::warn!(error = %err, "cannot derive driver id from session");
                return SubmitStart::Rejected(Notice::RideCreateFailed);
            }
        };
        let ride = match self.draft.to_offer() {
            Ok(ride) => ride,
            Err(err) => {
                tracing::warn!(error = %err, "ride draft rejected");
                return SubmitStart::Rejected(Notice::RideCreateFailed);
            }
        };
        self.in_flight = true;
        SubmitStart::Send(Submission { token, driver, ride })
    }

    /// Settle the outstanding submission.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Settled {
        self.in_flight = false;
        match result {
            Ok(()) => {
                tracing::info!("ride created");
                self.draft = RideDraft::default();
                Settled { notice: Notice::RideCreated, refresh: true }
            }
            Err(err) => {
                tracing::warn!(error = %err, "ride creation failed");
                Settled { notice: Notice::RideCreateFailed, refresh: false }
            }
        }
    }
}

/// Dashboard driven end to end over an API and a session store.
pub struct Dashboard<A, S> {
    api: A,
    session: S,
    state: DashboardState,
    token: Option<AuthToken>,
    mounted: bool,
}

impl<A: WheelsApi, S: SessionStore> Dashboard<A, S> {
    pub fn new(api: A, session: S) -> Self {
        Self { api, session, state: DashboardState::default(), token: None, mounted: false }
    }

    /// Run the session guard and the initial load.
    ///
    /// Returns the redirect target when there is no session. Only the first
    /// call per instance does anything.
    pub async fn mount(&mut self) -> Option<Route> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        match guard(&self.session) {
            Mount::Redirect(route) => Some(route),
            Mount::Load(token) => {
                self.token = Some(token);
                self.refresh().await;
                None
            }
        }
    }

    /// Issue one read and apply it to the list.
    pub async fn refresh(&mut self) {
        let Some(token) = self.token.clone() else {
            return;
        };
        self.state.begin_load();
        let result = self.api.list_rides(&token).await;
        self.state.apply_rides(result);
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.state.set_field(name, value)
    }

    /// Submit the draft, refetching on success.
    ///
    /// Returns `None` when a submission is already in flight.
    pub async fn submit(&mut self) -> Option<Notice> {
        let submission = match self.state.begin_submit(&self.session) {
            SubmitStart::Busy => return None,
            SubmitStart::Rejected(notice) => return Some(notice),
            SubmitStart::Send(submission) => submission,
        };
        let result = self
            .api
            .create_ride(&submission.token, &submission.driver, &submission.ride)
            .await;
        let settled = self.state.finish_submit(result);
        if settled.refresh {
            self.refresh().await;
        }
        Some(settled.notice)
    }

    pub fn logout(&mut self) -> Transition {
        self.token = None;
        logout(&self.session)
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> &S {
        &self.session
    }
}

/// Submit credentials and persist the returned token.
///
/// Nothing is written to the session unless the reply carries a plausible
/// token.
pub async fn login<A, S>(api: &A, session: &S, credentials: &Credentials) -> Transition
where
    A: WheelsApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let reply = match api.login(credentials).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::warn!(error = %err, "login request failed");
            return Transition::stay(Notice::LoginFailed);
        }
    };
    let Some(token) = reply.into_token() else {
        tracing::info!("login rejected");
        return Transition::stay(Notice::InvalidCredentials);
    };
    match session.set(&token) {
        Ok(()) => {
            tracing::info!("login succeeded");
            Transition::to(Route::Dashboard, Notice::LoggedIn)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to persist session token");
            Transition::stay(Notice::LoginFailed)
        }
    }
}

/// Submit a registration profile.
pub async fn register<A: WheelsApi + ?Sized>(api: &A, profile: &RegistrationProfile) -> Transition {
    match api.register(profile).await {
        Ok(()) => {
            tracing::info!("registration succeeded");
            Transition::to(Route::Login, Notice::Registered)
        }
        Err(err) => {
            tracing::warn!(error = %err, "registration failed");
            Transition::stay(Notice::RegisterFailed)
        }
    }
}

/// Forget the session locally and go to the login screen.
///
/// No server call is made.
pub fn logout<S: SessionStore + ?Sized>(session: &S) -> Transition {
    if let Err(err) = session.clear() {
        tracing::warn!(error = %err, "failed to clear session token");
    }
    Transition { notice: None, navigate: Some(Route::Login) }
}
