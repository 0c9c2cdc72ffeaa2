//! Dashboard page: the ride list plus the "offer a ride" form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. The session guard runs once on mount; with a token the
//! page issues one list read, and every successful ride creation triggers a
//! full refetch. All transitions live on `rides::DashboardState`; this page
//! only holds that state in a signal and awaits the requests in between.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use rides::flow;
use rides::{AuthToken, DashboardState, FieldBinding, RideDraft, RideOffer, SubmitStart, WheelsApi};

use crate::components::form_fields::form_fields;
use crate::components::ride_card::RideCard;
use crate::net::api::HttpApi;
use crate::util::auth::{apply_transition, guard_or_redirect};
use crate::util::notify::notify;
use crate::util::session::BrowserSession;

/// Fetch the list once and apply the outcome to `state`.
fn load_rides(api: HttpApi, token: AuthToken, state: RwSignal<DashboardState>) {
    state.update(DashboardState::begin_load);
    spawn_local(async move {
        let result = api.list_rides(&token).await;
        state.update(|s| s.apply_rides(result));
    });
}

/// The ride list, notifying readers only when the list itself changes.
///
/// Draft edits update the same state signal; reading through this memo keeps
/// keystrokes from rebuilding the list.
fn ride_list(state: RwSignal<DashboardState>) -> Memo<Vec<RideOffer>> {
    Memo::new(move |_| state.with(|s| s.rides.clone()))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();

    let state = RwSignal::new(DashboardState::default());

    if let Some(token) = guard_or_redirect(&session, navigate.clone()) {
        load_rides(api.clone(), token, state);
    }

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(start) = state.try_update(|s| s.begin_submit(&session)) else {
                return;
            };
            let submission = match start {
                SubmitStart::Busy => return,
                SubmitStart::Rejected(notice) => {
                    notify(notice);
                    return;
                }
                SubmitStart::Send(submission) => submission,
            };
            let api = api.clone();
            spawn_local(async move {
                let result = api
                    .create_ride(&submission.token, &submission.driver, &submission.ride)
                    .await;
                let Some(settled) = state.try_update(|s| s.finish_submit(result)) else {
                    return;
                };
                notify(settled.notice);
                if settled.refresh {
                    load_rides(api, submission.token, state);
                }
            });
        }
    };

    let on_logout = move |_| apply_transition(flow::logout(&session), &navigate);

    let rides = ride_list(state);
    let in_flight = Memo::new(move |_| state.with(|s| s.in_flight));

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Wheels"</h1>
                <button class="dashboard__logout" on:click=on_logout>"Cerrar sesión"</button>
            </header>

            <section class="dashboard__rides">
                <h2>"Viajes disponibles"</h2>
                <Show
                    when=move || rides.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="dashboard__empty">"No hay viajes aún"</p> }
                >
                    <ul class="dashboard__list">
                        {move || rides.get().into_iter().map(|ride| view! { <RideCard ride=ride /> }).collect::<Vec<_>>()}
                    </ul>
                </Show>
            </section>

            <section class="dashboard__offer">
                <h2>"Ofrecer un viaje"</h2>
                <form class="ride-form" on:submit=on_submit>
                    {form_fields(
                        RideDraft::FIELDS,
                        move |name| state.with(|s| s.draft.field(name).unwrap_or_default().to_owned()),
                        move |name, value| state.update(|s| {
                            s.set_field(name, value);
                        }),
                    )}
                    <button class="ride-form__submit" type="submit" disabled=move || in_flight.get()>
                        "Crear viaje"
                    </button>
                </form>
            </section>
        </div>
    }
}
