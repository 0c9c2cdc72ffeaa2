//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical guard and post-submit navigation
//! behavior: the decision comes from `rides::flow`, this module only turns
//! it into router navigation and alerts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use rides::flow::{self, Mount};
use rides::{AuthToken, SessionStore, Transition};

use super::notify::notify;

/// Run the session guard once and redirect when there is no token.
///
/// Returns the token when the screen may proceed to its initial load.
pub fn guard_or_redirect<S, F>(session: &S, navigate: F) -> Option<AuthToken>
where
    S: SessionStore + ?Sized,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    match flow::guard(session) {
        Mount::Load(token) => Some(token),
        Mount::Redirect(route) => {
            Effect::new(move || {
                navigate(route.path(), NavigateOptions::default());
            });
            None
        }
    }
}

/// Show the transition's notice, then follow its navigation.
pub fn apply_transition<F>(transition: Transition, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some(notice) = transition.notice {
        notify(notice);
    }
    if let Some(route) = transition.navigate {
        navigate(route.path(), NavigateOptions::default());
    }
}
