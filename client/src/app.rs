//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::api::HttpApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::util::session::BrowserSession;

/// Root application component.
///
/// Provides the backend client and the session store as context so every
/// page receives them explicitly instead of touching storage directly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(HttpApi::from_build_env());
    provide_context(BrowserSession);

    view! {
        <Title text="Wheels"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
