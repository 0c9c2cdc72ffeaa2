//! Login page: email + password, token persisted on success.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use rides::{Credentials, FieldBinding};

use crate::components::form_fields::form_fields;
use crate::net::api::HttpApi;
use crate::util::auth::apply_transition;
use crate::util::session::BrowserSession;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();

    let form = RwSignal::new(Credentials::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let credentials = form.get_untracked();
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let transition = rides::flow::login(&api, &session, &credentials).await;
            busy.set(false);
            apply_transition(transition, &navigate);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2 class="auth-card__title">"Iniciar Sesión"</h2>
                {form_fields(
                    Credentials::FIELDS,
                    move |name| form.with(|f| f.field(name).unwrap_or_default().to_owned()),
                    move |name, value| form.update(|f| {
                        f.set_field(name, value);
                    }),
                )}
                <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                    "Entrar"
                </button>
                <p class="auth-card__switch">
                    "¿No tienes cuenta? "
                    <a href="/register">"Regístrate"</a>
                </p>
            </form>
        </div>
    }
}
