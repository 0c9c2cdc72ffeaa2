//! Registration page: collects a user profile and sends it once.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use rides::{FieldBinding, RegistrationProfile};

use crate::components::form_fields::form_fields;
use crate::net::api::HttpApi;
use crate::util::auth::apply_transition;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationProfile::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let profile = form.get_untracked();
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let transition = rides::flow::register(&api, &profile).await;
            busy.set(false);
            apply_transition(transition, &navigate);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h2 class="auth-card__title">"Registro de Usuario"</h2>
                {form_fields(
                    RegistrationProfile::FIELDS,
                    move |name| form.with(|f| f.field(name).unwrap_or_default().to_owned()),
                    move |name, value| form.update(|f| {
                        f.set_field(name, value);
                    }),
                )}
                <button class="auth-card__submit" type="submit" disabled=move || busy.get()>
                    "Registrarse"
                </button>
                <p class="auth-card__switch">
                    "¿Ya tienes cuenta? "
                    <a href="/login">"Inicia sesión"</a>
                </p>
            </form>
        </div>
    }
}
