//! Labelled inputs bound to a draft's named fields.
//!
//! Every form in the client renders its inputs from a `FieldSpec` table, so
//! input types, names, and the `required` flag stay in one place.

use leptos::prelude::*;
use rides::FieldSpec;

/// Render one required input per field.
///
/// `read` supplies the current value of a field by name; `write` merges an
/// edited value back into the draft.
pub fn form_fields<R, W>(fields: &'static [FieldSpec], read: R, write: W) -> impl IntoView
where
    R: Fn(&'static str) -> String + Copy + Send + Sync + 'static,
    W: Fn(&'static str, String) + Copy + Send + Sync + 'static,
{
    fields
        .iter()
        .map(|spec| {
            let name = spec.name;
            view! {
                <label class="form-field">
                    <span class="form-field__label">{spec.label}</span>
                    <input
                        class="form-field__input"
                        type=spec.kind.html_type()
                        name=name
                        required=true
                        prop:value=move || read(name)
                        on:input=move |ev| write(name, event_target_value(&ev))
                    />
                </label>
            }
        })
        .collect::<Vec<_>>()
}
