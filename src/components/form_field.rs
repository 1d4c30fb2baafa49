//! Labelled text input bound to a string signal, with an inline error line.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    let class = move || {
        if error.get().is_some() { "form-field__input form-field__input--invalid" } else { "form-field__input" }
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class=class
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
