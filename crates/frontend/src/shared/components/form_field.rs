//! Поля формы с ошибкой под полем.
//!
//! Ошибки приходят одним набором `FieldErrors`; каждое поле берёт свою по ключу.

use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Обёртка: подпись, контрол, текст ошибки
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(optional)]
    required: bool,
    #[prop(into)]
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid={move || error.with(Option::is_some)}>
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {children()}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

fn error_for(errors: Signal<FieldErrors>, key: String) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(&key).map(str::to_string)))
}

#[component]
pub fn TextField(
    label: &'static str,
    /// Ключ поля в `FieldErrors`
    #[prop(into)]
    field: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)]
    errors: Signal<FieldErrors>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional, default = "text")]
    input_type: &'static str,
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let error = error_for(errors, field.clone());

    view! {
        <FormField label=label required=required error=error>
            <input
                type=input_type
                id=field
                class="form__input"
                placeholder=placeholder
                prop:value={move || value.get()}
                disabled={move || disabled.get()}
                on:input={move |ev| on_input.run(event_target_value(&ev))}
            />
        </FormField>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)]
    field: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// (value, label)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    errors: Signal<FieldErrors>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, default = "Seleccione...")]
    placeholder: &'static str,
    #[prop(into, optional)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let error = error_for(errors, field.clone());

    view! {
        <FormField label=label required=required error=error>
            <select
                id=field
                class="form__select"
                disabled={move || disabled.get()}
                prop:value={move || value.get()}
                on:change={move |ev| on_change.run(event_target_value(&ev))}
            >
                <option value="">{placeholder}</option>
                {move || {
                    let current = value.get();
                    options.get().into_iter().map(|(val, text)| {
                        let selected = val == current;
                        view! { <option value=val selected=selected>{text}</option> }
                    }).collect_view()
                }}
            </select>
        </FormField>
    }
}

/// Опции select из статических строк (значение = подпись)
pub fn plain_options(values: &[&'static str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}
