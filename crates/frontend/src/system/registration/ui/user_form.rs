use crate::shared::components::form_field::{FormField, SelectField, TextField};
use crate::shared::components::submit_message::SubmitMessage;
use crate::shared::config::use_app_config;
use crate::shared::data_stores::DataStores;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::submit::{now, simulate_submit};
use contracts::shared::submission::SubmitState;
use contracts::shared::validation::FieldErrors;
use contracts::system::registration::{UserRegistrationDto, UserRole};
use leptos::prelude::*;
use thaw::*;

fn role_options() -> Vec<(String, String)> {
    UserRole::all()
        .iter()
        .map(|r| (r.label().to_string(), r.label().to_string()))
        .collect()
}

#[component]
pub fn UserRegistrationPage() -> impl IntoView {
    let stores = DataStores::use_context();
    let delay_ms = use_app_config().submission.delay_ms;
    let form = RwSignal::new(UserRegistrationDto::default());
    let errors = RwSignal::new(FieldErrors::new());
    let submit = RwSignal::new(SubmitState::Idle);

    let value = move |get: fn(&UserRegistrationDto) -> String| Signal::derive(move || form.with(get));
    let input = move |key: &'static str, put: fn(&mut UserRegistrationDto, String)| {
        Callback::new(move |v: String| {
            form.update(|f| put(f, v));
            errors.update(|e| e.remove(key));
        })
    };

    let on_submit = move || {
        let dto = form.get_untracked();
        let found = stores.users.with_untracked(|d| d.check(&dto));
        if !found.is_empty() {
            log::debug!("user registration rejected: {} field(s)", found.len());
            errors.set(found);
            submit.set(SubmitState::Failed("Revise los campos marcados".into()));
            return;
        }
        simulate_submit(submit, delay_ms, move || {
            let registered = stores
                .users
                .try_update(|d| d.register(&dto, now()))
                .ok_or_else(|| "Directorio no disponible".to_string())?;
            match registered {
                Ok(id) => {
                    form.set(UserRegistrationDto::default());
                    Ok(format!("Usuario {} registrado con ID {}", dto.email.trim(), id))
                }
                Err(e) => {
                    errors.set(e.field_errors());
                    Err(e.to_string())
                }
            }
        });
    };

    let users = Memo::new(move |_| stores.users.with(|d| d.users().to_vec()));

    view! {
        <PageFrame page_id="sys_user_registration--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("user-plus")}
                    <h1 class="page__title">"Registro de usuario"</h1>
                </div>
            </div>
            <div class="page__content">
                <SubmitMessage state=submit />
                <div class="details-form">
                    <div class="form__row">
                        <TextField label="Nombre" field="first_name" value={value(|f| f.first_name.clone())}
                            on_input={input("first_name", |f, v| f.first_name = v)} errors=errors required=true />
                        <TextField label="Apellido" field="last_name" value={value(|f| f.last_name.clone())}
                            on_input={input("last_name", |f, v| f.last_name = v)} errors=errors required=true />
                    </div>
                    <TextField label="Email" field="email" value={value(|f| f.email.clone())}
                        on_input={input("email", |f, v| f.email = v)} errors=errors required=true input_type="email" />
                    <div class="form__row">
                        <TextField label="Contraseña" field="password" value={value(|f| f.password.clone())}
                            on_input={input("password", |f, v| f.password = v)} errors=errors required=true
                            input_type="password" />
                        <TextField label="Confirmar contraseña" field="confirm_password"
                            value={value(|f| f.confirm_password.clone())}
                            on_input={input("confirm_password", |f, v| f.confirm_password = v)} errors=errors
                            required=true input_type="password" />
                    </div>
                    <SelectField label="Rol" field="role" value={value(|f| f.role.label().to_string())}
                        on_change={input("role", |f, v| f.role = UserRole::from_label(&v).unwrap_or_default())}
                        options={role_options()} errors=errors required=true />
                    <FormField
                        label="Términos y condiciones"
                        error={Signal::derive(move || errors.with(|e| e.get("accept_terms").map(str::to_string)))}
                    >
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked={move || form.with(|f| f.accept_terms)}
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.accept_terms = checked);
                                    errors.update(|e| e.remove("accept_terms"));
                                }
                            />
                            "Acepto los términos y condiciones"
                        </label>
                    </FormField>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled={Signal::derive(move || submit.with(SubmitState::is_submitting))}
                        on_click={move |_| on_submit()}
                    >
                        {move || if submit.with(SubmitState::is_submitting) { "Registrando..." } else { "Registrar" }}
                    </Button>
                </div>

                <Show when={move || users.with(|u| !u.is_empty())}>
                    <h3 class="detail-section__title">"Usuarios registrados"</h3>
                    <ul class="review-list">
                        {move || users.get().into_iter().map(|u| view! {
                            <li>{format!("#{} {} <{}> · {}", u.id, u.full_name(), u.email, u.role.label())}</li>
                        }).collect_view()}
                    </ul>
                </Show>
            </div>
        </PageFrame>
    }
}
