use crate::shared::blob_preview::PreviewUrls;
use crate::shared::components::document_upload::DocumentSlot;
use crate::shared::components::form_field::{plain_options, SelectField, TextField};
use crate::shared::components::location_select::LocationSelect;
use crate::shared::components::submit_message::SubmitMessage;
use crate::shared::config::use_app_config;
use crate::shared::data_stores::DataStores;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::submit::{simulate_submit, today};
use contracts::shared::documents::{DocumentAttachment, DocumentKind};
use contracts::shared::location::LocationSelection;
use contracts::shared::submission::SubmitState;
use contracts::shared::validation::FieldErrors;
use contracts::system::registration::{DriverRegistrationDto, LICENSE_CATEGORIES};
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

fn document_error_key(kind: DocumentKind) -> String {
    format!("documents.{}", kind.key())
}

#[component]
pub fn DriverRegistrationPage() -> impl IntoView {
    let stores = DataStores::use_context();
    let config = use_app_config();
    let delay_ms = config.submission.delay_ms;
    let uploads = StoredValue::new(config.uploads.clone());

    let form = RwSignal::new(DriverRegistrationDto::default());
    let errors = RwSignal::new(FieldErrors::new());
    let submit = RwSignal::new(SubmitState::Idle);
    let previews = PreviewUrls::new();

    let value = move |get: fn(&DriverRegistrationDto) -> String| Signal::derive(move || form.with(get));
    let input = move |key: &'static str, put: fn(&mut DriverRegistrationDto, String)| {
        Callback::new(move |v: String| {
            form.update(|f| put(f, v));
            errors.update(|e| e.remove(key));
        })
    };

    let on_location = Callback::new(move |location: LocationSelection| {
        form.update(|f| f.location = location);
        errors.update(|e| {
            for key in ["country", "province", "city"] {
                e.remove(key);
            }
        });
    });

    let on_attach = Callback::new(move |attachment: DocumentAttachment| {
        let key = document_error_key(attachment.kind);
        if let Some(previous) = form.try_update(|f| f.attach(attachment)).flatten() {
            previews.remove(previous.handle);
        }
        errors.update(|e| e.remove(&key));
    });
    let on_remove = Callback::new(move |handle: Uuid| {
        form.update(|f| f.documents.retain(|d| d.handle != handle));
    });

    let on_submit = move || {
        let dto = form.get_untracked();
        let day = today();
        let found = stores
            .drivers
            .with_untracked(|d| uploads.with_value(|u| d.check(&dto, day, u)));
        if !found.is_empty() {
            log::debug!("driver registration rejected: {} field(s)", found.len());
            errors.set(found);
            submit.set(SubmitState::Failed("Revise los campos y documentos marcados".into()));
            return;
        }
        simulate_submit(submit, delay_ms, move || {
            let registered = stores
                .drivers
                .try_update(|d| uploads.with_value(|u| d.register(&dto, day, u)))
                .ok_or_else(|| "Directorio no disponible".to_string())?;
            match registered {
                Ok(id) => {
                    form.set(DriverRegistrationDto::default());
                    previews.clear();
                    Ok(format!(
                        "Chofer {} {} registrado con ID {}",
                        dto.first_name.trim(),
                        dto.last_name.trim(),
                        id
                    ))
                }
                Err(e) => {
                    errors.set(e.field_errors());
                    Err(e.to_string())
                }
            }
        });
    };

    let drivers = Memo::new(move |_| stores.drivers.with(|d| d.drivers().len()));

    view! {
        <PageFrame page_id="sys_driver_registration--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("id-card")}
                    <h1 class="page__title">"Registro de chofer"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || format!("{} registrados", drivers.get())}
                    </Badge>
                </div>
            </div>
            <div class="page__content">
                <SubmitMessage state=submit />
                <div class="details-form">
                    <h3 class="detail-section__title">"Datos personales"</h3>
                    <div class="form__row">
                        <TextField label="Nombre" field="first_name" value={value(|f| f.first_name.clone())}
                            on_input={input("first_name", |f, v| f.first_name = v)} errors=errors required=true />
                        <TextField label="Apellido" field="last_name" value={value(|f| f.last_name.clone())}
                            on_input={input("last_name", |f, v| f.last_name = v)} errors=errors required=true />
                        <TextField label="N° de documento" field="document_number"
                            value={value(|f| f.document_number.clone())}
                            on_input={input("document_number", |f, v| f.document_number = v)} errors=errors
                            required=true placeholder="30123456" />
                    </div>
                    <div class="form__row">
                        <TextField label="Teléfono" field="phone" value={value(|f| f.phone.clone())}
                            on_input={input("phone", |f, v| f.phone = v)} errors=errors required=true />
                        <TextField label="Email" field="email" value={value(|f| f.email.clone())}
                            on_input={input("email", |f, v| f.email = v)} errors=errors input_type="email" />
                    </div>
                    <LocationSelect
                        value={Signal::derive(move || form.with(|f| f.location.clone()))}
                        on_change=on_location
                        errors=errors
                    />

                    <h3 class="detail-section__title">"Licencia de conducir"</h3>
                    <div class="form__row">
                        <TextField label="N° de licencia" field="license_number"
                            value={value(|f| f.license_number.clone())}
                            on_input={input("license_number", |f, v| f.license_number = v)} errors=errors required=true />
                        <SelectField label="Categoría" field="license_category"
                            value={value(|f| f.license_category.clone())}
                            on_change={input("license_category", |f, v| f.license_category = v)}
                            options={plain_options(LICENSE_CATEGORIES)} errors=errors required=true />
                        <TextField label="Vencimiento" field="license_expiry"
                            value={value(|f| f.license_expiry.clone())}
                            on_input={input("license_expiry", |f, v| f.license_expiry = v)} errors=errors
                            required=true input_type="date" />
                    </div>

                    <h3 class="detail-section__title">"Documentación"</h3>
                    <div class="document-grid">
                        {DocumentKind::driver_required().iter().copied().map(|kind| view! {
                            <DocumentSlot
                                kind=kind
                                attachment={Signal::derive(move || form.with(|f| f.document(kind).cloned()))}
                                previews=previews
                                on_attach=on_attach
                                on_remove=on_remove
                                error=Signal::derive(move || {
                                    errors.with(|e| e.get(&document_error_key(kind)).map(str::to_string))
                                })
                            />
                        }).collect_view()}
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled={Signal::derive(move || submit.with(SubmitState::is_submitting))}
                        on_click={move |_| on_submit()}
                    >
                        {move || if submit.with(SubmitState::is_submitting) { "Registrando..." } else { "Registrar chofer" }}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_key_matches_validation() {
        assert_eq!(document_error_key(DocumentKind::LicenseFront), "documents.license_front");
        assert_eq!(document_error_key(DocumentKind::IdCardBack), "documents.id_card_back");
    }
}
