use super::CargoForm;
use crate::shared::blob_preview::PreviewUrls;
use crate::shared::components::document_upload::{accept_picked, AttachmentPreview};
use crate::shared::components::form_field::FormField;
use contracts::shared::documents::DocumentKind;
use leptos::prelude::*;
use thaw::*;
use uuid::Uuid;

fn kind_by_key(key: &str) -> DocumentKind {
    DocumentKind::cargo_kinds()
        .iter()
        .copied()
        .find(|k| k.key() == key)
        .unwrap_or(DocumentKind::Other)
}

/// Необязательные документы груза: тип + файл, с превью
#[component]
pub fn DocumentsStep(form: CargoForm, previews: PreviewUrls) -> impl IntoView {
    let kind = RwSignal::new(DocumentKind::CommercialInvoice);
    let rejected = RwSignal::new(None::<String>);
    // сбросить <input type=file> после выбора
    let input_version = RwSignal::new(0u32);

    let on_pick = move |ev: leptos::ev::Event| {
        let picked = accept_picked(&ev, kind.get_untracked(), previews);
        input_version.update(|v| *v += 1);
        match picked {
            Ok(Some(attachment)) => {
                let handle = attachment.handle;
                match form.state.try_update(|w| w.add_attachment(attachment)) {
                    Some(Ok(_)) => rejected.set(None),
                    Some(Err(e)) => {
                        previews.remove(handle);
                        rejected.set(Some(e.to_string()));
                    }
                    None => {}
                }
            }
            Ok(None) => {}
            Err(message) => rejected.set(Some(message)),
        }
    };

    let on_remove = Callback::new(move |handle: Uuid| {
        form.state.update(|w| {
            w.remove_attachment(handle);
        });
    });

    let attachments = Memo::new(move |_| form.state.with(|w| w.attachments().to_vec()));

    view! {
        <div class="details-form">
            <p class="text-muted">"Los documentos son opcionales. Formatos: PDF, JPG, PNG."</p>
            <div class="form__row">
                <FormField label="Tipo de documento" error={Signal::derive(|| None::<String>)}>
                    <select
                        class="form__select"
                        on:change={move |ev| kind.set(kind_by_key(&event_target_value(&ev)))}
                    >
                        {DocumentKind::cargo_kinds().iter().map(|k| view! {
                            <option value={k.key()}>{k.label()}</option>
                        }).collect_view()}
                    </select>
                </FormField>
                <FormField label="Archivo" error=rejected>
                    {move || {
                        input_version.get();
                        view! {
                            <input type="file" accept=".pdf,.jpg,.jpeg,.png" on:change=on_pick />
                        }
                    }}
                </FormField>
            </div>
            <div class="attachment-list">
                {move || attachments.get().into_iter().map(|attachment| view! {
                    <AttachmentPreview attachment=attachment previews=previews on_remove=on_remove />
                }).collect_view()}
            </div>
            <Show when={move || attachments.with(Vec::is_empty)}>
                <MessageBar intent=MessageBarIntent::Info>"Sin documentos adjuntos"</MessageBar>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_by_key_falls_back_to_other() {
        assert_eq!(kind_by_key("packing_list"), DocumentKind::PackingList);
        assert_eq!(kind_by_key("desconocido"), DocumentKind::Other);
    }
}
