//! Загрузка документов с превью.

use crate::shared::blob_preview::{pick_file, revoke_preview, PreviewUrls};
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use contracts::shared::documents::{format_size, DocumentAttachment, DocumentKind};
use leptos::prelude::*;
use uuid::Uuid;

const ACCEPT: &str = ".pdf,.jpg,.jpeg,.png";

/// Карточка прикреплённого файла: имя, размер, превью, удаление
#[component]
pub fn AttachmentPreview(
    attachment: DocumentAttachment,
    previews: PreviewUrls,
    on_remove: Callback<Uuid>,
) -> impl IntoView {
    let handle = attachment.handle;
    let url = previews.get(handle);
    let preview = match (url, attachment.is_image()) {
        (Some(url), true) => view! {
            <img class="attachment__thumb" src=url alt={attachment.file_name.clone()} />
        }
        .into_any(),
        (Some(url), false) => view! {
            <a class="attachment__link" href=url target="_blank">
                {icon("file-text")}
                "Ver archivo"
            </a>
        }
        .into_any(),
        (None, _) => view! { <span class="attachment__icon">{icon("file-text")}</span> }.into_any(),
    };

    view! {
        <div class="attachment">
            {preview}
            <div class="attachment__info">
                <span class="attachment__kind">{attachment.kind.label()}</span>
                <span class="attachment__name">{attachment.file_name.clone()}</span>
                <span class="attachment__size">{format_size(attachment.size_bytes)}</span>
            </div>
            <button
                class="attachment__remove"
                title="Quitar"
                on:click=move |_| {
                    previews.remove(handle);
                    on_remove.run(handle);
                }
            >
                {icon("trash")}
            </button>
        </div>
    }
}

/// Выбор файла: проверка типа и размера, затем blob URL для превью.
///
/// Отклонённый файл сразу освобождает свой URL.
pub fn accept_picked(
    ev: &leptos::ev::Event,
    kind: DocumentKind,
    previews: PreviewUrls,
) -> Result<Option<DocumentAttachment>, String> {
    let Some(picked) = pick_file(ev, kind) else {
        return Ok(None);
    };
    let uploads = use_app_config().uploads;
    match picked.attachment.validate(&uploads) {
        Ok(()) => {
            if let Some(url) = picked.preview_url {
                previews.insert(picked.attachment.handle, url);
            }
            log::debug!("attached {} ({})", picked.attachment.file_name, kind.key());
            Ok(Some(picked.attachment))
        }
        Err(message) => {
            if let Some(url) = picked.preview_url {
                revoke_preview(&url);
            }
            Err(message)
        }
    }
}

/// Слот одного обязательного документа (licencia, DNI...)
#[component]
pub fn DocumentSlot(
    kind: DocumentKind,
    #[prop(into)]
    attachment: Signal<Option<DocumentAttachment>>,
    previews: PreviewUrls,
    on_attach: Callback<DocumentAttachment>,
    on_remove: Callback<Uuid>,
    /// Ошибка формы для этого документа
    #[prop(into, optional)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let rejected = RwSignal::new(None::<String>);

    view! {
        <div class="document-slot" class:document-slot--invalid={move || error.with(Option::is_some)}>
            <div class="document-slot__title">{kind.label()}</div>
            {move || match attachment.get() {
                Some(att) => view! {
                    <AttachmentPreview attachment=att previews=previews on_remove=on_remove />
                }
                .into_any(),
                None => view! {
                    <input
                        type="file"
                        accept=ACCEPT
                        id={format!("document-{}", kind.key())}
                        on:change=move |ev| {
                            match accept_picked(&ev, kind, previews) {
                                Ok(Some(att)) => {
                                    rejected.set(None);
                                    on_attach.run(att);
                                }
                                Ok(None) => {}
                                Err(message) => rejected.set(Some(message)),
                            }
                        }
                    />
                }
                .into_any(),
            }}
            {move || rejected.get().or_else(|| error.get()).map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
