//! Выбор файла и превью через object URL.
//!
//! Файл остаётся в браузере: в формы попадают только метаданные
//! (`DocumentAttachment`), а для превью хранится blob URL по handle вложения.

use contracts::shared::documents::{DocumentAttachment, DocumentKind};
use leptos::prelude::*;
use std::collections::HashMap;
use uuid::Uuid;
use web_sys::{HtmlInputElement, Url};

pub struct PickedFile {
    pub attachment: DocumentAttachment,
    pub preview_url: Option<String>,
}

/// Первый выбранный файл из `<input type="file">`
pub fn pick_file(ev: &leptos::ev::Event, kind: DocumentKind) -> Option<PickedFile> {
    let input = event_target::<HtmlInputElement>(ev);
    let file = input.files()?.get(0)?;

    let attachment = DocumentAttachment::new(kind, &file.name(), &file.type_(), file.size() as u64);
    let preview_url = match Url::create_object_url_with_blob(&file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("object url for {} failed: {:?}", attachment.file_name, e);
            None
        }
    };

    // тот же файл можно выбрать повторно
    input.set_value("");

    Some(PickedFile {
        attachment,
        preview_url,
    })
}

pub fn revoke_preview(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("revoke_object_url failed: {:?}", e);
    }
}

/// Blob URL превью по handle вложения
#[derive(Clone, Copy)]
pub struct PreviewUrls(RwSignal<HashMap<Uuid, String>>);

impl PreviewUrls {
    pub fn new() -> Self {
        Self(RwSignal::new(HashMap::new()))
    }

    pub fn insert(&self, handle: Uuid, url: String) {
        self.0.update(|urls| {
            if let Some(old) = urls.insert(handle, url) {
                revoke_preview(&old);
            }
        });
    }

    pub fn get(&self, handle: Uuid) -> Option<String> {
        self.0.with(|urls| urls.get(&handle).cloned())
    }

    pub fn remove(&self, handle: Uuid) {
        self.0.update(|urls| {
            if let Some(url) = urls.remove(&handle) {
                revoke_preview(&url);
            }
        });
    }

    pub fn clear(&self) {
        self.0.update(|urls| {
            for (_, url) in urls.drain() {
                revoke_preview(&url);
            }
        });
    }
}

impl Default for PreviewUrls {
    fn default() -> Self {
        Self::new()
    }
}
