//! Вложения форм. Файл не покидает браузер: здесь только метаданные
//! для проверки и предпросмотра.

use crate::shared::config::UploadConfig;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    LicenseFront,
    LicenseBack,
    IdCardFront,
    IdCardBack,
    Insurance,
    CommercialInvoice,
    PackingList,
    CertificateOfOrigin,
    Other,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::LicenseFront => "Licencia (frente)",
            DocumentKind::LicenseBack => "Licencia (dorso)",
            DocumentKind::IdCardFront => "DNI (frente)",
            DocumentKind::IdCardBack => "DNI (dorso)",
            DocumentKind::Insurance => "Seguro",
            DocumentKind::CommercialInvoice => "Factura comercial",
            DocumentKind::PackingList => "Packing list",
            DocumentKind::CertificateOfOrigin => "Certificado de origen",
            DocumentKind::Other => "Otro",
        }
    }

    /// Ключ поля формы
    pub fn key(&self) -> &'static str {
        match self {
            DocumentKind::LicenseFront => "license_front",
            DocumentKind::LicenseBack => "license_back",
            DocumentKind::IdCardFront => "id_card_front",
            DocumentKind::IdCardBack => "id_card_back",
            DocumentKind::Insurance => "insurance",
            DocumentKind::CommercialInvoice => "commercial_invoice",
            DocumentKind::PackingList => "packing_list",
            DocumentKind::CertificateOfOrigin => "certificate_of_origin",
            DocumentKind::Other => "other",
        }
    }

    /// Документы груза
    pub fn cargo_kinds() -> &'static [DocumentKind] {
        &[
            DocumentKind::CommercialInvoice,
            DocumentKind::PackingList,
            DocumentKind::CertificateOfOrigin,
            DocumentKind::Insurance,
            DocumentKind::Other,
        ]
    }

    /// Обязательные документы для регистрации водителя
    pub fn driver_required() -> &'static [DocumentKind] {
        &[
            DocumentKind::LicenseFront,
            DocumentKind::LicenseBack,
            DocumentKind::IdCardFront,
            DocumentKind::IdCardBack,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAttachment {
    /// Ключ, по которому UI находит URL предпросмотра
    pub handle: Uuid,
    pub kind: DocumentKind,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl DocumentAttachment {
    pub fn new(kind: DocumentKind, file_name: &str, mime_type: &str, size_bytes: u64) -> Self {
        Self {
            handle: Uuid::new_v4(),
            kind,
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn validate(&self, config: &UploadConfig) -> Result<(), String> {
        if !config
            .allowed_mime_types
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&self.mime_type))
        {
            return Err(format!(
                "{}: formato no permitido (solo PDF, JPG o PNG)",
                self.file_name
            ));
        }
        if self.size_bytes > config.max_file_size_bytes() {
            return Err(format!(
                "{}: supera el tamaño máximo de {} MB",
                self.file_name, config.max_file_size_mb
            ));
        }
        Ok(())
    }
}

/// Размер для человека ("850 KB", "2.4 MB")
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KB * KB {
        format!("{:.1} MB", b / (KB * KB))
    } else {
        format!("{:.0} KB", (b / KB).max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unsupported_type_and_oversize() {
        let config = UploadConfig::default();
        let ok = DocumentAttachment::new(DocumentKind::LicenseFront, "lic.jpg", "image/jpeg", 300_000);
        assert!(ok.validate(&config).is_ok());

        let docx = DocumentAttachment::new(DocumentKind::Other, "nota.docx", "application/msword", 1_000);
        assert!(docx.validate(&config).is_err());

        let huge = DocumentAttachment::new(DocumentKind::Insurance, "poliza.pdf", "application/pdf", 50 * 1024 * 1024);
        let err = huge.validate(&config).unwrap_err();
        assert!(err.contains("5 MB"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "1 KB");
        assert_eq!(format_size(2_516_582), "2.4 MB");
    }
}
