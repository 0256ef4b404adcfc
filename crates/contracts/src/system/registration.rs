//! Регистрация пользователей и водителей (choferes).
//!
//! Пароль проверяется формой и не сохраняется: сервера нет.

use crate::domain::common::{RecordStatus, StoreError};
use crate::shared::config::UploadConfig;
use crate::shared::documents::{DocumentAttachment, DocumentKind};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{duplicate_message, normalize_key, parse_date, FieldErrors, FormValidator};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

crate::sequential_id!(
    /// Идентификатор зарегистрированного пользователя
    UserId
);

crate::sequential_id!(
    /// Идентификатор зарегистрированного водителя
    DriverId
);

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const LICENSE_CATEGORIES: &[&str] = &["C1", "C2", "C3", "E1", "E2", "E3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    #[default]
    Operator,
    Dispatcher,
    Carrier,
    Admin,
}

impl UserRole {
    pub fn all() -> &'static [UserRole] {
        &[
            UserRole::Operator,
            UserRole::Dispatcher,
            UserRole::Carrier,
            UserRole::Admin,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Operator => "Operador",
            UserRole::Dispatcher => "Despachante",
            UserRole::Carrier => "Transportista",
            UserRole::Admin => "Administrador",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.label() == label)
    }
}

// ============================================================================
// Пользователь
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRegistrationDto {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmarPassword")]
    pub confirm_password: String,
    #[serde(rename = "rol")]
    pub role: UserRole,
    #[serde(rename = "aceptaTerminos")]
    pub accept_terms: bool,
}

impl UserRegistrationDto {
    pub fn validate(&self) -> FieldErrors {
        let mut v = FormValidator::new();
        v.required("first_name", "El nombre", &self.first_name)
            .required("last_name", "El apellido", &self.last_name)
            .required("email", "El email", &self.email)
            .email("email", &self.email)
            .required("password", "La contraseña", &self.password)
            .min_length("password", "La contraseña", &self.password, PASSWORD_MIN_LENGTH)
            .required("confirm_password", "La confirmación", &self.confirm_password)
            .matches(
                "confirm_password",
                &self.confirm_password,
                &self.password,
                "Las contraseñas no coinciden",
            );
        if !self.accept_terms {
            v.error("accept_terms", "Debe aceptar los términos y condiciones");
        }
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub status: RecordStatus,
    pub created_at: NaiveDateTime,
}

impl RegisteredUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    users: Vec<RegisteredUser>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[RegisteredUser] {
        &self.users
    }

    pub fn check(&self, dto: &UserRegistrationDto) -> FieldErrors {
        let mut errors = dto.validate();
        let email = normalize_key(&dto.email);
        if !email.is_empty() && self.users.iter().any(|u| normalize_key(&u.email) == email) {
            errors.insert("email", duplicate_message("ese email"));
        }
        errors
    }

    pub fn register(&mut self, dto: &UserRegistrationDto, now: NaiveDateTime) -> Result<UserId, StoreError> {
        let errors = self.check(dto);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }
        let id = UserId(self.users.iter().map(|u| u.id.value()).max().unwrap_or(0) + 1);
        self.users.push(RegisteredUser {
            id,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            role: dto.role,
            status: RecordStatus::Activo,
            created_at: now,
        });
        log::info!("user {} registered as {}", id, dto.role.label());
        Ok(id)
    }
}

// ============================================================================
// Водитель
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverRegistrationDto {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "dni")]
    pub document_number: String,
    #[serde(rename = "numeroLicencia")]
    pub license_number: String,
    #[serde(rename = "categoriaLicencia")]
    pub license_category: String,
    #[serde(rename = "vencimientoLicencia")]
    pub license_expiry: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(flatten)]
    pub location: LocationSelection,
    #[serde(rename = "documentos")]
    pub documents: Vec<DocumentAttachment>,
}

impl DriverRegistrationDto {
    pub fn document(&self, kind: DocumentKind) -> Option<&DocumentAttachment> {
        self.documents.iter().find(|d| d.kind == kind)
    }

    /// Заменить документ того же типа (повторный выбор файла)
    pub fn attach(&mut self, attachment: DocumentAttachment) -> Option<DocumentAttachment> {
        let previous = self
            .documents
            .iter()
            .position(|d| d.kind == attachment.kind)
            .map(|i| self.documents.remove(i));
        self.documents.push(attachment);
        previous
    }

    pub fn validate(&self, today: NaiveDate, uploads: &UploadConfig) -> FieldErrors {
        let mut v = FormValidator::new();
        v.required("first_name", "El nombre", &self.first_name)
            .required("last_name", "El apellido", &self.last_name)
            .required("document_number", "El número de documento", &self.document_number)
            .digits_only("document_number", "El número de documento", &self.document_number)
            .length_between("document_number", "El número de documento", &self.document_number, 7, 8)
            .required("license_number", "El número de licencia", &self.license_number)
            .required("license_category", "La categoría", &self.license_category)
            .required("license_expiry", "La fecha de vencimiento", &self.license_expiry)
            .date("license_expiry", "La fecha de vencimiento", &self.license_expiry)
            .date_after(
                "license_expiry",
                &self.license_expiry,
                today,
                "La licencia está vencida",
            )
            .required("phone", "El teléfono", &self.phone)
            .phone("phone", &self.phone)
            .email("email", &self.email)
            .location(&self.location);

        let category = self.license_category.trim();
        if !category.is_empty() && !LICENSE_CATEGORIES.contains(&category) {
            v.error("license_category", "Categoría de licencia no válida");
        }

        for kind in DocumentKind::driver_required() {
            if self.document(*kind).is_none() {
                v.error(
                    &format!("documents.{}", kind.key()),
                    format!("Adjunte {}", kind.label()),
                );
            }
        }
        for doc in &self.documents {
            if let Err(message) = doc.validate(uploads) {
                v.error(&format!("documents.{}", doc.kind.key()), message);
            }
        }
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredDriver {
    pub id: DriverId,
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub license_number: String,
    pub license_category: String,
    pub license_expiry: NaiveDate,
    pub phone: String,
    pub location: LocationSelection,
    pub documents: Vec<DocumentAttachment>,
    pub status: RecordStatus,
}

impl RegisteredDriver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverDirectory {
    drivers: Vec<RegisteredDriver>,
}

impl DriverDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drivers(&self) -> &[RegisteredDriver] {
        &self.drivers
    }

    pub fn check(&self, dto: &DriverRegistrationDto, today: NaiveDate, uploads: &UploadConfig) -> FieldErrors {
        let mut errors = dto.validate(today, uploads);
        let document = dto.document_number.trim();
        if !document.is_empty() && self.drivers.iter().any(|d| d.document_number == document) {
            errors.insert("document_number", duplicate_message("ese número de documento"));
        }
        errors
    }

    pub fn register(
        &mut self,
        dto: &DriverRegistrationDto,
        today: NaiveDate,
        uploads: &UploadConfig,
    ) -> Result<DriverId, StoreError> {
        let errors = self.check(dto, today, uploads);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }
        let id = DriverId(self.drivers.iter().map(|d| d.id.value()).max().unwrap_or(0) + 1);
        self.drivers.push(RegisteredDriver {
            id,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            document_number: dto.document_number.trim().to_string(),
            license_number: dto.license_number.trim().to_uppercase(),
            license_category: dto.license_category.trim().to_string(),
            license_expiry: parse_date(&dto.license_expiry).unwrap_or(today),
            phone: dto.phone.trim().to_string(),
            location: dto.location.clone(),
            documents: dto.documents.clone(),
            status: RecordStatus::Activo,
        });
        log::info!("driver {} registered ({} documents)", id, dto.documents.len());
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn user() -> UserRegistrationDto {
        UserRegistrationDto {
            first_name: "Ana".into(),
            last_name: "Suárez".into(),
            email: "ana@transit.com".into(),
            password: "secreto123".into(),
            confirm_password: "secreto123".into(),
            role: UserRole::Operator,
            accept_terms: true,
        }
    }

    fn driver() -> DriverRegistrationDto {
        let mut dto = DriverRegistrationDto {
            first_name: "Carlos".into(),
            last_name: "Rojas".into(),
            document_number: "28123456".into(),
            license_number: "lic-4455".into(),
            license_category: "E1".into(),
            license_expiry: "2026-05-01".into(),
            phone: "+54 261 5550000".into(),
            email: String::new(),
            location: LocationSelection::new("Argentina", "Mendoza", "San Rafael"),
            documents: Vec::new(),
        };
        for kind in DocumentKind::driver_required() {
            dto.attach(DocumentAttachment::new(*kind, "scan.jpg", "image/jpeg", 200_000));
        }
        dto
    }

    #[test]
    fn test_password_confirmation_mismatch() {
        let mut dto = user();
        dto.confirm_password = "secreto124".into();
        assert_eq!(
            dto.validate().get("confirm_password"),
            Some("Las contraseñas no coinciden")
        );
    }

    #[test]
    fn test_short_password_and_terms() {
        let mut dto = user();
        dto.password = "corta".into();
        dto.confirm_password = "corta".into();
        dto.accept_terms = false;
        let errors = dto.validate();
        assert_eq!(
            errors.get("password"),
            Some("La contraseña debe tener al menos 8 caracteres")
        );
        assert!(errors.contains("accept_terms"));
    }

    #[test]
    fn test_duplicate_email_case_insensitive() {
        let mut dir = UserDirectory::new();
        assert_eq!(dir.register(&user(), now()), Ok(UserId(1)));
        let mut again = user();
        again.email = "ANA@transit.com ".into();
        let err = dir.register(&again, now()).unwrap_err();
        assert_eq!(
            err.field_errors().get("email"),
            Some("Ya existe un registro con ese email")
        );
        assert_eq!(dir.users().len(), 1);
    }

    #[test]
    fn test_driver_requires_all_documents() {
        let mut dto = driver();
        dto.documents.retain(|d| d.kind != DocumentKind::IdCardBack);
        let errors = dto.validate(now().date(), &UploadConfig::default());
        assert_eq!(errors.get("documents.id_card_back"), Some("Adjunte DNI (dorso)"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_driver_document_number_and_expiry() {
        let mut dto = driver();
        dto.document_number = "12.345".into();
        dto.license_expiry = "2024-12-31".into();
        let errors = dto.validate(now().date(), &UploadConfig::default());
        assert_eq!(
            errors.get("document_number"),
            Some("El número de documento debe contener solo números")
        );
        assert_eq!(errors.get("license_expiry"), Some("La licencia está vencida"));
    }

    #[test]
    fn test_attach_replaces_same_kind() {
        let mut dto = driver();
        let previous = dto.attach(DocumentAttachment::new(
            DocumentKind::LicenseFront,
            "nueva.png",
            "image/png",
            1000,
        ));
        assert!(previous.is_some());
        assert_eq!(dto.documents.len(), 4);
        assert_eq!(dto.document(DocumentKind::LicenseFront).unwrap().file_name, "nueva.png");
    }

    #[test]
    fn test_driver_directory_rejects_duplicate_document() {
        let mut dir = DriverDirectory::new();
        let today = now().date();
        let uploads = UploadConfig::default();
        assert_eq!(dir.register(&driver(), today, &uploads), Ok(DriverId(1)));
        let err = dir.register(&driver(), today, &uploads).unwrap_err();
        assert_eq!(
            err.field_errors().get("document_number"),
            Some("Ya existe un registro con ese número de documento")
        );
    }
}
