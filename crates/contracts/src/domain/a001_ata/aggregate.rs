use crate::domain::common::{AggregateRoot, BaseAggregate, RecordStatus};
use crate::shared::list_query::{any_field_contains, cmp_text, HasStatus, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{tax_id_subject, FieldErrors, FormValidator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Идентификатор
// ============================================================================

crate::sequential_id!(
    /// Последовательный идентификатор ATA
    AtaId
);

// ============================================================================
// Агрегат
// ============================================================================

/// ATA: таможенный транспортный агент (Agente de Transporte Aduanero)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ata {
    /// `code` = налоговый идентификатор, `description` = наименование
    #[serde(flatten)]
    pub base: BaseAggregate<AtaId>,

    #[serde(flatten)]
    pub location: LocationSelection,

    #[serde(rename = "direccion")]
    pub address: String,

    pub email: String,

    #[serde(rename = "telefono")]
    pub phone: String,
}

impl Ata {
    pub fn tax_id(&self) -> &str {
        &self.base.code
    }

    /// Валидация полей формы
    pub fn validate(dto: &AtaDto) -> FieldErrors {
        let tax = tax_id_subject(&dto.location.country);
        let mut v = FormValidator::new();
        v.required("description", "La razón social", &dto.description)
            .min_length("description", "La razón social", &dto.description, 3)
            .required("tax_id", &tax, &dto.tax_id)
            .digits_only("tax_id", &tax, &dto.tax_id)
            .location(&dto.location)
            .required("address", "La dirección", &dto.address)
            .required("email", "El email", &dto.email)
            .email("email", &dto.email)
            .phone("phone", &dto.phone);
        v.finish()
    }

    pub fn demo_records() -> Vec<Ata> {
        let rows = [
            ("Transportes del Plata SA", "30712345678", ("Argentina", "Buenos Aires", "Campana"), "Ruta 9 km 75", "operaciones@delplata.com.ar", "+54 3489 441200"),
            ("Cordillera Logística SpA", "76543210", ("Chile", "Valparaíso", "Los Andes"), "Av. Santa Teresa 1450", "ata@cordillera.cl", "+56 34 2421100"),
            ("Agencia Fronteriza Libres SRL", "30698765432", ("Argentina", "Corrientes", "Paso de los Libres"), "Colón 820", "contacto@afl.com.ar", ""),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, tax, (country, province, city), address, email, phone))| {
                let dto = AtaDto {
                    id: None,
                    description: name.to_string(),
                    tax_id: tax.to_string(),
                    location: LocationSelection::new(country, province, city),
                    address: address.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                };
                Ata::from_form(AtaId(i as i64 + 1), &dto)
            })
            .collect()
    }
}

impl AggregateRoot for Ata {
    type Id = AtaId;
    type Form = AtaDto;

    crate::base_aggregate_accessors!(AtaId);

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "ata"
    }

    fn element_name() -> &'static str {
        "ATA"
    }

    fn list_name() -> &'static str {
        "ATAs"
    }

    fn code_label() -> &'static str {
        "ese identificador fiscal"
    }

    fn description_label() -> &'static str {
        "esa razón social"
    }

    fn code_field() -> &'static str {
        "tax_id"
    }

    fn validate_form(form: &AtaDto) -> FieldErrors {
        Ata::validate(form)
    }

    fn form_code(form: &AtaDto) -> String {
        form.tax_id.clone()
    }

    fn form_description(form: &AtaDto) -> String {
        form.description.clone()
    }

    fn from_form(id: AtaId, form: &AtaDto) -> Self {
        let mut ata = Self {
            base: BaseAggregate::new(id, "", ""),
            location: LocationSelection::default(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
        };
        ata.apply_form(form);
        ata
    }

    fn to_form(&self) -> AtaDto {
        AtaDto {
            id: Some(self.base.id.to_string()),
            description: self.base.description.clone(),
            tax_id: self.base.code.clone(),
            location: self.location.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    fn apply_form(&mut self, form: &AtaDto) {
        self.base.rename(&form.tax_id, &form.description);
        self.location = form.location.clone();
        self.address = form.address.trim().to_string();
        self.email = form.email.trim().to_string();
        self.phone = form.phone.trim().to_string();
    }
}

impl HasStatus for Ata {
    fn record_status(&self) -> RecordStatus {
        self.base.status
    }
}

impl Searchable for Ata {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            &[
                self.base.description.as_str(),
                self.base.code.as_str(),
                self.location.display().as_str(),
                self.email.as_str(),
            ],
            needle,
        )
    }
}

impl Sortable for Ata {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.base.id.cmp(&other.base.id),
            "tax_id" => self.base.code.cmp(&other.base.code),
            "location" => cmp_text(&self.location.display(), &other.location.display()),
            "email" => cmp_text(&self.email, &other.email),
            "status" => self.base.status.cmp(&other.base.status),
            _ => cmp_text(&self.base.description, &other.base.description),
        }
    }
}

// ============================================================================
// Формы (DTO)
// ============================================================================

/// DTO для создания/обновления ATA
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtaDto {
    pub id: Option<String>,
    #[serde(rename = "razonSocial")]
    pub description: String,
    #[serde(rename = "cuit")]
    pub tax_id: String,
    #[serde(flatten)]
    pub location: LocationSelection,
    #[serde(rename = "direccion")]
    pub address: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_digit_tax_id_rejected() {
        let mut dto = Ata::demo_records()[0].to_form();
        dto.tax_id = "30-71234567-8".into();
        let errors = Ata::validate(&dto);
        assert_eq!(errors.get("tax_id"), Some("El CUIT debe contener solo números"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_tax_label_follows_country() {
        let mut dto = Ata::demo_records()[1].to_form();
        dto.tax_id = "7654321K".into();
        assert_eq!(
            Ata::validate(&dto).get("tax_id"),
            Some("El RUT debe contener solo números")
        );
    }

    #[test]
    fn test_demo_records_are_valid() {
        for ata in Ata::demo_records() {
            assert!(Ata::validate(&ata.to_form()).is_empty(), "{}", ata.base.description);
        }
    }
}
