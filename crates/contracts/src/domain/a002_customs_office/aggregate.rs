use crate::domain::common::{AggregateRoot, BaseAggregate, RecordStatus};
use crate::shared::list_query::{any_field_contains, cmp_text, HasStatus, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{FieldErrors, FormValidator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::sequential_id!(
    /// Последовательный идентификатор таможни
    CustomsOfficeId
);

/// Таможня (пограничная или внутренняя)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsOffice {
    /// `code` = код таможни, `description` = название
    #[serde(flatten)]
    pub base: BaseAggregate<CustomsOfficeId>,

    #[serde(flatten)]
    pub location: LocationSelection,

    #[serde(rename = "direccion")]
    pub address: String,
}

impl CustomsOffice {
    pub fn validate(dto: &CustomsOfficeDto) -> FieldErrors {
        let mut v = FormValidator::new();
        v.required("code", "El código", &dto.code)
            .digits_only("code", "El código", &dto.code)
            .min_length("code", "El código", &dto.code, 3)
            .required("description", "El nombre", &dto.description)
            .location(&dto.location)
            .required("address", "La dirección", &dto.address);
        v.finish()
    }

    pub fn demo_records() -> Vec<CustomsOffice> {
        let rows = [
            ("001", "Aduana de Buenos Aires", ("Argentina", "Buenos Aires", "Buenos Aires"), "Azopardo 350"),
            ("073", "Aduana de Mendoza", ("Argentina", "Mendoza", "Mendoza"), "Peltier 611"),
            ("046", "Aduana de Paso de los Libres", ("Argentina", "Corrientes", "Paso de los Libres"), "Av. San Martín 1100"),
            ("034", "Aduana Los Andes", ("Chile", "Valparaíso", "Los Andes"), "Complejo Fronterizo Los Libertadores"),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (code, name, (country, province, city), address))| {
                let dto = CustomsOfficeDto {
                    id: None,
                    code: code.to_string(),
                    description: name.to_string(),
                    location: LocationSelection::new(country, province, city),
                    address: address.to_string(),
                };
                CustomsOffice::from_form(CustomsOfficeId(i as i64 + 1), &dto)
            })
            .collect()
    }
}

impl AggregateRoot for CustomsOffice {
    type Id = CustomsOfficeId;
    type Form = CustomsOfficeDto;

    crate::base_aggregate_accessors!(CustomsOfficeId);

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "customs_office"
    }

    fn element_name() -> &'static str {
        "Aduana"
    }

    fn list_name() -> &'static str {
        "Aduanas"
    }

    fn description_label() -> &'static str {
        "ese nombre"
    }

    fn validate_form(form: &CustomsOfficeDto) -> FieldErrors {
        CustomsOffice::validate(form)
    }

    fn form_code(form: &CustomsOfficeDto) -> String {
        form.code.clone()
    }

    fn form_description(form: &CustomsOfficeDto) -> String {
        form.description.clone()
    }

    fn from_form(id: CustomsOfficeId, form: &CustomsOfficeDto) -> Self {
        let mut office = Self {
            base: BaseAggregate::new(id, "", ""),
            location: LocationSelection::default(),
            address: String::new(),
        };
        office.apply_form(form);
        office
    }

    fn to_form(&self) -> CustomsOfficeDto {
        CustomsOfficeDto {
            id: Some(self.base.id.to_string()),
            code: self.base.code.clone(),
            description: self.base.description.clone(),
            location: self.location.clone(),
            address: self.address.clone(),
        }
    }

    fn apply_form(&mut self, form: &CustomsOfficeDto) {
        self.base.rename(&form.code, &form.description);
        self.location = form.location.clone();
        self.address = form.address.trim().to_string();
    }
}

impl HasStatus for CustomsOffice {
    fn record_status(&self) -> RecordStatus {
        self.base.status
    }
}

impl Searchable for CustomsOffice {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            &[
                self.base.code.as_str(),
                self.base.description.as_str(),
                self.location.display().as_str(),
            ],
            needle,
        )
    }
}

impl Sortable for CustomsOffice {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.base.id.cmp(&other.base.id),
            "code" => self.base.code.cmp(&other.base.code),
            "location" => cmp_text(&self.location.display(), &other.location.display()),
            "status" => self.base.status.cmp(&other.base.status),
            _ => cmp_text(&self.base.description, &other.base.description),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomsOfficeDto {
    pub id: Option<String>,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub description: String,
    #[serde(flatten)]
    pub location: LocationSelection,
    #[serde(rename = "direccion")]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::MemoryStore;

    #[test]
    fn test_code_rules() {
        let mut dto = CustomsOffice::demo_records()[0].to_form();
        dto.code = "01".into();
        assert_eq!(
            CustomsOffice::validate(&dto).get("code"),
            Some("El código debe tener al menos 3 caracteres")
        );
        dto.code = "0A1".into();
        assert_eq!(
            CustomsOffice::validate(&dto).get("code"),
            Some("El código debe contener solo números")
        );
    }

    #[test]
    fn test_duplicate_code_against_seed() {
        let mut store = MemoryStore::with_records(CustomsOffice::demo_records());
        let dto = CustomsOfficeDto {
            id: None,
            code: "073".into(),
            description: "Aduana de San Rafael".into(),
            location: LocationSelection::new("Argentina", "Mendoza", "San Rafael"),
            address: "Av. Mitre 10".into(),
        };
        let err = store.create(&dto).unwrap_err();
        assert_eq!(
            err.field_errors().get("code"),
            Some("Ya existe un registro con ese código")
        );
        assert_eq!(store.len(), 4);
    }
}
