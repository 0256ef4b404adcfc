use crate::domain::common::{AggregateRoot, BaseAggregate, RecordStatus};
use crate::shared::list_query::{any_field_contains, cmp_text, HasStatus, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{tax_id_subject, FieldErrors, FormValidator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::sequential_id!(
    /// Последовательный идентификатор брокера
    DispatcherId
);

/// Таможенный брокер (despachante)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispatcher {
    /// `code` = CUIT, `description` = имя или наименование
    #[serde(flatten)]
    pub base: BaseAggregate<DispatcherId>,

    /// Лицензия брокера в таможне
    #[serde(rename = "matricula")]
    pub license_number: String,

    pub email: String,

    #[serde(rename = "telefono")]
    pub phone: String,

    #[serde(flatten)]
    pub location: LocationSelection,

    #[serde(rename = "direccion")]
    pub address: String,
}

impl Dispatcher {
    pub fn validate(dto: &DispatcherDto) -> FieldErrors {
        let tax = tax_id_subject(&dto.location.country);
        let mut v = FormValidator::new();
        v.required("description", "El nombre", &dto.description)
            .required("tax_id", &tax, &dto.tax_id)
            .digits_only("tax_id", &tax, &dto.tax_id)
            .required("license_number", "La matrícula", &dto.license_number)
            .required("email", "El email", &dto.email)
            .email("email", &dto.email)
            .phone("phone", &dto.phone)
            .location(&dto.location)
            .required("address", "La dirección", &dto.address);
        v.finish()
    }

    pub fn demo_records() -> Vec<Dispatcher> {
        let rows = [
            ("Martínez, Laura Beatriz", "27284561237", "D-4512", "lmartinez@despachos.com.ar", ("Argentina", "Buenos Aires", "Buenos Aires"), "Reconquista 458 3°B"),
            ("Despachos Integrales Cuyo SRL", "30715566778", "D-3390", "info@dicuyo.com.ar", ("Argentina", "Mendoza", "Mendoza"), "San Martín 1220"),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, tax, license, email, (country, province, city), address))| {
                let dto = DispatcherDto {
                    id: None,
                    description: name.to_string(),
                    tax_id: tax.to_string(),
                    license_number: license.to_string(),
                    email: email.to_string(),
                    phone: String::new(),
                    location: LocationSelection::new(country, province, city),
                    address: address.to_string(),
                };
                Dispatcher::from_form(DispatcherId(i as i64 + 1), &dto)
            })
            .collect()
    }
}

impl AggregateRoot for Dispatcher {
    type Id = DispatcherId;
    type Form = DispatcherDto;

    crate::base_aggregate_accessors!(DispatcherId);

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "dispatcher"
    }

    fn element_name() -> &'static str {
        "Despachante"
    }

    fn list_name() -> &'static str {
        "Despachantes"
    }

    fn code_label() -> &'static str {
        "ese identificador fiscal"
    }

    fn description_label() -> &'static str {
        "ese nombre"
    }

    fn code_field() -> &'static str {
        "tax_id"
    }

    fn validate_form(form: &DispatcherDto) -> FieldErrors {
        Dispatcher::validate(form)
    }

    fn form_code(form: &DispatcherDto) -> String {
        form.tax_id.clone()
    }

    fn form_description(form: &DispatcherDto) -> String {
        form.description.clone()
    }

    fn from_form(id: DispatcherId, form: &DispatcherDto) -> Self {
        let mut dispatcher = Self {
            base: BaseAggregate::new(id, "", ""),
            license_number: String::new(),
            email: String::new(),
            phone: String::new(),
            location: LocationSelection::default(),
            address: String::new(),
        };
        dispatcher.apply_form(form);
        dispatcher
    }

    fn to_form(&self) -> DispatcherDto {
        DispatcherDto {
            id: Some(self.base.id.to_string()),
            description: self.base.description.clone(),
            tax_id: self.base.code.clone(),
            license_number: self.license_number.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            address: self.address.clone(),
        }
    }

    fn apply_form(&mut self, form: &DispatcherDto) {
        self.base.rename(&form.tax_id, &form.description);
        self.license_number = form.license_number.trim().to_uppercase();
        self.email = form.email.trim().to_string();
        self.phone = form.phone.trim().to_string();
        self.location = form.location.clone();
        self.address = form.address.trim().to_string();
    }
}

impl HasStatus for Dispatcher {
    fn record_status(&self) -> RecordStatus {
        self.base.status
    }
}

impl Searchable for Dispatcher {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            &[
                self.base.description.as_str(),
                self.base.code.as_str(),
                self.license_number.as_str(),
                self.email.as_str(),
            ],
            needle,
        )
    }
}

impl Sortable for Dispatcher {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.base.id.cmp(&other.base.id),
            "tax_id" => self.base.code.cmp(&other.base.code),
            "license_number" => cmp_text(&self.license_number, &other.license_number),
            "email" => cmp_text(&self.email, &other.email),
            "status" => self.base.status.cmp(&other.base.status),
            _ => cmp_text(&self.base.description, &other.base.description),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatcherDto {
    pub id: Option<String>,
    #[serde(rename = "nombre")]
    pub description: String,
    #[serde(rename = "cuit")]
    pub tax_id: String,
    #[serde(rename = "matricula")]
    pub license_number: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(flatten)]
    pub location: LocationSelection,
    #[serde(rename = "direccion")]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_and_email_required() {
        let mut dto = Dispatcher::demo_records()[0].to_form();
        dto.license_number = " ".into();
        dto.email = "laura@".into();
        let errors = Dispatcher::validate(&dto);
        assert_eq!(errors.get("license_number"), Some("La matrícula es obligatoria"));
        assert_eq!(errors.get("email"), Some("Ingrese un email válido"));
    }

    #[test]
    fn test_license_is_normalized() {
        let mut dto = Dispatcher::demo_records()[1].to_form();
        dto.license_number = " d-77 ".into();
        let mut record = Dispatcher::demo_records()[1].clone();
        record.apply_form(&dto);
        assert_eq!(record.license_number, "D-77");
    }
}
