use crate::domain::common::{AggregateRoot, BaseAggregate, RecordStatus};
use crate::shared::list_query::{any_field_contains, cmp_text, HasStatus, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{tax_id_subject, FieldErrors, FormValidator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::sequential_id!(
    /// Последовательный идентификатор отправителя
    ShipperId
);

/// Отправитель, экспортёр
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipper {
    /// `code` = налоговый идентификатор, `description` = наименование
    #[serde(flatten)]
    pub base: BaseAggregate<ShipperId>,

    #[serde(flatten)]
    pub location: LocationSelection,

    #[serde(rename = "direccion")]
    pub address: String,

    pub email: String,

    #[serde(rename = "telefono")]
    pub phone: String,
}

impl Shipper {
    pub fn validate(dto: &ShipperDto) -> FieldErrors {
        let tax = tax_id_subject(&dto.location.country);
        let mut v = FormValidator::new();
        v.required("description", "La razón social", &dto.description)
            .required("tax_id", &tax, &dto.tax_id)
            .digits_only("tax_id", &tax, &dto.tax_id)
            .location(&dto.location)
            .required("address", "La dirección", &dto.address)
            .email("email", &dto.email)
            .phone("phone", &dto.phone);
        v.finish()
    }

    pub fn demo_records() -> Vec<Shipper> {
        let rows = [
            ("Bodegas Andinas SA", "30500011223", ("Argentina", "Mendoza", "Mendoza"), "Ruta 40 km 3250", "expo@bodegasandinas.com.ar"),
            ("Agroexport Pampa SRL", "30622233445", ("Argentina", "Córdoba", "Río Cuarto"), "Bv. Roca 455", "comex@agropampa.com.ar"),
            ("Metalúrgica Rosario SA", "30633344556", ("Argentina", "Santa Fe", "Rosario"), "Ovidio Lagos 5200", ""),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, tax, (country, province, city), address, email))| {
                let dto = ShipperDto {
                    id: None,
                    description: name.to_string(),
                    tax_id: tax.to_string(),
                    location: LocationSelection::new(country, province, city),
                    address: address.to_string(),
                    email: email.to_string(),
                    phone: String::new(),
                };
                Shipper::from_form(ShipperId(i as i64 + 1), &dto)
            })
            .collect()
    }
}

impl AggregateRoot for Shipper {
    type Id = ShipperId;
    type Form = ShipperDto;

    crate::base_aggregate_accessors!(ShipperId);

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "shipper"
    }

    fn element_name() -> &'static str {
        "Remitente"
    }

    fn list_name() -> &'static str {
        "Remitentes / Exportadores"
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

    fn validate_form(form: &ShipperDto) -> FieldErrors {
        Shipper::validate(form)
    }

    fn form_code(form: &ShipperDto) -> String {
        form.tax_id.clone()
    }

    fn form_description(form: &ShipperDto) -> String {
        form.description.clone()
    }

    fn from_form(id: ShipperId, form: &ShipperDto) -> Self {
        let mut shipper = Self {
            base: BaseAggregate::new(id, "", ""),
            location: LocationSelection::default(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
        };
        shipper.apply_form(form);
        shipper
    }

    fn to_form(&self) -> ShipperDto {
        ShipperDto {
            id: Some(self.base.id.to_string()),
            description: self.base.description.clone(),
            tax_id: self.base.code.clone(),
            location: self.location.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    fn apply_form(&mut self, form: &ShipperDto) {
        self.base.rename(&form.tax_id, &form.description);
        self.location = form.location.clone();
        self.address = form.address.trim().to_string();
        self.email = form.email.trim().to_string();
        self.phone = form.phone.trim().to_string();
    }
}

impl HasStatus for Shipper {
    fn record_status(&self) -> RecordStatus {
        self.base.status
    }
}

impl Searchable for Shipper {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            &[
                self.base.description.as_str(),
                self.base.code.as_str(),
                self.location.display().as_str(),
            ],
            needle,
        )
    }
}

impl Sortable for Shipper {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.base.id.cmp(&other.base.id),
            "tax_id" => self.base.code.cmp(&other.base.code),
            "location" => cmp_text(&self.location.display(), &other.location.display()),
            "status" => self.base.status.cmp(&other.base.status),
            _ => cmp_text(&self.base.description, &other.base.description),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipperDto {
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
    use crate::domain::common::MemoryStore;

    #[test]
    fn test_email_is_optional_but_checked() {
        let mut dto = Shipper::demo_records()[2].to_form();
        assert!(Shipper::validate(&dto).is_empty());
        dto.email = "sin-arroba".into();
        assert!(Shipper::validate(&dto).contains("email"));
    }

    #[test]
    fn test_edit_keeps_own_name_and_tax_id() {
        let mut store = MemoryStore::with_records(Shipper::demo_records());
        let mut dto = store.get(ShipperId(1)).unwrap().to_form();
        dto.phone = "+54 261 4250000".into();
        assert!(store.update(ShipperId(1), &dto).is_ok());

        // наименование другой записи считается дубликатом
        dto.description = "agroexport pampa srl".into();
        assert!(store.update(ShipperId(1), &dto).is_err());
    }
}
