use crate::domain::common::{AggregateRoot, BaseAggregate, RecordStatus};
use crate::shared::list_query::{any_field_contains, cmp_text, HasStatus, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{tax_id_subject, FieldErrors, FormValidator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::sequential_id!(
    /// Последовательный идентификатор получателя
    ConsigneeId
);

/// Импортёр, получатель груза
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consignee {
    /// `code` = налоговый идентификатор, `description` = наименование
    #[serde(flatten)]
    pub base: BaseAggregate<ConsigneeId>,

    #[serde(flatten)]
    pub location: LocationSelection,

    #[serde(rename = "direccion")]
    pub address: String,

    pub email: String,

    #[serde(rename = "telefono")]
    pub phone: String,
}

impl Consignee {
    pub fn validate(dto: &ConsigneeDto) -> FieldErrors {
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

    pub fn demo_records() -> Vec<Consignee> {
        let rows = [
            ("Distribuidora Pacífico Ltda", "965432109", ("Chile", "Región Metropolitana", "Santiago"), "Av. Américo Vespucio 2200", "importaciones@dpacifico.cl"),
            ("Comercial Gaúcha Ltda", "12345678000190", ("Brasil", "Rio Grande do Sul", "Porto Alegre"), "Av. Sertório 1500", "compras@gaucha.com.br"),
            ("Importadora Oriental SA", "214455660017", ("Uruguay", "Montevideo", "Montevideo"), "Rambla Sur 1030", ""),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, tax, (country, province, city), address, email))| {
                let dto = ConsigneeDto {
                    id: None,
                    description: name.to_string(),
                    tax_id: tax.to_string(),
                    location: LocationSelection::new(country, province, city),
                    address: address.to_string(),
                    email: email.to_string(),
                    phone: String::new(),
                };
                Consignee::from_form(ConsigneeId(i as i64 + 1), &dto)
            })
            .collect()
    }
}

impl AggregateRoot for Consignee {
    type Id = ConsigneeId;
    type Form = ConsigneeDto;

    crate::base_aggregate_accessors!(ConsigneeId);

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "consignee"
    }

    fn element_name() -> &'static str {
        "Importador"
    }

    fn list_name() -> &'static str {
        "Importadores / Destinatarios"
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

    fn validate_form(form: &ConsigneeDto) -> FieldErrors {
        Consignee::validate(form)
    }

    fn form_code(form: &ConsigneeDto) -> String {
        form.tax_id.clone()
    }

    fn form_description(form: &ConsigneeDto) -> String {
        form.description.clone()
    }

    fn from_form(id: ConsigneeId, form: &ConsigneeDto) -> Self {
        let mut consignee = Self {
            base: BaseAggregate::new(id, "", ""),
            location: LocationSelection::default(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
        };
        consignee.apply_form(form);
        consignee
    }

    fn to_form(&self) -> ConsigneeDto {
        ConsigneeDto {
            id: Some(self.base.id.to_string()),
            description: self.base.description.clone(),
            tax_id: self.base.code.clone(),
            location: self.location.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    fn apply_form(&mut self, form: &ConsigneeDto) {
        self.base.rename(&form.tax_id, &form.description);
        self.location = form.location.clone();
        self.address = form.address.trim().to_string();
        self.email = form.email.trim().to_string();
        self.phone = form.phone.trim().to_string();
    }
}

impl HasStatus for Consignee {
    fn record_status(&self) -> RecordStatus {
        self.base.status
    }
}

impl Searchable for Consignee {
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

impl Sortable for Consignee {
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
pub struct ConsigneeDto {
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
    use crate::shared::list_query::ListQuery;

    #[test]
    fn test_tax_label_for_brazilian_consignee() {
        let mut dto = Consignee::demo_records()[1].to_form();
        dto.tax_id = "12.345.678/0001-90".into();
        assert_eq!(
            Consignee::validate(&dto).get("tax_id"),
            Some("El CNPJ debe contener solo números")
        );
    }

    #[test]
    fn test_search_by_country() {
        let mut q = ListQuery::new("description", 25);
        q.search = "uruguay".into();
        let page = q.apply(&Consignee::demo_records(), 1);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].base.description, "Importadora Oriental SA");
    }
}
