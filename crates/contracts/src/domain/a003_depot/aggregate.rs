use crate::domain::common::{AggregateRoot, BaseAggregate, RecordStatus};
use crate::shared::list_query::{any_field_contains, cmp_text, HasStatus, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{parse_number, FieldErrors, FormValidator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::sequential_id!(
    /// Последовательный идентификатор склада
    DepotId
);

/// Таможенный склад или контейнерная площадка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    /// Без налогового ключа: `code` пустой, `description` = описание
    #[serde(flatten)]
    pub base: BaseAggregate<DepotId>,

    #[serde(flatten)]
    pub location: LocationSelection,

    #[serde(rename = "direccion")]
    pub address: String,

    #[serde(rename = "latitud")]
    pub latitude: f64,

    #[serde(rename = "longitud")]
    pub longitude: f64,
}

impl Depot {
    pub fn validate(dto: &DepotDto) -> FieldErrors {
        let mut v = FormValidator::new();
        v.required("description", "La descripción", &dto.description)
            .location(&dto.location)
            .required("address", "La dirección", &dto.address)
            .required("latitude", "La latitud", &dto.latitude)
            .latitude("latitude", &dto.latitude)
            .required("longitude", "La longitud", &dto.longitude)
            .longitude("longitude", &dto.longitude);
        v.finish()
    }

    pub fn coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    pub fn demo_records() -> Vec<Depot> {
        let rows = [
            ("Depósito Fiscal Dock Sud", ("Argentina", "Buenos Aires", "Buenos Aires"), "Av. Debenedetti 1300", "-34.6481", "-58.3426"),
            ("Terminal Zárate-Campana", ("Argentina", "Buenos Aires", "Campana"), "Ruta 12 km 81", "-34.1633", "-58.9592"),
            ("Depósito Rosario Norte", ("Argentina", "Santa Fe", "Rosario"), "Av. Sorrento 3500", "-32.8986", "-60.7045"),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, (country, province, city), address, lat, lng))| {
                let dto = DepotDto {
                    id: None,
                    description: name.to_string(),
                    location: LocationSelection::new(country, province, city),
                    address: address.to_string(),
                    latitude: lat.to_string(),
                    longitude: lng.to_string(),
                };
                Depot::from_form(DepotId(i as i64 + 1), &dto)
            })
            .collect()
    }
}

impl AggregateRoot for Depot {
    type Id = DepotId;
    type Form = DepotDto;

    crate::base_aggregate_accessors!(DepotId);

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "depot"
    }

    fn element_name() -> &'static str {
        "Depósito"
    }

    fn list_name() -> &'static str {
        "Depósitos"
    }

    fn validate_form(form: &DepotDto) -> FieldErrors {
        Depot::validate(form)
    }

    fn form_code(_form: &DepotDto) -> String {
        String::new()
    }

    fn form_description(form: &DepotDto) -> String {
        form.description.clone()
    }

    fn from_form(id: DepotId, form: &DepotDto) -> Self {
        let mut depot = Self {
            base: BaseAggregate::new(id, "", ""),
            location: LocationSelection::default(),
            address: String::new(),
            latitude: 0.0,
            longitude: 0.0,
        };
        depot.apply_form(form);
        depot
    }

    fn to_form(&self) -> DepotDto {
        DepotDto {
            id: Some(self.base.id.to_string()),
            description: self.base.description.clone(),
            location: self.location.clone(),
            address: self.address.clone(),
            latitude: self.latitude.to_string(),
            longitude: self.longitude.to_string(),
        }
    }

    fn apply_form(&mut self, form: &DepotDto) {
        self.base.rename("", &form.description);
        self.location = form.location.clone();
        self.address = form.address.trim().to_string();
        self.latitude = parse_number(&form.latitude).unwrap_or_default();
        self.longitude = parse_number(&form.longitude).unwrap_or_default();
    }
}

impl HasStatus for Depot {
    fn record_status(&self) -> RecordStatus {
        self.base.status
    }
}

impl Searchable for Depot {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            &[
                self.base.description.as_str(),
                self.address.as_str(),
                self.location.display().as_str(),
            ],
            needle,
        )
    }
}

impl Sortable for Depot {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.base.id.cmp(&other.base.id),
            "location" => cmp_text(&self.location.display(), &other.location.display()),
            "address" => cmp_text(&self.address, &other.address),
            "status" => self.base.status.cmp(&other.base.status),
            _ => cmp_text(&self.base.description, &other.base.description),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepotDto {
    pub id: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(flatten)]
    pub location: LocationSelection,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "latitud")]
    pub latitude: String,
    #[serde(rename = "longitud")]
    pub longitude: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::MemoryStore;

    fn test_depot_form() -> DepotDto {
        DepotDto {
            id: None,
            description: "Test Depot".into(),
            location: LocationSelection::new("Argentina", "Buenos Aires", "Buenos Aires"),
            address: "Calle 1".into(),
            latitude: "-34.0".into(),
            longitude: "-58.0".into(),
        }
    }

    #[test]
    fn test_create_depot_end_to_end() {
        let mut store = MemoryStore::with_records(Depot::demo_records());
        let before = store.len();

        let id = store.create(&test_depot_form()).unwrap();

        assert_eq!(store.len(), before + 1);
        assert_eq!(id, DepotId(before as i64 + 1));
        let depot = store.get(id).unwrap();
        assert_eq!(depot.base.status, RecordStatus::Activo);
        assert_eq!(depot.base.description, "Test Depot");
        assert_eq!(depot.latitude, -34.0);
        assert_eq!(depot.longitude, -58.0);
    }

    #[test]
    fn test_blank_form_reports_every_field() {
        let mut store = MemoryStore::with_records(Depot::demo_records());
        let err = store.create(&DepotDto::default()).unwrap_err();
        let errors = err.field_errors();
        for key in ["description", "country", "province", "city", "address", "latitude", "longitude"] {
            assert!(errors.get(key).map_or(false, |m| !m.is_empty()), "missing {key}");
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_description_is_case_insensitive() {
        let mut store = MemoryStore::with_records(Depot::demo_records());
        store.create(&test_depot_form()).unwrap();
        let mut again = test_depot_form();
        again.description = "TEST DEPOT".into();
        let err = store.create(&again).unwrap_err();
        assert_eq!(
            err.field_errors().get("description"),
            Some("Ya existe un registro con esa descripción")
        );
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let mut store = MemoryStore::with_records(Depot::demo_records());
        assert_eq!(store.toggle_status(DepotId(2)).unwrap(), RecordStatus::Inactivo);
        assert_eq!(store.toggle_status(DepotId(2)).unwrap(), RecordStatus::Activo);
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut dto = test_depot_form();
        dto.latitude = "-95".into();
        dto.longitude = "abc".into();
        let errors = Depot::validate(&dto);
        assert!(errors.contains("latitude"));
        assert!(errors.contains("longitude"));
    }
}
