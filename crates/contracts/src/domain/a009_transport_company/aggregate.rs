use crate::domain::common::{AggregateRoot, BaseAggregate, RecordStatus};
use crate::shared::list_query::{any_field_contains, cmp_text, HasStatus, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{normalize_key, parse_date, tax_id_subject, FieldErrors, FormValidator};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::sequential_id!(
    /// Последовательный идентификатор транспортной компании
    TransportCompanyId
);

pub const MIN_VEHICLE_YEAR: i64 = 1980;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum VehicleKind {
    #[default]
    Tractor,
    Semirremolque,
    CamionRigido,
    Furgon,
}

impl VehicleKind {
    pub fn all() -> &'static [VehicleKind] {
        &[
            VehicleKind::Tractor,
            VehicleKind::Semirremolque,
            VehicleKind::CamionRigido,
            VehicleKind::Furgon,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Tractor => "Tractor",
            VehicleKind::Semirremolque => "Semirremolque",
            VehicleKind::CamionRigido => "Camión rígido",
            VehicleKind::Furgon => "Furgón",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            VehicleKind::Tractor => "tractor",
            VehicleKind::Semirremolque => "semirremolque",
            VehicleKind::CamionRigido => "rigido",
            VehicleKind::Furgon => "furgon",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "patente")]
    pub plate: String,
    #[serde(rename = "tipo")]
    pub kind: VehicleKind,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "anio")]
    pub year: i32,
}

/// Форма транспортного средства
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleDto {
    #[serde(rename = "patente")]
    pub plate: String,
    #[serde(rename = "tipo")]
    pub kind: VehicleKind,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "anio")]
    pub year: String,
}

impl VehicleDto {
    /// `max_year` — текущий год + 1
    pub fn validate(&self, max_year: i64) -> FieldErrors {
        let mut v = FormValidator::new();
        v.required("plate", "La patente", &self.plate)
            .plate("plate", &self.plate)
            .required("brand", "La marca", &self.brand)
            .required("model", "El modelo", &self.model)
            .required("year", "El año", &self.year)
            .integer_between("year", "El año", &self.year, MIN_VEHICLE_YEAR, max_year);
        v.finish()
    }

    pub fn normalized_plate(&self) -> String {
        normalize_plate(&self.plate)
    }

    fn to_vehicle(&self) -> Vehicle {
        Vehicle {
            plate: self.normalized_plate(),
            kind: self.kind,
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            year: self.year.trim().parse().unwrap_or_default(),
        }
    }
}

/// Патент без пробелов в верхнем регистре: "ab 123 cd" == "AB123CD"
pub fn normalize_plate(plate: &str) -> String {
    plate.split_whitespace().collect::<String>().to_uppercase()
}

/// Международный перевозчик с разрешением и парком ТС
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportCompany {
    /// `code` = налоговый идентификатор, `description` = наименование
    #[serde(flatten)]
    pub base: BaseAggregate<TransportCompanyId>,

    #[serde(flatten)]
    pub location: LocationSelection,

    #[serde(rename = "direccion")]
    pub address: String,

    pub email: String,

    #[serde(rename = "telefono")]
    pub phone: String,

    #[serde(rename = "permisoInternacional")]
    pub permit_number: String,

    #[serde(rename = "vencimientoPermiso")]
    pub permit_expiry: NaiveDate,

    #[serde(rename = "flota")]
    pub fleet: Vec<Vehicle>,
}

impl TransportCompany {
    pub fn tax_id(&self) -> &str {
        &self.base.code
    }

    pub fn validate_company(dto: &TransportCompanyDto) -> FieldErrors {
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
            .required("phone", "El teléfono", &dto.phone)
            .phone("phone", &dto.phone);
        v.finish()
    }

    /// Формат полей разрешения; срок относительно «сегодня» проверяет мастер
    pub fn validate_permit(dto: &TransportCompanyDto) -> FieldErrors {
        let mut v = FormValidator::new();
        v.required("permit_number", "El número de permiso", &dto.permit_number)
            .min_length("permit_number", "El número de permiso", &dto.permit_number, 5)
            .required("permit_expiry", "La fecha de vencimiento", &dto.permit_expiry)
            .date("permit_expiry", "La fecha de vencimiento", &dto.permit_expiry);
        v.finish()
    }

    pub fn validate_fleet(vehicles: &[VehicleDto], max_year: i64) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if vehicles.is_empty() {
            errors.insert("fleet", "Agregue al menos un vehículo");
        }
        let mut seen: Vec<String> = Vec::new();
        for (i, vehicle) in vehicles.iter().enumerate() {
            errors.merge(vehicle.validate(max_year).prefixed(&format!("fleet.{}", i)));
            let plate = vehicle.normalized_plate();
            if !plate.is_empty() && seen.contains(&plate) {
                errors.insert(
                    format!("fleet.{}.plate", i),
                    "La patente ya fue cargada en la flota",
                );
            }
            seen.push(plate);
        }
        errors
    }

    pub fn validate(dto: &TransportCompanyDto) -> FieldErrors {
        let max_year = i64::from(Local::now().year()) + 1;
        let mut errors = Self::validate_company(dto);
        errors.merge(Self::validate_permit(dto));
        errors.merge(Self::validate_fleet(&dto.vehicles, max_year));
        errors
    }

    pub fn demo_records() -> Vec<TransportCompany> {
        let dto = TransportCompanyDto {
            id: None,
            description: "Expreso Cuyano SA".into(),
            tax_id: "30701234565".into(),
            location: LocationSelection::new("Argentina", "Mendoza", "Mendoza"),
            address: "Acceso Este 2500".into(),
            email: "trafico@expresocuyano.com.ar".into(),
            phone: "+54 261 4310000".into(),
            permit_number: "AR-CL-0457".into(),
            permit_expiry: "2026-12-31".into(),
            vehicles: vec![
                VehicleDto {
                    plate: "AB 123 CD".into(),
                    kind: VehicleKind::Tractor,
                    brand: "Scania".into(),
                    model: "R450".into(),
                    year: "2019".into(),
                },
                VehicleDto {
                    plate: "AC 456 EF".into(),
                    kind: VehicleKind::Semirremolque,
                    brand: "Helvética".into(),
                    model: "Sider 3 ejes".into(),
                    year: "2018".into(),
                },
            ],
        };
        vec![TransportCompany::from_form(TransportCompanyId(1), &dto)]
    }
}

impl AggregateRoot for TransportCompany {
    type Id = TransportCompanyId;
    type Form = TransportCompanyDto;

    crate::base_aggregate_accessors!(TransportCompanyId);

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "transport_company"
    }

    fn element_name() -> &'static str {
        "Empresa de transporte"
    }

    fn list_name() -> &'static str {
        "Empresas de transporte"
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

    fn validate_form(form: &TransportCompanyDto) -> FieldErrors {
        TransportCompany::validate(form)
    }

    fn form_code(form: &TransportCompanyDto) -> String {
        form.tax_id.clone()
    }

    fn form_description(form: &TransportCompanyDto) -> String {
        form.description.clone()
    }

    fn from_form(id: TransportCompanyId, form: &TransportCompanyDto) -> Self {
        let mut company = Self {
            base: BaseAggregate::new(id, "", ""),
            location: LocationSelection::default(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            permit_number: String::new(),
            permit_expiry: NaiveDate::default(),
            fleet: Vec::new(),
        };
        company.apply_form(form);
        company
    }

    fn to_form(&self) -> TransportCompanyDto {
        TransportCompanyDto {
            id: Some(self.base.id.to_string()),
            description: self.base.description.clone(),
            tax_id: self.base.code.clone(),
            location: self.location.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            permit_number: self.permit_number.clone(),
            permit_expiry: self.permit_expiry.format("%Y-%m-%d").to_string(),
            vehicles: self
                .fleet
                .iter()
                .map(|v| VehicleDto {
                    plate: v.plate.clone(),
                    kind: v.kind,
                    brand: v.brand.clone(),
                    model: v.model.clone(),
                    year: v.year.to_string(),
                })
                .collect(),
        }
    }

    fn apply_form(&mut self, form: &TransportCompanyDto) {
        self.base.rename(&form.tax_id, &form.description);
        self.location = form.location.clone();
        self.address = form.address.trim().to_string();
        self.email = form.email.trim().to_string();
        self.phone = form.phone.trim().to_string();
        self.permit_number = form.permit_number.trim().to_uppercase();
        self.permit_expiry = parse_date(&form.permit_expiry).unwrap_or_default();
        self.fleet = form.vehicles.iter().map(VehicleDto::to_vehicle).collect();
    }
}

impl HasStatus for TransportCompany {
    fn record_status(&self) -> RecordStatus {
        self.base.status
    }
}

impl Searchable for TransportCompany {
    fn matches_filter(&self, needle: &str) -> bool {
        self.fleet.iter().any(|v| v.plate.to_lowercase().contains(needle))
            || any_field_contains(
                &[
                    self.base.description.as_str(),
                    self.base.code.as_str(),
                    self.permit_number.as_str(),
                    self.location.display().as_str(),
                ],
                needle,
            )
    }
}

impl Sortable for TransportCompany {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.base.id.cmp(&other.base.id),
            "tax_id" => cmp_text(&self.base.code, &other.base.code),
            "permit_expiry" => self.permit_expiry.cmp(&other.permit_expiry),
            "fleet" => self.fleet.len().cmp(&other.fleet.len()),
            "status" => self.base.status.cmp(&other.base.status),
            _ => cmp_text(&self.base.description, &other.base.description),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportCompanyDto {
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
    #[serde(rename = "permisoInternacional")]
    pub permit_number: String,
    #[serde(rename = "vencimientoPermiso")]
    pub permit_expiry: String,
    #[serde(rename = "flota")]
    pub vehicles: Vec<VehicleDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::MemoryStore;

    #[test]
    fn test_duplicate_plate_in_fleet() {
        let mut vehicles = TransportCompany::demo_records()[0].to_form().vehicles;
        let mut copy = vehicles[0].clone();
        copy.plate = "ab123cd".into();
        vehicles.push(copy);
        let errors = TransportCompany::validate_fleet(&vehicles, 2027);
        assert_eq!(
            errors.get("fleet.2.plate"),
            Some("La patente ya fue cargada en la flota")
        );
    }

    #[test]
    fn test_empty_fleet_rejected() {
        let errors = TransportCompany::validate_fleet(&[], 2027);
        assert_eq!(errors.get("fleet"), Some("Agregue al menos un vehículo"));
    }

    #[test]
    fn test_store_rejects_duplicate_tax_id() {
        let mut store = MemoryStore::with_records(TransportCompany::demo_records());
        let mut dto = store.list()[0].to_form();
        dto.id = None;
        dto.description = "Otra Empresa SA".into();
        let err = store.create(&dto).unwrap_err();
        assert_eq!(
            err.field_errors().get("tax_id"),
            Some("Ya existe un registro con ese identificador fiscal")
        );
    }
}
