//! Мастер создания груза: General → Ruta → Mercadería → Viajes → Documentos → Revisión.
//!
//! Каждый шаг проверяется при переходе вперёд; `finish` проверяет все шаги
//! повторно и собирает `Cargo`.

use super::aggregate::{Cargo, CargoId, GoodsInfo, Trip, TripStatus};
use crate::shared::config::UploadConfig;
use crate::shared::documents::DocumentAttachment;
use crate::shared::location::LocationSelection;
use crate::shared::validation::{normalize_key, parse_date, parse_number, FieldErrors, FormValidator};
use crate::shared::wizard::{StepCursor, WizardError, WizardStep};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CargoStep {
    General,
    Route,
    Goods,
    Trips,
    Documents,
    Review,
}

impl WizardStep for CargoStep {
    fn all() -> &'static [Self] {
        &[
            CargoStep::General,
            CargoStep::Route,
            CargoStep::Goods,
            CargoStep::Trips,
            CargoStep::Documents,
            CargoStep::Review,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            CargoStep::General => "General",
            CargoStep::Route => "Ruta",
            CargoStep::Goods => "Mercadería",
            CargoStep::Trips => "Viajes",
            CargoStep::Documents => "Documentos",
            CargoStep::Review => "Revisión",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CargoGeneralDto {
    #[serde(rename = "referencia")]
    pub reference: String,
    #[serde(rename = "remitente")]
    pub shipper: String,
    #[serde(rename = "destinatario")]
    pub consignee: String,
    #[serde(rename = "aduanaOrigen")]
    pub origin_customs: String,
    #[serde(rename = "aduanaDestino")]
    pub destination_customs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CargoRouteDto {
    #[serde(rename = "origen")]
    pub origin: LocationSelection,
    #[serde(rename = "destino")]
    pub destination: LocationSelection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoodsDto {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "bultos")]
    pub packages: String,
    #[serde(rename = "pesoBrutoKg")]
    pub gross_weight_kg: String,
    #[serde(rename = "valorDeclaradoUsd")]
    pub declared_value_usd: String,
}

/// Черновик рейса из формы «Agregar viaje»
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    #[serde(rename = "chofer")]
    pub driver: String,
    #[serde(rename = "patenteTractor")]
    pub tractor_plate: String,
    #[serde(rename = "patenteSemi")]
    pub trailer_plate: String,
    #[serde(rename = "contenedor")]
    pub container: String,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "salida")]
    pub departure: String,
    pub eta: String,
}

impl TripDraft {
    pub fn validate(&self) -> FieldErrors {
        let mut v = FormValidator::new();
        v.required("driver", "El chofer", &self.driver)
            .required("tractor_plate", "La patente del tractor", &self.tractor_plate)
            .plate("tractor_plate", &self.tractor_plate)
            .plate("trailer_plate", &self.trailer_plate)
            .required("container", "El contenedor", &self.container)
            .container("container", &self.container)
            .required("origin", "El origen", &self.origin)
            .required("destination", "El destino", &self.destination)
            .required("departure", "La fecha de salida", &self.departure)
            .date("departure", "La fecha de salida", &self.departure)
            .required("eta", "La fecha estimada de llegada", &self.eta)
            .date("eta", "La fecha estimada de llegada", &self.eta);

        if let (Some(departure), Some(eta)) = (parse_date(&self.departure), parse_date(&self.eta)) {
            if eta < departure {
                v.error("eta", "La llegada estimada no puede ser anterior a la salida");
            }
        }
        v.finish()
    }

    fn to_trip(&self, number: u32) -> Option<Trip> {
        Some(Trip {
            number,
            driver: self.driver.trim().to_string(),
            tractor_plate: self.tractor_plate.trim().to_uppercase(),
            trailer_plate: self.trailer_plate.trim().to_uppercase(),
            container: self.container.trim().to_uppercase(),
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            departure: parse_date(&self.departure)?,
            eta: parse_date(&self.eta)?,
            status: TripStatus::Programado,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CargoWizard {
    cursor: StepCursor<CargoStep>,
    pub general: CargoGeneralDto,
    pub route: CargoRouteDto,
    pub goods: GoodsDto,
    trips: Vec<Trip>,
    attachments: Vec<DocumentAttachment>,
    uploads: UploadConfig,
}

impl CargoWizard {
    pub fn new(uploads: UploadConfig) -> Self {
        Self {
            cursor: StepCursor::new(),
            general: CargoGeneralDto::default(),
            route: CargoRouteDto::default(),
            goods: GoodsDto::default(),
            trips: Vec::new(),
            attachments: Vec::new(),
            uploads,
        }
    }

    pub fn step(&self) -> CargoStep {
        self.cursor.current()
    }

    pub fn is_visited(&self, step: CargoStep) -> bool {
        self.cursor.is_visited(step)
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn attachments(&self) -> &[DocumentAttachment] {
        &self.attachments
    }

    pub fn validate_step(&self, step: CargoStep) -> FieldErrors {
        match step {
            CargoStep::General => {
                let g = &self.general;
                let mut v = FormValidator::new();
                v.required("reference", "La referencia", &g.reference)
                    .required("shipper", "El remitente", &g.shipper)
                    .required("consignee", "El destinatario", &g.consignee)
                    .required("origin_customs", "La aduana de origen", &g.origin_customs)
                    .required("destination_customs", "La aduana de destino", &g.destination_customs);
                if !g.origin_customs.trim().is_empty()
                    && normalize_key(&g.origin_customs) == normalize_key(&g.destination_customs)
                {
                    v.error(
                        "destination_customs",
                        "La aduana de destino debe ser distinta de la de origen",
                    );
                }
                v.finish()
            }
            CargoStep::Route => {
                let mut origin = FormValidator::new();
                origin.location(&self.route.origin);
                let mut destination = FormValidator::new();
                destination.location(&self.route.destination);

                let mut errors = origin.finish().prefixed("origin");
                errors.merge(destination.finish().prefixed("destination"));
                errors
            }
            CargoStep::Goods => {
                let g = &self.goods;
                let mut v = FormValidator::new();
                v.required("description", "La descripción", &g.description)
                    .required("packages", "La cantidad de bultos", &g.packages)
                    .integer_between("packages", "La cantidad de bultos", &g.packages, 1, 1_000_000)
                    .required("gross_weight_kg", "El peso bruto", &g.gross_weight_kg)
                    .positive_number("gross_weight_kg", "El peso bruto", &g.gross_weight_kg)
                    .required("declared_value_usd", "El valor declarado", &g.declared_value_usd)
                    .positive_number("declared_value_usd", "El valor declarado", &g.declared_value_usd);
                v.finish()
            }
            CargoStep::Trips => {
                let mut errors = FieldErrors::new();
                if self.trips.is_empty() {
                    errors.insert("trips", "Agregue al menos un viaje");
                }
                errors
            }
            CargoStep::Documents | CargoStep::Review => FieldErrors::new(),
        }
    }

    fn check(&self, step: CargoStep) -> Result<(), WizardError> {
        let errors = self.validate_step(step);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(WizardError::InvalidStep {
                step: step.label(),
                errors,
            })
        }
    }

    /// Вперёд только если текущий шаг валиден
    pub fn next(&mut self) -> Result<CargoStep, WizardError> {
        self.check(self.step())?;
        let step = self.cursor.advance()?;
        log::debug!("cargo wizard -> {}", step.label());
        Ok(step)
    }

    pub fn back(&mut self) -> Result<CargoStep, WizardError> {
        self.cursor.back()
    }

    pub fn go_to(&mut self, step: CargoStep) -> Result<CargoStep, WizardError> {
        self.cursor.go_to(step)
    }

    /// Открыть первый шаг с ошибками, например после отказа `finish`
    pub fn open_first_invalid(&mut self) -> Option<CargoStep> {
        let step = CargoStep::all()
            .iter()
            .copied()
            .find(|s| !self.validate_step(*s).is_empty())?;
        self.cursor.go_to(step).ok()
    }

    /// Добавить рейс; номер = следующий по порядку
    pub fn add_trip(&mut self, draft: &TripDraft) -> Result<u32, WizardError> {
        let errors = draft.validate();
        let trip = match draft.to_trip(self.trips.len() as u32 + 1) {
            Some(trip) if errors.is_empty() => trip,
            _ => {
                return Err(WizardError::InvalidStep {
                    step: CargoStep::Trips.label(),
                    errors,
                })
            }
        };
        let number = trip.number;
        self.trips.push(trip);
        Ok(number)
    }

    /// Удалить рейс по позиции; оставшиеся перенумеровываются
    pub fn remove_trip(&mut self, index: usize) -> Option<Trip> {
        if index >= self.trips.len() {
            return None;
        }
        let removed = self.trips.remove(index);
        for (i, trip) in self.trips.iter_mut().enumerate() {
            trip.number = i as u32 + 1;
        }
        Some(removed)
    }

    pub fn add_attachment(&mut self, attachment: DocumentAttachment) -> Result<Uuid, WizardError> {
        attachment.validate(&self.uploads).map_err(WizardError::Rejected)?;
        let handle = attachment.handle;
        self.attachments.push(attachment);
        Ok(handle)
    }

    pub fn remove_attachment(&mut self, handle: Uuid) -> Option<DocumentAttachment> {
        let index = self.attachments.iter().position(|a| a.handle == handle)?;
        Some(self.attachments.remove(index))
    }

    /// Проверить все шаги и собрать груз. ID строится из `now`.
    pub fn finish(&self, now: NaiveDateTime) -> Result<Cargo, WizardError> {
        for step in CargoStep::all() {
            self.check(*step)?;
        }

        let cargo = Cargo {
            id: CargoId::from_timestamp(now),
            reference: self.general.reference.trim().to_string(),
            shipper: self.general.shipper.trim().to_string(),
            consignee: self.general.consignee.trim().to_string(),
            origin_customs: self.general.origin_customs.trim().to_string(),
            destination_customs: self.general.destination_customs.trim().to_string(),
            origin: self.route.origin.clone(),
            destination: self.route.destination.clone(),
            goods: GoodsInfo {
                description: self.goods.description.trim().to_string(),
                packages: self.goods.packages.trim().parse().unwrap_or_default(),
                gross_weight_kg: parse_number(&self.goods.gross_weight_kg).unwrap_or_default(),
                declared_value_usd: parse_number(&self.goods.declared_value_usd).unwrap_or_default(),
            },
            trips: self.trips.clone(),
            attachments: self.attachments.clone(),
            created_at: now,
        };
        log::info!("cargo {} created with {} trips", cargo.id, cargo.trips.len());
        Ok(cargo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::documents::DocumentKind;
    use chrono::NaiveDate;

    fn draft() -> TripDraft {
        TripDraft {
            driver: "Juan Pérez".into(),
            tractor_plate: "ab 123 cd".into(),
            trailer_plate: "AC456EF".into(),
            container: "MSCU1234567".into(),
            origin: "Mendoza".into(),
            destination: "Santiago".into(),
            departure: "2024-03-05".into(),
            eta: "2024-03-07".into(),
        }
    }

    fn filled_wizard() -> CargoWizard {
        let mut w = CargoWizard::new(UploadConfig::default());
        w.general = CargoGeneralDto {
            reference: "EXP-1".into(),
            shipper: "Bodegas Andinas SA".into(),
            consignee: "Distribuidora Pacífico Ltda".into(),
            origin_customs: "Mendoza".into(),
            destination_customs: "Los Andes".into(),
        };
        w.next().unwrap();
        w.route = CargoRouteDto {
            origin: LocationSelection::new("Argentina", "Mendoza", "Mendoza"),
            destination: LocationSelection::new("Chile", "Región Metropolitana", "Santiago"),
        };
        w.next().unwrap();
        w.goods = GoodsDto {
            description: "Vino".into(),
            packages: "100".into(),
            gross_weight_kg: "1200,5".into(),
            declared_value_usd: "5000".into(),
        };
        w.next().unwrap();
        w
    }

    #[test]
    fn test_next_blocked_by_blank_general_step() {
        let mut w = CargoWizard::new(UploadConfig::default());
        let err = w.next().unwrap_err();
        assert_eq!(err.field_errors().get("reference"), Some("La referencia es obligatoria"));
        assert_eq!(w.step(), CargoStep::General);
    }

    #[test]
    fn test_route_errors_are_prefixed() {
        let mut w = CargoWizard::new(UploadConfig::default());
        w.route.origin = LocationSelection::new("Argentina", "", "");
        let errors = w.validate_step(CargoStep::Route);
        assert_eq!(errors.get("origin.province"), Some("La provincia es obligatoria"));
        assert_eq!(errors.get("destination.country"), Some("El país es obligatorio"));
    }

    #[test]
    fn test_trips_step_requires_a_trip() {
        let mut w = filled_wizard();
        assert_eq!(w.step(), CargoStep::Trips);
        assert!(w.next().is_err());
        assert_eq!(w.add_trip(&draft()), Ok(1));
        assert_eq!(w.trips()[0].tractor_plate, "AB 123 CD");
        assert_eq!(w.next(), Ok(CargoStep::Documents));
    }

    #[test]
    fn test_trip_draft_rules() {
        let mut bad = draft();
        bad.container = "MSC123".into();
        bad.tractor_plate = "1234".into();
        bad.eta = "2024-03-01".into();
        let errors = bad.validate();
        assert!(errors.contains("container"));
        assert!(errors.contains("tractor_plate"));
        assert_eq!(
            errors.get("eta"),
            Some("La llegada estimada no puede ser anterior a la salida")
        );
    }

    #[test]
    fn test_remove_trip_renumbers() {
        let mut w = filled_wizard();
        w.add_trip(&draft()).unwrap();
        w.add_trip(&draft()).unwrap();
        w.add_trip(&draft()).unwrap();
        assert!(w.remove_trip(0).is_some());
        let numbers: Vec<u32> = w.trips().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(w.remove_trip(5).is_none());
    }

    #[test]
    fn test_go_to_only_visited_steps() {
        let mut w = filled_wizard();
        assert!(w.go_to(CargoStep::Review).is_err());
        assert_eq!(w.go_to(CargoStep::General), Ok(CargoStep::General));
        assert_eq!(w.go_to(CargoStep::Trips), Ok(CargoStep::Trips));
    }

    #[test]
    fn test_failed_finish_opens_first_invalid_step() {
        let mut w = filled_wizard();
        w.add_trip(&draft()).unwrap();
        while w.next().is_ok() {}
        assert_eq!(w.step(), CargoStep::Review);

        w.goods.description.clear();
        let err = w.finish(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(8, 0, 0).unwrap());
        assert!(err.unwrap_err().field_errors().contains("description"));
        assert_eq!(w.open_first_invalid(), Some(CargoStep::Goods));
        assert_eq!(w.step(), CargoStep::Goods);
    }

    #[test]
    fn test_attachment_rules() {
        let mut w = CargoWizard::new(UploadConfig::default());
        let ok = DocumentAttachment::new(DocumentKind::CommercialInvoice, "factura.pdf", "application/pdf", 1024);
        let handle = w.add_attachment(ok).unwrap();
        let bad = DocumentAttachment::new(DocumentKind::Other, "nota.txt", "text/plain", 10);
        assert!(matches!(w.add_attachment(bad), Err(WizardError::Rejected(_))));
        assert!(w.remove_attachment(handle).is_some());
        assert!(w.attachments().is_empty());
    }

    #[test]
    fn test_finish_builds_cargo() {
        let mut w = filled_wizard();
        w.add_trip(&draft()).unwrap();
        let now = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(14, 2, 9)
            .unwrap();
        let cargo = w.finish(now).unwrap();
        assert_eq!(cargo.id.as_str(), "CRG-20240301140209");
        assert_eq!(cargo.goods.gross_weight_kg, 1200.5);
        assert_eq!(cargo.goods.packages, 100);
        assert_eq!(cargo.trips.len(), 1);
    }
}
