//! Мастер регистрации транспортной компании: Empresa → Permisos → Flota → Revisión

use super::aggregate::{normalize_plate, TransportCompany, TransportCompanyDto, VehicleDto};
use crate::shared::validation::{FieldErrors, FormValidator};
use crate::shared::wizard::{StepCursor, WizardError, WizardStep};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyStep {
    Company,
    Permit,
    Fleet,
    Review,
}

impl WizardStep for CompanyStep {
    fn all() -> &'static [Self] {
        &[
            CompanyStep::Company,
            CompanyStep::Permit,
            CompanyStep::Fleet,
            CompanyStep::Review,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            CompanyStep::Company => "Empresa",
            CompanyStep::Permit => "Permisos",
            CompanyStep::Fleet => "Flota",
            CompanyStep::Review => "Revisión",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportCompanyWizard {
    cursor: StepCursor<CompanyStep>,
    /// Данные компании и разрешения; парк набирается через `add_vehicle`
    pub form: TransportCompanyDto,
    today: NaiveDate,
}

impl TransportCompanyWizard {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: StepCursor::new(),
            form: TransportCompanyDto::default(),
            today,
        }
    }

    pub fn step(&self) -> CompanyStep {
        self.cursor.current()
    }

    pub fn is_visited(&self, step: CompanyStep) -> bool {
        self.cursor.is_visited(step)
    }

    pub fn vehicles(&self) -> &[VehicleDto] {
        &self.form.vehicles
    }

    fn max_year(&self) -> i64 {
        i64::from(self.today.year()) + 1
    }

    pub fn validate_step(&self, step: CompanyStep) -> FieldErrors {
        match step {
            CompanyStep::Company => TransportCompany::validate_company(&self.form),
            CompanyStep::Permit => {
                let mut errors = TransportCompany::validate_permit(&self.form);
                let mut v = FormValidator::new();
                v.date_after(
                    "permit_expiry",
                    &self.form.permit_expiry,
                    self.today,
                    "El permiso debe tener una fecha de vencimiento posterior a hoy",
                );
                errors.merge(v.finish());
                errors
            }
            CompanyStep::Fleet => TransportCompany::validate_fleet(&self.form.vehicles, self.max_year()),
            CompanyStep::Review => FieldErrors::new(),
        }
    }

    fn check(&self, step: CompanyStep) -> Result<(), WizardError> {
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

    pub fn next(&mut self) -> Result<CompanyStep, WizardError> {
        self.check(self.step())?;
        let step = self.cursor.advance()?;
        log::debug!("transport company wizard -> {}", step.label());
        Ok(step)
    }

    pub fn back(&mut self) -> Result<CompanyStep, WizardError> {
        self.cursor.back()
    }

    pub fn go_to(&mut self, step: CompanyStep) -> Result<CompanyStep, WizardError> {
        self.cursor.go_to(step)
    }

    /// Открыть первый шаг с ошибками, например после отказа `finish`
    pub fn open_first_invalid(&mut self) -> Option<CompanyStep> {
        let step = CompanyStep::all()
            .iter()
            .copied()
            .find(|s| !self.validate_step(*s).is_empty())?;
        self.cursor.go_to(step).ok()
    }

    /// Добавить ТС; повторный номер (без учёта пробелов и регистра) отклоняется
    pub fn add_vehicle(&mut self, vehicle: VehicleDto) -> Result<usize, WizardError> {
        let mut errors = vehicle.validate(self.max_year());
        let plate = vehicle.normalized_plate();
        if self
            .form
            .vehicles
            .iter()
            .any(|v| normalize_plate(&v.plate) == plate)
        {
            errors.insert("plate", "La patente ya fue cargada en la flota");
        }
        if !errors.is_empty() {
            return Err(WizardError::InvalidStep {
                step: CompanyStep::Fleet.label(),
                errors,
            });
        }
        self.form.vehicles.push(vehicle);
        Ok(self.form.vehicles.len())
    }

    pub fn remove_vehicle(&mut self, index: usize) -> Option<VehicleDto> {
        (index < self.form.vehicles.len()).then(|| self.form.vehicles.remove(index))
    }

    /// Все шаги валидны → форма для `MemoryStore<TransportCompany>::create`
    pub fn finish(&self) -> Result<TransportCompanyDto, WizardError> {
        for step in CompanyStep::all() {
            self.check(*step)?;
        }
        Ok(self.form.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_transport_company::aggregate::VehicleKind;
    use crate::domain::common::{AggregateRoot, MemoryStore};
    use crate::shared::location::LocationSelection;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn tractor(plate: &str, year: &str) -> VehicleDto {
        VehicleDto {
            plate: plate.into(),
            kind: VehicleKind::Tractor,
            brand: "Volvo".into(),
            model: "FH 460".into(),
            year: year.into(),
        }
    }

    fn wizard_at_fleet() -> TransportCompanyWizard {
        let mut w = TransportCompanyWizard::new(today());
        w.form.description = "Andes Cargo SRL".into();
        w.form.tax_id = "30755511122".into();
        w.form.location = LocationSelection::new("Argentina", "Salta", "Salta");
        w.form.address = "Av. Paraguay 2100".into();
        w.form.email = "info@andescargo.com.ar".into();
        w.form.phone = "+54 387 4200000".into();
        w.next().unwrap();
        w.form.permit_number = "AR-BO-1020".into();
        w.form.permit_expiry = "2026-01-15".into();
        w.next().unwrap();
        w
    }

    #[test]
    fn test_permit_expiry_must_be_after_today() {
        let mut w = wizard_at_fleet();
        w.back().unwrap();
        w.form.permit_expiry = "2025-06-01".into();
        let err = w.next().unwrap_err();
        assert_eq!(
            err.field_errors().get("permit_expiry"),
            Some("El permiso debe tener una fecha de vencimiento posterior a hoy")
        );
    }

    #[test]
    fn test_short_permit_number() {
        let mut w = wizard_at_fleet();
        w.form.permit_number = "A1".into();
        let errors = w.validate_step(CompanyStep::Permit);
        assert_eq!(
            errors.get("permit_number"),
            Some("El número de permiso debe tener al menos 5 caracteres")
        );
    }

    #[test]
    fn test_vehicle_year_and_duplicate_plate() {
        let mut w = wizard_at_fleet();
        assert!(w.next().is_err());
        assert_eq!(w.add_vehicle(tractor("AB 123 CD", "2020")), Ok(1));
        let dup = w.add_vehicle(tractor("ab123cd", "2021")).unwrap_err();
        assert!(dup.field_errors().contains("plate"));
        let old = w.add_vehicle(tractor("AD 999 ZZ", "1975")).unwrap_err();
        assert_eq!(
            old.field_errors().get("year"),
            Some("El año debe ser un número entre 1980 y 2026")
        );
        assert_eq!(w.next(), Ok(CompanyStep::Review));
    }

    #[test]
    fn test_jump_to_review_then_finish_reopens_broken_step() {
        let mut w = wizard_at_fleet();
        w.add_vehicle(tractor("AB 123 CD", "2020")).unwrap();
        assert_eq!(w.next(), Ok(CompanyStep::Review));

        w.go_to(CompanyStep::Company).unwrap();
        w.form.email = "info@andescargo".into();
        assert_eq!(w.go_to(CompanyStep::Review), Ok(CompanyStep::Review));

        let err = w.finish().unwrap_err();
        assert_eq!(err.field_errors().get("email"), Some("Ingrese un email válido"));
        assert_eq!(w.open_first_invalid(), Some(CompanyStep::Company));
        assert_eq!(w.step(), CompanyStep::Company);
    }

    #[test]
    fn test_finish_creates_company_in_store() {
        let mut w = wizard_at_fleet();
        w.add_vehicle(tractor("AB 123 CD", "2020")).unwrap();
        let dto = w.finish().unwrap();

        let mut store = MemoryStore::with_records(
            crate::domain::a009_transport_company::aggregate::TransportCompany::demo_records(),
        );
        let id = store.create(&dto).unwrap();
        let company = store.get(id).unwrap();
        assert_eq!(company.fleet[0].plate, "AB123CD");
        assert_eq!(company.description(), "Andes Cargo SRL");
    }
}
