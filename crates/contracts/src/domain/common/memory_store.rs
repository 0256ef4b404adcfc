//! Хранилище справочников в памяти.
//!
//! У каждой таблицы свой `MemoryStore`. Ничего не сохраняется: после
//! перезагрузки снова начальные записи.

use super::{AggregateId, AggregateRoot, RecordStatus};
use crate::shared::validation::{duplicate_message, normalize_key, FieldErrors};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("Registro {0} no encontrado")]
    NotFound(String),
}

impl StoreError {
    /// Ошибки полей для отображения в форме (пусто для NotFound)
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            StoreError::Validation(errors) => errors.clone(),
            StoreError::NotFound(_) => FieldErrors::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    records: Vec<T>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: AggregateRoot> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Следующий ID: max + 1 (1 для пустого списка)
    pub fn next_id(&self) -> T::Id {
        let max = self.records.iter().map(|r| r.id().seq()).max().unwrap_or(0);
        T::Id::from_seq(max + 1)
    }

    /// Проверка полей и поиск дубликатов по всем записям, включая неактивные.
    /// `exclude` пропускает редактируемую запись.
    pub fn check(&self, form: &T::Form, exclude: Option<T::Id>) -> FieldErrors {
        let mut errors = T::validate_form(form);

        let code = normalize_key(&T::form_code(form));
        let description = normalize_key(&T::form_description(form));

        for record in self.records.iter().filter(|r| Some(r.id()) != exclude) {
            if !code.is_empty() && normalize_key(record.code()) == code {
                errors.insert(T::code_field(), duplicate_message(T::code_label()));
            }
            if !description.is_empty() && normalize_key(record.description()) == description {
                errors.insert(
                    T::description_field(),
                    duplicate_message(T::description_label()),
                );
            }
        }

        errors
    }

    pub fn create(&mut self, form: &T::Form) -> Result<T::Id, StoreError> {
        let errors = self.check(form, None);
        if !errors.is_empty() {
            log::debug!("{}: create rejected ({} errors)", T::full_name(), errors.len());
            return Err(StoreError::Validation(errors));
        }

        let id = self.next_id();
        self.records.push(T::from_form(id, form));
        log::debug!("{}: created id={}", T::full_name(), id.as_string());
        Ok(id)
    }

    pub fn update(&mut self, id: T::Id, form: &T::Form) -> Result<(), StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id.as_string()));
        }

        let errors = self.check(form, Some(id));
        if !errors.is_empty() {
            log::debug!("{}: update of id={} rejected", T::full_name(), id.as_string());
            return Err(StoreError::Validation(errors));
        }

        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            record.apply_form(form);
            record.metadata_mut().touch();
        }
        log::debug!("{}: updated id={}", T::full_name(), id.as_string());
        Ok(())
    }

    pub fn toggle_status(&mut self, id: T::Id) -> Result<RecordStatus, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.as_string()))?;

        let next = record.status().toggle();
        record.set_status(next);
        record.metadata_mut().touch();
        log::debug!("{}: id={} -> {}", T::full_name(), id.as_string(), next);
        Ok(next)
    }

    /// Массовая смена статуса выделенных записей. Возвращает число изменённых.
    pub fn set_status_many(&mut self, ids: &[T::Id], status: RecordStatus) -> usize {
        let mut changed = 0;
        for record in self.records.iter_mut().filter(|r| ids.contains(&r.id())) {
            if record.status() != status {
                record.set_status(status);
                record.metadata_mut().touch();
                changed += 1;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_ata::aggregate::{Ata, AtaDto, AtaId};
    use crate::shared::location::LocationSelection;

    fn form(name: &str, tax_id: &str) -> AtaDto {
        AtaDto {
            id: None,
            description: name.to_string(),
            tax_id: tax_id.to_string(),
            location: LocationSelection::new("Argentina", "Buenos Aires", "La Plata"),
            address: "Av. 7 1234".to_string(),
            email: "ops@ata.com.ar".to_string(),
            phone: String::new(),
        }
    }

    fn store() -> MemoryStore<Ata> {
        let mut store = MemoryStore::new();
        store.create(&form("Transit Sur SA", "30711222334")).unwrap();
        store
    }

    #[test]
    fn test_create_assigns_next_sequential_id() {
        let mut store = store();
        let id = store.create(&form("Aduanera Norte SRL", "30999888776")).unwrap();
        assert_eq!(id, AtaId(2));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(id).unwrap().status(), RecordStatus::Activo);
    }

    #[test]
    fn test_blank_form_does_not_mutate_list() {
        let mut store = store();
        let err = store.create(&AtaDto::default()).unwrap_err();
        let errors = err.field_errors();
        for key in ["description", "tax_id", "country", "address", "email"] {
            assert!(errors.get(key).is_some(), "missing error for {key}");
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicates_rejected_even_when_inactive() {
        let mut store = store();
        store.toggle_status(AtaId(1)).unwrap();

        let err = store.create(&form("  TRANSIT SUR sa ", "30111111111")).unwrap_err();
        assert_eq!(
            err.field_errors().get("description"),
            Some("Ya existe un registro con esa razón social")
        );

        let err = store.create(&form("Otra SA", "30711222334")).unwrap_err();
        assert_eq!(
            err.field_errors().get("tax_id"),
            Some("Ya existe un registro con ese identificador fiscal")
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_replaces_in_place_and_ignores_self() {
        let mut store = store();
        let mut dto = store.get(AtaId(1)).unwrap().to_form();
        dto.address = "Calle Nueva 55".to_string();
        store.update(AtaId(1), &dto).unwrap();

        let record = store.get(AtaId(1)).unwrap();
        assert_eq!(record.address, "Calle Nueva 55");
        assert_eq!(record.base.metadata.version, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = store();
        let err = store.update(AtaId(99), &form("X", "1")).unwrap_err();
        assert_eq!(err, StoreError::NotFound("99".to_string()));
    }

    #[test]
    fn test_bulk_status_change_counts_only_changes() {
        let mut store = store();
        store.create(&form("Aduanera Norte SRL", "30999888776")).unwrap();
        store.toggle_status(AtaId(2)).unwrap();

        let changed = store.set_status_many(&[AtaId(1), AtaId(2)], RecordStatus::Inactivo);
        assert_eq!(changed, 1);
        assert!(store.list().iter().all(|r| r.status() == RecordStatus::Inactivo));
    }
}
