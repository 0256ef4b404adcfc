use super::{EntityMetadata, RecordStatus};
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех справочников
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Последовательный идентификатор записи
    pub id: Id,
    /// Уникальный бизнес-ключ (CUIT, код таможни). Пустой, если у сущности его нет
    pub code: String,
    /// Отображаемое название / razón social
    pub description: String,
    /// Activo / Inactivo (мягкое удаление)
    #[serde(rename = "estado")]
    pub status: RecordStatus,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат (всегда в статусе Activo)
    pub fn new(id: Id, code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            description: description.into(),
            status: RecordStatus::Activo,
            metadata: EntityMetadata::new(),
        }
    }

    /// Перезаписать ключ и название из формы
    pub fn rename(&mut self, code: &str, description: &str) {
        self.code = code.trim().to_string();
        self.description = description.trim().to_string();
    }
}

/// Методы `AggregateRoot`, читающие через `self.base`.
#[macro_export]
macro_rules! base_aggregate_accessors {
    ($id:ty) => {
        fn id(&self) -> $id {
            self.base.id
        }

        fn code(&self) -> &str {
            &self.base.code
        }

        fn description(&self) -> &str {
            &self.base.description
        }

        fn status(&self) -> $crate::domain::common::RecordStatus {
            self.base.status
        }

        fn set_status(&mut self, status: $crate::domain::common::RecordStatus) {
            self.base.status = status;
        }

        fn metadata_mut(&mut self) -> &mut $crate::domain::common::EntityMetadata {
            &mut self.base.metadata
        }
    };
}
