use super::{AggregateId, EntityMetadata, RecordStatus};
use crate::shared::validation::FieldErrors;

/// Трейт для корня агрегата справочника
///
/// Определяет данные записи, метаданные класса и хуки формы, которые нужны
/// `MemoryStore` для создания, редактирования и смены статуса.
pub trait AggregateRoot: Clone {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    /// Форма создания/редактирования (DTO)
    type Form: Clone + Default;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Уникальный бизнес-ключ (CUIT, код). Пустая строка, если ключа нет
    fn code(&self) -> &str;

    /// Отображаемое название
    fn description(&self) -> &str;

    fn status(&self) -> RecordStatus;

    fn set_status(&mut self, status: RecordStatus);

    /// Получить изменяемые метаданные
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a003")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "depot")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (например, "Depósito")
    fn element_name() -> &'static str;

    /// Имя списка для UI (например, "Depósitos")
    fn list_name() -> &'static str;

    /// Подпись ключа с артиклем для сообщения о дубликате ("ese código")
    fn code_label() -> &'static str {
        "ese código"
    }

    /// Подпись названия с артиклем для сообщения о дубликате
    fn description_label() -> &'static str {
        "esa descripción"
    }

    /// Поле формы, к которому привязывается ошибка дубликата ключа
    fn code_field() -> &'static str {
        "code"
    }

    /// Поле формы, к которому привязывается ошибка дубликата названия
    fn description_field() -> &'static str {
        "description"
    }

    // ============================================================================
    // Хуки формы
    // ============================================================================

    /// Проверка полей формы без учёта остальных записей
    fn validate_form(form: &Self::Form) -> FieldErrors;

    /// Ключ из формы (пустой, если у сущности нет ключа)
    fn form_code(form: &Self::Form) -> String;

    /// Название из формы
    fn form_description(form: &Self::Form) -> String;

    /// Построить новую запись из проверенной формы
    fn from_form(id: Self::Id, form: &Self::Form) -> Self;

    /// Заполнить форму для редактирования
    fn to_form(&self) -> Self::Form;

    /// Применить проверенную форму к существующей записи (id и статус не меняются)
    fn apply_form(&mut self, form: &Self::Form);

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a003_depot")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
