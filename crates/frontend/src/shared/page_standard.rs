//! Категории страниц, открываемых во вкладках.
//!
//! Каждая страница во вкладке объявляет:
//!   - HTML `id` в формате `{entity}--{category}` (например `"a003_depot--list"`)
//!   - `data-page-category` с одной из констант ниже
//!
//! Разделитель `--` оставляет имя сущности удобным для поиска: id из инспектора
//! браузера сразу ведёт в каталог `domain/a003_depot/`.

/// Список записей: таблица с фильтрами и пагинацией
pub const PAGE_CAT_LIST: &str = "list";

/// Просмотр или форма одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Дашборд со счётчиками и действиями
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Пошаговый мастер
pub const PAGE_CAT_WIZARD: &str = "wizard";

/// Регистрация и прочие системные страницы
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Все допустимые категории
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_WIZARD,
    PAGE_CAT_SYSTEM,
];

/// Проверка формата id страницы `{entity}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a003_depot--list"));
        assert!(is_valid_page_id("a008_cargo--wizard"));
        assert!(!is_valid_page_id("a003_depot"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_depot--unknown"));
    }
}
