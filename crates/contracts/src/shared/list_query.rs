//! Универсальные операции над списками: поиск, фильтр по статусу, сортировка,
//! пагинация. Используются всеми страницами-справочниками.

use crate::domain::common::RecordStatus;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу (запрос уже в нижнем регистре)
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Записи со статусом Activo/Inactivo
pub trait HasStatus {
    fn record_status(&self) -> RecordStatus;
}

/// Поиск подстроки без учёта регистра по набору полей
pub fn any_field_contains(fields: &[&str], needle: &str) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(needle))
}

/// Сравнение строк без учёта регистра для сортировки
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу; короткие запросы игнорируются
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str, min_chars: usize) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() || needle.chars().count() < min_chars {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .cloned()
        .collect()
}

/// Состояние списка; сохраняется в контексте вкладки как JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub status: Option<RecordStatus>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(sort_field: &str, page_size: usize) -> Self {
        Self {
            search: String::new(),
            status: None,
            sort_field: sort_field.to_string(),
            sort_ascending: true,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Клик по заголовку: то же поле меняет направление, новое поле — сортировка по возрастанию
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn apply<T>(&self, items: &[T], min_search_chars: usize) -> ListPage<T>
    where
        T: Searchable + Sortable + HasStatus + Clone,
    {
        let mut data = filter_list(items, &self.search, min_search_chars);
        if let Some(status) = self.status {
            data.retain(|item| item.record_status() == status);
        }
        sort_list(&mut data, &self.sort_field, self.sort_ascending);
        ListPage::paginate(data, self.page, self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl<T: Clone> ListPage<T> {
    /// Нарезать страницу; номер страницы прижимается к допустимому диапазону
    pub fn paginate(data: Vec<T>, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_count = data.len();
        let total_pages = if total_count == 0 {
            1
        } else {
            (total_count + page_size - 1) / page_size
        };
        let page = page.min(total_pages - 1);
        let start = page * page_size;
        let end = (start + page_size).min(total_count);
        Self {
            items: data.get(start..end).unwrap_or(&[]).to_vec(),
            total_count,
            total_pages,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        status: RecordStatus,
    }

    impl Searchable for Row {
        fn matches_filter(&self, needle: &str) -> bool {
            any_field_contains(&[self.name], needle)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            cmp_text(self.name, other.name)
        }
    }

    impl HasStatus for Row {
        fn record_status(&self) -> RecordStatus {
            self.status
        }
    }

    fn rows() -> Vec<Row> {
        ["Rosario", "campana", "Bahía Blanca", "Zárate", "Campinas"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| Row {
                name,
                status: if i % 2 == 0 {
                    RecordStatus::Activo
                } else {
                    RecordStatus::Inactivo
                },
            })
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut q = ListQuery::new("name", 10);
        q.search = "CAMP".into();
        let page = q.apply(&rows(), 1);
        let names: Vec<_> = page.items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["campana", "Campinas"]);
    }

    #[test]
    fn test_short_search_is_ignored() {
        let mut q = ListQuery::new("name", 10);
        q.search = "ca".into();
        assert_eq!(q.apply(&rows(), 3).total_count, 5);
    }

    #[test]
    fn test_status_filter_and_descending_sort() {
        let mut q = ListQuery::new("name", 10);
        q.status = Some(RecordStatus::Activo);
        q.toggle_sort("name");
        let names: Vec<_> = q.apply(&rows(), 1).items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Rosario", "Campinas", "Bahía Blanca"]);
    }

    #[test]
    fn test_page_is_clamped() {
        let mut q = ListQuery::new("name", 2);
        q.page = 10;
        let page = q.apply(&rows(), 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let page = ListPage::<Row>::paginate(Vec::new(), 3, 25);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 0);
        assert!(page.items.is_empty());
    }
}
