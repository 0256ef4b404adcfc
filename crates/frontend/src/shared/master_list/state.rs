use crate::layout::global_context::AppGlobalContext;
use contracts::domain::common::RecordStatus;
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Copy)]
pub struct ListState {
    pub query: RwSignal<ListQuery>,
    pub selected: RwSignal<HashSet<String>>,
}

impl ListState {
    /// Восстанавливает запрос вкладки `form_key`; при каждом изменении
    /// запрос сохраняется обратно, поэтому повторное открытие вкладки
    /// возвращает тот же поиск, сортировку и страницу.
    pub fn restore(form_key: &'static str, default_sort: &str, page_size: usize) -> Self {
        let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

        let initial = ctx
            .get_form_state(form_key)
            .and_then(|value| serde_json::from_value::<ListQuery>(value).ok())
            .unwrap_or_else(|| ListQuery::new(default_sort, page_size));
        let query = RwSignal::new(initial);

        Effect::new(move |_| {
            let snapshot = query.get();
            match serde_json::to_value(&snapshot) {
                Ok(value) => ctx.set_form_state(form_key.to_string(), value),
                Err(e) => log::warn!("{}: query not saved: {}", form_key, e),
            }
        });

        Self {
            query,
            selected: RwSignal::new(HashSet::new()),
        }
    }

    pub fn toggle_sort(&self, field: &str) {
        self.query.update(|q| {
            q.toggle_sort(field);
            q.page = 0;
        });
    }

    pub fn set_search(&self, text: String) {
        self.query.update(|q| {
            if q.search != text {
                q.search = text;
                q.page = 0;
            }
        });
    }

    pub fn set_status(&self, status: Option<RecordStatus>) {
        self.query.update(|q| {
            q.status = status;
            q.page = 0;
        });
    }

    pub fn go_to_page(&self, page: usize) {
        self.query.update(|q| q.page = page);
    }

    pub fn set_page_size(&self, size: usize) {
        self.query.update(|q| {
            q.page_size = size.max(1);
            q.page = 0;
        });
    }

    pub fn reset_filters(&self) {
        self.query.update(|q| {
            q.search.clear();
            q.status = None;
            q.page = 0;
        });
    }

    /// Количество активных фильтров (для бейджа панели)
    pub fn active_filters(&self) -> usize {
        self.query.with(|q| {
            usize::from(!q.search.trim().is_empty()) + usize::from(q.status.is_some())
        })
    }

    pub fn toggle_selection(&self, id: String, checked: bool) {
        self.selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    }

    /// «Выбрать все» действует только на видимую страницу
    pub fn select_page(&self, ids: Vec<String>, checked: bool) {
        self.selected.update(|s| {
            for id in ids {
                if checked {
                    s.insert(id);
                } else {
                    s.remove(&id);
                }
            }
        });
    }

    pub fn clear_selection(&self) {
        self.selected.set(HashSet::new());
    }
}
