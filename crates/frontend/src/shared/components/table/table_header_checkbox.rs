//! Чекбокс «выбрать все» в заголовке таблицы.
//!
//! Работает только с текущей страницей: `items` — видимые строки.

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SelectionState {
    None,
    All,
    Partial,
}

/// Состояние чекбокса по видимым id и множеству выбранных
fn selection_state(visible_ids: &[String], selected: &HashSet<String>) -> SelectionState {
    let count = visible_ids.iter().filter(|id| selected.contains(*id)).count();
    if count == 0 {
        SelectionState::None
    } else if count == visible_ids.len() {
        SelectionState::All
    } else {
        SelectionState::Partial
    }
}

#[component]
pub fn TableHeaderCheckbox<T>(
    /// Строки текущей страницы
    #[prop(into)]
    items: Signal<Vec<T>>,

    /// Выбранные ID
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// ID строки
    get_id: Callback<T, String>,

    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let state = Signal::derive(move || {
        let ids: Vec<String> = items.get().into_iter().map(|item| get_id.run(item)).collect();
        selected.with(|sel| selection_state(&ids, sel))
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate нельзя задать атрибутом, только через DOM
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state.get() == SelectionState::Partial);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked={move || state.get() == SelectionState::All}
                on:change={move |ev| on_change.run(event_target_checked(&ev))}
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_state() {
        let ids = vec!["1".to_string(), "2".to_string()];
        let mut sel = HashSet::new();
        assert_eq!(selection_state(&ids, &sel), SelectionState::None);
        sel.insert("2".to_string());
        sel.insert("9".to_string());
        assert_eq!(selection_state(&ids, &sel), SelectionState::Partial);
        sel.insert("1".to_string());
        assert_eq!(selection_state(&ids, &sel), SelectionState::All);
    }
}
