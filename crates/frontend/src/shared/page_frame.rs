//! PageFrame: стандартная корневая обёртка страницы во вкладке.
//!
//! Ставит на корневой элемент два атрибута метаданных:
//!   - `id`: `"{entity}--{category}"`, например `"a003_depot--list"`
//!   - `data-page-category`: одна из констант PAGE_CAT_*

use super::page_standard::*;
use leptos::prelude::*;

/// Корневая обёртка с метаданными страницы.
///
/// BEM-модификатор по категории:
/// - `list`, `system` → `page`
/// - `detail`         → `page page--detail`
/// - `dashboard`      → `page page--dashboard`
/// - `wizard`         → `page page--wizard`
#[component]
pub fn PageFrame(
    /// HTML id в формате `{entity}--{category}`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_* из `page_standard`
    category: &'static str,
    /// Дополнительные CSS-классы после базового
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_WIZARD => "page page--wizard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
