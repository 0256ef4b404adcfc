//! Сортируемая ячейка заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Razón social"
//!     sort_field="description"
//!     current_sort_field=Signal::derive(move || list.query.with(|q| q.sort_field.clone()))
//!     sort_ascending=Signal::derive(move || list.query.with(|q| q.sort_ascending))
//!     on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    current_sort_field: Signal<String>,

    #[prop(into)]
    sort_ascending: Signal<bool>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click={move |_| on_sort.run(sort_field_for_click.clone())}
            >
                {label}
                <span class={move || get_sort_class(&current_sort_field.get(), &sort_field)}>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
