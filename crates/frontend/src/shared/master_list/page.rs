use super::state::ListState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::config::use_app_config;
use crate::shared::data_stores::{DataStores, StoreAccess};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::common::{AggregateId, RecordStatus};
use leptos::prelude::*;
use thaw::*;

/// Колонка таблицы справочника
pub struct Column<T> {
    pub label: &'static str,
    /// Ключ `Sortable::compare_by_field`; пустая строка — без сортировки
    pub sort_field: &'static str,
    pub min_width: f64,
    pub render: fn(&T) -> String,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// Карточка записи: (id, on_saved, on_cancel)
pub type DetailsFn = fn(Option<String>, Callback<String>, Callback<()>) -> AnyView;

#[component]
pub fn MasterListPage<T>(
    /// `{entity}--list`
    page_id: &'static str,
    /// Ключ вкладки; под ним сохраняется запрос списка
    tab_key: &'static str,
    columns: &'static [Column<T>],
    details: DetailsFn,
    #[prop(optional, default = "Buscar...")]
    search_placeholder: &'static str,
    /// false: записи создаются только мастером
    #[prop(optional, default = true)]
    allow_create: bool,
) -> impl IntoView
where
    T: StoreAccess,
{
    let stores = DataStores::use_context();
    let config = use_app_config();
    let store = T::store(&stores);
    let state = ListState::restore(tab_key, T::description_field(), config.list.page_size);
    let min_chars = config.list.search_min_chars;
    let page_size_options = config.list.page_size_options.clone();

    let page = Signal::derive(move || {
        let query = state.query.get();
        store.with(|s| query.apply(s.list(), min_chars))
    });
    let rows = Signal::derive(move || page.with(|p| p.items.clone()));
    let selected = Signal::derive(move || state.selected.get());
    let selected_count = move || state.selected.with(|s| s.len());

    let (is_filter_expanded, set_is_filter_expanded) = signal(false);
    let search = RwSignal::new(state.query.with_untracked(|q| q.search.clone()));
    Effect::new(move || {
        let v = search.get();
        untrack(move || state.set_search(v));
    });

    let result = RwSignal::new(None::<String>);
    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<String>);

    let open_details = move |id: Option<String>| {
        result.set(None);
        editing.set(id);
        dialog_open.set(true);
    };
    let on_saved = Callback::new(move |message: String| {
        result.set(Some(message));
        dialog_open.set(false);
    });
    let on_cancel = Callback::new(move |_| dialog_open.set(false));

    let toggle_status = move |raw: String| {
        let Ok(id) = T::Id::from_string(&raw) else {
            return;
        };
        store.update(|s| match s.toggle_status(id) {
            Ok(next) => log::info!("{} #{} -> {}", T::full_name(), raw, next),
            Err(e) => log::warn!("{}", e),
        });
    };

    let set_selected_status = move |status: RecordStatus| {
        let ids: Vec<T::Id> = state.selected.with_untracked(|sel| {
            sel.iter()
                .filter_map(|raw| T::Id::from_string(raw).ok())
                .collect()
        });
        let changed = store
            .try_update(|s| s.set_status_many(&ids, status))
            .unwrap_or(0);
        log::info!("{}: {} records -> {}", T::full_name(), changed, status);
        result.set(Some(format!("{} registros marcados como {}", changed, status)));
        state.clear_selection();
    };

    let reset_filters = move || {
        search.set(String::new());
        state.reset_filters();
    };

    let sort_field = Signal::derive(move || state.query.with(|q| q.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.query.with(|q| q.sort_ascending));
    let on_sort = Callback::new(move |field: String| state.toggle_sort(&field));

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{T::list_name()}</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || page.with(|p| p.total_count).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Show when={move || allow_create}>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click={move |_| open_details(None)}
                        >
                            {icon("plus")}
                            {format!("Agregar {}", T::element_name())}
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click={move |_| set_selected_status(RecordStatus::Activo)}
                        disabled={Signal::derive(move || selected_count() == 0)}
                    >
                        {icon("check")}
                        {move || format!("Activar ({})", selected_count())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click={move |_| set_selected_status(RecordStatus::Inactivo)}
                        disabled={Signal::derive(move || selected_count() == 0)}
                    >
                        {icon("x")}
                        {move || format!("Desactivar ({})", selected_count())}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div
                            class="filter-panel-header__left"
                            on:click={move |_| set_is_filter_expanded.update(|e| *e = !*e)}
                        >
                            <span class=move || {
                                if is_filter_expanded.get() {
                                    "filter-panel__chevron filter-panel__chevron--expanded"
                                } else {
                                    "filter-panel__chevron"
                                }
                            }>
                                {icon("chevron-right")}
                            </span>
                            <span class="filter-panel__title">"Filtros"</span>
                            {move || {
                                let count = state.active_filters();
                                (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                            }}
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page={Signal::derive(move || page.with(|p| p.page))}
                                total_pages={Signal::derive(move || page.with(|p| p.total_pages))}
                                total_count={Signal::derive(move || page.with(|p| p.total_count))}
                                page_size={Signal::derive(move || state.query.with(|q| q.page_size))}
                                on_page_change={Callback::new(move |p| state.go_to_page(p))}
                                on_page_size_change={Callback::new(move |s| state.set_page_size(s))}
                                page_size_options=page_size_options
                            />
                        </div>
                    </div>

                    <Show when={move || is_filter_expanded.get()}>
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <div style="flex: 1; max-width: 360px;">
                                    <Flex vertical=true gap=FlexGap::Small>
                                        <Label>"Buscar:"</Label>
                                        <Input value=search placeholder=search_placeholder />
                                    </Flex>
                                </div>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Estado:"</Label>
                                    <select
                                        class="form__select"
                                        prop:value=move || {
                                            state.query.with(|q| q.status.map(|s| s.as_str()).unwrap_or(""))
                                        }
                                        on:change=move |ev| {
                                            state.set_status(RecordStatus::from_str_opt(&event_target_value(&ev)))
                                        }
                                    >
                                        <option value="">"Todos"</option>
                                        <option value="Activo">"Activo"</option>
                                        <option value="Inactivo">"Inactivo"</option>
                                    </select>
                                </Flex>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click={move |_| reset_filters()}
                                >
                                    "Limpiar"
                                </Button>
                            </Flex>
                        </div>
                    </Show>
                </div>

                {move || result.get().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Success>{message}</MessageBar>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    items=rows
                                    selected=selected
                                    get_id={Callback::new(|row: T| row.id().as_string())}
                                    on_change=Callback::new(move |checked| {
                                        let ids = rows.with_untracked(|r| {
                                            r.iter().map(|row| row.id().as_string()).collect()
                                        });
                                        state.select_page(ids, checked);
                                    })
                                />
                                {columns.iter().map(|col| {
                                    if col.sort_field.is_empty() {
                                        view! {
                                            <TableHeaderCell resizable=false min_width={col.min_width}>
                                                {col.label}
                                            </TableHeaderCell>
                                        }.into_any()
                                    } else {
                                        view! {
                                            <SortableHeaderCell
                                                label={col.label}
                                                sort_field={col.sort_field}
                                                current_sort_field=sort_field
                                                sort_ascending=sort_ascending
                                                on_sort=on_sort
                                                min_width={col.min_width}
                                            />
                                        }.into_any()
                                    }
                                }).collect_view()}
                                <SortableHeaderCell
                                    label="Estado"
                                    sort_field="status"
                                    current_sort_field=sort_field
                                    sort_ascending=sort_ascending
                                    on_sort=on_sort
                                    min_width=90.0
                                />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            {move || rows.get().into_iter().map(|row| {
                                let id = row.id().as_string();
                                let id_for_click = id.clone();
                                let id_for_toggle = id.clone();
                                let status = row.status();
                                view! {
                                    <TableRow
                                        class="table__row--clickable"
                                        on:click={move |_| open_details(Some(id_for_click.clone()))}
                                    >
                                        <TableCellCheckbox
                                            item_id=id
                                            selected=selected
                                            on_change={Callback::new(move |(id, checked)| state.toggle_selection(id, checked))}
                                        />
                                        {columns.iter().map(|col| {
                                            let cell = (col.render)(&row);
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                </TableCell>
                                            }
                                        }).collect_view()}
                                        <TableCell>
                                            <StatusBadge
                                                status=status
                                                on_toggle={Callback::new(move |_| toggle_status(id_for_toggle.clone()))}
                                            />
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>

                    <Show when={move || page.with(|p| p.total_count == 0)}>
                        <div class="table__empty">"No se encontraron registros"</div>
                    </Show>
                </div>
            </div>

            <Dialog open=dialog_open>
                <DialogSurface>
                    {move || dialog_open.get().then(|| details(editing.get_untracked(), on_saved, on_cancel))}
                </DialogSurface>
            </Dialog>
        </PageFrame>
    }
}
