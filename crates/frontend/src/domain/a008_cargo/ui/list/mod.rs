use super::cargo_status_color;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::layout::tabs::registry::CARGO_DETAIL_PREFIX;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::use_app_config;
use crate::shared::data_stores::DataStores;
use crate::shared::icons::icon;
use crate::shared::master_list::ListState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a008_cargo::aggregate::{Cargo, CargoStatus};
use contracts::shared::list_query::{filter_list, sort_list, ListPage};
use leptos::prelude::*;
use thaw::*;

const TAB_KEY: &str = "a008_cargo";

/// Поиск, фильтр по статусу груза, сортировка и страница
#[allow(clippy::too_many_arguments)]
fn cargo_page(
    cargos: &[Cargo],
    search: &str,
    min_chars: usize,
    status: Option<CargoStatus>,
    sort_field: &str,
    ascending: bool,
    page: usize,
    page_size: usize,
) -> ListPage<Cargo> {
    let mut data = filter_list(cargos, search, min_chars);
    if let Some(status) = status {
        data.retain(|c| c.status() == status);
    }
    sort_list(&mut data, sort_field, ascending);
    ListPage::paginate(data, page, page_size)
}

#[component]
pub fn CargoList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let stores = DataStores::use_context();
    let config = use_app_config();
    let state = ListState::restore(TAB_KEY, "created_at", config.list.page_size);
    let min_chars = config.list.search_min_chars;
    let page_size_options = config.list.page_size_options.clone();
    let status_filter = RwSignal::new(None::<CargoStatus>);

    let page = Signal::derive(move || {
        let q = state.query.get();
        let status = status_filter.get();
        stores.cargos.with(|cargos| {
            cargo_page(
                cargos,
                &q.search,
                min_chars,
                status,
                &q.sort_field,
                q.sort_ascending,
                q.page,
                q.page_size,
            )
        })
    });

    let search = RwSignal::new(state.query.with_untracked(|q| q.search.clone()));
    Effect::new(move || {
        let v = search.get();
        untrack(move || state.set_search(v));
    });

    let open_detail = move |id: String| {
        tabs_store.open_tab(
            &format!("{}{}", CARGO_DETAIL_PREFIX, id),
            &detail_tab_label("Carga", &id),
        );
    };
    let open_wizard = move || tabs_store.open_tab("a008_cargo_wizard", "Nueva carga");

    let sort_field = Signal::derive(move || state.query.with(|q| q.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.query.with(|q| q.sort_ascending));
    let on_sort = Callback::new(move |field: String| state.toggle_sort(&field));

    view! {
        <PageFrame page_id="a008_cargo--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Cargas y viajes"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || page.with(|p| p.total_count).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click={move |_| open_wizard()}>
                        {icon("plus")}
                        "Nueva carga"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Input value=search placeholder="Referencia, remitente, chofer, contenedor..." />
                                <select
                                    class="form__select"
                                    on:change=move |ev| {
                                        status_filter.set(CargoStatus::from_label(&event_target_value(&ev)));
                                        state.go_to_page(0);
                                    }
                                >
                                    <option value="">"Todos los estados"</option>
                                    {CargoStatus::all().iter().map(|s| view! {
                                        <option value={s.label()}>{s.label()}</option>
                                    }).collect_view()}
                                </select>
                            </Flex>
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
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" sort_field="id" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=170.0 />
                                <SortableHeaderCell label="Referencia" sort_field="reference" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Remitente" sort_field="shipper" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Destinatario" sort_field="consignee" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=180.0 />
                                <TableHeaderCell resizable=false min_width=240.0>"Ruta"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Viajes"</TableHeaderCell>
                                <SortableHeaderCell label="Estado" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=100.0 />
                                <SortableHeaderCell label="Creada" sort_field="created_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=130.0 />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || page.with(|p| p.items.clone()).into_iter().map(|cargo| {
                                let id = cargo.id.to_string();
                                let id_for_link = id.clone();
                                let progress = cargo.progress();
                                let status = cargo.status();
                                let reference = cargo.reference.clone();
                                let shipper = cargo.shipper.clone();
                                let consignee = cargo.consignee.clone();
                                let route = cargo.route();
                                let created_at = cargo.created_at.format("%d/%m/%Y %H:%M").to_string();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        open_detail(id_for_link.clone());
                                                    }
                                                >
                                                    {id}
                                                </a>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout truncate=true>{reference}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{shipper}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{consignee}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{route}</TableCellLayout></TableCell>
                                        <TableCell>{format!("{}/{}", progress.delivered, progress.total)}</TableCell>
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color={cargo_status_color(status)}>
                                                {status.label()}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>{created_at}</TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when={move || page.with(|p| p.total_count == 0)}>
                        <div class="table__empty">"No se encontraron cargas"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_cargo::aggregate::demo_cargos;

    #[test]
    fn test_status_filter_and_search() {
        let cargos = demo_cargos();
        let finished = cargo_page(&cargos, "", 1, Some(CargoStatus::Finalizada), "id", true, 0, 10);
        assert!(finished.items.iter().all(|c| c.status() == CargoStatus::Finalizada));

        let by_driver = cargo_page(&cargos, "marcelo", 1, None, "id", true, 0, 10);
        assert_eq!(by_driver.total_count, 1);
        assert_eq!(by_driver.items[0].reference, "EXP-2024-0127");
    }
}
