use super::super::{cargo_status_color, trip_status_color};
use crate::shared::data_stores::DataStores;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a008_cargo::aggregate::{Cargo, Trip};
use contracts::shared::documents::format_size;
use leptos::prelude::*;
use thaw::*;

fn format_kg(value: f64) -> String {
    format!("{:.0} kg", value)
}

fn format_usd(value: f64) -> String {
    format!("USD {:.2}", value)
}

fn goods_rows(cargo: &Cargo) -> Vec<(&'static str, String)> {
    vec![
        ("Descripción", cargo.goods.description.clone()),
        ("Bultos", cargo.goods.packages.to_string()),
        ("Peso bruto total", format_kg(cargo.total_weight_kg())),
        ("Valor declarado", format_usd(cargo.goods.declared_value_usd)),
    ]
}

/// Просмотр груза: сводка, прогресс по рейсам, рейсы и вложения
#[component]
pub fn CargoDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let stores = DataStores::use_context();
    let cargo_id = StoredValue::new(id);
    let selected_trip = RwSignal::new(None::<u32>);

    let cargo = Memo::new(move |_| {
        let id = cargo_id.get_value();
        stores
            .cargos
            .with(|cargos| cargos.iter().find(|c| c.id.as_str() == id).cloned())
    });

    let advance = move |number: u32| {
        let id = cargo_id.get_value();
        stores.cargos.update(|cargos| {
            if let Some(cargo) = cargos.iter_mut().find(|c| c.id.as_str() == id) {
                match cargo.advance_trip(number) {
                    Some(next) => log::info!("carga {}: viaje {} -> {}", id, number, next.label()),
                    None => log::warn!("carga {}: viaje {} sin estado siguiente", id, number),
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a008_cargo--detail" category=PAGE_CAT_DETAIL>
            {move || match cargo.get() {
                None => view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        {format!("Carga {} no encontrada", cargo_id.get_value())}
                    </MessageBar>
                }
                .into_any(),
                Some(cargo) => {
                    let trips = cargo.trips.clone();
                    let summary = cargo.clone();
                    let attachments = cargo.clone();
                    view! {
                        <CargoSummary cargo=summary on_close=on_close />
                        <TripTable
                            trips=trips
                            selected=selected_trip
                            on_advance={Callback::new(advance)}
                        />
                        {move || {
                            selected_trip
                                .get()
                                .and_then(|n| cargo.trip(n).cloned())
                                .map(|trip| view! { <TripCard trip=trip /> })
                        }}
                        <AttachmentList cargo=attachments />
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}

#[component]
fn CargoSummary(cargo: Cargo, on_close: Callback<()>) -> impl IntoView {
    let progress = cargo.progress();
    let status = cargo.status();

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{format!("Carga {}", cargo.reference)}</h1>
                <Badge appearance=BadgeAppearance::Tint color={cargo_status_color(status)}>
                    {status.label()}
                </Badge>
            </div>
            <div class="page__header-right">
                <Button appearance=ButtonAppearance::Secondary on_click={move |_| on_close.run(())}>
                    {icon("x")}
                    "Cerrar"
                </Button>
            </div>
        </div>
        <div class="detail-grid">
            <div class="detail-section">
                <h3 class="detail-section__title">"Datos generales"</h3>
                <dl class="detail-list">
                    <dt>"ID"</dt><dd>{cargo.id.to_string()}</dd>
                    <dt>"Remitente"</dt><dd>{cargo.shipper.clone()}</dd>
                    <dt>"Destinatario"</dt><dd>{cargo.consignee.clone()}</dd>
                    <dt>"Aduana de origen"</dt><dd>{cargo.origin_customs.clone()}</dd>
                    <dt>"Aduana de destino"</dt><dd>{cargo.destination_customs.clone()}</dd>
                    <dt>"Ruta"</dt><dd>{cargo.route()}</dd>
                    <dt>"Creada"</dt><dd>{cargo.created_at.format("%d/%m/%Y %H:%M").to_string()}</dd>
                </dl>
            </div>
            <div class="detail-section">
                <h3 class="detail-section__title">"Mercadería"</h3>
                <dl class="detail-list">
                    {goods_rows(&cargo).into_iter().map(|(label, value)| view! {
                        <dt>{label}</dt><dd>{value}</dd>
                    }).collect_view()}
                </dl>
            </div>
        </div>
        <div class="progress">
            <div class="progress__label">
                {format!("{} de {} viajes entregados ({}%)", progress.delivered, progress.total, progress.percent)}
            </div>
            <div class="progress__track">
                <div class="progress__bar" style={format!("width: {}%;", progress.percent)}></div>
            </div>
        </div>
    }
}

#[component]
fn TripTable(trips: Vec<Trip>, selected: RwSignal<Option<u32>>, on_advance: Callback<u32>) -> impl IntoView {
    view! {
        <h3 class="detail-section__title">"Viajes"</h3>
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=50.0>"N°"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=150.0>"Chofer"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"Tramo"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Contenedor"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Salida"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"ETA"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=110.0>"Estado"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {trips
                        .into_iter()
                        .map(|trip| {
                            let number = trip.number;
                            let can_advance = trip.status.next().is_some();
                            view! {
                                <TableRow
                                    class:table__row--selected={move || selected.get() == Some(number)}
                                    on:click={move |_| selected.set(Some(number))}
                                >
                                    <TableCell>{number.to_string()}</TableCell>
                                    <TableCell><TableCellLayout truncate=true>{trip.driver.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{format!("{} → {}", trip.origin, trip.destination)}</TableCellLayout></TableCell>
                                    <TableCell>{trip.container.clone()}</TableCell>
                                    <TableCell>{trip.departure.format("%d/%m/%Y").to_string()}</TableCell>
                                    <TableCell>{trip.eta.format("%d/%m/%Y").to_string()}</TableCell>
                                    <TableCell>
                                        <Badge appearance=BadgeAppearance::Tint color={trip_status_color(trip.status)}>
                                            {trip.status.label()}
                                        </Badge>
                                    </TableCell>
                                    <TableCell>
                                        <Show when={move || can_advance}>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |ev: leptos::ev::MouseEvent| {
                                                    ev.stop_propagation();
                                                    on_advance.run(number);
                                                }
                                            >
                                                {icon("chevron-right")}
                                                "Avanzar"
                                            </Button>
                                        </Show>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
fn TripCard(trip: Trip) -> impl IntoView {
    let departed = if trip.status.has_departed() { "Sí" } else { "No" };
    view! {
        <div class="detail-section trip-card">
            <h3 class="detail-section__title">{format!("Viaje {}", trip.number)}</h3>
            <dl class="detail-list">
                <dt>"Chofer"</dt><dd>{trip.driver.clone()}</dd>
                <dt>"Patente tractor"</dt><dd>{trip.tractor_plate.clone()}</dd>
                <dt>"Patente semi"</dt><dd>{trip.trailer_plate.clone()}</dd>
                <dt>"Contenedor"</dt><dd>{trip.container.clone()}</dd>
                <dt>"Tramo"</dt><dd>{format!("{} → {}", trip.origin, trip.destination)}</dd>
                <dt>"Salida"</dt><dd>{trip.departure.format("%d/%m/%Y").to_string()}</dd>
                <dt>"ETA"</dt><dd>{trip.eta.format("%d/%m/%Y").to_string()}</dd>
                <dt>"En camino"</dt><dd>{departed}</dd>
            </dl>
        </div>
    }
}

#[component]
fn AttachmentList(cargo: Cargo) -> impl IntoView {
    if cargo.attachments.is_empty() {
        return view! { <p class="text-muted">"Sin documentos adjuntos"</p> }.into_any();
    }
    view! {
        <div class="detail-section">
            <h3 class="detail-section__title">"Documentos"</h3>
            <ul class="attachment-list">
                {cargo
                    .attachments
                    .iter()
                    .map(|a| view! {
                        <li>
                            {icon("file-text")}
                            <span class="attachment__kind">{a.kind.label()}</span>
                            <span class="attachment__name">{a.file_name.clone()}</span>
                            <span class="attachment__size">{format_size(a.size_bytes)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_and_weight_format() {
        assert_eq!(format_kg(21_600.0), "21600 kg");
        assert_eq!(format_usd(9_800.5), "USD 9800.50");
    }

    #[test]
    fn test_goods_rows_show_gross_weight_once() {
        let cargo = contracts::domain::a008_cargo::aggregate::demo_cargos()
            .into_iter()
            .next()
            .unwrap();
        let rows = goods_rows(&cargo);
        let weights: Vec<_> = rows.iter().filter(|(l, _)| l.starts_with("Peso")).collect();
        assert_eq!(weights.len(), 1);
        assert_eq!(weights[0].0, "Peso bruto total");
        assert_eq!(weights[0].1, format_kg(cargo.goods.gross_weight_kg));
    }
}
