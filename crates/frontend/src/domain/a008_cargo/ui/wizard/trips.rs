use super::CargoForm;
use crate::shared::components::form_field::TextField;
use crate::shared::icons::icon;
use contracts::domain::a008_cargo::wizard::TripDraft;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

/// Форма «Agregar viaje» и список уже добавленных рейсов
#[component]
pub fn TripsStep(form: CargoForm) -> impl IntoView {
    let draft = RwSignal::new(TripDraft::default());
    let draft_errors = RwSignal::new(FieldErrors::new());

    let value = move |get: fn(&TripDraft) -> String| Signal::derive(move || draft.with(get));
    let input = move |key: &'static str, put: fn(&mut TripDraft, String)| {
        Callback::new(move |v: String| {
            draft.update(|d| put(d, v));
            draft_errors.update(|e| e.remove(key));
        })
    };

    let add_trip = move || {
        let current = draft.get_untracked();
        match form.state.try_update(|w| w.add_trip(&current)) {
            Some(Ok(number)) => {
                log::debug!("trip {} added", number);
                draft.set(TripDraft::default());
                draft_errors.set(FieldErrors::new());
                form.clear_error("trips");
            }
            Some(Err(e)) => draft_errors.set(e.field_errors()),
            None => {}
        }
    };

    let trips = Memo::new(move |_| form.state.with(|w| w.trips().to_vec()));

    view! {
        <div class="details-form">
            <h3 class="detail-section__title">"Agregar viaje"</h3>
            <div class="form__row">
                <TextField label="Chofer" field="driver" value={value(|d| d.driver.clone())}
                    on_input={input("driver", |d, v| d.driver = v)} errors=draft_errors required=true />
                <TextField label="Contenedor" field="container" value={value(|d| d.container.clone())}
                    on_input={input("container", |d, v| d.container = v)} errors=draft_errors required=true
                    placeholder="MSCU1234567" />
            </div>
            <div class="form__row">
                <TextField label="Patente tractor" field="tractor_plate" value={value(|d| d.tractor_plate.clone())}
                    on_input={input("tractor_plate", |d, v| d.tractor_plate = v)} errors=draft_errors required=true
                    placeholder="AB 123 CD" />
                <TextField label="Patente semirremolque" field="trailer_plate" value={value(|d| d.trailer_plate.clone())}
                    on_input={input("trailer_plate", |d, v| d.trailer_plate = v)} errors=draft_errors />
            </div>
            <div class="form__row">
                <TextField label="Origen del tramo" field="origin" value={value(|d| d.origin.clone())}
                    on_input={input("origin", |d, v| d.origin = v)} errors=draft_errors required=true />
                <TextField label="Destino del tramo" field="destination" value={value(|d| d.destination.clone())}
                    on_input={input("destination", |d, v| d.destination = v)} errors=draft_errors required=true />
            </div>
            <div class="form__row">
                <TextField label="Salida" field="departure" value={value(|d| d.departure.clone())}
                    on_input={input("departure", |d, v| d.departure = v)} errors=draft_errors required=true
                    input_type="date" />
                <TextField label="Llegada estimada" field="eta" value={value(|d| d.eta.clone())}
                    on_input={input("eta", |d, v| d.eta = v)} errors=draft_errors required=true
                    input_type="date" />
            </div>
            <Button appearance=ButtonAppearance::Secondary on_click={move |_| add_trip()}>
                {icon("plus")}
                "Agregar viaje"
            </Button>
        </div>

        {move || form.errors.with(|e| e.get("trips").map(str::to_string)).map(|message| view! {
            <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
        })}

        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=50.0>"N°"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=150.0>"Chofer"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=180.0>"Patentes"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Contenedor"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"Tramo"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=170.0>"Fechas"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=50.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || trips.get().into_iter().enumerate().map(|(index, trip)| view! {
                        <TableRow>
                            <TableCell>{trip.number.to_string()}</TableCell>
                            <TableCell>{trip.driver.clone()}</TableCell>
                            <TableCell>{format!("{} / {}", trip.tractor_plate, trip.trailer_plate)}</TableCell>
                            <TableCell>{trip.container.clone()}</TableCell>
                            <TableCell>{format!("{} → {}", trip.origin, trip.destination)}</TableCell>
                            <TableCell>
                                {format!("{} - {}", trip.departure.format("%d/%m/%Y"), trip.eta.format("%d/%m/%Y"))}
                            </TableCell>
                            <TableCell>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| {
                                        form.state.update(|w| {
                                            w.remove_trip(index);
                                        });
                                    }
                                >
                                    {icon("trash")}
                                </Button>
                            </TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
            <Show when={move || trips.with(Vec::is_empty)}>
                <div class="table__empty">"Todavía no hay viajes"</div>
            </Show>
        </div>
    }
}
