use super::CompanyForm;
use crate::shared::components::form_field::{SelectField, TextField};
use crate::shared::icons::icon;
use contracts::domain::a009_transport_company::aggregate::{VehicleDto, VehicleKind};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

fn kind_options() -> Vec<(String, String)> {
    VehicleKind::all()
        .iter()
        .map(|k| (k.key().to_string(), k.label().to_string()))
        .collect()
}

#[component]
pub fn FleetStep(form: CompanyForm) -> impl IntoView {
    let draft = RwSignal::new(VehicleDto::default());
    let draft_errors = RwSignal::new(FieldErrors::new());

    let value = move |get: fn(&VehicleDto) -> String| Signal::derive(move || draft.with(get));
    let input = move |key: &'static str, put: fn(&mut VehicleDto, String)| {
        Callback::new(move |v: String| {
            draft.update(|d| put(d, v));
            draft_errors.update(|e| e.remove(key));
        })
    };

    let add_vehicle = move || {
        let vehicle = draft.get_untracked();
        match form.state.try_update(|w| w.add_vehicle(vehicle)) {
            Some(Ok(count)) => {
                log::debug!("fleet size {}", count);
                draft.set(VehicleDto::default());
                draft_errors.set(FieldErrors::new());
                form.clear_error("fleet");
            }
            Some(Err(e)) => draft_errors.set(e.field_errors()),
            None => {}
        }
    };

    let vehicles = Memo::new(move |_| form.state.with(|w| w.vehicles().to_vec()));

    view! {
        <div class="details-form">
            <h3 class="detail-section__title">"Agregar vehículo"</h3>
            <div class="form__row">
                <TextField label="Patente" field="plate" value={value(|d| d.plate.clone())}
                    on_input={input("plate", |d, v| d.plate = v)} errors=draft_errors required=true
                    placeholder="AB 123 CD" />
                <SelectField label="Tipo" field="kind" value={value(|d| d.kind.key().to_string())}
                    on_change={input("kind", |d, v| d.kind = VehicleKind::from_key(&v).unwrap_or_default())}
                    options={kind_options()} errors=draft_errors required=true />
            </div>
            <div class="form__row">
                <TextField label="Marca" field="brand" value={value(|d| d.brand.clone())}
                    on_input={input("brand", |d, v| d.brand = v)} errors=draft_errors required=true />
                <TextField label="Modelo" field="model" value={value(|d| d.model.clone())}
                    on_input={input("model", |d, v| d.model = v)} errors=draft_errors required=true />
                <TextField label="Año" field="year" value={value(|d| d.year.clone())}
                    on_input={input("year", |d, v| d.year = v)} errors=draft_errors required=true
                    input_type="number" />
            </div>
            <Button appearance=ButtonAppearance::Secondary on_click={move |_| add_vehicle()}>
                {icon("plus")}
                "Agregar vehículo"
            </Button>
        </div>

        {move || form.errors.with(|e| e.messages()).into_iter().map(|message| view! {
            <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
        }).collect_view()}

        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=120.0>"Patente"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=130.0>"Tipo"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Marca"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Modelo"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=70.0>"Año"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=50.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || vehicles.get().into_iter().enumerate().map(|(index, v)| view! {
                        <TableRow>
                            <TableCell>{v.plate.clone()}</TableCell>
                            <TableCell>{v.kind.label()}</TableCell>
                            <TableCell>{v.brand.clone()}</TableCell>
                            <TableCell>{v.model.clone()}</TableCell>
                            <TableCell>{v.year.clone()}</TableCell>
                            <TableCell>
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| {
                                        form.state.update(|w| {
                                            w.remove_vehicle(index);
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
            <Show when={move || vehicles.with(Vec::is_empty)}>
                <div class="table__empty">"La flota está vacía"</div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_options_use_keys() {
        let options = kind_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[2], ("rigido".to_string(), "Camión rígido".to_string()));
    }
}
