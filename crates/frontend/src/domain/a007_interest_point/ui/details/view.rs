use crate::shared::components::form_field::{SelectField, TextField};
use crate::shared::components::location_select::LocationSelect;
use crate::shared::master_list::{DetailsBody, DetailsViewModel};
use contracts::domain::a007_interest_point::aggregate::{InterestPoint, InterestPointKind};
use leptos::prelude::*;

fn kind_options() -> Vec<(String, String)> {
    InterestPointKind::all()
        .iter()
        .map(|k| (k.key().to_string(), k.label().to_string()))
        .collect()
}

#[component]
pub fn InterestPointDetails(
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<InterestPoint>::new(id);
    let errors = vm.errors;

    let on_kind = Callback::new(move |key: String| {
        if let Some(kind) = InterestPointKind::from_key(&key) {
            vm.set("kind", |f| f.kind = kind);
        }
    });

    view! {
        <DetailsBody vm=vm on_saved=on_saved on_cancel=on_cancel>
            <TextField
                label="Nombre"
                field="description"
                value={vm.field(|f| f.description.clone())}
                on_input={vm.input("description", |f, v| f.description = v)}
                errors=errors
                required=true
            />
            <SelectField
                label="Tipo"
                field="kind"
                value={vm.field(|f| f.kind.key().to_string())}
                on_change=on_kind
                options={kind_options()}
                errors=errors
                required=true
            />
            <LocationSelect
                value={vm.location(|f| f.location.clone())}
                on_change={vm.on_location(|f, l| f.location = l)}
                errors=errors
            />
            <div class="form__row">
                <TextField
                    label="Latitud"
                    field="latitude"
                    value={vm.field(|f| f.latitude.clone())}
                    on_input={vm.input("latitude", |f, v| f.latitude = v)}
                    errors=errors
                    required=true
                />
                <TextField
                    label="Longitud"
                    field="longitude"
                    value={vm.field(|f| f.longitude.clone())}
                    on_input={vm.input("longitude", |f, v| f.longitude = v)}
                    errors=errors
                    required=true
                />
                <TextField
                    label="Radio (m)"
                    field="radius_m"
                    value={vm.field(|f| f.radius_m.clone())}
                    on_input={vm.input("radius_m", |f, v| f.radius_m = v)}
                    errors=errors
                    required=true
                    input_type="number"
                />
            </div>
        </DetailsBody>
    }
}
