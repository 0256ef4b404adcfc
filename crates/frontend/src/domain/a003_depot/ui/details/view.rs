use crate::shared::components::form_field::TextField;
use crate::shared::components::location_select::LocationSelect;
use crate::shared::master_list::{DetailsBody, DetailsViewModel};
use contracts::domain::a003_depot::aggregate::Depot;
use leptos::prelude::*;

#[component]
pub fn DepotDetails(
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Depot>::new(id);
    let errors = vm.errors;

    view! {
        <DetailsBody vm=vm on_saved=on_saved on_cancel=on_cancel>
            <TextField
                label="Descripción"
                field="description"
                value={vm.field(|f| f.description.clone())}
                on_input={vm.input("description", |f, v| f.description = v)}
                errors=errors
                required=true
            />
            <LocationSelect
                value={vm.location(|f| f.location.clone())}
                on_change={vm.on_location(|f, l| f.location = l)}
                errors=errors
            />
            <TextField
                label="Dirección"
                field="address"
                value={vm.field(|f| f.address.clone())}
                on_input={vm.input("address", |f, v| f.address = v)}
                errors=errors
                required=true
            />
            <div class="form__row">
                <TextField
                    label="Latitud"
                    field="latitude"
                    value={vm.field(|f| f.latitude.clone())}
                    on_input={vm.input("latitude", |f, v| f.latitude = v)}
                    errors=errors
                    required=true
                    placeholder="-34.6037"
                />
                <TextField
                    label="Longitud"
                    field="longitude"
                    value={vm.field(|f| f.longitude.clone())}
                    on_input={vm.input("longitude", |f, v| f.longitude = v)}
                    errors=errors
                    required=true
                    placeholder="-58.3816"
                />
            </div>
        </DetailsBody>
    }
}
