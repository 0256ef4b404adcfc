use crate::shared::components::form_field::TextField;
use crate::shared::components::location_select::LocationSelect;
use crate::shared::master_list::{DetailsBody, DetailsViewModel};
use contracts::domain::a002_customs_office::aggregate::CustomsOffice;
use leptos::prelude::*;

#[component]
pub fn CustomsOfficeDetails(
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<CustomsOffice>::new(id);
    let errors = vm.errors;

    view! {
        <DetailsBody vm=vm on_saved=on_saved on_cancel=on_cancel>
            <TextField
                label="Código"
                field="code"
                value={vm.field(|f| f.code.clone())}
                on_input={vm.input("code", |f, v| f.code = v)}
                errors=errors
                required=true
                placeholder="Mínimo 3 dígitos"
            />
            <TextField
                label="Nombre"
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
        </DetailsBody>
    }
}
