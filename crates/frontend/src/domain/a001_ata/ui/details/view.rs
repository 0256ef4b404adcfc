use crate::shared::components::form_field::TextField;
use crate::shared::components::location_select::LocationSelect;
use crate::shared::master_list::{DetailsBody, DetailsViewModel};
use contracts::domain::a001_ata::aggregate::Ata;
use contracts::shared::validation::tax_id_label;
use leptos::prelude::*;

#[component]
pub fn AtaDetails(
    id: Option<String>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Ata>::new(id);
    let errors = vm.errors;
    // подпись налогового номера зависит от страны (CUIT, RUT...)
    let tax_hint = move || vm.form.with(|f| tax_id_label(&f.location.country));

    view! {
        <DetailsBody vm=vm on_saved=on_saved on_cancel=on_cancel>
            <TextField
                label="Razón social"
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
                label="Identificador fiscal"
                field="tax_id"
                value={vm.field(|f| f.tax_id.clone())}
                on_input={vm.input("tax_id", |f, v| f.tax_id = v)}
                errors=errors
                required=true
                placeholder="Solo números"
            />
            <div class="form__hint">{tax_hint}</div>
            <TextField
                label="Dirección"
                field="address"
                value={vm.field(|f| f.address.clone())}
                on_input={vm.input("address", |f, v| f.address = v)}
                errors=errors
                required=true
            />
            <TextField
                label="Email"
                field="email"
                value={vm.field(|f| f.email.clone())}
                on_input={vm.input("email", |f, v| f.email = v)}
                errors=errors
                required=true
                input_type="email"
            />
            <TextField
                label="Teléfono"
                field="phone"
                value={vm.field(|f| f.phone.clone())}
                on_input={vm.input("phone", |f, v| f.phone = v)}
                errors=errors
                input_type="tel"
            />
        </DetailsBody>
    }
}
