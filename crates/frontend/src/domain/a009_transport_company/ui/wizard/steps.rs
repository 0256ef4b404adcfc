use super::CompanyForm;
use crate::shared::components::form_field::TextField;
use crate::shared::components::location_select::LocationSelect;
use contracts::shared::validation::tax_id_label;
use leptos::prelude::*;

#[component]
pub fn CompanyDataStep(form: CompanyForm) -> impl IntoView {
    let errors = form.errors;
    let tax_hint = move || form.state.with(|w| tax_id_label(&w.form.location.country));

    view! {
        <div class="details-form">
            <TextField
                label="Razón social"
                field="description"
                value={form.field(|w| w.form.description.clone())}
                on_input={form.input("description", |w, v| w.form.description = v)}
                errors=errors
                required=true
            />
            <LocationSelect
                value={form.location(|w| w.form.location.clone())}
                on_change={form.on_location("", |w, l| w.form.location = l)}
                errors=errors
            />
            <TextField
                label="Identificador fiscal"
                field="tax_id"
                value={form.field(|w| w.form.tax_id.clone())}
                on_input={form.input("tax_id", |w, v| w.form.tax_id = v)}
                errors=errors
                required=true
            />
            <span class="form__hint">{tax_hint}</span>
            <TextField
                label="Dirección"
                field="address"
                value={form.field(|w| w.form.address.clone())}
                on_input={form.input("address", |w, v| w.form.address = v)}
                errors=errors
                required=true
            />
            <div class="form__row">
                <TextField
                    label="Email"
                    field="email"
                    value={form.field(|w| w.form.email.clone())}
                    on_input={form.input("email", |w, v| w.form.email = v)}
                    errors=errors
                    required=true
                    input_type="email"
                />
                <TextField
                    label="Teléfono"
                    field="phone"
                    value={form.field(|w| w.form.phone.clone())}
                    on_input={form.input("phone", |w, v| w.form.phone = v)}
                    errors=errors
                    required=true
                />
            </div>
        </div>
    }
}

#[component]
pub fn PermitStep(form: CompanyForm) -> impl IntoView {
    let errors = form.errors;

    view! {
        <div class="details-form">
            <div class="form__row">
                <TextField
                    label="N° de permiso internacional"
                    field="permit_number"
                    value={form.field(|w| w.form.permit_number.clone())}
                    on_input={form.input("permit_number", |w, v| w.form.permit_number = v)}
                    errors=errors
                    required=true
                />
                <TextField
                    label="Vencimiento del permiso"
                    field="permit_expiry"
                    value={form.field(|w| w.form.permit_expiry.clone())}
                    on_input={form.input("permit_expiry", |w, v| w.form.permit_expiry = v)}
                    errors=errors
                    required=true
                    input_type="date"
                />
            </div>
        </div>
    }
}

#[component]
pub fn ReviewStep(form: CompanyForm) -> impl IntoView {
    let dto = form.state.with_untracked(|w| w.form.clone());

    view! {
        <div class="detail-grid">
            <div class="detail-section">
                <h3 class="detail-section__title">"Empresa"</h3>
                <dl class="detail-list">
                    <dt>"Razón social"</dt><dd>{dto.description.clone()}</dd>
                    <dt>{tax_id_label(&dto.location.country)}</dt><dd>{dto.tax_id.clone()}</dd>
                    <dt>"Ubicación"</dt><dd>{dto.location.display()}</dd>
                    <dt>"Dirección"</dt><dd>{dto.address.clone()}</dd>
                    <dt>"Contacto"</dt><dd>{format!("{} · {}", dto.email, dto.phone)}</dd>
                </dl>
            </div>
            <div class="detail-section">
                <h3 class="detail-section__title">"Permiso"</h3>
                <dl class="detail-list">
                    <dt>"Número"</dt><dd>{dto.permit_number.clone()}</dd>
                    <dt>"Vencimiento"</dt><dd>{dto.permit_expiry.clone()}</dd>
                </dl>
            </div>
            <div class="detail-section">
                <h3 class="detail-section__title">{format!("Flota ({})", dto.vehicles.len())}</h3>
                <ul class="review-list">
                    {dto.vehicles.iter().map(|v| view! {
                        <li>{format!("{} · {} {} {} ({})", v.plate, v.kind.label(), v.brand, v.model, v.year)}</li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
