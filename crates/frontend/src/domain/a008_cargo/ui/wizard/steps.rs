use super::CargoForm;
use crate::shared::components::form_field::{SelectField, TextField};
use crate::shared::components::location_select::LocationSelect;
use crate::shared::data_stores::{active_options, DataStores};
use contracts::domain::a002_customs_office::aggregate::CustomsOffice;
use contracts::domain::a005_shipper::aggregate::Shipper;
use contracts::domain::a006_consignee::aggregate::Consignee;
use leptos::prelude::*;

#[component]
pub fn GeneralStep(form: CargoForm) -> impl IntoView {
    let stores = DataStores::use_context();
    let errors = form.errors;

    view! {
        <div class="details-form">
            <TextField
                label="Referencia"
                field="reference"
                value={form.field(|w| w.general.reference.clone())}
                on_input={form.input("reference", |w, v| w.general.reference = v)}
                errors=errors
                required=true
                placeholder="EXP-2024-0001"
            />
            <div class="form__row">
                <SelectField
                    label="Remitente / Exportador"
                    field="shipper"
                    value={form.field(|w| w.general.shipper.clone())}
                    on_change={form.input("shipper", |w, v| w.general.shipper = v)}
                    options={active_options::<Shipper>(&stores)}
                    errors=errors
                    required=true
                />
                <SelectField
                    label="Importador / Destinatario"
                    field="consignee"
                    value={form.field(|w| w.general.consignee.clone())}
                    on_change={form.input("consignee", |w, v| w.general.consignee = v)}
                    options={active_options::<Consignee>(&stores)}
                    errors=errors
                    required=true
                />
            </div>
            <div class="form__row">
                <SelectField
                    label="Aduana de origen"
                    field="origin_customs"
                    value={form.field(|w| w.general.origin_customs.clone())}
                    on_change={form.input("origin_customs", |w, v| w.general.origin_customs = v)}
                    options={active_options::<CustomsOffice>(&stores)}
                    errors=errors
                    required=true
                />
                <SelectField
                    label="Aduana de destino"
                    field="destination_customs"
                    value={form.field(|w| w.general.destination_customs.clone())}
                    on_change={form.input("destination_customs", |w, v| w.general.destination_customs = v)}
                    options={active_options::<CustomsOffice>(&stores)}
                    errors=errors
                    required=true
                />
            </div>
        </div>
    }
}

#[component]
pub fn RouteStep(form: CargoForm) -> impl IntoView {
    let errors = form.errors;

    view! {
        <div class="details-form">
            <h3 class="detail-section__title">"Origen"</h3>
            <LocationSelect
                value={form.location(|w| w.route.origin.clone())}
                on_change={form.on_location("origin", |w, l| w.route.origin = l)}
                errors=errors
                prefix="origin"
            />
            <h3 class="detail-section__title">"Destino"</h3>
            <LocationSelect
                value={form.location(|w| w.route.destination.clone())}
                on_change={form.on_location("destination", |w, l| w.route.destination = l)}
                errors=errors
                prefix="destination"
            />
        </div>
    }
}

#[component]
pub fn GoodsStep(form: CargoForm) -> impl IntoView {
    let errors = form.errors;

    view! {
        <div class="details-form">
            <TextField
                label="Descripción de la mercadería"
                field="description"
                value={form.field(|w| w.goods.description.clone())}
                on_input={form.input("description", |w, v| w.goods.description = v)}
                errors=errors
                required=true
            />
            <div class="form__row">
                <TextField
                    label="Bultos"
                    field="packages"
                    value={form.field(|w| w.goods.packages.clone())}
                    on_input={form.input("packages", |w, v| w.goods.packages = v)}
                    errors=errors
                    required=true
                    input_type="number"
                />
                <TextField
                    label="Peso bruto (kg)"
                    field="gross_weight_kg"
                    value={form.field(|w| w.goods.gross_weight_kg.clone())}
                    on_input={form.input("gross_weight_kg", |w, v| w.goods.gross_weight_kg = v)}
                    errors=errors
                    required=true
                    input_type="number"
                />
                <TextField
                    label="Valor declarado (USD)"
                    field="declared_value_usd"
                    value={form.field(|w| w.goods.declared_value_usd.clone())}
                    on_input={form.input("declared_value_usd", |w, v| w.goods.declared_value_usd = v)}
                    errors=errors
                    required=true
                    input_type="number"
                />
            </div>
        </div>
    }
}

/// Сводка перед созданием груза
#[component]
pub fn ReviewStep(form: CargoForm) -> impl IntoView {
    let wizard = form.state.get_untracked();
    let g = wizard.general.clone();
    let goods = wizard.goods.clone();

    view! {
        <div class="detail-grid">
            <div class="detail-section">
                <h3 class="detail-section__title">"General"</h3>
                <dl class="detail-list">
                    <dt>"Referencia"</dt><dd>{g.reference}</dd>
                    <dt>"Remitente"</dt><dd>{g.shipper}</dd>
                    <dt>"Destinatario"</dt><dd>{g.consignee}</dd>
                    <dt>"Aduanas"</dt><dd>{format!("{} → {}", g.origin_customs, g.destination_customs)}</dd>
                    <dt>"Ruta"</dt>
                    <dd>{format!("{} → {}", wizard.route.origin.display(), wizard.route.destination.display())}</dd>
                </dl>
            </div>
            <div class="detail-section">
                <h3 class="detail-section__title">"Mercadería"</h3>
                <dl class="detail-list">
                    <dt>"Descripción"</dt><dd>{goods.description}</dd>
                    <dt>"Bultos"</dt><dd>{goods.packages}</dd>
                    <dt>"Peso bruto (kg)"</dt><dd>{goods.gross_weight_kg}</dd>
                    <dt>"Valor declarado (USD)"</dt><dd>{goods.declared_value_usd}</dd>
                </dl>
            </div>
            <div class="detail-section">
                <h3 class="detail-section__title">"Viajes y documentos"</h3>
                <ul class="review-list">
                    {wizard.trips().iter().map(|t| view! {
                        <li>{format!("Viaje {}: {} ({} → {})", t.number, t.driver, t.origin, t.destination)}</li>
                    }).collect_view()}
                    {wizard.attachments().iter().map(|a| view! {
                        <li>{format!("{}: {}", a.kind.label(), a.file_name)}</li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
