use crate::shared::data_stores::DataStores;
use contracts::domain::a009_transport_company::aggregate::{TransportCompany, TransportCompanyId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;
use thaw::*;

/// Карточка компании только для чтения: данные, разрешение и парк
#[component]
pub fn TransportCompanyDetails(id: Option<String>, on_cancel: Callback<()>) -> impl IntoView {
    let stores = DataStores::use_context();
    let company: Option<TransportCompany> = id
        .and_then(|raw| TransportCompanyId::from_string(&raw).ok())
        .and_then(|id| stores.transport_companies.with_untracked(|s| s.get(id).cloned()));

    let body = match company {
        None => view! { <p class="text-muted">"Empresa no encontrada"</p> }.into_any(),
        Some(c) => view! {
            <dl class="detail-list">
                <dt>"Razón social"</dt><dd>{c.description().to_string()}</dd>
                <dt>"Identificador fiscal"</dt><dd>{c.tax_id().to_string()}</dd>
                <dt>"Ubicación"</dt><dd>{c.location.display()}</dd>
                <dt>"Dirección"</dt><dd>{c.address.clone()}</dd>
                <dt>"Email"</dt><dd>{c.email.clone()}</dd>
                <dt>"Teléfono"</dt><dd>{c.phone.clone()}</dd>
                <dt>"Permiso internacional"</dt><dd>{c.permit_number.clone()}</dd>
                <dt>"Vencimiento"</dt><dd>{c.permit_expiry.format("%d/%m/%Y").to_string()}</dd>
            </dl>
            <h3 class="detail-section__title">{format!("Flota ({})", c.fleet.len())}</h3>
            <ul class="review-list">
                {c.fleet.iter().map(|v| view! {
                    <li>{format!("{} · {} {} {} ({})", v.plate, v.kind.label(), v.brand, v.model, v.year)}</li>
                }).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <DialogBody>
            <DialogTitle>{TransportCompany::element_name()}</DialogTitle>
            <DialogContent>{body}</DialogContent>
            <DialogActions>
                <Button appearance=ButtonAppearance::Secondary on_click={move |_| on_cancel.run(())}>
                    "Cerrar"
                </Button>
            </DialogActions>
        </DialogBody>
    }
}
