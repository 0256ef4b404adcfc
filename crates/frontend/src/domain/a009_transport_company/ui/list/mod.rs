use crate::domain::a009_transport_company::ui::details::TransportCompanyDetails;
use crate::shared::master_list::{Column, MasterListPage};
use contracts::domain::a009_transport_company::aggregate::TransportCompany;
use leptos::prelude::*;

const COLUMNS: &[Column<TransportCompany>] = &[
    Column { label: "ID", sort_field: "id", min_width: 60.0, render: |r| r.base.id.to_string() },
    Column { label: "Razón social", sort_field: "description", min_width: 220.0, render: |r| r.base.description.clone() },
    Column { label: "Identificador fiscal", sort_field: "tax_id", min_width: 140.0, render: |r| r.base.code.clone() },
    Column { label: "Ubicación", sort_field: "", min_width: 200.0, render: |r| r.location.display() },
    Column { label: "Permiso", sort_field: "", min_width: 120.0, render: |r| r.permit_number.clone() },
    Column { label: "Vence", sort_field: "permit_expiry", min_width: 100.0, render: |r| r.permit_expiry.format("%d/%m/%Y").to_string() },
    Column { label: "Flota", sort_field: "fleet", min_width: 70.0, render: |r| r.fleet.len().to_string() },
];

fn details(id: Option<String>, _on_saved: Callback<String>, on_cancel: Callback<()>) -> AnyView {
    view! { <TransportCompanyDetails id=id on_cancel=on_cancel /> }.into_any()
}

/// Создание только через мастер; здесь просмотр и смена статуса
#[component]
pub fn TransportCompanyList() -> impl IntoView {
    view! {
        <MasterListPage
            page_id="a009_transport_company--list"
            tab_key="a009_transport_company"
            columns=COLUMNS
            details=details
            search_placeholder="Razón social, identificador, permiso..."
            allow_create=false
        />
    }
}
