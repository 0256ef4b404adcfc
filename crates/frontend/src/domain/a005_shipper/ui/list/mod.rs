use crate::domain::a005_shipper::ui::details::ShipperDetails;
use crate::shared::master_list::{Column, MasterListPage};
use contracts::domain::a005_shipper::aggregate::Shipper;
use leptos::prelude::*;

const COLUMNS: &[Column<Shipper>] = &[
    Column { label: "ID", sort_field: "id", min_width: 60.0, render: |r| r.base.id.to_string() },
    Column { label: "Razón social", sort_field: "description", min_width: 220.0, render: |r| r.base.description.clone() },
    Column { label: "Identificador fiscal", sort_field: "tax_id", min_width: 140.0, render: |r| r.base.code.clone() },
    Column { label: "Ubicación", sort_field: "location", min_width: 220.0, render: |r| r.location.display() },
    Column { label: "Email", sort_field: "", min_width: 180.0, render: |r| r.email.clone() },
];

fn details(id: Option<String>, on_saved: Callback<String>, on_cancel: Callback<()>) -> AnyView {
    view! { <ShipperDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn ShipperList() -> impl IntoView {
    view! {
        <MasterListPage
            page_id="a005_shipper--list"
            tab_key="a005_shipper"
            columns=COLUMNS
            details=details
            search_placeholder="Razón social, identificador, ciudad..."
        />
    }
}
