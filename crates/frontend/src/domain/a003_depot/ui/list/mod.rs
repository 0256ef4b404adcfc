use crate::domain::a003_depot::ui::details::DepotDetails;
use crate::shared::master_list::{Column, MasterListPage};
use contracts::domain::a003_depot::aggregate::Depot;
use leptos::prelude::*;

const COLUMNS: &[Column<Depot>] = &[
    Column { label: "ID", sort_field: "id", min_width: 60.0, render: |d| d.base.id.to_string() },
    Column { label: "Descripción", sort_field: "description", min_width: 220.0, render: |d| d.base.description.clone() },
    Column { label: "Ubicación", sort_field: "location", min_width: 220.0, render: |d| d.location.display() },
    Column { label: "Dirección", sort_field: "address", min_width: 200.0, render: |d| d.address.clone() },
    Column { label: "Coordenadas", sort_field: "", min_width: 160.0, render: |d| d.coordinates() },
];

fn details(id: Option<String>, on_saved: Callback<String>, on_cancel: Callback<()>) -> AnyView {
    view! { <DepotDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn DepotList() -> impl IntoView {
    view! {
        <MasterListPage
            page_id="a003_depot--list"
            tab_key="a003_depot"
            columns=COLUMNS
            details=details
            search_placeholder="Descripción, dirección, ciudad..."
        />
    }
}
