use crate::domain::a007_interest_point::ui::details::InterestPointDetails;
use crate::shared::master_list::{Column, MasterListPage};
use contracts::domain::a007_interest_point::aggregate::InterestPoint;
use leptos::prelude::*;

const COLUMNS: &[Column<InterestPoint>] = &[
    Column { label: "ID", sort_field: "id", min_width: 60.0, render: |p| p.base.id.to_string() },
    Column { label: "Nombre", sort_field: "description", min_width: 220.0, render: |p| p.base.description.clone() },
    Column { label: "Tipo", sort_field: "kind", min_width: 150.0, render: |p| p.kind.label().to_string() },
    Column { label: "Ubicación", sort_field: "location", min_width: 220.0, render: |p| p.location.display() },
    Column { label: "Radio (m)", sort_field: "radius_m", min_width: 90.0, render: |p| p.radius_m.to_string() },
];

fn details(id: Option<String>, on_saved: Callback<String>, on_cancel: Callback<()>) -> AnyView {
    view! { <InterestPointDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn InterestPointList() -> impl IntoView {
    view! {
        <MasterListPage
            page_id="a007_interest_point--list"
            tab_key="a007_interest_point"
            columns=COLUMNS
            details=details
            search_placeholder="Nombre, tipo, ciudad..."
        />
    }
}
