use crate::domain::a001_ata::ui::details::AtaDetails;
use crate::shared::master_list::{Column, MasterListPage};
use contracts::domain::a001_ata::aggregate::Ata;
use leptos::prelude::*;

const COLUMNS: &[Column<Ata>] = &[
    Column { label: "ID", sort_field: "id", min_width: 60.0, render: |a| a.base.id.to_string() },
    Column { label: "Razón social", sort_field: "description", min_width: 220.0, render: |a| a.base.description.clone() },
    Column { label: "CUIT / RUT", sort_field: "tax_id", min_width: 130.0, render: |a| a.tax_id().to_string() },
    Column { label: "Ubicación", sort_field: "location", min_width: 220.0, render: |a| a.location.display() },
    Column { label: "Email", sort_field: "email", min_width: 180.0, render: |a| a.email.clone() },
    Column { label: "Teléfono", sort_field: "", min_width: 130.0, render: |a| a.phone.clone() },
];

fn details(id: Option<String>, on_saved: Callback<String>, on_cancel: Callback<()>) -> AnyView {
    view! { <AtaDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn AtaList() -> impl IntoView {
    view! {
        <MasterListPage
            page_id="a001_ata--list"
            tab_key="a001_ata"
            columns=COLUMNS
            details=details
            search_placeholder="Razón social, CUIT, ciudad, email..."
        />
    }
}
