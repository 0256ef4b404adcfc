use crate::domain::a004_dispatcher::ui::details::DispatcherDetails;
use crate::shared::master_list::{Column, MasterListPage};
use contracts::domain::a004_dispatcher::aggregate::Dispatcher;
use leptos::prelude::*;

const COLUMNS: &[Column<Dispatcher>] = &[
    Column { label: "ID", sort_field: "id", min_width: 60.0, render: |d| d.base.id.to_string() },
    Column { label: "Nombre / razón social", sort_field: "description", min_width: 220.0, render: |d| d.base.description.clone() },
    Column { label: "CUIT", sort_field: "tax_id", min_width: 130.0, render: |d| d.base.code.clone() },
    Column { label: "Matrícula", sort_field: "license_number", min_width: 110.0, render: |d| d.license_number.clone() },
    Column { label: "Email", sort_field: "email", min_width: 180.0, render: |d| d.email.clone() },
    Column { label: "Ubicación", sort_field: "", min_width: 200.0, render: |d| d.location.display() },
];

fn details(id: Option<String>, on_saved: Callback<String>, on_cancel: Callback<()>) -> AnyView {
    view! { <DispatcherDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn DispatcherList() -> impl IntoView {
    view! {
        <MasterListPage
            page_id="a004_dispatcher--list"
            tab_key="a004_dispatcher"
            columns=COLUMNS
            details=details
            search_placeholder="Nombre, CUIT, matrícula..."
        />
    }
}
