use crate::domain::a002_customs_office::ui::details::CustomsOfficeDetails;
use crate::shared::master_list::{Column, MasterListPage};
use contracts::domain::a002_customs_office::aggregate::CustomsOffice;
use leptos::prelude::*;

const COLUMNS: &[Column<CustomsOffice>] = &[
    Column { label: "ID", sort_field: "id", min_width: 60.0, render: |c| c.base.id.to_string() },
    Column { label: "Código", sort_field: "code", min_width: 90.0, render: |c| c.base.code.clone() },
    Column { label: "Nombre", sort_field: "description", min_width: 220.0, render: |c| c.base.description.clone() },
    Column { label: "Ubicación", sort_field: "location", min_width: 220.0, render: |c| c.location.display() },
    Column { label: "Dirección", sort_field: "", min_width: 200.0, render: |c| c.address.clone() },
];

fn details(id: Option<String>, on_saved: Callback<String>, on_cancel: Callback<()>) -> AnyView {
    view! { <CustomsOfficeDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn CustomsOfficeList() -> impl IntoView {
    view! {
        <MasterListPage
            page_id="a002_customs_office--list"
            tab_key="a002_customs_office"
            columns=COLUMNS
            details=details
            search_placeholder="Código, nombre, ciudad..."
        />
    }
}
