//! TopHeader: верхняя панель приложения.
//!
//! Кнопка боковой панели, заголовок и счётчик открытых тревог.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::data_stores::DataStores;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let stores = DataStores::use_context();

    let is_sidebar_visible = move || ctx.left_open.get();
    let open_alerts = move || stores.alerts.with(|board| board.summary().open);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click={move |_| ctx.toggle_left()}
                    title={move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }}
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Back-office logístico"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Alertas de seguridad abiertas"
                    on:click=move |_| {
                        ctx.open_tab("a010_security_alert", tab_label_for_key("a010_security_alert"))
                    }
                >
                    {icon("bell")}
                    {move || {
                        let count = open_alerts();
                        (count > 0).then(|| view! { <span class="top-header__badge">{count}</span> })
                    }}
                </button>
            </div>
        </div>
    }
}
