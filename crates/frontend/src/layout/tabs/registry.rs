//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Все tab keys собраны здесь в одном месте.

use crate::domain::a001_ata::ui::list::AtaList;
use crate::domain::a002_customs_office::ui::list::CustomsOfficeList;
use crate::domain::a003_depot::ui::list::DepotList;
use crate::domain::a004_dispatcher::ui::list::DispatcherList;
use crate::domain::a005_shipper::ui::list::ShipperList;
use crate::domain::a006_consignee::ui::list::ConsigneeList;
use crate::domain::a007_interest_point::ui::list::InterestPointList;
use crate::domain::a008_cargo::ui::details::CargoDetails;
use crate::domain::a008_cargo::ui::list::CargoList;
use crate::domain::a008_cargo::ui::wizard::CargoWizardPage;
use crate::domain::a009_transport_company::ui::list::TransportCompanyList;
use crate::domain::a009_transport_company::ui::wizard::TransportCompanyWizardPage;
use crate::domain::a010_security_alert::ui::dashboard::AlertsDashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::system::registration::ui::{DriverRegistrationPage, UserRegistrationPage};
use leptos::prelude::*;

/// Префикс вкладки просмотра груза: `a008_cargo_detail_{id}`
pub const CARGO_DETAIL_PREFIX: &str = "a008_cargo_detail_";

/// Рендерит контент таба по его ключу.
///
/// # Аргументы
/// * `key` - уникальный ключ таба (например "a003_depot", "a008_cargo_detail_CRG-...")
/// * `tabs_store` - контекст для закрытия таба (используется в detail-views с on_close)
///
/// # Результат
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Справочники (a001-a007)
        // ═══════════════════════════════════════════════════════════════════
        "a001_ata" => view! { <AtaList /> }.into_any(),
        "a002_customs_office" => view! { <CustomsOfficeList /> }.into_any(),
        "a003_depot" => view! { <DepotList /> }.into_any(),
        "a004_dispatcher" => view! { <DispatcherList /> }.into_any(),
        "a005_shipper" => view! { <ShipperList /> }.into_any(),
        "a006_consignee" => view! { <ConsigneeList /> }.into_any(),
        "a007_interest_point" => view! { <InterestPointList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Операции (a008-a009)
        // ═══════════════════════════════════════════════════════════════════
        "a008_cargo" => view! { <CargoList /> }.into_any(),
        "a008_cargo_wizard" => view! { <CargoWizardPage /> }.into_any(),
        k if k.starts_with(CARGO_DETAIL_PREFIX) => {
            let id = k.trim_start_matches(CARGO_DETAIL_PREFIX).to_string();
            view! {
                <CargoDetails
                    id=id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }
        "a009_transport_company" => view! { <TransportCompanyList /> }.into_any(),
        "a009_transport_company_wizard" => view! { <TransportCompanyWizardPage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Безопасность (a010)
        // ═══════════════════════════════════════════════════════════════════
        "a010_security_alert" => view! { <AlertsDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Системные страницы
        // ═══════════════════════════════════════════════════════════════════
        "sys_user_registration" => view! { <UserRegistrationPage /> }.into_any(),
        "sys_driver_registration" => view! { <DriverRegistrationPage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Неизвестный ключ
        // ═══════════════════════════════════════════════════════════════════
        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Página no disponible"}</div> }.into_any()
        }
    }
}
