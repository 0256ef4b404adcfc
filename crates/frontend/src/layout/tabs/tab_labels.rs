//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Для справочников используется `list_name` из contracts, для остальных
//! страниц — хардкод.

use contracts::domain::a001_ata::aggregate::Ata;
use contracts::domain::a002_customs_office::aggregate::CustomsOffice;
use contracts::domain::a003_depot::aggregate::Depot;
use contracts::domain::a004_dispatcher::aggregate::Dispatcher;
use contracts::domain::a005_shipper::aggregate::Shipper;
use contracts::domain::a006_consignee::aggregate::Consignee;
use contracts::domain::a007_interest_point::aggregate::InterestPoint;
use contracts::domain::a009_transport_company::aggregate::TransportCompany;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Справочники ──────────────────────────────────────────────────
        "a001_ata" => Ata::list_name(),
        "a002_customs_office" => CustomsOffice::list_name(),
        "a003_depot" => Depot::list_name(),
        "a004_dispatcher" => Dispatcher::list_name(),
        "a005_shipper" => Shipper::list_name(),
        "a006_consignee" => Consignee::list_name(),
        "a007_interest_point" => InterestPoint::list_name(),

        // ── Операции ────────────────────────────────────────────────────
        "a008_cargo" => "Cargas y viajes",
        "a008_cargo_wizard" => "Nueva carga",
        "a009_transport_company" => TransportCompany::list_name(),
        "a009_transport_company_wizard" => "Alta de empresa de transporte",

        // ── Безопасность ─────────────────────────────────────────────────────
        "a010_security_alert" => "Alertas de seguridad",

        // ── Регистрация ──────────────────────────────────────────────────────
        "sys_user_registration" => "Registro de usuario",
        "sys_driver_registration" => "Registro de chofer",

        _ => "",
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
///
/// Пример: `detail_tab_label("Carga", "CRG-20240301")` → `"Carga · CRG-20240301"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_key_has_label() {
        for key in [
            "a001_ata",
            "a003_depot",
            "a008_cargo_wizard",
            "a010_security_alert",
            "sys_driver_registration",
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "no label for {key}");
        }
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn test_detail_label() {
        assert_eq!(detail_tab_label("Carga", "CRG-1"), "Carga · CRG-1");
    }
}
