use crate::shared::list_query::any_field_contains;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

crate::sequential_id!(
    /// Последовательный идентификатор тревоги
    SecurityAlertId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    RouteDeviation,
    UnauthorizedStop,
    DoorOpening,
    GpsSignalLost,
    Speeding,
    PanicButton,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::RouteDeviation => "Desvío de ruta",
            AlertKind::UnauthorizedStop => "Parada no autorizada",
            AlertKind::DoorOpening => "Apertura de puertas",
            AlertKind::GpsSignalLost => "Pérdida de señal GPS",
            AlertKind::Speeding => "Exceso de velocidad",
            AlertKind::PanicButton => "Botón de pánico",
        }
    }
}

/// Порядок объявления = приоритет: Alta < Media < Baja
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Alta,
    Media,
    Baja,
}

impl Severity {
    pub fn all() -> &'static [Severity] {
        &[Severity::Alta, Severity::Media, Severity::Baja]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Alta => "Alta",
            Severity::Media => "Media",
            Severity::Baja => "Baja",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertStatus {
    Nueva,
    EnRevision,
    Resuelta,
}

impl AlertStatus {
    pub fn all() -> &'static [AlertStatus] {
        &[AlertStatus::Nueva, AlertStatus::EnRevision, AlertStatus::Resuelta]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Nueva => "Nueva",
            AlertStatus::EnRevision => "En revisión",
            AlertStatus::Resuelta => "Resuelta",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }

    pub fn is_open(&self) -> bool {
        *self != AlertStatus::Resuelta
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityAlert {
    pub id: SecurityAlertId,
    #[serde(rename = "carga")]
    pub cargo_ref: String,
    #[serde(rename = "viaje")]
    pub trip_number: u32,
    #[serde(rename = "chofer")]
    pub driver: String,
    #[serde(rename = "tipo")]
    pub kind: AlertKind,
    #[serde(rename = "severidad")]
    pub severity: Severity,
    #[serde(rename = "estado")]
    pub status: AlertStatus,
    #[serde(rename = "fecha")]
    pub raised_at: NaiveDateTime,
    #[serde(rename = "lugar")]
    pub place: String,
    #[serde(rename = "notas")]
    pub notes: Vec<String>,
}

impl SecurityAlert {
    pub fn matches_text(&self, needle: &str) -> bool {
        any_field_contains(
            &[
                self.cargo_ref.as_str(),
                self.driver.as_str(),
                self.place.as_str(),
                self.kind.label(),
            ],
            needle,
        )
    }
}

pub fn demo_alerts() -> Vec<SecurityAlert> {
    let at = |d: u32, h: u32, m: u32| {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .and_then(|date| date.and_hms_opt(h, m, 0))
            .unwrap_or_default()
    };
    let rows = [
        ("EXP-2024-0113", 2, "Juan Pérez", AlertKind::UnauthorizedStop, Severity::Media, AlertStatus::Nueva, at(6, 11, 40), "RN 7 km 1150, Uspallata"),
        ("EXP-2024-0113", 2, "Juan Pérez", AlertKind::GpsSignalLost, Severity::Alta, AlertStatus::EnRevision, at(6, 13, 5), "Paso Cristo Redentor"),
        ("EXP-2024-0127", 1, "Marcelo Gómez", AlertKind::Speeding, Severity::Baja, AlertStatus::Resuelta, at(5, 22, 15), "RN 14 km 480"),
        ("EXP-2024-0098", 1, "Luis Fernández", AlertKind::DoorOpening, Severity::Alta, AlertStatus::Nueva, at(7, 3, 50), "Ruta 1, Colonia"),
        ("EXP-2024-0127", 1, "Marcelo Gómez", AlertKind::RouteDeviation, Severity::Media, AlertStatus::Nueva, at(7, 8, 20), "Paso de los Libres"),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(i, (cargo, trip, driver, kind, severity, status, raised_at, place))| SecurityAlert {
            id: SecurityAlertId(i as i64 + 1),
            cargo_ref: cargo.to_string(),
            trip_number: trip,
            driver: driver.to_string(),
            kind,
            severity,
            status,
            raised_at,
            place: place.to_string(),
            notes: Vec::new(),
        })
        .collect()
}
