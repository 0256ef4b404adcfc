pub mod details;
pub mod list;
pub mod wizard;

use contracts::domain::a008_cargo::aggregate::{CargoStatus, TripStatus};
use thaw::BadgeColor;

pub fn cargo_status_color(status: CargoStatus) -> BadgeColor {
    match status {
        CargoStatus::Pendiente => BadgeColor::Informative,
        CargoStatus::EnCurso => BadgeColor::Warning,
        CargoStatus::Finalizada => BadgeColor::Success,
    }
}

pub fn trip_status_color(status: TripStatus) -> BadgeColor {
    match status {
        TripStatus::Programado => BadgeColor::Subtle,
        TripStatus::EnTransito => BadgeColor::Brand,
        TripStatus::EnAduana => BadgeColor::Warning,
        TripStatus::Entregado => BadgeColor::Success,
    }
}
