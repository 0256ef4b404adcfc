//! a004: таможенные брокеры (Despachantes)

pub mod ui;
