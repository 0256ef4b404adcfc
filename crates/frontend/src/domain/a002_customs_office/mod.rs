//! a002: таможни (Aduanas)

pub mod ui;
