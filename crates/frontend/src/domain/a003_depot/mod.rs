//! a003: склады (Depósitos)

pub mod ui;
