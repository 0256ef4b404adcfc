//! a001: ATA, таможенные транспортные агенты

pub mod ui;
