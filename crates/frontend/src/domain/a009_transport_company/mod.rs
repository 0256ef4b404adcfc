//! a009: транспортные компании, список и пошаговое создание

pub mod ui;
