//! a006: получатели и импортёры

pub mod ui;
