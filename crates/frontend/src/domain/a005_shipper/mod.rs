//! a005: отправители и экспортёры

pub mod ui;
