//! a007: точки интереса (геозоны)

pub mod ui;
