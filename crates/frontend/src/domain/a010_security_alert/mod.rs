//! a010: тревоги безопасности (Alertas de seguridad)

pub mod ui;
