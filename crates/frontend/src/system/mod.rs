//! Системные страницы: регистрация пользователей и водителей

pub mod registration;
