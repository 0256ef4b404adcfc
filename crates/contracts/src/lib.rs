//! Общие доменные контракты логистического бэк-офиса.
//!
//! Без привязки к платформе: агрегаты, формы (DTO), валидация, справочник
//! локаций и хранилища в памяти, которые фронтенд использует вместо БД.

pub mod domain;
pub mod shared;
pub mod system;
