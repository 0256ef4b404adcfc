//! Общая механика страниц-справочников a001–a007 и a009.
//!
//! - state.rs: запрос списка и выбор строк (запрос живёт в контексте вкладки)
//! - details.rs: ViewModel формы создания/редактирования
//! - page.rs: страница списка с диалогом карточки

pub mod details;
pub mod page;
pub mod state;

pub use details::{DetailsBody, DetailsViewModel};
pub use page::{Column, DetailsFn, MasterListPage};
pub use state::ListState;
