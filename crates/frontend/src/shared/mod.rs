pub mod blob_preview;
pub mod components;
pub mod config;
pub mod data_stores;
pub mod icons;
pub mod list_utils;
pub mod master_list;
pub mod page_frame;
pub mod page_standard;
pub mod submit;
pub mod wizard_form;
