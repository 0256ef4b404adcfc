pub mod document_upload;
pub mod form_field;
pub mod location_select;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
pub mod step_indicator;
pub mod submit_message;
pub mod table;
