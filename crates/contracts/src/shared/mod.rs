pub mod config;
pub mod documents;
pub mod list_query;
pub mod location;
pub mod submission;
pub mod validation;
pub mod wizard;
