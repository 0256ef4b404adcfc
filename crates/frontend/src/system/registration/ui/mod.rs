mod driver_form;
mod user_form;

pub use driver_form::DriverRegistrationPage;
pub use user_form::UserRegistrationPage;
