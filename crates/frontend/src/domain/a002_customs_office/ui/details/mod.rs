mod view;

pub use view::CustomsOfficeDetails;
