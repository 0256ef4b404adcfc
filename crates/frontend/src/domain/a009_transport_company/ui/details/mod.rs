mod view;

pub use view::TransportCompanyDetails;
