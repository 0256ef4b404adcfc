mod view;

pub use view::ShipperDetails;
