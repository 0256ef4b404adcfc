mod view;

pub use view::DepotDetails;
