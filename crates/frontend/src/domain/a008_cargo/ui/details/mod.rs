mod view;

pub use view::CargoDetails;
