mod view;

pub use view::AtaDetails;
