mod view;

pub use view::DispatcherDetails;
