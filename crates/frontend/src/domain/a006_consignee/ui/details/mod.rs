mod view;

pub use view::ConsigneeDetails;
