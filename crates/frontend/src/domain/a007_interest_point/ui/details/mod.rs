mod view;

pub use view::InterestPointDetails;
