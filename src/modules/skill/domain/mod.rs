pub mod grouping;

pub use grouping::group_by_category;
