pub mod merge;
pub mod parse;
pub mod range;

pub use merge::{merge, total_years};
pub use parse::parse_fragment;
pub use range::DateRangeExtractor;
