pub mod gaps;
pub mod intervals;
pub mod merge;
