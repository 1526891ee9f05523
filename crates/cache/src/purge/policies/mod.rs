//! Purge policy implementations

mod count;
mod ratio;

pub use count::DeadCountPolicy;
pub use ratio::DeadRatioPolicy;
