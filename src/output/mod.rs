//! Reporting over the harvested store

mod stats;

pub use stats::{load_statistics, print_statistics, HarvestStatistics};
