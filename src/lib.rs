pub mod adapters;
pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

pub use domain::extract::ListingExtractor;
pub use domain::record::ListingRecord;

#[cfg(test)]
pub mod test_helpers;
