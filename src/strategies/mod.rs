//! Merchant strategy chains.
//!
//! Each strategy is a pure function from one data source (API response, HTML,
//! URL) to a [`crate::types::PartialProduct`]. Chains are composed by the
//! importer, which merges results field-independently in priority order.

pub mod amazon;
pub mod havan;
pub mod shopee;
