#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod fetch;
pub mod importer;
pub mod normalize;
pub mod source;
pub mod strategies;
pub mod trace;
pub mod types;

pub use error::*;
pub use importer::*;
pub use source::*;
pub use trace::*;
pub use types::*;
