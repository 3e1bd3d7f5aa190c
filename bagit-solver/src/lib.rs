//! The front-end of the BagIt solver: reading instances from the line-oriented text format and
//! writing the resulting packing.
//!
//! The solver itself lives in [`core`]; see [`bagit_core`] for its documentation.
pub mod instance;
pub mod output;

pub use bagit_core as core;
