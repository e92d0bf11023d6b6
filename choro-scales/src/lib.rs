pub mod binning;
pub mod error;
pub mod format;
pub mod gradient;
