pub mod error;
pub mod helper;
pub mod legend;
pub mod style;
