pub mod column;
pub mod types;
