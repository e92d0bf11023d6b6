use choro_scales::error::ChoroScaleError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ChoroGuidesError {
    #[error("Invalid scale: {0}")]
    InvalidScale(#[from] ChoroScaleError),

    #[error("Invalid legend style: {0}")]
    InvalidStyle(String),
}
