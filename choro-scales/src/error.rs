#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ChoroScaleError {
    #[error("Color ramp has no color stops")]
    EmptyColorStops,

    #[error("Unknown bin method: {0}")]
    InvalidBinMethod(String),
}
