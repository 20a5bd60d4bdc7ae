use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BmiError {
    #[error("Please enter valid height and weight values")]
    InvalidMeasurement,

    #[error("An error occurred while calculating BMI")]
    Computation,

    #[error("Unknown unit system: {0}")]
    UnknownUnitSystem(String),
}
