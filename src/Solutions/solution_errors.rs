use thiserror::Error;

/// error types for construction and mixing of aqueous solutions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Volume must be positive, got {volume} L")]
    NonPositiveVolume { volume: f64 },
    #[error("Zero {species} moles: log10(0) is undefined")]
    ZeroConcentration { species: &'static str },
    #[error("{quantity} is not finite: {value}")]
    NonFinite { quantity: &'static str, value: f64 },
    #[error("Water dissociation constant must be positive and finite, got {k_w}")]
    NonPositiveDissociationConstant { k_w: f64 },
}
