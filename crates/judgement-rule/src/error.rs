use judgement_model::HitResult;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Invalid hit result range: {min} .. {max}")]
    InvalidRange { min: HitResult, max: HitResult },

    #[error("Invalid hit result range for object type {object_type}: {min} .. {max}")]
    InvalidObjectRange {
        object_type: String,
        min: HitResult,
        max: HitResult,
    },

    #[error("Unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("Hit result {result} is outside {min} .. {max}")]
    OutOfRange {
        result: HitResult,
        min: HitResult,
        max: HitResult,
    },

    #[error("Inconsistent statistics: combo {combo} exceeds max combo {max_combo}")]
    InconsistentCombo { combo: u32, max_combo: u32 },
}
