// Hit result vocabulary, classification predicates and range validation

mod classify;
mod hit_result;
mod range;

pub use classify::{Classification, HitCategory};
pub use hit_result::{HitResult, HitResultInfo, ParseHitResultError};

/// Number of hit result kinds in the catalog.
pub const HIT_RESULT_COUNT: usize = 15;
