// Per-object judgement ranges, ruleset configuration and statistics tally

mod error;
mod hit_statistics;
mod judgement;
mod ruleset;

pub use error::RuleError;
pub use hit_statistics::HitStatistics;
pub use judgement::{HitRange, Judgement};
pub use ruleset::{ObjectTypeConfig, Ruleset, RulesetConfig};

pub use judgement_model::{HIT_RESULT_COUNT, HitCategory, HitResult};
