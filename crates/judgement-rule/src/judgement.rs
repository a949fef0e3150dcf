use judgement_model::HitResult;

use crate::error::RuleError;

/// Best and worst result an object type may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRange {
    min: HitResult,
    max: HitResult,
}

impl HitRange {
    /// Build a range, rejecting ones the range check cannot evaluate.
    ///
    /// Neither bound may be `None`. `min` must not be declared after `max`,
    /// except for `IgnoreMiss` paired with a bonus, which only admits its two
    /// endpoints.
    pub fn new(min: HitResult, max: HitResult) -> Result<Self, RuleError> {
        if Self::is_well_formed(min, max) {
            Ok(Self { min, max })
        } else {
            Err(RuleError::InvalidRange { min, max })
        }
    }

    fn is_well_formed(min: HitResult, max: HitResult) -> bool {
        if min == HitResult::None || max == HitResult::None {
            return false;
        }
        min.id() <= max.id() || (min == HitResult::IgnoreMiss && max.is_bonus())
    }

    pub fn min(&self) -> HitResult {
        self.min
    }

    pub fn max(&self) -> HitResult {
        self.max
    }

    pub fn contains(&self, result: HitResult) -> bool {
        if self.min.id() > self.max.id() {
            return result == self.min || result == self.max;
        }
        result.is_valid_hit_result(self.min, self.max)
    }

    /// Pass `result` through if it lies in this range.
    pub fn check(&self, result: HitResult) -> Result<HitResult, RuleError> {
        if self.contains(result) {
            Ok(result)
        } else {
            Err(RuleError::OutOfRange {
                result,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Every result this range admits, in declaration order.
    pub fn results(&self) -> impl Iterator<Item = HitResult> {
        HitResult::valid_results(self.min, self.max)
    }
}

/// Judgement declared by a gameplay object type.
///
/// The minimum result is derived from the maximum unless overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgement {
    max_result: HitResult,
    min_result: Option<HitResult>,
}

impl Judgement {
    pub const fn new(max_result: HitResult) -> Self {
        Self {
            max_result,
            min_result: None,
        }
    }

    pub fn with_min_result(mut self, min_result: HitResult) -> Self {
        self.min_result = Some(min_result);
        self
    }

    pub fn max_result(&self) -> HitResult {
        self.max_result
    }

    pub fn min_result(&self) -> HitResult {
        self.min_result
            .unwrap_or_else(|| Self::default_min_result(self.max_result))
    }

    /// Worst result paired with a best result when none is declared.
    ///
    /// - `SmallBonus`, `LargeBonus`, `IgnoreHit` => `IgnoreMiss`
    /// - `SmallTickHit` => `SmallTickMiss`
    /// - `LargeTickHit` => `LargeTickMiss`
    /// - anything else => `Miss`
    pub fn default_min_result(max_result: HitResult) -> HitResult {
        match max_result {
            HitResult::SmallBonus | HitResult::LargeBonus | HitResult::IgnoreHit => {
                HitResult::IgnoreMiss
            }
            HitResult::SmallTickHit => HitResult::SmallTickMiss,
            HitResult::LargeTickHit => HitResult::LargeTickMiss,
            _ => HitResult::Miss,
        }
    }

    pub fn range(&self) -> Result<HitRange, RuleError> {
        HitRange::new(self.min_result(), self.max_result)
    }
}

impl Default for Judgement {
    fn default() -> Self {
        Self::new(HitResult::Perfect)
    }
}
