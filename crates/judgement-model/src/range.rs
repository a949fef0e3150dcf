use crate::HitResult;

impl HitResult {
    /// Whether this result is achievable for an object declaring
    /// `min_result..=max_result`.
    ///
    /// `None` is never valid. Exact bound matches are accepted before the
    /// ordering is looked at, so a two-state range such as
    /// `IgnoreMiss`/`LargeBonus` only admits its endpoints. Any other candidate
    /// is compared by declaration value, which is only meaningful when both
    /// bounds come from the same block (basic or tick).
    ///
    /// A range with `min_result` declared after `max_result` is a ruleset bug
    /// and trips a debug assertion.
    pub fn is_valid_hit_result(self, min_result: HitResult, max_result: HitResult) -> bool {
        if self == HitResult::None {
            return false;
        }

        if self == min_result || self == max_result {
            return true;
        }

        debug_assert!(
            min_result.id() <= max_result.id(),
            "invalid hit result range: min {min_result:?} is declared after max {max_result:?}"
        );

        min_result.id() < self.id() && self.id() < max_result.id()
    }

    /// Every kind accepted by [`HitResult::is_valid_hit_result`] for the range,
    /// in declaration order.
    ///
    /// The two-state range `IgnoreMiss`..bonus only yields its endpoints. Any
    /// other range declared in reverse trips a debug assertion.
    pub fn valid_results(
        min_result: HitResult,
        max_result: HitResult,
    ) -> impl Iterator<Item = HitResult> {
        let two_state = min_result == HitResult::IgnoreMiss && max_result.is_bonus();
        debug_assert!(
            two_state || min_result.id() <= max_result.id(),
            "invalid hit result range: min {min_result:?} is declared after max {max_result:?}"
        );
        Self::ALL.into_iter().filter(move |&r| {
            if two_state {
                r != HitResult::None && (r == min_result || r == max_result)
            } else {
                r.is_valid_hit_result(min_result, max_result)
            }
        })
    }
}
