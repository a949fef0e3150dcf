use judgement_model::{HIT_RESULT_COUNT, HitResult};
use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Per-kind judgement counts and combo for one play.
///
/// Counters are laid out in catalog order. Serialized counts are keyed by
/// wire tag. Loading rejects a combo above the max combo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredHitStatistics")]
pub struct HitStatistics {
    #[serde(with = "counts_by_tag")]
    counts: [u32; HIT_RESULT_COUNT],
    combo: u32,
    max_combo: u32,
}

impl HitStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one judgement.
    ///
    /// Combo-affecting hits extend the combo, combo-affecting misses reset it.
    /// Everything else leaves combo untouched.
    pub fn record(&mut self, result: HitResult) {
        let count = &mut self.counts[result.id() as usize];
        *count = count.saturating_add(1);

        if result.affects_combo() {
            if result.is_hit() {
                self.combo = self.combo.saturating_add(1);
                self.max_combo = self.max_combo.max(self.combo);
            } else {
                self.combo = 0;
            }
        }
    }

    pub fn count(&self, result: HitResult) -> u32 {
        self.counts[result.id() as usize]
    }

    /// Every kind with its count, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (HitResult, u32)> + '_ {
        HitResult::ALL
            .into_iter()
            .map(|result| (result, self.count(result)))
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    /// Number of recorded judgements that count toward the score total.
    pub fn total_scorable(&self) -> u32 {
        self.sum_where(HitResult::is_scorable)
    }

    /// Number of recorded judgements that feed the accuracy ratio.
    pub fn accuracy_judgements(&self) -> u32 {
        self.sum_where(HitResult::affects_accuracy)
    }

    /// Saturates at `u32::MAX` like the counters themselves.
    fn sum_where(&self, predicate: impl Fn(HitResult) -> bool) -> u32 {
        self.iter()
            .filter(|&(result, _)| predicate(result))
            .fold(0u32, |total, (_, count)| total.saturating_add(count))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Extend<HitResult> for HitStatistics {
    fn extend<I: IntoIterator<Item = HitResult>>(&mut self, iter: I) {
        for result in iter {
            self.record(result);
        }
    }
}

impl FromIterator<HitResult> for HitStatistics {
    fn from_iter<I: IntoIterator<Item = HitResult>>(iter: I) -> Self {
        let mut statistics = Self::new();
        statistics.extend(iter);
        statistics
    }
}

/// Wire shape of [`HitStatistics`], checked before it is accepted.
#[derive(Deserialize)]
struct StoredHitStatistics {
    #[serde(with = "counts_by_tag")]
    counts: [u32; HIT_RESULT_COUNT],
    combo: u32,
    max_combo: u32,
}

impl TryFrom<StoredHitStatistics> for HitStatistics {
    type Error = RuleError;

    fn try_from(stored: StoredHitStatistics) -> Result<Self, Self::Error> {
        if stored.combo > stored.max_combo {
            return Err(RuleError::InconsistentCombo {
                combo: stored.combo,
                max_combo: stored.max_combo,
            });
        }
        Ok(Self {
            counts: stored.counts,
            combo: stored.combo,
            max_combo: stored.max_combo,
        })
    }
}

mod counts_by_tag {
    use std::collections::HashMap;

    use judgement_model::{HIT_RESULT_COUNT, HitResult};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        counts: &[u32; HIT_RESULT_COUNT],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HIT_RESULT_COUNT))?;
        for result in HitResult::ALL {
            map.serialize_entry(result.tag(), &counts[result.id() as usize])?;
        }
        map.end()
    }

    /// Missing tags count as zero.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[u32; HIT_RESULT_COUNT], D::Error> {
        let by_result = HashMap::<HitResult, u32>::deserialize(deserializer)?;
        let mut counts = [0; HIT_RESULT_COUNT];
        for (result, count) in by_result {
            counts[result.id() as usize] = count;
        }
        Ok(counts)
    }
}
