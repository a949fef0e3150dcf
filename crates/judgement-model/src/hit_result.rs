use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::HIT_RESULT_COUNT;

/// Outcome recorded when a gameplay object is resolved.
///
/// The discriminant is the declaration value. It is fixed once shipped and
/// new kinds may only be appended. Ordinal checks (`is_scorable`,
/// `is_valid_hit_result`) compare declaration values, so `Miss..=Perfect`
/// must stay contiguous with `Miss` lowest.
///
/// Display ordering uses the separate priority rank (see [`HitResult::priority`]).
/// There is intentionally no `Ord` impl; callers pick [`HitResult::cmp_declaration`]
/// or [`HitResult::cmp_priority`].
///
/// Serialized as the wire tag (`"great"`, `"large_tick_hit"`, ...), never as
/// the declaration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
#[repr(u8)]
pub enum HitResult {
    /// Not yet judged.
    #[default]
    None = 0,
    Miss = 1,
    Meh = 2,
    Ok = 3,
    Good = 4,
    Great = 5,
    Perfect = 6,
    SmallTickMiss = 7,
    SmallTickHit = 8,
    LargeTickMiss = 9,
    LargeTickHit = 10,
    SmallBonus = 11,
    LargeBonus = 12,
    /// Resolved as missed but excluded from scoring.
    IgnoreMiss = 13,
    /// Resolved as hit but excluded from scoring.
    IgnoreHit = 14,
}

/// Static metadata attached to a hit result kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitResultInfo {
    pub result: HitResult,
    /// Short human-readable label. Empty for `None`.
    pub label: &'static str,
    /// Stable serialization identifier.
    pub tag: &'static str,
    /// Display priority, 0 = best.
    pub priority: u8,
}

const fn row(
    result: HitResult,
    label: &'static str,
    tag: &'static str,
    priority: u8,
) -> HitResultInfo {
    HitResultInfo {
        result,
        label,
        tag,
        priority,
    }
}

/// Metadata table indexed by declaration value.
static INFO: [HitResultInfo; HIT_RESULT_COUNT] = [
    row(HitResult::None, "", "none", 14),
    row(HitResult::Miss, "Miss", "miss", 5),
    row(HitResult::Meh, "Meh", "meh", 4),
    row(HitResult::Ok, "OK", "ok", 3),
    row(HitResult::Good, "Good", "good", 2),
    row(HitResult::Great, "Great", "great", 1),
    row(HitResult::Perfect, "Perfect", "perfect", 0),
    row(HitResult::SmallTickMiss, "S Tick Miss", "small_tick_miss", 11),
    row(HitResult::SmallTickHit, "S Tick", "small_tick_hit", 7),
    row(HitResult::LargeTickMiss, "L Tick Miss", "large_tick_miss", 10),
    row(HitResult::LargeTickHit, "L Tick", "large_tick_hit", 6),
    row(HitResult::SmallBonus, "S Bonus", "small_bonus", 9),
    row(HitResult::LargeBonus, "L Bonus", "large_bonus", 8),
    row(HitResult::IgnoreMiss, "Ignore Miss", "ignore_miss", 13),
    row(HitResult::IgnoreHit, "Ignore Hit", "ignore_hit", 12),
];

impl HitResult {
    /// Every kind, in declaration order.
    pub const ALL: [Self; HIT_RESULT_COUNT] = [
        Self::None,
        Self::Miss,
        Self::Meh,
        Self::Ok,
        Self::Good,
        Self::Great,
        Self::Perfect,
        Self::SmallTickMiss,
        Self::SmallTickHit,
        Self::LargeTickMiss,
        Self::LargeTickHit,
        Self::SmallBonus,
        Self::LargeBonus,
        Self::IgnoreMiss,
        Self::IgnoreHit,
    ];

    /// Convert a declaration value to the corresponding kind.
    ///
    /// Returns `None` if the value does not correspond to any variant.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Declaration value.
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Metadata row for this kind.
    pub fn info(self) -> &'static HitResultInfo {
        &INFO[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn tag(self) -> &'static str {
        self.info().tag
    }

    /// Display priority. 0 is the best result, higher is lesser.
    pub fn priority(self) -> u8 {
        self.info().priority
    }

    /// Compare by declaration value.
    pub fn cmp_declaration(self, other: Self) -> Ordering {
        self.id().cmp(&other.id())
    }

    /// Compare by priority rank; `Less` means `self` ranks better.
    pub fn cmp_priority(self, other: Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }

    /// Catalog sorted best-first by priority rank.
    pub fn by_priority() -> [Self; HIT_RESULT_COUNT] {
        let mut results = Self::ALL;
        results.sort_by_key(|r| r.priority());
        results
    }
}

impl fmt::Display for HitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string is not a known wire tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hit result tag: {0:?}")]
pub struct ParseHitResultError(pub String);

impl FromStr for HitResult {
    type Err = ParseHitResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.tag() == s)
            .ok_or_else(|| ParseHitResultError(s.to_string()))
    }
}

impl TryFrom<String> for HitResult {
    type Error = ParseHitResultError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HitResult> for &'static str {
    fn from(result: HitResult) -> Self {
        result.tag()
    }
}
