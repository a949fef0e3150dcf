use crate::HitResult;

/// Partition of the scorable kinds.
///
/// Every scorable kind is exactly one of these. Combo and accuracy effects
/// do not follow this partition, see [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitCategory {
    /// Hit window judgements, `Miss..=Perfect`.
    Basic,
    Tick,
    Bonus,
}

/// Every classification fact for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub scorable: bool,
    pub tick: bool,
    pub bonus: bool,
    pub basic: bool,
    pub affects_combo: bool,
    pub affects_accuracy: bool,
    pub hit: bool,
}

impl HitResult {
    /// Whether this kind counts toward the score total.
    ///
    /// True for the twelve kinds in `[Miss, IgnoreMiss)` by declaration value.
    pub fn is_scorable(self) -> bool {
        self.id() >= Self::Miss.id() && self.id() < Self::IgnoreMiss.id()
    }

    pub fn is_tick(self) -> bool {
        matches!(
            self,
            Self::LargeTickHit | Self::LargeTickMiss | Self::SmallTickHit | Self::SmallTickMiss
        )
    }

    pub fn is_bonus(self) -> bool {
        matches!(self, Self::SmallBonus | Self::LargeBonus)
    }

    /// Ordinary hit window judgement (`Miss..=Perfect`).
    pub fn is_basic(self) -> bool {
        self.is_scorable() && !self.is_tick() && !self.is_bonus()
    }

    /// Whether this kind increments or breaks combo.
    ///
    /// Large ticks affect combo even though they are ticks; small ticks,
    /// bonuses and ignore kinds never do.
    pub fn affects_combo(self) -> bool {
        matches!(
            self,
            Self::Miss
                | Self::Meh
                | Self::Ok
                | Self::Good
                | Self::Great
                | Self::Perfect
                | Self::LargeTickHit
                | Self::LargeTickMiss
        )
    }

    /// Everything scorable except bonuses contributes to accuracy.
    pub fn affects_accuracy(self) -> bool {
        self.is_scorable() && !self.is_bonus()
    }

    /// Whether a successful action occurred, regardless of scoring effect.
    pub fn is_hit(self) -> bool {
        !matches!(
            self,
            Self::None | Self::IgnoreMiss | Self::Miss | Self::SmallTickMiss | Self::LargeTickMiss
        )
    }

    /// Scorable partition this kind falls in, `None` when not scorable.
    pub fn category(self) -> Option<HitCategory> {
        if !self.is_scorable() {
            None
        } else if self.is_tick() {
            Some(HitCategory::Tick)
        } else if self.is_bonus() {
            Some(HitCategory::Bonus)
        } else {
            Some(HitCategory::Basic)
        }
    }

    pub fn classify(self) -> Classification {
        Classification {
            scorable: self.is_scorable(),
            tick: self.is_tick(),
            bonus: self.is_bonus(),
            basic: self.is_basic(),
            affects_combo: self.affects_combo(),
            affects_accuracy: self.affects_accuracy(),
            hit: self.is_hit(),
        }
    }
}
