use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use judgement_model::HitResult;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::judgement::{HitRange, Judgement};

/// Object types every ruleset understands out of the box, with their best result.
const STANDARD_OBJECT_TYPES: [(&str, HitResult); 6] = [
    ("note", HitResult::Perfect),
    ("hold_tick", HitResult::LargeTickHit),
    ("small_tick", HitResult::SmallTickHit),
    ("bonus", HitResult::LargeBonus),
    ("small_bonus", HitResult::SmallBonus),
    ("ignored", HitResult::IgnoreHit),
];

const STANDARD_NAME: &str = "standard";

/// Judgement declared for one object type, as written in a ruleset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectTypeConfig {
    pub max_result: HitResult,
    /// Derived from `max_result` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_result: Option<HitResult>,
}

impl ObjectTypeConfig {
    pub fn judgement(&self) -> Judgement {
        let judgement = Judgement::new(self.max_result);
        match self.min_result {
            Some(min) => judgement.with_min_result(min),
            None => judgement,
        }
    }
}

/// Serialized ruleset: a name and the judgement of each object type.
///
/// ```json
/// {
///   "name": "taiko",
///   "object_types": {
///     "hit": { "max_result": "great", "min_result": "miss" },
///     "drum_roll_tick": { "max_result": "small_tick_hit" }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetConfig {
    pub name: String,
    pub object_types: BTreeMap<String, ObjectTypeConfig>,
}

impl Default for RulesetConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl RulesetConfig {
    pub fn standard() -> Self {
        let object_types = STANDARD_OBJECT_TYPES
            .iter()
            .map(|&(name, max_result)| {
                (
                    name.to_string(),
                    ObjectTypeConfig {
                        max_result,
                        min_result: None,
                    },
                )
            })
            .collect();
        Self {
            name: STANDARD_NAME.to_string(),
            object_types,
        }
    }

    /// Saves the config as pretty JSON.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write ruleset: {}", path.display()))?;
        Ok(())
    }
}

/// Validated ruleset: the hit range of every object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    name: String,
    ranges: BTreeMap<String, HitRange>,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::standard()
    }
}

impl Ruleset {
    /// Built-in ruleset: note, hold_tick, small_tick, bonus, small_bonus and ignored.
    pub fn standard() -> Self {
        let ranges = STANDARD_OBJECT_TYPES
            .iter()
            .filter_map(|&(name, max_result)| {
                Judgement::new(max_result)
                    .range()
                    .ok()
                    .map(|range| (name.to_string(), range))
            })
            .collect();
        Self {
            name: STANDARD_NAME.to_string(),
            ranges,
        }
    }

    /// Validate every declared range.
    pub fn from_config(config: &RulesetConfig) -> Result<Self, RuleError> {
        let mut ranges = BTreeMap::new();
        for (object_type, entry) in &config.object_types {
            let judgement = entry.judgement();
            let range = judgement
                .range()
                .map_err(|_| RuleError::InvalidObjectRange {
                    object_type: object_type.clone(),
                    min: judgement.min_result(),
                    max: judgement.max_result(),
                })?;
            ranges.insert(object_type.clone(), range);
        }

        debug!(
            "Loaded ruleset {} with {} object types",
            config.name,
            ranges.len()
        );

        Ok(Self {
            name: config.name.clone(),
            ranges,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RulesetConfig =
            serde_json::from_str(json).context("Failed to parse ruleset JSON")?;
        Ok(Self::from_config(&config)?)
    }

    /// Loads a ruleset from a JSON file.
    /// Returns the standard ruleset if the file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                "Ruleset file not found, using standard ruleset: {}",
                path.display()
            );
            return Ok(Self::standard());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ruleset: {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid ruleset: {}", path.display()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range_for(&self, object_type: &str) -> Option<HitRange> {
        self.ranges.get(object_type).copied()
    }

    /// Object types and their ranges, sorted by name.
    pub fn object_types(&self) -> impl Iterator<Item = (&str, HitRange)> {
        self.ranges
            .iter()
            .map(|(name, range)| (name.as_str(), *range))
    }

    /// Check a result a gameplay rule is about to emit for `object_type`.
    pub fn validate_result(
        &self,
        object_type: &str,
        result: HitResult,
    ) -> Result<HitResult, RuleError> {
        let Some(range) = self.range_for(object_type) else {
            warn!("Unknown object type in ruleset {}: {}", self.name, object_type);
            return Err(RuleError::UnknownObjectType(object_type.to_string()));
        };
        range.check(result).inspect_err(|_| {
            warn!(
                "Rejected {} for {} (valid {} .. {})",
                result,
                object_type,
                range.min(),
                range.max()
            );
        })
    }

    /// Config with every minimum written out explicitly.
    pub fn to_config(&self) -> RulesetConfig {
        let object_types = self
            .ranges
            .iter()
            .map(|(name, range)| {
                (
                    name.clone(),
                    ObjectTypeConfig {
                        max_result: range.max(),
                        min_result: Some(range.min()),
                    },
                )
            })
            .collect();
        RulesetConfig {
            name: self.name.clone(),
            object_types,
        }
    }
}
