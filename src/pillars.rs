//! Pillar data model
//!
//! A pillar is one of the four temporal positions (year, month, day, hour)
//! holding an optional stem and an optional branch. [`FourPillars`] is the
//! aggregate unit of validation and the boundary shape toward storage: it
//! serializes as a mapping from the Chinese position name to a pair of
//! symbol strings, with the empty string standing for "not selected".
//!
//! ```
//! use sizhu::{Branch, FourPillars, Stem};
//!
//! let mut pillars = FourPillars::default();
//! pillars.year.stem = Some(Stem::Jia);
//! pillars.year.branch = Some(Branch::Zi);
//!
//! let json = serde_json::to_string(&pillars).unwrap();
//! assert!(json.contains(r#""年":{"天干":"甲","地支":"子"}"#));
//! ```

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Stem};
use crate::pairing::is_polarity_matched;

/// One of the four temporal positions a pillar can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    /// All four positions in year, month, day, hour order
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    /// Chinese label used by the wire format
    pub fn label(self) -> &'static str {
        match self {
            PillarPosition::Year => "年",
            PillarPosition::Month => "月",
            PillarPosition::Day => "日",
            PillarPosition::Hour => "时",
        }
    }
}

impl std::fmt::Display for PillarPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PillarPosition::Year => write!(f, "year"),
            PillarPosition::Month => write!(f, "month"),
            PillarPosition::Day => write!(f, "day"),
            PillarPosition::Hour => write!(f, "hour"),
        }
    }
}

/// A stem-branch pair at one position, either slot possibly unselected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pillar {
    #[serde(rename = "天干", default, with = "stem_symbol")]
    pub stem: Option<Stem>,

    #[serde(rename = "地支", default, with = "branch_symbol")]
    pub branch: Option<Branch>,
}

impl Pillar {
    /// A pillar with both slots selected
    pub fn complete(stem: Stem, branch: Branch) -> Self {
        Self {
            stem: Some(stem),
            branch: Some(branch),
        }
    }

    /// Neither slot selected
    pub fn is_empty(self) -> bool {
        self.stem.is_none() && self.branch.is_none()
    }

    /// Exactly one slot selected; always an invalid state
    pub fn is_partial(self) -> bool {
        self.stem.is_some() != self.branch.is_some()
    }

    /// Both slots selected
    pub fn is_complete(self) -> bool {
        self.stem.is_some() && self.branch.is_some()
    }

    /// Select a stem, dropping a previously selected branch whose polarity
    /// no longer matches.
    ///
    /// This mirrors how a selection UI re-filters branch choices on every
    /// stem change; see [`crate::pairing::compatible_branches`].
    pub fn set_stem(&mut self, stem: Stem) {
        self.stem = Some(stem);
        if let Some(branch) = self.branch {
            if !is_polarity_matched(stem, branch) {
                self.branch = None;
            }
        }
    }

    /// Select a branch
    pub fn set_branch(&mut self, branch: Branch) {
        self.branch = Some(branch);
    }

    /// Reset both slots
    pub fn clear(&mut self) {
        *self = Pillar::default();
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(stem) = self.stem {
            f.write_str(stem.symbol())?;
        }
        if let Some(branch) = self.branch {
            f.write_str(branch.symbol())?;
        }
        Ok(())
    }
}

/// A full four-pillar selection, the aggregate unit of validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FourPillars {
    #[serde(rename = "年", default)]
    pub year: Pillar,

    #[serde(rename = "月", default)]
    pub month: Pillar,

    #[serde(rename = "日", default)]
    pub day: Pillar,

    #[serde(rename = "时", default)]
    pub hour: Pillar,
}

impl FourPillars {
    /// The pillar at `position`
    pub fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Mutable access to the pillar at `position`
    pub fn pillar_mut(&mut self, position: PillarPosition) -> &mut Pillar {
        match position {
            PillarPosition::Year => &mut self.year,
            PillarPosition::Month => &mut self.month,
            PillarPosition::Day => &mut self.day,
            PillarPosition::Hour => &mut self.hour,
        }
    }

    /// Replace the pillar at `position`
    pub fn set(&mut self, position: PillarPosition, pillar: Pillar) {
        *self.pillar_mut(position) = pillar;
    }

    /// Iterate pillars in year, month, day, hour order
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        PillarPosition::ALL
            .iter()
            .map(move |&position| (position, self.pillar(position)))
    }
}

mod stem_symbol {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::ganzhi::Stem;

    pub fn serialize<S: Serializer>(value: &Option<Stem>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(stem) => serializer.serialize_str(stem.symbol()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Stem>, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        if symbol.is_empty() {
            return Ok(None);
        }
        Stem::from_symbol(&symbol)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

mod branch_symbol {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::ganzhi::Branch;

    pub fn serialize<S: Serializer>(
        value: &Option<Branch>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(branch) => serializer.serialize_str(branch.symbol()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Branch>, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        if symbol.is_empty() {
            return Ok(None);
        }
        Branch::from_symbol(&symbol)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
