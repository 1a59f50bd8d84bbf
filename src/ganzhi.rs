//! The fixed sexagenary tables
//!
//! Defines the ten heavenly stems and twelve earthly branches, each with an
//! intrinsic polarity (yin/yang) and element (wood/fire/earth/metal/water).
//! Both tables are static and immutable; everything else in the crate is a
//! pure function over them.

use serde::{Deserialize, Serialize};

use crate::error::{SizhuError, SizhuResult};

/// One of the ten heavenly stems (天干), in canonical cycle order.
///
/// The wire representation is the symbol itself, so a serialized stem is the
/// single character `甲`, `乙`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

/// One of the twelve earthly branches (地支), in canonical cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

/// Yin/yang polarity of a stem or branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

/// Element classification of a stem or branch, used for display coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Stem {
    /// All ten stems in cycle order: 甲乙丙丁戊己庚辛壬癸
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Position of this stem in the ten-cycle, 0 through 9
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up the stem at `index`, failing fast on out-of-range input
    pub fn from_index(index: usize) -> SizhuResult<Stem> {
        Stem::ALL
            .get(index)
            .copied()
            .ok_or(SizhuError::InvalidStemIndex { index })
    }

    /// The stem's symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }

    /// Look up a stem by its symbol, failing fast on anything else
    pub fn from_symbol(symbol: &str) -> SizhuResult<Stem> {
        Stem::ALL
            .iter()
            .copied()
            .find(|stem| stem.symbol() == symbol)
            .ok_or_else(|| SizhuError::InvalidStemSymbol {
                symbol: symbol.to_string(),
            })
    }

    /// Yang stems are 甲丙戊庚壬, the even cycle positions
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Element membership: 甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water
    pub fn element(self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }
}

impl Branch {
    /// All twelve branches in cycle order: 子丑寅卯辰巳午未申酉戌亥
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Position of this branch in the twelve-cycle, 0 through 11
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up the branch at `index`, failing fast on out-of-range input
    pub fn from_index(index: usize) -> SizhuResult<Branch> {
        Branch::ALL
            .get(index)
            .copied()
            .ok_or(SizhuError::InvalidBranchIndex { index })
    }

    /// The branch's symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }

    /// Look up a branch by its symbol, failing fast on anything else
    pub fn from_symbol(symbol: &str) -> SizhuResult<Branch> {
        Branch::ALL
            .iter()
            .copied()
            .find(|branch| branch.symbol() == symbol)
            .ok_or_else(|| SizhuError::InvalidBranchSymbol {
                symbol: symbol.to_string(),
            })
    }

    /// Yang branches are 子寅辰午申戌, the even cycle positions
    pub fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Element membership: 寅卯 wood, 巳午 fire, 辰戌丑未 earth, 申酉 metal, 亥子 water
    pub fn element(self) -> Element {
        match self {
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Element::Earth,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Hai | Branch::Zi => Element::Water,
        }
    }
}

/// Classify any sexagenary symbol into its element, stem or branch alike.
///
/// This is the lookup behind element-based coloring of rendered symbols.
pub fn element_of_symbol(symbol: &str) -> SizhuResult<Element> {
    if let Ok(stem) = Stem::from_symbol(symbol) {
        return Ok(stem.element());
    }
    if let Ok(branch) = Branch::from_symbol(symbol) {
        return Ok(branch.element());
    }
    Err(SizhuError::InvalidSymbol {
        symbol: symbol.to_string(),
    })
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Yang => write!(f, "yang"),
            Polarity::Yin => write!(f, "yin"),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Wood => write!(f, "wood"),
            Element::Fire => write!(f, "fire"),
            Element::Earth => write!(f, "earth"),
            Element::Metal => write!(f, "metal"),
            Element::Water => write!(f, "water"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_cycle_order() {
        let symbols: Vec<&str> = Stem::ALL.iter().map(|s| s.symbol()).collect();
        assert_eq!(
            symbols,
            vec!["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"]
        );
    }

    #[test]
    fn test_branch_cycle_order() {
        let symbols: Vec<&str> = Branch::ALL.iter().map(|b| b.symbol()).collect();
        assert_eq!(
            symbols,
            vec!["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"]
        );
    }

    #[test]
    fn test_stem_from_index() {
        assert_eq!(Stem::from_index(0).unwrap(), Stem::Jia);
        assert_eq!(Stem::from_index(9).unwrap(), Stem::Gui);
        assert!(matches!(
            Stem::from_index(10),
            Err(SizhuError::InvalidStemIndex { index: 10 })
        ));
    }

    #[test]
    fn test_branch_from_index() {
        assert_eq!(Branch::from_index(0).unwrap(), Branch::Zi);
        assert_eq!(Branch::from_index(11).unwrap(), Branch::Hai);
        assert!(matches!(
            Branch::from_index(12),
            Err(SizhuError::InvalidBranchIndex { index: 12 })
        ));
    }

    #[test]
    fn test_stem_from_symbol() {
        assert_eq!(Stem::from_symbol("甲").unwrap(), Stem::Jia);
        assert_eq!(Stem::from_symbol("癸").unwrap(), Stem::Gui);
        // 子 is a branch, not a stem
        assert!(matches!(
            Stem::from_symbol("子"),
            Err(SizhuError::InvalidStemSymbol { .. })
        ));
    }

    #[test]
    fn test_branch_from_symbol() {
        assert_eq!(Branch::from_symbol("午").unwrap(), Branch::Wu);
        assert!(matches!(
            Branch::from_symbol("甲"),
            Err(SizhuError::InvalidBranchSymbol { .. })
        ));
    }

    #[test]
    fn test_yang_stems() {
        let yang: Vec<&str> = Stem::ALL
            .iter()
            .filter(|s| s.polarity() == Polarity::Yang)
            .map(|s| s.symbol())
            .collect();
        assert_eq!(yang, vec!["甲", "丙", "戊", "庚", "壬"]);
    }

    #[test]
    fn test_yang_branches() {
        let yang: Vec<&str> = Branch::ALL
            .iter()
            .filter(|b| b.polarity() == Polarity::Yang)
            .map(|b| b.symbol())
            .collect();
        assert_eq!(yang, vec!["子", "寅", "辰", "午", "申", "戌"]);
    }

    #[test]
    fn test_element_membership() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Gui.element(), Element::Water);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::You.element(), Element::Metal);

        // Earth holds four branches; every other element holds two.
        let earth = Branch::ALL
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .count();
        assert_eq!(earth, 4);
    }

    #[test]
    fn test_element_of_symbol() {
        assert_eq!(element_of_symbol("丙").unwrap(), Element::Fire);
        assert_eq!(element_of_symbol("亥").unwrap(), Element::Water);
        assert!(matches!(
            element_of_symbol("x"),
            Err(SizhuError::InvalidSymbol { .. })
        ));
    }

    #[test]
    fn test_serde_symbol_representation() {
        let json = serde_json::to_string(&Stem::Jia).unwrap();
        assert_eq!(json, "\"甲\"");

        let branch: Branch = serde_json::from_str("\"亥\"").unwrap();
        assert_eq!(branch, Branch::Hai);

        let bad: Result<Stem, _> = serde_json::from_str("\"亥\"");
        assert!(bad.is_err());
    }
}
