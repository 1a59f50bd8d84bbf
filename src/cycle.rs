//! Sexagenary cycle derivation rules
//!
//! In the combined sixty-term cycle, month and hour pillars are not free
//! choices: their stem is fixed by the anchor pillar's stem and the dependent
//! branch. The month stem follows the year stem ("five tigers escape",
//! 五虎遁: 甲己 years open the 寅 month with 丙, 乙庚 with 戊, 丙辛 with 庚,
//! 丁壬 with 壬, 戊癸 with 甲). The hour stem follows the day stem ("five
//! rats escape", 五鼠遁: 甲己 days open the 子 hour with 甲, 乙庚 with 丙,
//! 丙辛 with 戊, 丁壬 with 庚, 戊癸 with 壬).
//!
//! Stems partition into five groups by `index % 5`; each group has one
//! origin stem per rule. From the origin, stems advance with the branch
//! around its twelve-cycle, wrapping modulo ten.

use crate::ganzhi::{Branch, Stem};

/// Stem index opening the 寅 month for each year-stem group
const MONTH_ORIGIN_STEMS: [usize; 5] = [2, 4, 6, 8, 0];

/// Stem index opening the 子 hour for each day-stem group
const HOUR_ORIGIN_STEMS: [usize; 5] = [0, 2, 4, 6, 8];

/// 寅 is the first month of the lunar year
const MONTH_EPOCH_BRANCH: usize = 2;

/// The stem a month pillar must carry, given the year stem and month branch.
///
/// # Examples
///
/// ```
/// use sizhu::{expected_month_stem, Branch, Stem};
///
/// // A 甲 year opens with the 丙寅 month.
/// assert_eq!(expected_month_stem(Stem::Jia, Branch::Yin), Stem::Bing);
/// ```
pub fn expected_month_stem(year_stem: Stem, month_branch: Branch) -> Stem {
    let origin = MONTH_ORIGIN_STEMS[year_stem.index() % 5];
    let offset = (month_branch.index() + Branch::ALL.len() - MONTH_EPOCH_BRANCH) % Branch::ALL.len();
    Stem::ALL[(origin + offset) % Stem::ALL.len()]
}

/// The stem an hour pillar must carry, given the day stem and hour branch.
///
/// The hour count starts at the 子 hour, branch index 0, so no epoch shift
/// is needed.
///
/// # Examples
///
/// ```
/// use sizhu::{expected_hour_stem, Branch, Stem};
///
/// // A 甲 day opens with the 甲子 hour.
/// assert_eq!(expected_hour_stem(Stem::Jia, Branch::Zi), Stem::Jia);
/// ```
pub fn expected_hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    let origin = HOUR_ORIGIN_STEMS[day_stem.index() % 5];
    Stem::ALL[(origin + hour_branch.index()) % Stem::ALL.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_origins_per_group() {
        // 甲己起丙寅, 乙庚起戊寅, 丙辛起庚寅, 丁壬起壬寅, 戊癸起甲寅
        assert_eq!(expected_month_stem(Stem::Jia, Branch::Yin), Stem::Bing);
        assert_eq!(expected_month_stem(Stem::Ji, Branch::Yin), Stem::Bing);
        assert_eq!(expected_month_stem(Stem::Yi, Branch::Yin), Stem::Wu);
        assert_eq!(expected_month_stem(Stem::Bing, Branch::Yin), Stem::Geng);
        assert_eq!(expected_month_stem(Stem::Ding, Branch::Yin), Stem::Ren);
        assert_eq!(expected_month_stem(Stem::Gui, Branch::Yin), Stem::Jia);
    }

    #[test]
    fn test_month_stem_advances_with_branch() {
        // In a 甲 year: 丙寅, 丁卯, 戊辰, ...
        assert_eq!(expected_month_stem(Stem::Jia, Branch::Mao), Stem::Ding);
        assert_eq!(expected_month_stem(Stem::Jia, Branch::Chen), Stem::Wu);
    }

    #[test]
    fn test_month_stem_wraps_before_epoch() {
        // 丑 precedes the 寅 epoch, offset 11: (2 + 11) % 10 = 3 (丁).
        assert_eq!(expected_month_stem(Stem::Jia, Branch::Chou), Stem::Ding);
        // 子 at offset 10: (2 + 10) % 10 = 2 (丙).
        assert_eq!(expected_month_stem(Stem::Jia, Branch::Zi), Stem::Bing);
    }

    #[test]
    fn test_hour_origins_per_group() {
        // 甲己起甲子, 乙庚起丙子, 丙辛起戊子, 丁壬起庚子, 戊癸起壬子
        assert_eq!(expected_hour_stem(Stem::Jia, Branch::Zi), Stem::Jia);
        assert_eq!(expected_hour_stem(Stem::Ji, Branch::Zi), Stem::Jia);
        assert_eq!(expected_hour_stem(Stem::Yi, Branch::Zi), Stem::Bing);
        assert_eq!(expected_hour_stem(Stem::Bing, Branch::Zi), Stem::Wu);
        assert_eq!(expected_hour_stem(Stem::Ren, Branch::Zi), Stem::Geng);
        assert_eq!(expected_hour_stem(Stem::Gui, Branch::Zi), Stem::Ren);
    }

    #[test]
    fn test_hour_stem_advances_with_branch() {
        // In a 甲 day: 甲子, 乙丑, 丙寅, ... wrapping at 甲戌.
        assert_eq!(expected_hour_stem(Stem::Jia, Branch::Chou), Stem::Yi);
        assert_eq!(expected_hour_stem(Stem::Jia, Branch::Yin), Stem::Bing);
        assert_eq!(expected_hour_stem(Stem::Jia, Branch::Xu), Stem::Jia);
        assert_eq!(expected_hour_stem(Stem::Jia, Branch::Hai), Stem::Yi);
    }

    #[test]
    fn test_derived_stems_share_branch_polarity() {
        for year_stem in Stem::ALL {
            for branch in Branch::ALL {
                let month = expected_month_stem(year_stem, branch);
                assert_eq!(month.polarity(), branch.polarity());
                let hour = expected_hour_stem(year_stem, branch);
                assert_eq!(hour.polarity(), branch.polarity());
            }
        }
    }
}
