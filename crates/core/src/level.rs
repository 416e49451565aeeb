//! Intensity leveling: daily count → ordinal level in `0..=4`

use commitgrid_domain::{DailyContribution, LevelThresholds};

/// Map a daily count to its intensity level.
///
/// Step function over the configured thresholds: `0 → 0`, `(0, t1] → 1`,
/// `(t1, t2] → 2`, `(t2, t3] → 3`, `> t3 → 4`. Monotonic non-decreasing
/// in `count` for a fixed threshold set.
pub fn level_for(count: u32, thresholds: &LevelThresholds) -> u8 {
    if count == 0 {
        0
    } else if count <= thresholds.t1 {
        1
    } else if count <= thresholds.t2 {
        2
    } else if count <= thresholds.t3 {
        3
    } else {
        4
    }
}

/// Stamp every day of a window with its level.
pub fn apply_levels(days: &mut [DailyContribution], thresholds: &LevelThresholds) {
    for day in days {
        day.level = level_for(day.count, thresholds);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn coarse_profile_boundaries() {
        let t = LevelThresholds::coarse();
        assert_eq!(level_for(0, &t), 0);
        assert_eq!(level_for(1, &t), 1);
        assert_eq!(level_for(3, &t), 1);
        assert_eq!(level_for(4, &t), 2);
        assert_eq!(level_for(9, &t), 2);
        assert_eq!(level_for(10, &t), 3);
        // t3 is effectively unbounded in this profile.
        assert_eq!(level_for(u32::MAX, &t), 3);
    }

    #[test]
    fn fine_profile_boundaries() {
        let t = LevelThresholds::fine();
        assert_eq!(level_for(0, &t), 0);
        assert_eq!(level_for(10, &t), 1);
        assert_eq!(level_for(11, &t), 2);
        assert_eq!(level_for(20, &t), 2);
        assert_eq!(level_for(21, &t), 3);
        assert_eq!(level_for(30, &t), 3);
        assert_eq!(level_for(31, &t), 4);
    }

    #[test]
    fn levels_are_monotonic_in_count() {
        let t = LevelThresholds::fine();
        let mut previous = 0;
        for count in 0..100 {
            let level = level_for(count, &t);
            assert!(level >= previous, "level dropped at count {count}");
            previous = level;
        }
    }

    #[test]
    fn apply_levels_stamps_every_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut days: Vec<DailyContribution> = [0u32, 2, 5, 12]
            .iter()
            .enumerate()
            .map(|(i, &count)| DailyContribution {
                date: date + chrono::Duration::days(i as i64),
                count,
                level: 0,
            })
            .collect();

        apply_levels(&mut days, &LevelThresholds::coarse());

        let levels: Vec<u8> = days.iter().map(|d| d.level).collect();
        assert_eq!(levels, vec![0, 1, 2, 3]);
    }
}
