//! Daily impression/click counters.

use chrono::NaiveDate;

/// One day of impression/click counters.
///
/// Storage keys counters by (banner, placement, day); summaries collapse one
/// of the two dimensions, so this type carries only the day and its totals.
/// Stored rows are created lazily by the first event of a triple and only
/// ever incremented afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyStatistic {
    pub stat_date: NaiveDate,
    pub impressions: i64,
    pub clicks: i64,
}

impl DailyStatistic {
    /// Click-through rate for the day; 0 when there are no impressions.
    pub fn ctr(&self) -> f64 {
        ctr(self.clicks, self.impressions)
    }
}

/// Click-through rate, guarding against the zero-impression case.
pub fn ctr(clicks: i64, impressions: i64) -> f64 {
    if impressions == 0 {
        0.0
    } else {
        clicks as f64 / impressions as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctr_with_zero_impressions_is_zero() {
        assert_eq!(ctr(5, 0), 0.0);
        assert_eq!(ctr(0, 0), 0.0);
    }

    #[test]
    fn test_ctr_basic() {
        assert_eq!(ctr(25, 100), 0.25);
        assert_eq!(ctr(0, 100), 0.0);
    }

    #[test]
    fn test_daily_statistic_ctr() {
        let row = DailyStatistic {
            stat_date: chrono::NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            impressions: 200,
            clicks: 10,
        };
        assert_eq!(row.ctr(), 0.05);
    }
}
