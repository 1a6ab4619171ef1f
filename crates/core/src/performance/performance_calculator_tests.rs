#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::performance::{
        drawdown_series, max_drawdown, return_since, trailing_sma, PortfolioSnapshot,
    };

    fn snapshot(year: i32, month: u32, day: u32, total_value: Decimal) -> PortfolioSnapshot {
        PortfolioSnapshot {
            id: "s-1".to_string(),
            user_id: "u-1".to_string(),
            snapshot_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            total_value,
        }
    }

    #[test]
    fn test_sma_excludes_the_current_point() {
        let values = vec![dec!(1), dec!(2), dec!(3), dec!(4)];
        let sma = trailing_sma(&values, 2);
        assert_eq!(sma, vec![None, None, Some(dec!(1.5)), Some(dec!(2.5))]);
    }

    #[test]
    fn test_sma_first_defined_at_window_index() {
        let values: Vec<Decimal> = (1..=8).map(Decimal::from).collect();
        let sma = trailing_sma(&values, 7);
        assert!(sma[..7].iter().all(Option::is_none));
        assert_eq!(sma[7], Some(dec!(4)));
    }

    #[test]
    fn test_sma_window_longer_than_series() {
        let values = vec![dec!(10), dec!(20)];
        assert_eq!(trailing_sma(&values, 30), vec![None, None]);
    }

    #[test]
    fn test_sma_zero_window() {
        let values = vec![dec!(10), dec!(20)];
        assert_eq!(trailing_sma(&values, 0), vec![None, None]);
    }

    #[test]
    fn test_drawdown_from_running_peak() {
        let values = vec![dec!(100000), dec!(110000), dec!(90000)];
        assert_eq!(drawdown_series(&values), vec![0, 0, -18]);
    }

    #[test]
    fn test_drawdown_resets_at_new_peak() {
        let values = vec![dec!(100), dec!(80), dec!(120), dec!(90)];
        assert_eq!(drawdown_series(&values), vec![0, -20, 0, -25]);
    }

    #[test]
    fn test_drawdown_zero_peak_is_zero() {
        let values = vec![Decimal::ZERO, Decimal::ZERO];
        assert_eq!(drawdown_series(&values), vec![0, 0]);
    }

    #[test]
    fn test_drawdown_after_leading_zeros() {
        let values = vec![Decimal::ZERO, dec!(100), dec!(50)];
        assert_eq!(drawdown_series(&values), vec![0, 0, -50]);
    }

    #[test]
    fn test_max_drawdown_is_the_deepest_point() {
        assert_eq!(max_drawdown(&[0, -5, -2]), -5);
        assert_eq!(max_drawdown(&[0, 0]), 0);
        assert_eq!(max_drawdown(&[]), 0);
    }

    #[test]
    fn test_return_since_anchor_date() {
        let snapshots = vec![
            snapshot(2024, 1, 1, dec!(100000)),
            snapshot(2024, 6, 1, dec!(110000)),
        ];
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(return_since(&snapshots, anchor), 10);
    }

    #[test]
    fn test_return_since_picks_first_snapshot_on_or_after_anchor() {
        let snapshots = vec![
            snapshot(2024, 1, 1, dec!(100)),
            snapshot(2024, 3, 1, dec!(200)),
            snapshot(2024, 6, 1, dec!(300)),
        ];
        let anchor = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(return_since(&snapshots, anchor), 50);
    }

    #[test]
    fn test_return_rounds_to_whole_percent() {
        let snapshots = vec![
            snapshot(2024, 1, 1, dec!(300)),
            snapshot(2024, 6, 1, dec!(400)),
        ];
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(return_since(&snapshots, anchor), 33);
    }

    #[test]
    fn test_return_is_zero_without_qualifying_snapshot() {
        let snapshots = vec![snapshot(2024, 1, 1, dec!(100))];
        let anchor = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(return_since(&snapshots, anchor), 0);
        assert_eq!(return_since(&[], anchor), 0);
    }

    #[test]
    fn test_return_is_zero_when_anchor_value_is_zero() {
        let snapshots = vec![
            snapshot(2024, 1, 1, Decimal::ZERO),
            snapshot(2024, 6, 1, dec!(400)),
        ];
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(return_since(&snapshots, anchor), 0);
    }
}
