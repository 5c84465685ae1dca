use teamgen_stats::descriptive::DescriptiveStats;

/// Rates how evenly two team totals are matched, from 0 to 100.
///
/// The variance of the two totals is compared against `mean²`, which is
/// taken as the worst possible spread:
///
/// `score = round(max(0, 100 - variance / mean² * 100))`
///
/// A zero mean or a non-finite total scores 0.
///
/// # Example
///
/// ```
/// use teamgen_engine::score_balance;
///
/// assert_eq!(score_balance(500.0, 500.0), 100);
/// assert_eq!(score_balance(300.0, 100.0), 75);
/// assert_eq!(score_balance(0.0, 0.0), 0);
/// ```
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn score_balance(total_a: f64, total_b: f64) -> u8 {
    if !total_a.is_finite() || !total_b.is_finite() {
        return 0;
    }
    let Some(stats) = DescriptiveStats::new([total_a, total_b]) else {
        return 0;
    };
    if stats.mean == 0.0 {
        return 0;
    }
    let max_variance = stats.mean.powi(2);
    let score = (100.0 - stats.variance / max_variance * 100.0).clamp(0.0, 100.0);
    score.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_totals_score_100() {
        assert_eq!(score_balance(230.0, 230.0), 100);
    }

    #[test]
    fn test_one_empty_team_scores_zero() {
        // variance == mean², the assumed ceiling
        assert_eq!(score_balance(460.0, 0.0), 0);
    }

    #[test]
    fn test_close_totals_score_high() {
        // mean 240, variance 100 -> 100 - 100/57600*100 = 99.83
        assert_eq!(score_balance(230.0, 250.0), 100);
        // mean 200, variance 2500 -> 100 - 6.25 = 93.75
        assert_eq!(score_balance(150.0, 250.0), 94);
    }

    #[test]
    fn test_score_is_symmetric() {
        assert_eq!(score_balance(120.0, 345.0), score_balance(345.0, 120.0));
    }

    #[test]
    fn test_degenerate_means_score_zero() {
        assert_eq!(score_balance(0.0, 0.0), 0);
        assert_eq!(score_balance(100.0, -100.0), 0);
        assert_eq!(score_balance(f64::NAN, 100.0), 0);
        assert_eq!(score_balance(f64::INFINITY, 100.0), 0);
    }
}
