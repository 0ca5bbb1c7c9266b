//! Impact metric calculations for program records.
//!
//! Every calculation here is a pure function of its inputs and of the weights
//! and ranges bound into the [`MetricsCalculator`]. Degenerate inputs produce
//! sentinel values instead of errors:
//!
//! - zero or negative beneficiaries yield a cost per beneficiary of `0.0`
//! - a missing or zero prior period yields no growth rate
//! - equal normalization bounds yield the neutral score `50.0`

use serde::Serialize;
use tracing::debug;

use super::score_normalizer::{invert, normalize, normalize_in, round_to, NEUTRAL_SCORE};
use crate::config::{ImpactConfig, NormalizationRanges, ScoringWeights};
use crate::core::{ImpactMetrics, ProgramRecord};

/// Normalized components of a composite score, each on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub outcome: f64,
    /// Already inverted: cheaper programs score higher.
    pub cost_efficiency: f64,
    pub growth: f64,
    pub composite: f64,
}

/// Computes impact metrics and composite scores.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsCalculator {
    weights: ScoringWeights,
    ranges: NormalizationRanges,
}

impl MetricsCalculator {
    pub fn new(weights: ScoringWeights, ranges: NormalizationRanges) -> Self {
        Self { weights, ranges }
    }

    pub fn from_config(config: &ImpactConfig) -> Self {
        Self::new(config.scoring_weights(), config.normalization_ranges())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn ranges(&self) -> &NormalizationRanges {
        &self.ranges
    }

    /// Post minus pre outcome score, rounded to 2 decimals.
    pub fn outcome_improvement(pre_score: f64, post_score: f64) -> f64 {
        let improvement = post_score - pre_score;
        debug!(
            "Outcome improvement: {} - {} = {}",
            post_score, pre_score, improvement
        );
        round_to(improvement, 2)
    }

    /// Cost divided by beneficiaries, rounded to 2 decimals.
    pub fn cost_per_beneficiary(cost: f64, beneficiaries: i64) -> f64 {
        if beneficiaries <= 0 {
            return 0.0;
        }

        let cost_per = cost / beneficiaries as f64;
        debug!(
            "Cost per beneficiary: {} / {} = {}",
            cost, beneficiaries, cost_per
        );
        round_to(cost_per, 2)
    }

    /// Relative change against the previous period, rounded to 4 decimals.
    ///
    /// `0.15` means 15% growth. Returns `None` without a usable baseline.
    pub fn growth_rate(current: i64, previous: Option<i64>) -> Option<f64> {
        let previous = previous.filter(|&p| p != 0)?;

        let growth = (current as f64 - previous as f64) / previous as f64;
        debug!(
            "Growth rate: ({} - {}) / {} = {}",
            current, previous, previous, growth
        );
        Some(round_to(growth, 4))
    }

    /// Min-max normalization onto 0-100, clamped.
    pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
        normalize(value, min, max)
    }

    pub fn score_breakdown(
        &self,
        outcome_improvement: f64,
        cost_per_beneficiary: f64,
        growth_rate: Option<f64>,
    ) -> ScoreBreakdown {
        let outcome = normalize_in(outcome_improvement, self.ranges.outcome_improvement);
        let cost_efficiency =
            invert(normalize_in(cost_per_beneficiary, self.ranges.cost_per_beneficiary));
        let growth = growth_rate
            .map(|rate| normalize_in(rate, self.ranges.growth_rate))
            .unwrap_or(NEUTRAL_SCORE);

        let composite = outcome * self.weights.outcome
            + cost_efficiency * self.weights.cost
            + growth * self.weights.growth;

        debug!(
            "Composite score: outcome={:.1}, cost={:.1}, growth={:.1} -> {:.1}",
            outcome, cost_efficiency, growth, composite
        );

        ScoreBreakdown {
            outcome,
            cost_efficiency,
            growth,
            composite: round_to(composite, 2),
        }
    }

    /// Weighted composite of the three normalized metrics, rounded to 2 decimals.
    pub fn composite_score(
        &self,
        outcome_improvement: f64,
        cost_per_beneficiary: f64,
        growth_rate: Option<f64>,
    ) -> f64 {
        self.score_breakdown(outcome_improvement, cost_per_beneficiary, growth_rate)
            .composite
    }

    /// All metrics for one record. The caller looks up the prior period.
    pub fn compute_program_metrics(
        &self,
        record: &ProgramRecord,
        previous_beneficiaries: Option<i64>,
    ) -> ImpactMetrics {
        let outcome_improvement =
            Self::outcome_improvement(record.pre_outcome_score, record.post_outcome_score);
        let cost_per_beneficiary = Self::cost_per_beneficiary(record.cost, record.beneficiaries);
        let growth_rate = Self::growth_rate(record.beneficiaries, previous_beneficiaries);
        let composite_impact_score =
            self.composite_score(outcome_improvement, cost_per_beneficiary, growth_rate);

        ImpactMetrics {
            program_id: record.id,
            program_name: record.program_name.clone(),
            outcome_improvement,
            cost_per_beneficiary,
            growth_rate,
            composite_impact_score,
        }
    }

    /// Metrics for every record, best composite score first.
    ///
    /// Ties keep input order. The result holds at most `limit` entries.
    pub fn rank(&self, records: &[ProgramRecord], limit: usize) -> Vec<ImpactMetrics> {
        let mut ranked: Vec<ImpactMetrics> = records
            .iter()
            .map(|record| self.compute_program_metrics(record, None))
            .collect();

        ranked.sort_by(|a, b| b.composite_impact_score.total_cmp(&a.composite_impact_score));
        ranked.truncate(limit);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MetricRange;

    fn record(
        id: u64,
        name: &str,
        beneficiaries: i64,
        cost: f64,
        pre: f64,
        post: f64,
    ) -> ProgramRecord {
        ProgramRecord::new(id, name, "2025-Q1")
            .with_beneficiaries(beneficiaries)
            .with_cost(cost)
            .with_outcomes(pre, post)
    }

    #[test]
    fn test_outcome_improvement() {
        assert_eq!(MetricsCalculator::outcome_improvement(40.0, 70.0), 30.0);
        assert_eq!(MetricsCalculator::outcome_improvement(70.0, 50.0), -20.0);
        assert_eq!(MetricsCalculator::outcome_improvement(45.5, 72.3), 26.8);
    }

    #[test]
    fn test_cost_per_beneficiary() {
        assert_eq!(MetricsCalculator::cost_per_beneficiary(10000.0, 100), 100.0);
        assert_eq!(MetricsCalculator::cost_per_beneficiary(25000.0, 150), 166.67);
        assert_eq!(MetricsCalculator::cost_per_beneficiary(10000.0, 0), 0.0);
        assert_eq!(MetricsCalculator::cost_per_beneficiary(10000.0, -5), 0.0);
    }

    #[test]
    fn test_growth_rate() {
        assert_eq!(MetricsCalculator::growth_rate(150, Some(100)), Some(0.5));
        assert_eq!(MetricsCalculator::growth_rate(80, Some(100)), Some(-0.2));
        assert_eq!(MetricsCalculator::growth_rate(150, None), None);
        assert_eq!(MetricsCalculator::growth_rate(150, Some(0)), None);
        assert_eq!(MetricsCalculator::growth_rate(100, Some(3)), Some(32.3333));
    }

    #[test]
    fn test_growth_rate_extreme_counts_do_not_overflow() {
        let rate = MetricsCalculator::growth_rate(i64::MAX, Some(-1)).unwrap();
        assert!(rate.is_finite() && rate < 0.0);

        let rate = MetricsCalculator::growth_rate(i64::MIN, Some(i64::MAX)).unwrap();
        assert!(rate.is_finite() && rate < 0.0);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        assert_eq!(MetricsCalculator::cost_per_beneficiary(1.0, 8), 0.12);
        assert_eq!(MetricsCalculator::growth_rate(33, Some(32)), Some(0.0312));
        assert_eq!(MetricsCalculator::outcome_improvement(0.0, 0.125), 0.12);
    }

    #[test]
    fn test_composite_score_defaults() {
        let calc = MetricsCalculator::default();

        // outcome 50 -> 50, cost 100 -> 90, no growth -> 50
        // 50 * 0.40 + 90 * 0.35 + 50 * 0.25 = 64.0
        assert_eq!(calc.composite_score(50.0, 100.0, None), 64.0);

        // growth 0.5 normalizes to 50 on [-1, 2]
        assert_eq!(calc.composite_score(50.0, 100.0, Some(0.5)), 64.0);
    }

    #[test]
    fn test_composite_score_extremes() {
        let calc = MetricsCalculator::default();
        assert_eq!(calc.composite_score(100.0, 0.0, Some(2.0)), 100.0);
        assert_eq!(calc.composite_score(-100.0, 5000.0, Some(-1.0)), 0.0);
    }

    #[test]
    fn test_composite_uses_injected_weights_and_ranges() {
        let weights = ScoringWeights {
            outcome: 1.0,
            cost: 0.0,
            growth: 0.0,
        };
        let ranges = NormalizationRanges {
            outcome_improvement: MetricRange::new(0.0, 20.0),
            ..NormalizationRanges::default()
        };
        let calc = MetricsCalculator::new(weights, ranges);

        assert_eq!(calc.composite_score(10.0, 999.0, None), 50.0);
        assert_eq!(calc.composite_score(40.0, 999.0, None), 100.0);
    }

    #[test]
    fn test_score_breakdown_inverts_cost() {
        let breakdown = MetricsCalculator::default().score_breakdown(0.0, 250.0, None);
        assert_eq!(breakdown.cost_efficiency, 75.0);
        assert_eq!(breakdown.growth, 50.0);
        assert_eq!(breakdown.outcome, 0.0);
    }

    #[test]
    fn test_compute_program_metrics() {
        let calc = MetricsCalculator::default();
        let metrics = calc.compute_program_metrics(
            &record(3, "Youth Education Initiative", 150, 25000.0, 45.5, 72.3),
            Some(120),
        );

        assert_eq!(metrics.program_id, 3);
        assert_eq!(metrics.program_name, "Youth Education Initiative");
        assert_eq!(metrics.outcome_improvement, 26.8);
        assert_eq!(metrics.cost_per_beneficiary, 166.67);
        assert_eq!(metrics.growth_rate, Some(0.25));
        assert!((0.0..=100.0).contains(&metrics.composite_impact_score));
    }

    #[test]
    fn test_rank_orders_descending_and_truncates() {
        let calc = MetricsCalculator::default();
        let records = vec![
            record(1, "Low", 10, 9000.0, 50.0, 51.0),
            record(2, "High", 100, 1000.0, 10.0, 90.0),
            record(3, "Mid", 50, 5000.0, 30.0, 60.0),
        ];

        let ranked = calc.rank(&records, 2);
        let names: Vec<_> = ranked.iter().map(|m| m.program_name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let calc = MetricsCalculator::default();
        let records = vec![
            record(1, "First", 10, 100.0, 10.0, 20.0),
            record(2, "Second", 10, 100.0, 10.0, 20.0),
            record(3, "Third", 10, 100.0, 10.0, 20.0),
        ];

        let ids: Vec<_> = calc.rank(&records, 10).iter().map(|m| m.program_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_zero_limit() {
        let calc = MetricsCalculator::default();
        let records = vec![record(1, "Only", 10, 100.0, 10.0, 20.0)];
        assert!(calc.rank(&records, 0).is_empty());
    }
}
