pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One reporting period of a nonprofit program.
///
/// Records are owned by whatever layer loaded them. The scoring code only
/// reads them and assumes the field contracts below were checked upstream:
/// `beneficiaries > 0`, `cost > 0` and both outcome scores in `[0, 100]`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgramRecord {
    pub id: u64,
    pub program_name: String,
    pub time_period: String,
    pub beneficiaries: i64,
    pub cost: f64,
    pub pre_outcome_score: f64,
    pub post_outcome_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ProgramRecord {
    pub fn new(id: u64, program_name: impl Into<String>, time_period: impl Into<String>) -> Self {
        Self {
            id,
            program_name: program_name.into(),
            time_period: time_period.into(),
            beneficiaries: 1,
            cost: 0.0,
            pre_outcome_score: 0.0,
            post_outcome_score: 0.0,
            created_at: None,
        }
    }

    pub fn with_beneficiaries(mut self, beneficiaries: i64) -> Self {
        self.beneficiaries = beneficiaries;
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_outcomes(mut self, pre: f64, post: f64) -> Self {
        self.pre_outcome_score = pre;
        self.post_outcome_score = post;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Derived metrics for a single program record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ImpactMetrics {
    pub program_id: u64,
    pub program_name: String,
    /// Post minus pre outcome score. Negative values mean outcomes declined.
    pub outcome_improvement: f64,
    pub cost_per_beneficiary: f64,
    /// Absent when there is no prior period to compare against.
    pub growth_rate: Option<f64>,
    /// Weighted composite on a 0-100 scale.
    pub composite_impact_score: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct AnalyticsSummary {
    pub total_programs: usize,
    pub total_beneficiaries: i64,
    pub average_impact_score: f64,
    pub total_cost: f64,
    pub average_outcome_improvement: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgramTrend {
    pub time_period: String,
    pub beneficiaries: i64,
    pub cost: f64,
    pub outcome_improvement: f64,
}

impl From<&ProgramRecord> for ProgramTrend {
    fn from(record: &ProgramRecord) -> Self {
        Self {
            time_period: record.time_period.clone(),
            beneficiaries: record.beneficiaries,
            cost: record.cost,
            outcome_improvement: record.post_outcome_score - record.pre_outcome_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_record_deserializes_without_timestamp() {
        let json = r#"{
            "id": 7,
            "program_name": "Youth Education Initiative",
            "time_period": "2025-Q1",
            "beneficiaries": 150,
            "cost": 25000.0,
            "pre_outcome_score": 45.5,
            "post_outcome_score": 72.3
        }"#;

        let record: ProgramRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.beneficiaries, 150);
        assert!(record.created_at.is_none());
    }

    #[test]
    fn test_trend_uses_unrounded_improvement() {
        let record = ProgramRecord::new(1, "Literacy", "2024-Q4")
            .with_beneficiaries(40)
            .with_cost(1200.0)
            .with_outcomes(10.125, 20.5);

        let trend = ProgramTrend::from(&record);
        assert_eq!(trend.time_period, "2024-Q4");
        assert_eq!(trend.outcome_improvement, 20.5 - 10.125);
    }

    #[test]
    fn test_metrics_serialize_absent_growth_as_null() {
        let metrics = ImpactMetrics {
            program_id: 1,
            program_name: "Meals".to_string(),
            outcome_improvement: 12.0,
            cost_per_beneficiary: 40.0,
            growth_rate: None,
            composite_impact_score: 61.2,
        };

        let value = serde_json::to_value(&metrics).unwrap();
        assert!(value["growth_rate"].is_null());
    }
}
