//! Estimation configuration.
//!
//! Bundles the progress, SLA and pricing tables into one immutable value that
//! is built once at startup and shared read-only. Every section is optional
//! when deserializing; missing sections keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pricing::PricingTable;
use crate::progress::{ProgressTable, SlaTable, MAX_SLA_DAYS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    pub progress: ProgressTable,
    pub sla: SlaTable,
    pub pricing: PricingTable,
}

impl EstimationConfig {
    /// Parse a JSON document and check it for nonsensical values.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid estimation config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects progress above 100, SLA days outside `1..=MAX_SLA_DAYS` and
    /// negative or non-finite prices.
    pub fn validate(&self) -> Result<(), CoreError> {
        let p = &self.progress;
        for (name, value) in [
            ("pending", p.pending),
            ("in_progress", p.in_progress),
            ("completed", p.completed),
            ("unknown", p.unknown),
        ] {
            if value > 100 {
                return Err(CoreError::Validation(format!(
                    "progress.{name} must be at most 100, got {value}"
                )));
            }
        }

        let s = &self.sla;
        for (name, days) in [
            ("low", s.low),
            ("medium", s.medium),
            ("high", s.high),
            ("critical", s.critical),
            ("unknown", s.unknown),
        ] {
            if !(1..=MAX_SLA_DAYS).contains(&days) {
                return Err(CoreError::Validation(format!(
                    "sla.{name} must be between 1 and {MAX_SLA_DAYS} days, got {days}"
                )));
            }
        }

        let pricing = &self.pricing;
        let factors = pricing
            .base_prices
            .iter()
            .chain(&pricing.problem_multipliers)
            .chain(&pricing.urgency_multipliers)
            .map(|(k, v)| (k.as_str(), *v))
            .chain([
                ("default_base_price", pricing.default_base_price),
                ("default_multiplier", pricing.default_multiplier),
            ]);
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Validation(format!(
                    "pricing factor '{name}' must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EstimationConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = EstimationConfig::from_json("{}").unwrap();
        assert_eq!(config, EstimationConfig::default());
    }

    #[test]
    fn sections_override_independently() {
        let config =
            EstimationConfig::from_json(r#"{"sla": {"critical": 2}, "progress": {"unknown": 5}}"#)
                .unwrap();
        assert_eq!(config.sla.critical, 2);
        assert_eq!(config.sla.low, 7);
        assert_eq!(config.progress.unknown, 5);
        assert_eq!(config.pricing, PricingTable::default());
    }

    #[test]
    fn rejects_progress_over_100() {
        let err = EstimationConfig::from_json(r#"{"progress": {"completed": 120}}"#).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("progress.completed"));
    }

    #[test]
    fn rejects_non_positive_sla() {
        let err = EstimationConfig::from_json(r#"{"sla": {"high": 0}}"#).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("sla.high"));
    }

    #[test]
    fn rejects_sla_beyond_upper_bound() {
        let err = EstimationConfig::from_json(r#"{"sla": {"low": 200000000000}}"#).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("sla.low"));

        let edge = format!(r#"{{"sla": {{"unknown": {MAX_SLA_DAYS}}}}}"#);
        assert!(EstimationConfig::from_json(&edge).is_ok());
    }

    #[test]
    fn rejects_negative_price() {
        let err =
            EstimationConfig::from_json(r#"{"pricing": {"base_prices": {"hdd": -5}}}"#).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("'hdd'"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert_matches!(
            EstimationConfig::from_json("{not json"),
            Err(CoreError::Validation(_))
        );
    }
}
