//! Price estimation for recovery jobs.
//!
//! `price = base(device) * problem multiplier * urgency multiplier`. Lookups
//! that miss fall back to the table's defaults; every fallback is named in
//! [`PriceEstimate::defaults_applied`] so a quote can be audited.
//!
//! Note that price urgency (`standard` / `urgent` / `emergency`) is the
//! turnaround tier offered on the quote form, distinct from the intake
//! [`Urgency`](crate::domain::Urgency) of a service request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Urgency key used when the requested tier has no timeframe entry.
pub const STANDARD_URGENCY: &str = "standard";

/// A label in both supported locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ka: String,
    pub en: String,
}

impl LocalizedText {
    fn new(ka: &str, en: &str) -> Self {
        Self {
            ka: ka.to_string(),
            en: en.to_string(),
        }
    }
}

/// Pricing lookup tables. Keys are the lowercase codes sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub currency: String,
    pub default_base_price: f64,
    pub default_multiplier: f64,
    pub base_prices: BTreeMap<String, f64>,
    pub problem_multipliers: BTreeMap<String, f64>,
    pub urgency_multipliers: BTreeMap<String, f64>,
    pub timeframes: BTreeMap<String, LocalizedText>,
}

impl Default for PricingTable {
    fn default() -> Self {
        let base_prices = [
            ("hdd", 100.0),
            ("ssd", 150.0),
            ("raid", 300.0),
            ("usb", 80.0),
            ("sd", 60.0),
        ];
        let problem_multipliers = [
            ("logical", 1.0),
            ("physical", 1.5),
            ("water", 2.0),
            ("fire", 2.5),
        ];
        let urgency_multipliers = [("standard", 1.0), ("urgent", 1.5), ("emergency", 2.0)];
        let timeframes = [
            (
                "standard",
                LocalizedText::new("სტანდარტული (5-7 დღე)", "Standard (5-7 days)"),
            ),
            (
                "urgent",
                LocalizedText::new("ეჩქარებული (2-3 დღე)", "Urgent (2-3 days)"),
            ),
            (
                "emergency",
                LocalizedText::new("გადაუდებელი (24 საათი)", "Emergency (24 hours)"),
            ),
        ];

        Self {
            currency: "₾".to_string(),
            default_base_price: 100.0,
            default_multiplier: 1.0,
            base_prices: to_map(base_prices),
            problem_multipliers: to_map(problem_multipliers),
            urgency_multipliers: to_map(urgency_multipliers),
            timeframes: timeframes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}

fn to_map<const N: usize>(entries: [(&str, f64); N]) -> BTreeMap<String, f64> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Every factor that went into a quote, echoed back with the inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub problem_multiplier: f64,
    pub urgency_multiplier: f64,
    pub device_type: String,
    pub problem_type: String,
    pub urgency: String,
    /// Names of the lookups (`device_type`, `problem_type`, `urgency`) that
    /// missed and used a default value.
    pub defaults_applied: Vec<&'static str>,
}

/// Result of [`PricingTable::estimate_price`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub estimated_price: f64,
    pub currency: String,
    pub breakdown: PriceBreakdown,
    pub timeframe: Option<LocalizedText>,
}

impl PricingTable {
    pub fn estimate_price(
        &self,
        device_type: &str,
        problem_type: &str,
        urgency: &str,
    ) -> PriceEstimate {
        let mut defaults_applied = Vec::new();

        let base_price = lookup(&self.base_prices, device_type).unwrap_or_else(|| {
            defaults_applied.push("device_type");
            self.default_base_price
        });
        let problem_multiplier = lookup(&self.problem_multipliers, problem_type).unwrap_or_else(|| {
            defaults_applied.push("problem_type");
            self.default_multiplier
        });
        let urgency_multiplier = lookup(&self.urgency_multipliers, urgency).unwrap_or_else(|| {
            defaults_applied.push("urgency");
            self.default_multiplier
        });

        let timeframe = self
            .timeframes
            .get(urgency)
            .or_else(|| self.timeframes.get(STANDARD_URGENCY))
            .cloned();

        PriceEstimate {
            estimated_price: base_price * problem_multiplier * urgency_multiplier,
            currency: self.currency.clone(),
            breakdown: PriceBreakdown {
                base_price,
                problem_multiplier,
                urgency_multiplier,
                device_type: device_type.to_string(),
                problem_type: problem_type.to_string(),
                urgency: urgency.to_string(),
                defaults_applied,
            },
            timeframe,
        }
    }
}

fn lookup(table: &BTreeMap<String, f64>, key: &str) -> Option<f64> {
    table.get(key).copied()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
