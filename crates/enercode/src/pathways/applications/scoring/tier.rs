use serde::{Deserialize, Serialize};

use super::super::catalog::Points;
use super::super::domain::HrvPresence;

/// The five 9.36.8 performance tiers plus the structural "no HRV" escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Not Applicable")]
    NotApplicable,
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
    #[serde(rename = "Tier 4")]
    Tier4,
    #[serde(rename = "Tier 5")]
    Tier5,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Tier::NotApplicable => "Not Applicable",
            Tier::Tier1 => "Tier 1",
            Tier::Tier2 => "Tier 2",
            Tier::Tier3 => "Tier 3",
            Tier::Tier4 => "Tier 4",
            Tier::Tier5 => "Tier 5",
        }
    }

    /// Ordering rank for monotonicity checks; Not Applicable sits below
    /// every achievable tier.
    pub const fn rank(self) -> u8 {
        match self {
            Tier::NotApplicable => 0,
            Tier::Tier1 => 1,
            Tier::Tier2 => 2,
            Tier::Tier3 => 3,
            Tier::Tier4 => 4,
            Tier::Tier5 => 5,
        }
    }
}

/// Badge styling the summary panel applies to the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierStatus {
    Success,
    Warning,
    Destructive,
}

impl TierStatus {
    pub const fn label(self) -> &'static str {
        match self {
            TierStatus::Success => "success",
            TierStatus::Warning => "warning",
            TierStatus::Destructive => "destructive",
        }
    }
}

/// Derived classification; never stored except as part of an evaluation
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierClassification {
    pub tier: Tier,
    pub status: TierStatus,
    pub description: String,
}

fn classification(tier: Tier, status: TierStatus, description: &str) -> TierClassification {
    TierClassification {
        tier,
        status,
        description: description.to_string(),
    }
}

/// Classify a point total against the tier thresholds.
///
/// The HRV precondition is structural and wins over any point total: the
/// tiered prescriptive path cannot be used at all without heat or energy
/// recovery ventilation. Threshold lower bounds are inclusive. The envelope
/// sub-minimums quoted in the descriptions are informational text only;
/// only the aggregate total is verified.
pub fn classify(total: Points, hrv: Option<HrvPresence>) -> TierClassification {
    if hrv == Some(HrvPresence::Without) {
        return classification(
            Tier::NotApplicable,
            TierStatus::Destructive,
            "The tiered prescriptive path requires a heat or energy recovery ventilator.",
        );
    }

    let tenths = total.tenths();
    if tenths >= 750 {
        classification(
            Tier::Tier5,
            TierStatus::Success,
            "75 points or more, including 15 envelope points.",
        )
    } else if tenths >= 400 {
        classification(
            Tier::Tier4,
            TierStatus::Success,
            "40 points or more, including 15 envelope points.",
        )
    } else if tenths >= 200 {
        classification(
            Tier::Tier3,
            TierStatus::Success,
            "20 points or more, including 10 envelope points.",
        )
    } else if tenths >= 100 {
        classification(
            Tier::Tier2,
            TierStatus::Success,
            "10 points or more, including 5 envelope points.",
        )
    } else {
        classification(
            Tier::Tier1,
            TierStatus::Warning,
            "Baseline prescriptive compliance; no additional points required.",
        )
    }
}

/// Rough construction-cost comparison between the prescriptive and
/// performance routes for the classified tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub prescriptive: u32,
    pub performance: u32,
    pub savings: u32,
}

/// Two-bracket placeholder table keyed on Tier 2 versus everything else;
/// treat the figures as configuration, not an engineering estimate.
pub fn estimate_costs(tier: Tier) -> CostEstimate {
    let (prescriptive, performance) = if tier == Tier::Tier2 {
        (14_800, 9_600)
    } else {
        (9_800, 7_200)
    };
    CostEstimate {
        prescriptive,
        performance,
        savings: prescriptive - performance,
    }
}
