//! User profile captured by the intake wizard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::currency::format_inr;
use crate::language::Language;

/// Investment budget bands offered at intake, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetBand {
    #[serde(rename = "Under ₹50K")]
    Under50K,
    #[serde(rename = "₹50K - ₹100K")]
    From50KTo1L,
    #[serde(rename = "₹1L - ₹5L")]
    From1LTo5L,
    #[serde(rename = "₹5L - ₹10L")]
    From5LTo10L,
    #[serde(rename = "₹10L - ₹25L")]
    From10LTo25L,
    #[serde(rename = "Above ₹25L")]
    Above25L,
}

impl BudgetBand {
    /// All bands, lowest first
    pub fn all() -> &'static [BudgetBand] {
        &[
            BudgetBand::Under50K,
            BudgetBand::From50KTo1L,
            BudgetBand::From1LTo5L,
            BudgetBand::From5LTo10L,
            BudgetBand::From10LTo25L,
            BudgetBand::Above25L,
        ]
    }

    /// Short label shown on the intake form
    pub fn label(&self) -> &'static str {
        match self {
            BudgetBand::Under50K => "Under ₹50K",
            BudgetBand::From50KTo1L => "₹50K - ₹100K",
            BudgetBand::From1LTo5L => "₹1L - ₹5L",
            BudgetBand::From5LTo10L => "₹5L - ₹10L",
            BudgetBand::From10LTo25L => "₹10L - ₹25L",
            BudgetBand::Above25L => "Above ₹25L",
        }
    }

    /// Inclusive lower bound in rupees
    pub fn min_rupees(&self) -> u64 {
        match self {
            BudgetBand::Under50K => 0,
            BudgetBand::From50KTo1L => 50_000,
            BudgetBand::From1LTo5L => 100_000,
            BudgetBand::From5LTo10L => 500_000,
            BudgetBand::From10LTo25L => 1_000_000,
            BudgetBand::Above25L => 2_500_000,
        }
    }

    /// Upper bound in rupees, `None` for the open-ended top band
    pub fn max_rupees(&self) -> Option<u64> {
        match self {
            BudgetBand::Under50K => Some(50_000),
            BudgetBand::From50KTo1L => Some(100_000),
            BudgetBand::From1LTo5L => Some(500_000),
            BudgetBand::From5LTo10L => Some(1_000_000),
            BudgetBand::From10LTo25L => Some(2_500_000),
            BudgetBand::Above25L => None,
        }
    }

    /// Range with full Indian digit grouping, e.g. `₹50,000 - ₹1,00,000`
    pub fn formatted_range(&self) -> String {
        match (self.min_rupees(), self.max_rupees()) {
            (0, Some(max)) => format!("Up to {}", format_inr(max)),
            (min, Some(max)) => format!("{} - {}", format_inr(min), format_inr(max)),
            (min, None) => format!("Above {}", format_inr(min)),
        }
    }

    /// Parse the intake label (surrounding whitespace ignored)
    pub fn from_label(label: &str) -> Option<BudgetBand> {
        let needle = label.trim();
        BudgetBand::all()
            .iter()
            .copied()
            .find(|band| band.label() == needle)
    }
}

impl fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown budget label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown budget band: {0}")]
pub struct UnknownBudgetBand(pub String);

impl FromStr for BudgetBand {
    type Err = UnknownBudgetBand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BudgetBand::from_label(s).ok_or_else(|| UnknownBudgetBand(s.to_string()))
    }
}

/// Validated profile of the person using the widget.
///
/// Built once by the intake wizard and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub language: Language,
    /// Preferred city, or the free text typed when "Other" was picked
    pub location: String,
    pub budget: BudgetBand,
}
