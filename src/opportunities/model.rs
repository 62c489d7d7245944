use std::fmt;

use serde::Serialize;

use crate::core::wire::{num, text};
use crate::filings::Filing;
use crate::opportunities::wire::{AnalysisNode, CompanyNode, OpportunityNode};

/// Server-computed notability of an opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Default)]
pub enum SignalStrength {
    Strong,
    Moderate,
    Weak,
    /// A label this client does not know, kept verbatim.
    Other(String),
    /// The server sent no label.
    #[default]
    Unknown,
}

impl SignalStrength {
    /// Parses the server label case-insensitively.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_uppercase().as_str() {
            "" => Self::Unknown,
            "STRONG" => Self::Strong,
            "MODERATE" => Self::Moderate,
            "WEAK" => Self::Weak,
            _ => Self::Other(label.to_string()),
        }
    }

    /// The label as displayed on the badge.
    pub fn label(&self) -> &str {
        match self {
            Self::Strong => "STRONG",
            Self::Moderate => "MODERATE",
            Self::Weak => "WEAK",
            Self::Other(s) => s,
            Self::Unknown => "N/A",
        }
    }

    /// Suffix of the badge's `signal-*` CSS class.
    pub fn css_suffix(&self) -> String {
        match self {
            Self::Strong => "strong".into(),
            Self::Moderate => "moderate".into(),
            Self::Weak => "weak".into(),
            Self::Unknown => "unknown".into(),
            Self::Other(s) => s
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
                .collect(),
        }
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The issuer a filing is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct CompanyRef {
    pub name: String,
    pub ticker: String,
    pub sector: String,
}

impl From<CompanyNode> for CompanyRef {
    fn from(n: CompanyNode) -> Self {
        Self {
            name: text(n.name),
            ticker: text(n.ticker),
            sector: text(n.sector),
        }
    }
}

/// Server-side analysis attached to an opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Analysis {
    pub signal_strength: SignalStrength,
    /// Estimated dollar value of the reported position.
    pub estimated_position_value: f64,
    /// Whether the form type signals activist intent (13D).
    pub is_activist_form: bool,
    pub days_since_filing: i64,
    /// Ownership bracket label (e.g. `"Significant (5-10%)"`), possibly empty.
    pub ownership_tier: String,
}

impl From<AnalysisNode> for Analysis {
    fn from(n: AnalysisNode) -> Self {
        Self {
            signal_strength: n
                .signal_strength
                .as_deref()
                .map_or(SignalStrength::Unknown, SignalStrength::parse),
            estimated_position_value: num(n.estimated_position_value),
            is_activist_form: n.is_activist_form.unwrap_or(false),
            days_since_filing: n.days_since_filing.unwrap_or(0),
            ownership_tier: text(n.ownership_tier),
        }
    }
}

/// A filing enriched server-side with a signal and a position estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub filing: Filing,
    pub company: CompanyRef,
    pub analysis: Analysis,
}

impl From<OpportunityNode> for Opportunity {
    fn from(n: OpportunityNode) -> Self {
        Self {
            filing: n.filing.unwrap_or_default().into(),
            company: n.company.unwrap_or_default().into(),
            analysis: n.analysis.unwrap_or_default().into(),
        }
    }
}

/// Sum of estimated position values; missing values already count as zero.
pub fn total_position_value(opportunities: &[Opportunity]) -> f64 {
    opportunities
        .iter()
        .map(|o| o.analysis.estimated_position_value)
        .sum()
}
