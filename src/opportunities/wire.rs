use serde::Deserialize;

use crate::core::wire::{de_lenient_bool, de_lenient_f64, de_lenient_i64, de_lenient_string};
use crate::filings::wire::FilingNode;

#[derive(Deserialize)]
pub(crate) struct OpportunitiesEnvelope {
    #[serde(default)]
    pub(crate) opportunities: Option<Vec<OpportunityNode>>,
}

#[derive(Deserialize, Default)]
pub(crate) struct OpportunityNode {
    #[serde(default)]
    pub(crate) filing: Option<FilingNode>,
    #[serde(default)]
    pub(crate) company: Option<CompanyNode>,
    #[serde(default)]
    pub(crate) analysis: Option<AnalysisNode>,
}

#[derive(Deserialize, Default)]
pub(crate) struct CompanyNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) ticker: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) sector: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct AnalysisNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) signal_strength: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) estimated_position_value: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_bool")]
    pub(crate) is_activist_form: Option<bool>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub(crate) days_since_filing: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) ownership_tier: Option<String>,
}
