use serde::Deserialize;

use crate::core::wire::{de_lenient_f64, de_lenient_i64, de_lenient_string};

#[derive(Deserialize)]
pub(crate) struct SectorActivityEnvelope {
    #[serde(default)]
    pub(crate) sector_activity: Option<Vec<SectorNode>>,
}

#[derive(Deserialize, Default)]
pub(crate) struct SectorNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) sector: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub(crate) filing_count: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) total_shares_tracked: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) average_ownership: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) activity_score: Option<f64>,
}
