use serde::Deserialize;

use crate::core::wire::{de_lenient_f64, de_lenient_i64, de_lenient_string};

/// The listing endpoint answers with an envelope; older servers answer with a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum FilingsBody {
    Bare(Vec<FilingNode>),
    Envelope(FilingsEnvelope),
}

#[derive(Deserialize)]
pub(crate) struct FilingsEnvelope {
    #[serde(default)]
    pub(crate) filings: Option<Vec<FilingNode>>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub(crate) total: Option<i64>,
}

/// One filing, as embedded both in the listing and in trading opportunities.
#[derive(Deserialize, Default)]
pub(crate) struct FilingNode {
    #[serde(default, deserialize_with = "de_lenient_i64")]
    pub(crate) company_id: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) owner_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) form_type: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) ownership_percent: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) shares_owned: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) filing_date: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) accession_number: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) url: Option<String>,
}
