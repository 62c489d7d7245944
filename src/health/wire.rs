use serde::Deserialize;

use crate::core::wire::de_lenient_string;

#[derive(Deserialize)]
pub(crate) struct HealthEnvelope {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) status: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) version: Option<String>,
}
