use crate::{
    core::{DashClient, DashError, client::RetryConfig, net},
    opportunities::{model::Opportunity, wire::OpportunitiesEnvelope},
};

pub(super) async fn fetch_opportunities(
    client: &DashClient,
    min_ownership: f64,
    days_back: u32,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<Opportunity>, DashError> {
    if !min_ownership.is_finite() || min_ownership < 0.0 {
        return Err(DashError::InvalidParams(format!(
            "min_ownership must be a non-negative number, got {min_ownership}"
        )));
    }

    let mut url = client.opportunities_url()?;
    url.query_pairs_mut()
        .append_pair("min_ownership", &format_threshold(min_ownership))
        .append_pair("days_back", &days_back.to_string());

    let env: OpportunitiesEnvelope =
        net::get_json(client, url, "trading_opportunities", retry_override).await?;

    Ok(env
        .opportunities
        .unwrap_or_default()
        .into_iter()
        .map(Opportunity::from)
        .collect())
}

/// Always sends a decimal point, the way the threshold input renders it (`5` → `5.0`).
fn format_threshold(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}
