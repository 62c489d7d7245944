use crate::{
    core::{DashClient, DashError, client::RetryConfig, net},
    sectors::{model::SectorActivity, wire::SectorActivityEnvelope},
};

pub(super) async fn fetch_sector_activity(
    client: &DashClient,
    days_back: u32,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<SectorActivity>, DashError> {
    let mut url = client.sector_activity_url()?;
    url.query_pairs_mut()
        .append_pair("days_back", &days_back.to_string());

    let env: SectorActivityEnvelope =
        net::get_json(client, url, "sector_activity", retry_override).await?;

    Ok(env
        .sector_activity
        .unwrap_or_default()
        .into_iter()
        .map(SectorActivity::from)
        .collect())
}
