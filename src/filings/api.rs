use crate::{
    core::{DashClient, DashError, client::RetryConfig, net},
    filings::{FilingsQuery, model::FilingsPage, wire::FilingsBody},
};

pub(super) async fn fetch_filings(
    client: &DashClient,
    query: &FilingsQuery,
    retry_override: Option<&RetryConfig>,
) -> Result<FilingsPage, DashError> {
    let mut url = client.filings_url()?;
    {
        let mut qp = url.query_pairs_mut();
        if let Some(days) = query.days_back {
            qp.append_pair("days_back", &days.to_string());
        }
        qp.append_pair("limit", &query.limit.to_string());
        if let Some(sort_by) = &query.sort_by {
            qp.append_pair("sort_by", sort_by);
            qp.append_pair("order", query.order.as_str());
        }
        if let Some(form_type) = query.form_type.as_query() {
            qp.append_pair("form_type", form_type);
        }
    }

    let body: FilingsBody = net::get_json(client, url, "filings", retry_override).await?;
    Ok(match body {
        FilingsBody::Bare(nodes) => FilingsPage::from_parts(nodes, None),
        FilingsBody::Envelope(env) => {
            FilingsPage::from_parts(env.filings.unwrap_or_default(), env.total)
        }
    })
}
