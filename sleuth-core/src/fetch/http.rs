use reqwest::Client;
use tracing::debug;

use super::{FetchResult, HttpTarget, Request, Response};
use crate::error::{FetchFailure, Result};

pub(super) async fn fetch<'a>(request: &'a Request, target: HttpTarget<'_>) -> FetchResult<'a> {
    let mut response = Response::start(request);

    match get(target.url).await {
        Ok(body) => {
            response.complete(body);
            debug!(
                url = %target.url,
                bytes = response.len(),
                content_type = response.content_type().unwrap_or_default(),
                "HTTP response received"
            );
            Ok(response)
        }
        Err(error) => Err(FetchFailure::new(response, error)),
    }
}

/// Plain GET with reqwest's default redirect policy and no request timeout.
/// The status code is not inspected; error pages are returned as bodies.
async fn get(url: &str) -> Result<Vec<u8>> {
    let http = Client::builder().no_proxy().build()?;

    debug!(url = %url, "Fetching over HTTP");
    let reply = http.get(url).send().await?;
    debug!(status = %reply.status(), "HTTP status");

    let body = reply.bytes().await?;
    Ok(body.to_vec())
}
