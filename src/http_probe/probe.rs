use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Request};
use url::Url;

use super::prelude::*;

/// Knobs applied to the shared HTTP client.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Per-request deadline. `None` waits as long as the peer does.
    pub timeout: Option<Duration>,
    pub accept_invalid_certs: bool,
}

/// Build the client every probe of a run shares.
/// Redirects follow reqwest's default policy.
pub fn build_client(options: &ClientOptions) -> reqwest::Result<Client> {
    let mut builder = Client::builder()
        .user_agent(concat!("headprobe/", env!("CARGO_PKG_VERSION")))
        .danger_accept_invalid_certs(options.accept_invalid_certs);

    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

fn build_request(client: &Client, task: &ProbeTask) -> Result<Request, ProbeError> {
    let method = Method::from_bytes(task.method().as_bytes())
        .map_err(|_| ProbeError::InvalidMethod(task.method().to_string()))?;

    let url = Url::parse(task.uri())
        .map_err(|e| ProbeError::InvalidUri(task.uri().to_string(), e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ProbeError::UnsupportedScheme(url.scheme().to_string()));
    }

    client
        .request(method, url)
        .build()
        .map_err(ProbeError::Transport)
}

fn collect_headers(map: &HeaderMap) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    for (name, value) in map {
        // HeaderName is always lowercase; keep the first value of repeated names.
        headers
            .entry(name.as_str().to_string())
            .or_insert_with(|| String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    headers
}

/// Send one bodiless request for `task` and capture its status and headers.
/// Construction and transport errors both come back as a `ProbeFailure`.
pub async fn probe_task(client: &Client, task: ProbeTask) -> Result<ProbeResult, ProbeFailure> {
    let request = match build_request(client, &task) {
        Ok(request) => request,
        Err(error) => return Err(ProbeFailure { task, error }),
    };

    let start = Instant::now();
    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            log::debug!("{task} failed after {:?}", start.elapsed());
            return Err(ProbeFailure {
                task,
                error: ProbeError::Transport(e),
            });
        }
    };

    let http_status = response.status().as_u16();
    let headers = collect_headers(response.headers());
    // The body is never read; dropping the response releases the connection.
    drop(response);

    log::debug!("{task} -> {http_status} in {:?}", start.elapsed());

    Ok(ProbeResult {
        task,
        http_status,
        headers,
    })
}
