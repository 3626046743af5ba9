use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{timeout, timeout_at, Instant};
use tracing::{debug, warn};

use super::{FetchResult, Request, Response, WhoisTarget};
use crate::error::{FetchFailure, Result, SleuthError};

pub(super) async fn fetch<'a>(request: &'a Request, target: WhoisTarget<'_>) -> FetchResult<'a> {
    let mut response = Response::start(request);
    let mut body = Vec::new();

    match query_server(target, &mut body).await {
        Ok(()) => {
            response.complete(body);
            debug!(
                host = %target.host,
                bytes = response.len(),
                content_type = response.content_type().unwrap_or_default(),
                "WHOIS response received"
            );
            Ok(response)
        }
        Err(error) => {
            response.set_body(body);
            Err(FetchFailure::new(response, error))
        }
    }
}

/// Connects, writes the query and reads until the server closes.
///
/// The connect is bounded by `target.timeout`. Once connected a fresh deadline
/// of `target.timeout` covers the write and the whole read together. Bytes
/// read before a failure are left in `body`.
///
/// A zero timeout leaves the connect unbounded and expires the exchange
/// deadline immediately, so nothing is written.
async fn query_server(target: WhoisTarget<'_>, body: &mut Vec<u8>) -> Result<()> {
    if target.host.is_empty() {
        return Err(SleuthError::MissingHost);
    }

    debug!(host = %target.host, port = target.port, "Connecting to WHOIS server");

    let connect = TcpStream::connect((target.host, target.port));
    let connected = if target.timeout.is_zero() {
        connect.await
    } else {
        timeout(target.timeout, connect).await.map_err(|_| {
            warn!(host = %target.host, "WHOIS connect timed out");
            SleuthError::Timeout(format!("Connection to {} timed out", target.host))
        })?
    };
    let mut stream = connected.map_err(|source| SleuthError::ConnectionFailed {
        host: target.host.to_string(),
        source,
    })?;

    let exchange_timed_out = || {
        warn!(host = %target.host, "WHOIS response timed out");
        SleuthError::Timeout(format!("No complete response from {}", target.host))
    };

    if target.timeout.is_zero() {
        return Err(exchange_timed_out());
    }

    let exchange = async {
        stream.write_all(target.body).await?;
        stream.read_to_end(body).await?;
        Ok::<_, std::io::Error>(())
    };

    let result = match Instant::now().checked_add(target.timeout) {
        Some(deadline) => timeout_at(deadline, exchange)
            .await
            .map_err(|_| exchange_timed_out())?,
        None => exchange.await,
    };

    result.map_err(SleuthError::from)
}
