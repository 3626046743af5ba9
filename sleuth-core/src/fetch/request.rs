use std::time::Duration;

use tracing::instrument;

use super::{http, whois, FetchResult};

pub const WHOIS_PORT: u16 = 43;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A single WHOIS query, sent either over the WHOIS protocol or as an HTTP GET.
///
/// When `url` is set (and non-empty) the request is fetched over HTTP and
/// `host`, `port`, `body` and `timeout` are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// What is being looked up. Informational only; `body` is what gets sent.
    pub query: String,
    pub host: String,
    pub port: u16,
    pub url: Option<String>,
    /// Bytes written verbatim to the WHOIS connection.
    pub body: Vec<u8>,
    /// Bounds the connect, then separately the write and full read.
    /// HTTP fetches are not bounded by it.
    pub timeout: Duration,
}

/// Transport selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Whois(WhoisTarget<'a>),
    Http(HttpTarget<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhoisTarget<'a> {
    pub host: &'a str,
    pub port: u16,
    pub body: &'a [u8],
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTarget<'a> {
    pub url: &'a str,
}

impl Default for Request {
    fn default() -> Self {
        Self::new("")
    }
}

impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            host: String::new(),
            port: WHOIS_PORT,
            url: None,
            body: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn target(&self) -> Target<'_> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => Target::Http(HttpTarget { url }),
            _ => Target::Whois(WhoisTarget {
                host: &self.host,
                port: self.port,
                body: &self.body,
                timeout: self.timeout,
            }),
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self.target(), Target::Http(_))
    }

    /// The server this request talks to: the URL for HTTP, the host otherwise.
    pub fn server(&self) -> &str {
        match self.target() {
            Target::Http(target) => target.url,
            Target::Whois(target) => target.host,
        }
    }

    /// Fetch the response, over HTTP if a URL is set, otherwise over WHOIS.
    ///
    /// Exactly one attempt is made. On failure the returned
    /// [`FetchFailure`](crate::FetchFailure) still carries the response with
    /// its fetch time and any bytes received.
    #[instrument(skip(self), fields(query = %self.query))]
    pub async fn fetch(&self) -> FetchResult<'_> {
        match self.target() {
            Target::Http(target) => http::fetch(self, target).await,
            Target::Whois(target) => whois::fetch(self, target).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let request = Request::new("example.com");
        assert_eq!(request.query, "example.com");
        assert_eq!(request.timeout, Duration::from_secs(10));
        assert_eq!(request.port, 43);
        assert!(request.host.is_empty());
        assert!(request.url.is_none());
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_target_whois_without_url() {
        let request = Request::new("example.com")
            .with_host("whois.verisign-grs.com")
            .with_body("=example.com\r\n");

        match request.target() {
            Target::Whois(target) => {
                assert_eq!(target.host, "whois.verisign-grs.com");
                assert_eq!(target.port, WHOIS_PORT);
                assert_eq!(target.body, b"=example.com\r\n");
                assert_eq!(target.timeout, DEFAULT_TIMEOUT);
            }
            other => panic!("Expected WHOIS target, got {:?}", other),
        }
        assert!(!request.is_http());
        assert_eq!(request.server(), "whois.verisign-grs.com");
    }

    #[test]
    fn test_target_http_with_url() {
        let request = Request::new("example.com")
            .with_host("whois.example")
            .with_url("https://rdap.example/domain/example.com");

        assert_eq!(
            request.target(),
            Target::Http(HttpTarget {
                url: "https://rdap.example/domain/example.com"
            })
        );
        assert_eq!(request.server(), "https://rdap.example/domain/example.com");
    }

    #[test]
    fn test_empty_url_selects_whois() {
        let request = Request::new("example.com").with_host("whois.example").with_url("");
        assert!(matches!(request.target(), Target::Whois(_)));
    }
}
