mod http;
mod request;
mod response;
mod whois;

pub use request::{HttpTarget, Request, Target, WhoisTarget, DEFAULT_TIMEOUT, WHOIS_PORT};
pub use response::Response;

/// Result of [`Request::fetch`].
pub type FetchResult<'a> = std::result::Result<Response<'a>, crate::error::FetchFailure<'a>>;
