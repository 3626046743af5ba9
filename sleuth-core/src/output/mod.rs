mod human;
mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchFailure;
use crate::fetch::{Response, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" | "pretty" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Whois,
    Http,
}

/// Flattened view of a fetch outcome for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct FetchReport<'a> {
    pub query: &'a str,
    pub transport: Transport,
    pub server: String,
    pub fetched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<&'static str>,
    pub body: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> FetchReport<'a> {
    pub fn from_response(response: &'a Response<'_>) -> Self {
        let request = response.request();
        let (transport, server) = match request.target() {
            Target::Whois(target) => (Transport::Whois, format!("{}:{}", target.host, target.port)),
            Target::Http(target) => (Transport::Http, target.url.to_string()),
        };

        Self {
            query: &request.query,
            transport,
            server,
            fetched_at: response.fetched_at(),
            content_type: response.content_type(),
            body: response.text(),
            error: None,
        }
    }

    pub fn from_failure(failure: &'a FetchFailure<'_>) -> Self {
        Self {
            error: Some(failure.error.to_string()),
            ..Self::from_response(&failure.response)
        }
    }
}

pub trait OutputFormatter {
    fn format_response(&self, response: &Response<'_>) -> String;
    fn format_failure(&self, failure: &FetchFailure<'_>) -> String;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Human => Box::new(HumanFormatter::new()),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
