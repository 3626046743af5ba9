use super::{FetchReport, OutputFormatter};
use crate::error::FetchFailure;
use crate::fetch::Response;

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_response(&self, response: &Response<'_>) -> String {
        self.to_json(&FetchReport::from_response(response))
    }

    fn format_failure(&self, failure: &FetchFailure<'_>) -> String {
        self.to_json(&FetchReport::from_failure(failure))
    }
}
