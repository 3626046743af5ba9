use super::{FetchReport, OutputFormatter, Transport};
use crate::colors::StyleExt;
use crate::error::FetchFailure;
use crate::fetch::Response;

pub struct HumanFormatter {
    use_colors: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn field(&self, name: &str, value: &str) -> String {
        if self.use_colors {
            format!("  {}: {}", name.label(), value.value())
        } else {
            format!("  {}: {}", name, value)
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            format!("\n{}\n{}", text.heading(), "─".repeat(text.len()).muted())
        } else {
            format!("\n{}\n{}", text, "-".repeat(text.len()))
        }
    }

    fn error(&self, text: &str) -> String {
        if self.use_colors {
            text.failure().to_string()
        } else {
            text.to_string()
        }
    }

    fn summary(&self, report: &FetchReport<'_>) -> Vec<String> {
        let title = match report.transport {
            Transport::Whois => format!("WHOIS: {}", report.query),
            Transport::Http => format!("HTTP: {}", report.query),
        };

        let mut output = vec![self.header(&title)];
        output.push(self.field("Server", &report.server));
        output.push(self.field(
            "Fetched",
            &report.fetched_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ));
        if let Some(content_type) = report.content_type {
            output.push(self.field("Type", content_type));
        }
        output
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_response(&self, response: &Response<'_>) -> String {
        let report = FetchReport::from_response(response);
        let mut output = self.summary(&report);
        output.push(self.field("Bytes", &response.len().to_string()));
        output.push(String::new());
        output.push(report.body.trim_end().to_string());
        output.join("\n")
    }

    fn format_failure(&self, failure: &FetchFailure<'_>) -> String {
        let report = FetchReport::from_failure(failure);
        let mut output = self.summary(&report);
        output.push(format!("  {} {}", self.error("Error:"), failure.error));

        if !failure.response.is_empty() {
            output.push(self.field("Partial bytes", &failure.response.len().to_string()));
            output.push(String::new());
            output.push(report.body.trim_end().to_string());
        }
        output.join("\n")
    }
}
