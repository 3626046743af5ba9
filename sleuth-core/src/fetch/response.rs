use std::borrow::Cow;

use chrono::{DateTime, Utc};

use super::Request;
use crate::sniff::detect_content_type;

/// The outcome of fetching a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<'a> {
    request: &'a Request,
    fetched_at: DateTime<Utc>,
    content_type: Option<&'static str>,
    body: Vec<u8>,
}

impl<'a> Response<'a> {
    /// Starts a response for `request`, stamped with the current time.
    pub(crate) fn start(request: &'a Request) -> Self {
        Self {
            request,
            fetched_at: Utc::now(),
            content_type: None,
            body: Vec::new(),
        }
    }

    pub(crate) fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    /// Stores the complete body and sniffs its content type.
    pub(crate) fn complete(&mut self, body: Vec<u8>) {
        self.content_type = Some(detect_content_type(&body));
        self.body = body;
    }

    pub fn request(&self) -> &'a Request {
        self.request
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Sniffed MIME type; `None` unless the body was fully retrieved.
    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The `charset` parameter of the sniffed content type, if any.
    pub fn charset(&self) -> Option<&'static str> {
        self.content_type?
            .split(';')
            .skip(1)
            .find_map(|param| param.trim().strip_prefix("charset="))
    }

    /// Body as text: UTF-8 if valid, otherwise decoded as Latin-1.
    pub fn text(&self) -> Cow<'_, str> {
        match std::str::from_utf8(&self.body) {
            Ok(text) => Cow::Borrowed(text),
            Err(_) => Cow::Owned(self.body.iter().map(|&c| c as char).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_partial() {
        let request = Request::new("example.com");
        let before = Utc::now();
        let response = Response::start(&request);

        assert!(response.fetched_at() >= before);
        assert_eq!(response.request(), &request);
        assert!(response.content_type().is_none());
        assert!(response.is_empty());
    }

    #[test]
    fn test_complete_sniffs() {
        let request = Request::new("example.com");
        let mut response = Response::start(&request);
        response.complete(b"Domain Name: EXAMPLE.COM\r\n".to_vec());

        assert_eq!(response.content_type(), Some("text/plain; charset=utf-8"));
        assert_eq!(response.charset(), Some("utf-8"));
        assert_eq!(response.len(), 26);
    }

    #[test]
    fn test_text_falls_back_to_latin1() {
        let request = Request::new("example.de");
        let mut response = Response::start(&request);
        response.complete(b"Stra\xdfe".to_vec());

        assert_eq!(response.text(), "Straße");
    }

    #[test]
    fn test_charset_absent() {
        let request = Request::new("example.com");
        let mut response = Response::start(&request);
        response.complete(vec![0x1f, 0x8b, 0x08, 0x00]);

        assert_eq!(response.content_type(), Some("application/x-gzip"));
        assert_eq!(response.charset(), None);
    }
}
