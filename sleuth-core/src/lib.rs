//! Fetch domain and IP registration data over WHOIS (TCP port 43) or from an
//! HTTP referral endpoint.
//!
//! ```no_run
//! # async fn run() -> sleuth_core::Result<()> {
//! use sleuth_core::{servers, Request};
//!
//! let mut request = Request::new("example.com");
//! servers::resolve(&mut request)?;
//!
//! match request.fetch().await {
//!     Ok(response) => println!("{}", response.text()),
//!     Err(failure) => eprintln!("fetch started at {} failed: {}", failure.response.fetched_at(), failure),
//! }
//! # Ok(())
//! # }
//! ```

pub mod colors;
pub mod error;
pub mod fetch;
pub mod output;
pub mod servers;
pub mod sniff;

pub use error::{FetchFailure, Result, SleuthError};

pub use fetch::{FetchResult, HttpTarget, Request, Response, Target, WhoisTarget};
pub use output::{OutputFormat, OutputFormatter};
pub use sniff::detect_content_type;
