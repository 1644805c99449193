//! HTTP layer for the SES query API.
//!
//! ```text
//! ┌─────────────────┐
//! │  SesHttpClient  │  - form encoding
//! │                 │  - AWS3-HTTPS headers
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Transport     │  - HTTP transport abstraction
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   reqwest       │  - Actual HTTP implementation
//! └─────────────────┘
//! ```

mod client;
mod request;
mod response;
mod transport;

pub use client::{SesHttpClient, FORM_CONTENT_TYPE};
pub use request::HttpRequest;
pub use response::HttpResponse;
pub use transport::{ReqwestTransport, Transport};
