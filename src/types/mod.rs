//! Domain types for the SES query API.
//!
//! - [`email`]: message content, recipients and raw MIME messages
//! - [`identity`]: identity kinds and verification attributes
//! - [`requests`]: request aggregates for the send operations
//! - [`responses`]: typed results of every operation

pub mod email;
pub mod identity;
pub mod requests;
pub mod responses;

pub use email::*;
pub use identity::*;
pub use requests::*;
pub use responses::*;
