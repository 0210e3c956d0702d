//! Helpers shared by the fetching side of the crate.
//!
//! - **URL validation**: scheme and private-network checks applied to page
//!   URLs before they are requested

mod url_validator;

pub use url_validator::{validate_url, UrlValidationError};
