//! Query parameters read from the request URL.
//!
//! Every route reads parameters through [`Location`], so a repeated key
//! resolves to its first value everywhere.

use atelier_core::navigation::{Location, LIST_PATH};
use axum::http::Uri;

/// Query parameter naming the project on the detail page.
pub const ID_PARAM: &str = "id";

/// Parsed path and query of a request URI.
pub fn request_location(uri: &Uri) -> Location {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or(LIST_PATH);
    Location::parse(target)
}
