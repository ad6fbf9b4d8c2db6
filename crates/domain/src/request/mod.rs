//! HTTP request domain types

mod header;
mod method;
mod spec;

pub use header::{HeaderPolicy, JSON_CONTENT_TYPE};
pub use method::HttpMethod;
pub use spec::RequestSpec;
