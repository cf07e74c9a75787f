//! Domain entities.

mod url_mapping;

pub use url_mapping::UrlMapping;
