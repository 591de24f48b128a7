// URL handling utilities
pub mod url;
pub mod slug;

// Parsing utilities
pub mod flag;

// Presentation
pub mod money;

pub use url::{absolute_url, build_query_string, hostname_from_url};
pub use slug::slugify;
pub use flag::parse_flag;
pub use money::{format_money, format_percent};
