pub mod client;
pub mod error;

pub use client::{parse_match_list, MatchesClient};
pub use error::FetchError;
