pub mod crawler;
pub mod web;

#[cfg(test)]
pub(crate) mod test_server;

pub use crawler::{FetchError, Fetcher};
pub use web::WebFetcher;
