// Adapters layer: concrete Fetcher implementations.

pub mod http;
pub mod stub;

pub use http::HttpFetcher;
pub use stub::StubFetcher;
