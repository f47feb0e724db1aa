pub mod mapper;
pub mod service;

pub use crate::domain::model::{NormalizedPlanet, RawPlanet};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
