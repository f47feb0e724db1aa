pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpFetcher, StubFetcher};
pub use config::toml_config::TomlConfig;
pub use crate::core::{mapper::map_to_planet, service::PlanetService};
pub use domain::model::{NormalizedPlanet, RawPlanet};
pub use domain::ports::{ConfigProvider, Fetcher};
pub use utils::error::{PlanetError, Result};
