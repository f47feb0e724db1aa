use crate::core::mapper::map_to_planet;
use crate::domain::model::NormalizedPlanet;
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;

pub struct PlanetService<F: Fetcher> {
    fetcher: F,
}

impl<F: Fetcher> PlanetService<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches `url` once and maps the body. Errors from either step are
    /// returned unchanged.
    pub async fn get_planet(&self, url: &str) -> Result<NormalizedPlanet> {
        tracing::debug!("Fetching planet from: {}", url);
        let raw = self.fetcher.fetch(url).await?;

        let planet = map_to_planet(&raw)?;
        tracing::info!(
            "🪐 {} (surface water: {}, films: {})",
            planet.name,
            planet.surface_water,
            planet.appeared_in
        );

        Ok(planet)
    }
}
