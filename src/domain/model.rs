use serde::{Deserialize, Serialize};

/// Untrusted JSON body of a planets resource, as returned by a [`Fetcher`].
///
/// [`Fetcher`]: crate::domain::ports::Fetcher
pub type RawPlanet = serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlanet {
    pub name: String,
    /// Kept exactly as the API sends it ("1", "40", "unknown").
    pub surface_water: String,
    pub appeared_in: usize,
}
