//! Address geocoding.
//!
//! `Geocoder` is the seam between bootcamp logic and the external geocoding provider.
//! Production uses `MapQuestGeocoder`; tests substitute a fixed lookup table.

use async_trait::async_trait;
use serde::Deserialize;

use crate::server::{error::AppError, model::geo::GeoLocation};

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a free-form address or postal code.
    ///
    /// # Returns
    /// - `Ok(Some(GeoLocation))` - Best match for the query
    /// - `Ok(None)` - The provider could not resolve the query
    /// - `Err(AppError)` - Provider request failed
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, AppError>;
}

/// Geocoder backed by the MapQuest address endpoint.
pub struct MapQuestGeocoder {
    http_client: reqwest::Client,
    url: String,
    api_key: String,
}

impl MapQuestGeocoder {
    pub fn new(http_client: reqwest::Client, url: String, api_key: String) -> Self {
        Self {
            http_client,
            url,
            api_key,
        }
    }
}

#[async_trait]
impl Geocoder for MapQuestGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, AppError> {
        let response: MapQuestResponse = self
            .http_client
            .get(&self.url)
            .query(&[("key", self.api_key.as_str()), ("location", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let location = response
            .results
            .into_iter()
            .flat_map(|result| result.locations)
            .find(MapQuestLocation::is_resolved)
            .map(MapQuestLocation::into_location);

        if location.is_none() {
            tracing::debug!("Geocoder returned no match for '{}'", query);
        }

        Ok(location)
    }
}

#[derive(Debug, Deserialize)]
struct MapQuestResponse {
    #[serde(default)]
    results: Vec<MapQuestResult>,
}

#[derive(Debug, Deserialize)]
struct MapQuestResult {
    #[serde(default)]
    locations: Vec<MapQuestLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapQuestLocation {
    #[serde(default)]
    street: String,
    /// City.
    #[serde(default)]
    admin_area5: String,
    /// State.
    #[serde(default)]
    admin_area3: String,
    /// Country code.
    #[serde(default)]
    admin_area1: String,
    #[serde(default)]
    postal_code: String,
    /// `COUNTRY` when the query could not be narrowed below the country centroid.
    #[serde(default)]
    geocode_quality: String,
    lat_lng: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl MapQuestLocation {
    fn is_resolved(&self) -> bool {
        self.geocode_quality != "COUNTRY"
    }

    fn into_location(self) -> GeoLocation {
        let non_empty = |s: String| (!s.trim().is_empty()).then_some(s);

        let state_zip = [self.admin_area3.as_str(), self.postal_code.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let formatted_address = [
            self.street.as_str(),
            self.admin_area5.as_str(),
            state_zip.as_str(),
            self.admin_area1.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

        GeoLocation {
            latitude: self.lat_lng.lat,
            longitude: self.lat_lng.lng,
            formatted_address: non_empty(formatted_address),
            street: non_empty(self.street),
            city: non_empty(self.admin_area5),
            state: non_empty(self.admin_area3),
            zipcode: non_empty(self.postal_code),
            country: non_empty(self.admin_area1),
        }
    }
}
