#[cfg(feature = "ssr")]
use crate::error::{Result, TourError};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ssr")]
use std::path::PathBuf;

pub const DEFAULT_TRANSLATE_API_URL: &str =
    "https://app.devnagri.com/api/v1/translate-sentence-api";
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ZOOM: u8 = 6;
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

/// Map parameters handed to the browser along with the stops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSettings {
    pub zoom: u8,
    pub tile_url: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub source_language: String,
}

#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub stops_file: Option<PathBuf>,
    pub map: MapSettings,
    pub translation: TranslationSettings,
}

#[cfg(feature = "ssr")]
impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let bind_address =
            dotenvy::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        let stops_file = optional_var("STOPS_FILE").map(PathBuf::from);

        let zoom = match optional_var("MAP_ZOOM") {
            Some(raw) => raw
                .parse::<u8>()
                .ok()
                .filter(|z| (1..=18).contains(z))
                .ok_or_else(|| TourError::Config("Invalid MAP_ZOOM (expected 1-18)".to_string()))?,
            None => DEFAULT_ZOOM,
        };

        let tile_url =
            optional_var("MAP_TILE_URL").unwrap_or_else(|| DEFAULT_TILE_URL.to_string());

        let api_url = optional_var("TRANSLATE_API_URL")
            .unwrap_or_else(|| DEFAULT_TRANSLATE_API_URL.to_string());

        let api_key = optional_var("TRANSLATE_API_KEY");

        let source_language = optional_var("SOURCE_LANGUAGE")
            .unwrap_or_else(|| DEFAULT_SOURCE_LANGUAGE.to_string());

        Ok(Config {
            bind_address,
            stops_file,
            map: MapSettings { zoom, tile_url },
            translation: TranslationSettings {
                api_url,
                api_key,
                source_language,
            },
        })
    }
}

#[cfg(feature = "ssr")]
fn optional_var(key: &str) -> Option<String> {
    dotenvy::var(key).ok().filter(|s| !s.is_empty())
}
