//! Server-side implementations behind the Leptos server functions.
//!
//! Kept free of Leptos context so they can be called directly from tests.

use crate::api::TourDto;
use crate::config::MapSettings;
use crate::error::{Result, TourError};
use crate::stops::StopRegistry;
use crate::translator::TranslationClient;
use tracing::info;

/// Shared, read-only tour data provided to every request.
#[derive(Clone, Debug)]
pub struct TourContext {
    pub stops: StopRegistry,
    pub map: MapSettings,
    pub source_language: String,
}

pub fn tour_dto(tour: &TourContext) -> TourDto {
    TourDto {
        stops: tour.stops.to_vec(),
        map: tour.map.clone(),
        source_language: tour.source_language.clone(),
    }
}

pub async fn translate_description_impl(
    tour: &TourContext,
    translator: Option<&TranslationClient>,
    stop_index: usize,
    dest_lang: &str,
) -> Result<String> {
    let stop = tour
        .stops
        .get(stop_index)
        .ok_or(TourError::StopNotFound(stop_index))?;

    let translator = translator.ok_or(TourError::TranslationUnavailable)?;

    let translated = translator.translate(&stop.description, dest_lang).await?;
    info!("Translated stop {} ({}) to {}", stop_index, stop.name, dest_lang);
    Ok(translated)
}
