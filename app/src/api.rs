use crate::config::MapSettings;
use crate::stops::Stop;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use std::sync::Arc;

#[cfg(feature = "ssr")]
use crate::{api_impl, api_impl::TourContext, translator::TranslationClient};

/// Get the tour data (stops and map settings) from Leptos context
#[cfg(feature = "ssr")]
pub fn get_tour_from_context() -> Result<TourContext, ServerFnError> {
    use_context::<TourContext>()
        .ok_or_else(|| ServerFnError::new("Tour context is not available"))
}

/// Get the `TranslationClient` from Leptos context, if one is configured
#[cfg(feature = "ssr")]
pub fn get_translator_from_context() -> Option<Arc<TranslationClient>> {
    use_context::<Arc<TranslationClient>>()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TourDto {
    pub stops: Vec<Stop>,
    pub map: MapSettings,
    pub source_language: String,
}

#[server(endpoint = "get_tour")]
pub async fn get_tour() -> Result<TourDto, ServerFnError> {
    let tour = get_tour_from_context()?;
    Ok(api_impl::tour_dto(&tour))
}

/// Translate the description of the stop at `stop_index` into `dest_lang`.
///
/// The description is looked up on the server, so the browser never handles
/// the API credential and cannot submit arbitrary text.
#[server(endpoint = "translate_description")]
pub async fn translate_description(
    stop_index: usize,
    dest_lang: String,
) -> Result<String, ServerFnError> {
    let tour = get_tour_from_context()?;
    let translator = get_translator_from_context();
    api_impl::translate_description_impl(&tour, translator.as_deref(), stop_index, &dest_lang)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
