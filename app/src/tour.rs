//! Tour state extracted from the Leptos components for testability.
//!
//! `TourState` owns the navigation cursor, the selected language and the
//! translation cache. The components hold it in a signal and only ever call
//! the methods below, so every transition the UI can make is covered here
//! without a browser.

use crate::error::Result;
use crate::navigation::{NavigationCommand, Navigator};
use crate::stops::{Stop, StopRegistry};
use crate::translation_cache::{TranslationCache, TranslationTicket};
use std::fmt::Display;

/// A translation the UI should request from the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationRequest {
    pub ticket: TranslationTicket,
    pub text: String,
}

/// What happened to a translation response when it was handed back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslationOutcome {
    Applied,
    /// The user navigated or changed language while the request was in flight.
    Discarded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TourState {
    navigator: Navigator,
    language: String,
    cache: TranslationCache,
}

impl TourState {
    pub fn new(stop_count: usize, default_language: &str) -> Result<Self> {
        Ok(Self {
            navigator: Navigator::new(stop_count)?,
            language: default_language.to_string(),
            cache: TranslationCache::default(),
        })
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current()
    }

    pub fn stop_count(&self) -> usize {
        self.navigator.len()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn next_stop(&mut self) -> usize {
        self.apply(NavigationCommand::Next)
    }

    pub fn previous_stop(&mut self) -> usize {
        self.apply(NavigationCommand::Previous)
    }

    /// Every navigation drops the cached translation, in flight or not.
    pub fn apply(&mut self, command: NavigationCommand) -> usize {
        self.cache.clear();
        self.navigator.apply(command)
    }

    pub fn select_language(&mut self, code: String) {
        self.language = code;
    }

    pub fn current_stop<'a>(&self, stops: &'a StopRegistry) -> Option<&'a Stop> {
        stops.get(self.current_index())
    }

    pub fn ticket(&self) -> TranslationTicket {
        TranslationTicket::new(self.current_index(), &self.language)
    }

    /// Build the request for the current stop and language, or `None` when
    /// that translation is already cached.
    pub fn begin_translation(&self, stops: &StopRegistry) -> Option<TranslationRequest> {
        if self
            .cache
            .text_for(self.current_index(), &self.language)
            .is_some()
        {
            return None;
        }
        let stop = self.current_stop(stops)?;
        Some(TranslationRequest {
            ticket: self.ticket(),
            text: stop.description.clone(),
        })
    }

    /// Offer a finished translation to the cache. Success is only stored when
    /// the ticket still matches the current stop and language; failures never
    /// touch the cache.
    pub fn complete_translation<E: Display>(
        &mut self,
        ticket: &TranslationTicket,
        result: std::result::Result<String, E>,
    ) -> TranslationOutcome {
        match result {
            Err(e) => TranslationOutcome::Failed(e.to_string()),
            Ok(_) if !ticket.matches(self.current_index(), &self.language) => {
                TranslationOutcome::Discarded
            }
            Ok(text) => {
                self.cache.store(ticket.clone(), text);
                TranslationOutcome::Applied
            }
        }
    }

    /// Text to show for the current stop.
    pub fn display_text(&self, stops: &StopRegistry) -> String {
        self.current_stop(stops)
            .map(|stop| display(self.current_index(), stop, &self.cache, &self.language).to_string())
            .unwrap_or_default()
    }

    /// Escaped markup for the map popup.
    pub fn popup_html(&self, stops: &StopRegistry) -> String {
        escape_markup(&self.display_text(stops))
    }

    /// "Stop k of N" label for the position indicator.
    pub fn position_label(&self) -> String {
        format!("Stop {} of {}", self.current_index() + 1, self.stop_count())
    }
}

/// Validate the stop list received from the server and start at its first stop.
pub fn start_tour(stops: Vec<Stop>, language: &str) -> Result<(StopRegistry, TourState)> {
    let stops = StopRegistry::new(stops)?;
    let state = TourState::new(stops.len(), language)?;
    Ok((stops, state))
}

/// Resolve the text for `stop` at `stop_index`: the cached translation when it
/// belongs to this stop and language, the original description otherwise.
pub fn display<'a>(
    stop_index: usize,
    stop: &'a Stop,
    cache: &'a TranslationCache,
    selected_language: &str,
) -> &'a str {
    cache
        .text_for(stop_index, selected_language)
        .unwrap_or(stop.description.as_str())
}

/// Escape text destined for a raw-markup sink.
pub fn escape_markup(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn state() -> (TourState, StopRegistry) {
        let stops = StopRegistry::builtin();
        (TourState::new(stops.len(), "en").unwrap(), stops)
    }

    #[test]
    fn test_initial_state() {
        let (tour, stops) = state();
        assert_eq!(tour.current_index(), 0);
        assert_eq!(tour.language(), "en");
        assert!(tour.cache().is_empty());
        assert_eq!(tour.display_text(&stops), "Delhi: Capital of India.");
    }

    #[test]
    fn test_empty_tour_rejected() {
        assert!(TourState::new(0, "en").is_err());
        assert!(start_tour(vec![], "en").is_err());
    }

    #[test]
    fn test_start_tour() {
        let (stops, tour) = start_tour(StopRegistry::builtin().to_vec(), "hi").unwrap();
        assert_eq!(tour.stop_count(), stops.len());
        assert_eq!(tour.language(), "hi");
    }

    #[test]
    fn test_begin_translation_uses_current_description() {
        let (mut tour, stops) = state();
        tour.next_stop();
        tour.select_language("hi".to_string());

        let request = tour.begin_translation(&stops).unwrap();
        assert_eq!(request.text, "Mumbai: Financial hub of India.");
        assert_eq!(request.ticket, TranslationTicket::new(1, "hi"));
    }

    #[test]
    fn test_begin_translation_skips_cached_pair() {
        let (mut tour, stops) = state();
        tour.select_language("hi".to_string());
        let request = tour.begin_translation(&stops).unwrap();
        tour.complete_translation::<String>(&request.ticket, Ok("दिल्ली".to_string()));

        assert!(tour.begin_translation(&stops).is_none());

        tour.select_language("bn".to_string());
        assert!(tour.begin_translation(&stops).is_some());
    }

    #[test]
    fn test_failed_translation_leaves_cache() {
        let (mut tour, stops) = state();
        tour.select_language("hi".to_string());
        let ticket = tour.ticket();

        let outcome = tour.complete_translation(&ticket, Err("HTTP error: timeout"));

        assert_eq!(
            outcome,
            TranslationOutcome::Failed("HTTP error: timeout".to_string())
        );
        assert!(tour.cache().is_empty());
        assert_eq!(tour.display_text(&stops), "Delhi: Capital of India.");
    }

    #[test]
    fn test_failure_keeps_existing_translation() {
        let (mut tour, stops) = state();
        tour.select_language("hi".to_string());
        let ticket = tour.ticket();
        tour.complete_translation::<String>(&ticket, Ok("दिल्ली: भारत की राजधानी।".to_string()));

        tour.complete_translation(&ticket, Err("boom"));

        assert_eq!(tour.display_text(&stops), "दिल्ली: भारत की राजधानी।");
    }

    #[test]
    fn test_language_change_discards_in_flight_response() {
        let (mut tour, stops) = state();
        tour.select_language("hi".to_string());
        let ticket = tour.ticket();
        tour.select_language("ta".to_string());

        let outcome = tour.complete_translation::<String>(&ticket, Ok("हिंदी".to_string()));

        assert_eq!(outcome, TranslationOutcome::Discarded);
        assert_eq!(tour.display_text(&stops), "Delhi: Capital of India.");
    }

    #[test]
    fn test_cached_translation_hidden_after_language_change() {
        let (mut tour, stops) = state();
        tour.select_language("hi".to_string());
        let ticket = tour.ticket();
        tour.complete_translation::<String>(&ticket, Ok("हिंदी".to_string()));

        tour.select_language("en".to_string());
        assert_eq!(tour.display_text(&stops), "Delhi: Capital of India.");

        tour.select_language("hi".to_string());
        assert_eq!(tour.display_text(&stops), "हिंदी");
    }

    #[test]
    fn test_popup_html_is_escaped() {
        let (mut tour, stops) = state();
        tour.select_language("hi".to_string());
        let ticket = tour.ticket();
        tour.complete_translation::<String>(
            &ticket,
            Ok("<script>alert('x')</script> & more".to_string()),
        );

        let html = tour.popup_html(&stops);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn test_position_label() {
        let (mut tour, _) = state();
        assert_eq!(tour.position_label(), "Stop 1 of 5");
        tour.previous_stop();
        assert_eq!(tour.position_label(), "Stop 5 of 5");
    }

    #[test]
    fn test_display_resolver_ignores_other_index() {
        let stops = StopRegistry::builtin();
        let mut cache = TranslationCache::default();
        cache.store(TranslationTicket::new(0, "hi"), "दिल्ली".to_string());

        let mumbai = stops.get(1).unwrap();
        assert_eq!(
            display(1, mumbai, &cache, "hi"),
            "Mumbai: Financial hub of India."
        );
        let delhi = stops.get(0).unwrap();
        assert_eq!(display(0, delhi, &cache, "hi"), "दिल्ली");
    }
}
