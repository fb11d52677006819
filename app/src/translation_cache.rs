//! Cache holding at most one translated description.
//!
//! A translation is keyed by a [`TranslationTicket`]: the stop index and
//! language code current when the request was issued. Responses are only
//! *proposed* to the cache; the tour state accepts them when the ticket still
//! matches what the user is looking at.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationTicket {
    stop_index: usize,
    language: String,
}

impl TranslationTicket {
    pub fn new(stop_index: usize, language: &str) -> Self {
        Self {
            stop_index,
            language: language.to_string(),
        }
    }

    pub fn stop_index(&self) -> usize {
        self.stop_index
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn matches(&self, stop_index: usize, language: &str) -> bool {
        self.stop_index == stop_index && self.language == language
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CachedTranslation {
    ticket: TranslationTicket,
    text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationCache {
    entry: Option<CachedTranslation>,
}

impl TranslationCache {
    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn store(&mut self, ticket: TranslationTicket, text: String) {
        self.entry = Some(CachedTranslation { ticket, text });
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Cached text, only if it was produced for this stop and language.
    pub fn text_for(&self, stop_index: usize, language: &str) -> Option<&str> {
        self.entry
            .as_ref()
            .filter(|entry| entry.ticket.matches(stop_index, language))
            .map(|entry| entry.text.as_str())
    }
}
