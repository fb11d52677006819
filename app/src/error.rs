use std::fmt;

#[derive(Debug)]
pub enum TourError {
    #[cfg(feature = "ssr")]
    Http(reqwest::Error),
    Config(String),
    EmptyRegistry,
    StopNotFound(usize),
    TranslationUnavailable,
    InvalidResponse(String),
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "ssr")]
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::EmptyRegistry => write!(f, "Stop registry is empty: at least one stop is required"),
            Self::StopNotFound(index) => write!(f, "No stop at index {index}"),
            Self::TranslationUnavailable => {
                write!(f, "Translation service is not configured (TRANSLATE_API_KEY unset)")
            }
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for TourError {}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for TourError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Http(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
