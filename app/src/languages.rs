#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// Languages offered in the selector. Codes outside this list are still
/// forwarded to the translation API unchanged.
pub static LANGUAGES: &[LanguageOption] = &[
    LanguageOption { code: "en", label: "English" },
    LanguageOption { code: "hi", label: "Hindi" },
    LanguageOption { code: "bn", label: "Bengali" },
    LanguageOption { code: "ta", label: "Tamil" },
    LanguageOption { code: "te", label: "Telugu" },
    LanguageOption { code: "mr", label: "Marathi" },
    LanguageOption { code: "gu", label: "Gujarati" },
    LanguageOption { code: "kn", label: "Kannada" },
    LanguageOption { code: "ml", label: "Malayalam" },
    LanguageOption { code: "pa", label: "Punjabi" },
];

pub fn label_for(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code == code)
        .map(|lang| lang.label)
}
