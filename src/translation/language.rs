//! Language codes accepted by Google Cloud Translation.

use std::fmt;

use anyhow::Result;

use crate::ui::Style;

/// Common language codes shown by `gootrago languages`.
///
/// Not exhaustive; any well-formed tag is sent to the service.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Sentinel accepted in place of a source language code.
pub const AUTO_DETECT: &str = "auto";

/// Source language of a translation: a concrete code or auto-detection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceLanguage {
    /// Let the service detect the language.
    #[default]
    Auto,
    /// A well-formed language code.
    Code(String),
}

impl SourceLanguage {
    /// Parses `auto` (any case) or a well-formed language code.
    pub fn parse(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case(AUTO_DETECT) {
            return Ok(Self::Auto);
        }
        validate_language(value)?;
        Ok(Self::Code(value.to_string()))
    }

    /// The code to send upstream, `None` for auto-detection.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Auto => None,
            Self::Code(code) => Some(code),
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or(AUTO_DETECT))
    }
}

/// Source and target language of a translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: SourceLanguage,
    pub target: String,
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    println!(
        "{}",
        Style::secondary("Other well-formed codes (e.g., 'haw', 'pt-PT') are passed to Google as is")
    );
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
}

/// Checks that `lang` is a well-formed language tag such as `uk`, `haw` or `pt-PT`.
///
/// The primary subtag is 2 or 3 ASCII letters, followed by any number of
/// `-` separated subtags of 1 to 8 ASCII letters or digits. Case is ignored.
/// Whether the service actually supports the language is left to the service.
///
/// # Errors
///
/// Returns an error if the tag is malformed.
pub fn validate_language(lang: &str) -> Result<()> {
    let mut subtags = lang.split('-');
    let primary_ok = subtags.next().is_some_and(|primary| {
        (2..=3).contains(&primary.len()) && primary.bytes().all(|b| b.is_ascii_alphabetic())
    });
    let rest_ok = subtags.all(|subtag| {
        (1..=8).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
    });

    if primary_ok && rest_ok {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}' (expected a tag like 'uk' or 'pt-PT'; run 'gootrago languages' for common codes)"
        )
    }
}
