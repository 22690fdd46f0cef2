//! Google Cloud Translation backends behind a single batch capability.

mod advanced;
mod auth;
mod basic;
mod dispatcher;
mod google;
mod language;

pub use advanced::AdvancedClient;
pub use auth::{ACCESS_TOKEN_ENV, TokenSource};
pub use basic::BasicClient;
pub use dispatcher::{Translate, TranslateError, Translation, Translator, check_batch_len};
pub use google::DEFAULT_ENDPOINT;
pub use language::{
    AUTO_DETECT, LanguagePair, SUPPORTED_LANGUAGES, SourceLanguage, print_languages,
    validate_language,
};
