//! Domain records and the structured-text extraction rules.

mod backstory;
mod config;
mod discography;
mod error;
mod member;
mod profile;
pub mod vocabulary;

pub use backstory::{Backstory, WORD_LIMIT};
pub use config::OpenAiConfig;
pub use discography::{Album, parse_discography};
pub use error::{AppError, ProfileParseError};
pub use member::{BandMember, extract_band_members};
pub use profile::BandProfile;
pub use vocabulary::VocabularyPicks;
