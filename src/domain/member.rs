//! Best-effort band-member extraction from the backstory text.

use regex::Regex;
use serde::Serialize;
use tracing::{error, info};

/// A band member mentioned in the backstory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandMember {
    /// Full name in `Firstname "Nickname" Lastname` form.
    pub name: String,
    /// Instrument phrase captured after the name.
    pub instruments: String,
    /// One-sentence bio rendered for the page.
    pub bio: String,
}

impl BandMember {
    pub fn new(name: impl Into<String>, instruments: impl Into<String>) -> Self {
        let name = name.into();
        let instruments = instruments.into();
        let bio = format!("{} on {}", name, instruments);
        Self { name, instruments, bio }
    }
}

/// Pattern: capitalized first name, quoted nickname, capitalized last name,
/// then (optionally via "with"/"on") a short phrase ending in an instrument
/// noun. Instrument vocabulary is matched lowercase, exactly.
const MEMBER_PATTERN: &str = r#"([A-Z][a-z]+\s"[^"]+"\s[A-Z][a-z]+)\s(?:with\s)?(?:on\s)?(\b(?:\w+\s?)+?(?:guitar|drums|vocals|bass|keys|piano|saxophone|trumpet|violin|flute|harmonica|synthesizer|accordion|banjo|mandolin|cello|percussion|congas|clarinet)\b)"#;

/// Extract band members from the backstory, in order of first appearance.
///
/// Extraction is best-effort: no match yields an empty list, and an internal
/// matching failure is logged and swallowed rather than aborting the run.
///
/// When the instrument noun directly follows "on"/"with" the lazy capture
/// swallows the connective (the optional preposition group backtracks to
/// empty); it is stripped before storing so `instruments` holds the bare
/// phrase and bios never read "on on drums".
pub fn extract_band_members(backstory: &str) -> Vec<BandMember> {
    let re = match Regex::new(MEMBER_PATTERN) {
        Ok(re) => re,
        Err(err) => {
            error!("Band member pattern failed to compile: {}", err);
            return Vec::new();
        }
    };

    let members: Vec<BandMember> = re
        .captures_iter(backstory)
        .map(|caps| BandMember::new(caps[1].trim(), strip_preposition(caps[2].trim())))
        .collect();

    info!("Extracted {} band member(s) from backstory", members.len());
    members
}

fn strip_preposition(instruments: &str) -> &str {
    instruments
        .strip_prefix("on ")
        .or_else(|| instruments.strip_prefix("with "))
        .unwrap_or(instruments)
}
