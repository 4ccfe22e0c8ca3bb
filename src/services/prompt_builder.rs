//! Prompt construction for each generation stage.
//!
//! Pure functions: randomized vocabulary arrives as an argument and prior
//! records feed later prompts. The profile prompt pins the label-delimited
//! format the extractor depends on.

use crate::domain::{Backstory, BandMember, BandProfile, VocabularyPicks};

/// Prompt for the band-profile completion.
///
/// Requests one `Label: value` line per field so `BandProfile::parse` can
/// extract deterministically.
pub fn profile_prompt(picks: &VocabularyPicks) -> String {
    format!(
        "Generate a creative band profile including the following details: \
         a unique band name, an author style inspired by a music critic such as {author}, \
         a nationality, two distinct music genres such as {genre_one} and {genre_two}, \
         a style descriptor such as {descriptor}, and a reference year between 1955 and 2020. \
         The band profile should be formatted in the following format:\n\n\
         Band Name: [Band Name]\n\
         Author Style: [Author Style]\n\
         Nationality: [Nationality]\n\
         Genre 1: [Genre 1]\n\
         Genre 2: [Genre 2]\n\
         Style Name: [Style Name]\n\
         Reference Year: [Reference Year]",
        author = picks.author_style,
        genre_one = picks.genre_one,
        genre_two = picks.genre_two,
        descriptor = picks.style_descriptor,
    )
}

/// Prompt for the backstory completion.
pub fn backstory_prompt(profile: &BandProfile) -> String {
    format!(
        "Write a fan page backstory for a band called '{name}' formed in {year} in {nationality}. \
         The band has a {style} style and blends {genre_one} and {genre_two} genres of music. \
         Include detailed descriptions of each band member and their instruments, \
         naming each member as Firstname \"Nickname\" Lastname. \
         The completed backstory should be written in the style of {author}. \
         Limit the backstory to 250 words.",
        name = profile.band_name,
        year = profile.reference_year,
        nationality = profile.nationality,
        style = profile.style_name,
        genre_one = profile.genre_one,
        genre_two = profile.genre_two,
        author = profile.author_style,
    )
}

/// Prompt for the discography completion.
///
/// Asks for album blocks separated by blank lines, matching the extractor's
/// block format.
pub fn discography_prompt(profile: &BandProfile, backstory: &Backstory) -> String {
    format!(
        "Based on the following backstory and band profile, generate three unique and creative \
         album titles for the band '{name}'. Each album should have a list of 10 to 15 tracks \
         that fit the band's style, genres ({genre_one} and {genre_two}), and era ({year}). \
         The track names should be imaginative and reflect the band's evolution and changing \
         themes over time. Format each album as its title on one line followed by one track \
         per line, with a blank line between albums. \
         Backstory: {backstory} \
         Ensure each album title is distinct, and the track names are varied and expressive, \
         capturing different moods and stories.",
        name = profile.band_name,
        genre_one = profile.genre_one,
        genre_two = profile.genre_two,
        year = profile.reference_year,
        backstory = backstory.text(),
    )
}

/// Prompt for the promotional band photo.
pub fn photo_prompt(profile: &BandProfile, members: &[BandMember]) -> String {
    let roster: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    format!(
        "A promotional photo of the band '{name}' from {year}: {roster}. \
         The image should be a traditional band promotional photo from a typical press kit \
         of {year}, depicting them together, reflecting their {style} vibe & style of {year}, \
         with elements of {genre_one} and {genre_two} attire and atmosphere.",
        name = profile.band_name,
        year = profile.reference_year,
        roster = roster.join(", "),
        style = profile.style_name,
        genre_one = profile.genre_one,
        genre_two = profile.genre_two,
    )
}
