//! Fixed vocabulary lists for prompt randomization, and the per-run picks
//! drawn from them.
//!
//! All randomness flows through a caller-supplied RNG so runs are
//! reproducible under `--seed`.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Music-critic personas the profile prompt can suggest.
pub const AUTHOR_STYLES: [&str; 20] = [
    "Lester Bangs",
    "Greil Marcus",
    "Robert Christgau",
    "Ellen Willis",
    "Jon Pareles",
    "Ben Ratliff",
    "Paul Morley",
    "David Fricke",
    "Ann Powers",
    "Hunter S. Thompson",
    "Nick Kent",
    "Neil Strauss",
    "Alex Ross",
    "Chuck Klosterman",
    "Simon Reynolds",
    "David Hepworth",
    "Barney Hoskyns",
    "Cameron Crowe",
    "Steve Huey",
    "Jim DeRogatis",
];

pub const GENRES: [&str; 47] = [
    "Blues",
    "Jazz",
    "Rock",
    "Folk",
    "Hip Hop",
    "Classical",
    "Electronic",
    "Pop",
    "Country",
    "Reggae",
    "Punk",
    "Metal",
    "Soul",
    "Funk",
    "R&B",
    "Disco",
    "Gospel",
    "Latin",
    "World Music",
    "Ska",
    "Indie",
    "Alternative",
    "Grunge",
    "Techno",
    "House",
    "Trance",
    "Ambient",
    "Dance",
    "Dubstep",
    "Bluegrass",
    "Opera",
    "Swing",
    "Bossa Nova",
    "Afrobeat",
    "K-Pop",
    "J-Pop",
    "Flamenco",
    "Salsa",
    "Merengue",
    "Tango",
    "Zydeco",
    "Celtic",
    "New Age",
    "Industrial",
    "Gothic",
    "Baroque",
    "Choral",
];

pub const STYLE_DESCRIPTORS: [&str; 20] = [
    "Edgy",
    "Political",
    "Party-Band",
    "Experimental",
    "Mellow",
    "Psychedelic",
    "Minimalist",
    "Aggressive",
    "Virtuosic",
    "Melancholic",
    "Uplifting",
    "Retro",
    "Avant-Garde",
    "Theatrical",
    "Romantic",
    "Rebellious",
    "Acoustic",
    "Electronic",
    "Fusion",
    "Roots",
];

/// Font families the renderer picks from; purely cosmetic.
pub const FONTS: [&str; 9] = [
    "Arial, sans-serif",
    "Georgia, serif",
    "Tahoma, sans-serif",
    "Verdana, sans-serif",
    "Trebuchet MS, sans-serif",
    "Courier New, monospace",
    "Lucida Sans, sans-serif",
    "Garamond, serif",
    "Helvetica, sans-serif",
];

/// Vocabulary choices drawn once per run and fed to the profile prompt.
#[derive(Debug, Clone)]
pub struct VocabularyPicks {
    pub author_style: &'static str,
    pub genre_one: &'static str,
    pub genre_two: &'static str,
    pub style_descriptor: &'static str,
}

impl VocabularyPicks {
    /// Draw a fresh set of picks. The two genres are always distinct.
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let author_style = choose(&AUTHOR_STYLES, rng);
        let style_descriptor = choose(&STYLE_DESCRIPTORS, rng);
        let genre_one = choose(&GENRES, rng);
        let mut genre_two = choose(&GENRES, rng);
        while genre_two == genre_one {
            genre_two = choose(&GENRES, rng);
        }

        Self { author_style, genre_one, genre_two, style_descriptor }
    }
}

/// Pick one font family for a render.
pub fn pick_font<R: Rng>(rng: &mut R) -> &'static str {
    choose(&FONTS, rng)
}

fn choose<R: Rng>(options: &[&'static str], rng: &mut R) -> &'static str {
    options.choose(rng).copied().unwrap_or(options[0])
}
