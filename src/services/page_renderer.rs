//! Fan-page rendering via minijinja.

use minijinja::{Environment, context};

use crate::domain::{Album, AppError, Backstory, BandMember, BandProfile};

/// The page template, embedded at build time.
const PAGE_TEMPLATE: &str = include_str!("templates/home.html.j2");

/// Render the fan page for a band.
///
/// Pure function of its inputs: the caller supplies the cosmetic font pick
/// and the footer's calendar year. Section order (backstory, members,
/// discography) and the per-section content order follow the input order.
/// Values are HTML-escaped by the template engine.
pub fn render_page(
    profile: &BandProfile,
    backstory: &Backstory,
    albums: &[Album],
    members: &[BandMember],
    font: &str,
    year: i32,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.add_template("home.html", PAGE_TEMPLATE)?;

    let member_names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

    let html = env.get_template("home.html")?.render(context! {
        band_name => profile.band_name,
        style_name => profile.style_name,
        backstory => backstory.text(),
        albums => albums,
        members => members,
        member_names => member_names,
        font => font,
        year => year,
    })?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> BandProfile {
        BandProfile {
            band_name: "Echo Static".to_string(),
            author_style: "Lester Bangs".to_string(),
            nationality: "British".to_string(),
            genre_one: "Punk".to_string(),
            genre_two: "Funk".to_string(),
            style_name: "Raw".to_string(),
            reference_year: 1978,
        }
    }

    fn render_sample() -> String {
        let backstory = Backstory::from_completion("They formed in a garage.");
        let albums = vec![
            Album {
                title: "First Light".to_string(),
                tracks: vec!["Track A".to_string(), "Track B".to_string()],
            },
            Album { title: "Second Wind".to_string(), tracks: vec!["Track C".to_string()] },
        ];
        let members = vec![
            BandMember::new(r#"Rita "Moth" Calloway"#, "drums"),
            BandMember::new(r#"Joe "Slim" Vance"#, "bass"),
        ];

        render_page(&sample_profile(), &backstory, &albums, &members, "Georgia, serif", 2026)
            .unwrap()
    }

    #[test]
    fn page_has_title_nav_and_sections_in_order() {
        let html = render_sample();
        assert!(html.contains("<title>Echo Static - Raw Sound</title>"));
        for anchor in ["#backstory", "#members", "#discography"] {
            assert!(html.contains(&format!("href=\"{}\"", anchor)));
        }

        let backstory_at = html.find("id=\"backstory\"").unwrap();
        let members_at = html.find("id=\"members\"").unwrap();
        let discography_at = html.find("id=\"discography\"").unwrap();
        assert!(backstory_at < members_at && members_at < discography_at);
    }

    #[test]
    fn page_embeds_backstory_photo_and_footer_year() {
        let html = render_sample();
        assert!(html.contains("They formed in a garage."));
        assert!(html.contains("src=\"band_photo.jpg\""));
        assert!(html.contains("&copy; 2026 Echo Static."));
        assert!(html.contains("font-family: Georgia, serif;"));
    }

    #[test]
    fn members_render_as_bio_sentences_in_input_order() {
        let html = render_sample();
        let rita = html.find("Rita").unwrap();
        let joe = html.find("Joe").unwrap();
        assert!(rita < joe);
        // Quotes in names are escaped by the engine.
        assert!(html.contains("Rita &quot;Moth&quot; Calloway on drums."));
    }

    #[test]
    fn albums_render_with_ordered_track_lists() {
        let html = render_sample();
        assert!(html.contains("<strong>First Light</strong>"));
        assert!(html.contains("<li>Track A</li>"));
        let first = html.find("First Light").unwrap();
        let second = html.find("Second Wind").unwrap();
        assert!(first < second);
        assert!(html.contains("<ol class=\"track-list\">"));
    }

    #[test]
    fn markup_in_model_output_is_escaped() {
        let backstory = Backstory::from_completion("<script>alert(1)</script>");
        let html = render_page(&sample_profile(), &backstory, &[], &[], "Arial, sans-serif", 2026)
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_member_list_still_renders() {
        let backstory = Backstory::from_completion("No names here.");
        let html = render_page(&sample_profile(), &backstory, &[], &[], "Arial, sans-serif", 2026)
            .unwrap();
        assert!(html.contains("Band Members:"));
    }
}
