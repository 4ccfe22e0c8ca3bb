//! The generation pipeline: profile → backstory → members → discography →
//! photo → page → project directory.

use std::path::PathBuf;

use chrono::{Datelike, Local};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::app::AppContext;
use crate::domain::{
    AppError, Backstory, BandProfile, VocabularyPicks, extract_band_members, parse_discography,
    vocabulary,
};
use crate::ports::{CompletionClient, ProjectStore};
use crate::services::{page_renderer, prompt_builder};

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Seed for vocabulary and font randomization; random when absent.
    pub seed: Option<u64>,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub band_name: String,
    pub project_dir: PathBuf,
    pub member_count: usize,
    pub album_count: usize,
}

/// Run the full pipeline. Strictly sequential; the first failure of any
/// mandatory stage aborts the run.
pub fn execute<C, S>(
    ctx: &AppContext<C, S>,
    options: &GenerateOptions,
) -> Result<GenerateResult, AppError>
where
    C: CompletionClient,
    S: ProjectStore,
{
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let picks = VocabularyPicks::draw(&mut rng);
    let profile_text = ctx.client.complete(&prompt_builder::profile_prompt(&picks))?;
    info!("Raw band profile response: {}", profile_text);
    let profile = BandProfile::parse(&profile_text)?;
    info!("Generated band profile for '{}'", profile.band_name);

    let backstory_text = ctx.client.complete(&prompt_builder::backstory_prompt(&profile))?;
    info!("Generated backstory: {}", backstory_text);
    let backstory = Backstory::from_completion(&backstory_text);

    let members = extract_band_members(backstory.text());

    let discography_text =
        ctx.client.complete(&prompt_builder::discography_prompt(&profile, &backstory))?;
    info!("Generated discography response: {}", discography_text);
    let albums = parse_discography(&discography_text)?;
    info!("Parsed {} album(s)", albums.len());

    let photo = ctx.client.generate_image(&prompt_builder::photo_prompt(&profile, &members))?;

    let font = vocabulary::pick_font(&mut rng);
    let year = Local::now().year();
    let html = page_renderer::render_page(&profile, &backstory, &albums, &members, font, year)?;

    let project_dir = ctx.store.create_project_dir(&profile.band_name)?;
    ctx.store.write_photo(&project_dir, &photo)?;
    ctx.store.write_page(&project_dir, &html)?;

    Ok(GenerateResult {
        band_name: profile.band_name,
        project_dir,
        member_count: members.len(),
        album_count: albums.len(),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::ports::MockCompletionClient;
    use crate::services::FilesystemProjectStore;

    use super::*;

    #[test]
    fn pipeline_runs_end_to_end_with_canned_completions() {
        let tmp = TempDir::new().unwrap();
        let ctx = AppContext::new(
            MockCompletionClient::canned(),
            FilesystemProjectStore::new(tmp.path()),
        );

        let result = execute(&ctx, &GenerateOptions { seed: Some(7) }).unwrap();
        assert_eq!(result.band_name, "The Paper Satellites");
        assert_eq!(result.project_dir, tmp.path().join("ThePaperSatellites"));
        assert_eq!(result.member_count, 2);
        assert_eq!(result.album_count, 2);
        assert!(result.project_dir.join("band_photo.jpg").is_file());
        assert!(result.project_dir.join("home.html").is_file());
    }

    #[test]
    fn unparseable_profile_aborts_before_any_output() {
        let tmp = TempDir::new().unwrap();
        let ctx = AppContext::new(
            MockCompletionClient::scripted(["no labels at all"]),
            FilesystemProjectStore::new(tmp.path()),
        );

        let err = execute(&ctx, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::ProfileParse(_)));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn degenerate_discography_aborts_the_run() {
        let tmp = TempDir::new().unwrap();
        let profile = "Band Name: X\nAuthor Style: Y\nNationality: Z\nGenre 1: A\n\
                       Genre 2: B\nStyle Name: C\nReference Year: 1980";
        let ctx = AppContext::new(
            MockCompletionClient::scripted([
                profile,
                "A short backstory with no members.",
                "Good Album\nTrack\n\n   \nOrphan Track",
            ]),
            FilesystemProjectStore::new(tmp.path()),
        );

        let err = execute(&ctx, &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::DiscographyParse(_)));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_members_degrade_to_empty_roster() {
        let tmp = TempDir::new().unwrap();
        let profile = "Band Name: Quiet Ones\nAuthor Style: Y\nNationality: Z\nGenre 1: A\n\
                       Genre 2: B\nStyle Name: C\nReference Year: 1980";
        let ctx = AppContext::new(
            MockCompletionClient::scripted([
                profile,
                "Nobody is named in this backstory.",
                "Album\nOne Track",
            ]),
            FilesystemProjectStore::new(tmp.path()),
        );

        let result = execute(&ctx, &GenerateOptions::default()).unwrap();
        assert_eq!(result.member_count, 0);
        assert!(result.project_dir.join("home.html").is_file());
    }
}
