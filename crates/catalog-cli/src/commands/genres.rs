use super::ui::Spinner;
use super::Settings;
use crate::output::Output;
use crate::render;
use catalog_core::FilterState;
use catalog_models::MediaFilter;
use color_eyre::Result;
use serde_json::json;

pub async fn run_genres(settings: &Settings, media: MediaFilter, output: &Output) -> Result<()> {
    let session = settings.connect()?;

    let mut filters = FilterState::new();
    filters.set_media(media);

    let spinner = Spinner::start("Loading genres...");
    let loaded = filters.load(session.source.as_ref()).await;
    spinner.finish();

    if let Err(e) = loaded {
        output.error(format!("Failed to load genres: {}", e));
        return Ok(());
    }

    let genres = filters.available_genres();
    let title = match media {
        MediaFilter::Movie => "Movie Genres",
        MediaFilter::Tv => "TV Genres",
        MediaFilter::All => "All Genres",
    };

    if output.is_human() {
        output.block(render::genres_table(title, &genres));
    } else {
        output.json(&json!({ "media": media, "genres": genres }));
    }
    Ok(())
}
