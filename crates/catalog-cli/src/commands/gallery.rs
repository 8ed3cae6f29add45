use super::prompts::prompt_select;
use super::ui::{is_interactive, Spinner};
use super::{details, Session, Settings};
use crate::output::Output;
use crate::render;
use catalog_core::{GalleryController, LoadState};
use catalog_models::{GenreId, MediaFilter, MediaItem, SortKey, TimeWindow};
use color_eyre::Result;

pub struct GalleryArgs {
    pub media: MediaFilter,
    pub genre: Option<GenreId>,
    pub sort: Option<SortKey>,
    pub window: Option<TimeWindow>,
    pub browse: bool,
}

pub async fn run_gallery(settings: &Settings, args: GalleryArgs, output: &Output) -> Result<()> {
    let session = settings.connect()?;

    let mut gallery = GalleryController::with_config(session.source.clone(), &settings.config.browse);
    gallery.set_media(args.media);
    gallery.set_genre(args.genre);
    if let Some(sort) = args.sort {
        gallery.set_sort(sort);
    }
    if let Some(window) = args.window {
        gallery.set_window(window);
    }

    show(&mut gallery, &session, args.browse, output).await
}

pub(crate) async fn show(gallery: &mut GalleryController, session: &Session, browse: bool, output: &Output) -> Result<()> {
    if gallery.filters().genre().is_some() {
        // Genre names are only needed for the heading; the gallery works without them.
        if gallery.load_genres().await.is_ok() && !gallery.filters().genre_is_offered() {
            output.warn(format!(
                "Genre {} is not offered for {}",
                gallery.filters().genre().unwrap_or_default(),
                gallery.filters().media()
            ));
        }
    }

    let spinner = Spinner::start("Loading gallery...");
    gallery.refresh().await;
    spinner.finish();

    let heading = heading(gallery);
    match gallery.state() {
        LoadState::Loaded(items) => render_items(&heading, items, session, output),
        LoadState::Empty => {
            output.warn("No items found for the selected filters.");
            return Ok(());
        }
        LoadState::Failed(message) => {
            output.error(message);
            return Ok(());
        }
        LoadState::Idle | LoadState::Loading => return Ok(()),
    }

    if browse && is_interactive() && output.is_human() {
        pick_and_browse(gallery.items(), session, output).await?;
    }
    Ok(())
}

fn heading(gallery: &GalleryController) -> String {
    let mut heading = format!("{} · {}", gallery.title(), gallery.sort().label());
    if let Some(name) = gallery.filters().genre_name() {
        heading = format!("{} · {}", heading, name);
    }
    heading
}

pub(crate) fn render_items(heading: &str, items: &[MediaItem], session: &Session, output: &Output) {
    if output.is_human() {
        output.block(render::items_table(heading, items));
    } else {
        output.json(&render::items_json(heading, items, &session.client));
    }
}

/// Let the user open items from `items` until they cancel.
pub(crate) async fn pick_and_browse(items: &[MediaItem], session: &Session, output: &Output) -> Result<()> {
    if items.is_empty() {
        output.warn("Nothing to open on this page.");
        return Ok(());
    }

    let choices: Vec<String> = items.iter().map(render::item_choice).collect();
    let mut last = 0;

    while let Some(index) = prompt_select("Open details (Esc to quit)", &choices, last)? {
        last = index;
        let Some(context) = catalog_core::NavigationContext::new(items.to_vec(), index) else {
            break;
        };
        details::browse(session, context, output).await?;
    }
    Ok(())
}
