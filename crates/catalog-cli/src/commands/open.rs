use super::{details, gallery, search, Settings};
use crate::output::Output;
use catalog_core::{GalleryController, Route, SearchController};
use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Resolve an app route to its view and show it.
pub async fn run_open(settings: &Settings, route: &str, browse: bool, output: &Output) -> Result<()> {
    let route: Route = route.parse().map_err(|e| eyre!("{}", e))?;
    tracing::debug!(route = %route, "Opening route");

    match route {
        Route::Gallery => {
            let session = settings.connect()?;
            let mut controller = GalleryController::with_config(session.source.clone(), &settings.config.browse);
            gallery::show(&mut controller, &session, browse, output).await
        }
        Route::Search(params) => {
            let session = settings.connect()?;
            let mut controller = SearchController::new(session.source.clone());
            controller.set_query(&params.query);
            controller.set_media(params.media);
            if !controller.set_page(params.page) {
                output.warn(format!("Page {} is out of range; showing page {}.", params.page, controller.page()));
            }
            controller.set_sort(params.sort);
            search::show(&mut controller, &session, browse, output).await
        }
        Route::Details(key) => details::run_details(settings, key.media_type, key.id, output).await,
    }
}
