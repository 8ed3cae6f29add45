use super::prompts::prompt_select;
use super::ui::{is_interactive, Spinner};
use super::{Session, Settings};
use crate::output::Output;
use crate::render;
use catalog_core::{DetailController, LoadState, NavigationContext};
use catalog_models::{MediaKey, MediaType};
use color_eyre::Result;

pub async fn run_details(settings: &Settings, media_type: MediaType, id: u64, output: &Output) -> Result<()> {
    let session = settings.connect()?;
    let controller = DetailController::new(session.source.clone(), MediaKey { media_type, id }, None);
    show(controller, &session, false, output).await
}

/// Open the detail view on the context's current item; with `browse`, offer
/// prev/next through the rest of the list.
pub async fn browse(session: &Session, context: NavigationContext, output: &Output) -> Result<()> {
    let controller = DetailController::from_context(session.source.clone(), context);
    show(controller, session, true, output).await
}

async fn show(mut controller: DetailController, session: &Session, browse: bool, output: &Output) -> Result<()> {
    let spinner = Spinner::start("Loading details...");
    controller.load().await;
    spinner.finish();
    render_state(&controller, session, output);

    if !browse || !is_interactive() || !output.is_human() {
        return Ok(());
    }

    loop {
        let mut actions = Vec::new();
        if controller.has_next() {
            actions.push(("Next", Step::Next));
        }
        if controller.has_prev() {
            actions.push(("Previous", Step::Prev));
        }
        actions.push(("Back", Step::Back));

        let labels: Vec<String> = actions.iter().map(|(label, _)| label.to_string()).collect();
        let step = match prompt_select(&controller.position_label(), &labels, 0)? {
            Some(index) => actions[index].1,
            None => Step::Back,
        };

        let spinner = Spinner::start("Loading details...");
        let moved = match step {
            Step::Next => controller.next().await,
            Step::Prev => controller.prev().await,
            Step::Back => {
                spinner.finish();
                return Ok(());
            }
        };
        spinner.finish();

        if moved {
            render_state(&controller, session, output);
        }
    }
}

#[derive(Clone, Copy)]
enum Step {
    Next,
    Prev,
    Back,
}

fn render_state(controller: &DetailController, session: &Session, output: &Output) {
    let position = controller.position_label();
    match controller.state() {
        LoadState::Loaded(details) => {
            if output.is_human() {
                output.block(render::details_table(details, &position, &session.client));
            } else {
                output.json(&render::details_json(details, &position, &session.client));
            }
        }
        LoadState::Failed(message) => output.error(message),
        LoadState::Empty => output.warn("No details found."),
        LoadState::Idle | LoadState::Loading => {}
    }
}
