use super::gallery::{pick_and_browse, render_items};
use super::prompts::prompt_select;
use super::ui::{is_interactive, Spinner};
use super::{Session, Settings};
use crate::output::Output;
use catalog_core::{LoadState, SearchController};
use catalog_models::{MediaFilter, SortKey};
use color_eyre::Result;

pub struct SearchArgs {
    pub query: String,
    pub media: MediaFilter,
    pub page: u32,
    pub sort: Option<SortKey>,
    pub browse: bool,
}

pub async fn run_search(settings: &Settings, args: SearchArgs, output: &Output) -> Result<()> {
    let session = settings.connect()?;

    let mut search = SearchController::new(session.source.clone());
    search.set_query(&args.query);
    search.set_media(args.media);
    if !search.set_page(args.page) {
        output.warn(format!("Page {} is out of range; showing page {}.", args.page, search.page()));
    }
    search.set_sort(args.sort);

    show(&mut search, &session, args.browse, output).await
}

pub(crate) async fn show(search: &mut SearchController, session: &Session, browse: bool, output: &Output) -> Result<()> {
    if search.query().is_empty() {
        output.warn("Enter a search term.");
        return Ok(());
    }

    fetch(search).await;
    if !render(search, session, output) {
        return Ok(());
    }

    if !browse || !is_interactive() || !output.is_human() {
        return Ok(());
    }

    loop {
        let mut actions = Vec::new();
        if !search.results().is_empty() {
            actions.push(("Open a result", Action::Open));
        }
        if search.has_next_page() {
            actions.push(("Next page", Action::NextPage));
        }
        if search.has_prev_page() {
            actions.push(("Previous page", Action::PrevPage));
        }
        actions.push(("Change sort", Action::Sort));
        actions.push(("Quit", Action::Quit));

        let labels: Vec<String> = actions.iter().map(|(label, _)| label.to_string()).collect();
        let prompt = format!("Page {} of {}", search.page(), search.total_pages());
        let action = match prompt_select(&prompt, &labels, 0)? {
            Some(index) => actions[index].1,
            None => Action::Quit,
        };

        match action {
            Action::Open => pick_and_browse(search.results(), session, output).await?,
            Action::NextPage => {
                search.next_page();
                fetch(search).await;
                render(search, session, output);
            }
            Action::PrevPage => {
                search.prev_page();
                fetch(search).await;
                render(search, session, output);
            }
            Action::Sort => {
                let mut labels = vec!["Relevance".to_string()];
                labels.extend(SortKey::ALL.iter().map(|k| k.label().to_string()));
                let current = search
                    .sort()
                    .and_then(|s| SortKey::ALL.iter().position(|k| *k == s))
                    .map_or(0, |i| i + 1);
                if let Some(choice) = prompt_select("Sort by", &labels, current)? {
                    search.set_sort(choice.checked_sub(1).map(|i| SortKey::ALL[i]));
                    render(search, session, output);
                }
            }
            Action::Quit => return Ok(()),
        }
    }
}

#[derive(Clone, Copy)]
enum Action {
    Open,
    NextPage,
    PrevPage,
    Sort,
    Quit,
}

async fn fetch(search: &mut SearchController) {
    let spinner = Spinner::start(format!("Searching for \"{}\"...", search.query()));
    search.run().await;
    spinner.finish();
}

/// Print the current state. Returns whether there are results to act on.
fn render(search: &SearchController, session: &Session, output: &Output) -> bool {
    match search.state() {
        LoadState::Loaded(items) => {
            let sort = search.sort().map_or("Relevance", |s| s.label());
            let heading = format!(
                "Results for \"{}\" · {} · page {} of {} ({} total)",
                search.query(),
                sort,
                search.page(),
                search.total_pages(),
                search.total_results()
            );
            render_items(&heading, items, session, output);
            true
        }
        LoadState::Empty => {
            output.warn(format!("No results found for \"{}\".", search.query()));
            false
        }
        LoadState::Failed(message) => {
            output.error(message);
            false
        }
        LoadState::Idle | LoadState::Loading => false,
    }
}
