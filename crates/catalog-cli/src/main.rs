use catalog_models::{GenreId, MediaFilter, MediaType, SortKey, TimeWindow};
use clap::{ArgAction, Parser, Subcommand};
use commands::{config, details, gallery, genres, open, search};

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "reel-catalog")]
#[command(about = "Reel Catalog - Browse trending movies and TV shows from TMDB")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the trending gallery
    #[command(long_about = "Show trending movies and TV shows. With --genre the list comes from discovery instead of trending; with --type all, movies and shows are fetched together and merged.")]
    Gallery {
        /// Media type: movie, tv or all
        #[arg(long = "type", default_value = "all")]
        media: MediaFilter,

        /// Genre id to filter by (see `reel-catalog genres`)
        #[arg(long)]
        genre: Option<GenreId>,

        /// Sort order, e.g. popularity.desc or title.asc (defaults to the configured sort)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Trending window: day or week (defaults to the configured window)
        #[arg(long)]
        window: Option<TimeWindow>,

        /// Pick an item from the list and page through its details
        #[arg(long, action = ArgAction::SetTrue)]
        browse: bool,
    },
    /// Search movies and TV shows by title
    Search {
        /// Search text
        query: String,

        /// Media type: movie, tv or all
        #[arg(long = "type", default_value = "all")]
        media: MediaFilter,

        /// Result page (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Re-order results locally; relevance order when omitted
        #[arg(long)]
        sort: Option<SortKey>,

        /// Page through results and open details interactively
        #[arg(long, action = ArgAction::SetTrue)]
        browse: bool,
    },
    /// Show full details for one title
    Details {
        /// movie or tv
        media_type: MediaType,

        /// TMDB id
        id: u64,
    },
    /// List genres for a media type
    Genres {
        /// Media type: movie, tv or all (merged and de-duplicated)
        #[arg(long = "type", default_value = "all")]
        media: MediaFilter,
    },
    /// Open an app route such as "/search?q=alien" or "/details/movie/603"
    Open {
        route: String,

        /// Continue interactively from the opened view
        #[arg(long, action = ArgAction::SetTrue)]
        browse: bool,
    },
    /// Manage configuration
    #[command(long_about = "Manage the configuration file. Running without a subcommand shows the current configuration.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Write a configuration file, prompting for the API key
    Init {
        /// TMDB API key (if not provided, will prompt)
        #[arg(long)]
        api_key: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let settings = commands::Settings::load()?;

    logging::init_logging_with_file(cli.verbose, cli.quiet, settings.config.logging.file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Gallery {
            media,
            genre,
            sort,
            window,
            browse,
        } => {
            let args = gallery::GalleryArgs {
                media,
                genre,
                sort,
                window,
                browse,
            };
            gallery::run_gallery(&settings, args, &output).await
        }
        Commands::Search {
            query,
            media,
            page,
            sort,
            browse,
        } => {
            let args = search::SearchArgs {
                query,
                media,
                page,
                sort,
                browse,
            };
            search::run_search(&settings, args, &output).await
        }
        Commands::Details { media_type, id } => details::run_details(&settings, media_type, id, &output).await,
        Commands::Genres { media } => genres::run_genres(&settings, media, &output).await,
        Commands::Open { route, browse } => open::run_open(&settings, &route, browse, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
            config::run_config(&settings, cmd, &output)
        }
    }
}
