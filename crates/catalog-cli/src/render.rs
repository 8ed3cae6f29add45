use catalog_client::{TmdbClient, CARD_IMAGE_SIZE, DETAIL_IMAGE_SIZE};
use catalog_models::{Genre, MediaDetails, MediaItem};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde_json::{json, Value};

const CHOICE_TITLE_WIDTH: usize = 40;

fn styled_table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header(title: &str) -> String {
    format!("\n{}", title.bright_cyan().bold())
}

fn year_label(item: &MediaItem) -> String {
    item.year().map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Card grid as a table: one row per item, in display order.
pub fn items_table(title: &str, items: &[MediaItem]) -> String {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Year").add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
        Cell::new("Popularity").add_attribute(Attribute::Bold),
        Cell::new("ID").add_attribute(Attribute::Bold),
    ]);

    for (index, item) in items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(item.title()).fg(Color::Cyan),
            Cell::new(item.media_type().label()),
            Cell::new(year_label(item)),
            Cell::new(format!("{:.1}", item.vote_average())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", item.popularity())).set_alignment(CellAlignment::Right),
            Cell::new(item.id()).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{}\n{}", header(title), table)
}

pub fn details_table(details: &MediaDetails, position: &str, client: &TmdbClient) -> String {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new(details.title()).fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(position),
    ]);

    if let Some(tagline) = details.tagline() {
        table.add_row(vec![Cell::new("Tagline"), Cell::new(tagline).add_attribute(Attribute::Italic)]);
    }
    table.add_row(vec![Cell::new("Type"), Cell::new(details.key().media_type.label())]);
    let released = if details.release_date().is_empty() {
        "N/A"
    } else {
        details.release_date()
    };
    table.add_row(vec![Cell::new("Released"), Cell::new(released)]);
    if let Some(runtime) = details.runtime() {
        table.add_row(vec![Cell::new("Runtime"), Cell::new(format!("{} min", runtime))]);
    }
    table.add_row(vec![
        Cell::new("Rating"),
        Cell::new(format!("{:.1} ({} votes)", details.vote_average(), details.vote_count())),
    ]);
    if !details.genres().is_empty() {
        let names: Vec<&str> = details.genres().iter().map(|g| g.name.as_str()).collect();
        table.add_row(vec![Cell::new("Genres"), Cell::new(names.join(", "))]);
    }
    if !details.status().is_empty() {
        table.add_row(vec![Cell::new("Status"), Cell::new(details.status())]);
    }
    if let MediaDetails::Tv(show) = details {
        table.add_row(vec![
            Cell::new("Seasons"),
            Cell::new(format!("{} ({} episodes)", show.number_of_seasons, show.number_of_episodes)),
        ]);
    }
    if let Some(homepage) = details.homepage() {
        table.add_row(vec![Cell::new("Homepage"), Cell::new(homepage)]);
    }
    if let Some(poster) = client.image_url(details.poster_path(), DETAIL_IMAGE_SIZE) {
        table.add_row(vec![Cell::new("Poster"), Cell::new(poster)]);
    }
    let overview = if details.overview().is_empty() {
        "No overview available."
    } else {
        details.overview()
    };
    table.add_row(vec![Cell::new("Overview"), Cell::new(overview)]);

    table.to_string()
}

pub fn genres_table(title: &str, genres: &[Genre]) -> String {
    let mut table = styled_table();
    table.set_header(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Genre").add_attribute(Attribute::Bold),
    ]);
    for genre in genres {
        table.add_row(vec![Cell::new(genre.id).set_alignment(CellAlignment::Right), Cell::new(&genre.name)]);
    }
    format!("{}\n{}", header(title), table)
}

/// One-line label used in interactive pick lists.
pub fn item_choice(item: &MediaItem) -> String {
    format!("{} ({}, {})", truncate(item.title(), CHOICE_TITLE_WIDTH), item.media_type().label(), year_label(item))
}

pub fn item_json(item: &MediaItem, client: &TmdbClient) -> Value {
    json!({
        "media_type": item.media_type(),
        "id": item.id(),
        "title": item.title(),
        "overview": item.overview(),
        "release_date": item.release_date(),
        "vote_average": item.vote_average(),
        "popularity": item.popularity(),
        "genre_ids": item.genre_ids(),
        "poster_url": client.image_url(item.poster_path(), CARD_IMAGE_SIZE),
    })
}

pub fn items_json(title: &str, items: &[MediaItem], client: &TmdbClient) -> Value {
    json!({
        "title": title,
        "count": items.len(),
        "results": items.iter().map(|item| item_json(item, client)).collect::<Vec<_>>(),
    })
}

pub fn details_json(details: &MediaDetails, position: &str, client: &TmdbClient) -> Value {
    json!({
        "position": position,
        "poster_url": client.image_url(details.poster_path(), DETAIL_IMAGE_SIZE),
        "details": details,
    })
}
