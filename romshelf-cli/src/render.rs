//! Terminal rendering of session views.

use romshelf_lib::{
    FilterState, GameCard, GameDetail, RegionFacets, Session, SessionStats, View, format_mb,
    pager_label,
};

use crate::style::Palette;

pub(crate) fn render_view(palette: &Palette, session: &Session) {
    match session.view() {
        View::Home => {
            log::info!("{}", palette.title("Pick a console to browse."));
        }
        View::Loading { console } => {
            log::info!(
                "{}",
                palette.dim(&format!("Loading {} listing...", console.to_uppercase()))
            );
        }
        View::Failed {
            console, message, ..
        } => {
            log::info!(
                "{} {}",
                palette.bad(&format!("Failed to load {}:", console.to_uppercase())),
                message
            );
            log::info!("{}", palette.dim("Check your connection and try again."));
        }
        View::NoMatches => {
            render_criteria(palette, session);
            log::info!("{}", palette.accent(no_matches_message(session.filter())));
        }
        View::Page(page) => {
            render_criteria(palette, session);
            for (position, game) in page.records() {
                render_card(palette, &GameCard::new(position, game));
            }
            if page.page_count() > 1 {
                let mut pager = pager_label(page.page(), page.page_count());
                if page.has_previous() {
                    pager = format!("< {pager}");
                }
                if page.has_next() {
                    pager = format!("{pager} >");
                }
                log::info!("");
                log::info!("  {}", palette.dim(&pager));
            }
        }
    }
}

fn render_criteria(palette: &Palette, session: &Session) {
    let stats = session.stats();
    let console = session.loaded_console().unwrap_or_default().to_uppercase();
    log::info!(
        "{} {}",
        palette.title(&console),
        palette.dim(&format!("{} of {} games", stats.matching, stats.total)),
    );
    let summary = criteria_summary(session.filter());
    if !summary.is_empty() {
        log::info!("  {}", palette.dim(&summary));
    }
    log::info!("");
}

/// "search: "gran" | region: japan | sort: size-desc"; empty for defaults.
fn criteria_summary(filter: &FilterState) -> String {
    let mut parts = Vec::new();
    if !filter.search_term().is_empty() {
        parts.push(format!("search: \"{}\"", filter.search_term()));
    }
    if !filter.region().is_all() {
        parts.push(format!("region: {}", filter.region()));
    }
    if filter.sort_order() != Default::default() {
        parts.push(format!("sort: {}", filter.sort_order()));
    }
    parts.join(" | ")
}

fn no_matches_message(filter: &FilterState) -> &'static str {
    if filter.is_filtered() {
        "No games match your filters."
    } else {
        "This listing has no games."
    }
}

fn render_card(palette: &Palette, card: &GameCard) {
    let tags: Vec<String> = card
        .tags
        .iter()
        .map(|t| palette.tag(&format!("[{t}]")))
        .collect();
    log::info!(
        "{}  {} {} {}",
        palette.dim(&format!("{:>6}", format!("#{}", card.position + 1))),
        palette.title(&card.title),
        tags.join(" "),
        palette.accent(&card.size),
    );
}

pub(crate) fn render_detail(palette: &Palette, position: usize, detail: &GameDetail) {
    log::info!("{}", palette.title(&detail.title));
    log::info!("{}", palette.dim(&format!("#{}", position + 1)));
    log::info!("");
    if detail.tags.is_empty() {
        log::info!("  Tags:      {}", palette.dim(&detail.tags_label()));
    } else {
        let tags: Vec<String> = detail.tags.iter().map(|t| palette.tag(t)).collect();
        log::info!("  Tags:      {}", tags.join(", "));
    }
    log::info!("  File size: {}", palette.accent(&detail.size));
    log::info!("  File name: {}", detail.file_name);
    match &detail.download_link {
        Some(link) => log::info!("  Download:  {}", palette.good(link)),
        None => log::info!("  Download:  {}", palette.dim("no link")),
    }
}

pub(crate) fn render_regions(palette: &Palette, facets: &RegionFacets) {
    for choice in facets.choices() {
        log::info!(
            "  {} {}",
            palette.title(&format!("{:<10}", choice.label())),
            palette.dim(&choice.filter().to_string()),
        );
    }
}

pub(crate) fn render_stats(palette: &Palette, stats: &SessionStats) {
    log::info!("  Games:    {}", palette.title(&stats.total.to_string()));
    log::info!("  Matching: {}", palette.title(&stats.matching.to_string()));
    log::info!("  Size:     {}", palette.accent(&format_mb(stats.matching_mb)));
}
