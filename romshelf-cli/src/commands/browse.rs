use romshelf_lib::GameDetail;

use crate::cli_types::FilterArgs;
use crate::commands::{AppContext, apply_filters};
use crate::error::CliError;
use crate::render::{render_detail, render_regions, render_stats, render_view};

pub(crate) fn run_browse(
    ctx: &AppContext,
    console: &str,
    filters: &FilterArgs,
    page: usize,
) -> Result<(), CliError> {
    let mut session = ctx.open_session(console)?;
    apply_filters(&mut session, filters);
    let shown = session.go_to_page(page);
    if shown != page {
        log::debug!("page {page} out of range, showing {shown}");
    }
    render_view(&ctx.palette, &session);
    Ok(())
}

/// `index` is 1-based, as printed by `browse`.
pub(crate) fn run_show(
    ctx: &AppContext,
    console: &str,
    index: usize,
    filters: &FilterArgs,
) -> Result<(), CliError> {
    let mut session = ctx.open_session(console)?;
    apply_filters(&mut session, filters);

    let position = index.checked_sub(1).ok_or_else(|| CliError::usage("Index starts at 1"))?;
    let game = session.record_at(position).ok_or_else(|| {
        CliError::usage(format!(
            "No game #{index} (the filtered list has {} games)",
            session.stats().matching
        ))
    })?;
    render_detail(&ctx.palette, position, &GameDetail::new(game));
    Ok(())
}

pub(crate) fn run_regions(ctx: &AppContext, console: &str) -> Result<(), CliError> {
    let session = ctx.open_session(console)?;
    log::info!(
        "{}",
        ctx.palette
            .title(&format!("Regions in {}:", console.to_uppercase()))
    );
    render_regions(&ctx.palette, session.facets());
    Ok(())
}

pub(crate) fn run_stats(
    ctx: &AppContext,
    console: &str,
    filters: &FilterArgs,
) -> Result<(), CliError> {
    let mut session = ctx.open_session(console)?;
    apply_filters(&mut session, filters);
    log::info!("{}", ctx.palette.title(&console.to_uppercase()));
    render_stats(&ctx.palette, &session.stats());
    Ok(())
}
