use crate::commands::AppContext;

pub(crate) fn run_list(ctx: &AppContext) {
    let palette = &ctx.palette;
    log::info!("{}", palette.title("Consoles:"));
    log::info!("");

    for (key, location) in ctx.source.consoles().iter() {
        let kind = if location.is_remote() { "(web)" } else { "(file)" };
        log::info!(
            "  {:<8} {} {}",
            palette.title(key),
            palette.dim(kind),
            palette.tag(&location.to_string()),
        );
    }
}
