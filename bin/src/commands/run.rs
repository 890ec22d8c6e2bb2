//! Full sync command.

use anyhow::Result;

use super::Context;
use crate::display::print_summary;

/// Pushes stock, then prices, for every listed offer.
pub(crate) async fn run(ctx: &Context) -> Result<()> {
    let summary =
        stocksync_lib::run(&ctx.marketplace, &ctx.feed, &ctx.batches, &ctx.progress).await?;

    if !ctx.quiet {
        print_summary(&summary);
    }
    Ok(())
}
