//! Price-only command.

use anyhow::Result;
use stocksync_lib::upload_prices;

use super::Context;
use crate::display::print_push;

/// Pushes prices for listed offers present in the feed.
pub(crate) async fn prices(ctx: &Context) -> Result<()> {
    let records = ctx.records().await?;
    let upload = upload_prices(&ctx.marketplace, &records, &ctx.batches, &ctx.progress).await?;

    if !ctx.quiet {
        print_push("Prices", &upload.report);
    }
    Ok(())
}
