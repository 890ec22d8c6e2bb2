//! Stock-only command.

use anyhow::Result;
use stocksync_lib::upload_stocks;

use super::Context;
use crate::display::print_push;

/// Pushes one stock update per listed offer.
pub(crate) async fn stocks(ctx: &Context) -> Result<()> {
    let records = ctx.records().await?;
    let upload = upload_stocks(&ctx.marketplace, &records, &ctx.batches, &ctx.progress).await?;

    if !ctx.quiet {
        print_push("Stocks", &upload.report);
        println!("In stock: {}", upload.not_empty.len());
    }
    Ok(())
}
