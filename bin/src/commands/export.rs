//! Export command.
//!
//! Builds the payloads a full run would push and writes them to disk
//! instead.

use anyhow::{Result, anyhow};
use std::path::Path;
use stocksync_lib::{build_payloads, write_payload_files};

use super::Context;
use crate::display::Format;

/// Writes `stocks.<ext>` and `prices.<ext>` into `output`.
pub(crate) async fn export(ctx: &Context, format: Format, output: &Path) -> Result<()> {
    let payloads = build_payloads(&ctx.marketplace, &ctx.feed).await?;

    let (stocks_path, prices_path) =
        write_payload_files(format.into(), output, &payloads.stocks, &payloads.prices)
            .map_err(|e| anyhow!("Failed to write export to {}: {e}", output.display()))?;

    if !ctx.quiet {
        println!(
            "Wrote {} stock updates to {}",
            payloads.stocks.len(),
            stocks_path.display()
        );
        println!(
            "Wrote {} price updates to {}",
            payloads.prices.len(),
            prices_path.display()
        );
    }
    Ok(())
}
