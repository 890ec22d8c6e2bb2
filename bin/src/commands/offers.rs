//! Offer listing command.

use anyhow::Result;
use stocksync_lib::prelude::*;

use super::Context;

/// Prints every listed offer id, one per line.
pub(crate) async fn offers(ctx: &Context) -> Result<()> {
    let offer_ids = ctx.marketplace.offer_ids().await.map_err(SyncError::from)?;

    for offer_id in &offer_ids {
        println!("{offer_id}");
    }
    tracing::info!(count = offer_ids.len(), "listed offers");
    Ok(())
}
