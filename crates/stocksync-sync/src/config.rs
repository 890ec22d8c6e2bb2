//! Batch size configuration.

use std::num::NonZeroUsize;

const fn batch(size: usize) -> NonZeroUsize {
    match NonZeroUsize::new(size) {
        Some(size) => size,
        None => panic!("batch size must be non-zero"),
    }
}

/// Stock updates per import call.
pub const DEFAULT_STOCK_BATCH: NonZeroUsize = batch(100);

/// Price updates per import call during a full [`run`](crate::run).
pub const DEFAULT_PRICE_RUN_BATCH: NonZeroUsize = batch(900);

/// Price updates per import call in [`upload_prices`](crate::upload_prices).
pub const DEFAULT_PRICE_UPLOAD_BATCH: NonZeroUsize = batch(1000);

/// Batch limits for each push site.
///
/// The two price sizes are independent settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSizes {
    /// Stock updates per call.
    pub stocks: NonZeroUsize,
    /// Price updates per call in a full run.
    pub prices_run: NonZeroUsize,
    /// Price updates per call in the standalone price upload.
    pub prices_upload: NonZeroUsize,
}

impl Default for BatchSizes {
    fn default() -> Self {
        Self {
            stocks: DEFAULT_STOCK_BATCH,
            prices_run: DEFAULT_PRICE_RUN_BATCH,
            prices_upload: DEFAULT_PRICE_UPLOAD_BATCH,
        }
    }
}
