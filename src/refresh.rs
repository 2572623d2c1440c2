//! Home-feed refresh pipeline.
//!
//! Refreshes are triggered from several sources in the embedding application
//! (periodic timers, the view becoming visible), and fetches may complete out
//! of order. Each trigger supersedes any fetch still in flight: the previous
//! task is aborted, and a generation check inside the reconciler's critical
//! section drops any result that slipped past the abort. A stale response can
//! therefore never overwrite a fresher one, and at most one result is applied
//! at a time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::StatisticsProvider;
use crate::engine::{self, HomeItems, RefreshConfig};
use crate::reconcile::{ArrangementDiff, Reconciler};
use crate::view_state::{HomeArrangement, HomeItem, HomeItemKey, HomeSection};

/// One applied refresh cycle: the two flat item lists plus the minimal diff
/// against what was previously presented.
#[derive(Debug, Clone)]
pub struct HomeUpdate {
    pub items: HomeItems,
    pub diff: ArrangementDiff<HomeSection, HomeItemKey>,
}

/// Coordinates fetch → derive → reconcile for the home feed.
pub struct HomeFeed {
    provider: Arc<dyn StatisticsProvider>,
    reconciler: Arc<Mutex<Reconciler<HomeSection, HomeItem>>>,
    /// Monotonic refresh generation; only the newest may apply its result.
    generation: Arc<AtomicU64>,
    inflight: Option<JoinHandle<()>>,
    update_tx: mpsc::UnboundedSender<HomeUpdate>,
}

impl HomeFeed {
    /// Create a feed plus the receiver the presentation layer listens on.
    pub fn new(
        provider: Arc<dyn StatisticsProvider>,
    ) -> (Self, mpsc::UnboundedReceiver<HomeUpdate>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let feed = Self {
            provider,
            reconciler: Arc::new(Mutex::new(Reconciler::new())),
            generation: Arc::new(AtomicU64::new(0)),
            inflight: None,
            update_tx,
        };
        (feed, update_rx)
    }

    /// Start a refresh cycle, superseding any fetch still in flight.
    ///
    /// A failed fetch degrades to the empty snapshot for this cycle, so the
    /// feed renders "no data yet" states rather than keeping stale content.
    pub fn refresh(&mut self, config: RefreshConfig) {
        // Abandon the previous fetch outright; the generation check below
        // covers the window where it already finished awaiting.
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let provider = Arc::clone(&self.provider);
        let reconciler = Arc::clone(&self.reconciler);
        let latest = Arc::clone(&self.generation);
        let update_tx = self.update_tx.clone();

        self.inflight = Some(tokio::spawn(async move {
            let stats = match provider.fetch_combined_statistics().await {
                Ok(stats) => stats,
                Err(e) => {
                    warn!(error = %e, "statistics fetch failed; rendering empty cycle");
                    Default::default()
                }
            };

            let items = engine::derive_home_items(&stats, &config);
            let arrangement = HomeArrangement::from(items.clone());

            // The only critical section in the pipeline: freshness check and
            // state mutation happen as one atomic step under the lock.
            let mut reconciler = reconciler.lock().await;
            if latest.load(Ordering::SeqCst) != generation {
                debug!(generation, "dropping superseded refresh result");
                return;
            }
            let diff = reconciler.apply(
                &arrangement.section_order,
                &arrangement.items_by_section,
                &arrangement.retained_if_empty,
            );
            drop(reconciler);

            // Receiver may be gone during shutdown; nothing to do then.
            let _ = update_tx.send(HomeUpdate { items, diff });
        }));
    }

    /// Wait for the in-flight refresh, if any, to settle.
    ///
    /// Deterministic sequencing for tests and shutdown; production callers
    /// normally just consume the update channel.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.inflight.take() {
            let _ = handle.await;
        }
    }
}
