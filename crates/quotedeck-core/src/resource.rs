//! Async resource observers.
//!
//! A [`Resource`] binds a [`FetchState`] to a parameter set and keeps it
//! synchronized with the gateway: every observed parameter change issues
//! exactly one call, missing parameters short-circuit to idle, and results
//! for superseded parameters are discarded at apply-time rather than
//! cancelled at the transport level. Consumers subscribe through a
//! `tokio::sync::watch` channel and only ever see the latest snapshot.
//!
//! Fetch tasks are spawned on the ambient tokio runtime; constructing a
//! resource is cheap and synchronous.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::client::DashboardClient;
use crate::domain::{
    CompanyList, ComparisonResult, CorrelationMatrix, Prediction, SeriesResponse, StockSummary,
    TopMovers,
};
use crate::error::ApiError;

/// Snapshot of one fetch lifecycle: idle → loading → (success | error).
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> FetchState<T> {
    pub const fn idle() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(message),
        }
    }

    pub const fn is_idle(&self) -> bool {
        self.data.is_none() && !self.loading && self.error.is_none()
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Input parameter contract for a resource.
///
/// `is_complete` distinguishes "nothing selected yet" from a real request:
/// incomplete parameters reset the resource to idle without a network call.
pub trait ResourceParams: Clone + PartialEq + Send + 'static {
    fn is_complete(&self) -> bool {
        true
    }
}

impl ResourceParams for () {}

/// Parameters for single-symbol resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolParams {
    pub symbol: String,
}

impl ResourceParams for SymbolParams {
    fn is_complete(&self) -> bool {
        !self.symbol.trim().is_empty()
    }
}

/// Parameters for the price-history resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesParams {
    pub symbol: String,
    pub days: u32,
}

impl ResourceParams for SeriesParams {
    fn is_complete(&self) -> bool {
        !self.symbol.trim().is_empty()
    }
}

/// Parameters for the pairwise comparison resource. Complete only when both
/// slots are filled, so a half-built compare selection stays idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareParams {
    pub symbol1: String,
    pub symbol2: String,
}

impl ResourceParams for CompareParams {
    fn is_complete(&self) -> bool {
        !self.symbol1.trim().is_empty() && !self.symbol2.trim().is_empty()
    }
}

/// Parameters for the forecast resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionParams {
    pub symbol: String,
    pub days: u32,
}

impl ResourceParams for PredictionParams {
    fn is_complete(&self) -> bool {
        !self.symbol.trim().is_empty()
    }
}

type FetchFn<P, T> =
    Arc<dyn Fn(P) -> Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send>> + Send + Sync>;

/// One observable fetch lifecycle bound to a parameter set.
pub struct Resource<P, T> {
    label: &'static str,
    fetch: FetchFn<P, T>,
    params: Mutex<Option<P>>,
    /// Ticket counter: bumped on every parameter change, checked again when
    /// a fetch completes. A completion holding a stale ticket is dropped.
    seq: Arc<AtomicU64>,
    tx: Arc<watch::Sender<FetchState<T>>>,
}

impl<P, T> Resource<P, T>
where
    P: ResourceParams,
    T: Clone + Send + Sync + 'static,
{
    pub fn new(
        label: &'static str,
        fetch: impl Fn(P) -> Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        let (tx, _rx) = watch::channel(FetchState::idle());
        Self {
            label,
            fetch: Arc::new(fetch),
            params: Mutex::new(None),
            seq: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
        }
    }

    /// Subscribe to state snapshots. The receiver always holds the latest
    /// state; dropping every receiver makes further publishes no-ops.
    pub fn observe(&self) -> watch::Receiver<FetchState<T>> {
        self.tx.subscribe()
    }

    /// The latest state snapshot.
    pub fn snapshot(&self) -> FetchState<T> {
        self.tx.borrow().clone()
    }

    /// Bind a new parameter set.
    ///
    /// Unchanged parameters are a no-op. `None` or incomplete parameters
    /// reset to idle without a call and invalidate any in-flight fetch.
    pub fn set_params(&self, params: Option<P>) {
        let params = params.filter(ResourceParams::is_complete);

        // The ticket is assigned under the params lock so the stored params
        // and the winning ticket can never disagree across racing callers.
        let ticket = {
            let mut current = self.params.lock().expect("resource params lock");
            if *current == params {
                return;
            }
            *current = params.clone();
            self.seq.fetch_add(1, Ordering::SeqCst) + 1
        };

        match params {
            Some(params) => self.spawn_fetch(params, ticket),
            None => {
                // The seq bump above already invalidated in-flight work.
                let _ = self.tx.send(FetchState::idle());
            }
        }
    }

    /// Re-issue the current parameters. No-op when no complete parameter
    /// set is bound.
    pub fn refetch(&self) {
        let (params, ticket) = {
            let current = self.params.lock().expect("resource params lock");
            match current.clone() {
                Some(params) => (params, self.seq.fetch_add(1, Ordering::SeqCst) + 1),
                None => return,
            }
        };
        self.spawn_fetch(params, ticket);
    }

    fn spawn_fetch(&self, params: P, ticket: u64) {
        let _ = self.tx.send(FetchState::loading());

        let future = (self.fetch)(params);
        let seq = Arc::clone(&self.seq);
        let tx = Arc::clone(&self.tx);
        let label = self.label;

        tokio::spawn(async move {
            let result = future.await;

            // Last parameter change wins: drop completions that no longer
            // match the current ticket.
            if seq.load(Ordering::SeqCst) != ticket {
                return;
            }

            let state = match result {
                Ok(data) => FetchState::ready(data),
                Err(error) => {
                    tracing::warn!(resource = label, error = %error, "fetch failed");
                    FetchState::failed(format!("failed to load {label}: {error}"))
                }
            };
            let _ = tx.send(state);
        });
    }
}

impl<T> Resource<(), T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Kick off a parameterless resource.
    pub fn start(&self) {
        self.set_params(Some(()));
    }
}

/// Company-list resource. The only resource with a caller-facing refetch in
/// the dashboard, though refetch is available on every [`Resource`].
pub fn companies(client: &Arc<DashboardClient>) -> Resource<(), CompanyList> {
    let client = Arc::clone(client);
    Resource::new("companies", move |()| {
        let client = Arc::clone(&client);
        Box::pin(async move { client.list_companies().await })
    })
}

/// Price-history resource for one symbol over the active time range.
pub fn series(client: &Arc<DashboardClient>) -> Resource<SeriesParams, SeriesResponse> {
    let client = Arc::clone(client);
    Resource::new("price history", move |params: SeriesParams| {
        let client = Arc::clone(&client);
        Box::pin(async move { client.series(&params.symbol, Some(params.days)).await })
    })
}

/// Statistics-snapshot resource for one symbol.
pub fn summary(client: &Arc<DashboardClient>) -> Resource<SymbolParams, StockSummary> {
    let client = Arc::clone(client);
    Resource::new("summary", move |params: SymbolParams| {
        let client = Arc::clone(&client);
        Box::pin(async move { client.summary(&params.symbol).await })
    })
}

/// Pairwise-comparison resource; idle until both symbols are chosen.
pub fn comparison(client: &Arc<DashboardClient>) -> Resource<CompareParams, ComparisonResult> {
    let client = Arc::clone(client);
    Resource::new("comparison", move |params: CompareParams| {
        let client = Arc::clone(&client);
        Box::pin(async move { client.compare(&params.symbol1, &params.symbol2).await })
    })
}

/// Universe-wide correlation grid resource.
pub fn correlation_matrix(client: &Arc<DashboardClient>) -> Resource<(), CorrelationMatrix> {
    let client = Arc::clone(client);
    Resource::new("correlation matrix", move |()| {
        let client = Arc::clone(&client);
        Box::pin(async move { client.correlation_matrix().await })
    })
}

/// Top gainers/losers resource.
pub fn top_movers(client: &Arc<DashboardClient>) -> Resource<(), TopMovers> {
    let client = Arc::clone(client);
    Resource::new("top movers", move |()| {
        let client = Arc::clone(&client);
        Box::pin(async move { client.top_movers().await })
    })
}

/// Forecast resource for one symbol.
pub fn prediction(client: &Arc<DashboardClient>) -> Resource<PredictionParams, Prediction> {
    let client = Arc::clone(client);
    Resource::new("prediction", move |params: PredictionParams| {
        let client = Arc::clone(&client);
        Box::pin(async move { client.predict(&params.symbol, Some(params.days)).await })
    })
}
