/// Insight service owning the currently displayed quote/advice pair
///
/// Refreshes run whenever the habit collection changes. Each refresh claims
/// a generation number at call time; a result is stored only while its
/// generation is still the newest, so a slow response can never overwrite
/// the outcome of a later refresh.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use crate::advice::{AdviceProvider, GeminiAdvice};
use crate::domain::{DailyInsight, Habit};

/// Displayed insight plus refresh bookkeeping, guarded as one unit
///
/// The generation lives under the same lock as the insight: checking "is
/// this still the newest refresh" and storing the result happen in a single
/// critical section, and claims serialize through that lock too.
struct InsightState {
    current: DailyInsight,
    generation: u64,
}

/// Holds the current insight and coordinates refreshes against the provider
///
/// Cheap to clone: clones share the same displayed insight and generation
/// counter, which is what lets background refreshes hand results back.
#[derive(Clone)]
pub struct InsightService {
    provider: Option<Arc<dyn AdviceProvider>>,
    state: Arc<Mutex<InsightState>>,
}

impl InsightService {
    /// Create a service over an optional provider
    ///
    /// None means "no credential": every refresh resolves to the fallback
    /// pair without attempting a request. The displayed insight starts at
    /// the fallback either way.
    pub fn new(provider: Option<Arc<dyn AdviceProvider>>) -> Self {
        Self {
            provider,
            state: Arc::new(Mutex::new(InsightState {
                current: DailyInsight::fallback(),
                generation: 0,
            })),
        }
    }

    /// Create a service wired to Gemini when a credential is configured
    pub fn from_env() -> Self {
        let provider =
            GeminiAdvice::from_env().map(|gemini| Arc::new(gemini) as Arc<dyn AdviceProvider>);

        if provider.is_none() {
            tracing::info!("No advice credential configured, insights will use the fallback pair");
        }

        Self::new(provider)
    }

    /// The insight currently meant for display
    pub fn current(&self) -> DailyInsight {
        self.lock_state().current.clone()
    }

    /// Fetch a fresh insight for the given habits and apply it
    ///
    /// The next generation is claimed before this returns, not when the
    /// returned future is first polled, so later calls supersede earlier
    /// ones no matter how their futures end up scheduled. Provider absence
    /// or any provider error resolves to the fallback pair; the caller
    /// always gets an insight, never an error. The returned value is what
    /// this refresh produced even if a newer refresh superseded it
    /// mid-flight (in that case the displayed insight is left alone).
    pub fn refresh<'a>(&'a self, habits: &'a [Habit]) -> impl Future<Output = DailyInsight> + 'a {
        let generation = self.begin_refresh();
        async move { self.resolve(generation, habits).await }
    }

    /// Run a refresh on a background task
    ///
    /// The generation is claimed synchronously before spawning, so a refresh
    /// started after this call supersedes it even if the spawned task has
    /// not begun executing yet.
    pub fn refresh_in_background(&self, habits: Vec<Habit>) -> JoinHandle<DailyInsight> {
        let generation = self.begin_refresh();
        let service = self.clone();

        tokio::spawn(async move { service.resolve(generation, &habits).await })
    }

    fn begin_refresh(&self) -> u64 {
        let mut state = self.lock_state();
        state.generation += 1;
        state.generation
    }

    async fn resolve(&self, generation: u64, habits: &[Habit]) -> DailyInsight {
        let insight = match &self.provider {
            None => DailyInsight::fallback(),
            Some(provider) => match provider.fetch_insight(habits).await {
                Ok(insight) => insight,
                Err(e) => {
                    tracing::warn!("Advice provider failed, using fallback: {}", e);
                    DailyInsight::fallback()
                }
            },
        };

        if !self.apply(generation, &insight) {
            tracing::debug!("Discarding stale insight from refresh generation {}", generation);
        }

        insight
    }

    /// Store the result unless a newer refresh has started since
    ///
    /// The comparison and the write share one lock acquisition with the
    /// claims in begin_refresh; a newer claim can never land between them.
    fn apply(&self, generation: u64, insight: &DailyInsight) -> bool {
        let mut state = self.lock_state();
        if state.generation != generation {
            return false;
        }

        state.current = insight.clone();
        true
    }

    fn lock_state(&self) -> MutexGuard<'_, InsightState> {
        // The guarded fields are a string pair and a counter; a panic cannot
        // leave them half-updated, so recover the guard
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
