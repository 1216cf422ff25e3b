use indexmap::IndexMap;
use tracing::warn;

use crate::core::SeriesData;
use crate::error::{ChartError, ChartResult};

/// External series provider (HTTP backend, model service, fixture file).
///
/// Fetches are asynchronous; the caller applies the result through
/// `ChartLifecycleManager::update_series` or `replace_series` when it
/// completes. The manager itself never fetches.
#[allow(async_fn_in_trait)]
pub trait SeriesSource {
    async fn fetch_series(&self, key: &str) -> ChartResult<SeriesData>;
}

/// Fetches `key`, substituting `fallback` when the source is unavailable.
pub async fn fetch_series_or<S: SeriesSource>(
    source: &S,
    key: &str,
    fallback: &SeriesData,
) -> SeriesData {
    match source.fetch_series(key).await {
        Ok(series) => series,
        Err(err) => {
            warn!(key, error = %err, "series fetch failed; using fallback data");
            fallback.clone()
        }
    }
}

/// In-memory series source keyed by name.
#[derive(Debug, Clone, Default)]
pub struct StaticSeriesSource {
    series: IndexMap<String, SeriesData>,
}

impl StaticSeriesSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object mapping keys to `{ "values": [...], "labels": [...] }`.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let series: IndexMap<String, SeriesData> = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse series fixture json: {e}"))
        })?;
        Ok(Self { series })
    }

    #[must_use]
    pub fn with_series(mut self, key: impl Into<String>, series: SeriesData) -> Self {
        self.insert(key, series);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, series: SeriesData) -> Option<SeriesData> {
        self.series.insert(key.into(), series)
    }

    pub fn remove(&mut self, key: &str) -> Option<SeriesData> {
        self.series.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl SeriesSource for StaticSeriesSource {
    async fn fetch_series(&self, key: &str) -> ChartResult<SeriesData> {
        self.series
            .get(key)
            .cloned()
            .ok_or_else(|| ChartError::DataFetchUnavailable {
                key: key.to_owned(),
                reason: "no series registered under this key".to_owned(),
            })
    }
}
