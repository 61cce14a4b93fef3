#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Async field loading with observable state and stale-response protection.
//!
//! Each load fetches the selected city's feature collection, maps every
//! feature through the city's adapter, and replaces the previous collection
//! wholesale. When the selection changes mid-flight, the newer request wins:
//! a completion carrying a stale [`LoadToken`] is discarded rather than
//! overwriting newer state.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use field_map_field_models::Field;
use field_map_source::city_def::CityDefinition;

/// Errors surfaced by a failed load.
///
/// Transport problems and non-success statuses are all the same generic
/// "failed to load fields" condition from the caller's point of view; a
/// payload without a `features` list is *not* an error (it is zero results).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// HTTP request or body decoding failed.
    #[error("failed to load fields: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("failed to load fields: HTTP {0}")]
    Status(u16),

    /// A newer load was started before this one finished; the result was
    /// discarded.
    #[error("load superseded by a newer request")]
    Superseded,
}

/// Observable collection state, distinct from both "empty result" and
/// "error".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// No load has been started yet.
    #[default]
    Idle,
    /// A load is outstanding.
    Loading,
    /// The last load completed; holds the current collection (possibly
    /// empty).
    Loaded(Vec<Field>),
    /// The last load failed; the previous collection was discarded.
    Failed,
}

/// Request-generation token handed out by [`FieldLoader::begin`].
///
/// Passed back through [`FieldLoader::load`] so a completion can tell
/// whether it is still the latest request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
}

/// Loads field collections for a city.
///
/// Single-flight per invocation: no caching or deduplication across calls —
/// a new call always re-fetches, and a failed fetch is only retried by an
/// external re-trigger.
#[derive(Debug)]
pub struct FieldLoader {
    client: reqwest::Client,
    generation: AtomicU64,
    state: RwLock<LoadState>,
}

impl Default for FieldLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldLoader {
    /// Creates a loader with a fresh HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            generation: AtomicU64::new(0),
            state: RwLock::new(LoadState::Idle),
        }
    }

    /// Returns a snapshot of the current collection state.
    ///
    /// # Panics
    ///
    /// Panics if the internal state lock is poisoned.
    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Starts a new request generation and marks the collection as loading.
    ///
    /// Any load still in flight for an earlier token will have its result
    /// discarded on arrival.
    pub fn begin(&self) -> LoadToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write().expect("state lock poisoned") = LoadState::Loading;
        LoadToken { generation }
    }

    /// Fetches and adapts the city's fields, updating the observable state
    /// if `token` is still the latest request.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on transport failure, a non-success response
    /// status, or when the result arrives stale ([`LoadError::Superseded`]).
    /// On a non-stale failure the collection state becomes [`LoadState::Failed`]
    /// and the previous collection is discarded.
    pub async fn load(
        &self,
        city: &CityDefinition,
        token: LoadToken,
    ) -> Result<Vec<Field>, LoadError> {
        let outcome = self.fetch_fields(city).await;

        if self.generation.load(Ordering::SeqCst) != token.generation {
            log::debug!("{}: discarding superseded load", city.id);
            return Err(LoadError::Superseded);
        }

        let mut state = self.state.write().expect("state lock poisoned");
        match outcome {
            Ok(fields) => {
                *state = LoadState::Loaded(fields.clone());
                Ok(fields)
            }
            Err(err) => {
                log::warn!("{}: load failed: {err}", city.id);
                *state = LoadState::Failed;
                Err(err)
            }
        }
    }

    async fn fetch_fields(&self, city: &CityDefinition) -> Result<Vec<Field>, LoadError> {
        let response = self.client.get(&city.api_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await?;

        // A missing or wrong-shaped `features` list is zero results, not an
        // error — it distinguishes "service down" from "nothing there".
        let features = body
            .get("features")
            .and_then(serde_json::Value::as_array)
            .cloned()
            .unwrap_or_default();

        let source = city.source();
        let fields: Vec<Field> = features
            .iter()
            .map(|feature| source.adapt(feature, city.center))
            .collect();

        log::info!("{}: loaded {} fields", city.label, fields.len());
        Ok(fields)
    }
}
