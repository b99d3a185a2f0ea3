//! Process-wide resident model
//!
//! Holds at most one [`ModelBundle`] behind a read-mostly lock. The bundle is
//! only ever replaced as a whole, so readers always see an extractor and an
//! ensemble from the same run. A cold slot is filled lazily from the
//! [`ModelStore`]; concurrent callers wait on the same load.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

use super::{ModelBundle, ModelStore};
use crate::error::{Result, SpamError};

/// Lifecycle of the resident slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelState {
    Unloaded,
    Loading,
    Ready,
    Unavailable,
}

enum Slot {
    Unloaded,
    Loading,
    Ready(Arc<ModelBundle>),
    Unavailable(String),
}

impl Slot {
    fn state(&self) -> ModelState {
        match self {
            Slot::Unloaded => ModelState::Unloaded,
            Slot::Loading => ModelState::Loading,
            Slot::Ready(_) => ModelState::Ready,
            Slot::Unavailable(_) => ModelState::Unavailable,
        }
    }
}

pub struct ModelRegistry {
    slot: RwLock<Slot>,
    /// Serializes store loads and store writes
    store_lock: Mutex<()>,
    store: ModelStore,
}

impl ModelRegistry {
    pub fn new(store: ModelStore) -> Self {
        Self {
            slot: RwLock::new(Slot::Unloaded),
            store_lock: Mutex::new(()),
            store,
        }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    pub async fn state(&self) -> ModelState {
        self.slot.read().await.state()
    }

    /// Resident bundle, if any, without touching the store
    pub async fn current(&self) -> Option<Arc<ModelBundle>> {
        match &*self.slot.read().await {
            Slot::Ready(bundle) => Some(Arc::clone(bundle)),
            _ => None,
        }
    }

    /// Resident bundle, loading it from the store on a cold slot
    pub async fn get_or_load(&self) -> Result<Arc<ModelBundle>> {
        if let Some(bundle) = self.current().await {
            return Ok(bundle);
        }

        let _guard = self.store_lock.lock().await;

        // Another caller may have finished loading (or training) meanwhile
        if let Some(bundle) = self.current().await {
            return Ok(bundle);
        }

        *self.slot.write().await = Slot::Loading;

        match self.store.load().await {
            Ok(bundle) => {
                info!("Loaded model {} from store", bundle.run_id());
                let bundle = Arc::new(bundle);
                *self.slot.write().await = Slot::Ready(Arc::clone(&bundle));
                Ok(bundle)
            }
            Err(e) => {
                warn!("Model load failed: {}", e);
                let reason = e.to_string();
                *self.slot.write().await = Slot::Unavailable(reason);
                Err(match e {
                    SpamError::ModelUnavailable(_) => e,
                    other => SpamError::ModelUnavailable(other.to_string()),
                })
            }
        }
    }

    /// Write `bundle` to the store, then make it resident. On a store failure
    /// neither the resident nor the persisted model changes.
    pub async fn persist_and_install(&self, bundle: ModelBundle) -> Result<Arc<ModelBundle>> {
        let _guard = self.store_lock.lock().await;
        self.store.save(&bundle).await?;
        Ok(self.install(bundle).await)
    }

    /// Replace the resident bundle without persisting it
    pub async fn install(&self, bundle: ModelBundle) -> Arc<ModelBundle> {
        let bundle = Arc::new(bundle);
        let previous = std::mem::replace(&mut *self.slot.write().await, Slot::Ready(Arc::clone(&bundle)));
        if let Slot::Ready(old) = previous {
            info!("Replaced resident model {} with {}", old.run_id(), bundle.run_id());
        } else {
            info!("Installed resident model {}", bundle.run_id());
        }
        bundle
    }

    /// Run id of the resident bundle
    pub async fn run_id(&self) -> Option<Uuid> {
        self.current().await.map(|b| b.run_id())
    }

    /// Reason for the last failed load, if the slot is unavailable
    pub async fn unavailable_reason(&self) -> Option<String> {
        match &*self.slot.read().await {
            Slot::Unavailable(reason) => Some(reason.clone()),
            _ => None,
        }
    }
}
