use crate::core::label::LabelKey;
use crate::core::pricing::Pricing;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Formatted prices shared by every label on a page, keyed by their inputs.
///
/// A marketplace grid shows the same price in the same currency many times;
/// each distinct key is rendered once.
#[derive(Clone, Default)]
pub struct PriceCache {
    inner: Arc<RwLock<HashMap<LabelKey, Arc<str>>>>,
    hits: Arc<AtomicUsize>,
    misses: Arc<AtomicUsize>,
}

impl PriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_render(&self, key: &LabelKey, pricing: &Pricing) -> Arc<str> {
        if let Some(value) = self.read().get(key) {
            debug!("Cache HIT");
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(value);
        }
        debug!("Cache MISS");
        self.misses.fetch_add(1, Ordering::Relaxed);
        let rendered: Arc<str> = key.render(pricing).into();
        let mut cache = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(cache.entry(key.clone()).or_insert(rendered))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drops every entry, e.g. after the pricing tables were replaced.
    pub fn clear(&self) {
        let mut cache = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        cache.clear();
        debug!("Cache CLEAR");
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<LabelKey, Arc<str>>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
