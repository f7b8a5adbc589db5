// ── Discovery snapshot store ──
//
// Holds the most recent discovery result. Every apply replaces the
// interface collection and DynVars wholesale; there is no incremental
// patching. Subscribers are woken through a `watch` channel.

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tokio::sync::watch;

use crate::branding::BrandingResolver;
use crate::ids::IdAllocator;
use crate::model::{DiscoverySnapshot, DynVars, NetworkInterface};
use crate::stream::InterfaceStream;
use crate::view::{InterfaceView, project_interface};

/// Interfaces in discovery order, keyed by [`interface_key`].
pub type InterfaceMap = IndexMap<String, Arc<NetworkInterface>>;

/// Store key of an interface: its name, qualified by the network namespace
/// when one is known (names are only unique per namespace).
pub fn interface_key(nif: &NetworkInterface) -> String {
    match nif.netns_id {
        Some(netns) => format!("{}@{netns}", nif.name),
        None => nif.name.clone(),
    }
}

pub struct SnapshotStore {
    interfaces: watch::Sender<Arc<InterfaceMap>>,
    dynvars: ArcSwap<DynVars>,
    /// Session-independent DynVars used for keys a snapshot leaves unset.
    fallback: DynVars,
    ids: Arc<IdAllocator>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl SnapshotStore {
    pub fn new(ids: Arc<IdAllocator>) -> Self {
        let (interfaces, _) = watch::channel(Arc::new(InterfaceMap::new()));
        let (last_refresh, _) = watch::channel(None);
        Self {
            interfaces,
            dynvars: ArcSwap::from_pointee(DynVars::default()),
            fallback: DynVars::default(),
            ids,
            last_refresh,
        }
    }

    /// Set fallback DynVars (e.g. from local configuration).
    pub fn with_fallback(mut self, fallback: DynVars) -> Self {
        self.dynvars.store(Arc::new(fallback.clone()));
        self.fallback = fallback;
        self
    }

    /// Replace the current state with `snapshot`.
    ///
    /// Interfaces keep discovery order. A later record with the same key
    /// replaces the earlier one in place.
    pub fn apply(&self, snapshot: DiscoverySnapshot) {
        let DiscoverySnapshot {
            interfaces,
            dynvars,
        } = snapshot;

        let map: InterfaceMap = interfaces
            .into_iter()
            .map(|nif| (interface_key(&nif), Arc::new(nif)))
            .collect();
        let count = map.len();

        self.dynvars
            .store(Arc::new(dynvars.with_fallback(&self.fallback)));
        self.interfaces.send_modify(|current| *current = Arc::new(map));
        self.last_refresh.send_modify(|at| *at = Some(Utc::now()));

        tracing::debug!(interfaces = count, "applied discovery snapshot");
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn interfaces(&self) -> Arc<InterfaceMap> {
        self.interfaces.borrow().clone()
    }

    /// Look up an interface by store key, falling back to the first
    /// interface with that plain name.
    pub fn interface(&self, key_or_name: &str) -> Option<Arc<NetworkInterface>> {
        let map = self.interfaces();
        map.get(key_or_name)
            .or_else(|| map.values().find(|nif| nif.name == key_or_name))
            .cloned()
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.borrow().len()
    }

    pub fn dynvars(&self) -> Arc<DynVars> {
        self.dynvars.load_full()
    }

    /// View models of all interfaces, in discovery order.
    pub fn views(&self) -> Vec<InterfaceView> {
        self.interfaces()
            .values()
            .map(|nif| project_interface(nif))
            .collect()
    }

    /// A branding resolver over the current DynVars.
    pub fn branding(&self) -> BrandingResolver {
        BrandingResolver::new(self.dynvars(), Arc::clone(&self.ids))
    }

    pub fn ids(&self) -> &Arc<IdAllocator> {
        &self.ids
    }

    // ── Subscriptions / metadata ─────────────────────────────────────

    pub fn subscribe(&self) -> InterfaceStream {
        InterfaceStream::new(self.interfaces.subscribe())
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(IdAllocator::global())
    }
}
