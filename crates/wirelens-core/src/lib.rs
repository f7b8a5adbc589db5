//! View layer for network-namespace discovery results.
//!
//! This crate turns discovered interface records into what a front end
//! renders, and owns the small pieces of shared UI state that have to stay
//! consistent while discovery data changes:
//!
//! - **Projection** ([`view`]): pure mapping from a [`NetworkInterface`] to
//!   an [`InterfaceView`]: one [`IconVariant`] from the SR-IOV role, plus an
//!   optional VXLAN block and an optional TUN/TAP block (processes sorted by
//!   PID, rows keyed by interface and PID).
//!
//! - **[`BrandingResolver`]**: brand name and inline icon markup from the
//!   session's [`DynVars`], with built-in fallbacks.
//!
//! - **[`IdAllocator`] / [`LazyId`]**: monotonic, never-reused identifiers;
//!   a `LazyId` computes its id once and keeps it.
//!
//! - **[`RefreshSignal`]**: single-slot refresh request shared by any
//!   number of triggers and observed by the [`DiscoveryPoller`].
//!
//! - **[`SnapshotStore`]**: latest discovery snapshot, replaced wholesale,
//!   with `watch`-based subscriptions.

pub mod branding;
pub mod error;
pub mod ids;
pub mod model;
pub mod poller;
pub mod refresh;
pub mod source;
pub mod store;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use branding::{BrandIcon, BrandingResolver, DEFAULT_BRAND, DEFAULT_FILL};
pub use error::CoreError;
pub use ids::{DEFAULT_PREFIX, IdAllocator, LazyId, StableId};
pub use poller::DiscoveryPoller;
pub use refresh::{RefreshObserver, RefreshSignal};
pub use source::{DiscoverySource, JsonFileSource, StaticSource};
pub use store::{InterfaceMap, SnapshotStore, interface_key};
pub use stream::InterfaceStream;

pub use model::{
    Containee, DiscoverySnapshot, DynVars, InterfaceKind, NetworkInterface, Processor, SriovRole,
    TunTapDetails, VxlanDetails,
};
pub use view::{
    ArpProxyState, DetailBlock, IconVariant, InterfaceView, ProcessView, TunTapDetailView,
    VxlanDetailView, project_all, project_interface,
};
