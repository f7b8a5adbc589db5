// ── Discovery domain model ──
//
// Read-only records handed over by the discovery collaborator. The view
// layer never mutates them; projections borrow and copy what they need.

pub mod dynvars;
pub mod interface;
pub mod snapshot;

// ── Re-exports ──────────────────────────────────────────────────────

pub use dynvars::{BRAND_ICON_KEY, BRAND_KEY, DynVars};
pub use interface::{
    Containee, InterfaceKind, NetworkInterface, Processor, SriovRole, TunTapDetails,
    VxlanDetails,
};
pub use snapshot::DiscoverySnapshot;
