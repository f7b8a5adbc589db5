// ── SR-IOV role → icon variant ──

use serde::Serialize;

use crate::model::{NetworkInterface, SriovRole};

/// Visual representation of an interface's SR-IOV role.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum IconVariant {
    #[default]
    #[strum(serialize = "none")]
    None,
    #[serde(rename = "pf")]
    #[strum(serialize = "pf")]
    PhysicalFunction,
    #[serde(rename = "vf")]
    #[strum(serialize = "vf")]
    VirtualFunction,
}

impl IconVariant {
    /// Human-readable label for tooltips and legends.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "network interface",
            Self::PhysicalFunction => "SR-IOV physical function",
            Self::VirtualFunction => "SR-IOV virtual function",
        }
    }
}

/// Roles with a dedicated icon. Everything else renders as [`IconVariant::None`].
static ROLE_ICONS: &[(SriovRole, IconVariant)] = &[
    (SriovRole::PhysicalFunction, IconVariant::PhysicalFunction),
    (SriovRole::VirtualFunction, IconVariant::VirtualFunction),
];

/// Resolve the icon variant for an SR-IOV role. Total: never fails.
pub fn icon_for_role(role: SriovRole) -> IconVariant {
    ROLE_ICONS
        .iter()
        .find_map(|&(r, icon)| (r == role).then_some(icon))
        .unwrap_or_default()
}

/// Resolve the icon variant for an interface.
pub fn resolve_icon(nif: &NetworkInterface) -> IconVariant {
    icon_for_role(nif.sriov_role)
}
