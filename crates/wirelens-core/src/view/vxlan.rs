// ── VXLAN detail projection ──

use serde::Serialize;

use crate::model::NetworkInterface;

/// Display state of the VXLAN ARP proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArpProxyState {
    Enabled,
    Disabled,
}

impl From<bool> for ArpProxyState {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// VXLAN detail block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VxlanDetailView {
    /// Segment id, passed through unchanged (no range check).
    pub vid: i64,
    pub arp_proxy: ArpProxyState,
}

impl VxlanDetailView {
    /// Labelled lines in display order.
    pub fn lines(&self) -> [String; 2] {
        [
            format!("VXLAN ID: {}", self.vid),
            format!("VXLAN arp proxy: {}", self.arp_proxy),
        ]
    }
}

/// Project the VXLAN block of an interface, if it has VXLAN details.
pub fn project_vxlan(nif: &NetworkInterface) -> Option<VxlanDetailView> {
    nif.vxlan_details.map(|details| VxlanDetailView {
        vid: details.vid,
        arp_proxy: details.arp_proxy.into(),
    })
}
