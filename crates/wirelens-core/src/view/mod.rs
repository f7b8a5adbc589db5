// ── Display projection ──
//
// Pure mapping from discovered interface records to what a front end
// renders: one icon per interface plus zero or more detail blocks in a
// fixed order (VXLAN first, then TUN/TAP).

pub mod icon;
pub mod tuntap;
pub mod vxlan;

use serde::Serialize;

use crate::model::{InterfaceKind, NetworkInterface};

pub use icon::{IconVariant, icon_for_role, resolve_icon};
pub use tuntap::{ProcessView, TunTapDetailView, process_key, project_tuntap};
pub use vxlan::{ArpProxyState, VxlanDetailView, project_vxlan};

/// A detail block attached to an interface view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "lowercase")]
pub enum DetailBlock {
    Vxlan(VxlanDetailView),
    TunTap(TunTapDetailView),
}

/// Everything a front end needs to render one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceView {
    pub name: String,
    pub kind: InterfaceKind,
    pub icon: IconVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netns_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vxlan: Option<VxlanDetailView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuntap: Option<TunTapDetailView>,
}

impl InterfaceView {
    /// Detail blocks in render order.
    pub fn details(&self) -> Vec<DetailBlock> {
        let mut blocks = Vec::with_capacity(2);
        if let Some(vxlan) = self.vxlan {
            blocks.push(DetailBlock::Vxlan(vxlan));
        }
        if let Some(tuntap) = &self.tuntap {
            blocks.push(DetailBlock::TunTap(tuntap.clone()));
        }
        blocks
    }

    pub fn has_details(&self) -> bool {
        self.vxlan.is_some() || self.tuntap.is_some()
    }
}

impl From<&NetworkInterface> for InterfaceView {
    fn from(nif: &NetworkInterface) -> Self {
        project_interface(nif)
    }
}

/// Run one interface through the icon resolver and every projector.
pub fn project_interface(nif: &NetworkInterface) -> InterfaceView {
    InterfaceView {
        name: nif.name.clone(),
        kind: nif.kind,
        icon: resolve_icon(nif),
        netns_id: nif.netns_id,
        vxlan: project_vxlan(nif),
        tuntap: project_tuntap(nif),
    }
}

/// Project a whole collection, preserving its order.
pub fn project_all<'a, I>(interfaces: I) -> Vec<InterfaceView>
where
    I: IntoIterator<Item = &'a NetworkInterface>,
{
    interfaces.into_iter().map(project_interface).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Processor, SriovRole, TunTapDetails, VxlanDetails};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn virtual_function_has_icon_and_no_blocks() {
        let nif: NetworkInterface =
            serde_json::from_value(json!({ "name": "vf0", "sriovRole": "VirtualFunction" }))
                .unwrap();
        let view = project_interface(&nif);
        assert_eq!(view.icon, IconVariant::VirtualFunction);
        assert!(view.vxlan.is_none());
        assert!(view.tuntap.is_none());
        assert!(view.details().is_empty());
    }

    #[test]
    fn vxlan_interface_renders_vxlan_block() {
        let nif: NetworkInterface = serde_json::from_value(json!({
            "name": "vxlan0",
            "vxlanDetails": { "vid": 42, "arpProxy": false },
        }))
        .unwrap();
        let view = project_interface(&nif);
        assert_eq!(view.icon, IconVariant::None);
        match view.details().as_slice() {
            [DetailBlock::Vxlan(vxlan)] => {
                assert_eq!(vxlan.lines(), ["VXLAN ID: 42", "VXLAN arp proxy: disabled"]);
            }
            other => panic!("unexpected blocks: {other:?}"),
        }
    }

    #[test]
    fn blocks_follow_fixed_order() {
        let mut nif = NetworkInterface::new("odd0", InterfaceKind::Other);
        nif.sriov_role = SriovRole::PhysicalFunction;
        nif.tuntap_details = Some(TunTapDetails {
            processors: vec![Processor {
                pid: 1,
                cmdline: "init".into(),
                containee: None,
            }],
        });
        nif.vxlan_details = Some(VxlanDetails {
            vid: 1,
            arp_proxy: true,
        });

        let kinds: Vec<&str> = project_interface(&nif)
            .details()
            .iter()
            .map(|b| match b {
                DetailBlock::Vxlan(_) => "vxlan",
                DetailBlock::TunTap(_) => "tuntap",
            })
            .collect();
        assert_eq!(kinds, vec!["vxlan", "tuntap"]);
    }

    #[test]
    fn project_all_preserves_order() {
        let nifs = vec![
            NetworkInterface::new("b", InterfaceKind::Veth),
            NetworkInterface::new("a", InterfaceKind::Bridge),
        ];
        let names: Vec<String> = project_all(&nifs).into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn view_serializes_camel_case() {
        let mut nif = NetworkInterface::new("vxlan0", InterfaceKind::Vxlan);
        nif.vxlan_details = Some(VxlanDetails {
            vid: 7,
            arp_proxy: true,
        });
        let value = serde_json::to_value(project_interface(&nif)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "vxlan0",
                "kind": "vxlan",
                "icon": "none",
                "vxlan": { "vid": 7, "arpProxy": "enabled" },
            })
        );
    }
}
