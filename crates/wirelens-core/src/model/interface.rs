// ── Network interface domain types ──
//
// Records arrive from the discovery collaborator in a heterogeneous,
// partially-populated shape. Decoding is lenient: unknown kinds and roles
// map to explicit catch-all variants instead of failing the whole snapshot.

use serde::{Deserialize, Deserializer, Serialize};

/// Interface kind as reported by discovery.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum InterfaceKind {
    Physical,
    Veth,
    Bridge,
    Vxlan,
    #[serde(alias = "tun", alias = "tap")]
    TunTap,
    Macvlan,
    #[default]
    #[serde(other)]
    Other,
}

/// SR-IOV role of an interface.
///
/// Absent and `null` decode to [`SriovRole::None`]. Anything the decoder
/// does not recognize lands in [`SriovRole::Unrecognized`], which display
/// code treats like `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum SriovRole {
    #[default]
    None,
    PhysicalFunction,
    VirtualFunction,
    Unrecognized,
}

impl SriovRole {
    /// Map a textual role tag. Accepts the long names and the usual
    /// `pf`/`vf` abbreviations, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Self::None,
            "physicalfunction" | "physical_function" | "pf" => Self::PhysicalFunction,
            "virtualfunction" | "virtual_function" | "vf" => Self::VirtualFunction,
            _ => Self::Unrecognized,
        }
    }

    /// Map a numeric role code (0 = none, 1 = PF, 2 = VF).
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::None,
            1 => Self::PhysicalFunction,
            2 => Self::VirtualFunction,
            _ => Self::Unrecognized,
        }
    }
}

impl<'de> Deserialize<'de> for SriovRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Tag(String),
            Code(i64),
            Other(serde_json::Value),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            None => Self::None,
            Some(Raw::Tag(tag)) => Self::from_tag(&tag),
            Some(Raw::Code(code)) => Self::from_code(code),
            Some(Raw::Other(_)) => Self::Unrecognized,
        })
    }
}

/// VXLAN-specific attributes.
///
/// `vid` is carried as reported, without range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VxlanDetails {
    pub vid: i64,
    #[serde(default)]
    pub arp_proxy: bool,
}

/// TUN/TAP-specific attributes: the processes holding the device open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TunTapDetails {
    #[serde(default)]
    pub processors: Vec<Processor>,
}

/// A process attached to a TUN/TAP device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processor {
    pub pid: u32,
    #[serde(default, deserialize_with = "deserialize_cmdline")]
    pub cmdline: String,
    #[serde(default)]
    pub containee: Option<Containee>,
}

/// The container (or other namespace owner) a process belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Containee {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Containee {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl std::fmt::Display for Containee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind.as_deref() {
            Some(kind) if !kind.is_empty() => write!(f, "{} ({kind})", self.name),
            _ => f.write_str(&self.name),
        }
    }
}

impl<'de> Deserialize<'de> for Containee {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Full {
            name: String,
            #[serde(default, rename = "type")]
            kind: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Full(Full),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Name(name) => Self { name, kind: None },
            Raw::Full(Full { name, kind }) => Self { name, kind },
        })
    }
}

/// Command lines arrive either pre-joined or as an argv array.
fn deserialize_cmdline<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Joined(String),
        Argv(Vec<String>),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Joined(s)) => s,
        Some(Raw::Argv(argv)) => argv.join(" "),
    })
}

/// A discovered network interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    pub name: String,
    #[serde(default)]
    pub kind: InterfaceKind,
    #[serde(default)]
    pub sriov_role: SriovRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netns_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vxlan_details: Option<VxlanDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuntap_details: Option<TunTapDetails>,
}

impl NetworkInterface {
    /// A bare interface with no role and no detail sub-structures.
    pub fn new(name: impl Into<String>, kind: InterfaceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            sriov_role: SriovRole::None,
            netns_id: None,
            vxlan_details: None,
            tuntap_details: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_role_decodes_as_none() {
        let nif: NetworkInterface = serde_json::from_value(json!({ "name": "eth0" })).unwrap();
        assert_eq!(nif.sriov_role, SriovRole::None);
        assert_eq!(nif.kind, InterfaceKind::Other);
    }

    #[test]
    fn null_role_decodes_as_none() {
        let nif: NetworkInterface =
            serde_json::from_value(json!({ "name": "eth0", "sriovRole": null })).unwrap();
        assert_eq!(nif.sriov_role, SriovRole::None);
    }

    #[test]
    fn role_tags_and_codes() {
        assert_eq!(SriovRole::from_tag("VirtualFunction"), SriovRole::VirtualFunction);
        assert_eq!(SriovRole::from_tag("PF"), SriovRole::PhysicalFunction);
        assert_eq!(SriovRole::from_tag("bogus"), SriovRole::Unrecognized);
        assert_eq!(SriovRole::from_code(2), SriovRole::VirtualFunction);
        assert_eq!(SriovRole::from_code(99), SriovRole::Unrecognized);
    }

    #[test]
    fn odd_role_shapes_are_unrecognized() {
        let nif: NetworkInterface =
            serde_json::from_value(json!({ "name": "eth0", "sriovRole": { "x": 1 } })).unwrap();
        assert_eq!(nif.sriov_role, SriovRole::Unrecognized);
    }

    #[test]
    fn unknown_kind_is_other() {
        let nif: NetworkInterface =
            serde_json::from_value(json!({ "name": "wg0", "kind": "wireguard" })).unwrap();
        assert_eq!(nif.kind, InterfaceKind::Other);

        let nif: NetworkInterface =
            serde_json::from_value(json!({ "name": "tap0", "kind": "tap" })).unwrap();
        assert_eq!(nif.kind, InterfaceKind::TunTap);
    }

    #[test]
    fn processor_accepts_argv_and_bare_containee() {
        let p: Processor = serde_json::from_value(json!({
            "pid": 42,
            "cmdline": ["qemu-system-x86_64", "-enable-kvm"],
            "containee": "vm-1",
        }))
        .unwrap();
        assert_eq!(p.cmdline, "qemu-system-x86_64 -enable-kvm");
        assert_eq!(p.containee, Some(Containee::new("vm-1")));
    }

    #[test]
    fn containee_display() {
        assert_eq!(Containee::new("web").to_string(), "web");
        assert_eq!(
            Containee::new("web").with_kind("docker").to_string(),
            "web (docker)"
        );
    }

    #[test]
    fn vxlan_details_decode_camel_case() {
        let nif: NetworkInterface = serde_json::from_value(json!({
            "name": "vxlan0",
            "kind": "vxlan",
            "vxlanDetails": { "vid": 42, "arpProxy": true },
        }))
        .unwrap();
        assert_eq!(
            nif.vxlan_details,
            Some(VxlanDetails {
                vid: 42,
                arp_proxy: true
            })
        );
    }
}
