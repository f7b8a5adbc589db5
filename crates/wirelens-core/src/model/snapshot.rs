// ── Discovery snapshot wire format ──

use serde::{Deserialize, Serialize};

use super::{DynVars, NetworkInterface};

/// One complete discovery result: every interface, in discovery order,
/// plus the session's DynVars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverySnapshot {
    #[serde(default)]
    pub interfaces: Vec<NetworkInterface>,
    #[serde(default, skip_serializing_if = "DynVars::is_empty")]
    pub dynvars: DynVars,
}

impl DiscoverySnapshot {
    pub fn new(interfaces: Vec<NetworkInterface>) -> Self {
        Self {
            interfaces,
            dynvars: DynVars::default(),
        }
    }

    pub fn with_dynvars(mut self, dynvars: DynVars) -> Self {
        self.dynvars = dynvars;
        self
    }
}
