// ── TUN/TAP detail projection ──
//
// Lists the processes holding a TUN/TAP device open, ascending by PID.
// Each row gets a key derived from the interface name and PID so rows stay
// distinct when several interfaces' blocks are merged into one list.

use serde::Serialize;

use crate::model::{Containee, NetworkInterface};

/// One process row in a TUN/TAP block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessView {
    pub key: String,
    pub pid: u32,
    pub cmdline: String,
    /// `None` means the process is not containerized.
    pub containee: Option<Containee>,
}

/// TUN/TAP detail block. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TunTapDetailView {
    pub processes: Vec<ProcessView>,
}

impl TunTapDetailView {
    pub fn pids(&self) -> Vec<u32> {
        self.processes.iter().map(|p| p.pid).collect()
    }
}

/// Row key for a process of an interface.
pub fn process_key(interface: &str, pid: u32) -> String {
    format!("{interface}-{pid}")
}

/// Project the TUN/TAP block of an interface.
///
/// Returns `None` when the interface has no TUN/TAP details or when no
/// process is attached.
pub fn project_tuntap(nif: &NetworkInterface) -> Option<TunTapDetailView> {
    let details = nif.tuntap_details.as_ref()?;
    if details.processors.is_empty() {
        return None;
    }

    let mut processes: Vec<ProcessView> = details
        .processors
        .iter()
        .map(|p| ProcessView {
            key: process_key(&nif.name, p.pid),
            pid: p.pid,
            cmdline: p.cmdline.clone(),
            containee: p.containee.clone(),
        })
        .collect();
    processes.sort_by_key(|p| p.pid);

    Some(TunTapDetailView { processes })
}
