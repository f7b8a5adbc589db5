//! Interface command handlers.

use tabled::Tabled;
use wirelens_core::{DetailBlock, InterfaceView, ProcessView, TunTapDetailView, project_interface};

use crate::cli::{GlobalOpts, InterfacesArgs, InterfacesCommand, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::Session;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Netns")]
    netns: String,
    #[tabled(rename = "Details")]
    details: String,
}

impl InterfaceRow {
    fn new(view: &InterfaceView, color: bool) -> Self {
        Self {
            name: view.name.clone(),
            kind: view.kind.to_string(),
            icon: output::icon_cell(view.icon, color),
            netns: view
                .netns_id
                .map_or_else(|| "-".into(), |id| id.to_string()),
            details: summary(view),
        }
    }
}

#[derive(Tabled)]
struct ProcessRow {
    #[tabled(rename = "PID")]
    pid: u32,
    #[tabled(rename = "Command")]
    cmdline: String,
    #[tabled(rename = "Containee")]
    containee: String,
}

impl From<&ProcessView> for ProcessRow {
    fn from(p: &ProcessView) -> Self {
        Self {
            pid: p.pid,
            cmdline: p.cmdline.clone(),
            containee: p
                .containee
                .as_ref()
                .map_or_else(|| "-".into(), ToString::to_string),
        }
    }
}

/// One-cell digest of an interface's detail blocks.
fn summary(view: &InterfaceView) -> String {
    if !view.has_details() {
        return "-".into();
    }
    view.details()
        .iter()
        .map(|block| match block {
            DetailBlock::Vxlan(vxlan) => format!("vid {} arp proxy {}", vxlan.vid, vxlan.arp_proxy),
            DetailBlock::TunTap(tuntap) => {
                let pids: Vec<String> = tuntap.pids().iter().map(ToString::to_string).collect();
                format!("pids {}", pids.join(","))
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn detail(view: &InterfaceView, color: bool) -> String {
    let mut lines = vec![
        format!("Name:  {}", view.name),
        format!("Kind:  {}", view.kind),
        format!(
            "Icon:  {} ({})",
            output::icon_cell(view.icon, color),
            view.icon.label()
        ),
        format!(
            "Netns: {}",
            view.netns_id
                .map_or_else(|| "-".into(), |id| id.to_string())
        ),
    ];
    for block in view.details() {
        lines.push(String::new());
        match block {
            DetailBlock::Vxlan(vxlan) => lines.extend(vxlan.lines()),
            DetailBlock::TunTap(tuntap) => lines.push(process_table(&tuntap)),
        }
    }
    lines.join("\n")
}

fn process_table(tuntap: &TunTapDetailView) -> String {
    let rows: Vec<ProcessRow> = tuntap.processes.iter().map(ProcessRow::from).collect();
    output::render_table(&rows)
}

/// Whether `view` matches a `--kind` filter. `tun` and `tap` select TUN/TAP.
fn kind_matches(view: &InterfaceView, filter: &str) -> bool {
    let filter = filter.to_ascii_lowercase();
    let wanted = match filter.as_str() {
        "tun" | "tap" => "tuntap",
        other => other,
    };
    view.kind.as_ref() == wanted
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(session: &Session, args: InterfacesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    session.load()?;
    let format = session.format(global);
    let color = session.color(global);

    match args.command {
        InterfacesCommand::List { kind } => {
            let views: Vec<InterfaceView> = session
                .store
                .views()
                .into_iter()
                .filter(|v| kind.as_deref().is_none_or(|k| kind_matches(v, k)))
                .collect();
            output::print_output(&render_views(&views, &format, color), global.quiet);
            Ok(())
        }

        InterfacesCommand::Get { name } => {
            let nif = session
                .store
                .interface(&name)
                .ok_or_else(|| CliError::NotFound {
                    resource_type: "interface".into(),
                    identifier: name.clone(),
                    list_command: "interfaces list".into(),
                })?;
            let view = project_interface(&nif);
            let out = output::render_single(
                &format,
                &view,
                |v| detail(v, color),
                |v| v.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

/// Render interface views as a list in `format`.
pub(crate) fn render_views(views: &[InterfaceView], format: &OutputFormat, color: bool) -> String {
    output::render_list(
        format,
        views,
        |v| InterfaceRow::new(v, color),
        |v| v.name.clone(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wirelens_core::{
        Containee, InterfaceKind, NetworkInterface, Processor, TunTapDetails, VxlanDetails,
    };

    fn tap() -> InterfaceView {
        let mut nif = NetworkInterface::new("tap0", InterfaceKind::TunTap);
        nif.tuntap_details = Some(TunTapDetails {
            processors: vec![
                Processor {
                    pid: 19,
                    cmdline: "qemu".into(),
                    containee: Some(Containee::new("vm1").with_kind("vm")),
                },
                Processor {
                    pid: 3,
                    cmdline: "init".into(),
                    containee: None,
                },
            ],
        });
        project_interface(&nif)
    }

    #[test]
    fn summary_lists_sorted_pids() {
        assert_eq!(summary(&tap()), "pids 3,19");
    }

    #[test]
    fn vxlan_detail_carries_both_lines() {
        let mut nif = NetworkInterface::new("vxlan0", InterfaceKind::Vxlan);
        nif.vxlan_details = Some(VxlanDetails {
            vid: 42,
            arp_proxy: false,
        });
        let text = detail(&project_interface(&nif), false);
        assert!(text.contains("VXLAN ID: 42"));
        assert!(text.contains("VXLAN arp proxy: disabled"));
    }

    #[test]
    fn summary_of_plain_interface_is_dash() {
        let view = project_interface(&NetworkInterface::new("eth0", InterfaceKind::Physical));
        assert_eq!(summary(&view), "-");
    }

    #[test]
    fn detail_renders_vxlan_before_processes() {
        let mut nif = NetworkInterface::new("odd0", InterfaceKind::Other);
        nif.vxlan_details = Some(VxlanDetails {
            vid: 7,
            arp_proxy: true,
        });
        nif.tuntap_details = Some(TunTapDetails {
            processors: vec![Processor {
                pid: 11,
                cmdline: "daemon".into(),
                containee: None,
            }],
        });
        let view = project_interface(&nif);
        assert_eq!(summary(&view), "vid 7 arp proxy enabled; pids 11");

        let text = detail(&view, false);
        let vxlan_at = text.find("VXLAN ID: 7").unwrap();
        let process_at = text.find("daemon").unwrap();
        assert!(vxlan_at < process_at);
    }

    #[test]
    fn process_table_shows_containee() {
        let text = detail(&tap(), false);
        assert!(text.contains("vm1 (vm)"));
        assert!(text.find("init").unwrap() < text.find("qemu").unwrap());
    }

    #[test]
    fn kind_filter_accepts_aliases() {
        let view = tap();
        assert!(kind_matches(&view, "tuntap"));
        assert!(kind_matches(&view, "TAP"));
        assert!(!kind_matches(&view, "vxlan"));
    }
}
