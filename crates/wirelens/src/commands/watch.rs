//! Watch mode: re-render the interface list on every refresh.
//!
//! A line on stdin (Enter) requests a refresh, as does the optional
//! interval timer. Both feed the same [`RefreshSignal`], so a burst of
//! requests coalesces into one discovery cycle.

use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use tokio_stream::StreamExt;
use tokio_util::sync::CancellationToken;
use wirelens_core::{DiscoveryPoller, InterfaceMap, RefreshSignal, project_all};

use crate::cli::{GlobalOpts, OutputFormat, WatchArgs};
use crate::error::CliError;
use crate::output;

use super::{Session, interfaces};

pub async fn handle(session: Session, args: WatchArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let source = session.source()?;
    let format = session.format(global);
    let color = session.color(global);
    let interval = args.interval.map_or_else(
        || session.config.defaults.refresh_interval(),
        Duration::from_secs,
    );

    // An unreadable snapshot fails the command before the loop starts.
    session.load()?;
    let mut renders: u64 = 1;
    render(&session, &session.store.interfaces(), &format, color, global.quiet);
    if args.count.is_some_and(|limit| renders >= limit) {
        return Ok(());
    }

    let mut updates = session.store.subscribe().into_stream();
    let signal = RefreshSignal::new();
    spawn_stdin_trigger(signal.clone());

    let cancel = CancellationToken::new();
    let poller = DiscoveryPoller::new(source, Arc::clone(&session.store), signal)
        .with_interval(interval);
    let poller_task = tokio::spawn(poller.run(cancel.clone()));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("interrupted");
                break;
            }
            update = updates.next() => {
                let Some(snapshot) = update else {
                    break;
                };
                renders += 1;
                render(&session, &snapshot, &format, color, global.quiet);
                if args.count.is_some_and(|limit| renders >= limit) {
                    break;
                }
            }
        }
    }

    cancel.cancel();
    poller_task
        .await
        .map_err(|e| CliError::Internal(format!("discovery poller failed: {e}")))
}

/// Request a refresh for every line read from stdin.
///
/// Runs on a plain thread: a blocking stdin read must not hold up runtime
/// shutdown. EOF only ends manual triggers, not the watch.
fn spawn_stdin_trigger(signal: RefreshSignal) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            if line.is_err() {
                break;
            }
            signal.request();
        }
        tracing::debug!("stdin closed, manual refresh disabled");
    });
}

fn render(
    session: &Session,
    snapshot: &InterfaceMap,
    format: &OutputFormat,
    color: bool,
    quiet: bool,
) {
    let views = project_all(snapshot.values().map(|nif| &**nif));
    let body = interfaces::render_views(&views, format, color);
    let out = match format {
        OutputFormat::Table => format!("{}\n{body}", header(session, views.len())),
        _ => body,
    };
    output::print_output(&out, quiet);
}

fn header(session: &Session, count: usize) -> String {
    let refreshed = session
        .store
        .last_refresh()
        .map_or_else(|| "-".into(), |at| at.format("%H:%M:%S UTC").to_string());
    format!(
        "{} | {count} interfaces | refreshed {refreshed}",
        session.store.branding().brand_text()
    )
}
