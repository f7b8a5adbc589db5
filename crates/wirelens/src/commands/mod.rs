//! Command dispatch: bridges CLI args -> snapshot store -> output formatting.

pub mod brand;
pub mod config_cmd;
pub mod interfaces;
pub mod watch;

use std::sync::Arc;

use wirelens_config::Config;
use wirelens_core::{DiscoverySource, JsonFileSource, SnapshotStore};

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Everything a snapshot-bound command needs: resolved config, the store,
/// and the discovery source (if one is configured).
pub struct Session {
    pub config: Config,
    pub store: Arc<SnapshotStore>,
    source: Option<Arc<JsonFileSource>>,
}

impl Session {
    pub fn open(global: &GlobalOpts) -> Self {
        let config = wirelens_config::load_config().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unusable config file, using defaults");
            Config::default()
        });
        let store = Arc::new(SnapshotStore::default().with_fallback(config.dynvars.clone()));
        let source = config
            .snapshot_path(global.snapshot.as_deref())
            .map(|path| Arc::new(JsonFileSource::new(path)));
        Self {
            config,
            store,
            source,
        }
    }

    /// The configured discovery source, or a usage error naming where to
    /// configure one.
    pub fn source(&self) -> Result<Arc<dyn DiscoverySource>, CliError> {
        match &self.source {
            Some(source) => Ok(Arc::clone(source) as Arc<dyn DiscoverySource>),
            None => Err(CliError::NoSnapshot {
                config_path: wirelens_config::config_path().display().to_string(),
            }),
        }
    }

    /// Fetch one snapshot and apply it to the store.
    pub fn load(&self) -> Result<(), CliError> {
        let source = self.source()?;
        tracing::debug!(source = %source.describe(), "loading discovery snapshot");
        let snapshot = source.fetch()?;
        self.store.apply(snapshot);
        Ok(())
    }

    /// Like [`Session::load`], but without a configured source the store
    /// keeps only the configured fallback DynVars.
    pub fn load_if_configured(&self) -> Result<(), CliError> {
        if self.source.is_none() {
            tracing::debug!("no discovery snapshot configured, using config fallbacks");
            return Ok(());
        }
        self.load()
    }

    pub fn format(&self, global: &GlobalOpts) -> OutputFormat {
        output::resolve_format(global, &self.config)
    }

    pub fn color(&self, global: &GlobalOpts) -> bool {
        output::should_color(global, &self.config)
    }
}

/// Dispatch a snapshot-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, session: Session, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Interfaces(args) => interfaces::handle(&session, args, global),
        Command::Brand(args) => brand::handle(&session, args, global),
        Command::Watch(args) => watch::handle(session, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
