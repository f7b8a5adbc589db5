//! Config subcommand handlers.

use wirelens_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: write a starter config ────────────────────────────
        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let mut cfg = Config::default();
            cfg.source.snapshot.clone_from(&global.snapshot);
            let written = config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!("Config written to {}", written.display());
            }
            Ok(())
        }

        // ── Show: resolved config (file + environment) ──────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let format = output::resolve_format(global, &cfg);
            let toml = toml::to_string_pretty(&cfg).map_err(config::ConfigError::from)?;
            let out = output::render_single(
                &format,
                &cfg,
                |_| toml.trim_end().to_owned(),
                |_| toml.trim_end().to_owned(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
