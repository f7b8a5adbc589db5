//! Brand command handlers.

use serde::Serialize;

use wirelens_core::BrandIcon;

use crate::cli::{BrandArgs, BrandCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Session;

#[derive(Serialize)]
struct BrandText<'a> {
    brand: &'a str,
}

#[derive(Serialize)]
struct BrandIconOut<'a> {
    source: &'static str,
    markup: &'a str,
}

impl<'a> From<&'a BrandIcon> for BrandIconOut<'a> {
    fn from(icon: &'a BrandIcon) -> Self {
        Self {
            source: if icon.is_custom() { "custom" } else { "builtin" },
            markup: icon.markup(),
        }
    }
}

pub fn handle(session: &Session, args: BrandArgs, global: &GlobalOpts) -> Result<(), CliError> {
    session.load_if_configured()?;
    let format = session.format(global);
    let branding = session.store.branding();

    let out = match args.command {
        BrandCommand::Text => output::render_single(
            &format,
            &BrandText {
                brand: branding.brand_text(),
            },
            |b| b.brand.to_owned(),
            |b| b.brand.to_owned(),
        ),
        BrandCommand::Icon { fill } => {
            let icon = branding.brand_icon(fill.as_deref());
            tracing::debug!(custom = icon.is_custom(), "resolved brand icon");
            output::render_single(
                &format,
                &BrandIconOut::from(&icon),
                |b| b.markup.to_owned(),
                |b| b.markup.to_owned(),
            )
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
