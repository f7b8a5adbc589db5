// ── Dynamic branding ──
//
// Brand name and icon come from the session's DynVars when configured and
// fall back to built-in defaults otherwise. Custom icon markup is inlined,
// so its internal ids are rewritten per render to keep several copies in
// one document from colliding.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};
use serde::Serialize;

use crate::ids::IdAllocator;
use crate::model::DynVars;

/// Brand name shown when DynVars configure none.
pub const DEFAULT_BRAND: &str = "Wirelens";

/// Fill applied to the root of custom icon markup unless overridden.
pub const DEFAULT_FILL: &str = "currentColor";

/// Markup of the built-in brand icon.
pub const BUILTIN_ICON_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">"#,
    r#"<circle cx="12" cy="12" r="3"/>"#,
    r#"<path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 2a8 8 0 1 1 0 16 8 8 0 0 1 0-16z"/>"#,
    "</svg>",
);

/// Prefix for the per-render id namespace of custom icons.
const ICON_ID_PREFIX: &str = "brandicon-";

static ID_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(^|\s)id\s*=\s*(?:"([^"]+)"|'([^']+)')"#).expect("id attribute pattern")
});

/// `url(#id)` with the id optionally wrapped in `'`, `"` or `&quot;`.
/// Group 1 is everything up to the `#`, group 2 the id.
static URL_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(url\(\s*(?:'|"|&quot;)?)#([^)'"&\s]+)"#).expect("url() reference pattern")
});

static HREF_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"((?:^|\s)(?:xlink:)?href\s*=\s*)(?:"#([^"]+)"|'#([^']+)')"##)
        .expect("href reference pattern")
});

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(<style\b[^>]*>)(.*?)(</style>)").expect("style block pattern")
});

static CSS_ID_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([A-Za-z_][\w-]*)").expect("css id selector pattern"));

static ROOT_SVG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").expect("root svg pattern"));

static FILL_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+fill\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("fill attribute pattern")
});

/// Resolved brand icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum BrandIcon {
    /// Inline markup from DynVars, ids rewritten and fill applied.
    Custom { markup: String },
    /// The built-in default icon.
    Builtin,
}

impl BrandIcon {
    pub fn markup(&self) -> &str {
        match self {
            Self::Custom { markup } => markup,
            Self::Builtin => BUILTIN_ICON_SVG,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

/// Resolves brand text and icon from one DynVars snapshot.
#[derive(Debug, Clone)]
pub struct BrandingResolver {
    dynvars: Arc<DynVars>,
    ids: Arc<IdAllocator>,
}

impl BrandingResolver {
    pub fn new(dynvars: Arc<DynVars>, ids: Arc<IdAllocator>) -> Self {
        Self { dynvars, ids }
    }

    /// Configured brand name, or [`DEFAULT_BRAND`].
    pub fn brand_text(&self) -> &str {
        self.dynvars.brand().unwrap_or(DEFAULT_BRAND)
    }

    /// Configured brand icon, or [`BrandIcon::Builtin`].
    ///
    /// `fill` overrides [`DEFAULT_FILL`] on custom markup. Every call
    /// renders a fresh copy with its own id namespace.
    pub fn brand_icon(&self, fill: Option<&str>) -> BrandIcon {
        let Some(markup) = self.dynvars.brand_icon() else {
            return BrandIcon::Builtin;
        };
        let namespace = format!("{}-", self.ids.allocate(ICON_ID_PREFIX));
        let markup = uniquify_ids(markup, &namespace);
        let markup = apply_root_fill(&markup, fill.unwrap_or(DEFAULT_FILL));
        BrandIcon::Custom { markup }
    }
}

/// Prefix every `id` declared in `markup`, and every in-document reference
/// to one, with `namespace`.
///
/// References are `url(#…)` in any quoting, `href`/`xlink:href` fragments,
/// and `#id` selectors inside `<style>` blocks. References to ids not
/// declared in the markup are left alone.
pub fn uniquify_ids(markup: &str, namespace: &str) -> String {
    let declared: HashSet<&str> = ID_ATTR
        .captures_iter(markup)
        .filter_map(|c| c.get(2).or_else(|| c.get(3)))
        .map(|m| m.as_str())
        .collect();
    if declared.is_empty() {
        return markup.to_owned();
    }

    let renamed = ID_ATTR.replace_all(markup, |c: &Captures<'_>| {
        let id = c.get(2).or_else(|| c.get(3)).map_or("", |m| m.as_str());
        format!(r#"{}id="{namespace}{id}""#, &c[1])
    });

    let renamed = STYLE_BLOCK.replace_all(&renamed, |c: &Captures<'_>| {
        let body = CSS_ID_SELECTOR.replace_all(&c[2], |s: &Captures<'_>| {
            let id = &s[1];
            if declared.contains(id) {
                format!("#{namespace}{id}")
            } else {
                s[0].to_owned()
            }
        });
        format!("{}{body}{}", &c[1], &c[3])
    });

    let renamed = URL_REF.replace_all(&renamed, |c: &Captures<'_>| {
        let id = &c[2];
        if declared.contains(id) {
            format!("{}#{namespace}{id}", &c[1])
        } else {
            c[0].to_owned()
        }
    });

    HREF_REF
        .replace_all(&renamed, |c: &Captures<'_>| {
            let id = c.get(2).or_else(|| c.get(3)).map_or("", |m| m.as_str());
            if declared.contains(id) {
                format!(r##"{}"#{namespace}{id}""##, &c[1])
            } else {
                c[0].to_owned()
            }
        })
        .into_owned()
}

/// Set `fill` on the first `<svg …>` tag, replacing any fill it carries.
/// Markup without an `<svg>` tag is returned unchanged.
pub fn apply_root_fill(markup: &str, fill: &str) -> String {
    let Some(tag) = ROOT_SVG.find(markup) else {
        return markup.to_owned();
    };
    let cleaned = FILL_ATTR.replace_all(tag.as_str(), "");
    let rest = cleaned.strip_prefix("<svg").unwrap_or(&cleaned);
    let fill = fill.replace('"', "&quot;");
    format!(
        r#"{}<svg fill="{fill}"{rest}{}"#,
        &markup[..tag.start()],
        &markup[tag.end()..]
    )
}
