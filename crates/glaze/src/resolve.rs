//! Pure mapping from style descriptions to declarations.
//!
//! Keys go through the theme's aliases, then its shorthands. Keys the theme
//! does not know are used verbatim. Nested values are skipped: selector and
//! media-query support does not exist yet. So are values with no CSS text,
//! such as null or arrays loaded from JSON.

use tracing::trace;

use crate::style::{Declaration, StyleDescription};
use crate::theme::Theme;

/// Expands a description into ordered declarations.
///
/// Order follows the description's keys, then each shorthand's expansion.
///
/// # Example
///
/// ```rust
/// use glaze::{resolve, Declaration, StyleDescription, Theme};
///
/// let theme = Theme::new()
///     .alias("px", "paddingX")
///     .shorthand("paddingX", ["paddingLeft", "paddingRight"]);
/// let style = StyleDescription::new().set("px", 2).set("color", "red");
///
/// assert_eq!(
///     resolve::declarations(&theme, &style),
///     vec![
///         Declaration::new("paddingLeft", "2"),
///         Declaration::new("paddingRight", "2"),
///         Declaration::new("color", "red"),
///     ]
/// );
/// ```
pub fn declarations(theme: &Theme, style: &StyleDescription) -> Vec<Declaration> {
    let mut out = Vec::with_capacity(style.len());

    for (key, value) in style.iter() {
        let Some(css) = value.as_css() else {
            trace!(target: "glaze", key, "skipping style value without css text");
            continue;
        };

        let property = theme.resolve_alias(key);
        for target in theme.expand(property) {
            out.push(Declaration::new(target, css.as_str()));
        }
    }

    out
}
