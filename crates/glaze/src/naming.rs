//! Class name synthesis for dynamic styles.
//!
//! Two strategies exist:
//!
//! - [`ClassNaming::Readable`]: `DYNAMIC_<property>-<value>`, for debugging.
//!   Whitespace becomes `_` so the name stays one class token. Not
//!   collision-free and not covered by the determinism guarantee.
//! - [`ClassNaming::Hashed`]: `d_<hash>`, a base-36 content hash of the
//!   normalized declaration. Equal declarations always yield equal names,
//!   across calls and across processes.
//!
//! The strategy is chosen when a [`GlazeContext`](crate::GlazeContext) is
//! built. [`ClassNaming::from_env`] derives it from the environment.

use once_cell::sync::Lazy;
use xxhash_rust::xxh3::xxh3_64;

use crate::style::Declaration;

/// Prefix of readable dynamic class names.
pub const READABLE_PREFIX: &str = "DYNAMIC_";

/// Prefix of hashed dynamic class names.
pub const HASHED_PREFIX: &str = "d_";

/// Explicit strategy override: `readable` or `hashed`.
pub const CLASS_NAMES_ENV: &str = "GLAZE_CLASS_NAMES";

/// Build mode variables consulted when no override is set, in order.
pub const MODE_ENV: &[&str] = &["GLAZE_ENV", "NODE_ENV"];

static ENV_NAMING: Lazy<ClassNaming> = Lazy::new(ClassNaming::from_env);

/// Strategy used to name dynamic classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassNaming {
    Readable,
    Hashed,
}

impl ClassNaming {
    /// Synthesizes the class name for a declaration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glaze::{ClassNaming, Declaration};
    ///
    /// let decl = Declaration::new("marginTop", "4px");
    /// assert_eq!(ClassNaming::Readable.class_name(&decl), "DYNAMIC_marginTop-4px");
    ///
    /// let hashed = ClassNaming::Hashed.class_name(&decl);
    /// assert!(hashed.starts_with("d_"));
    /// assert_eq!(hashed, ClassNaming::Hashed.class_name(&decl));
    /// ```
    pub fn class_name(&self, declaration: &Declaration) -> String {
        match self {
            ClassNaming::Readable => format!(
                "{}{}-{}",
                READABLE_PREFIX,
                class_token(&declaration.property),
                class_token(&declaration.value)
            ),
            ClassNaming::Hashed => {
                let hash = xxh3_64(declaration.normalized().as_bytes());
                format!("{}{}", HASHED_PREFIX, to_base36(hash))
            }
        }
    }

    /// Reads the strategy from the environment.
    ///
    /// `GLAZE_CLASS_NAMES` wins when set to `readable` or `hashed`. Otherwise
    /// a `GLAZE_ENV` or `NODE_ENV` of `production` selects hashed names, any
    /// other value selects readable names. With nothing set, debug builds use
    /// readable names and release builds hashed names.
    pub fn from_env() -> Self {
        let explicit = std::env::var(CLASS_NAMES_ENV).ok();
        let mode = MODE_ENV.iter().find_map(|name| std::env::var(name).ok());
        Self::from_settings(explicit.as_deref(), mode.as_deref())
    }

    /// The strategy read from the environment once per process.
    pub fn env_default() -> Self {
        *ENV_NAMING
    }

    fn from_settings(explicit: Option<&str>, mode: Option<&str>) -> Self {
        match explicit.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("readable") => return ClassNaming::Readable,
            Some(v) if v.eq_ignore_ascii_case("hashed") => return ClassNaming::Hashed,
            _ => {}
        }

        match mode.map(str::trim) {
            Some(m) if m.eq_ignore_ascii_case("production") => ClassNaming::Hashed,
            Some(_) => ClassNaming::Readable,
            None if cfg!(debug_assertions) => ClassNaming::Readable,
            None => ClassNaming::Hashed,
        }
    }
}

/// Replaces whitespace so the text stays one token in a class attribute.
fn class_token(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Returns true if a class name uses a prefix reserved for dynamic classes.
pub fn is_dynamic_class(class_name: &str) -> bool {
    class_name.starts_with(READABLE_PREFIX) || class_name.starts_with(HASHED_PREFIX)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(13);
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}
