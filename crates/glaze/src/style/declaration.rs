//! Normalized CSS declarations.

use std::fmt;

/// A single `property:value` pair after alias and shorthand expansion.
///
/// Its [`Display`](fmt::Display) form is the normalized key used for static
/// index lookups and for hashing dynamic class names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Returns the normalized `property:value` string.
    pub fn normalized(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_has_no_spaces_around_colon() {
        let decl = Declaration::new("marginTop", "4px");
        assert_eq!(decl.normalized(), "marginTop:4px");
    }

    #[test]
    fn test_value_spaces_are_kept() {
        let decl = Declaration::new("border", "1px solid red");
        assert_eq!(decl.normalized(), "border:1px solid red");
    }
}
