//! Single parameters and their kinds.

use std::fmt;

/// How a parameter may be bound at a call site.
///
/// Variants are declared in canonical order; within one signature the kinds
/// of consecutive parameters never decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterKind {
    /// Bound by position only.
    PositionalOnly,
    /// Bound by position or by name.
    PositionalOrKeyword,
    /// `*args`: absorbs surplus positional arguments.
    VariadicPositional,
    /// Bound by name only.
    KeywordOnly,
    /// `**kwargs`: absorbs keywords that name no other parameter.
    VariadicKeyword,
}

impl ParameterKind {
    /// `true` for the two kinds that occupy a positional slot.
    pub const fn is_positional(self) -> bool {
        matches!(self, Self::PositionalOnly | Self::PositionalOrKeyword)
    }

    /// `true` for the two kinds that can be named at the call site.
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::PositionalOrKeyword | Self::KeywordOnly)
    }

    /// `true` for `*args` and `**kwargs`.
    pub const fn is_variadic(self) -> bool {
        matches!(self, Self::VariadicPositional | Self::VariadicKeyword)
    }
}

/// A named parameter of a signature.
///
/// # Examples
///
/// ```rust
/// use lazyfn::signature::{Parameter, ParameterKind};
///
/// let modulus = Parameter::positional_only("mod").with_default();
/// assert_eq!(modulus.kind(), ParameterKind::PositionalOnly);
/// assert!(modulus.is_optional());
/// assert!(Parameter::variadic_positional("args").is_optional());
/// assert!(!Parameter::keyword_only("key").is_optional());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    name: String,
    kind: ParameterKind,
    #[cfg_attr(feature = "serde", serde(default))]
    has_default: bool,
}

impl Parameter {
    /// A parameter of any kind, without a default.
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            has_default: false,
        }
    }

    /// `name, /`
    pub fn positional_only(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::PositionalOnly)
    }

    /// `name`
    pub fn positional_or_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::PositionalOrKeyword)
    }

    /// `*name`
    pub fn variadic_positional(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::VariadicPositional)
    }

    /// `*, name`
    pub fn keyword_only(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::KeywordOnly)
    }

    /// `**name`
    pub fn variadic_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::VariadicKeyword)
    }

    /// The same parameter, now carrying a default value.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// The same parameter with another kind.
    #[must_use]
    pub(crate) fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    pub(crate) const fn set_default(mut self, has_default: bool) -> Self {
        self.has_default = has_default;
        self
    }

    /// The parameter's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter's kind.
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Whether a default value is declared.
    pub const fn has_default(&self) -> bool {
        self.has_default
    }

    /// Whether the call may leave this parameter unbound.
    pub const fn is_optional(&self) -> bool {
        self.has_default || self.kind.is_variadic()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParameterKind::VariadicPositional => write!(formatter, "*{}", self.name),
            ParameterKind::VariadicKeyword => write!(formatter, "**{}", self.name),
            _ if self.has_default => write!(formatter, "{}=…", self.name),
            _ => formatter.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParameterKind::PositionalOnly, ParameterKind::PositionalOrKeyword)]
    #[case(ParameterKind::PositionalOrKeyword, ParameterKind::VariadicPositional)]
    #[case(ParameterKind::VariadicPositional, ParameterKind::KeywordOnly)]
    #[case(ParameterKind::KeywordOnly, ParameterKind::VariadicKeyword)]
    fn kinds_are_canonically_ordered(#[case] earlier: ParameterKind, #[case] later: ParameterKind) {
        assert!(earlier < later);
    }

    #[rstest]
    #[case(Parameter::positional_only("x"), "x")]
    #[case(Parameter::keyword_only("key").with_default(), "key=…")]
    #[case(Parameter::variadic_positional("args"), "*args")]
    #[case(Parameter::variadic_keyword("kwargs"), "**kwargs")]
    fn display(#[case] parameter: Parameter, #[case] expected: &str) {
        assert_eq!(parameter.to_string(), expected);
    }

    #[rstest]
    fn kind_predicates() {
        assert!(ParameterKind::PositionalOrKeyword.is_positional());
        assert!(ParameterKind::PositionalOrKeyword.is_keyword());
        assert!(!ParameterKind::PositionalOnly.is_keyword());
        assert!(ParameterKind::VariadicKeyword.is_variadic());
    }
}
