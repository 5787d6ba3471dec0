//! A single parameter list and the binding rules over it.

use std::collections::HashSet;
use std::fmt;

use super::parameter::{Parameter, ParameterKind};
use crate::{Error, Result};

/// An ordered parameter list plus an optional return annotation.
///
/// Construction validates the list: names are unique and non-empty, at most
/// one `*args` and one `**kwargs` exist, and kinds follow the canonical order
/// of [`ParameterKind`].
///
/// # Examples
///
/// ```rust
/// use lazyfn::signature::PlainSignature;
///
/// let signature = PlainSignature::builder()
///     .positional_only("base")
///     .positional_only("exp")
///     .positional_only("mod")
///     .defaulted()
///     .build()
///     .unwrap();
/// assert_eq!(signature.to_string(), "(base, exp, mod=…, /)");
/// assert!(signature.expects(1, &[]));
/// assert!(!signature.all_set(1, &[]));
/// assert!(signature.all_set(2, &[]));
/// assert!(!signature.expects(4, &[]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedSignature"))]
pub struct PlainSignature {
    parameters: Vec<Parameter>,
    returns: Option<String>,
}

/// Where each argument of a call lands.
#[derive(Debug)]
struct Assignment {
    consumed: usize,
    by_keyword: Vec<usize>,
    missing: Vec<String>,
}

impl PlainSignature {
    /// Validates and wraps `parameters`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when a name is empty or repeated, a
    /// variadic kind appears twice, or kinds are out of canonical order.
    pub fn new(parameters: impl IntoIterator<Item = Parameter>) -> Result<Self> {
        let parameters: Vec<Parameter> = parameters.into_iter().collect();
        validate(&parameters)?;
        Ok(Self {
            parameters,
            returns: None,
        })
    }

    /// Starts a [`SignatureBuilder`].
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// `()`
    pub fn empty() -> Self {
        Self::default()
    }

    /// `(*args, **kwargs)`, accepting any call.
    pub fn variadic() -> Self {
        Self {
            parameters: vec![
                Parameter::variadic_positional("args"),
                Parameter::variadic_keyword("kwargs"),
            ],
            returns: None,
        }
    }

    /// The same signature with a return annotation.
    #[must_use]
    pub fn with_returns(mut self, annotation: impl Into<String>) -> Self {
        self.returns = Some(annotation.into());
        self
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The return annotation, if any.
    pub fn returns(&self) -> Option<&str> {
        self.returns.as_deref()
    }

    /// The parameter named `name`.
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.name() == name)
    }

    /// Number of positional slots, excluding `*args`.
    pub fn positional_count(&self) -> usize {
        self.parameters
            .iter()
            .filter(|parameter| parameter.kind().is_positional())
            .count()
    }

    fn has_kind(&self, kind: ParameterKind) -> bool {
        self.parameters.iter().any(|parameter| parameter.kind() == kind)
    }

    /// Whether `*args` is declared.
    pub fn accepts_variadic_positional(&self) -> bool {
        self.has_kind(ParameterKind::VariadicPositional)
    }

    /// Whether `**kwargs` is declared.
    pub fn accepts_variadic_keyword(&self) -> bool {
        self.has_kind(ParameterKind::VariadicKeyword)
    }

    pub(crate) fn required_shape(&self) -> Vec<(&str, ParameterKind)> {
        self.parameters
            .iter()
            .filter(|parameter| !parameter.is_optional())
            .map(|parameter| (parameter.name(), parameter.kind()))
            .collect()
    }

    fn assign(&self, positional: usize, keywords: &[&str]) -> Result<Assignment> {
        let slots = self.positional_count();
        if positional > slots && !self.accepts_variadic_positional() {
            return Err(Error::TooManyPositional {
                expected: slots,
                given: positional,
            });
        }
        let consumed = positional.min(slots);
        let mut bound = vec![false; self.parameters.len()];
        self.parameters
            .iter()
            .enumerate()
            .filter(|(_, parameter)| parameter.kind().is_positional())
            .take(consumed)
            .for_each(|(index, _)| bound[index] = true);

        let collects_keywords = self.accepts_variadic_keyword();
        let mut by_keyword = Vec::new();
        for &keyword in keywords {
            let target = self
                .parameters
                .iter()
                .position(|parameter| parameter.name() == keyword && parameter.kind().is_keyword());
            match target {
                Some(index) if bound[index] => {
                    return Err(Error::DuplicateArgument(keyword.to_owned()));
                }
                Some(index) => {
                    bound[index] = true;
                    by_keyword.push(index);
                }
                None if collects_keywords => {}
                None => return Err(Error::UnknownKeyword(keyword.to_owned())),
            }
        }

        let missing = self
            .parameters
            .iter()
            .zip(&bound)
            .filter(|(parameter, bound)| !**bound && !parameter.is_optional())
            .map(|(parameter, _)| parameter.name().to_owned())
            .collect();
        Ok(Assignment {
            consumed,
            by_keyword,
            missing,
        })
    }

    /// Whether `positional` arguments plus `keywords` can be absorbed
    /// without surplus.
    pub fn expects(&self, positional: usize, keywords: &[&str]) -> bool {
        self.assign(positional, keywords).is_ok()
    }

    /// Whether the arguments are absorbed and every required parameter is
    /// bound.
    pub fn all_set(&self, positional: usize, keywords: &[&str]) -> bool {
        self.assign(positional, keywords)
            .is_ok_and(|assignment| assignment.missing.is_empty())
    }

    /// Required parameters the arguments leave unbound.
    ///
    /// # Errors
    ///
    /// The arguments cannot be absorbed (see [`check`](Self::check)).
    pub fn missing(&self, positional: usize, keywords: &[&str]) -> Result<Vec<String>> {
        self.assign(positional, keywords)
            .map(|assignment| assignment.missing)
    }

    /// Call-site validation.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyPositional`], [`Error::UnknownKeyword`],
    /// [`Error::DuplicateArgument`] or [`Error::MissingArguments`].
    pub fn check(&self, positional: usize, keywords: &[&str]) -> Result<()> {
        let assignment = self.assign(positional, keywords)?;
        if assignment.missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingArguments(assignment.missing))
        }
    }

    /// The signature left after binding the first `positional` slots and
    /// the named `keywords`.
    ///
    /// Keyword-bound parameters stay in the residual as keyword-only with a
    /// default, so they may be bound again. Every positional-or-keyword
    /// parameter after a keyword-bound one becomes keyword-only. Surplus
    /// positionals flow into `*args`, which stays.
    ///
    /// # Errors
    ///
    /// As [`check`](Self::check), except that missing parameters are fine.
    pub fn bind(&self, positional: usize, keywords: &[&str]) -> Result<Self> {
        let assignment = self.assign(positional, keywords)?;
        let mut leading = Vec::new();
        let mut variadic = None;
        let mut keyword_only = Vec::new();
        let mut variadic_keyword = None;
        let mut slot = 0;
        let mut demoting = false;

        for (index, parameter) in self.parameters.iter().enumerate() {
            let keyword_bound = assignment.by_keyword.contains(&index);
            match parameter.kind() {
                kind if kind.is_positional() => {
                    slot += 1;
                    if slot <= assignment.consumed {
                        continue;
                    }
                    if keyword_bound {
                        demoting = true;
                        keyword_only.push(
                            parameter
                                .clone()
                                .with_kind(ParameterKind::KeywordOnly)
                                .with_default(),
                        );
                    } else if demoting {
                        keyword_only.push(parameter.clone().with_kind(ParameterKind::KeywordOnly));
                    } else {
                        leading.push(parameter.clone());
                    }
                }
                ParameterKind::VariadicPositional => variadic = Some(parameter.clone()),
                ParameterKind::KeywordOnly if keyword_bound => {
                    keyword_only.push(parameter.clone().with_default());
                }
                ParameterKind::KeywordOnly => keyword_only.push(parameter.clone()),
                _ => variadic_keyword = Some(parameter.clone()),
            }
        }

        let parameters = leading
            .into_iter()
            .chain(variadic)
            .chain(keyword_only)
            .chain(variadic_keyword)
            .collect();
        Ok(Self {
            parameters,
            returns: self.returns.clone(),
        })
    }

    /// [`bind`](Self::bind) with keywords only.
    ///
    /// # Errors
    ///
    /// Unknown or repeated keywords.
    pub fn bind_keywords(&self, keywords: &[&str]) -> Result<Self> {
        self.bind(0, keywords)
    }

    /// The signature left after `positional` arguments are fixed at the end
    /// of every call.
    ///
    /// Which slots the trailing arguments occupy depends on how many the
    /// caller passes, so the residual keeps the leading slots and marks as
    /// many of them required as the call still needs.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyPositional`] when the slots cannot hold the
    /// arguments and there is no `*args`.
    pub fn bind_right(&self, positional: usize) -> Result<Self> {
        let slots = self.positional_count();
        let variadic = self.accepts_variadic_positional();
        if positional > slots && !variadic {
            return Err(Error::TooManyPositional {
                expected: slots,
                given: positional,
            });
        }
        let required = self
            .parameters
            .iter()
            .filter(|parameter| parameter.kind().is_positional() && !parameter.is_optional())
            .count()
            .saturating_sub(positional);
        let kept = if variadic { slots } else { slots - positional };

        let leading = self
            .parameters
            .iter()
            .filter(|parameter| parameter.kind().is_positional())
            .take(kept)
            .enumerate()
            .map(|(index, parameter)| {
                let has_default = parameter.has_default() || index >= required;
                parameter.clone().set_default(has_default)
            });
        let rest = self
            .parameters
            .iter()
            .filter(|parameter| !parameter.kind().is_positional())
            .cloned();
        Ok(Self {
            parameters: leading.chain(rest).collect(),
            returns: self.returns.clone(),
        })
    }

    /// The signature of the same function with its positional arguments
    /// reversed.
    ///
    /// Slots become positional-only and appear in reverse order; the first
    /// ones stay required so that the same argument counts are accepted.
    pub fn flipped(&self) -> Self {
        let required = self
            .parameters
            .iter()
            .filter(|parameter| parameter.kind().is_positional() && !parameter.is_optional())
            .count();
        let slots = self
            .parameters
            .iter()
            .rev()
            .filter(|parameter| parameter.kind().is_positional())
            .enumerate()
            .map(|(index, parameter)| {
                parameter
                    .clone()
                    .with_kind(ParameterKind::PositionalOnly)
                    .set_default(index >= required)
            });
        let rest = self
            .parameters
            .iter()
            .filter(|parameter| !parameter.kind().is_positional())
            .cloned();
        Self {
            parameters: slots.chain(rest).collect(),
            returns: self.returns.clone(),
        }
    }
}

fn validate(parameters: &[Parameter]) -> Result<()> {
    let mut names = HashSet::new();
    for parameter in parameters {
        if parameter.name().is_empty() {
            return Err(Error::invalid_argument("parameters", "parameter names must not be empty"));
        }
        if !names.insert(parameter.name()) {
            return Err(Error::invalid_argument(
                "parameters",
                format!("duplicate parameter `{}`", parameter.name()),
            ));
        }
    }
    for pair in parameters.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        if earlier.kind() > later.kind() {
            return Err(Error::invalid_argument(
                "parameters",
                format!("`{}` cannot follow `{}`", later, earlier),
            ));
        }
        if earlier.kind() == later.kind() && later.kind().is_variadic() {
            return Err(Error::invalid_argument(
                "parameters",
                format!("only one `{later}`-style parameter is allowed"),
            ));
        }
    }
    Ok(())
}

impl fmt::Display for PlainSignature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.parameters.len() + 2);
        let mut previous: Option<ParameterKind> = None;
        for parameter in &self.parameters {
            if previous == Some(ParameterKind::PositionalOnly)
                && parameter.kind() != ParameterKind::PositionalOnly
            {
                parts.push("/".to_owned());
            }
            if parameter.kind() == ParameterKind::KeywordOnly
                && !matches!(
                    previous,
                    Some(ParameterKind::VariadicPositional | ParameterKind::KeywordOnly)
                )
            {
                parts.push("*".to_owned());
            }
            parts.push(parameter.to_string());
            previous = Some(parameter.kind());
        }
        if previous == Some(ParameterKind::PositionalOnly) {
            parts.push("/".to_owned());
        }
        write!(formatter, "({})", parts.join(", "))?;
        if let Some(returns) = &self.returns {
            write!(formatter, " -> {returns}")?;
        }
        Ok(())
    }
}

/// Incremental construction of a [`PlainSignature`].
#[derive(Debug, Clone, Default)]
pub struct SignatureBuilder {
    parameters: Vec<Parameter>,
    returns: Option<String>,
}

impl SignatureBuilder {
    /// Appends `parameter`.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends a positional-only parameter.
    #[must_use]
    pub fn positional_only(self, name: impl Into<String>) -> Self {
        self.parameter(Parameter::positional_only(name))
    }

    /// Appends a positional-or-keyword parameter.
    #[must_use]
    pub fn positional_or_keyword(self, name: impl Into<String>) -> Self {
        self.parameter(Parameter::positional_or_keyword(name))
    }

    /// Appends `*name`.
    #[must_use]
    pub fn variadic_positional(self, name: impl Into<String>) -> Self {
        self.parameter(Parameter::variadic_positional(name))
    }

    /// Appends a keyword-only parameter.
    #[must_use]
    pub fn keyword_only(self, name: impl Into<String>) -> Self {
        self.parameter(Parameter::keyword_only(name))
    }

    /// Appends `**name`.
    #[must_use]
    pub fn variadic_keyword(self, name: impl Into<String>) -> Self {
        self.parameter(Parameter::variadic_keyword(name))
    }

    /// Gives the most recently added parameter a default.
    #[must_use]
    pub fn defaulted(mut self) -> Self {
        if let Some(last) = self.parameters.pop() {
            self.parameters.push(last.with_default());
        }
        self
    }

    /// Sets the return annotation.
    #[must_use]
    pub fn returns(mut self, annotation: impl Into<String>) -> Self {
        self.returns = Some(annotation.into());
        self
    }

    /// Validates and finishes.
    ///
    /// # Errors
    ///
    /// See [`PlainSignature::new`].
    pub fn build(self) -> Result<PlainSignature> {
        let signature = PlainSignature::new(self.parameters)?;
        Ok(match self.returns {
            Some(returns) => signature.with_returns(returns),
            None => signature,
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedSignature {
    parameters: Vec<Parameter>,
    #[serde(default)]
    returns: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedSignature> for PlainSignature {
    type Error = Error;

    fn try_from(unchecked: UncheckedSignature) -> Result<Self> {
        let signature = Self::new(unchecked.parameters)?;
        Ok(Self {
            returns: unchecked.returns,
            ..signature
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    /// `(a, /, b, c=…, *args, d, e=…, **kwargs)`
    #[fixture]
    fn full() -> PlainSignature {
        PlainSignature::builder()
            .positional_only("a")
            .positional_or_keyword("b")
            .positional_or_keyword("c")
            .defaulted()
            .variadic_positional("args")
            .keyword_only("d")
            .keyword_only("e")
            .defaulted()
            .variadic_keyword("kwargs")
            .build()
            .unwrap()
    }

    /// `(x, y, *, z)`
    #[fixture]
    fn strict() -> PlainSignature {
        PlainSignature::builder()
            .positional_or_keyword("x")
            .positional_or_keyword("y")
            .keyword_only("z")
            .build()
            .unwrap()
    }

    #[rstest]
    fn display(full: PlainSignature, strict: PlainSignature) {
        assert_eq!(full.to_string(), "(a, /, b, c=…, *args, d, e=…, **kwargs)");
        assert_eq!(strict.to_string(), "(x, y, *, z)");
        assert_eq!(
            PlainSignature::empty().with_returns("int").to_string(),
            "() -> int"
        );
    }

    #[rstest]
    #[case(vec![Parameter::positional_or_keyword("x"), Parameter::positional_only("y")])]
    #[case(vec![Parameter::positional_only("x"), Parameter::keyword_only("x")])]
    #[case(vec![Parameter::variadic_positional("a"), Parameter::variadic_positional("b")])]
    #[case(vec![Parameter::variadic_keyword("kw"), Parameter::keyword_only("late")])]
    #[case(vec![Parameter::positional_only("")])]
    fn rejects_malformed_lists(#[case] parameters: Vec<Parameter>) {
        assert!(matches!(
            PlainSignature::new(parameters),
            Err(Error::InvalidArgument { name: "parameters", .. })
        ));
    }

    #[rstest]
    fn too_many_positional(strict: PlainSignature) {
        assert_eq!(
            strict.check(3, &["z"]),
            Err(Error::TooManyPositional { expected: 2, given: 3 })
        );
        assert!(!strict.expects(3, &[]));
    }

    #[rstest]
    fn surplus_positional_flows_into_args(full: PlainSignature) {
        assert!(full.expects(10, &[]));
        assert_eq!(full.missing(10, &[]), Ok(vec!["d".to_owned()]));
    }

    #[rstest]
    fn keyword_checks(strict: PlainSignature, full: PlainSignature) {
        assert_eq!(strict.check(0, &["w"]), Err(Error::UnknownKeyword("w".to_owned())));
        assert_eq!(strict.check(1, &["x"]), Err(Error::DuplicateArgument("x".to_owned())));
        assert_eq!(
            strict.check(0, &["y", "x"]),
            Err(Error::MissingArguments(vec!["z".to_owned()]))
        );
        assert_eq!(strict.check(0, &["z", "y", "x"]), Ok(()));
        // positional-only names fall through to **kwargs
        assert_eq!(full.missing(1, &["a", "d"]), Ok(vec!["b".to_owned()]));
    }

    #[rstest]
    fn positional_only_name_without_kwargs_is_unknown() {
        let signature = PlainSignature::builder().positional_only("x").build().unwrap();
        assert_eq!(signature.check(0, &["x"]), Err(Error::UnknownKeyword("x".to_owned())));
    }

    #[rstest]
    fn all_set_tracks_required_parameters(strict: PlainSignature) {
        assert!(!strict.all_set(2, &[]));
        assert!(strict.all_set(2, &["z"]));
        assert!(!strict.all_set(3, &["z"]));
    }

    #[rstest]
    fn bind_consumes_leading_slots(full: PlainSignature) {
        let residual = full.bind(2, &[]).unwrap();
        assert_eq!(residual.to_string(), "(c=…, *args, d, e=…, **kwargs)");
        let residual = full.bind(5, &["d"]).unwrap();
        assert_eq!(residual.to_string(), "(*args, d=…, e=…, **kwargs)");
    }

    #[rstest]
    fn bind_keyword_demotes_later_slots(strict: PlainSignature) {
        let residual = strict.bind_keywords(&["x"]).unwrap();
        assert_eq!(residual.to_string(), "(*, x=…, y, z)");
        assert!(residual.all_set(0, &["y", "z"]));
        assert!(!residual.expects(1, &[]));
    }

    #[rstest]
    fn bind_propagates_shape_errors(strict: PlainSignature) {
        assert!(strict.bind(3, &[]).is_err());
        assert!(strict.bind(0, &["nope"]).is_err());
    }

    #[rstest]
    fn bind_right_keeps_leading_slots() {
        let pow = PlainSignature::builder()
            .positional_only("base")
            .positional_only("exp")
            .positional_only("mod")
            .defaulted()
            .build()
            .unwrap();
        let residual = pow.bind_right(1).unwrap();
        assert_eq!(residual.to_string(), "(base, exp=…, /)");
        assert!(residual.all_set(1, &[]));
        assert!(pow.bind_right(4).is_err());
    }

    #[rstest]
    fn flipped_reverses_slots(strict: PlainSignature) {
        let flipped = strict.flipped();
        assert_eq!(flipped.to_string(), "(y, x, /, *, z)");
        assert!(flipped.all_set(2, &["z"]));
    }
}
