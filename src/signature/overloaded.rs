//! Several alternative parameter lists for one function.

use std::fmt;

use super::Signature;
use super::plain::PlainSignature;
use crate::{Error, Result};

/// Two or more [`PlainSignature`] alternatives with pairwise distinct
/// required-parameter shapes.
///
/// Only [`OverloadedSignature::new`] builds one; it collapses to
/// [`Signature::Plain`] when a single alternative survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<PlainSignature>", try_from = "Vec<PlainSignature>")
)]
pub struct OverloadedSignature {
    alternatives: Vec<PlainSignature>,
}

impl OverloadedSignature {
    /// Builds a signature from `alternatives`, dropping any whose required
    /// shape repeats an earlier one.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `alternatives` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::signature::{OverloadedSignature, PlainSignature, Signature};
    ///
    /// let stop = PlainSignature::builder().positional_only("stop").build().unwrap();
    /// let signature = OverloadedSignature::new([stop.clone(), stop.clone()]).unwrap();
    /// assert_eq!(signature, Signature::Plain(stop));
    /// ```
    pub fn new(alternatives: impl IntoIterator<Item = PlainSignature>) -> Result<Signature> {
        Self::collapse(alternatives.into_iter().collect()).ok_or_else(|| {
            Error::invalid_argument(
                "alternatives",
                "an overloaded signature needs at least one alternative",
            )
        })
    }

    pub(crate) fn collapse(alternatives: Vec<PlainSignature>) -> Option<Signature> {
        let mut distinct: Vec<PlainSignature> = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let shape = alternative.required_shape();
            if !distinct
                .iter()
                .any(|kept| kept.required_shape() == shape)
            {
                distinct.push(alternative);
            }
        }
        match distinct.len() {
            0 => None,
            1 => distinct.pop().map(Signature::Plain),
            _ => Some(Signature::Overloaded(Self {
                alternatives: distinct,
            })),
        }
    }

    /// Alternatives in declaration order.
    pub fn alternatives(&self) -> &[PlainSignature] {
        &self.alternatives
    }
}

impl fmt::Display for OverloadedSignature {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, alternative) in self.alternatives.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" | ")?;
            }
            write!(formatter, "{alternative}")?;
        }
        Ok(())
    }
}

impl From<OverloadedSignature> for Vec<PlainSignature> {
    fn from(signature: OverloadedSignature) -> Self {
        signature.alternatives
    }
}

impl TryFrom<Vec<PlainSignature>> for OverloadedSignature {
    type Error = Error;

    fn try_from(alternatives: Vec<PlainSignature>) -> Result<Self> {
        match Self::new(alternatives)? {
            Signature::Overloaded(overloaded) => Ok(overloaded),
            Signature::Plain(_) => Err(Error::invalid_argument(
                "alternatives",
                "an overloaded signature needs two distinct alternatives",
            )),
        }
    }
}
