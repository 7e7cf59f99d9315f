//! Entry points for building selectors.
//!
//! Each fragment function starts a fresh expression holding a single
//! fragment. The first fragment of an empty expression cannot break an
//! ordering or cardinality rule, so these never fail; follow-up fragments are
//! chained through the [`SelectorExpression`] methods.
//!
//! ```rust
//! use selector::{combine, element, Combinator};
//!
//! let list = element("ul").class_name("menu")?;
//! let item = element("li");
//! assert_eq!(
//!     combine(&list, Combinator::Child, &item).stringify(),
//!     "ul.menu > li"
//! );
//! # Ok::<(), selector::SelectorError>(())
//! ```

use crate::expression::SelectorExpression;
use crate::fragment::FragmentKind;

pub fn element(name: impl Into<String>) -> SelectorExpression {
    SelectorExpression::with_fragment(FragmentKind::Element, name.into())
}

pub fn id(name: impl Into<String>) -> SelectorExpression {
    SelectorExpression::with_fragment(FragmentKind::Id, name.into())
}

pub fn class_name(name: impl Into<String>) -> SelectorExpression {
    SelectorExpression::with_fragment(FragmentKind::Class, name.into())
}

/// Starts a selector from raw attribute text, e.g. `href$=".png"`.
pub fn attribute(raw: impl Into<String>) -> SelectorExpression {
    SelectorExpression::with_fragment(FragmentKind::Attribute, raw.into())
}

pub fn pseudo_class(name: impl Into<String>) -> SelectorExpression {
    SelectorExpression::with_fragment(FragmentKind::PseudoClass, name.into())
}

pub fn pseudo_element(name: impl Into<String>) -> SelectorExpression {
    SelectorExpression::with_fragment(FragmentKind::PseudoElement, name.into())
}

/// Joins two selectors with a combinator (` `, `>`, `+`, `~` or any text).
pub fn combine(
    left: &SelectorExpression,
    combinator: impl AsRef<str>,
    right: &SelectorExpression,
) -> SelectorExpression {
    SelectorExpression::new().combine(left, combinator, right)
}
