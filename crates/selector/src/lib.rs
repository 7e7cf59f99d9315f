//! # Selector - CSS selector builder
//!
//! Builds CSS selector strings from typed fragments, enforcing the order in
//! which fragments may be written and how often each may appear.
//!
//! ## Quick Start
//!
//! ```rust
//! use selector::{combine, element, id, Combinator};
//!
//! let main = element("div").id("main")?;
//! let data = element("table").id("data")?;
//!
//! let sibling = combine(&main, Combinator::AdjacentSibling, &data);
//! assert_eq!(sibling.stringify(), "div#main + table#data");
//!
//! assert!(id("main").element("div").is_err());
//! # Ok::<(), selector::SelectorError>(())
//! ```
//!
//! ## Rules
//!
//! Fragments rank as element (1), id (2), class (3), attribute (4),
//! pseudo-class (5) and pseudo-element (6). A fragment may be appended only
//! while its rank is at least the rank of the last fragment appended. Element,
//! id and pseudo-element may be set once; classes, attributes and
//! pseudo-classes accumulate in call order.
//!
//! Rendered text:
//!
//! - Simple: `element#id.class[attr]:pseudo-class::pseudo-element`
//! - Combined: `left combinator right`, one literal space on each side of
//!   the combinator (a `" "` combinator gives three spaces)
//!
//! ## Not Supported
//!
//! - Parsing or validating fragment contents
//! - Specificity
//! - Matching against a document
//!
//! ## Modules
//!
//! - [`builder`]: Entry-point functions
//! - [`expression`]: The [`SelectorExpression`] type
//! - [`fragment`]: Fragment kinds and combinators
//! - [`error`]: Construction errors

pub mod builder;
pub mod error;
pub mod expression;
pub mod fragment;

pub use builder::{attribute, class_name, combine, element, id, pseudo_class, pseudo_element};
pub use error::{OrderOrCardinalityError, SelectorError};
pub use expression::SelectorExpression;
pub use fragment::{Combinator, FragmentKind};
