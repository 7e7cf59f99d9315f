use std::fmt;

use crate::error::{Result, SelectorError};
use crate::fragment::FragmentKind;

/// Fragments of a simple selector, kept per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Compound {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    last_rank: u8,
}

impl Compound {
    fn is_set(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
            FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => false,
        }
    }

    fn check(&self, kind: FragmentKind) -> Result<()> {
        if kind.is_singular() && self.is_set(kind) {
            return Err(SelectorError::Duplicate(kind));
        }
        if self.last_rank > kind.rank() {
            return Err(SelectorError::OutOfOrder {
                fragment: kind,
                last_rank: self.last_rank,
            });
        }
        Ok(())
    }

    /// Stores `value` without validation; callers run [`Compound::check`] first.
    fn insert(&mut self, kind: FragmentKind, value: String) {
        match kind {
            FragmentKind::Element => self.element = Some(value),
            FragmentKind::Id => self.id = Some(value),
            FragmentKind::Class => self.classes.push(value),
            FragmentKind::Attribute => self.attributes.push(value),
            FragmentKind::PseudoClass => self.pseudo_classes.push(value),
            FragmentKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.last_rank = kind.rank();
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo in &self.pseudo_classes {
            write!(f, ":{pseudo}")?;
        }
        if let Some(pseudo) = &self.pseudo_element {
            write!(f, "::{pseudo}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Form {
    Compound(Compound),
    Combination {
        left: String,
        combinator: String,
        right: String,
    },
}

/// A composable CSS selector.
///
/// An expression is either a simple selector built from fragments
/// (`a#main.nav[href]:hover::after`) or two rendered selectors joined by a
/// combinator. Fragment methods consume the expression and hand it back on
/// success, so a rejected call leaves nothing behind to reuse.
///
/// Fragments are always rendered in rank order: element, `#id`, `.class`,
/// `[attribute]`, `:pseudo-class`, `::pseudo-element`.
///
/// ```rust
/// use selector::{element, id};
///
/// let link = element("a")
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
///
/// let main = id("main").class_name("container")?.class_name("editable")?;
/// assert_eq!(main.to_string(), "#main.container.editable");
/// # Ok::<(), selector::SelectorError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorExpression {
    form: Form,
}

impl Default for SelectorExpression {
    fn default() -> Self {
        Self {
            form: Form::Compound(Compound::default()),
        }
    }
}

impl SelectorExpression {
    /// Creates an empty simple selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element (tag) name. Rank 1, at most once.
    pub fn element(self, name: impl Into<String>) -> Result<Self> {
        self.append(FragmentKind::Element, name.into())
    }

    /// Sets the id. Rank 2, at most once.
    pub fn id(self, name: impl Into<String>) -> Result<Self> {
        self.append(FragmentKind::Id, name.into())
    }

    /// Appends a class. Rank 3, repeatable.
    pub fn class_name(self, name: impl Into<String>) -> Result<Self> {
        self.append(FragmentKind::Class, name.into())
    }

    /// Appends an attribute selector. Rank 4, repeatable.
    ///
    /// `raw` is the text between the brackets (`href$=".png"`) and is
    /// rendered verbatim.
    pub fn attribute(self, raw: impl Into<String>) -> Result<Self> {
        self.append(FragmentKind::Attribute, raw.into())
    }

    /// Shorthand for [`SelectorExpression::attribute`].
    pub fn attr(self, raw: impl Into<String>) -> Result<Self> {
        self.attribute(raw)
    }

    /// Appends a pseudo-class. Rank 5, repeatable.
    pub fn pseudo_class(self, name: impl Into<String>) -> Result<Self> {
        self.append(FragmentKind::PseudoClass, name.into())
    }

    /// Sets the pseudo-element. Rank 6, at most once.
    pub fn pseudo_element(self, name: impl Into<String>) -> Result<Self> {
        self.append(FragmentKind::PseudoElement, name.into())
    }

    /// Appends a fragment of the given kind after validating it.
    ///
    /// Validation runs before any field is touched. A singular kind that is
    /// already set reports [`SelectorError::Duplicate`] even when the order
    /// would also be wrong.
    pub fn append(mut self, kind: FragmentKind, value: impl Into<String>) -> Result<Self> {
        let Form::Compound(compound) = &mut self.form else {
            log::debug!("rejected {kind} fragment on a combined selector");
            return Err(SelectorError::Combined(kind));
        };

        if let Err(err) = compound.check(kind) {
            log::debug!("rejected {kind} fragment on `{compound}`: {err}");
            return Err(err);
        }

        let value = value.into();
        log::trace!("appending {kind} `{value}` to `{compound}`");
        compound.insert(kind, value);
        Ok(self)
    }

    /// Replaces this expression with `left <combinator> right`.
    ///
    /// Both operands are rendered immediately; later changes to them do not
    /// affect the result. Any fragments held by `self` are discarded. The
    /// combinator is not validated, so any text is accepted.
    pub fn combine(
        self,
        left: &SelectorExpression,
        combinator: impl AsRef<str>,
        right: &SelectorExpression,
    ) -> SelectorExpression {
        let (left, combinator, right) = (
            left.stringify(),
            combinator.as_ref().to_string(),
            right.stringify(),
        );
        log::debug!("combining `{left}` and `{right}` with `{combinator}`");
        SelectorExpression {
            form: Form::Combination {
                left,
                combinator,
                right,
            },
        }
    }

    /// Renders the selector text.
    ///
    /// A combination renders as `left + " " + combinator + " " + right`. The
    /// combinator always gets one literal space on each side, so a `" "`
    /// combinator yields three spaces between the operands.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Returns true once the expression has been combined from two others.
    pub fn is_combination(&self) -> bool {
        matches!(self.form, Form::Combination { .. })
    }

    /// Rank of the most recently appended fragment, or 0 for an empty or
    /// combined expression.
    pub fn last_rank(&self) -> u8 {
        match &self.form {
            Form::Compound(compound) => compound.last_rank,
            Form::Combination { .. } => 0,
        }
    }

    pub(crate) fn with_fragment(kind: FragmentKind, value: String) -> Self {
        let mut compound = Compound::default();
        compound.insert(kind, value);
        Self {
            form: Form::Compound(compound),
        }
    }
}

impl fmt::Display for SelectorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.form {
            Form::Compound(compound) => fmt::Display::fmt(compound, f),
            Form::Combination {
                left,
                combinator,
                right,
            } => write!(f, "{left} {combinator} {right}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_expression_renders_nothing() {
        let expr = SelectorExpression::new();
        assert_eq!(expr.stringify(), "");
        assert_eq!(expr.last_rank(), 0);
        assert!(!expr.is_combination());
    }

    #[test]
    fn check_reports_duplicate_before_order() {
        let mut compound = Compound::default();
        compound.insert(FragmentKind::Element, "div".into());
        compound.insert(FragmentKind::PseudoClass, "hover".into());

        assert_eq!(
            compound.check(FragmentKind::Element),
            Err(SelectorError::Duplicate(FragmentKind::Element))
        );
        assert_eq!(
            compound.check(FragmentKind::Id),
            Err(SelectorError::OutOfOrder {
                fragment: FragmentKind::Id,
                last_rank: 5,
            })
        );
        assert_eq!(compound.check(FragmentKind::PseudoClass), Ok(()));
    }

    #[test]
    fn insert_tracks_last_rank() {
        let mut compound = Compound::default();
        compound.insert(FragmentKind::Class, "a".into());
        assert_eq!(compound.last_rank, 3);
        compound.insert(FragmentKind::PseudoElement, "before".into());
        assert_eq!(compound.last_rank, 6);
        assert_eq!(compound.to_string(), ".a::before");
    }

    #[test]
    fn with_fragment_matches_append_on_empty() {
        for kind in FragmentKind::ALL {
            let direct = SelectorExpression::with_fragment(kind, "x".into());
            let appended = SelectorExpression::new().append(kind, "x").unwrap();
            assert_eq!(direct, appended);
        }
    }
}
