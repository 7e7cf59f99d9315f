use std::fmt;

/// The typed pieces a simple selector is made of.
///
/// Variants are declared in rank order; a fragment may only follow fragments
/// of the same or a lower rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl FragmentKind {
    /// All kinds, lowest rank first.
    pub const ALL: [FragmentKind; 6] = [
        FragmentKind::Element,
        FragmentKind::Id,
        FragmentKind::Class,
        FragmentKind::Attribute,
        FragmentKind::PseudoClass,
        FragmentKind::PseudoElement,
    ];

    /// Precedence rank, from 1 (element) to 6 (pseudo-element).
    pub fn rank(self) -> u8 {
        match self {
            FragmentKind::Element => 1,
            FragmentKind::Id => 2,
            FragmentKind::Class => 3,
            FragmentKind::Attribute => 4,
            FragmentKind::PseudoClass => 5,
            FragmentKind::PseudoElement => 6,
        }
    }

    /// Whether the kind may appear at most once in a simple selector.
    pub fn is_singular(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

/// Relationship between two combined selectors.
///
/// [`combine`](crate::combine) accepts any text as a combinator; this enum
/// only names the four standard ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    /// ` `
    Descendant,
    /// `>`
    Child,
    /// `+`
    AdjacentSibling,
    /// `~`
    GeneralSibling,
}

impl Combinator {
    pub fn symbol(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_declaration_order() {
        let ranks: Vec<u8> = FragmentKind::ALL.iter().map(|k| k.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
        assert!(FragmentKind::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn singular_kinds() {
        let singular: Vec<FragmentKind> = FragmentKind::ALL
            .into_iter()
            .filter(|k| k.is_singular())
            .collect();
        assert_eq!(
            singular,
            vec![
                FragmentKind::Element,
                FragmentKind::Id,
                FragmentKind::PseudoElement
            ]
        );
    }

    #[test]
    fn combinator_symbols() {
        assert_eq!(Combinator::Descendant.as_ref(), " ");
        assert_eq!(Combinator::Child.as_ref(), ">");
        assert_eq!(Combinator::AdjacentSibling.as_ref(), "+");
        assert_eq!(Combinator::GeneralSibling.as_ref(), "~");
    }
}
