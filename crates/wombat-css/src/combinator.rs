//! Combinators and combined selectors.
//!
//! A combined selector joins two complete selectors with one of the four
//! combinator tokens. Operands may themselves be combined selectors, so
//! chains of arbitrary depth render left-to-right exactly as constructed.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::builder::CompoundSelector;
use crate::fragment::SelectorError;

/// The relationship a combined selector expresses between its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Combinator {
    /// Whitespace: the right operand is an arbitrary descendant of the
    /// left.
    Descendant,
    /// `>`: the right operand is a direct child of the left.
    Child,
    /// `+`: the right operand immediately follows the left as a sibling.
    NextSibling,
    /// `~`: the right operand follows the left as a sibling, not
    /// necessarily immediately.
    SubsequentSibling,
}

impl Combinator {
    /// The literal token placed between the two operand renderings.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts exactly the four combinator tokens: ` `, `>`, `+`, `~`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            _ => Err(SelectorError::UnknownCombinator {
                token: s.to_string(),
            }),
        }
    }
}

/// Two complete selectors joined by a combinator.
///
/// Renders as the left operand, a single space, the combinator token, a
/// single space, and the right operand. The combined selector exclusively
/// owns its operands; they are not shared or mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedSelector {
    left: Box<Selector>,
    combinator: Combinator,
    right: Box<Selector>,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`.
    #[must_use]
    pub fn new(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: Box::new(left.into()),
            combinator,
            right: Box::new(right.into()),
        }
    }

    /// Render the combined selector to its canonical string.
    ///
    /// Rendering never mutates; repeated calls return the identical
    /// string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Either a single selector or a combined one.
///
/// This is the shared rendering contract: both shapes stringify, so both
/// can stand on either side of [`CombinedSelector::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Selector {
    /// A single, non-combined selector.
    Compound(CompoundSelector),
    /// Two selectors joined by a combinator.
    Combined(CombinedSelector),
}

impl Selector {
    /// Render to the canonical selector string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(selector) => write!(f, "{selector}"),
            Self::Combined(combined) => write!(f, "{combined}"),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(selector: CompoundSelector) -> Self {
        Self::Compound(selector)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}
