//! Fragment categories and the ordering rules between them.
//!
//! A selector is assembled from six kinds of fragment. The kinds have a
//! fixed relative order, and [`FragmentOrder`] enforces it while a selector
//! is under construction: fragments may only be added in non-decreasing
//! category order, and the single-occurrence kinds may not repeat.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

/// The six fragment categories, declared in the only order they may be
/// added to a selector.
///
/// The declaration order *is* the category order: the derived comparison
/// and the iteration order both follow it, so ordering checks and rendering
/// share a single source of truth rather than relying on the field layout
/// of the selector struct.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumIter,
    EnumString,
)]
pub enum FragmentKind {
    /// Selector subject tag, rendered bare (`div`). Single-occurrence.
    #[strum(serialize = "element")]
    Element,
    /// Rendered as `#value`. Single-occurrence.
    #[strum(serialize = "id")]
    Id,
    /// Rendered as `.value`. May repeat.
    #[strum(serialize = "class")]
    Class,
    /// Raw attribute expression (e.g. `href$=".png"`), rendered as
    /// `[value]`. May repeat. The expression content is taken verbatim.
    #[strum(serialize = "attribute")]
    Attribute,
    /// Rendered as `:value`. May repeat.
    #[strum(serialize = "pseudo-class")]
    PseudoClass,
    /// Rendered as `::value`. Single-occurrence.
    #[strum(serialize = "pseudo-element")]
    PseudoElement,
}

impl FragmentKind {
    /// Whether this kind may occur at most once per selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// Construction errors raised by the ordering rules.
///
/// All variants are raised synchronously by the fluent mutators and abort
/// the chain; the call sequence has to be fixed at the call site. Nothing
/// is retried and no partial selector is handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment was added after a fragment of a later category.
    #[error(
        "'{kind}' cannot follow '{after}': selector parts must be arranged in the order element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OutOfOrder {
        /// The kind that was rejected.
        kind: FragmentKind,
        /// The most recently added kind it would have followed.
        after: FragmentKind,
    },

    /// A single-occurrence kind was added a second time.
    #[error(
        "'{kind}' may occur at most once: element, id and pseudo-element are single-occurrence fragments"
    )]
    DuplicateSingleton {
        /// The repeated kind.
        kind: FragmentKind,
    },

    /// A combinator token was not one of ` `, `>`, `+`, `~`.
    #[error("unknown combinator token '{token}'")]
    UnknownCombinator {
        /// The rejected token.
        token: String,
    },
}

/// Tracks the most recently added fragment kind while a selector is being
/// built, rejecting additions that would break the category order.
///
/// The initial state precedes all categories, so any first fragment is
/// accepted. There is no terminal state; the tracker is consulted on every
/// addition for the lifetime of one selector's construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FragmentOrder {
    last: Option<FragmentKind>,
}

impl FragmentOrder {
    /// Check that `kind` may follow everything recorded so far, then
    /// record it.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfOrder`] when `kind` ranks below the
    /// most recently recorded kind, and
    /// [`SelectorError::DuplicateSingleton`] when a single-occurrence kind
    /// repeats.
    pub fn record(&mut self, kind: FragmentKind) -> Result<(), SelectorError> {
        if let Some(last) = self.last {
            if kind < last {
                return Err(SelectorError::OutOfOrder { kind, after: last });
            }
            if kind == last && kind.is_singleton() {
                return Err(SelectorError::DuplicateSingleton { kind });
            }
        }
        self.last = Some(kind);
        Ok(())
    }

    /// The most recently recorded kind, or `None` before any fragment.
    #[must_use]
    pub const fn last(&self) -> Option<FragmentKind> {
        self.last
    }

    /// Record the first fragment of a fresh selector.
    ///
    /// The empty state accepts every kind, so no check is involved.
    pub(crate) fn begin(&mut self, kind: FragmentKind) {
        self.last = Some(kind);
    }
}
