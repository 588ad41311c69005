//! Fluent construction of single (non-combined) selectors.
//!
//! Every facade function creates a brand-new [`CompoundSelector`] holding
//! one fragment; further fragments are added through the fluent mutators,
//! each of which consumes the builder and hands it back, so one chain owns
//! exactly one selector until it is rendered. No shared state exists
//! across chains, and no operation removes or edits an already-added
//! fragment.

use std::fmt;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::combinator::{Combinator, CombinedSelector, Selector};
use crate::fragment::{FragmentKind, FragmentOrder, SelectorError};

/// A single selector: at most one element, id, and pseudo-element, plus
/// any number of classes, attribute expressions, and pseudo-classes.
///
/// Insertion order within the repeatable categories is preserved and
/// significant in the rendered output. Construction is additive only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompoundSelector {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    // Construction-time bookkeeping; not part of the rendered output.
    #[serde(skip)]
    order: FragmentOrder,
}

impl CompoundSelector {
    /// Create a selector with no fragments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a fresh selector with its first fragment. Every kind is valid
    /// as a first fragment, so no ordering check is involved.
    fn first(kind: FragmentKind, value: String) -> Self {
        let mut selector = Self::new();
        selector.order.begin(kind);
        match kind {
            FragmentKind::Element => selector.element = Some(value),
            FragmentKind::Id => selector.id = Some(value),
            FragmentKind::Class => selector.classes.push(value),
            FragmentKind::Attribute => selector.attributes.push(value),
            FragmentKind::PseudoClass => selector.pseudo_classes.push(value),
            FragmentKind::PseudoElement => selector.pseudo_element = Some(value),
        }
        selector
    }

    /// Set the element (tag) fragment.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::DuplicateSingleton`] when an element is
    /// already set, or [`SelectorError::OutOfOrder`] when any
    /// later-category fragment has been added before it.
    pub fn element(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.order.record(FragmentKind::Element)?;
        self.element = Some(value.into());
        Ok(self)
    }

    /// Set the id fragment.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::DuplicateSingleton`] when an id is
    /// already set, or [`SelectorError::OutOfOrder`] when any
    /// later-category fragment has been added before it.
    pub fn id(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.order.record(FragmentKind::Id)?;
        self.id = Some(value.into());
        Ok(self)
    }

    /// Append a class fragment.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::OutOfOrder`] when any later-category
    /// fragment has been added before it.
    pub fn class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.order.record(FragmentKind::Class)?;
        self.classes.push(name.into());
        Ok(self)
    }

    /// Append a raw attribute expression fragment (e.g. `href$=".png"`).
    ///
    /// The expression is not checked for CSS validity; it is rendered
    /// verbatim between `[` and `]`.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::OutOfOrder`] when any later-category
    /// fragment has been added before it.
    pub fn attribute(mut self, expression: impl Into<String>) -> Result<Self, SelectorError> {
        self.order.record(FragmentKind::Attribute)?;
        self.attributes.push(expression.into());
        Ok(self)
    }

    /// Append a pseudo-class fragment.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::OutOfOrder`] when any later-category
    /// fragment has been added before it.
    pub fn pseudo_class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.order.record(FragmentKind::PseudoClass)?;
        self.pseudo_classes.push(name.into());
        Ok(self)
    }

    /// Set the pseudo-element fragment.
    ///
    /// # Errors
    ///
    /// Fails with [`SelectorError::DuplicateSingleton`] when a
    /// pseudo-element is already set. Being the last category, it can
    /// never be out of order.
    pub fn pseudo_element(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.order.record(FragmentKind::PseudoElement)?;
        self.pseudo_element = Some(value.into());
        Ok(self)
    }

    /// Render the accumulated fragments to the canonical selector string.
    ///
    /// Rendering never mutates the selector; repeated calls return the
    /// identical string.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Categories render in enum order with their canonical decoration;
        // empty categories contribute nothing and no separators are
        // inserted between fragments.
        for kind in FragmentKind::iter() {
            match kind {
                FragmentKind::Element => {
                    if let Some(element) = &self.element {
                        write!(f, "{element}")?;
                    }
                }
                FragmentKind::Id => {
                    if let Some(id) = &self.id {
                        write!(f, "#{id}")?;
                    }
                }
                FragmentKind::Class => {
                    for class in &self.classes {
                        write!(f, ".{class}")?;
                    }
                }
                FragmentKind::Attribute => {
                    for expression in &self.attributes {
                        write!(f, "[{expression}]")?;
                    }
                }
                FragmentKind::PseudoClass => {
                    for name in &self.pseudo_classes {
                        write!(f, ":{name}")?;
                    }
                }
                FragmentKind::PseudoElement => {
                    if let Some(pseudo) = &self.pseudo_element {
                        write!(f, "::{pseudo}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Start a selector from an element (tag) fragment.
#[must_use]
pub fn element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::first(FragmentKind::Element, value.into())
}

/// Start a selector from an id fragment.
#[must_use]
pub fn id(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::first(FragmentKind::Id, value.into())
}

/// Start a selector from a class fragment.
#[must_use]
pub fn class(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::first(FragmentKind::Class, name.into())
}

/// Start a selector from a raw attribute expression fragment.
#[must_use]
pub fn attribute(expression: impl Into<String>) -> CompoundSelector {
    CompoundSelector::first(FragmentKind::Attribute, expression.into())
}

/// Start a selector from a pseudo-class fragment.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::first(FragmentKind::PseudoClass, name.into())
}

/// Start a selector from a pseudo-element fragment.
#[must_use]
pub fn pseudo_element(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::first(FragmentKind::PseudoElement, value.into())
}

/// Join two complete selectors with a combinator.
///
/// Either operand may itself be a combined selector; rendering expands the
/// nesting left-to-right exactly as constructed.
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    combinator: Combinator,
    right: impl Into<Selector>,
) -> CombinedSelector {
    CombinedSelector::new(left, combinator, right)
}
