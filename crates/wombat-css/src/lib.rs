//! Fluent, order-checked construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragment categories** — the six selector fragment kinds with their
//!   fixed relative order: element, id, class, attribute, pseudo-class,
//!   pseudo-element
//! - **Ordering rules** — fragments may only be added in non-decreasing
//!   category order, and element, id, and pseudo-element may not repeat
//!   within one selector
//! - **Fluent builder** — one facade function per fragment kind, each
//!   starting a fresh [`CompoundSelector`] that accumulates further
//!   fragments by value
//! - **Combinators** — [`combine`] joins two complete selectors with a
//!   descendant, child, next-sibling, or subsequent-sibling token; operands
//!   may themselves be combined selectors
//!
//! Fragment content is taken verbatim: the builder does not parse CSS and
//! does not validate attribute expressions or pseudo-class names.
//!
//! # Example
//!
//! ```
//! use wombat_css::{Combinator, combine, element, id};
//!
//! let selector = id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//!
//! let pair = combine(
//!     element("div").id("main")?,
//!     Combinator::NextSibling,
//!     element("table").id("data")?,
//! );
//! assert_eq!(pair.stringify(), "div#main + table#data");
//! # Ok::<(), wombat_css::SelectorError>(())
//! ```

/// Fluent selector construction and the facade entry points.
pub mod builder;
/// Combinators and combined selectors.
pub mod combinator;
/// Fragment categories and ordering rules.
pub mod fragment;

// Re-exports for convenience
pub use builder::{
    CompoundSelector, attribute, class, combine, element, id, pseudo_class, pseudo_element,
};
pub use combinator::{Combinator, CombinedSelector, Selector};
pub use fragment::{FragmentKind, FragmentOrder, SelectorError};
