//! JSON round-tripping and capability grafting for plain data values.
//!
//! # Scope
//!
//! This crate implements:
//! - **Serialization** — [`serialize`] produces the canonical JSON text of
//!   any [`serde::Serialize`] value; object keys follow the structure's
//!   own field/key enumeration order and arrays preserve element order
//! - **Parsing** — [`parse`] for untyped [`Value`] trees and
//!   [`deserialize`] for typed data; malformed text fails with
//!   [`JsonError::Parse`] and never yields a partial result
//! - **Capability grafting** — [`revive`] parses plain data and hands it
//!   to a [`Capabilities`] factory, producing a value whose data fields
//!   come from the JSON text and whose methods come from the implementing
//!   type
//!
//! The bridge is a direct pass-through to `serde_json`; it adds no schema
//! validation and no transformation of the parsed data.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use serde_json::Value;

/// Error type for the JSON bridge.
///
/// Both variants are raised synchronously and propagate immediately; no
/// partial result is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input text is not well-formed JSON.
    #[error("malformed JSON input: {0}")]
    Parse(#[source] serde_json::Error),
    /// The value has no JSON representation (e.g. a map keyed by
    /// something other than strings).
    #[error("value cannot be encoded as JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serialize a value to its canonical JSON text.
///
/// Object-like structures serialize their keys in their own enumeration
/// order (a struct's field declaration order, a map's iteration order);
/// arrays preserve element order.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] when the value has no JSON
/// representation.
pub fn serialize<T>(value: &T) -> Result<String, JsonError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Serialize a value to indented, human-readable JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] when the value has no JSON
/// representation.
pub fn serialize_pretty<T>(value: &T) -> Result<String, JsonError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string_pretty(value).map_err(JsonError::Encode)
}

/// Parse JSON text into an untyped [`Value`] tree.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] when `text` is not well-formed JSON.
pub fn parse(text: &str) -> Result<Value, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Parse)
}

/// Parse JSON text into a typed data value.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] when `text` is not well-formed JSON or
/// does not match the shape of `T`.
pub fn deserialize<T>(text: &str) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(text).map_err(JsonError::Parse)
}

/// A capability set that can be grafted onto plain parsed data.
///
/// Implementors name the plain data shape they are built from and provide
/// the factory that wraps it; [`revive`] composes the two. The data fields
/// of the revived value come from JSON text, the methods from the
/// implementing type — no dispatch table is mutated at runtime.
///
/// ```
/// use serde::Deserialize;
/// use wombat_json::Capabilities;
///
/// #[derive(Deserialize)]
/// struct CircleData {
///     radius: f64,
/// }
///
/// struct Circle {
///     data: CircleData,
/// }
///
/// impl Circle {
///     fn area(&self) -> f64 {
///         std::f64::consts::PI * self.data.radius * self.data.radius
///     }
/// }
///
/// impl Capabilities for Circle {
///     type Data = CircleData;
///
///     fn attach(data: CircleData) -> Self {
///         Self { data }
///     }
/// }
///
/// let circle: Circle = wombat_json::revive(r#"{"radius":2.0}"#)?;
/// assert!((circle.area() - 4.0 * std::f64::consts::PI).abs() < 1e-9);
/// # Ok::<(), wombat_json::JsonError>(())
/// ```
pub trait Capabilities: Sized {
    /// The plain data shape parsed from JSON.
    type Data: DeserializeOwned;

    /// Wrap parsed data, attaching this type's methods to it.
    fn attach(data: Self::Data) -> Self;
}

/// Parse JSON text and graft a capability set onto the result.
///
/// # Errors
///
/// Returns [`JsonError::Parse`] when `text` is not well-formed JSON or
/// does not match the shape of [`Capabilities::Data`].
pub fn revive<C: Capabilities>(text: &str) -> Result<C, JsonError> {
    Ok(C::attach(deserialize::<C::Data>(text)?))
}
