//! Wombat CLI
//!
//! A small driver for the wombat libraries: build selectors from
//! `kind=value` fragments, join two of them with a combinator token, and
//! round-trip JSON documents.

use std::fs;
use std::io;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use wombat_css::{Combinator, CombinedSelector, CompoundSelector, FragmentKind, combine};
use wombat_json::Value;

#[derive(Parser)]
#[command(name = "wombat", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a selector from ordered kind=value fragments.
    ///
    /// Kinds: element, id, class, attribute, pseudo-class, pseudo-element.
    /// Example: `wombat build element=div id=main class=container`
    Build {
        /// Fragments, e.g. `element=div id=main class=container`.
        #[arg(required = true)]
        fragments: Vec<String>,
    },

    /// Join two fragment lists with a combinator token.
    ///
    /// The token is one of `>`, `+`, `~`, or a quoted space.
    /// Example: `wombat combine element=div id=main + element=table id=data`
    Combine {
        /// Left fragments, the combinator token, then right fragments.
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Parse a JSON document and print it back, indented.
    Json {
        /// Path to a JSON document, or `-` for stdin.
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Build { fragments } => {
            let selector = build_selector(&fragments)?;
            println!("{}", selector.green());
        }
        Command::Combine { parts } => {
            let combined = combine_parts(&parts)?;
            println!("{}", combined.green());
        }
        Command::Json { path } => {
            let text = read_input(&path)?;
            let value: Value = wombat_json::parse(&text)?;
            println!("{}", wombat_json::serialize_pretty(&value)?);
        }
    }
    Ok(())
}

/// Fold `kind=value` fragments into a selector: the first fragment goes
/// through the facade, the rest through the fluent mutators, so ordering
/// violations surface exactly as the library reports them.
fn build_selector(fragments: &[String]) -> Result<CompoundSelector> {
    let mut selector: Option<CompoundSelector> = None;
    for fragment in fragments {
        let (kind, value) = split_fragment(fragment)?;
        selector = Some(match selector {
            None => start_selector(kind, value),
            Some(current) => add_fragment(current, kind, value)?,
        });
    }
    selector.context("at least one kind=value fragment is required")
}

/// Split one `kind=value` argument into a fragment kind and its value.
fn split_fragment(fragment: &str) -> Result<(FragmentKind, &str)> {
    let (kind_text, value) = fragment
        .split_once('=')
        .with_context(|| format!("fragment '{fragment}' is not of the form kind=value"))?;
    let kind = FragmentKind::from_str(kind_text).map_err(|_| {
        anyhow!(
            "unknown fragment kind '{kind_text}' (expected element, id, class, attribute, pseudo-class or pseudo-element)"
        )
    })?;
    if value.is_empty() {
        bail!("fragment '{fragment}' has an empty value");
    }
    Ok((kind, value))
}

fn start_selector(kind: FragmentKind, value: &str) -> CompoundSelector {
    match kind {
        FragmentKind::Element => wombat_css::element(value),
        FragmentKind::Id => wombat_css::id(value),
        FragmentKind::Class => wombat_css::class(value),
        FragmentKind::Attribute => wombat_css::attribute(value),
        FragmentKind::PseudoClass => wombat_css::pseudo_class(value),
        FragmentKind::PseudoElement => wombat_css::pseudo_element(value),
    }
}

fn add_fragment(
    selector: CompoundSelector,
    kind: FragmentKind,
    value: &str,
) -> Result<CompoundSelector> {
    let selector = match kind {
        FragmentKind::Element => selector.element(value),
        FragmentKind::Id => selector.id(value),
        FragmentKind::Class => selector.class(value),
        FragmentKind::Attribute => selector.attribute(value),
        FragmentKind::PseudoClass => selector.pseudo_class(value),
        FragmentKind::PseudoElement => selector.pseudo_element(value),
    }?;
    Ok(selector)
}

/// Split the arguments at the combinator token and build both sides.
fn combine_parts(parts: &[String]) -> Result<CombinedSelector> {
    let (token_index, combinator) = parts
        .iter()
        .enumerate()
        .find_map(|(index, part)| {
            Combinator::from_str(part)
                .ok()
                .map(|combinator| (index, combinator))
        })
        .context("no combinator token (`>`, `+`, `~`, or a space) among the arguments")?;
    let left = build_selector(&parts[..token_index])?;
    let right = build_selector(&parts[token_index + 1..])?;
    Ok(combine(left, combinator, right))
}

/// Read the JSON source from a file path, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        io::read_to_string(io::stdin()).context("failed to read stdin")
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read '{path}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| (*part).to_string()).collect()
    }

    #[test]
    fn test_build_selector_renders_fragments_in_order() {
        let selector = build_selector(&args(&["element=div", "id=main", "class=wide"])).unwrap();
        assert_eq!(selector.stringify(), "div#main.wide");
    }

    #[test]
    fn test_build_selector_surfaces_ordering_errors() {
        let err = build_selector(&args(&["id=main", "element=div"])).unwrap_err();
        assert!(err.to_string().contains("cannot follow"));
    }

    #[test]
    fn test_split_fragment_rejects_unknown_kinds() {
        let err = split_fragment("universe=42").unwrap_err();
        assert!(err.to_string().contains("unknown fragment kind"));
    }

    #[test]
    fn test_split_fragment_rejects_missing_separator() {
        let err = split_fragment("element").unwrap_err();
        assert!(err.to_string().contains("kind=value"));
    }

    #[test]
    fn test_combine_parts_splits_at_the_token() {
        let combined = combine_parts(&args(&[
            "element=div",
            "id=main",
            "+",
            "element=table",
            "id=data",
        ]))
        .unwrap();
        assert_eq!(combined.stringify(), "div#main + table#data");
    }

    #[test]
    fn test_combine_parts_requires_a_token() {
        let err = combine_parts(&args(&["element=div", "element=p"])).unwrap_err();
        assert!(err.to_string().contains("combinator token"));
    }
}
