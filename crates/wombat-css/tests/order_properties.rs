//! Property tests for the fragment ordering rules and rendering.

use quickcheck_macros::quickcheck;
use wombat_css::{CompoundSelector, FragmentKind, SelectorError};

const KINDS: [FragmentKind; 6] = [
    FragmentKind::Element,
    FragmentKind::Id,
    FragmentKind::Class,
    FragmentKind::Attribute,
    FragmentKind::PseudoClass,
    FragmentKind::PseudoElement,
];

fn kind_at(index: u8) -> FragmentKind {
    KINDS[usize::from(index) % KINDS.len()]
}

fn apply(
    selector: CompoundSelector,
    kind: FragmentKind,
    value: &str,
) -> Result<CompoundSelector, SelectorError> {
    match kind {
        FragmentKind::Element => selector.element(value),
        FragmentKind::Id => selector.id(value),
        FragmentKind::Class => selector.class(value),
        FragmentKind::Attribute => selector.attribute(value),
        FragmentKind::PseudoClass => selector.pseudo_class(value),
        FragmentKind::PseudoElement => selector.pseudo_element(value),
    }
}

fn decorate(kind: FragmentKind, value: &str) -> String {
    match kind {
        FragmentKind::Element => value.to_string(),
        FragmentKind::Id => format!("#{value}"),
        FragmentKind::Class => format!(".{value}"),
        FragmentKind::Attribute => format!("[{value}]"),
        FragmentKind::PseudoClass => format!(":{value}"),
        FragmentKind::PseudoElement => format!("::{value}"),
    }
}

/// Reference acceptance predicate: non-decreasing category rank, with no
/// repeated single-occurrence kind.
fn sequence_is_valid(kinds: &[FragmentKind]) -> bool {
    let mut last: Option<FragmentKind> = None;
    for &kind in kinds {
        if let Some(previous) = last {
            if kind < previous || (kind == previous && kind.is_singleton()) {
                return false;
            }
        }
        last = Some(kind);
    }
    true
}

/// Turn arbitrary bytes into a sequence the ordering rules accept: sort by
/// category and keep at most one of each single-occurrence kind.
fn valid_sequence(raw: &[u8]) -> Vec<FragmentKind> {
    let mut kinds: Vec<FragmentKind> = raw.iter().map(|&b| kind_at(b)).collect();
    kinds.sort_unstable();
    let mut seen = Vec::new();
    kinds.retain(|&kind| {
        if kind.is_singleton() {
            if seen.contains(&kind) {
                return false;
            }
            seen.push(kind);
        }
        true
    });
    kinds
}

#[quickcheck]
fn prop_builder_accepts_exactly_the_valid_sequences(raw: Vec<u8>) -> bool {
    let kinds: Vec<FragmentKind> = raw.iter().map(|&b| kind_at(b)).collect();
    let built = kinds
        .iter()
        .enumerate()
        .try_fold(CompoundSelector::new(), |selector, (i, &kind)| {
            apply(selector, kind, &format!("v{i}"))
        });
    built.is_ok() == sequence_is_valid(&kinds)
}

#[quickcheck]
fn prop_valid_sequences_render_in_category_order(raw: Vec<u8>) -> bool {
    let kinds = valid_sequence(&raw);
    let built = kinds
        .iter()
        .enumerate()
        .try_fold(CompoundSelector::new(), |selector, (i, &kind)| {
            apply(selector, kind, &format!("v{i}"))
        });
    let Ok(selector) = built else {
        return false;
    };
    let expected: String = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| decorate(kind, &format!("v{i}")))
        .collect();
    selector.stringify() == expected
}

#[quickcheck]
fn prop_stringify_is_idempotent(raw: Vec<u8>) -> bool {
    let built = valid_sequence(&raw)
        .iter()
        .enumerate()
        .try_fold(CompoundSelector::new(), |selector, (i, &kind)| {
            apply(selector, kind, &format!("v{i}"))
        });
    let Ok(selector) = built else {
        return false;
    };
    selector.stringify() == selector.stringify()
}

#[quickcheck]
fn prop_class_chain_renders_every_class(count: u8) -> bool {
    let count = usize::from(count % 8) + 1;
    let mut selector = CompoundSelector::new();
    for i in 0..count {
        selector = match selector.class(format!("c{i}")) {
            Ok(next) => next,
            Err(_) => return false,
        };
    }
    let expected: String = (0..count).map(|i| format!(".c{i}")).collect();
    selector.stringify() == expected
}
