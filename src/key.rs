//! Sort key extraction for the root's child elements.
//!
//! Dispatch is a closed set of element kinds: `rule` elements key on their
//! lowercased `ref` attribute, everything else (e.g. `description`) shares
//! the `Unkeyed` sentinel that sorts ahead of every keyed rule. Adding a new
//! kind means one new variant and one new match arm.

use crate::error::SortError;
use crate::xml::Element;

/// The closed set of element kinds that participate in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Rule,
    Other,
}

impl ElementKind {
    pub fn of(element: &Element) -> Self {
        match element.name() {
            "rule" => ElementKind::Rule,
            _ => ElementKind::Other,
        }
    }
}

/// Totally ordered sort key. `Unkeyed` compares smaller than every `Ref`
/// and equal among themselves, so the stable sort keeps unkeyed elements
/// in source order ahead of the rules.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Unkeyed,
    Ref(String),
}

/// Compute the key for one direct child of the root.
///
/// `position` is the 1-based position among the root's element children,
/// used to identify the offending element when a `rule` lacks `ref`.
/// Comparison on `Ref` keys is ordinal on the lowercased string.
pub fn compute_sort_key(element: &Element, position: usize) -> Result<SortKey, SortError> {
    match ElementKind::of(element) {
        ElementKind::Rule => match element.attr("ref") {
            Some(value) => Ok(SortKey::Ref(value.to_lowercase())),
            None => Err(SortError::MissingRef { position }),
        },
        ElementKind::Other => Ok(SortKey::Unkeyed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_keys_on_lowercased_ref() {
        let mut rule = Element::new("rule");
        rule.set_attr("ref", "rulesets/java/basic.xml/UnconditionalIfStatement");
        let key = compute_sort_key(&rule, 1).unwrap();
        assert_eq!(
            key,
            SortKey::Ref("rulesets/java/basic.xml/unconditionalifstatement".into())
        );
    }

    #[test]
    fn test_rule_without_ref_fails_with_position() {
        let rule = Element::new("rule");
        match compute_sort_key(&rule, 3) {
            Err(SortError::MissingRef { position }) => assert_eq!(position, 3),
            other => panic!("expected MissingRef, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_other_elements_are_unkeyed() {
        let description = Element::new("description");
        assert_eq!(
            compute_sort_key(&description, 1).unwrap(),
            SortKey::Unkeyed
        );
    }

    #[test]
    fn test_unrelated_and_namespaced_attributes_tolerated() {
        let mut rule = Element::new("rule");
        rule.set_attr("xsi:extra", "ignored");
        rule.set_attr("ref", "A/B");
        rule.set_attr("name", "also ignored");
        assert_eq!(
            compute_sort_key(&rule, 1).unwrap(),
            SortKey::Ref("a/b".into())
        );
    }

    #[test]
    fn test_key_ordering() {
        assert!(SortKey::Unkeyed < SortKey::Ref(String::new()));
        assert!(SortKey::Ref("a/x".into()) < SortKey::Ref("b/y".into()));
        assert_eq!(SortKey::Unkeyed, SortKey::Unkeyed);
    }
}
