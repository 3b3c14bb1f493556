//! Document reorderer: rebuilds a ruleset with its root children sorted.
//!
//! Two-phase build: first collect the root's element children in source
//! order together with their keys, then stable-sort and attach the original
//! subtrees to a fresh root shell. Non-element nodes between the root's
//! children (whitespace, comments) are dropped; everything below the first
//! level moves unmodified.

use crate::error::Result;
use crate::key::{compute_sort_key, SortKey};
use crate::xml::{Declaration, Document, Element, XmlNode};

/// Parse `input` and return a new document whose root children are sorted
/// ascending by key. The root tag and attributes are preserved; the output
/// declaration is always `version="1.0" encoding="UTF-8"`.
pub fn reorder(input: &str) -> Result<Document> {
    let doc = Document::parse(input)?;
    let root = doc.root;
    let mut shell = Element::with_attributes(root.name().to_string(), root.attributes().to_vec());

    // Phase one: element children in source order, each with its key.
    let mut keyed: Vec<(SortKey, Element)> = Vec::new();
    for node in root.into_children() {
        if let XmlNode::Element(child) = node {
            let key = compute_sort_key(&child, keyed.len() + 1)?;
            keyed.push((key, child));
        }
    }

    // Phase two: stable sort, then attach. Equal keys keep source order.
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, child) in keyed {
        shell.push_element(child);
    }

    Ok(Document {
        declaration: Some(Declaration {
            version: "1.0".into(),
            encoding: Some("UTF-8".into()),
        }),
        root: shell,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;

    fn child_names_and_refs(doc: &Document) -> Vec<(String, Option<String>)> {
        doc.root
            .child_elements()
            .map(|e| (e.name().to_string(), e.attr("ref").map(String::from)))
            .collect()
    }

    #[test]
    fn test_sorts_rules_case_insensitively_with_description_first() {
        let doc = reorder(
            r#"<ruleset name="r">
    <rule ref="b/Y"/>
    <description>docs</description>
    <rule ref="a/X"/>
    <rule ref="a/x"/>
</ruleset>"#,
        )
        .unwrap();
        assert_eq!(
            child_names_and_refs(&doc),
            vec![
                ("description".to_string(), None),
                ("rule".to_string(), Some("a/X".to_string())),
                ("rule".to_string(), Some("a/x".to_string())),
                ("rule".to_string(), Some("b/Y".to_string())),
            ]
        );
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let doc = reorder(
            r#"<ruleset>
    <rule ref="Same" name="first"/>
    <rule ref="same" name="second"/>
    <rule ref="SAME" name="third"/>
</ruleset>"#,
        )
        .unwrap();
        let names: Vec<_> = doc
            .root
            .child_elements()
            .map(|e| e.attr("name").unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_root_tag_and_attributes_preserved() {
        let doc = reorder(
            r#"<ruleset name="My rules" xmlns="http://pmd.sourceforge.net/ruleset/2.0.0"><rule ref="x"/></ruleset>"#,
        )
        .unwrap();
        assert_eq!(doc.root.name(), "ruleset");
        assert_eq!(
            doc.root.attributes(),
            &[
                ("name".to_string(), "My rules".to_string()),
                (
                    "xmlns".to_string(),
                    "http://pmd.sourceforge.net/ruleset/2.0.0".to_string()
                ),
            ]
        );
        let decl = doc.declaration.unwrap();
        assert_eq!(decl.version, "1.0");
        assert_eq!(decl.encoding.as_deref(), Some("UTF-8"));
    }

    #[test]
    fn test_subtrees_move_unmodified() {
        let doc = reorder(
            r#"<ruleset>
    <rule ref="b">
        <priority>2</priority>
        <!-- tuned down -->
    </rule>
    <rule ref="a"><properties><property name="p" value="v"/></properties></rule>
</ruleset>"#,
        )
        .unwrap();
        let first = doc.root.child_elements().next().unwrap();
        assert_eq!(first.attr("ref"), Some("a"));
        let properties = first.child_elements().next().unwrap();
        let property = properties.child_elements().next().unwrap();
        assert_eq!(property.attr("value"), Some("v"));

        let second = doc.root.child_elements().nth(1).unwrap();
        assert!(second
            .children()
            .iter()
            .any(|n| matches!(n, XmlNode::Comment(c) if c.contains("tuned down"))));
    }

    #[test]
    fn test_non_element_children_of_root_are_dropped() {
        let doc = reorder(
            r#"<ruleset>stray text<!-- top-level comment --><rule ref="x"/></ruleset>"#,
        )
        .unwrap();
        assert_eq!(doc.root.children().len(), 1);
        assert!(matches!(&doc.root.children()[0], XmlNode::Element(_)));
    }

    #[test]
    fn test_rule_without_ref_fails_the_run() {
        let err = reorder(r#"<ruleset><rule ref="a"/><rule/></ruleset>"#).unwrap_err();
        match err {
            SortError::MissingRef { position } => assert_eq!(position, 2),
            other => panic!("expected MissingRef, got {other}"),
        }
    }

    #[test]
    fn test_parse_failure_propagates() {
        assert!(matches!(
            reorder("<ruleset><rule></ruleset>"),
            Err(SortError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_ruleset_keeps_root_only() {
        let doc = reorder(r#"<ruleset name="empty"></ruleset>"#).unwrap();
        assert_eq!(doc.root.children().len(), 0);
        assert_eq!(doc.root.attr("name"), Some("empty"));
    }
}
