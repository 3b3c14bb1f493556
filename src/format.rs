//! Deterministic XML pretty-printer.
//!
//! One fixed global style: the declaration line first, then the root
//! element with each nesting level indented by `indent` spaces. Childless
//! elements self-close; elements whose children are all text/CDATA render
//! inline (`<priority>2</priority>`); whitespace-only text nodes inside
//! block elements are dropped and other text is trimmed onto its own line.
//! Text escapes `&`, `<`, `>`; attribute values additionally escape quotes.

use crate::xml::{Declaration, Document, Element, XmlNode};
use quick_xml::escape::{escape, partial_escape};

/// Indent width applied when neither CLI nor config says otherwise.
pub const DEFAULT_INDENT: usize = 2;

/// Serialize `doc` to pretty-printed XML, declaration included.
///
/// Deterministic: equal documents produce byte-identical text, and
/// re-parsing the output yields an equivalent document.
pub fn to_pretty_string(doc: &Document, indent: usize) -> String {
    let default_decl = Declaration {
        version: "1.0".into(),
        encoding: Some("UTF-8".into()),
    };
    let decl = doc.declaration.as_ref().unwrap_or(&default_decl);

    let mut out = String::new();
    serialize_declaration(decl, &mut out);
    out.push('\n');
    serialize_element(&doc.root, &mut out, indent, 0);
    out.push('\n');
    out
}

fn serialize_declaration(decl: &Declaration, out: &mut String) {
    out.push_str("<?xml version=\"");
    out.push_str(&decl.version);
    out.push('"');
    if let Some(ref encoding) = decl.encoding {
        out.push_str(" encoding=\"");
        out.push_str(encoding);
        out.push('"');
    }
    out.push_str("?>");
}

fn serialize_element(el: &Element, out: &mut String, indent: usize, depth: usize) {
    out.push('<');
    out.push_str(el.name());
    for (name, value) in el.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }

    if el.children().is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    let inline = el
        .children()
        .iter()
        .all(|n| matches!(n, XmlNode::Text(_) | XmlNode::CData(_)));
    if inline {
        for child in el.children() {
            serialize_node(child, out, indent, depth + 1);
        }
    } else {
        out.push('\n');
        for child in el.children() {
            match child {
                XmlNode::Text(t) if t.trim().is_empty() => continue,
                XmlNode::Text(t) => {
                    push_indent(out, indent, depth + 1);
                    out.push_str(&partial_escape(t.trim()));
                    out.push('\n');
                }
                other => {
                    push_indent(out, indent, depth + 1);
                    serialize_node(other, out, indent, depth + 1);
                    out.push('\n');
                }
            }
        }
        push_indent(out, indent, depth);
    }

    out.push_str("</");
    out.push_str(el.name());
    out.push('>');
}

fn serialize_node(node: &XmlNode, out: &mut String, indent: usize, depth: usize) {
    match node {
        XmlNode::Element(el) => serialize_element(el, out, indent, depth),
        XmlNode::Text(t) => out.push_str(&partial_escape(t)),
        XmlNode::CData(data) => {
            out.push_str("<![CDATA[");
            out.push_str(data);
            out.push_str("]]>");
        }
        XmlNode::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
    }
}

fn push_indent(out: &mut String, indent: usize, depth: usize) {
    for _ in 0..indent * depth {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_prints_nested_elements() {
        let doc = Document::parse(
            r#"<ruleset name="r"><rule ref="a/B"><priority>2</priority></rule><rule ref="c"/></ruleset>"#,
        )
        .unwrap();
        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<ruleset name="r">
  <rule ref="a/B">
    <priority>2</priority>
  </rule>
  <rule ref="c"/>
</ruleset>
"#;
        assert_eq!(to_pretty_string(&doc, 2), expected);
    }

    #[test]
    fn test_indent_width_is_configurable() {
        let doc = Document::parse(r#"<a><b/></a>"#).unwrap();
        let text = to_pretty_string(&doc, 4);
        assert!(text.contains("\n    <b/>\n"));
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let mut root = Element::new("root");
        root.set_attr("q", "a \"b\" & c");
        let mut child = Element::new("child");
        child.push_child(XmlNode::Text("1 < 2 & 3".into()));
        root.push_element(child);
        let doc = Document {
            declaration: None,
            root,
        };
        let text = to_pretty_string(&doc, 2);
        assert!(text.contains(r#"q="a &quot;b&quot; &amp; c""#));
        assert!(text.contains("<child>1 &lt; 2 &amp; 3</child>"));
        // Missing declarations fall back to the standard one.
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    }

    #[test]
    fn test_comments_and_cdata_survive_below_the_root() {
        let doc = Document::parse(
            "<root><rule ref=\"x\"><!-- why --><example><![CDATA[if (a) { }]]></example></rule></root>",
        )
        .unwrap();
        let text = to_pretty_string(&doc, 2);
        assert!(text.contains("<!-- why -->"));
        assert!(text.contains("<example><![CDATA[if (a) { }]]></example>"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let doc = Document::parse(
            r#"<ruleset name="r">
                <description>  My rules  </description>
                <rule ref="a"><priority>2</priority></rule>
            </ruleset>"#,
        )
        .unwrap();
        let once = to_pretty_string(&doc, 2);
        let twice = to_pretty_string(&Document::parse(&once).unwrap(), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reparsing_output_is_structurally_equivalent() {
        let doc = Document::parse(
            r#"<ruleset a="1" b="2"><rule ref="x"><priority>5</priority></rule></ruleset>"#,
        )
        .unwrap();
        let reparsed = Document::parse(&to_pretty_string(&doc, 2)).unwrap();
        assert_eq!(reparsed.root.name(), doc.root.name());
        assert_eq!(reparsed.root.attributes(), doc.root.attributes());
        // Equivalence modulo insignificant whitespace: canonical forms match.
        assert_eq!(to_pretty_string(&reparsed, 2), to_pretty_string(&doc, 2));
    }
}
