//! Display-element tree produced by field formatters.
//!
//! Attribute order is deterministic (sorted by name) so rendered markup is
//! stable across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Elements that close themselves and never carry children in HTML.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// A renderable element: tag, attributes and nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_render() {
        let element = Element::new("span")
            .class("wrapper")
            .child(Element::new("img").attr("src", "public://a.png"));

        assert_eq!(
            element.to_html(),
            r#"<span class="wrapper"><img src="public://a.png"></span>"#
        );
    }

    #[test]
    fn test_attributes_are_escaped_and_ordered() {
        let element = Element::new("img")
            .attr("title", r#"He said "hi" & left"#)
            .attr("alt", "<script>");

        assert_eq!(
            element.to_html(),
            r#"<img alt="&lt;script&gt;" title="He said &quot;hi&quot; &amp; left">"#
        );
    }

    #[test]
    fn test_non_void_element_closes() {
        assert_eq!(Element::new("div").to_html(), "<div></div>");
    }
}
