//! Minimal HTML node tree
//!
//! Views build a [`Node`] structure and serialize it once at the edge of the
//! handler. Text and attribute values are escaped on render.

use std::fmt::{self, Write};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["input", "link", "meta", "br", "hr", "img"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. A later call with the same name wins.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => write_escaped(f, text),
            Node::Element(element) => fmt::Display::fmt(element, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"", name)?;
            write_escaped(f, value)?;
            f.write_char('"')?;
        }
        f.write_char('>')?;
        if self.is_void() {
            return Ok(());
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Render a sequence of sibling nodes into one fragment
pub fn render_fragment<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = &'a Node>,
{
    nodes.into_iter().map(ToString::to_string).collect()
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

// Element shorthands used by the views
pub fn div() -> Element {
    Element::new("div")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn a() -> Element {
    Element::new("a")
}

pub fn ul() -> Element {
    Element::new("ul")
}

pub fn li() -> Element {
    Element::new("li")
}

pub fn h1() -> Element {
    Element::new("h1")
}

pub fn h2() -> Element {
    Element::new("h2")
}

pub fn label() -> Element {
    Element::new("label")
}

pub fn input() -> Element {
    Element::new("input")
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn form() -> Element {
    Element::new("form")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let node: Node = div()
            .class("outer")
            .child(p().text("hello"))
            .into();
        assert_eq!(node.to_string(), r#"<div class="outer"><p>hello</p></div>"#);
    }

    #[test]
    fn test_text_is_escaped() {
        let node: Node = p().text("<script>alert('x') & \"y\"</script>").into();
        assert_eq!(
            node.to_string(),
            "<p>&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_attribute_is_escaped() {
        let node: Node = a().attr("hx-get", "/chat/\"><b>").into();
        assert_eq!(
            node.to_string(),
            r#"<a hx-get="/chat/&quot;&gt;&lt;b&gt;"></a>"#
        );
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let node: Node = input().attr("name", "message").into();
        assert_eq!(node.to_string(), r#"<input name="message">"#);
    }

    #[test]
    fn test_attr_overwrites() {
        let el = div().class("a").class("b");
        assert_eq!(el.attrs.len(), 1);
        assert_eq!(el.get_attr("class"), Some("b"));
    }

    #[test]
    fn test_render_fragment_concatenates_siblings() {
        let nodes: Vec<Node> = vec![p().text("a").into(), "b".into()];
        assert_eq!(render_fragment(&nodes), "<p>a</p>b");
    }
}
