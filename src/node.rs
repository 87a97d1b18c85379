//! Document tree data model.
//!
//! A [`Node`] is the read-only input to the extraction engine: a rooted,
//! acyclic tree of elements, text, and comments in document order. The serde
//! representation matches the hast JSON shape
//! (`{"type": "element", "tagName": …, "properties": …, "children": […]}`),
//! so trees produced by any hast-compatible emitter can be loaded directly.
//!
//! Malformed trees are tolerated rather than rejected: missing `children` or
//! `properties` deserialize to empty, and unknown node kinds collapse into
//! the inert [`Node::Other`] variant, which contributes nothing to extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node in a parsed markup document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// The document root. Has children but no tag.
    Root {
        /// Child nodes in document order.
        #[serde(default)]
        children: Vec<Node>,
    },

    /// An element with a tag name, a property bag, and children.
    Element {
        /// Lowercase tag name, e.g. `"p"` or `"td"`.
        #[serde(rename = "tagName")]
        tag_name: String,
        /// Properties such as `hidden`, `open`, `wrap`, or `noWrap`.
        #[serde(default)]
        properties: BTreeMap<String, Value>,
        /// Child nodes in document order.
        #[serde(default)]
        children: Vec<Node>,
    },

    /// A literal text node.
    Text {
        /// The raw text value.
        value: String,
    },

    /// A comment node. Ignored during extraction except at the top level.
    Comment {
        /// The comment body.
        value: String,
    },

    /// Any other node kind (doctype and friends). Passes through inertly.
    #[serde(other)]
    Other,
}

impl Node {
    /// Creates a root node.
    #[must_use]
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    /// Creates an element with an empty property bag.
    #[must_use]
    pub fn element(tag_name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag_name: tag_name.into(),
            properties: BTreeMap::new(),
            children,
        }
    }

    /// Creates an element with the given properties.
    #[must_use]
    pub fn element_with<K: Into<String>>(
        tag_name: impl Into<String>,
        properties: impl IntoIterator<Item = (K, Value)>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            tag_name: tag_name.into(),
            properties: properties
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
            children,
        }
    }

    /// Creates a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Creates a comment node.
    #[must_use]
    pub fn comment(value: impl Into<String>) -> Self {
        Node::Comment {
            value: value.into(),
        }
    }

    /// Returns the tag name if this is an element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    /// Returns true if this is an element node.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    /// Returns the children, or an empty slice for nodes without a child
    /// container. Nodes without children are never an error.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children } | Node::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Returns the mutable child container for roots and elements.
    #[must_use]
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children } | Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Returns true if this node kind carries a child container at all,
    /// regardless of whether it is currently empty.
    #[must_use]
    pub fn has_child_container(&self) -> bool {
        matches!(self, Node::Root { .. } | Node::Element { .. })
    }

    /// Returns the literal value of a text or comment node.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text { value } | Node::Comment { value } => Some(value),
            _ => None,
        }
    }

    /// Looks up a property on an element. Non-elements have no properties.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        match self {
            Node::Element { properties, .. } => properties.get(name),
            _ => None,
        }
    }
}

/// JS-style truthiness for property values: `false`, `0`, `""`, and `null`
/// are falsy; everything else (including empty arrays and objects) is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn children_of_leaf_nodes_are_empty() {
        assert!(Node::text("x").children().is_empty());
        assert!(Node::comment("x").children().is_empty());
        assert!(Node::Other.children().is_empty());
    }

    #[test]
    fn property_lookup_only_on_elements() {
        let el = Node::element_with("dialog", [("open", json!(true))], vec![]);
        assert_eq!(el.property("open"), Some(&json!(true)));
        assert_eq!(el.property("missing"), None);
        assert_eq!(Node::text("x").property("open"), None);
    }

    #[test]
    fn deserializes_hast_json_shape() {
        let raw = r#"{
            "type": "element",
            "tagName": "p",
            "properties": {"hidden": true},
            "children": [{"type": "text", "value": "hi"}]
        }"#;
        let node: Node = serde_json::from_str(raw).expect("valid hast JSON");
        assert_eq!(node.tag(), Some("p"));
        assert_eq!(node.property("hidden"), Some(&json!(true)));
        assert_eq!(node.children()[0].value(), Some("hi"));
    }

    #[test]
    fn missing_children_and_properties_default_to_empty() {
        let node: Node =
            serde_json::from_str(r#"{"type": "element", "tagName": "br"}"#).expect("valid");
        assert!(node.children().is_empty());
        assert_eq!(node.property("anything"), None);
    }

    #[test]
    fn unknown_node_kinds_deserialize_to_other() {
        let node: Node =
            serde_json::from_str(r#"{"type": "doctype"}"#).expect("unknown kind tolerated");
        assert_eq!(node, Node::Other);
    }

    #[test]
    fn serializes_with_type_tag() {
        let value = serde_json::to_value(Node::text("hi")).expect("serializable");
        assert_eq!(value, json!({"type": "text", "value": "hi"}));
    }

    #[test]
    fn truthiness_follows_js_rules() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("hidden")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&Value::Null));
    }
}
