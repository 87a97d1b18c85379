//! Node-matching selectors.
//!
//! A [`Selector`] is a predicate over [`Node`]s, resolved once at setup time
//! and reused across a whole tree walk. The variants cover the declarative
//! test shapes the engine needs: tag-name equality, property-bag equality,
//! any-of lists, custom test functions, and the match-everything selector.
//!
//! Apart from [`Selector::Any`], every variant matches elements only.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::node::Node;

/// A custom test invoked with the node, its index in the parent, and the
/// parent itself (both absent when matching a detached node).
pub type TestFn = fn(&Node, Option<usize>, Option<&Node>) -> bool;

/// A compiled node predicate.
#[derive(Debug, Clone)]
pub enum Selector {
    /// Matches every node, element or not.
    Any,
    /// Matches elements with exactly this tag name.
    Tag(String),
    /// Matches elements whose properties are strictly equal to every entry
    /// in the bag. A missing property compares as unequal, not as missing-ok.
    Props(BTreeMap<String, Value>),
    /// Matches elements matched by any selector in the list.
    AnyOf(Vec<Selector>),
    /// Matches elements for which the test function returns true.
    Test(TestFn),
}

impl Selector {
    /// Convenience constructor for a tag-name selector.
    #[must_use]
    pub fn tag(name: &str) -> Self {
        Selector::Tag(name.to_owned())
    }

    /// Convenience constructor for an any-of-tags selector.
    #[must_use]
    pub fn any_tag(names: &[&str]) -> Self {
        Selector::AnyOf(names.iter().map(|name| Selector::tag(name)).collect())
    }

    /// Compiles a declarative JSON test description into a selector.
    ///
    /// Accepted shapes: `null` (match everything), a string (tag name), an
    /// array (any-of, each member compiled recursively), or an object
    /// (property bag). Anything else is an invalid-argument condition.
    pub fn compile(test: &Value) -> Result<Self> {
        match test {
            Value::Null => Ok(Selector::Any),
            Value::String(tag) => Ok(Selector::Tag(tag.clone())),
            Value::Array(tests) => {
                let compiled = tests.iter().map(Selector::compile).collect::<Result<_>>()?;
                Ok(Selector::AnyOf(compiled))
            }
            Value::Object(bag) => Ok(Selector::Props(
                bag.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            )),
            other => Err(Error::InvalidSelector(format!(
                "expected null, string, array, or object as test, got {other}"
            ))),
        }
    }

    /// Matches a detached node (no index or parent context).
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        self.matches_at(node, None, None)
    }

    /// Matches a node in its parent context.
    #[must_use]
    pub fn matches_at(&self, node: &Node, index: Option<usize>, parent: Option<&Node>) -> bool {
        match self {
            Selector::Any => true,
            Selector::Tag(tag) => node.tag() == Some(tag),
            Selector::Props(bag) => {
                node.is_element()
                    && bag
                        .iter()
                        .all(|(key, value)| node.property(key) == Some(value))
            }
            Selector::AnyOf(selectors) => {
                node.is_element()
                    && selectors
                        .iter()
                        .any(|selector| selector.matches_at(node, index, parent))
            }
            Selector::Test(test) => node.is_element() && test(node, index, parent),
        }
    }
}
