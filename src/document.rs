//! Generic tree produced by parsing an XML document.
//!
//! Attributes and child elements of an element share a single namespace of
//! entries. A name that occurs once maps to a bare value; a name that occurs
//! several times maps to a sequence. Consumers go through
//! [`OneOrMany::as_sequence`] instead of assuming either shape.

use std::collections::BTreeMap;

/// A value that is either a single instance or an ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View the value as a sequence, wrapping a single instance.
    #[must_use]
    pub fn as_sequence(&self) -> Vec<&T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items.iter().collect(),
        }
    }

    /// The single instance, or `None` when this is a sequence.
    #[must_use]
    pub fn as_one(&self) -> Option<&T> {
        match self {
            OneOrMany::One(item) => Some(item),
            OneOrMany::Many(_) => None,
        }
    }

    /// Append another instance, turning a single value into a sequence.
    fn push(self, item: T) -> Self {
        match self {
            OneOrMany::One(first) => OneOrMany::Many(vec![first, item]),
            OneOrMany::Many(mut items) => {
                items.push(item);
                OneOrMany::Many(items)
            }
        }
    }
}

/// A scalar string or a nested element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Element(Element),
}

impl Value {
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Value::Element(element) => Some(element),
            Value::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Element(_) => None,
        }
    }
}

/// An element with its attributes merged into its child entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    entries: BTreeMap<String, OneOrMany<Value>>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Inserting a name that already exists turns the entry
    /// into a sequence, preserving insertion order.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        let entry = match self.entries.remove(&name) {
            Some(existing) => existing.push(value),
            None => OneOrMany::One(value),
        };
        self.entries.insert(name, entry);
    }

    /// Builder form of [`Element::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder shorthand for a scalar entry.
    #[must_use]
    pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(name, Value::Text(value.into()))
    }

    /// Builder shorthand for a nested element entry.
    #[must_use]
    pub fn with_child(self, name: impl Into<String>, child: Element) -> Self {
        self.with(name, Value::Element(child))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OneOrMany<Value>> {
        self.entries.get(name)
    }

    /// A single scalar entry.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_one()?.as_text()
    }

    /// A single nested element entry.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.get(name)?.as_one()?.as_element()
    }

    /// Every element stored under `name`, whichever shape the entry has.
    /// Scalar values are skipped.
    #[must_use]
    pub fn children(&self, name: &str) -> Vec<&Element> {
        self.get(name)
            .map(|entry| {
                entry
                    .as_sequence()
                    .into_iter()
                    .filter_map(Value::as_element)
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_insert_stays_bare() {
        let element = Element::new().with_attr("name", "Foo");
        assert_eq!(element.attr("name"), Some("Foo"));
        assert!(matches!(element.get("name"), Some(OneOrMany::One(_))));
    }

    #[test]
    fn test_repeated_insert_becomes_sequence() {
        let element = Element::new()
            .with_child("line", Element::new().with_attr("number", "1"))
            .with_child("line", Element::new().with_attr("number", "2"))
            .with_child("line", Element::new().with_attr("number", "3"));

        assert!(element.child("line").is_none());
        let numbers: Vec<_> = element
            .children("line")
            .iter()
            .map(|l| l.attr("number").unwrap())
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_children_wraps_single_element() {
        let element = Element::new().with_child("class", Element::new().with_attr("name", "A"));
        assert_eq!(element.children("class").len(), 1);
        assert!(element.child("class").is_some());
    }

    #[test]
    fn test_children_skips_text() {
        let element = Element::new()
            .with_attr("class", "")
            .with_child("class", Element::new());
        assert_eq!(element.children("class").len(), 1);
        assert!(element.children("missing").is_empty());
    }

    #[test]
    fn test_attr_on_element_entry_is_none() {
        let element = Element::new().with_child("lines", Element::new());
        assert_eq!(element.attr("lines"), None);
    }
}
