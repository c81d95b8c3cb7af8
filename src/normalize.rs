//! Flattening of `<packages>` into class records.
//!
//! Cobertura generators differ in how they nest classes.
//! `packages > package > classes > class` is the common form, but some emit
//! `<class>` directly under `<package>`, and a parsed tree only turns a child
//! into a sequence when it repeats.
//! Every level is normalized with [`OneOrMany::as_sequence`].

use crate::document::{Element, OneOrMany, Value};

/// A `<class>` element of the report.
#[derive(Debug, Clone, Copy)]
pub struct ClassRecord<'a>(&'a Element);

impl<'a> ClassRecord<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &'a Element {
        self.0
    }

    pub fn filename(&self) -> Option<&'a str> {
        self.0.attr("filename")
    }

    pub fn name(&self) -> Option<&'a str> {
        self.0.attr("name")
    }

    /// The `<line>` records under `<lines>`, empty when absent.
    pub fn lines(&self) -> Vec<&'a Element> {
        self.0
            .child("lines")
            .map(|lines| lines.children("line"))
            .unwrap_or_default()
    }
}

/// Flatten the `packages` entry of the coverage root into class records,
/// in document order. Slots that could not be read as a class are `None`.
pub fn process_packages(packages: Option<&OneOrMany<Value>>) -> Vec<Option<ClassRecord<'_>>> {
    let Some(packages) = packages.and_then(OneOrMany::as_one) else {
        return match packages {
            // Repeated <packages> wrappers are not a shape we read.
            Some(_) => vec![None],
            None => Vec::new(),
        };
    };

    match packages.as_element().and_then(|p| p.get("package")) {
        Some(OneOrMany::Many(items)) => items.iter().flat_map(process_package).collect(),
        Some(OneOrMany::One(item)) => process_package(item),
        None => process_package(packages),
    }
}

/// Class records of a single package.
pub fn process_package(package: &Value) -> Vec<Option<ClassRecord<'_>>> {
    let Some(package) = package.as_element() else {
        return vec![None];
    };

    let nested = package
        .child("classes")
        .and_then(|classes| classes.get("class"));
    let classes = nested.or_else(|| package.get("class"));

    match classes {
        Some(classes) => classes
            .as_sequence()
            .into_iter()
            .map(|class| class.as_element().map(ClassRecord::new))
            .collect(),
        None => vec![None],
    }
}

/// Drop the slots that did not hold a class.
pub fn filter_present(classes: Vec<Option<ClassRecord<'_>>>) -> Vec<ClassRecord<'_>> {
    classes.into_iter().flatten().collect()
}
