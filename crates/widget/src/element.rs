//! Host-agnostic container description.
//!
//! A thin stand-in for whatever the host calls an element: a class list for
//! discovery, key/value attributes for per-instance options, and a bounding
//! rect for geometry. Hosts build these once at startup.

use std::collections::HashMap;

use crate::types::ContainerRect;

#[derive(Debug, Clone, Default)]
pub struct Element {
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    rect: ContainerRect,
}

impl Element {
    pub fn new(rect: ContainerRect) -> Self {
        Self {
            classes: Vec::new(),
            attrs: HashMap::new(),
            rect,
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn rect(&self) -> ContainerRect {
        self.rect
    }
}
