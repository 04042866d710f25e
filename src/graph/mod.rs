//! Traversal engine: descendant/ancestor charts, descent test and cousins.
//!
//! Every query goes through a [`Traversal`], a read-only handle over a
//! [`Genealogy`] that resolves foreign keys to neighbors. Nothing here
//! mutates the registries; sibling and kid lists are always fresh vectors
//! borrowed from the graph.

mod ancestors;
mod cousins;
mod descendants;

pub use cousins::ordinal;

use crate::model::Genealogy;

/// Recursion guard for walks over possibly cyclic input.
///
/// `max_depth` counts generations from the starting person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalLimits {
    pub max_depth: Option<usize>,
}

impl TraversalLimits {
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn max_depth(depth: usize) -> Self {
        Self { max_depth: Some(depth) }
    }

    /// Whether a walk may visit generation `depth`
    pub fn allows(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

/// Text layout of descendant charts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Appended to the prefix for each generation of children
    pub indent: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            indent: "  |--".to_string(),
        }
    }
}

/// Read-only query handle over a parsed genealogy
#[derive(Debug, Clone)]
pub struct Traversal<'g> {
    genealogy: &'g Genealogy,
    limits: TraversalLimits,
    style: ChartStyle,
}

impl<'g> Traversal<'g> {
    pub fn new(genealogy: &'g Genealogy) -> Self {
        Self {
            genealogy,
            limits: TraversalLimits::unbounded(),
            style: ChartStyle::default(),
        }
    }

    pub fn with_limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn genealogy(&self) -> &'g Genealogy {
        self.genealogy
    }

    pub fn limits(&self) -> TraversalLimits {
        self.limits
    }
}

#[cfg(test)]
pub(crate) fn render<F>(write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> crate::error::Result<()>,
{
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}
