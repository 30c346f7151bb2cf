// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree controller.

use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::emit::{FieldSelection, SelectionEmitter};
use crate::error::PickerError;
use crate::expand::expand_node;
use crate::field::FieldDescriptor;
use crate::host::{FieldReflection, SceneHost};
use crate::node::{Node, NodeFor};
use crate::options::PickerOptions;

/// Child indices from the root to a row.
///
/// `[0]` is the first top-level row (the root's transform group), `[1, 2]` the
/// third child of the second top-level row, and so on. The empty path names
/// the root, which is not a row.
pub type RowPath = SmallVec<[usize; 8]>;

/// A visible row, as produced by [`FieldTree::rows`].
#[derive(Debug)]
pub struct VisibleRow<'a, O, C, T> {
    /// Where the row lives; pass this back to expand, collapse, or activate it.
    pub row: RowPath,
    /// Nesting depth; top-level rows are at depth 0.
    pub depth: usize,
    /// The row itself.
    pub node: &'a Node<O, C, T>,
}

/// Field tree bound to one root object.
///
/// The tree owns the root node and every materialized row below it. The host
/// graph and reflection facility are passed to each call that reads them, so
/// the tree never holds a borrow of the live scene between user actions.
///
/// On construction the root is expanded one level; every other row starts
/// collapsed. Expanding a row builds its children from the live graph,
/// collapsing drops them, and nothing is cached in between.
pub struct FieldTree<H: SceneHost + ?Sized> {
    root: Option<NodeFor<H>>,
    options: PickerOptions,
    emitter: SelectionEmitter<H::Object, H::Component>,
}

impl<H: SceneHost + ?Sized> FieldTree<H> {
    /// Creates a tree over `root` with default options.
    ///
    /// A `None` root yields a tree with no rows.
    #[must_use]
    pub fn new(host: &H, root: Option<H::Object>) -> Self {
        Self::with_options(host, root, PickerOptions::default())
    }

    /// Creates a tree over `root` with the given options.
    #[must_use]
    pub fn with_options(host: &H, root: Option<H::Object>, options: PickerOptions) -> Self {
        let mut tree = Self {
            root: root.map(|object| Node::root(host, object)),
            options,
            emitter: SelectionEmitter::new(),
        };
        tree.expand_root(host);
        tree
    }

    /// Discards every row and rebuilds the first level from the live graph.
    ///
    /// The listener stays registered.
    pub fn rebuild(&mut self, host: &H) {
        if let Some(root) = &mut self.root {
            root.clear_children();
        }
        self.expand_root(host);
    }

    /// Replaces the bound root object and rebuilds.
    pub fn set_root(&mut self, host: &H, root: Option<H::Object>) {
        self.root = root.map(|object| Node::root(host, object));
        self.expand_root(host);
    }

    fn expand_root(&mut self, host: &H) {
        let Some(root) = &mut self.root else {
            return;
        };
        if let Ok(children) = expand_node(root, host, &NoFields, &self.options) {
            #[cfg(feature = "tracing")]
            tracing::debug!(root = root.label(), rows = children.len(), "built field tree");
            root.set_children(children);
        }
    }

    /// Returns the root node, if a root object is bound.
    #[must_use]
    pub fn root(&self) -> Option<&NodeFor<H>> {
        self.root.as_ref()
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Returns the top-level rows.
    #[must_use]
    pub fn top_level(&self) -> &[NodeFor<H>] {
        match &self.root {
            Some(root) => root.children(),
            None => &[],
        }
    }

    /// Returns the row at `row`.
    #[must_use]
    pub fn node(&self, row: &[usize]) -> Option<&NodeFor<H>> {
        if row.is_empty() {
            return None;
        }
        self.root.as_ref()?.descendant(row)
    }

    /// Returns the visible rows in display order (depth-first, expanded rows
    /// followed by their children).
    ///
    /// This is the flat list a widget layer renders: indent by `depth`, show a
    /// foldout for branch rows and a select control for leaves.
    #[must_use]
    pub fn rows(&self) -> Vec<VisibleRow<'_, H::Object, H::Component, H::Type>> {
        let mut out = Vec::new();
        let mut prefix = RowPath::new();
        collect_rows(self.top_level(), &mut prefix, &mut out);
        out
    }

    /// Returns the number of visible rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.top_level().iter().map(Node::subtree_len).sum()
    }

    /// Expands the row at `row` and returns its new children.
    ///
    /// Already-expanded rows are left as they are and their current children
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`PickerError::NoSuchRow`] if `row` does not name a row.
    /// - [`PickerError::NotExpandable`] if the row is a leaf.
    pub fn expand<R>(
        &mut self,
        host: &H,
        reflection: &R,
        row: &[usize],
    ) -> Result<&[NodeFor<H>], PickerError>
    where
        R: FieldReflection<H::Type> + ?Sized,
    {
        let node = row_mut(&mut self.root, row)?;
        if !node.is_expanded() {
            let children = expand_node(node, host, reflection, &self.options)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(
                address = %node.address(),
                kind = %node.row_kind(),
                rows = children.len(),
                "expanded row"
            );
            node.set_children(children);
        }
        Ok(node.children())
    }

    /// Collapses the row at `row`, dropping its children and everything below.
    ///
    /// Collapsing a collapsed row or a leaf does nothing.
    ///
    /// # Errors
    ///
    /// [`PickerError::NoSuchRow`] if `row` does not name a row.
    pub fn collapse(&mut self, row: &[usize]) -> Result<(), PickerError> {
        let node = row_mut(&mut self.root, row)?;
        let _dropped = node.clear_children();
        #[cfg(feature = "tracing")]
        tracing::debug!(address = %node.address(), dropped = _dropped, "collapsed row");
        Ok(())
    }

    /// Expands a collapsed row or collapses an expanded one, like a foldout
    /// toggle. Returns whether the row is expanded afterwards.
    ///
    /// # Errors
    ///
    /// See [`FieldTree::expand`].
    pub fn toggle<R>(&mut self, host: &H, reflection: &R, row: &[usize]) -> Result<bool, PickerError>
    where
        R: FieldReflection<H::Type> + ?Sized,
    {
        if row_mut(&mut self.root, row)?.is_expanded() {
            self.collapse(row)?;
            Ok(false)
        } else {
            self.expand(host, reflection, row)?;
            Ok(true)
        }
    }

    /// Selects the leaf at `row`, notifying the listener.
    ///
    /// # Errors
    ///
    /// - [`PickerError::NoSuchRow`] if `row` does not name a row.
    /// - [`PickerError::NotALeaf`] if the row is not a field; the listener is
    ///   not called.
    pub fn activate(&mut self, row: &[usize]) -> Result<(), PickerError> {
        let leaf = match self.root.as_ref() {
            Some(root) if !row.is_empty() => root.descendant(row),
            _ => None,
        }
        .ok_or_else(|| no_such_row(row))?;
        self.emitter.emit(leaf)
    }

    /// Registers the selection listener, replacing any previous one.
    pub fn set_listener(
        &mut self,
        listener: impl FnMut(FieldSelection<H::Object, H::Component>) + 'static,
    ) {
        self.emitter.set_listener(listener);
    }

    /// Removes the selection listener.
    pub fn clear_listener(&mut self) {
        self.emitter.clear_listener();
    }

    /// Returns `true` if a selection listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.emitter.has_listener()
    }
}

impl<H> fmt::Debug for FieldTree<H>
where
    H: SceneHost + ?Sized,
    H::Object: fmt::Debug,
    H::Component: fmt::Debug,
    H::Type: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTree")
            .field("root", &self.root)
            .field("options", &self.options)
            .field("emitter", &self.emitter)
            .finish()
    }
}

fn collect_rows<'a, O, C, T>(
    nodes: &'a [Node<O, C, T>],
    prefix: &mut RowPath,
    out: &mut Vec<VisibleRow<'a, O, C, T>>,
) {
    for (index, node) in nodes.iter().enumerate() {
        prefix.push(index);
        out.push(VisibleRow {
            row: prefix.clone(),
            depth: prefix.len() - 1,
            node,
        });
        collect_rows(node.children(), prefix, out);
        prefix.pop();
    }
}

fn no_such_row(row: &[usize]) -> PickerError {
    PickerError::NoSuchRow {
        row: RowPath::from_slice(row),
    }
}

/// Resolves a non-empty row path to a mutable row.
fn row_mut<'a, O, C, T>(
    root: &'a mut Option<Node<O, C, T>>,
    row: &[usize],
) -> Result<&'a mut Node<O, C, T>, PickerError> {
    match root {
        Some(root) if !row.is_empty() => root.descendant_mut(row),
        _ => None,
    }
    .ok_or_else(|| no_such_row(row))
}

/// Reflection for rules that never enumerate fields.
struct NoFields;

impl<T> FieldReflection<T> for NoFields {
    fn fields_of(&self, _ty: &T) -> Vec<FieldDescriptor<T>> {
        Vec::new()
    }
}
