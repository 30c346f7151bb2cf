// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree rows.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::field::AnimatableType;
use crate::host::SceneHost;
use crate::path::FieldPath;

/// What a row represents, and therefore which rule builds its children.
///
/// `T` is the host's runtime type key; it is carried by [`NodeKind::ObjectField`]
/// rows so their expansion can enumerate the nested type's fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind<T> {
    /// The bound root object. Held by the tree, never shown as a row.
    RootObject,
    /// The "Transform" group of an object.
    TransformGroup,
    /// A component attached to the row's owner object.
    Component,
    /// The "Children" group of an object.
    ChildrenGroup,
    /// A child object listed under a children group.
    ChildObject,
    /// A selectable leaf field.
    Field(AnimatableType),
    /// A composite field, expanded into the fields of the nested type.
    ObjectField(T),
}

impl<T> NodeKind<T> {
    /// Returns the payload-free tag of this kind.
    #[must_use]
    pub fn row_kind(&self) -> RowKind {
        match self {
            Self::RootObject => RowKind::RootObject,
            Self::TransformGroup => RowKind::TransformGroup,
            Self::Component => RowKind::Component,
            Self::ChildrenGroup => RowKind::ChildrenGroup,
            Self::ChildObject => RowKind::ChildObject,
            Self::Field(_) => RowKind::Field,
            Self::ObjectField(_) => RowKind::ObjectField,
        }
    }

    /// Returns `true` for [`NodeKind::Field`].
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Field(_))
    }
}

/// Payload-free counterpart of [`NodeKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// See [`NodeKind::RootObject`].
    RootObject,
    /// See [`NodeKind::TransformGroup`].
    TransformGroup,
    /// See [`NodeKind::Component`].
    Component,
    /// See [`NodeKind::ChildrenGroup`].
    ChildrenGroup,
    /// See [`NodeKind::ChildObject`].
    ChildObject,
    /// See [`NodeKind::Field`].
    Field,
    /// See [`NodeKind::ObjectField`].
    ObjectField,
}

impl RowKind {
    /// Returns the icon hint for rows of this kind, if they carry one.
    #[must_use]
    pub const fn icon(self) -> Option<RowIcon> {
        match self {
            Self::RootObject | Self::TransformGroup | Self::ChildrenGroup | Self::ChildObject => {
                Some(RowIcon::SceneObject)
            }
            Self::Component => Some(RowIcon::Component),
            Self::Field | Self::ObjectField => None,
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RootObject => "root object",
            Self::TransformGroup => "transform group",
            Self::Component => "component",
            Self::ChildrenGroup => "children group",
            Self::ChildObject => "child object",
            Self::Field => "field",
            Self::ObjectField => "object field",
        })
    }
}

/// Icon hint for the widget layer. Bitmaps are the widget layer's business.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowIcon {
    /// A scene object (also used for the transform and children groups).
    SceneObject,
    /// A component.
    Component,
}

/// One row of the field tree.
///
/// A node knows the object it belongs to, the component it belongs to (if
/// any), its full address, and, while expanded, its children. Children exist
/// only while the node is expanded; collapsing drops them.
///
/// Nodes are created by [`expand_node`](crate::expand_node) and owned by their
/// parent. The whole tree is owned by a [`FieldTree`](crate::FieldTree).
#[derive(Clone, Debug)]
pub struct Node<O, C, T> {
    kind: NodeKind<T>,
    object: O,
    component: Option<C>,
    address: FieldPath,
    label: String,
    children: Option<Vec<Self>>,
}

/// The [`Node`] type for a given [`SceneHost`].
pub type NodeFor<H> =
    Node<<H as SceneHost>::Object, <H as SceneHost>::Component, <H as SceneHost>::Type>;

impl<O, C, T> Node<O, C, T> {
    pub(crate) fn new(
        kind: NodeKind<T>,
        object: O,
        component: Option<C>,
        address: FieldPath,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            object,
            component,
            address,
            label: label.into(),
            children: None,
        }
    }

    /// Creates an unexpanded root node for `object`.
    ///
    /// Its address is empty; its children's addresses start with `!<name>`.
    #[must_use]
    pub fn root<H>(host: &H, object: O) -> Self
    where
        H: SceneHost<Object = O, Component = C, Type = T> + ?Sized,
    {
        let label = host.object_name(&object).into_owned();
        Self::new(NodeKind::RootObject, object, None, FieldPath::new(), label)
    }

    /// Returns the kind of this row.
    #[must_use]
    pub fn kind(&self) -> &NodeKind<T> {
        &self.kind
    }

    /// Returns the payload-free kind of this row.
    #[must_use]
    pub fn row_kind(&self) -> RowKind {
        self.kind.row_kind()
    }

    /// Returns the object this row belongs to.
    #[must_use]
    pub fn owner_object(&self) -> &O {
        &self.object
    }

    /// Returns the component this row belongs to, if any.
    #[must_use]
    pub fn owner_component(&self) -> Option<&C> {
        self.component.as_ref()
    }

    /// Returns the full address of this row.
    #[must_use]
    pub fn address(&self) -> &FieldPath {
        &self.address
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the icon hint for this row.
    #[must_use]
    pub fn icon(&self) -> Option<RowIcon> {
        self.row_kind().icon()
    }

    /// Returns `true` if this row is a selectable leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Returns `true` while this row's children are materialized.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// Returns the materialized children; empty while collapsed.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Returns the leaf value type, for [`NodeKind::Field`] rows.
    #[must_use]
    pub fn field_type(&self) -> Option<AnimatableType> {
        match self.kind {
            NodeKind::Field(ty) => Some(ty),
            _ => None,
        }
    }

    /// Walks `row` (child indices) down from this node.
    pub(crate) fn descendant(&self, row: &[usize]) -> Option<&Self> {
        row.iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    pub(crate) fn descendant_mut(&mut self, row: &[usize]) -> Option<&mut Self> {
        let mut node = self;
        for &index in row {
            node = node.children.as_mut()?.get_mut(index)?;
        }
        Some(node)
    }

    /// Installs freshly built children and marks the row expanded.
    pub(crate) fn set_children(&mut self, children: Vec<Self>) {
        self.children = Some(children);
    }

    /// Drops the children and marks the row collapsed. Returns the number of
    /// rows dropped, descendants included.
    pub(crate) fn clear_children(&mut self) -> usize {
        self.children
            .take()
            .map_or(0, |children| children.iter().map(Self::subtree_len).sum())
    }

    /// Number of rows in this subtree, this node included.
    pub(crate) fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Self::subtree_len).sum::<usize>()
    }
}
