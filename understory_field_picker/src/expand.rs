// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branching rules.
//!
//! [`expand_node`] is a pure function of a node and the live host state: it
//! reads the graph, builds the node's children, and returns them. It does not
//! touch the node itself; [`FieldTree`](crate::FieldTree) installs the result.
//!
//! | Kind | Children |
//! |---|---|
//! | `RootObject`, `ChildObject` | transform group, one row per component, children group if the object has children |
//! | `TransformGroup` | `Position`, `Rotation`, `Scale` leaves, all `vector3` |
//! | `Component`, `ObjectField` | one row per classified field of the bound type |
//! | `ChildrenGroup` | one `ChildObject` row per child, in index order |
//! | `Field` | none; expanding is an error |

use alloc::vec::Vec;

use crate::classify::{FieldClass, classify};
use crate::error::PickerError;
use crate::field::AnimatableType;
use crate::host::{FieldReflection, SceneHost};
use crate::node::{Node, NodeFor, NodeKind};
use crate::options::PickerOptions;

/// Names of the transform leaves, in row order.
pub const TRANSFORM_FIELDS: [&str; 3] = ["Position", "Rotation", "Scale"];

/// Builds the children of `node` from the current state of `host` and `reflection`.
///
/// # Errors
///
/// Returns [`PickerError::NotExpandable`] for [`NodeKind::Field`] rows.
pub fn expand_node<H, R>(
    node: &NodeFor<H>,
    host: &H,
    reflection: &R,
    options: &PickerOptions,
) -> Result<Vec<NodeFor<H>>, PickerError>
where
    H: SceneHost + ?Sized,
    R: FieldReflection<H::Type> + ?Sized,
{
    let children = match node.kind() {
        NodeKind::RootObject | NodeKind::ChildObject => object_rows(node, host, options),
        NodeKind::TransformGroup => transform_rows(node, options),
        NodeKind::Component => match node.owner_component() {
            Some(component) => {
                let ty = host.component_type(component);
                field_rows(node, &ty, reflection, options)
            }
            None => Vec::new(),
        },
        NodeKind::ObjectField(nested) => field_rows(node, nested, reflection, options),
        NodeKind::ChildrenGroup => child_object_rows(node, host),
        NodeKind::Field(_) => {
            return Err(PickerError::NotExpandable {
                address: node.address().clone(),
            });
        }
    };
    Ok(children)
}

/// Transform group, components, then the children group when there are children.
fn object_rows<H>(node: &NodeFor<H>, host: &H, options: &PickerOptions) -> Vec<NodeFor<H>>
where
    H: SceneHost + ?Sized,
{
    let object = node.owner_object();
    let base = node.address().with_object(&host.object_name(object));
    let components = host.components(object);
    let has_children = host.child_count(object) > 0;

    let mut rows = Vec::with_capacity(components.len() + 2);
    rows.push(Node::new(
        NodeKind::TransformGroup,
        object.clone(),
        None,
        base.clone(),
        options.transform_label(),
    ));

    for component in components {
        let type_name = host.type_name(&host.component_type(&component)).into_owned();
        let address = base.with_component(&type_name);
        rows.push(Node::new(
            NodeKind::Component,
            object.clone(),
            Some(component),
            address,
            type_name,
        ));
    }

    if has_children {
        rows.push(Node::new(
            NodeKind::ChildrenGroup,
            object.clone(),
            None,
            base,
            options.children_label(),
        ));
    }
    rows
}

fn transform_rows<O: Clone, C, T>(
    node: &Node<O, C, T>,
    options: &PickerOptions,
) -> Vec<Node<O, C, T>> {
    if !options.leaf_types().accepts(AnimatableType::Vector3) {
        return Vec::new();
    }
    TRANSFORM_FIELDS
        .iter()
        .map(|&name| {
            Node::new(
                NodeKind::Field(AnimatableType::Vector3),
                node.owner_object().clone(),
                None,
                node.address().with_field(name),
                name,
            )
        })
        .collect()
}

/// One row per field of `ty` that classifies as a leaf or branch.
///
/// Rows inherit the owner object and component of `node`, so fields nested
/// inside a component still report that component when selected.
fn field_rows<O, C, T, R>(
    node: &Node<O, C, T>,
    ty: &T,
    reflection: &R,
    options: &PickerOptions,
) -> Vec<Node<O, C, T>>
where
    O: Clone,
    C: Clone,
    T: Clone,
    R: FieldReflection<T> + ?Sized,
{
    reflection
        .fields_of(ty)
        .into_iter()
        .filter_map(|descriptor| {
            let kind = match classify(&descriptor, options.leaf_types()) {
                FieldClass::Leaf(value_type) => NodeKind::Field(value_type),
                FieldClass::Branch(nested) => NodeKind::ObjectField(nested),
                FieldClass::Ignored(_reason) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        parent = %node.address(),
                        field = %descriptor.name,
                        reason = %_reason,
                        "skipped field"
                    );
                    return None;
                }
            };
            let address = node.address().with_field(&descriptor.name);
            Some(Node::new(
                kind,
                node.owner_object().clone(),
                node.owner_component().cloned(),
                address,
                descriptor.name,
            ))
        })
        .collect()
}

/// Child objects keep the group's address; each appends its own object segment
/// when it is expanded in turn.
fn child_object_rows<H>(node: &NodeFor<H>, host: &H) -> Vec<NodeFor<H>>
where
    H: SceneHost + ?Sized,
{
    let object = node.owner_object();
    (0..host.child_count(object))
        .map(|index| {
            let child = host.child_at(object, index);
            let label = host.object_name(&child).into_owned();
            Node::new(
                NodeKind::ChildObject,
                child,
                None,
                node.address().clone(),
                label,
            )
        })
        .collect()
}
