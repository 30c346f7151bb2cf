// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits.
//!
//! The picker never owns the scene graph or the reflection data. It reads both
//! through the traits in this module every time a row is expanded, so whatever
//! the host reports at that moment is what the new rows show.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::field::FieldDescriptor;

/// Read access to the host object model.
///
/// `Object` and `Component` are expected to be cheap handles (ids, generational
/// keys, reference-counted pointers). Rows store clones of them, and they are
/// handed back verbatim in a [`FieldSelection`](crate::FieldSelection).
///
/// Handles stored in visible rows must stay valid while those rows exist. The
/// picker does not re-validate them before calling back into the host.
pub trait SceneHost {
    /// Handle to a scene object.
    type Object: Clone;
    /// Handle to a component attached to a scene object.
    type Component: Clone;
    /// Runtime type key understood by the reflection facility.
    type Type: Clone;

    /// Returns the display name of `object`.
    fn object_name(&self, object: &Self::Object) -> Cow<'_, str>;

    /// Returns the components attached to `object`, in attachment order.
    fn components(&self, object: &Self::Object) -> Vec<Self::Component>;

    /// Returns the number of direct children of `object`.
    fn child_count(&self, object: &Self::Object) -> usize;

    /// Returns the child of `object` at `index`.
    ///
    /// Only called with `index < child_count(object)`.
    fn child_at(&self, object: &Self::Object, index: usize) -> Self::Object;

    /// Returns the runtime type of `component`.
    fn component_type(&self, component: &Self::Component) -> Self::Type;

    /// Returns the declared name of `ty`.
    ///
    /// Component rows use this both as their label and as their address segment.
    fn type_name(&self, ty: &Self::Type) -> Cow<'_, str>;
}

/// Enumerates the fields of a type.
///
/// Descriptors are consumed in the order returned; the picker never re-sorts them.
///
/// Any `Fn(&T) -> Vec<FieldDescriptor<T>>` closure implements this trait:
///
/// ```rust
/// use understory_field_picker::{FieldDescriptor, FieldReflection, FieldType};
///
/// let reflection = |ty: &u32| -> Vec<FieldDescriptor<u32>> {
///     match *ty {
///         1 => vec![FieldDescriptor::new("intensity", FieldType::Float).with_animatable(true)],
///         _ => Vec::new(),
///     }
/// };
///
/// assert_eq!(reflection.fields_of(&1).len(), 1);
/// assert!(reflection.fields_of(&2).is_empty());
/// ```
pub trait FieldReflection<T> {
    /// Returns the field descriptors of `ty`.
    fn fields_of(&self, ty: &T) -> Vec<FieldDescriptor<T>>;
}

impl<T, F> FieldReflection<T> for F
where
    F: Fn(&T) -> Vec<FieldDescriptor<T>>,
{
    #[inline]
    fn fields_of(&self, ty: &T) -> Vec<FieldDescriptor<T>> {
        self(ty)
    }
}
