// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field classification: leaf, branch, or no row at all.

use core::fmt;

use crate::field::{AnimatableType, AnimatableTypes, FieldDescriptor, FieldType};

/// What a field descriptor contributes to the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldClass<T> {
    /// A selectable leaf row of the given value type.
    Leaf(AnimatableType),
    /// An expandable row whose children are the fields of the nested type.
    Branch(T),
    /// No row.
    Ignored(SkipReason),
}

impl<T> FieldClass<T> {
    /// Returns `true` if the descriptor produces a row.
    #[must_use]
    pub fn produces_row(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

/// Why a descriptor produced no row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The field is not flagged animatable.
    NotAnimatable,
    /// The declared type is neither a primitive value type nor a composite.
    UnsupportedType(FieldType),
    /// A composite field without a nested type to recurse into.
    MissingNestedType,
    /// A primitive value type excluded by [`PickerOptions::leaf_types`](crate::PickerOptions::leaf_types).
    Filtered(AnimatableType),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnimatable => f.write_str("not animatable"),
            Self::UnsupportedType(ty) => write!(f, "unsupported type {ty:?}"),
            Self::MissingNestedType => f.write_str("object field without a nested type"),
            Self::Filtered(ty) => write!(f, "{ty} leaves are filtered out"),
        }
    }
}

/// Classifies one field descriptor.
///
/// Non-animatable fields never produce a row. Animatable primitive value types
/// become leaves when `accepted` contains them; animatable [`FieldType::Object`]
/// fields become branches over their nested type; everything else is ignored.
///
/// ```rust
/// use understory_field_picker::{
///     AnimatableType, AnimatableTypes, FieldClass, FieldDescriptor, FieldType, SkipReason, classify,
/// };
///
/// let all = AnimatableTypes::all();
///
/// let fov = FieldDescriptor::<()>::new("fov", FieldType::Float).with_animatable(true);
/// assert_eq!(classify(&fov, all), FieldClass::Leaf(AnimatableType::Float));
///
/// let hidden = FieldDescriptor::<()>::new("fov", FieldType::Float);
/// assert_eq!(classify(&hidden, all), FieldClass::Ignored(SkipReason::NotAnimatable));
///
/// let lens = FieldDescriptor::object("lens", "Lens").with_animatable(true);
/// assert_eq!(classify(&lens, all), FieldClass::Branch("Lens"));
/// ```
#[must_use]
pub fn classify<T: Clone>(descriptor: &FieldDescriptor<T>, accepted: AnimatableTypes) -> FieldClass<T> {
    if !descriptor.animatable {
        return FieldClass::Ignored(SkipReason::NotAnimatable);
    }

    if let Some(ty) = descriptor.field_type.animatable_type() {
        return if accepted.accepts(ty) {
            FieldClass::Leaf(ty)
        } else {
            FieldClass::Ignored(SkipReason::Filtered(ty))
        };
    }

    match (descriptor.field_type, &descriptor.nested_type) {
        (FieldType::Object, Some(nested)) => FieldClass::Branch(nested.clone()),
        (FieldType::Object, None) => FieldClass::Ignored(SkipReason::MissingNestedType),
        (other, _) => FieldClass::Ignored(SkipReason::UnsupportedType(other)),
    }
}
