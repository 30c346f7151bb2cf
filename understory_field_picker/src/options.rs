// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker configuration.

use alloc::borrow::Cow;

use crate::field::AnimatableTypes;

/// Configuration shared by every expansion of a [`FieldTree`](crate::FieldTree).
///
/// Labels are display text only and never appear in addresses, so they can be
/// localized freely.
///
/// # Example
///
/// ```rust
/// use understory_field_picker::{AnimatableTypes, PickerOptions};
///
/// let options = PickerOptions::builder()
///     .transform_label("Transformación")
///     .leaf_types(AnimatableTypes::FLOAT | AnimatableTypes::VECTOR3)
///     .build();
///
/// assert_eq!(options.transform_label(), "Transformación");
/// assert_eq!(options.children_label(), "Children");
/// assert!(!options.leaf_types().contains(AnimatableTypes::COLOR));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerOptions {
    transform_label: Cow<'static, str>,
    children_label: Cow<'static, str>,
    leaf_types: AnimatableTypes,
}

impl PickerOptions {
    /// Default label of the transform group row.
    pub const DEFAULT_TRANSFORM_LABEL: &'static str = "Transform";
    /// Default label of the children group row.
    pub const DEFAULT_CHILDREN_LABEL: &'static str = "Children";

    /// Creates the default options: English labels, every leaf type offered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform_label: Cow::Borrowed(Self::DEFAULT_TRANSFORM_LABEL),
            children_label: Cow::Borrowed(Self::DEFAULT_CHILDREN_LABEL),
            leaf_types: AnimatableTypes::all(),
        }
    }

    /// Returns a builder starting from the defaults.
    #[must_use]
    pub fn builder() -> PickerOptionsBuilder {
        PickerOptionsBuilder::new()
    }

    /// Label of the transform group row.
    #[must_use]
    #[inline]
    pub fn transform_label(&self) -> &str {
        &self.transform_label
    }

    /// Label of the children group row.
    #[must_use]
    #[inline]
    pub fn children_label(&self) -> &str {
        &self.children_label
    }

    /// Leaf value types offered for selection.
    ///
    /// Fields of other types produce no row. This applies to the transform
    /// leaves too, which are all [`AnimatableType::Vector3`](crate::AnimatableType::Vector3).
    #[must_use]
    #[inline]
    pub fn leaf_types(&self) -> AnimatableTypes {
        self.leaf_types
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`PickerOptions`].
#[derive(Clone, Debug, Default)]
pub struct PickerOptionsBuilder {
    options: PickerOptions,
}

impl PickerOptionsBuilder {
    /// Creates a builder starting from [`PickerOptions::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label of the transform group row.
    #[must_use]
    pub fn transform_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.options.transform_label = label.into();
        self
    }

    /// Sets the label of the children group row.
    #[must_use]
    pub fn children_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.options.children_label = label.into();
        self
    }

    /// Restricts the leaf value types offered for selection.
    #[must_use]
    pub fn leaf_types(mut self, types: AnimatableTypes) -> Self {
        self.options.leaf_types = types;
        self
    }

    /// Builds the options.
    #[must_use]
    pub fn build(self) -> PickerOptions {
        self.options
    }
}
