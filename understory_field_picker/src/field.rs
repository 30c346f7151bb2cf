// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field descriptors and value type tags.

use alloc::string::String;
use core::fmt;

/// Declared type of a reflected field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `bool`.
    Bool,
    /// Single-precision float.
    Float,
    /// Signed integer.
    Int,
    /// RGBA color.
    Color,
    /// Two-component vector.
    Vector2,
    /// Three-component vector.
    Vector3,
    /// Four-component vector.
    Vector4,
    /// Text.
    String,
    /// Reference to a resource (mesh, texture, clip, ...).
    ResourceRef,
    /// Reference to another scene object or component.
    GameObjectRef,
    /// Nested composite value with its own fields.
    Object,
    /// Fixed-size array.
    Array,
    /// Growable list.
    List,
    /// Key/value map.
    Dictionary,
}

impl FieldType {
    /// Returns the animatable value type this field type maps to, if any.
    ///
    /// Only the primitive value types can be driven directly; composites and
    /// references return `None`.
    #[must_use]
    pub const fn animatable_type(self) -> Option<AnimatableType> {
        match self {
            Self::Bool => Some(AnimatableType::Bool),
            Self::Float => Some(AnimatableType::Float),
            Self::Int => Some(AnimatableType::Int),
            Self::Color => Some(AnimatableType::Color),
            Self::Vector2 => Some(AnimatableType::Vector2),
            Self::Vector3 => Some(AnimatableType::Vector3),
            Self::Vector4 => Some(AnimatableType::Vector4),
            Self::String
            | Self::ResourceRef
            | Self::GameObjectRef
            | Self::Object
            | Self::Array
            | Self::List
            | Self::Dictionary => None,
        }
    }
}

/// Value type of a selectable leaf field.
///
/// This is the type tag reported with every [`FieldSelection`](crate::FieldSelection).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimatableType {
    /// `bool`.
    Bool,
    /// Single-precision float.
    Float,
    /// Signed integer.
    Int,
    /// RGBA color.
    Color,
    /// Two-component vector.
    Vector2,
    /// Three-component vector.
    Vector3,
    /// Four-component vector.
    Vector4,
}

impl AnimatableType {
    /// All animatable types, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Bool,
        Self::Float,
        Self::Int,
        Self::Color,
        Self::Vector2,
        Self::Vector3,
        Self::Vector4,
    ];

    /// Returns the single-bit set containing this type.
    #[must_use]
    pub const fn into_set(self) -> AnimatableTypes {
        match self {
            Self::Bool => AnimatableTypes::BOOL,
            Self::Float => AnimatableTypes::FLOAT,
            Self::Int => AnimatableTypes::INT,
            Self::Color => AnimatableTypes::COLOR,
            Self::Vector2 => AnimatableTypes::VECTOR2,
            Self::Vector3 => AnimatableTypes::VECTOR3,
            Self::Vector4 => AnimatableTypes::VECTOR4,
        }
    }

    /// Returns the field type this value type is declared as.
    #[must_use]
    pub const fn field_type(self) -> FieldType {
        match self {
            Self::Bool => FieldType::Bool,
            Self::Float => FieldType::Float,
            Self::Int => FieldType::Int,
            Self::Color => FieldType::Color,
            Self::Vector2 => FieldType::Vector2,
            Self::Vector3 => FieldType::Vector3,
            Self::Vector4 => FieldType::Vector4,
        }
    }

    /// Returns a short lowercase name, e.g. `"vector3"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Int => "int",
            Self::Color => "color",
            Self::Vector2 => "vector2",
            Self::Vector3 => "vector3",
            Self::Vector4 => "vector4",
        }
    }
}

impl fmt::Display for AnimatableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of [`AnimatableType`]s.
    ///
    /// Used by [`PickerOptions`](crate::PickerOptions) to restrict which leaves are offered,
    /// for example when the driver being bound only produces scalar values.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AnimatableTypes: u8 {
        /// [`AnimatableType::Bool`].
        const BOOL    = 0b0000_0001;
        /// [`AnimatableType::Float`].
        const FLOAT   = 0b0000_0010;
        /// [`AnimatableType::Int`].
        const INT     = 0b0000_0100;
        /// [`AnimatableType::Color`].
        const COLOR   = 0b0000_1000;
        /// [`AnimatableType::Vector2`].
        const VECTOR2 = 0b0001_0000;
        /// [`AnimatableType::Vector3`].
        const VECTOR3 = 0b0010_0000;
        /// [`AnimatableType::Vector4`].
        const VECTOR4 = 0b0100_0000;
    }
}

impl AnimatableTypes {
    /// Returns `true` if `ty` is in the set.
    #[must_use]
    #[inline]
    pub const fn accepts(self, ty: AnimatableType) -> bool {
        self.contains(ty.into_set())
    }
}

impl Default for AnimatableTypes {
    fn default() -> Self {
        Self::all()
    }
}

impl From<AnimatableType> for AnimatableTypes {
    fn from(ty: AnimatableType) -> Self {
        ty.into_set()
    }
}

/// Reflection metadata for one field of a type.
///
/// `T` is the host's runtime type key. `nested_type` is only meaningful for
/// [`FieldType::Object`] fields, whose rows recurse into that type's fields.
///
/// # Example
///
/// ```rust
/// use understory_field_picker::{FieldDescriptor, FieldType};
///
/// let fov = FieldDescriptor::<&str>::new("fieldOfView", FieldType::Float).with_animatable(true);
/// assert!(fov.animatable);
///
/// let lens = FieldDescriptor::object("lens", "LensSettings").with_animatable(true);
/// assert_eq!(lens.field_type, FieldType::Object);
/// assert_eq!(lens.nested_type, Some("LensSettings"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor<T> {
    /// Declared field name; used verbatim as the address segment and row label.
    pub name: String,
    /// Declared type.
    pub field_type: FieldType,
    /// Whether the field may be driven externally.
    pub animatable: bool,
    /// Type of the nested value for [`FieldType::Object`] fields.
    pub nested_type: Option<T>,
}

impl<T> FieldDescriptor<T> {
    /// Creates a non-animatable descriptor without a nested type.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            animatable: false,
            nested_type: None,
        }
    }

    /// Creates a non-animatable [`FieldType::Object`] descriptor whose value is of type `nested`.
    #[must_use]
    pub fn object(name: impl Into<String>, nested: T) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Object,
            animatable: false,
            nested_type: Some(nested),
        }
    }

    /// Sets the animatable flag.
    #[must_use]
    pub fn with_animatable(mut self, animatable: bool) -> Self {
        self.animatable = animatable;
        self
    }

    /// Sets the nested type.
    #[must_use]
    pub fn with_nested_type(mut self, nested: T) -> Self {
        self.nested_type = Some(nested);
        self
    }
}
