// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field addresses.
//!
//! An address is a `/`-separated list of segments from the tree root to a row:
//!
//! ```text
//! address           := object-segment ( "/" component-segment )? ( "/" field-segment )*
//! object-segment    := "!" <object-display-name>
//! component-segment := ":" <component-type-name>
//! field-segment     := <field-name>
//! ```
//!
//! Rows under nested child objects repeat the object segment for each level,
//! e.g. `!Rig/!Camera Arm/:Camera/fieldOfView`.
//!
//! Names are not escaped. A name containing `/` splits into extra segments when
//! parsed, and a field name starting with `!` or `:` parses as an object or
//! component segment.

use alloc::string::String;
use core::fmt;
use core::str::Split;

/// Separates segments.
pub const SEPARATOR: char = '/';
/// Leading character of an object segment.
pub const OBJECT_PREFIX: char = '!';
/// Leading character of a component segment.
pub const COMPONENT_PREFIX: char = ':';

/// A full address from the tree root to a row.
///
/// Paths are built by appending segments to a parent path; appending to the
/// empty path yields the bare segment without a leading separator.
///
/// ```rust
/// use understory_field_picker::{FieldPath, Segment};
///
/// let path = FieldPath::new()
///     .with_object("My Scene Object")
///     .with_component("Camera")
///     .with_field("path")
///     .with_field("to")
///     .with_field("field");
///
/// assert_eq!(path.as_str(), "!My Scene Object/:Camera/path/to/field");
/// assert_eq!(path.component(), Some("Camera"));
/// assert_eq!(path.field_path(), "path/to/field");
///
/// let kinds: Vec<_> = path.segments().collect();
/// assert_eq!(kinds[0], Segment::Object("My Scene Object"));
/// assert_eq!(kinds[1], Segment::Component("Camera"));
/// assert_eq!(kinds[2], Segment::Field("path"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(String);

impl FieldPath {
    /// Creates the empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Returns the path as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty path.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the path, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns this path extended with an object segment (`!name`).
    #[must_use]
    pub fn with_object(&self, name: &str) -> Self {
        self.join(Some(OBJECT_PREFIX), name)
    }

    /// Returns this path extended with a component segment (`:type_name`).
    #[must_use]
    pub fn with_component(&self, type_name: &str) -> Self {
        self.join(Some(COMPONENT_PREFIX), type_name)
    }

    /// Returns this path extended with a field segment.
    #[must_use]
    pub fn with_field(&self, name: &str) -> Self {
        self.join(None, name)
    }

    /// Returns an iterator over the segments of this path.
    pub fn segments(&self) -> Segments<'_> {
        segments(&self.0)
    }

    /// Returns the type name of the component the addressed field belongs to.
    ///
    /// This is the last component segment that is not followed by another
    /// object segment. Fields of the object itself (the transform, for
    /// example) have no component.
    #[must_use]
    pub fn component(&self) -> Option<&str> {
        let mut component = None;
        for segment in self.segments() {
            match segment {
                Segment::Object(_) => component = None,
                Segment::Component(name) => component = Some(name),
                Segment::Field(_) => {}
            }
        }
        component
    }

    /// Returns the trailing run of field segments, still joined by `/`.
    ///
    /// This is the address of the field relative to its owning component (or
    /// object, when there is no component). Returns `""` when the path ends in
    /// an object or component segment.
    #[must_use]
    pub fn field_path(&self) -> &str {
        let mut tail_start = 0;
        let mut offset = 0;
        for raw in self.0.split(SEPARATOR) {
            let next = offset + raw.len() + SEPARATOR.len_utf8();
            if !matches!(Segment::parse(raw), Segment::Field(_)) {
                tail_start = next;
            }
            offset = next;
        }
        self.0.get(tail_start..).unwrap_or("")
    }

    fn join(&self, prefix: Option<char>, name: &str) -> Self {
        let mut out = String::with_capacity(self.0.len() + name.len() + 2);
        out.push_str(&self.0);
        if !out.is_empty() {
            out.push(SEPARATOR);
        }
        if let Some(prefix) = prefix {
            out.push(prefix);
        }
        out.push_str(name);
        Self(out)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldPath {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for FieldPath {
    fn from(raw: &str) -> Self {
        Self(raw.into())
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One segment of an address, classified by its leading character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// `!name`: a scene object, by display name.
    Object(&'a str),
    /// `:name`: a component, by type name.
    Component(&'a str),
    /// A field, by declared name.
    Field(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies a single raw segment.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        if let Some(name) = raw.strip_prefix(OBJECT_PREFIX) {
            Self::Object(name)
        } else if let Some(name) = raw.strip_prefix(COMPONENT_PREFIX) {
            Self::Component(name)
        } else {
            Self::Field(raw)
        }
    }

    /// Returns the name without its prefix.
    #[must_use]
    pub fn name(self) -> &'a str {
        match self {
            Self::Object(name) | Self::Component(name) | Self::Field(name) => name,
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(name) => write!(f, "{OBJECT_PREFIX}{name}"),
            Self::Component(name) => write!(f, "{COMPONENT_PREFIX}{name}"),
            Self::Field(name) => f.write_str(name),
        }
    }
}

/// Iterator over the segments of an address. See [`segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    inner: Option<Split<'a, char>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(Segment::parse)
    }
}

/// Splits a raw address string into classified segments.
///
/// The empty string has no segments. This accepts any string, so callers
/// holding a stored address can decompose it without a [`FieldPath`].
///
/// ```rust
/// use understory_field_picker::{Segment, segments};
///
/// let parts: Vec<_> = segments("!Root/!Arm/Position").collect();
/// assert_eq!(
///     parts,
///     [Segment::Object("Root"), Segment::Object("Arm"), Segment::Field("Position")]
/// );
/// assert_eq!(segments("").count(), 0);
/// ```
pub fn segments(path: &str) -> Segments<'_> {
    Segments {
        inner: (!path.is_empty()).then(|| path.split(SEPARATOR)),
    }
}
