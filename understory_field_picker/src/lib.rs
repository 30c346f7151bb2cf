// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_field_picker --heading-base-level=0

//! Understory Field Picker: a lazy field tree for choosing one animatable field.
//!
//! Given a root scene object, this crate builds the tree a field-picker
//! widget shows: the object's transform, its components, the fields of each
//! component, nested composite fields, and the object's children, recursively.
//! When the user activates a leaf, the registered listener receives the owning
//! object, the owning component (if any), the field's full address, and its
//! value type.
//!
//! The crate does **not** draw anything and does **not** own the scene. The
//! host graph is read through [`SceneHost`] and field metadata through
//! [`FieldReflection`]; both are passed to each call that needs them, and
//! nothing read from them is cached across a collapse.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::borrow::Cow;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_field_picker::{
//!     AnimatableType, FieldDescriptor, FieldTree, FieldType, SceneHost,
//! };
//!
//! /// One object, "Rig", with one "Camera" component and no children.
//! struct Scene;
//!
//! impl SceneHost for Scene {
//!     type Object = u32;
//!     type Component = u32;
//!     type Type = &'static str;
//!
//!     fn object_name(&self, _object: &u32) -> Cow<'_, str> {
//!         Cow::Borrowed("Rig")
//!     }
//!     fn components(&self, _object: &u32) -> Vec<u32> {
//!         vec![7]
//!     }
//!     fn child_count(&self, _object: &u32) -> usize {
//!         0
//!     }
//!     fn child_at(&self, _object: &u32, _index: usize) -> u32 {
//!         unreachable!("Rig has no children")
//!     }
//!     fn component_type(&self, _component: &u32) -> &'static str {
//!         "Camera"
//!     }
//!     fn type_name(&self, ty: &&'static str) -> Cow<'_, str> {
//!         Cow::Borrowed(*ty)
//!     }
//! }
//!
//! let fields = |_: &&'static str| -> Vec<FieldDescriptor<&'static str>> {
//!     vec![FieldDescriptor::new("fieldOfView", FieldType::Float).with_animatable(true)]
//! };
//!
//! let mut tree = FieldTree::new(&Scene, Some(1));
//! // Transform group, then the camera component.
//! assert_eq!(tree.row_count(), 2);
//!
//! let picked = Rc::new(RefCell::new(None));
//! let sink = Rc::clone(&picked);
//! tree.set_listener(move |selection| *sink.borrow_mut() = Some(selection));
//!
//! tree.expand(&Scene, &fields, &[1]).unwrap();
//! tree.activate(&[1, 0]).unwrap();
//!
//! let selection = picked.borrow_mut().take().unwrap();
//! assert_eq!(selection.object, 1);
//! assert_eq!(selection.component, Some(7));
//! assert_eq!(selection.path, "!Rig/:Camera/fieldOfView");
//! assert_eq!(selection.field_type, AnimatableType::Float);
//! ```
//!
//! ## Tree shape
//!
//! Expanding an object (the root, or a child object) yields a transform group,
//! one row per component in attachment order, and a children group if the
//! object has children. The transform group holds `Position`, `Rotation`, and
//! `Scale`, all `vector3`. A component or composite field lists the fields of
//! its type that pass [`classify`]: animatable fields of a supported value type
//! become leaves, animatable `object` fields with a nested type become
//! branches, and everything else is left out.
//!
//! ## Addresses
//!
//! Every row carries a [`FieldPath`] built from `/`-separated segments:
//! `!Name` for an object, `:TypeName` for a component, and a bare name for a
//! field. The root's own segment comes first, so a camera field on the root
//! `Rig` reads `!Rig/:Camera/fieldOfView`, and a transform leaf on its child
//! `Arm` reads `!Rig/!Arm/Position`. Group rows and child-object rows share the
//! address of the object whose group they sit in.
//!
//! ## Features
//!
//! - `std` (default): compile against the standard library. The crate is
//!   otherwise `no_std` + `alloc`.
//! - `tracing` (default): emit [`tracing`](https://docs.rs/tracing) events
//!   when rows are built, expanded, collapsed, skipped, or activated.

#![no_std]

extern crate alloc;

mod classify;
mod emit;
mod error;
mod expand;
mod field;
mod host;
mod node;
mod options;
mod path;
mod tree;

pub use classify::{FieldClass, SkipReason, classify};
pub use emit::{FieldSelection, SelectionEmitter, SelectionListener};
pub use error::PickerError;
pub use expand::{TRANSFORM_FIELDS, expand_node};
pub use field::{AnimatableType, AnimatableTypes, FieldDescriptor, FieldType};
pub use host::{FieldReflection, SceneHost};
pub use node::{Node, NodeFor, NodeKind, RowIcon, RowKind};
pub use options::{PickerOptions, PickerOptionsBuilder};
pub use path::{COMPONENT_PREFIX, FieldPath, OBJECT_PREFIX, SEPARATOR, Segment, Segments, segments};
pub use tree::{FieldTree, RowPath, VisibleRow};
