// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection notification.

use alloc::boxed::Box;
use core::fmt;

use crate::error::PickerError;
use crate::field::AnimatableType;
use crate::node::Node;
use crate::path::FieldPath;

/// The payload delivered when a leaf row is activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSelection<O, C> {
    /// Object the field belongs to.
    pub object: O,
    /// Component the field belongs to; `None` for fields of the object itself.
    pub component: Option<C>,
    /// Full address of the field.
    pub path: FieldPath,
    /// Value type of the field.
    pub field_type: AnimatableType,
}

/// Callback receiving [`FieldSelection`]s.
pub type SelectionListener<O, C> = Box<dyn FnMut(FieldSelection<O, C>)>;

/// A single-slot selection notifier.
///
/// At most one listener is registered at a time; registering another replaces
/// it. Emitting with no listener does nothing.
pub struct SelectionEmitter<O, C> {
    listener: Option<SelectionListener<O, C>>,
}

impl<O, C> SelectionEmitter<O, C> {
    /// Creates an emitter with no listener.
    #[must_use]
    pub const fn new() -> Self {
        Self { listener: None }
    }

    /// Registers `listener`, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(FieldSelection<O, C>) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the listener, if any.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Returns `true` if a listener is registered.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Notifies the listener that `leaf` was selected.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::NotALeaf`] if `leaf` is not a field row. The
    /// listener is not called in that case.
    pub fn emit<T>(&mut self, leaf: &Node<O, C, T>) -> Result<(), PickerError>
    where
        O: Clone,
        C: Clone,
    {
        let Some(field_type) = leaf.field_type() else {
            return Err(PickerError::NotALeaf {
                kind: leaf.row_kind(),
                address: leaf.address().clone(),
            });
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            address = %leaf.address(),
            field_type = %field_type,
            delivered = self.listener.is_some(),
            "field selected"
        );

        if let Some(listener) = &mut self.listener {
            listener(FieldSelection {
                object: leaf.owner_object().clone(),
                component: leaf.owner_component().cloned(),
                path: leaf.address().clone(),
                field_type,
            });
        }
        Ok(())
    }
}

impl<O, C> Default for SelectionEmitter<O, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, C> fmt::Debug for SelectionEmitter<O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionEmitter")
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
