// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Movement constraint mask and its axis queries.

use core::fmt;

bitflags::bitflags! {
    /// Bitmask of movement constraints applied while dragging.
    ///
    /// Bits compose with `|`. Axis bits are default-permissive: a mask that
    /// names neither axis allows both, and naming both is the same as
    /// naming neither. Only naming exactly one axis locks the other.
    ///
    /// [`CONFINE_TO_PARENT`](Self::CONFINE_TO_PARENT) and
    /// [`UNCONSTRAINED`](Self::UNCONSTRAINED) contradict each other;
    /// [`validate`](Self::validate) rejects masks that set both.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DragConstraint: u8 {
        /// Keep the widget inside its parent's padded content box.
        const CONFINE_TO_PARENT = 1;
        /// Allow horizontal movement.
        const HORIZONTAL = 1 << 1;
        /// Allow vertical movement.
        const VERTICAL = 1 << 2;
        /// No positional limits.
        const UNCONSTRAINED = 1 << 3;
    }
}

impl Default for DragConstraint {
    fn default() -> Self {
        Self::CONFINE_TO_PARENT
    }
}

impl DragConstraint {
    const ILLEGAL: Self = Self::CONFINE_TO_PARENT.union(Self::UNCONSTRAINED);

    /// Checks the mask for the contradictory confined-and-unconstrained
    /// combination.
    pub fn validate(self) -> Result<Self, ConstraintError> {
        if self.contains(Self::ILLEGAL) {
            Err(ConstraintError { mask: self })
        } else {
            Ok(self)
        }
    }

    /// Returns `true` if horizontal movement is allowed.
    ///
    /// False only when [`VERTICAL`](Self::VERTICAL) is set without
    /// [`HORIZONTAL`](Self::HORIZONTAL).
    #[must_use]
    pub fn horizontal_allowed(self) -> bool {
        !self.contains(Self::VERTICAL) || self.contains(Self::HORIZONTAL)
    }

    /// Returns `true` if vertical movement is allowed.
    ///
    /// False only when [`HORIZONTAL`](Self::HORIZONTAL) is set without
    /// [`VERTICAL`](Self::VERTICAL).
    #[must_use]
    pub fn vertical_allowed(self) -> bool {
        !self.contains(Self::HORIZONTAL) || self.contains(Self::VERTICAL)
    }

    /// Returns `true` if movement is confined to the parent's content box.
    #[must_use]
    pub fn confined_to_parent(self) -> bool {
        self.contains(Self::CONFINE_TO_PARENT)
    }
}

/// Error returned for a self-contradictory constraint mask.
///
/// Raised only by constraint configuration, never by event processing. The
/// previously active constraint stays in effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConstraintError {
    mask: DragConstraint,
}

impl ConstraintError {
    /// The rejected mask.
    #[must_use]
    pub fn mask(&self) -> DragConstraint {
        self.mask
    }
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "constraint mask {:?} sets both CONFINE_TO_PARENT and UNCONSTRAINED",
            self.mask
        )
    }
}

impl core::error::Error for ConstraintError {}
