// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Host-assigned identifier of a pointer.
///
/// Identifiers only need to be unique among pointers that are active at the
/// same time; hosts commonly reuse them across gestures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// The kind of device that produced a pointer sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse or trackpad.
    #[default]
    Mouse,
    /// A stylus.
    Pen,
    /// A finger on a touch surface.
    Touch,
}

/// A single pointer sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pointer {
    /// Which pointer this sample belongs to.
    pub id: PointerId,
    /// Device kind.
    pub kind: PointerKind,
    /// Whether this is the primary pointer of its kind (the first finger of a
    /// multi-touch contact, or any mouse).
    pub primary: bool,
    /// Position in page coordinates. May be fractional.
    pub page: Point,
}

impl Pointer {
    /// Creates a primary mouse pointer sample.
    #[must_use]
    pub const fn new(id: PointerId, page: Point) -> Self {
        Self {
            id,
            kind: PointerKind::Mouse,
            primary: true,
            page,
        }
    }

    /// Returns a copy of this sample with a different device kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: PointerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns a copy of this sample with a different primary flag.
    #[must_use]
    pub const fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Returns a copy of this sample moved to `page`.
    #[must_use]
    pub const fn at(mut self, page: Point) -> Self {
        self.page = page;
        self
    }
}
