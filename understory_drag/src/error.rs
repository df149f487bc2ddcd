// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Which element reference a [`ConfigurationError`] concerns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// The draggable region.
    Draggable,
    /// The element that moves.
    Container,
    /// The bounding element for [`BoundsMode::Element`](crate::BoundsMode::Element).
    Bounds,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Draggable => "draggable",
            Self::Container => "container",
            Self::Bounds => "bounds",
        })
    }
}

/// Error returned when a controller is given a target that is not an element.
///
/// Raised at setup time only; nothing on the drag path returns errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationError {
    /// The offending reference.
    pub role: ElementRole,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} target is not an element", self.role)
    }
}

impl core::error::Error for ConfigurationError {}
