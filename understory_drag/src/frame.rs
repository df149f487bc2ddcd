// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Next-frame scheduling.
//!
//! In [`UpdateMode::NextFrame`](crate::UpdateMode::NextFrame) a controller
//! does not re-render on each move. It hands the host one [`FrameToken`] and
//! waits for [`DragController::run_frame`](crate::DragController::run_frame).
//!
//! Scheduling is fire-and-forget: nothing cancels a token. Instead each token
//! carries the controller's attachment generation. Detaching or re-attaching
//! bumps the generation, so a token issued before that is stale and running it
//! does nothing.
//!
//! Hosts with a native frame callback can run tokens from it directly. Others
//! can collect them in a [`FrameQueue`] and drain it once per frame. A host
//! that declines the token (`request_frame` returns `false`) gets an immediate
//! render instead.

use alloc::vec::Vec;

/// A pending re-render for one controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken {
    generation: u32,
}

impl FrameToken {
    pub(crate) const fn new(generation: u32) -> Self {
        Self { generation }
    }

    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

/// A FIFO of frame tokens for hosts without a native frame callback.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    pending: Vec<FrameToken>,
}

impl FrameQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `token` for the next frame.
    pub fn push(&mut self, token: FrameToken) {
        self.pending.push(token);
    }

    /// Number of queued tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns every queued token, oldest first.
    pub fn take(&mut self) -> Vec<FrameToken> {
        core::mem::take(&mut self.pending)
    }
}
