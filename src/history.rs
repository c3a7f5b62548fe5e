use std::collections::VecDeque;

use crate::canvas::Canvas;

/// Bounded stack of canvas snapshots for undo. There is no redo.
pub struct UndoHistory {
    /// Oldest snapshot at the front, most recent at the back
    snapshots: VecDeque<Canvas>,
    max_steps: usize,
}

impl UndoHistory {
    /// Creates an empty history that keeps at most `max_steps` snapshots
    pub fn new(max_steps: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(max_steps),
            max_steps,
        }
    }

    /// Record the canvas as it is right before a mutation.
    /// Drops the oldest snapshot once the cap is exceeded.
    pub fn push(&mut self, canvas: &Canvas) {
        if self.max_steps == 0 {
            return;
        }
        self.snapshots.push_back(canvas.clone());
        while self.snapshots.len() > self.max_steps {
            self.snapshots.pop_front();
        }
    }

    /// Pops the most recent snapshot into `canvas`.
    /// Returns false (and leaves the canvas alone) when there is nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        match self.snapshots.pop_back() {
            Some(snapshot) => {
                canvas.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Returns true if there are snapshots that can be restored
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl std::fmt::Debug for UndoHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoHistory")
            .field("len", &self.snapshots.len())
            .field("max_steps", &self.max_steps)
            .finish()
    }
}
