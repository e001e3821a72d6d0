//! Process-wide text selection suppression
//!
//! Dragging the thumb disables text selection so the drag does not
//! sweep a selection across the page. The flag is process-wide mutable
//! state with a single acquirer: the active drag session holds a
//! [`SelectionLock`] and the flag restores when the lock drops,
//! whatever the exit path (normal release, widget unmount mid-drag,
//! panic unwinding through the session owner).

use std::sync::atomic::{AtomicBool, Ordering};

static SELECTION_SUPPRESSED: AtomicBool = AtomicBool::new(false);

/// RAII guard over the suppression flag.
///
/// Selection stays disabled for the lifetime of the lock and
/// re-enables on `Drop`.
#[must_use = "selection re-enables as soon as the lock is dropped"]
#[derive(Debug)]
pub struct SelectionLock {
    _private: (),
}

impl Drop for SelectionLock {
    fn drop(&mut self) {
        SELECTION_SUPPRESSED.store(false, Ordering::Release);
    }
}

/// Suppress text selection for the lifetime of the returned lock.
///
/// Returns `None` when another session already holds the flag; the
/// flag is a single-acquirer resource.
pub fn suppress_selection() -> Option<SelectionLock> {
    SELECTION_SUPPRESSED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
        .then_some(SelectionLock { _private: () })
}

/// True while no drag session holds the suppression flag
pub fn selection_enabled() -> bool {
    !SELECTION_SUPPRESSED.load(Ordering::Acquire)
}
