use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::domain::model::ExamMark;

/// Global in-memory marks registry.
///
/// Lazily constructed on first access and kept alive for the whole
/// process; there is no teardown. All callers that go through
/// [`MarksRegistry::instance`] observe the same mode flag and the same
/// stored marks.
static GLOBAL_MARKS_REGISTRY: Lazy<MarksRegistry> = Lazy::new(MarksRegistry::new);

/// In-memory registry of exam marks plus the calculation-mode flag.
///
/// The registry accepts marks while in capture mode. Once switched to
/// calculation mode it stops accepting marks and permits averaging
/// queries. The mode flag and the mark list sit behind a single `RwLock`
/// so every operation sees them as one atomic unit.
pub struct MarksRegistry {
    state: RwLock<RegistryState>,
}

struct RegistryState {
    calculation_mode: bool,
    marks: Vec<ExamMark>,
}

impl MarksRegistry {
    /// Returns the single process-wide instance, creating it on first
    /// call. Concurrent first calls observe exactly one construction.
    pub fn instance() -> &'static MarksRegistry {
        &GLOBAL_MARKS_REGISTRY
    }

    /// Creates a fresh registry in capture mode with no stored marks.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState {
                calculation_mode: false,
                marks: Vec::new(),
            }),
        }
    }

    /// Sets the mode flag directly to `calculate` (not a toggle): `true`
    /// switches to calculation mode, `false` back to capture mode. The
    /// current state is not validated; callers may switch repeatedly in
    /// either direction, and repeated calls with the same value are
    /// equivalent to one.
    pub fn set_mode(&self, calculate: bool) {
        let mut state = self.write_state();
        state.calculation_mode = calculate;
    }

    /// Appends `mark` to the registry while in capture mode.
    ///
    /// In calculation mode the mark is silently dropped: no error is
    /// raised and the caller gets no signal that nothing was stored.
    /// This is inherited contract, not an omission; callers that need
    /// the mark stored must switch back to capture mode first.
    pub fn capture(&self, mark: ExamMark) {
        let mut state = self.write_state();
        if state.calculation_mode {
            tracing::debug!(
                "Mark for student {} dropped: registry is in calculation mode",
                mark.student_id()
            );
            return;
        }
        state.marks.push(mark);
    }

    /// Arithmetic mean of the stored scores for `student_id`.
    ///
    /// While the registry is still in capture mode this returns the
    /// sentinel `-1.0` regardless of stored data. In calculation mode
    /// with zero matching marks the result is `0.0 / 0.0`, i.e. NaN;
    /// the unguarded division is inherited contract and deliberately not
    /// special-cased, so callers should check `is_nan()` for students
    /// they are not certain were captured.
    pub fn average_for(&self, student_id: &str) -> f64 {
        let state = self.read_state();
        if !state.calculation_mode {
            return -1.0;
        }

        let mut total = 0.0;
        let mut count = 0u32;
        for mark in &state.marks {
            if mark.student_id() == student_id {
                total += mark.score();
                count += 1;
            }
        }

        total / f64::from(count)
    }

    // Lock poisoning is recovered rather than propagated: the registry
    // has no error channel, and the guarded state stays structurally
    // valid even if a writer panicked.
    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MarksRegistry {
    fn default() -> Self {
        Self::new()
    }
}
