use log::{error, warn};

use crate::{
    DayIndex, DayIndexError, DayUpdate, ProgressState, ReadError, StorageError, WriteError,
    catalog,
};

/// Persistence boundary for the progress state. The whole state is read and
/// written as one unit under a single storage key.
pub trait ProgressRepository {
    fn read_progress(&self) -> Result<ProgressState, ReadError>;
    fn write_progress(&self, state: &ProgressState) -> Result<(), WriteError>;
}

/// Single source of truth for day completion and per-day weight entries.
///
/// All queries and merges are pure functions on [`ProgressState`]; this
/// service adds the boundary concerns: restoring the state at startup,
/// validating day indexes against the catalog and persisting the state
/// after every mutating call.
pub struct ProgressService<R> {
    repository: R,
}

impl<R: ProgressRepository> ProgressService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Restores the persisted state, or an empty one if nothing has been
    /// saved yet. Corrupt stored data is discarded and unavailable storage
    /// degrades the session to an empty in-memory state; neither failure
    /// reaches the caller.
    #[must_use]
    pub fn load(&self) -> ProgressState {
        match self.repository.read_progress() {
            Ok(state) => state,
            Err(ReadError::CorruptState(err)) => {
                warn!("discarding corrupt progress state: {err}");
                ProgressState::new()
            }
            Err(ReadError::Storage(err)) => {
                warn!("failed to read progress, starting empty: {err}");
                ProgressState::new()
            }
        }
    }

    /// Merges `update` into the entry for `day` and persists the result.
    ///
    /// The merged state is returned even if persisting fails, in which
    /// case the session continues in memory only. The state written is the
    /// one derived from `state` as passed by the caller; storage is not
    /// re-read first (single-tab model).
    pub fn save(
        &self,
        state: &ProgressState,
        day: DayIndex,
        update: DayUpdate,
    ) -> Result<ProgressState, DayIndexError> {
        catalog::day(day)?;

        let merged = state.merge_saved(day, update);
        match self.repository.write_progress(&merged) {
            Ok(()) => {}
            Err(WriteError::Storage(StorageError::Unavailable(err))) => {
                warn!("failed to persist progress, continuing in memory: {err}");
            }
            Err(err) => {
                error!("failed to persist progress: {err}");
            }
        }
        Ok(merged)
    }

    /// [`ProgressService::save`] with the completion flag forced.
    pub fn complete(
        &self,
        state: &ProgressState,
        day: DayIndex,
        update: DayUpdate,
    ) -> Result<ProgressState, DayIndexError> {
        self.save(
            state,
            day,
            DayUpdate {
                weights: update.weights,
                is_complete: true,
            },
        )
    }
}
