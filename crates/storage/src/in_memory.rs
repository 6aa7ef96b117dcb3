use std::cell::RefCell;

use brogram_domain as domain;

/// Progress repository held entirely in memory.
///
/// Used when browser storage is unavailable: the session keeps working,
/// the progress is simply lost when it ends.
#[derive(Default)]
pub struct Progress {
    state: RefCell<domain::ProgressState>,
}

impl Progress {
    #[must_use]
    pub fn new(state: domain::ProgressState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }
}

impl domain::ProgressRepository for Progress {
    fn read_progress(&self) -> Result<domain::ProgressState, domain::ReadError> {
        Ok(self.state.borrow().clone())
    }

    fn write_progress(&self, state: &domain::ProgressState) -> Result<(), domain::WriteError> {
        *self.state.borrow_mut() = state.clone();
        Ok(())
    }
}
