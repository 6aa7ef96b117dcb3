use brogram_domain as domain;
use gloo_storage::Storage as GlooStorage;

use crate::model;

pub struct Progress;

// Saves from earlier releases live under this key.
const KEY_PROGRESS: &str = "brogram";

impl domain::ProgressRepository for Progress {
    fn read_progress(&self) -> Result<domain::ProgressState, domain::ReadError> {
        let stored: model::ProgressState = match gloo_storage::LocalStorage::get(KEY_PROGRESS) {
            Ok(stored) => stored,
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
                model::ProgressState::default()
            }
            Err(gloo_storage::errors::StorageError::SerdeError(err)) => {
                return Err(domain::ReadError::CorruptState(err.to_string()));
            }
            Err(err) => {
                return Err(domain::StorageError::Unavailable(err.to_string()).into());
            }
        };
        stored
            .try_into()
            .map_err(|err: model::Error| domain::ReadError::CorruptState(err.to_string()))
    }

    fn write_progress(&self, state: &domain::ProgressState) -> Result<(), domain::WriteError> {
        gloo_storage::LocalStorage::set(KEY_PROGRESS, model::ProgressState::from(state))
            .map_err(|err| domain::StorageError::Unavailable(err.to_string()).into())
    }
}
