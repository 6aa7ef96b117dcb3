#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod name;
mod plan;
mod progress;
mod service;
mod weight;

pub use error::{ReadError, StorageError, WriteError};
pub use name::{Name, NameError};
pub use plan::{DayIndex, DayIndexError, DayKind, DayPlan, Exercise};
pub use progress::{DayProgress, DayStatus, DayUpdate, ProgressState, WeightEntry};
pub use service::{ProgressRepository, ProgressService};
pub use weight::{Weight, WeightError};
