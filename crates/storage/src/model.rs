//! Serialized form of the progress state.
//!
//! The wire format is a JSON object mapping day-index strings to
//! `{"weights": {name: weightText}, "isComplete": bool}`. Missing per-day
//! fields default to empty and false so older or partially written records
//! remain readable.

use std::collections::BTreeMap;

use brogram_domain as domain;

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ProgressState(BTreeMap<usize, DayProgress>);

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct DayProgress {
    #[serde(default)]
    pub weights: BTreeMap<String, String>,
    #[serde(default, rename = "isComplete")]
    pub is_complete: bool,
}

impl From<&domain::ProgressState> for ProgressState {
    fn from(value: &domain::ProgressState) -> Self {
        Self(
            value
                .iter()
                .map(|(day, progress)| (**day, DayProgress::from(progress)))
                .collect(),
        )
    }
}

impl From<&domain::DayProgress> for DayProgress {
    fn from(value: &domain::DayProgress) -> Self {
        Self {
            weights: value
                .weights
                .iter()
                .map(|(name, weight)| (name.to_string(), weight.to_string()))
                .collect(),
            is_complete: value.is_complete,
        }
    }
}

impl TryFrom<ProgressState> for domain::ProgressState {
    type Error = Error;

    fn try_from(value: ProgressState) -> Result<Self, Self::Error> {
        value
            .0
            .into_iter()
            .map(|(day, progress)| {
                Ok((
                    domain::DayIndex::from(day),
                    domain::DayProgress::try_from(progress)?,
                ))
            })
            .collect()
    }
}

impl TryFrom<DayProgress> for domain::DayProgress {
    type Error = Error;

    fn try_from(value: DayProgress) -> Result<Self, Self::Error> {
        Ok(Self {
            weights: value
                .weights
                .into_iter()
                .map(|(name, weight)| {
                    Ok((domain::Name::new(&name)?, domain::Weight::new(&weight)?))
                })
                .collect::<Result<_, Error>>()?,
            is_complete: value.is_complete,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
}
