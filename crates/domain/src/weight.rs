use derive_more::{AsRef, Display, Into};

/// User-entered max weight for one exercise.
///
/// The canonical form is the trimmed input text, so persisted values keep
/// what the user typed ("135", "22.5"). An empty value is valid and means
/// that no weight has been recorded yet.
#[derive(AsRef, Debug, Display, Default, Into, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(String);

impl Weight {
    pub fn new(weight: &str) -> Result<Self, WeightError> {
        let trimmed_weight = weight.trim();

        if trimmed_weight.is_empty() {
            return Ok(Weight(String::new()));
        }

        match trimmed_weight.parse::<f32>() {
            Ok(value) if value.is_sign_negative() => {
                Err(WeightError::Negative(trimmed_weight.to_string()))
            }
            Ok(value) if !value.is_finite() => {
                Err(WeightError::NotANumber(trimmed_weight.to_string()))
            }
            Ok(_) => Ok(Weight(trimmed_weight.to_string())),
            Err(_) => Err(WeightError::NotANumber(trimmed_weight.to_string())),
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Weight(String::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum WeightError {
    #[error("Weight must be a number ({0})")]
    NotANumber(String),
    #[error("Weight must not be negative ({0})")]
    Negative(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("135", Ok(Weight("135".to_string())))]
    #[case(" 22.5 ", Ok(Weight("22.5".to_string())))]
    #[case("0", Ok(Weight("0".to_string())))]
    #[case("", Ok(Weight(String::new())))]
    #[case("  ", Ok(Weight(String::new())))]
    #[case("heavy", Err(WeightError::NotANumber("heavy".to_string())))]
    #[case("inf", Err(WeightError::NotANumber("inf".to_string())))]
    #[case("NaN", Err(WeightError::NotANumber("NaN".to_string())))]
    #[case("-20", Err(WeightError::Negative("-20".to_string())))]
    fn test_weight_new(#[case] weight: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(weight), expected);
    }

    #[test]
    fn test_weight_is_empty() {
        assert!(Weight::none().is_empty());
        assert!(Weight::new("").unwrap().is_empty());
        assert!(!Weight::new("60").unwrap().is_empty());
    }
}
