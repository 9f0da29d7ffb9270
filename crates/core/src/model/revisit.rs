use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RevisitError {
    #[error("unsupported revisit interval: {0} days")]
    Unsupported(u32),
}

/// The fixed set of intervals a user may pick after a correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevisitChoice {
    One,
    Three,
    Seven,
    Nine,
}

impl RevisitChoice {
    /// All choices in display order.
    pub const ALL: [RevisitChoice; 4] = [Self::One, Self::Three, Self::Seven, Self::Nine];

    /// # Errors
    ///
    /// Returns `RevisitError::Unsupported` for any value outside {1, 3, 7, 9}.
    pub fn from_days(days: u32) -> Result<Self, RevisitError> {
        match days {
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            7 => Ok(Self::Seven),
            9 => Ok(Self::Nine),
            other => Err(RevisitError::Unsupported(other)),
        }
    }

    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Three => 3,
            Self::Seven => 7,
            Self::Nine => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_days_accepts_only_the_fixed_set() {
        for choice in RevisitChoice::ALL {
            assert_eq!(RevisitChoice::from_days(choice.days()), Ok(choice));
        }
        assert_eq!(
            RevisitChoice::from_days(2),
            Err(RevisitError::Unsupported(2))
        );
        assert!(RevisitChoice::from_days(0).is_err());
    }
}
