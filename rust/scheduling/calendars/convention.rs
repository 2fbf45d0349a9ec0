use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::CalendarError;

/// A rule for moving a non-business day onto a business day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    /// Return the date unchanged.
    #[default]
    NoAdjust,
    /// Roll forward to the next business day.
    Following,
    /// Roll forward unless that changes the month, in which case roll backward.
    ModifiedFollowing,
    /// Roll backward to the previous business day.
    Preceding,
    /// Roll backward unless that changes the month, in which case roll forward.
    ModifiedPreceding,
}

impl BusinessDayConvention {
    /// All conventions, in declaration order.
    pub const ALL: [BusinessDayConvention; 5] = [
        BusinessDayConvention::NoAdjust,
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
    ];

    /// The label of the convention, e.g. `"Modified Following"`.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessDayConvention::NoAdjust => "No Adjustment",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        }
    }

    /// Map a label to a convention.
    ///
    /// Labels must match exactly. Anything unrecognised maps to
    /// [`NoAdjust`](BusinessDayConvention::NoAdjust); use [`str::parse`] to reject it instead.
    ///
    /// ```rust
    /// # use busday::scheduling::BusinessDayConvention;
    /// assert_eq!(BusinessDayConvention::parse("Modified Following"), BusinessDayConvention::ModifiedFollowing);
    /// assert_eq!(BusinessDayConvention::parse("modified following"), BusinessDayConvention::NoAdjust);
    /// ```
    pub fn parse(label: &str) -> BusinessDayConvention {
        match label.parse::<BusinessDayConvention>() {
            Ok(c) => c,
            Err(_) => {
                warn!(label, "unrecognised business day convention, using No Adjustment");
                BusinessDayConvention::NoAdjust
            }
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusinessDayConvention::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| CalendarError::UnknownConvention(s.to_string()))
    }
}
