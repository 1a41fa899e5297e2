//! Offensive efficiency quadrants and their legend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quadrant of the efficiency matrix.
///
/// The x axis is average runs per game, the y axis the contribution rate.
/// A value equal to the mean counts as high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    HighRbiHighContribution,
    HighRbiLowContribution,
    LowRbiLowContribution,
    LowRbiHighContribution,
}

impl Quadrant {
    /// All quadrants in legend order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::HighRbiHighContribution,
        Quadrant::HighRbiLowContribution,
        Quadrant::LowRbiLowContribution,
        Quadrant::LowRbiHighContribution,
    ];

    /// Place a point relative to the two means.
    pub fn classify(rbi: f64, contribution: f64, mean_rbi: f64, mean_contribution: f64) -> Self {
        match (rbi >= mean_rbi, contribution >= mean_contribution) {
            (true, true) => Self::HighRbiHighContribution,
            (true, false) => Self::HighRbiLowContribution,
            (false, false) => Self::LowRbiLowContribution,
            (false, true) => Self::LowRbiHighContribution,
        }
    }

    pub fn label(&self) -> &'static str {
        self.legend().label
    }

    pub fn legend(&self) -> &'static LegendEntry {
        match self {
            Self::HighRbiHighContribution => &QUADRANT_LEGEND[0],
            Self::HighRbiLowContribution => &QUADRANT_LEGEND[1],
            Self::LowRbiLowContribution => &QUADRANT_LEGEND[2],
            Self::LowRbiHighContribution => &QUADRANT_LEGEND[3],
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the static quadrant legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub const QUADRANT_LEGEND: [LegendEntry; 4] = [
    LegendEntry {
        label: "High Avg RBI + High Contribution",
        color: "rgba(242, 142, 43, 0.3)",
        description: "Team excels in consistent scoring and significantly drives game outcomes through efficient batting.",
    },
    LegendEntry {
        label: "High Avg RBI + Low Contribution",
        color: "rgba(225, 87, 89, 0.3)",
        description: "Team scores well but relies less on efficient batting, possibly benefiting more from opponent errors or strategic plays.",
    },
    LegendEntry {
        label: "Low Avg RBI + Low Contribution",
        color: "rgba(89, 161, 79, 0.3)",
        description: "Team struggles in overall scoring and lacks effectiveness in converting batting opportunities into runs.",
    },
    LegendEntry {
        label: "Low Avg RBI + High Contribution",
        color: "rgba(78, 121, 167, 0.3)",
        description: "Team maximizes scoring opportunities despite limited batting success, indicating efficiency under limited conditions.",
    },
];
