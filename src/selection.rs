//! Touch hit-testing among the values plotted at a probed x position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two value axes a series is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDependency {
    #[serde(alias = "left")]
    Primary,
    #[serde(alias = "right")]
    Secondary,
}

impl FromStr for AxisDependency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" | "left" => Ok(Self::Primary),
            "secondary" | "right" => Ok(Self::Secondary),
            _ => Err(format!("Unknown axis: {}", s)),
        }
    }
}

impl fmt::Display for AxisDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisDependency::Primary => write!(f, "primary"),
            AxisDependency::Secondary => write!(f, "secondary"),
        }
    }
}

/// One series' value at the probed position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionDetail {
    pub value: f64,
    #[serde(alias = "series")]
    pub data_set_index: usize,
    #[serde(default)]
    pub axis: Option<AxisDependency>,
}

impl SelectionDetail {
    pub fn new(value: f64, data_set_index: usize, axis: Option<AxisDependency>) -> Self {
        Self {
            value,
            data_set_index,
            axis,
        }
    }
}

/// Series index of the candidate closest to `value`.
///
/// With `axis` set, only candidates tagged with that axis are considered;
/// untagged candidates never match a filter. Ties go to the earliest
/// candidate. Returns `None` if nothing matches.
pub fn closest_data_set_index(
    vals_at_index: &[SelectionDetail],
    value: f64,
    axis: Option<AxisDependency>,
) -> Option<usize> {
    closest(vals_at_index, value, |sel| {
        axis.map_or(true, |wanted| sel.axis == Some(wanted))
    })
    .map(|(sel, _)| sel.data_set_index)
}

/// Smallest distance from `value` to a candidate on `axis`, or `None` if no
/// candidate is on that axis.
pub fn minimum_distance(
    vals_at_index: &[SelectionDetail],
    value: f64,
    axis: AxisDependency,
) -> Option<f64> {
    closest(vals_at_index, value, |sel| sel.axis == Some(axis)).map(|(_, distance)| distance)
}

fn closest<'a>(
    vals_at_index: &'a [SelectionDetail],
    value: f64,
    matches: impl Fn(&SelectionDetail) -> bool,
) -> Option<(&'a SelectionDetail, f64)> {
    let mut best: Option<(&SelectionDetail, f64)> = None;

    for sel in vals_at_index.iter().filter(|sel| matches(sel)) {
        let distance = (sel.value - value).abs();
        let best_distance = best.map_or(f64::MAX, |(_, d)| d);
        // Strict: the first of equal candidates wins, NaN never does.
        if distance < best_distance {
            best = Some((sel, distance));
        }
    }

    best
}
