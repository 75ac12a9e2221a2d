//! Projected fantasy points from projected stat quantities and league scoring.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{
    error::{AwardError, Result},
    sleeper::types::ScoringSettings,
};

/// Projection stat keys that carry no fantasy value, e.g. ADP or attempts
/// counters. When a league's scoring settings lack one of these keys it
/// scores zero instead of failing the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NonScoringKeys(BTreeSet<String>);

impl NonScoringKeys {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }
}

impl Default for NonScoringKeys {
    fn default() -> Self {
        Self::new([
            "adp_dd_ppr",
            "cmp_pct",
            "def_fum_td",
            "def_kr_yd",
            "def_pr_td",
            "def_pr_yd",
            "fga",
            "gp",
            "pos_adp_dd_ppr",
            "pr",
            "pr_td",
            "pr_yd",
            "pts_half_ppr",
            "pts_ppr",
            "pts_std",
            "rec_tgt",
            "xpa",
        ])
    }
}

/// Per-unit value of one stat key under the league's scoring.
pub fn scoring_value(
    scoring: &ScoringSettings,
    non_scoring: &NonScoringKeys,
    key: &str,
) -> Result<f64> {
    match scoring.get(key) {
        Some(value) => Ok(value),
        None if non_scoring.contains(key) => Ok(0.0),
        None => Err(AwardError::ScoringSettingMissing {
            key: key.to_string(),
        }),
    }
}

/// Sum of `scoring_value(key) * quantity` over every projected stat.
pub fn projected_points(
    projected_stats: &BTreeMap<String, f64>,
    scoring: &ScoringSettings,
    non_scoring: &NonScoringKeys,
) -> Result<f64> {
    projected_stats
        .iter()
        .map(|(key, quantity)| -> Result<f64> {
            Ok(scoring_value(scoring, non_scoring, key)? * quantity)
        })
        .sum()
}
