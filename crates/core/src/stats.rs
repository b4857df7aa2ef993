// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard counters computed from a set of issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::issue::{Issue, Status};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DepartmentStats {
    pub total: usize,
    pub open: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct DashboardStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// High and urgent issues, whatever their status.
    pub high_priority: usize,
    /// Past due and neither resolved nor closed.
    pub overdue: usize,
    /// Keyed by department id.
    pub departments: BTreeMap<String, DepartmentStats>,
}

pub fn compute<'a, I>(issues: I, now: DateTime<Utc>) -> DashboardStats
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut stats = DashboardStats::default();
    for issue in issues {
        stats.total += 1;
        match issue.status {
            Status::Open => stats.open += 1,
            Status::InProgress => stats.in_progress += 1,
            Status::Resolved => stats.resolved += 1,
            _ => {}
        }
        if issue.priority.is_high() {
            stats.high_priority += 1;
        }
        if issue.is_overdue(now) {
            stats.overdue += 1;
        }

        let department = stats.departments.entry(issue.department_id.clone()).or_default();
        department.total += 1;
        if issue.status == Status::Open {
            department.open += 1;
        }
    }
    stats
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
