// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only team, user and department directories.
//!
//! The engine only ever reads these: it resolves a team by id when handing
//! an issue to a team. User listings exist for callers populating selection
//! lists. [`StaticDirectory`] serves all three from fixed data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A named group of users with one designated lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub department_id: String,
    /// Member user ids, lead included.
    pub members: Vec<String>,
    /// User id of the lead.
    pub lead: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// What a user may do in the dashboard. Not enforced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    DepartmentAdmin,
    Supervisor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::DepartmentAdmin => "department_admin",
            Role::Supervisor => "supervisor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "super_admin" => Ok(Role::SuperAdmin),
            "department_admin" => Ok(Role::DepartmentAdmin),
            "supervisor" => Ok(Role::Supervisor),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Home department; super admins have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

fn default_active() -> bool {
    true
}

/// Team lookup consumed by the engine.
pub trait TeamDirectory: Send + Sync {
    /// Resolves a team by id. `Ok(None)` means the id does not exist.
    fn get_team(&self, id: &str) -> Result<Option<Team>>;

    /// Lists teams, optionally restricted to one department.
    fn list_teams(&self, department_id: Option<&str>) -> Result<Vec<Team>>;
}

/// User lookup for callers. The engine itself never needs it.
pub trait UserDirectory: Send + Sync {
    fn list_users(&self, department_id: Option<&str>) -> Result<Vec<User>>;
}

impl<D: TeamDirectory> TeamDirectory for &D {
    fn get_team(&self, id: &str) -> Result<Option<Team>> {
        (*self).get_team(id)
    }

    fn list_teams(&self, department_id: Option<&str>) -> Result<Vec<Team>> {
        (*self).list_teams(department_id)
    }
}

/// Directory backed by in-memory lists.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    departments: Vec<Department>,
    users: Vec<User>,
    teams: Vec<Team>,
}

impl StaticDirectory {
    pub fn new(departments: Vec<Department>, users: Vec<User>, teams: Vec<Team>) -> Self {
        StaticDirectory { departments, users, teams }
    }

    pub fn list_departments(&self) -> &[Department] {
        &self.departments
    }
}

fn in_department(department_id: Option<&str>, candidate: Option<&str>) -> bool {
    match department_id {
        Some(wanted) => candidate == Some(wanted),
        None => true,
    }
}

impl TeamDirectory for StaticDirectory {
    fn get_team(&self, id: &str) -> Result<Option<Team>> {
        Ok(self.teams.iter().find(|t| t.id == id).cloned())
    }

    fn list_teams(&self, department_id: Option<&str>) -> Result<Vec<Team>> {
        Ok(self
            .teams
            .iter()
            .filter(|t| in_department(department_id, Some(&t.department_id)))
            .cloned()
            .collect())
    }
}

impl UserDirectory for StaticDirectory {
    fn list_users(&self, department_id: Option<&str>) -> Result<Vec<User>> {
        Ok(self
            .users
            .iter()
            .filter(|u| in_department(department_id, u.department_id.as_deref()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
