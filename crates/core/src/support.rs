// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Support requests: help asked of another department or user on behalf of
//! an issue. Tracked alongside the issue, separately from its status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Priority;

/// What kind of help is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SupportType {
    Escalation,
    Consultation,
    ResourceRequest,
    TechnicalSupport,
}

impl SupportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportType::Escalation => "escalation",
            SupportType::Consultation => "consultation",
            SupportType::ResourceRequest => "resource_request",
            SupportType::TechnicalSupport => "technical_support",
        }
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SupportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "escalation" => Ok(SupportType::Escalation),
            "consultation" => Ok(SupportType::Consultation),
            "resource_request" => Ok(SupportType::ResourceRequest),
            "technical_support" => Ok(SupportType::TechnicalSupport),
            _ => Err(Error::InvalidSupportType(s.to_string())),
        }
    }
}

/// Where a support request stands. New requests start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SupportStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl SupportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::Pending => "pending",
            SupportStatus::Approved => "approved",
            SupportStatus::Rejected => "rejected",
            SupportStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SupportStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(SupportStatus::Pending),
            "approved" => Ok(SupportStatus::Approved),
            "rejected" => Ok(SupportStatus::Rejected),
            "completed" => Ok(SupportStatus::Completed),
            _ => Err(Error::InvalidSupportStatus(s.to_string())),
        }
    }
}

/// A help request attached to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SupportRequest {
    /// Unique identifier (format: `sup-{hash}`).
    pub id: String,
    /// User who asked for help.
    pub requested_by: String,
    /// Department the request comes from.
    pub requested_from: String,
    /// Department or user the request is addressed to.
    pub requested_to: String,
    #[serde(rename = "type")]
    pub request_type: SupportType,
    pub priority: Priority,
    pub description: String,
    pub status: SupportStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[path = "support_tests.rs"]
mod tests;
