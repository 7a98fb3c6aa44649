//! RFP and proposal wire types.
//!
//! These exist to bound the data model only; no business logic in this
//! service operates on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RfpStatus {
    Draft,
    Open,
    Closed,
    Awarded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rfp {
    pub id: Uuid,
    pub buyer_id: UserId,
    pub title: String,
    pub description: String,
    pub budget_range: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub status: RfpStatus,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Submitted,
    Shortlisted,
    Rejected,
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: Uuid,
    pub rfp_id: Uuid,
    pub supplier_id: UserId,
    pub cover_letter: Option<String>,
    pub quoted_price: Option<String>,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
}
