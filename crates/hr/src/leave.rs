//! Leave request workflow.
//!
//! State machine: `Pending` -> `Approved` (sets approver + paid status) or
//! `Pending` -> `Rejected` (sets approver). Both outcomes are terminal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nexus_core::{AccountId, DomainError, DomainResult, LeaveRequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    Casual,
    Sick,
    Annual,
    Unpaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// Set on approval only: whether the leave days are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaidStatus {
    Paid,
    Unpaid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub employee_id: AccountId,
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
    pub request_date: NaiveDate,
    pub approver_id: Option<AccountId>,
    pub paid_status: Option<PaidStatus>,
}

impl LeaveRequest {
    /// Submit a new request. Rejects a blank reason and a start date after
    /// the end date; nothing is created on rejection.
    pub fn submit(
        employee_id: AccountId,
        employee_name: impl Into<String>,
        leave_type: LeaveType,
        reason: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        request_date: NaiveDate,
    ) -> DomainResult<Self> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(DomainError::validation("reason must not be blank"));
        }
        if start_date > end_date {
            return Err(DomainError::validation(
                "start date must not be after end date",
            ));
        }

        Ok(Self {
            id: LeaveRequestId::new(),
            employee_id,
            employee_name: employee_name.into(),
            leave_type,
            reason,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
            request_date,
            approver_id: None,
            paid_status: None,
        })
    }

    /// Inclusive number of leave days requested.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// `Pending` -> `Approved`, recording who decided and whether the days
    /// are paid. Deciding a non-pending request is a conflict.
    pub fn approve(&mut self, approver_id: AccountId, paid_status: PaidStatus) -> DomainResult<()> {
        self.ensure_pending()?;
        self.status = LeaveStatus::Approved;
        self.approver_id = Some(approver_id);
        self.paid_status = Some(paid_status);
        Ok(())
    }

    /// `Pending` -> `Rejected`, recording who decided.
    pub fn deny(&mut self, approver_id: AccountId) -> DomainResult<()> {
        self.ensure_pending()?;
        self.status = LeaveStatus::Rejected;
        self.approver_id = Some(approver_id);
        Ok(())
    }

    fn ensure_pending(&self) -> DomainResult<()> {
        if self.status != LeaveStatus::Pending {
            return Err(DomainError::conflict(format!(
                "leave request already decided (status: {:?})",
                self.status
            )));
        }
        Ok(())
    }
}
