//! Leave request workflow: submit, then a single approve-or-deny decision.

use std::sync::Arc;

use chrono::NaiveDate;

use nexus_auth::Account;
use nexus_core::{AccountId, DomainError, LeaveRequestId};
use nexus_hr::{LeaveRequest, LeaveType, PaidStatus};

use crate::error::ServiceResult;
use crate::store::EntityStore;

pub type AccountStore = Arc<dyn EntityStore<AccountId, Account>>;
pub type LeaveStore = Arc<dyn EntityStore<LeaveRequestId, LeaveRequest>>;

pub struct LeaveService {
    accounts: AccountStore,
    requests: LeaveStore,
}

impl LeaveService {
    pub fn new(accounts: AccountStore, requests: LeaveStore) -> Self {
        Self { accounts, requests }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        &self,
        employee_id: AccountId,
        leave_type: LeaveType,
        reason: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        request_date: NaiveDate,
    ) -> ServiceResult<LeaveRequest> {
        let employee = self
            .accounts
            .get(&employee_id)
            .ok_or(DomainError::NotFound)?;
        let request = LeaveRequest::submit(
            employee.id,
            employee.name,
            leave_type,
            reason,
            start_date,
            end_date,
            request_date,
        )?;
        self.requests.upsert(request.id, request.clone());
        tracing::info!(
            request_id = %request.id,
            employee_id = %employee_id,
            days = request.duration_days(),
            "leave request submitted"
        );
        Ok(request)
    }

    pub fn approve(
        &self,
        request_id: LeaveRequestId,
        approver_id: AccountId,
        paid_status: PaidStatus,
    ) -> ServiceResult<LeaveRequest> {
        self.requests
            .update(&request_id, &mut |r| r.approve(approver_id, paid_status))?;
        let request = self.requests.get(&request_id).ok_or(DomainError::NotFound)?;
        tracing::info!(request_id = %request_id, "leave request approved");
        Ok(request)
    }

    pub fn deny(
        &self,
        request_id: LeaveRequestId,
        approver_id: AccountId,
    ) -> ServiceResult<LeaveRequest> {
        self.requests
            .update(&request_id, &mut |r| r.deny(approver_id))?;
        let request = self.requests.get(&request_id).ok_or(DomainError::NotFound)?;
        tracing::info!(request_id = %request_id, "leave request denied");
        Ok(request)
    }

    pub fn list(&self) -> Vec<LeaveRequest> {
        self.requests.list()
    }
}
