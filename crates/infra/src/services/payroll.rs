//! Payroll runs: snapshot an employee's salary structure into an immutable
//! record.

use std::sync::Arc;

use chrono::NaiveDate;

use nexus_auth::Account;
use nexus_core::{AccountId, DomainError, PaymentMethod, PayrollId};
use nexus_hr::{PayrollAdjustments, PayrollRecord, PayrollStatus};

use crate::error::ServiceResult;
use crate::store::EntityStore;

pub type AccountStore = Arc<dyn EntityStore<AccountId, Account>>;
pub type PayrollStore = Arc<dyn EntityStore<PayrollId, PayrollRecord>>;

pub struct PayrollService {
    accounts: AccountStore,
    payrolls: PayrollStore,
}

impl PayrollService {
    pub fn new(accounts: AccountStore, payrolls: PayrollStore) -> Self {
        Self { accounts, payrolls }
    }

    /// Run payroll for one employee. The salary structure is copied as of
    /// this call; later edits never change the stored record.
    pub fn run(
        &self,
        employee_id: AccountId,
        month: &str,
        adjustments: PayrollAdjustments,
        status: PayrollStatus,
        method: PaymentMethod,
        date: NaiveDate,
    ) -> ServiceResult<PayrollRecord> {
        let employee = self
            .accounts
            .get(&employee_id)
            .ok_or(DomainError::NotFound)?;
        let record = PayrollRecord::run(&employee, month, adjustments, status, method, date)?;
        self.payrolls.upsert(record.id, record.clone());
        tracing::info!(
            payroll_id = %record.id,
            employee_id = %employee_id,
            net_pay = record.net_pay,
            month = %record.month,
            "payroll run recorded"
        );
        Ok(record)
    }

    /// Replace an employee's stored salary structure. Affects future runs
    /// only.
    pub fn set_salary_structure(
        &self,
        employee_id: AccountId,
        structure: nexus_auth::SalaryStructure,
    ) -> ServiceResult<()> {
        self.accounts.update(&employee_id, &mut |a| {
            a.salary_structure = Some(structure.clone());
            Ok(())
        })?;
        Ok(())
    }

    pub fn list(&self) -> Vec<PayrollRecord> {
        self.payrolls.list()
    }
}
