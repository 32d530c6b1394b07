//! Payroll: net-pay computation with snapshot semantics.
//!
//! A payroll run copies the employee's salary structure at call time, so
//! editing the structure afterwards never changes a past run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nexus_auth::{Account, NamedAllowance, SalaryStructure};
use nexus_core::{AccountId, DomainError, DomainResult, PaymentMethod, PayrollId};

/// Whether the run has been disbursed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayrollStatus {
    Paid,
    Pending,
}

/// Per-run adjustments on top of the stored salary structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PayrollAdjustments {
    /// VAT/tax withheld (cents).
    pub vat_tax_deduction: i64,
    /// One-off bonus (cents).
    pub bonus: i64,
    /// Overtime pay (cents).
    pub overtime_pay: i64,
}

/// Net pay: all allowances plus bonus and overtime, minus the deduction,
/// floored at zero.
pub fn net_pay(salary: &SalaryStructure, adjustments: &PayrollAdjustments) -> i64 {
    let gross = salary.total_allowances() + adjustments.bonus + adjustments.overtime_pay;
    (gross - adjustments.vat_tax_deduction).max(0)
}

/// Immutable snapshot of one payroll run for one employee for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    pub id: PayrollId,
    pub employee_id: AccountId,
    pub employee_name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    /// Month label, e.g. "2024-06".
    pub month: String,
    pub date: NaiveDate,
    pub basic: i64,
    pub house_rent: i64,
    pub medical: i64,
    pub internet_bill: i64,
    pub extras: Vec<NamedAllowance>,
    pub vat_tax_deduction: i64,
    pub bonus: i64,
    pub overtime_pay: i64,
    pub net_pay: i64,
    pub status: PayrollStatus,
    pub method: PaymentMethod,
}

impl PayrollRecord {
    /// Run payroll for one employee.
    ///
    /// An employee with no stored salary structure is treated as all-zero
    /// allowances, which the net-pay check then rejects unless adjustments
    /// make it positive.
    pub fn run(
        employee: &Account,
        month: impl Into<String>,
        adjustments: PayrollAdjustments,
        status: PayrollStatus,
        method: PaymentMethod,
        date: NaiveDate,
    ) -> DomainResult<Self> {
        let month = month.into();
        if month.trim().is_empty() {
            return Err(DomainError::validation("payroll month must not be blank"));
        }

        let salary = employee.salary_structure.clone().unwrap_or_default();
        let net = net_pay(&salary, &adjustments);
        if net <= 0 {
            return Err(DomainError::validation(
                "computed net pay must be positive",
            ));
        }

        Ok(Self {
            id: PayrollId::new(),
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            month,
            date,
            basic: salary.basic,
            house_rent: salary.house_rent,
            medical: salary.medical,
            internet_bill: salary.internet_bill,
            extras: salary.extras,
            vat_tax_deduction: adjustments.vat_tax_deduction,
            bonus: adjustments.bonus,
            overtime_pay: adjustments.overtime_pay,
            net_pay: net,
            status,
            method,
        })
    }
}
