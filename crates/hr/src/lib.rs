//! Payroll runs and the leave-request workflow.

pub mod leave;
pub mod payroll;

pub use leave::{LeaveRequest, LeaveStatus, LeaveType, PaidStatus};
pub use payroll::{PayrollAdjustments, PayrollRecord, PayrollStatus, net_pay};
