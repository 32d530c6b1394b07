use chrono::NaiveDate;
use serde::Deserialize;

use nexus_auth::Role;
use nexus_core::{MobileProvider, PaymentMethod};
use nexus_hr::{LeaveType, PaidStatus, PayrollStatus};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct RecordPurchaseRequest {
    pub supplier: String,
    pub product_name: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub brand: String,
    pub sub_brand: Option<String>,
    pub unit: String,
    pub quantity: i64,
    pub unit_cost: i64,
    pub sale_price: i64,
    #[serde(default = "default_vat_percent")]
    pub tax_percent: i64,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct SaleLineRequest {
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct CompleteSaleRequest {
    pub items: Vec<SaleLineRequest>,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub discount: i64,
    #[serde(default = "default_vat_percent")]
    pub vat_percent: i64,
    #[serde(default)]
    pub bag_count: i64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    pub provider: Option<MobileProvider>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterSupplierRequest {
    pub name: String,
    pub company_name: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct SupplierPaymentRequest {
    pub amount: i64,
    #[serde(default)]
    pub method: PaymentMethod,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct RunPayrollRequest {
    pub employee_id: String,
    pub month: String,
    #[serde(default)]
    pub vat_tax_deduction: i64,
    #[serde(default)]
    pub bonus: i64,
    #[serde(default)]
    pub overtime_pay: i64,
    pub status: PayrollStatus,
    #[serde(default)]
    pub method: PaymentMethod,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct SalaryStructureRequest {
    #[serde(default)]
    pub basic: i64,
    #[serde(default)]
    pub house_rent: i64,
    #[serde(default)]
    pub medical: i64,
    #[serde(default)]
    pub internet_bill: i64,
    #[serde(default)]
    pub extras: Vec<NamedAllowanceRequest>,
}

#[derive(Debug, Deserialize)]
pub struct NamedAllowanceRequest {
    pub name: String,
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitLeaveRequest {
    pub leave_type: LeaveType,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ApproveLeaveRequest {
    pub paid_status: PaidStatus,
}

#[derive(Debug, Deserialize)]
pub struct RecordCostRequest {
    pub category: String,
    pub amount: i64,
    #[serde(default)]
    pub note: String,
    pub date: Option<NaiveDate>,
}

fn default_vat_percent() -> i64 {
    nexus_sales::DEFAULT_VAT_PERCENT
}
