//! Cross-component scenario tests over the full service bundle.
//!
//! These drive purchasing, sales, the supplier ledger, payroll, and the
//! leave workflow through the shared in-memory stores, the way the HTTP
//! layer does.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use nexus_auth::{NamedAllowance, Role, SalaryStructure};
    use nexus_core::{DomainError, PaymentMethod};
    use nexus_hr::{LeaveType, PaidStatus, PayrollAdjustments, PayrollStatus};
    use nexus_purchasing::PurchaseIntake;
    use nexus_sales::CustomerInfo;

    use crate::error::ServiceError;
    use crate::services::{AppServices, CartRequestLine};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn espresso_intake(quantity: i64, unit_cost: i64) -> PurchaseIntake {
        PurchaseIntake {
            supplier: "Coffee Source Inc".to_string(),
            product_name: "Espresso".to_string(),
            category: "Coffee".to_string(),
            sub_category: None,
            brand: "Nespresso".to_string(),
            sub_brand: None,
            unit: "kg".to_string(),
            quantity,
            unit_cost,
            sale_price: 45_00,
            tax_percent: 5,
        }
    }

    #[test]
    fn purchase_then_oversell_then_refill() {
        let app = AppServices::in_memory();

        // Two intakes of the same product: stock accumulates, cost is
        // last-write-wins.
        let (_, product) = app
            .purchasing
            .record_intake(espresso_intake(100, 28_00), day(1))
            .unwrap();
        assert_eq!(product.stock, 100);
        assert_eq!(product.cost, 28_00);

        let (_, product) = app
            .purchasing
            .record_intake(espresso_intake(50, 30_00), day(2))
            .unwrap();
        assert_eq!(product.stock, 150);
        assert_eq!(product.cost, 30_00);

        // Sell 120 of the 150.
        let cart = app
            .sales
            .build_cart(&[CartRequestLine {
                product_id: product.id,
                quantity: 120,
            }])
            .unwrap();
        let settlement = app.sales.settle(&cart, 0, 5, 0);
        app.sales
            .complete_sale(
                &cart,
                CustomerInfo {
                    name: "Rahim".to_string(),
                    phone: "01711XXXXXX".to_string(),
                },
                settlement,
                PaymentMethod::Cash,
                None,
                None,
                day(3),
            )
            .unwrap();
        assert_eq!(app.purchasing.get_product(product.id).unwrap().stock, 30);

        // 40 more cannot be reserved.
        let err = app
            .sales
            .build_cart(&[CartRequestLine {
                product_id: product.id,
                quantity: 40,
            }])
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::InsufficientStock {
                requested: 40,
                available: 30
            })
        ));
        assert_eq!(app.purchasing.get_product(product.id).unwrap().stock, 30);

        // A refill makes the same quantity sellable again.
        app.purchasing
            .record_intake(espresso_intake(20, 30_00), day(4))
            .unwrap();
        assert!(
            app.sales
                .build_cart(&[CartRequestLine {
                    product_id: product.id,
                    quantity: 40,
                }])
                .is_ok()
        );
    }

    #[test]
    fn sales_feed_the_customer_ledger_without_duplicates() {
        let app = AppServices::in_memory();
        let (_, product) = app
            .purchasing
            .record_intake(espresso_intake(100, 28_00), day(1))
            .unwrap();

        let mut expected_spend = 0;
        for (name, quantity) in [("Rahim", 3), ("R. Uddin", 5)] {
            let cart = app
                .sales
                .build_cart(&[CartRequestLine {
                    product_id: product.id,
                    quantity,
                }])
                .unwrap();
            let settlement = app.sales.settle(&cart, 100, 5, 1);
            let sale = app
                .sales
                .complete_sale(
                    &cart,
                    CustomerInfo {
                        name: name.to_string(),
                        phone: "01711XXXXXX".to_string(),
                    },
                    settlement,
                    PaymentMethod::Cash,
                    None,
                    None,
                    day(5),
                )
                .unwrap();
            assert_eq!(
                sale.grand_total,
                sale.sub_total + sale.vat_amount - sale.discount
            );
            expected_spend += sale.grand_total;
        }

        let customers = app.sales.list_customers();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Rahim");
        assert_eq!(customers[0].total_spent, expected_spend);
        assert_eq!(customers[0].last_visit, day(5));
    }

    #[test]
    fn registration_approval_gates_login() {
        let app = AppServices::in_memory();
        let account = app
            .identity
            .register("Amina", "Amina@NexusIMS.test", "s3cret", Role::Employee, day(1))
            .unwrap();

        // Pending accounts cannot log in.
        let err = app
            .identity
            .login("amina@nexusims.test", "s3cret", Role::Employee)
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Auth(nexus_auth::AuthError::AccountPending)
        ));

        app.identity.approve(account.id).unwrap();
        let (logged_in, token) = app
            .identity
            .login("amina@nexusims.test", "s3cret", Role::Employee)
            .unwrap();
        assert_eq!(logged_in.id, account.id);
        assert_eq!(app.sessions.resolve(token).unwrap().account_id, account.id);
    }

    #[test]
    fn payroll_snapshot_survives_a_raise() {
        let app = AppServices::in_memory();
        let account = app
            .identity
            .register("Amina", "amina@nexusims.test", "s3cret", Role::Employee, day(1))
            .unwrap();
        app.payroll
            .set_salary_structure(
                account.id,
                SalaryStructure {
                    basic: 25_000_00,
                    house_rent: 10_000_00,
                    medical: 5_000_00,
                    internet_bill: 1_000_00,
                    extras: vec![NamedAllowance {
                        name: "Transport".to_string(),
                        amount: 4_000_00,
                    }],
                },
            )
            .unwrap();

        let run = app
            .payroll
            .run(
                account.id,
                "June 2024",
                PayrollAdjustments::default(),
                PayrollStatus::Paid,
                PaymentMethod::Bank,
                day(30),
            )
            .unwrap();
        assert_eq!(run.net_pay, 45_000_00);

        app.payroll
            .set_salary_structure(
                account.id,
                SalaryStructure {
                    basic: 60_000_00,
                    ..SalaryStructure::default()
                },
            )
            .unwrap();
        assert_eq!(app.payroll.list()[0].net_pay, 45_000_00);
    }

    #[test]
    fn leave_decisions_require_a_pending_request() {
        let app = AppServices::in_memory();
        let employee = app
            .identity
            .register("Amina", "amina@nexusims.test", "s3cret", Role::Employee, day(1))
            .unwrap();
        let approver = app
            .identity
            .register("Karim", "karim@nexusims.test", "hunter2", Role::Manager, day(1))
            .unwrap();

        let request = app
            .leave
            .submit(
                employee.id,
                LeaveType::Annual,
                "vacation",
                day(10),
                day(14),
                day(2),
            )
            .unwrap();
        assert_eq!(request.duration_days(), 5);

        app.leave
            .approve(request.id, approver.id, PaidStatus::Paid)
            .unwrap();
        let err = app.leave.deny(request.id, approver.id).unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::Conflict(_))));
    }

    #[test]
    fn supplier_ledger_is_independent_bookkeeping() {
        let app = AppServices::in_memory();
        let supplier = app
            .suppliers
            .register("Coffee Source Inc", "CSI Ltd", "01811XXXXXX", "Dhaka")
            .unwrap();

        // Purchasing does not post into the supplier ledger.
        app.purchasing
            .record_intake(espresso_intake(100, 28_00), day(1))
            .unwrap();
        assert_eq!(app.suppliers.get(supplier.id).unwrap().total_due, 0);

        let after = app
            .suppliers
            .record_payment(supplier.id, 5_000_00, day(2), PaymentMethod::Bank)
            .unwrap();
        assert_eq!(after.total_due, 0);
        assert_eq!(after.total_paid, 5_000_00);
        assert_eq!(after.payments.len(), 1);
    }
}
