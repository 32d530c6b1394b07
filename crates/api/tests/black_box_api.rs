use reqwest::StatusCode;
use serde_json::json;

use nexus_api::app::AdminSeed;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = nexus_api::app::build_app(AdminSeed {
            name: "Administrator".to_string(),
            email: "admin@test.local".to_string(),
            password: "admin-secret".to_string(),
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn login(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    password: &str,
    role: &str,
) -> String {
    let res = client
        .post(format!("{}/auth/login", base_url))
        .json(&json!({ "email": email, "password": password, "role": role }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

async fn admin_token(client: &reqwest::Client, base_url: &str) -> String {
    login(client, base_url, "admin@test.local", "admin-secret", "SUPER_ADMIN").await
}

/// Register an account and approve it as the admin; returns (id, token).
async fn approved_account(
    client: &reqwest::Client,
    base_url: &str,
    admin: &str,
    name: &str,
    email: &str,
    role: &str,
) -> (String, String) {
    let res = client
        .post(format!("{}/auth/register", base_url))
        .json(&json!({ "name": name, "email": email, "password": "pw", "role": role }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    let id = body["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/accounts/{}/approve", base_url, id))
        .bearer_auth(admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let token = login(client, base_url, email, "pw", role).await;
    (id, token)
}

async fn record_espresso_purchase(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    quantity: i64,
) -> serde_json::Value {
    let res = client
        .post(format!("{}/purchases", base_url))
        .bearer_auth(token)
        .json(&json!({
            "supplier": "Coffee Source Inc",
            "product_name": "Espresso",
            "category": "Coffee",
            "brand": "Nespresso",
            "unit": "kg",
            "quantity": quantity,
            "unit_cost": 2800,
            "sale_price": 4500,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/whoami", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Health stays open.
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn registration_is_gated_by_approval() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", srv.base_url))
        .json(&json!({
            "name": "Amina",
            "email": "amina@test.local",
            "password": "pw",
            "role": "EMPLOYEE",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let account: serde_json::Value = res.json().await.unwrap();
    assert_eq!(account["status"], "PENDING");
    assert!(account.get("password").is_none());

    // Pending: login refused.
    let res = client
        .post(format!("{}/auth/login", srv.base_url))
        .json(&json!({ "email": "amina@test.local", "password": "pw", "role": "EMPLOYEE" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "account_pending");

    let admin = admin_token(&client, &srv.base_url).await;
    let id = account["id"].as_str().unwrap();
    let res = client
        .post(format!("{}/accounts/{}/approve", srv.base_url, id))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    login(&client, &srv.base_url, "amina@test.local", "pw", "EMPLOYEE").await;
}

#[tokio::test]
async fn employees_cannot_record_purchases() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let admin = admin_token(&client, &srv.base_url).await;
    let (_, employee) = approved_account(
        &client,
        &srv.base_url,
        &admin,
        "Amina",
        "amina@test.local",
        "EMPLOYEE",
    )
    .await;

    let res = client
        .post(format!("{}/purchases", srv.base_url))
        .bearer_auth(&employee)
        .json(&json!({
            "supplier": "Coffee Source Inc",
            "product_name": "Espresso",
            "category": "Coffee",
            "brand": "Nespresso",
            "unit": "kg",
            "quantity": 10,
            "unit_cost": 2800,
            "sale_price": 4500,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn purchase_then_sale_adjusts_stock_and_customers() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let admin = admin_token(&client, &srv.base_url).await;

    let body = record_espresso_purchase(&client, &srv.base_url, &admin, 150).await;
    let product_id = body["product"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["product"]["stock"], 150);

    let res = client
        .post(format!("{}/sales", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "items": [{ "product_id": product_id, "quantity": 120 }],
            "customer_name": "Rahim",
            "customer_phone": "01711XXXXXX",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let sale: serde_json::Value = res.json().await.unwrap();
    let sub_total = sale["sub_total"].as_i64().unwrap();
    let vat = sale["vat_amount"].as_i64().unwrap();
    assert_eq!(sale["grand_total"].as_i64().unwrap(), sub_total + vat);

    let res = client
        .get(format!("{}/products/{}", srv.base_url, product_id))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["stock"], 30);

    // The remaining 30 cannot cover a 40-unit sale.
    let res = client
        .post(format!("{}/sales", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "items": [{ "product_id": product_id, "quantity": 40 }],
            "customer_name": "Rahim",
            "customer_phone": "01711XXXXXX",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "insufficient_stock");

    let res = client
        .get(format!("{}/customers", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["phone"], "01711XXXXXX");
}

#[tokio::test]
async fn supplier_payment_flow() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let admin = admin_token(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/suppliers", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "name": "Coffee Source Inc",
            "company_name": "CSI Ltd",
            "phone": "01811XXXXXX",
            "location": "Dhaka",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let supplier: serde_json::Value = res.json().await.unwrap();
    let id = supplier["id"].as_str().unwrap();

    let res = client
        .post(format!("{}/suppliers/{}/payments", srv.base_url, id))
        .bearer_auth(&admin)
        .json(&json!({ "amount": 500000, "method": "bank" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let supplier: serde_json::Value = res.json().await.unwrap();
    assert_eq!(supplier["total_paid"], 500000);
    assert_eq!(supplier["total_due"], 0);
    assert_eq!(supplier["payments"].as_array().unwrap().len(), 1);

    // Zero amount is rejected.
    let res = client
        .post(format!("{}/suppliers/{}/payments", srv.base_url, id))
        .bearer_auth(&admin)
        .json(&json!({ "amount": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn leave_requests_are_scoped_to_the_employee() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let admin = admin_token(&client, &srv.base_url).await;
    let (_, amina) = approved_account(
        &client,
        &srv.base_url,
        &admin,
        "Amina",
        "amina@test.local",
        "EMPLOYEE",
    )
    .await;
    let (_, karim) = approved_account(
        &client,
        &srv.base_url,
        &admin,
        "Karim",
        "karim@test.local",
        "EMPLOYEE",
    )
    .await;

    let res = client
        .post(format!("{}/leave-requests", srv.base_url))
        .bearer_auth(&amina)
        .json(&json!({
            "leave_type": "Sick",
            "reason": "flu",
            "start_date": "2024-06-05",
            "end_date": "2024-06-07",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let request: serde_json::Value = res.json().await.unwrap();
    let request_id = request["id"].as_str().unwrap();

    // The other employee sees no requests; the admin sees one.
    let res = client
        .get(format!("{}/leave-requests", srv.base_url))
        .bearer_auth(&karim)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());

    // Employees cannot decide.
    let res = client
        .post(format!(
            "{}/leave-requests/{}/approve",
            srv.base_url, request_id
        ))
        .bearer_auth(&karim)
        .json(&json!({ "paid_status": "PAID" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .post(format!(
            "{}/leave-requests/{}/approve",
            srv.base_url, request_id
        ))
        .bearer_auth(&admin)
        .json(&json!({ "paid_status": "PAID" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let decided: serde_json::Value = res.json().await.unwrap();
    assert_eq!(decided["status"], "APPROVED");
    assert_eq!(decided["paid_status"], "PAID");

    // A second decision conflicts.
    let res = client
        .post(format!("{}/leave-requests/{}/deny", srv.base_url, request_id))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn payroll_run_reports_net_pay() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let admin = admin_token(&client, &srv.base_url).await;
    let (employee_id, _) = approved_account(
        &client,
        &srv.base_url,
        &admin,
        "Amina",
        "amina@test.local",
        "EMPLOYEE",
    )
    .await;

    let res = client
        .put(format!(
            "{}/accounts/{}/salary-structure",
            srv.base_url, employee_id
        ))
        .bearer_auth(&admin)
        .json(&json!({
            "basic": 2500000,
            "house_rent": 1000000,
            "medical": 500000,
            "internet_bill": 100000,
            "extras": [{ "name": "Transport", "amount": 400000 }],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .post(format!("{}/payroll-runs", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "employee_id": employee_id,
            "month": "June 2024",
            "status": "PAID",
            "method": "bank",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let record: serde_json::Value = res.json().await.unwrap();
    assert_eq!(record["net_pay"], 4500000);
}

#[tokio::test]
async fn low_stock_report_lists_depleted_products() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let admin = admin_token(&client, &srv.base_url).await;

    let body = record_espresso_purchase(&client, &srv.base_url, &admin, 12).await;
    let product_id = body["product"]["id"].as_str().unwrap().to_string();

    let res = client
        .get(format!("{}/products/low-stock", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["items"].as_array().unwrap().is_empty());

    let res = client
        .post(format!("{}/sales", srv.base_url))
        .bearer_auth(&admin)
        .json(&json!({
            "items": [{ "product_id": product_id, "quantity": 5 }],
            "customer_name": "Rahim",
            "customer_phone": "01711XXXXXX",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!("{}/products/low-stock", srv.base_url))
        .bearer_auth(&admin)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["stock"], 7);
}
