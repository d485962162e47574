//! Employee endpoint integration tests

use company_api::models::{Company, Employee};

use crate::common::{EmployeeFactory, RequestFixtures, TestApp};

fn employees_uri(company_id: &str) -> String {
    format!("/Companies/{}/Employees", company_id)
}

fn employee_uri(company_id: &str, employee_id: &str) -> String {
    format!("/Companies/{}/Employees/{}", company_id, employee_id)
}

#[tokio::test]
async fn test_add_employee() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;

    let response = app
        .post_json(
            &employees_uri(&company.id),
            RequestFixtures::employee("employee1", 1300.0),
        )
        .await;

    response.assert_created();
    let employee: Employee = response.json();
    assert_eq!(employee.name, "employee1");
    assert_eq!(employee.salary, 1300.0);
    assert!(!employee.id.is_empty());
    assert_eq!(
        response.header("location"),
        Some(employee_uri(&company.id, &employee.id).as_str())
    );

    let stored: Company = app.get(&format!("/Companies/{}", company.id)).await.json();
    assert_eq!(stored.employees, Some(vec![employee]));
}

#[tokio::test]
async fn test_add_employee_to_unknown_company() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;

    app.post_json(
        &employees_uri("notexisted"),
        RequestFixtures::employee("employee1", 1300.0),
    )
    .await
    .assert_not_found();

    let employees: Vec<Employee> = app.get(&employees_uri(&company.id)).await.json();
    assert!(employees.is_empty());
}

#[tokio::test]
async fn test_list_employees() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;

    let mut added = Vec::new();
    for _ in 0..3 {
        let req = EmployeeFactory::create();
        added.push(app.add_employee(&company.id, &req.name, req.salary).await);
    }

    let response = app.get(&employees_uri(&company.id)).await;
    response.assert_ok();

    let employees: Vec<Employee> = response.json();
    assert_eq!(employees, added);
}

#[tokio::test]
async fn test_list_employees_before_any_added_is_empty_array() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;

    let response = app.get(&employees_uri(&company.id)).await;
    response.assert_ok();
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn test_list_employees_of_unknown_company() {
    let app = TestApp::new();
    app.get(&employees_uri("notexisted")).await.assert_not_found();
}

#[tokio::test]
async fn test_employees_are_scoped_to_their_company() {
    let app = TestApp::new();
    let acme = app.create_company("Acme").await;
    let globex = app.create_company("Globex").await;
    let employee = app.add_employee(&acme.id, "Ann", 1300.0).await;

    app.patch_json(
        &employee_uri(&globex.id, &employee.id),
        RequestFixtures::salary_only(1.0),
    )
    .await
    .assert_not_found();

    let employees: Vec<Employee> = app.get(&employees_uri(&globex.id)).await.json();
    assert!(employees.is_empty());
}

#[tokio::test]
async fn test_update_salary_only_keeps_name() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;
    let employee = app.add_employee(&company.id, "Ann", 1300.0).await;

    let response = app
        .patch_json(
            &employee_uri(&company.id, &employee.id),
            RequestFixtures::salary_only(2000.0),
        )
        .await;
    response.assert_ok();

    let updated: Employee = response.json();
    assert_eq!(updated.id, employee.id);
    assert_eq!(updated.name, "Ann");
    assert_eq!(updated.salary, 2000.0);
}

#[tokio::test]
async fn test_update_name_only_keeps_salary() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;
    let employee = app.add_employee(&company.id, "Ann", 1300.0).await;

    let response = app
        .patch_json(
            &employee_uri(&company.id, &employee.id),
            RequestFixtures::name_only("Bea"),
        )
        .await;
    response.assert_ok();

    let updated: Employee = response.json();
    assert_eq!(updated.name, "Bea");
    assert_eq!(updated.salary, 1300.0);

    let employees: Vec<Employee> = app.get(&employees_uri(&company.id)).await.json();
    assert_eq!(employees, vec![updated]);
}

#[tokio::test]
async fn test_update_with_null_fields_changes_nothing() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;
    let employee = app.add_employee(&company.id, "Ann", 1300.0).await;

    let response = app
        .patch_json(
            &employee_uri(&company.id, &employee.id),
            serde_json::json!({ "name": null, "salary": null }),
        )
        .await;
    response.assert_ok();

    let updated: Employee = response.json();
    assert_eq!(updated, employee);
}

#[tokio::test]
async fn test_update_unknown_employee() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;

    app.patch_json(
        &employee_uri(&company.id, "notexisted"),
        RequestFixtures::salary_only(1.0),
    )
    .await
    .assert_not_found();
}

#[tokio::test]
async fn test_update_employee_of_unknown_company() {
    let app = TestApp::new();
    app.patch_json(
        &employee_uri("notexisted", "notexisted"),
        RequestFixtures::salary_only(1.0),
    )
    .await
    .assert_not_found();
}

#[tokio::test]
async fn test_delete_employee() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;
    let leaving = app.add_employee(&company.id, "Ann", 1300.0).await;
    let staying = app.add_employee(&company.id, "Bea", 1400.0).await;

    app.delete(&employee_uri(&company.id, &leaving.id))
        .await
        .assert_no_content()
        .assert_empty_body();

    let employees: Vec<Employee> = app.get(&employees_uri(&company.id)).await.json();
    assert_eq!(employees, vec![staying]);
}

#[tokio::test]
async fn test_delete_unknown_employee_leaves_list_unchanged() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;
    let employee = app.add_employee(&company.id, "Ann", 1300.0).await;

    app.delete(&employee_uri(&company.id, "notexisted"))
        .await
        .assert_not_found();

    let employees: Vec<Employee> = app.get(&employees_uri(&company.id)).await.json();
    assert_eq!(employees, vec![employee]);
}

#[tokio::test]
async fn test_delete_employee_before_any_added() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;

    app.delete(&employee_uri(&company.id, "notexisted"))
        .await
        .assert_not_found();
}

#[tokio::test]
async fn test_employee_operations_after_company_deleted() {
    let app = TestApp::new();
    let company = app.create_company("Acme").await;
    let employee = app.add_employee(&company.id, "Ann", 1300.0).await;
    app.delete(&format!("/Companies/{}", company.id))
        .await
        .assert_no_content();

    app.get(&employees_uri(&company.id)).await.assert_not_found();
    app.post_json(
        &employees_uri(&company.id),
        RequestFixtures::employee("Bea", 1.0),
    )
    .await
    .assert_not_found();
    app.patch_json(
        &employee_uri(&company.id, &employee.id),
        RequestFixtures::salary_only(1.0),
    )
    .await
    .assert_not_found();
    app.delete(&employee_uri(&company.id, &employee.id))
        .await
        .assert_not_found();
}
