use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Employee, EmployeeRequest};
use crate::repositories::dependency_guard::{guard_delete, EMPLOYEE_DEPENDENTS};
use crate::repositories::CrudRepository;
use crate::utils::errors::{not_found_error, AppResult};

const COLUMNS: &str = "id_employee, role, tin, name, surname, phone";

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgEmployeeRepository {
    type Record = Employee;
    type Request = EmployeeRequest;

    async fn create(&self, request: &EmployeeRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO employee (role, tin, name, surname, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_employee
            "#,
        )
        .bind(request.role)
        .bind(&request.tin)
        .bind(&request.name)
        .bind(&request.surname)
        .bind(&request.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let sql = format!("SELECT {} FROM employee ORDER BY id_employee", COLUMNS);
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Employee> {
        let sql = format!("SELECT {} FROM employee WHERE id_employee = $1", COLUMNS);
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("employee", id))
    }

    async fn update(&self, id: i32, request: &EmployeeRequest) -> AppResult<Employee> {
        let sql = format!(
            r#"
            UPDATE employee
            SET role = $2, tin = $3, name = $4, surname = $5, phone = $6
            WHERE id_employee = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .bind(request.role)
            .bind(&request.tin)
            .bind(&request.name)
            .bind(&request.surname)
            .bind(&request.phone)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("employee", id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        guard_delete(&mut *tx, "employee", "employee", "id_employee", EMPLOYEE_DEPENDENTS, id).await?;

        sqlx::query("DELETE FROM employee WHERE id_employee = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
