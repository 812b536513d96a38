use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Employment, EmploymentRequest};
use crate::repositories::CrudRepository;
use crate::utils::errors::{not_found_error, AppResult};

const COLUMNS: &str = "id_employment, id_employee, id_dealership, start_date, end_date";

pub struct PgEmploymentRepository {
    pool: PgPool,
}

impl PgEmploymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgEmploymentRepository {
    type Record = Employment;
    type Request = EmploymentRequest;

    async fn create(&self, request: &EmploymentRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO employment (id_employee, id_dealership, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id_employment
            "#,
        )
        .bind(request.id_employee)
        .bind(request.id_dealership)
        .bind(request.start_date)
        .bind(request.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Employment>> {
        let sql = format!("SELECT {} FROM employment ORDER BY id_employment", COLUMNS);
        let employments = sqlx::query_as::<_, Employment>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(employments)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Employment> {
        let sql = format!("SELECT {} FROM employment WHERE id_employment = $1", COLUMNS);
        sqlx::query_as::<_, Employment>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("employment", id))
    }

    async fn update(&self, id: i32, request: &EmploymentRequest) -> AppResult<Employment> {
        let sql = format!(
            r#"
            UPDATE employment
            SET id_employee = $2, id_dealership = $3, start_date = $4, end_date = $5
            WHERE id_employment = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        sqlx::query_as::<_, Employment>(&sql)
            .bind(id)
            .bind(request.id_employee)
            .bind(request.id_dealership)
            .bind(request.start_date)
            .bind(request.end_date)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("employment", id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM employment WHERE id_employment = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("employment", id));
        }
        Ok(())
    }
}
