use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Order, OrderRequest};
use crate::repositories::CrudRepository;
use crate::utils::errors::{not_found_error, AppResult};

const COLUMNS: &str = "id_order, status, id_client, id_employee, vin, id_dealership, last_update";

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgOrderRepository {
    type Record = Order;
    type Request = OrderRequest;

    async fn create(&self, request: &OrderRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO "order" (status, id_client, id_employee, vin, id_dealership, last_update)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id_order
            "#,
        )
        .bind(request.status)
        .bind(request.id_client)
        .bind(request.id_employee)
        .bind(&request.vin)
        .bind(request.id_dealership)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Order>> {
        let sql = format!(r#"SELECT {} FROM "order" ORDER BY id_order"#, COLUMNS);
        let orders = sqlx::query_as::<_, Order>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Order> {
        let sql = format!(r#"SELECT {} FROM "order" WHERE id_order = $1"#, COLUMNS);
        sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("order", id))
    }

    async fn update(&self, id: i32, request: &OrderRequest) -> AppResult<Order> {
        let sql = format!(
            r#"
            UPDATE "order"
            SET status = $2, id_client = $3, id_employee = $4, vin = $5,
                id_dealership = $6, last_update = NOW()
            WHERE id_order = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .bind(request.status)
            .bind(request.id_client)
            .bind(request.id_employee)
            .bind(&request.vin)
            .bind(request.id_dealership)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("order", id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query(r#"DELETE FROM "order" WHERE id_order = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("order", id));
        }
        Ok(())
    }
}
