use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Dealership, DealershipRequest};
use crate::repositories::dependency_guard::{guard_delete, DEALERSHIP_DEPENDENTS};
use crate::repositories::CrudRepository;
use crate::utils::errors::{not_found_error, AppResult};

const COLUMNS: &str = "id_dealership, postal_code, city, address, phone";

pub struct PgDealershipRepository {
    pool: PgPool,
}

impl PgDealershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgDealershipRepository {
    type Record = Dealership;
    type Request = DealershipRequest;

    async fn create(&self, request: &DealershipRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO dealership (postal_code, city, address, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id_dealership
            "#,
        )
        .bind(&request.postal_code)
        .bind(&request.city)
        .bind(&request.address)
        .bind(&request.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Dealership>> {
        let sql = format!("SELECT {} FROM dealership ORDER BY id_dealership", COLUMNS);
        let dealerships = sqlx::query_as::<_, Dealership>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(dealerships)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Dealership> {
        let sql = format!("SELECT {} FROM dealership WHERE id_dealership = $1", COLUMNS);
        sqlx::query_as::<_, Dealership>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("dealership", id))
    }

    async fn update(&self, id: i32, request: &DealershipRequest) -> AppResult<Dealership> {
        let sql = format!(
            r#"
            UPDATE dealership
            SET postal_code = $2, city = $3, address = $4, phone = $5
            WHERE id_dealership = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        sqlx::query_as::<_, Dealership>(&sql)
            .bind(id)
            .bind(&request.postal_code)
            .bind(&request.city)
            .bind(&request.address)
            .bind(&request.phone)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("dealership", id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        guard_delete(&mut *tx, "dealership", "dealership", "id_dealership", DEALERSHIP_DEPENDENTS, id)
            .await?;

        sqlx::query("DELETE FROM dealership WHERE id_dealership = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
