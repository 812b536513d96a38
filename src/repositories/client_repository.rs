use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Client, ClientRequest};
use crate::repositories::dependency_guard::{guard_delete, CLIENT_DEPENDENTS};
use crate::repositories::CrudRepository;
use crate::utils::errors::{not_found_error, AppResult};

const COLUMNS: &str =
    "id_client, type, phone, email, tin_vat, name, surname, company_name, profession";

pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgClientRepository {
    type Record = Client;
    type Request = ClientRequest;

    async fn create(&self, request: &ClientRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO client (type, phone, email, tin_vat, name, surname, company_name, profession)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id_client
            "#,
        )
        .bind(request.client_type)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(&request.tin_vat)
        .bind(&request.name)
        .bind(&request.surname)
        .bind(&request.company_name)
        .bind(&request.profession)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Client>> {
        let sql = format!("SELECT {} FROM client ORDER BY id_client", COLUMNS);
        let clients = sqlx::query_as::<_, Client>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Client> {
        let sql = format!("SELECT {} FROM client WHERE id_client = $1", COLUMNS);
        sqlx::query_as::<_, Client>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("client", id))
    }

    async fn update(&self, id: i32, request: &ClientRequest) -> AppResult<Client> {
        let sql = format!(
            r#"
            UPDATE client
            SET type = $2, phone = $3, email = $4, tin_vat = $5, name = $6,
                surname = $7, company_name = $8, profession = $9
            WHERE id_client = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        sqlx::query_as::<_, Client>(&sql)
            .bind(id)
            .bind(request.client_type)
            .bind(&request.phone)
            .bind(&request.email)
            .bind(&request.tin_vat)
            .bind(&request.name)
            .bind(&request.surname)
            .bind(&request.company_name)
            .bind(&request.profession)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("client", id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        guard_delete(&mut *tx, "client", "client", "id_client", CLIENT_DEPENDENTS, id).await?;

        sqlx::query("DELETE FROM client WHERE id_client = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
