use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Appointment, AppointmentRequest};
use crate::repositories::CrudRepository;
use crate::utils::errors::{not_found_error, AppResult};

const COLUMNS: &str = "id_appointment, id_client, id_employee, id_dealership, date, reason, notes";

pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PgAppointmentRepository {
    type Record = Appointment;
    type Request = AppointmentRequest;

    async fn create(&self, request: &AppointmentRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO appointment (id_client, id_employee, id_dealership, date, reason, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id_appointment
            "#,
        )
        .bind(request.id_client)
        .bind(request.id_employee)
        .bind(request.id_dealership)
        .bind(request.date)
        .bind(&request.reason)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Appointment>> {
        let sql = format!("SELECT {} FROM appointment ORDER BY id_appointment", COLUMNS);
        let appointments = sqlx::query_as::<_, Appointment>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(appointments)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Appointment> {
        let sql = format!("SELECT {} FROM appointment WHERE id_appointment = $1", COLUMNS);
        sqlx::query_as::<_, Appointment>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("appointment", id))
    }

    async fn update(&self, id: i32, request: &AppointmentRequest) -> AppResult<Appointment> {
        let sql = format!(
            r#"
            UPDATE appointment
            SET id_client = $2, id_employee = $3, id_dealership = $4, date = $5,
                reason = $6, notes = $7
            WHERE id_appointment = $1
            RETURNING {}
            "#,
            COLUMNS
        );
        sqlx::query_as::<_, Appointment>(&sql)
            .bind(id)
            .bind(request.id_client)
            .bind(request.id_employee)
            .bind(request.id_dealership)
            .bind(request.date)
            .bind(&request.reason)
            .bind(&request.notes)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("appointment", id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM appointment WHERE id_appointment = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("appointment", id));
        }
        Ok(())
    }
}
