use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};

use crate::models::{Vehicle, VehiclePatch, VehicleRequest};
use crate::repositories::dependency_guard::{count_dependents, DependencyReport, VEHICLE_DEPENDENTS};
use crate::repositories::{CrudRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppResult};

const COLUMNS: &str = "id_car, vin, id_dealership, brand, model, condition, year, km, plate";

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Reemplazo completo de la fila, compartido por `update` y `patch`
async fn write_vehicle<'e, E>(executor: E, id: i32, request: &VehicleRequest) -> AppResult<Option<Vehicle>>
where
    E: PgExecutor<'e>,
{
    let sql = format!(
        r#"
        UPDATE car_park
        SET vin = $2, id_dealership = $3, brand = $4, model = $5,
            condition = $6, year = $7, km = $8, plate = $9
        WHERE id_car = $1
        RETURNING {}
        "#,
        COLUMNS
    );
    let vehicle = sqlx::query_as::<_, Vehicle>(&sql)
        .bind(id)
        .bind(&request.vin)
        .bind(request.id_dealership)
        .bind(&request.brand)
        .bind(&request.model)
        .bind(request.condition)
        .bind(request.year)
        .bind(request.km)
        .bind(&request.plate)
        .fetch_optional(executor)
        .await?;

    Ok(vehicle)
}

fn into_request(vehicle: Vehicle) -> VehicleRequest {
    VehicleRequest {
        vin: vehicle.vin,
        id_dealership: vehicle.id_dealership,
        brand: vehicle.brand,
        model: vehicle.model,
        condition: vehicle.condition,
        year: vehicle.year,
        km: vehicle.km,
        plate: vehicle.plate,
    }
}

#[async_trait]
impl CrudRepository for PgVehicleRepository {
    type Record = Vehicle;
    type Request = VehicleRequest;

    async fn create(&self, request: &VehicleRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO car_park (vin, id_dealership, brand, model, condition, year, km, plate)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id_car
            "#,
        )
        .bind(&request.vin)
        .bind(request.id_dealership)
        .bind(&request.brand)
        .bind(&request.model)
        .bind(request.condition)
        .bind(request.year)
        .bind(request.km)
        .bind(&request.plate)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let sql = format!("SELECT {} FROM car_park ORDER BY id_car", COLUMNS);
        let vehicles = sqlx::query_as::<_, Vehicle>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Vehicle> {
        let sql = format!("SELECT {} FROM car_park WHERE id_car = $1", COLUMNS);
        sqlx::query_as::<_, Vehicle>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("vehicle", id))
    }

    async fn update(&self, id: i32, request: &VehicleRequest) -> AppResult<Vehicle> {
        write_vehicle(&self.pool, id, request)
            .await?
            .ok_or_else(|| not_found_error("vehicle", id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let vin = sqlx::query_scalar::<_, Option<String>>(
            "SELECT vin FROM car_park WHERE id_car = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("vehicle", id))?;

        // Sin VIN ningún pedido puede referenciar el vehículo
        if let Some(vin) = vin {
            count_dependents(&mut *tx, DependencyReport::new("vehicle", id), VEHICLE_DEPENDENTS, vin)
                .await?
                .into_result()?;
        }

        sqlx::query("DELETE FROM car_park WHERE id_car = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn patch(&self, id: i32, patch: VehiclePatch) -> AppResult<Vehicle> {
        let mut tx = self.pool.begin().await?;

        let sql = format!("SELECT {} FROM car_park WHERE id_car = $1 FOR UPDATE", COLUMNS);
        let mut current = sqlx::query_as::<_, Vehicle>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("vehicle", id))?;

        current.apply_patch(patch);

        let vehicle = write_vehicle(&mut *tx, id, &into_request(current))
            .await?
            .ok_or_else(|| not_found_error("vehicle", id))?;

        tx.commit().await?;
        Ok(vehicle)
    }
}
