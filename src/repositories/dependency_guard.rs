//! Guardia de dependencias
//!
//! El schema no borra en cascada: antes de eliminar una fila padre se
//! cuentan las filas hijas de cada relación conocida y, si alguna existe,
//! el borrado se rechaza con un `Conflict` que lista relación y cantidad.
//!
//! Las funciones reciben la conexión de la transacción del borrado. La fila
//! padre se bloquea antes de contar (`FOR UPDATE`), de modo que un insert
//! concurrente de una fila hija queda esperando la clave foránea.

use sqlx::{PgConnection, Postgres};

use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Relación hija que referencia a una entidad padre
#[derive(Debug, Clone, Copy)]
pub struct Dependent {
    pub relation: &'static str,
    pub table: &'static str,
    pub column: &'static str,
}

pub const DEALERSHIP_DEPENDENTS: &[Dependent] = &[
    Dependent { relation: "vehicle", table: "car_park", column: "id_dealership" },
    Dependent { relation: "employment", table: "employment", column: "id_dealership" },
    Dependent { relation: "order", table: "\"order\"", column: "id_dealership" },
    Dependent { relation: "appointment", table: "appointment", column: "id_dealership" },
];

pub const EMPLOYEE_DEPENDENTS: &[Dependent] = &[
    Dependent { relation: "order", table: "\"order\"", column: "id_employee" },
    Dependent { relation: "appointment", table: "appointment", column: "id_employee" },
    Dependent { relation: "employment", table: "employment", column: "id_employee" },
];

pub const CLIENT_DEPENDENTS: &[Dependent] = &[
    Dependent { relation: "order", table: "\"order\"", column: "id_client" },
    Dependent { relation: "appointment", table: "appointment", column: "id_client" },
];

/// Los pedidos referencian el vehículo por VIN, no por id
pub const VEHICLE_DEPENDENTS: &[Dependent] = &[
    Dependent { relation: "order", table: "\"order\"", column: "vin" },
];

/// Resultado del conteo de dependencias de una fila padre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    parent: String,
    counts: Vec<(&'static str, i64)>,
}

impl DependencyReport {
    pub fn new(entity: &str, id: i32) -> Self {
        Self {
            parent: format!("{} {}", entity, id),
            counts: Vec::new(),
        }
    }

    pub fn record(&mut self, relation: &'static str, count: i64) {
        if count > 0 {
            self.counts.push((relation, count));
        }
    }

    pub fn is_clear(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[(&'static str, i64)] {
        &self.counts
    }

    /// `Ok` si no hay dependencias, `Conflict` con el detalle en caso contrario
    pub fn into_result(self) -> AppResult<()> {
        if self.is_clear() {
            return Ok(());
        }

        let details = self
            .counts
            .iter()
            .map(|(relation, count)| format!("{} {} records", count, relation))
            .collect::<Vec<_>>()
            .join(", ");

        Err(AppError::Conflict(format!(
            "cannot delete {}: referenced by {}",
            self.parent, details
        )))
    }
}

/// Contar las filas hijas de cada relación que apuntan a `key`
pub async fn count_dependents<V>(
    conn: &mut PgConnection,
    mut report: DependencyReport,
    dependents: &[Dependent],
    key: V,
) -> AppResult<DependencyReport>
where
    V: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Clone + Send + 'static,
{
    for dependent in dependents {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = $1",
            dependent.table, dependent.column
        );
        let count = sqlx::query_scalar::<Postgres, i64>(&sql)
            .bind(key.clone())
            .fetch_one(&mut *conn)
            .await?;
        report.record(dependent.relation, count);
    }

    Ok(report)
}

/// Bloquear la fila padre para el resto de la transacción.
/// Devuelve `false` si la fila no existe.
pub async fn lock_parent(
    conn: &mut PgConnection,
    table: &str,
    key_column: &str,
    id: i32,
) -> AppResult<bool> {
    let sql = format!("SELECT 1 FROM {} WHERE {} = $1 FOR UPDATE", table, key_column);
    let row = sqlx::query_scalar::<Postgres, i32>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.is_some())
}

/// Guardia completa para padres referenciados por su id
pub async fn guard_delete(
    conn: &mut PgConnection,
    entity: &str,
    table: &str,
    key_column: &str,
    dependents: &[Dependent],
    id: i32,
) -> AppResult<()> {
    if !lock_parent(conn, table, key_column, id).await? {
        return Err(not_found_error(entity, id));
    }

    count_dependents(conn, DependencyReport::new(entity, id), dependents, id)
        .await?
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_report() {
        let mut report = DependencyReport::new("dealership", 3);
        report.record("vehicle", 0);
        report.record("order", 0);
        assert!(report.is_clear());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_blocked_report_lists_every_relation() {
        let mut report = DependencyReport::new("dealership", 4);
        report.record("vehicle", 1);
        report.record("employment", 0);
        report.record("order", 2);

        assert_eq!(report.counts(), &[("vehicle", 1), ("order", 2)]);

        let error = report.into_result().unwrap_err();
        assert!(matches!(error, AppError::Conflict(_)));
        assert_eq!(
            error.to_string(),
            "cannot delete dealership 4: referenced by 1 vehicle records, 2 order records"
        );
    }

    #[test]
    fn test_dependency_tables() {
        let dealership: Vec<_> = DEALERSHIP_DEPENDENTS.iter().map(|d| d.relation).collect();
        assert_eq!(dealership, ["vehicle", "employment", "order", "appointment"]);

        let employee: Vec<_> = EMPLOYEE_DEPENDENTS.iter().map(|d| d.relation).collect();
        assert_eq!(employee, ["order", "appointment", "employment"]);

        assert!(CLIENT_DEPENDENTS.iter().all(|d| d.column == "id_client"));
        assert_eq!(VEHICLE_DEPENDENTS[0].column, "vin");
    }
}
