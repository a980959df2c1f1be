use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use lotview_common::{BodyType, CarModel};

/// Read-only access to the car-model reference data the web layer keeps in
/// Postgres, used to populate the model picker when composing a review.
pub struct CarModelStore {
    pool: PgPool,
}

impl CarModelStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// All known car models.
    pub async fn all(&self) -> Result<Vec<CarModel>> {
        let rows = sqlx::query_as::<_, (String, String, String, i32, Option<i64>)>(
            r#"
            SELECT make, name, body_type, year, dealer_id
            FROM car_models
            ORDER BY make, name, year
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_model).collect())
    }

    /// Car models associated with one dealership.
    pub async fn for_dealer(&self, dealer_id: i64) -> Result<Vec<CarModel>> {
        let rows = sqlx::query_as::<_, (String, String, String, i32, Option<i64>)>(
            r#"
            SELECT make, name, body_type, year, dealer_id
            FROM car_models
            WHERE dealer_id = $1
            ORDER BY make, name, year
            "#,
        )
        .bind(dealer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_model).collect())
    }
}

fn row_to_model(
    (make, name, body_type, year, dealer_id): (String, String, String, i32, Option<i64>),
) -> CarModel {
    CarModel {
        make,
        name,
        body: BodyType::parse(&body_type),
        year,
        dealer_id,
    }
}
