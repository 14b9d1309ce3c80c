use crate::{
    abstract_trait::order_line::OrderLineQueryRepositoryTrait, model::OrderLineWithProduct,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const SELECT_LINES: &str = r#"
    SELECT
        d.id AS detalle_id,
        d.pedido_id,
        d.cantidad,
        p.id,
        p.nombre,
        p.descripcion,
        p.precio,
        p.imagen,
        p.categoria_id,
        c.nombre AS categoria_nombre
    FROM detalles_pedido d
    JOIN productos p ON p.id = d.producto_id
    JOIN categorias c ON c.id = p.categoria_id
"#;

#[derive(Clone)]
pub struct OrderLineQueryRepository {
    db: ConnectionPool,
}

impl OrderLineQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderLineQueryRepositoryTrait for OrderLineQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderLineWithProduct>, RepositoryError> {
        info!("🔍 Fetching all order lines");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!("{SELECT_LINES} ORDER BY d.id");

        let lines = sqlx::query_as::<_, OrderLineWithProduct>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order lines: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(lines)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderLineWithProduct>, RepositoryError> {
        info!("🆔 Fetching order line by ID: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("{SELECT_LINES} WHERE d.id = $1");

        let result = sqlx::query_as::<_, OrderLineWithProduct>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_order_ids(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderLineWithProduct>, RepositoryError> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        info!("📦 Fetching lines for {} order(s)", order_ids.len());

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("{SELECT_LINES} WHERE d.pedido_id = ANY($1) ORDER BY d.pedido_id, d.id");

        let lines = sqlx::query_as::<_, OrderLineWithProduct>(&sql)
            .bind(order_ids)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch lines for orders {:?}: {:?}", order_ids, e);
                RepositoryError::from(e)
            })?;

        Ok(lines)
    }
}
