use crate::{
    abstract_trait::order::OrderCommandRepositoryTrait,
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    model::Order as OrderModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let estado = req.estado.unwrap_or_default();

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO pedidos (nombre_cliente, telefono, total, estado)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre_cliente, telefono, total, estado, fecha_creacion
            "#,
        )
        .bind(&req.nombre_cliente)
        .bind(&req.telefono)
        .bind(&req.total)
        .bind(estado.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for {}: {:?}",
                req.nombre_cliente, err
            );
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created order ID {} ({})", result.id, result.estado);
        Ok(result)
    }

    async fn update_order(&self, req: &UpdateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("order update without id".into()))?;

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE pedidos
            SET nombre_cliente = COALESCE($2, nombre_cliente),
                telefono = COALESCE($3, telefono),
                total = COALESCE($4, total),
                estado = COALESCE($5, estado)
            WHERE id = $1
            RETURNING id, nombre_cliente, telefono, total, estado, fecha_creacion
            "#,
        )
        .bind(id)
        .bind(req.nombre_cliente.as_deref())
        .bind(req.telefono.as_deref())
        .bind(req.total.as_ref())
        .bind(req.estado.map(|estado| estado.as_str()))
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated order ID {} ({})", result.id, result.estado);
        Ok(result)
    }

    async fn delete_order(&self, id: i32) -> Result<(), RepositoryError> {
        info!("❌ Deleting order: {}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM pedidos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete order {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Order ID {} deleted with its lines", id);
        Ok(())
    }
}
