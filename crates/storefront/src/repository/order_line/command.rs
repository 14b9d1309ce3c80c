use crate::{
    abstract_trait::order_line::OrderLineCommandRepositoryTrait,
    domain::requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
    model::OrderLine as OrderLineModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderLineCommandRepository {
    db: ConnectionPool,
}

impl OrderLineCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderLineCommandRepositoryTrait for OrderLineCommandRepository {
    async fn create_order_line(
        &self,
        req: &CreateOrderLineRequest,
    ) -> Result<OrderLineModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderLineModel>(
            r#"
            INSERT INTO detalles_pedido (pedido_id, producto_id, cantidad)
            VALUES ($1, $2, $3)
            RETURNING id, pedido_id, producto_id, cantidad
            "#,
        )
        .bind(req.pedido)
        .bind(req.producto)
        .bind(req.cantidad)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to add product {} to order {}: {:?}",
                req.producto, req.pedido, err
            );
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order line ID {} (order {}, product {} x{})",
            result.id, result.pedido_id, result.producto_id, result.cantidad
        );
        Ok(result)
    }

    async fn update_order_line(
        &self,
        req: &UpdateOrderLineRequest,
    ) -> Result<OrderLineModel, RepositoryError> {
        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("order line update without id".into()))?;

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderLineModel>(
            r#"
            UPDATE detalles_pedido
            SET pedido_id = COALESCE($2, pedido_id),
                producto_id = COALESCE($3, producto_id),
                cantidad = COALESCE($4, cantidad)
            WHERE id = $1
            RETURNING id, pedido_id, producto_id, cantidad
            "#,
        )
        .bind(id)
        .bind(req.pedido)
        .bind(req.producto)
        .bind(req.cantidad)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order line ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🔄 Updated order line ID {}", result.id);
        Ok(result)
    }

    async fn delete_order_line(&self, id: i32) -> Result<(), RepositoryError> {
        info!("❌ Deleting order line: {}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM detalles_pedido
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete order line {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Order line ID {} deleted", id);
        Ok(())
    }
}
