use crate::{
    domain::response::OrderLineResponse,
    model::{Order as OrderModel, OrderStatus},
};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::errors::ServiceError;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub nombre_cliente: String,
    pub telefono: String,
    #[schema(value_type = String, example = "120.00")]
    pub total: BigDecimal,
    pub estado: OrderStatus,
    pub fecha_creacion: DateTime<Utc>,
    pub detalles: Vec<OrderLineResponse>,
}

impl OrderResponse {
    /// Fails when the stored `estado` is not one of the known statuses.
    pub fn from_parts(
        order: OrderModel,
        detalles: Vec<OrderLineResponse>,
    ) -> Result<Self, ServiceError> {
        let estado: OrderStatus = order.estado.parse().map_err(|err| {
            ServiceError::Internal(format!("Order {} has a corrupt status: {err}", order.id))
        })?;

        Ok(OrderResponse {
            id: order.id,
            nombre_cliente: order.nombre_cliente,
            telefono: order.telefono,
            total: order.total,
            estado,
            fecha_creacion: order.fecha_creacion,
            detalles,
        })
    }
}
