use crate::{domain::response::ProductResponse, model::OrderLineWithProduct};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderLineResponse {
    pub id: i32,
    /// Id of the owning order.
    pub pedido: i32,
    pub producto: ProductResponse,
    pub cantidad: i32,
}

impl From<OrderLineWithProduct> for OrderLineResponse {
    fn from(value: OrderLineWithProduct) -> Self {
        OrderLineResponse {
            id: value.id,
            pedido: value.pedido_id,
            producto: ProductResponse::from(value.producto),
            cantidad: value.cantidad,
        }
    }
}
