use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderLineRequest {
    /// Id of the owning order.
    #[schema(example = 1)]
    pub pedido: i32,

    /// Id of the ordered product.
    #[schema(example = 3)]
    pub producto: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub cantidad: i32,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderLineRequest {
    #[serde(skip_deserializing)]
    pub id: Option<i32>,

    pub pedido: Option<i32>,

    pub producto: Option<i32>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub cantidad: Option<i32>,
}

impl UpdateOrderLineRequest {
    pub fn replace(id: i32, body: CreateOrderLineRequest) -> Self {
        Self {
            id: Some(id),
            pedido: Some(body.pedido),
            producto: Some(body.producto),
            cantidad: Some(body.cantidad),
        }
    }
}
