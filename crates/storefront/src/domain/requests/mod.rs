mod category;
mod money;
mod order;
mod order_line;
mod product;
mod text;

pub use self::category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use self::money::{
    deserialize_money, deserialize_optional_money, to_money, validate_money, validate_price,
};
pub use self::order::{CreateOrderRequest, UpdateOrderRequest};
pub use self::order_line::{CreateOrderLineRequest, UpdateOrderLineRequest};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
pub use self::text::{deserialize_optional_trimmed, deserialize_trimmed};
