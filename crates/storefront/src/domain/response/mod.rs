mod category;
mod order;
mod order_line;
mod product;

pub use self::category::CategoryResponse;
pub use self::order::OrderResponse;
pub use self::order_line::OrderLineResponse;
pub use self::product::ProductResponse;
