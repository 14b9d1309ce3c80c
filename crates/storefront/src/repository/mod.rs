mod category;
mod order;
mod order_line;
mod product;

pub use self::category::CategoryRepository;
pub use self::order::OrderRepository;
pub use self::order_line::OrderLineRepository;
pub use self::product::ProductRepository;
