mod category;
mod order;
mod order_line;
mod product;

pub use self::category::Category;
pub use self::order::{Order, OrderStatus};
pub use self::order_line::{OrderLine, OrderLineWithProduct};
pub use self::product::{Product, ProductWithCategory};
