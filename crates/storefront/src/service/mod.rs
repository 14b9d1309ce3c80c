mod category;
mod order;
mod order_line;
mod product;

pub use self::category::CategoryService;
pub use self::order::OrderService;
pub use self::order_line::OrderLineService;
pub use self::product::ProductService;

use shared::errors::{RepositoryError, ServiceError};

/// Names the missing row when a write touched nothing.
fn map_repo_error(err: RepositoryError, entity: &str, id: i32) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound(format!("{entity} {id}")),
        other => ServiceError::Repo(other),
    }
}
