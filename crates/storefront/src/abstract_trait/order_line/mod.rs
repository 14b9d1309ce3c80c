mod repository;
mod service;

pub use self::repository::{
    DynOrderLineCommandRepository, DynOrderLineQueryRepository, OrderLineCommandRepositoryTrait,
    OrderLineQueryRepositoryTrait,
};
pub use self::service::{
    DynOrderLineCommandService, DynOrderLineQueryService, OrderLineCommandServiceTrait,
    OrderLineQueryServiceTrait,
};
