/// Use cases module containing application business logic orchestration
mod resolve_load_order;

pub use resolve_load_order::ResolveLoadOrderUseCase;
