mod graph_builder;
mod load_order_resolver;

pub use graph_builder::GraphBuilder;
pub use load_order_resolver::LoadOrderResolver;
