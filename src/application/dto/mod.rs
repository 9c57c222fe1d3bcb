/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use case and results out to the adapters,
/// keeping the resolution core free of presentation concerns.
mod output_format;
mod resolve_request;
mod resolve_response;

pub use output_format::OutputFormat;
pub use resolve_request::{ResolveRequest, ResolveRequestBuilder, DEFAULT_MAX_DEPTH};
pub use resolve_response::ResolveResponse;
