//! Adapters implementing application ports

mod ors_adapter;
mod route_api_adapter;

pub use ors_adapter::OrsAdapter;
pub use route_api_adapter::RouteApiAdapter;
