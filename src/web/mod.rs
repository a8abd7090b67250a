mod error;
pub mod function;
mod log;
pub mod midware;
pub mod routes;
mod serve;
pub mod types;

pub use error::{ClientError, Error, WebResult};
pub use serve::{build_router, serve};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
