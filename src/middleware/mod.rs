pub mod cors;
pub mod error_handler;
pub mod rate_limit;
pub mod request_id;

pub use cors::api_cors;
pub use error_handler::{form_error_handler, json_error_handler, path_error_handler, ErrorLogger};
pub use rate_limit::RateLimiter;
pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
