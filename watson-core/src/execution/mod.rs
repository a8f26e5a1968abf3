//! Request execution: building, sending and decoding service calls.

pub mod http;
pub mod multipart;
pub mod request;
pub mod response;

pub use multipart::MultipartFormData;
pub use request::{RestRequest, expand_path};
pub use response::{RawResponse, decode_error, decode_json, error_message};
