pub mod request;
pub mod response;

pub use request::{BodyValue, RequestOptions};
pub use response::{Blob, ResponseView};
