pub mod adapter;
pub mod errors;
pub mod net;
pub mod transport;

pub use adapter::*;
pub use errors::FetchError;
