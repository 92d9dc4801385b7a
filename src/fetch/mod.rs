use crate::error::Result;

pub mod request;
pub mod transport;

pub use request::{build_headers, RequestDescriptor};
pub use transport::{HttpTransport, Transport};

pub type FetchResult<T> = Result<T>;
