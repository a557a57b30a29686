pub mod constants;
pub mod drive;
pub mod error;
pub mod geometry;
pub mod io;
pub mod policy;
pub mod record;
pub mod request;
pub mod stats;
pub mod timing;

// Re-export commonly used items for convenience
pub use error::{Result, SimError};
pub use policy::Policy;
pub use record::{RecordSink, ServiceRecord};
pub use request::Request;
