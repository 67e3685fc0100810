pub mod config;
pub mod error;
pub mod navigation;
pub mod result;
pub mod traits;

pub use config::ClientConfig;
pub use error::TaskboardError;
pub use navigation::Location;
pub use result::TaskboardResult;
pub use traits::{Editable, PageHost};
