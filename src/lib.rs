pub mod authors;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod forge;
pub mod report;
pub mod result;
pub mod retry;

pub use authors::{AuthorSet, unique};
pub use collector::{Collector, CollectorOptions};
pub use error::{ApiError, ApiResult};
pub use result::Result;
