pub mod case;
pub mod common;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod permission;
pub mod requests;

pub use case::*;
pub use config::*;
pub use document::*;
pub use error::*;
pub use models::*;
pub use permission::*;
pub use requests::*;
