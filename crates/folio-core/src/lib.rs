pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod scheduler;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use content::Portfolio;
pub use error::{Error, Result};
