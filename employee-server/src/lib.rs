//! Employee Server - employee directory over a document store
//!
//! # Modules
//!
//! ```text
//! employee-server/src/
//! ├── core/       # configuration, state, HTTP server
//! ├── api/        # routes, handlers, middleware
//! ├── services/   # id allocation, create flow, joined listing
//! ├── db/         # documents, join row model, stores
//! └── utils/      # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use crate::db::repository::{EmployeeStore, MemoryStore, RepoError, SurrealStore};
pub use crate::utils::{AppError, AppResult};

pub use crate::utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> Config {
    // A missing .env file is normal outside development
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
