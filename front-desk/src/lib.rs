//! Front Desk - in-memory hotel reservation tracker
//!
//! # Overview
//!
//! - **Reservations** (`reservations`): fixed room inventory plus the active
//!   reservation list, with add / cancel / update / find / list operations
//! - **Console** (`console`): text menu that drives the manager
//! - **Core** (`core`): configuration from the environment
//! - **Utils** (`utils`): logging setup and error re-exports
//!
//! # Module layout
//!
//! ```text
//! front-desk/src/
//! ├── core/          # Config
//! ├── reservations/  # inventory, ReservationManager, ManagerError
//! ├── console/       # menu loop, prompts
//! └── utils/         # logger
//! ```

pub mod console;
pub mod core;
pub mod reservations;
pub mod utils;

// Re-export public types
pub use console::Console;
pub use crate::core::Config;
pub use reservations::{ManagerError, ManagerResult, ReservationManager};
pub use utils::{AppError, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    config
}
