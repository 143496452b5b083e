//! BACAI gateway library.
//!
//! The gateway fronts an external model service for the BACAI tutoring
//! system. It owns:
//! - Configuration loading from `bacai.json` and the environment
//! - The model service client and its failure classification
//! - Automatic language and subject routing of incoming requests
//! - The HTTP API (solve, explain, converse, reference data, health)

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

pub use api::{create_router, origin_matches, AppState, ErrorResponse};
pub use config::Config;
pub use error::{GatewayError, ModelErrorKind, Result};
pub use model::{DependencyStatus, ModelClient, ModelRequest, ModelResponse, RequestType};
