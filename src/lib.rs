//! Outfitter - guided provisioning for SaaS template infrastructure.
//!
//! Outfitter is an interactive CLI wizard that walks an operator through
//! provisioning the services behind a SaaS template (GitHub fork, Vercel
//! project, Neon database, Polar billing, Clerk authentication) and then
//! emits the `.env` / `.env.prod` files the downstream application loads.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`envfile`] - Assembly of the env documents from accumulated state
//! - [`error`] - Error types and result aliases
//! - [`state`] - Wizard state and durable progress persistence
//! - [`ui`] - Interactive prompts and terminal output
//! - [`validate`] - Format checks for user-entered strings
//! - [`wizard`] - The resumable step sequencer and its steps
//!
//! # Example
//!
//! ```
//! use outfitter::validate::normalize_project_name;
//!
//! let name = normalize_project_name("My Cool App!!").unwrap();
//! assert_eq!(name, "my-cool-app");
//! ```

pub mod cli;
pub mod envfile;
pub mod error;
pub mod state;
pub mod ui;
pub mod validate;
pub mod wizard;

pub use error::{OutfitterError, Result};
