//! # Rainbow
//!
//! A terminal console that lists the instances and clusters of a tenant by
//! querying the Sparkle REST API and rendering the results through
//! route-bound templates.
//!
//! ## Features
//!
//! - **Routing**: `/:tenantId/instance` and `/:tenantId/cluster` map to a template and a controller
//! - **Resource Client**: one GET per view against `/tenant/:tenantId/{instance,cluster}/`
//! - **Controllers**: each activation is its own task; navigating away cancels it
//! - **Templates**: embedded tera templates with an `active` section helper
//!
//! ## Example
//!
//! ```rust,no_run
//! use rainbow::{config::types::Config, Navigator, Renderer};
//!
//! # async fn example() -> rainbow::Result<()> {
//! let mut navigator = Navigator::from_config(&Config::default())?;
//! let mut view = navigator.navigate("/acme/instance")?;
//! let state = view.settle().await?;
//! println!("{}", Renderer::new()?.render(&view, &state)?);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod controllers;
pub mod error;
pub mod handlers;
pub mod navigator;
pub mod routing;
pub mod views;

// Re-export commonly used types and functions
pub use api::{ResourceClient, ResourceKind};
pub use controllers::{Activation, Controller, ViewState};
pub use error::{RainbowError, Result};
pub use navigator::{Navigator, View};
pub use routing::{default_router, Resolution, RouteContext, Router};
pub use views::Renderer;

use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn run_command(command: Commands, config: &Config, json: bool) -> Result<()> {
    let navigator = Navigator::from_config(config)?;
    match command {
        Commands::Open { paths } => handlers::handle_open(navigator, paths, json).await,
        Commands::Browse => handlers::handle_browse(navigator, json).await,
        Commands::Routes => handlers::handle_routes(navigator.router(), json),
    }
}
