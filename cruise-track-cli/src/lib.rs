//! Command-line interface for reconstructing cruise routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod route;

pub use error::CliError;

use route::RouteArgs;

pub(crate) const ARG_ROUTE_POSITIONS: &str = "positions";
pub(crate) const ARG_ROUTE_LEGS: &str = "legs";
pub(crate) const ARG_ROUTE_TOLERANCE: &str = "tolerance";
pub(crate) const ENV_ROUTE_POSITIONS: &str = "CRUISE_TRACK_CMDS_ROUTE_POSITIONS";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading, route reconstruction or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => route::run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cruise-track",
    about = "Reconstruct research-vessel cruise routes from recorded fixes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a cruise's fixes into an antimeridian-safe GeoJSON route.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
