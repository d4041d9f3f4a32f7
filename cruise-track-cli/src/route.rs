//! Route command implementation for the cruise-track CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use cruise_track_core::{AntimeridianSplitter, CruiseRoute, Leg, Position};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_ROUTE_LEGS, ARG_ROUTE_POSITIONS, ARG_ROUTE_TOLERANCE, CliError, ENV_ROUTE_POSITIONS,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Reconstruct a cruise route from a JSON array of position \
                 fixes. Fixes are ordered by date and time, split wherever \
                 the track crosses the antimeridian and written to stdout as \
                 a GeoJSON FeatureCollection holding the route and one \
                 feature per hop.",
    about = "Reconstruct a cruise route as GeoJSON"
)]
#[ortho_config(prefix = "CRUISE_TRACK")]
pub(crate) struct RouteArgs {
    /// Path to a JSON file containing the cruise's positions.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) positions: Option<Utf8PathBuf>,
    /// Path to a JSON file containing the cruise's legs.
    #[arg(long = ARG_ROUTE_LEGS, value_name = "path")]
    #[serde(default)]
    pub(crate) legs: Option<Utf8PathBuf>,
    /// Slack in degrees subtracted from 180 when detecting crossings.
    #[arg(long = ARG_ROUTE_TOLERANCE, value_name = "degrees")]
    #[serde(default)]
    pub(crate) tolerance: Option<f64>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Path to the positions JSON file.
    pub(crate) positions: Utf8PathBuf,
    /// Optional path to the legs JSON file.
    pub(crate) legs: Option<Utf8PathBuf>,
    /// Splitter configured with the requested tolerance.
    pub(crate) splitter: AntimeridianSplitter,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.positions, ARG_ROUTE_POSITIONS)?;
        if let Some(legs) = &self.legs {
            Self::require_existing(legs, ARG_ROUTE_LEGS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let positions = args.positions.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE_POSITIONS,
            env: ENV_ROUTE_POSITIONS,
        })?;
        let splitter = match args.tolerance {
            Some(tolerance) => AntimeridianSplitter::new(tolerance)?,
            None => AntimeridianSplitter::default(),
        };
        Ok(Self {
            positions,
            legs: args.legs,
            splitter,
        })
    }
}

pub(crate) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let config = resolve_route_config(args)?;
    let mut stdout = std::io::stdout().lock();
    run_route_with(&config, &mut stdout)
}

pub(crate) fn run_route_with(config: &RouteConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let route = execute_route(config)?;
    write_route(writer, &route)
}

fn resolve_route_config(args: RouteArgs) -> Result<RouteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_route(config: &RouteConfig) -> Result<CruiseRoute, CliError> {
    let positions: Vec<Position> = load_json(&config.positions, ARG_ROUTE_POSITIONS)?;
    let legs: Vec<Leg> = match &config.legs {
        Some(path) => load_json(path, ARG_ROUTE_LEGS)?,
        None => Vec::new(),
    };
    log::debug!(
        "loaded {} positions and {} legs from {}",
        positions.len(),
        legs.len(),
        config.positions
    );
    CruiseRoute::rebuild(&positions, &legs, &config.splitter).map_err(CliError::BuildRoute)
}

/// Loads a JSON document from disk.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_route(writer: &mut dyn Write, route: &CruiseRoute) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(&route.to_feature_collection())
        .map_err(CliError::SerialiseRoute)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRouteOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRouteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}
