//! Shared test harness modules for the cruise-track CLI.

use super::*;

mod helpers;
