//! Shared test harness modules for the roadtrip CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod adapt_steps;
mod helpers;
