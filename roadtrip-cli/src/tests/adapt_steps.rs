//! Behaviour-driven step definitions driving the adapt CLI scenarios.

use super::helpers::Workspace;
use super::*;
use crate::adapt::run_adapt_with;
use roadtrip_core::Trip;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct AdaptWorld {
    workspace: Workspace,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl AdaptWorld {
    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> AdaptWorld {
    AdaptWorld {
        workspace: Workspace::new(),
        stdout: RefCell::new(Vec::new()),
        result: RefCell::new(None),
    }
}

#[given("the French catalog on disk")]
fn french_catalog(#[from(world)] world: &AdaptWorld) {
    assert!(world.workspace.catalog.is_file());
}

#[when("I adapt trip {id} to {days} days")]
fn adapt_trip(#[from(world)] world: &AdaptWorld, id: String, days: u32) {
    let invocation = [
        "roadtrip".to_owned(),
        "adapt".to_owned(),
        format!("--{ARG_CATALOG}"),
        world.workspace.catalog.as_str().to_owned(),
        format!("--{ARG_TRIP}"),
        id,
        format!("--{ARG_DAYS}"),
        days.to_string(),
    ];
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Adapt(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_adapt_with(args, &mut *buffer)
        }
        Command::Recommend(_) => panic!("expected adapt command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the printed trip has stages {layout}")]
fn printed_stages(#[from(world)] world: &AdaptWorld, layout: String) {
    let trip: Trip = serde_json::from_slice(&world.stdout.borrow()).expect("output should be a trip");
    let actual: Vec<String> = trip
        .stages
        .iter()
        .map(|stage| format!("{}:{}", stage.id, stage.days))
        .collect();
    let expected: Vec<&str> = layout.split(',').map(str::trim).collect();
    assert_eq!(actual, expected);
}

#[then("the command fails because the trip is unknown")]
fn fails_unknown_trip(#[from(world)] world: &AdaptWorld) {
    match &*world.error() {
        CliError::UnknownTrip { id, .. } => assert_eq!(id, "atlantis"),
        other => panic!("expected UnknownTrip, found {other:?}"),
    }
}

#[then("the command fails because the day count is zero")]
fn fails_zero_days(#[from(world)] world: &AdaptWorld) {
    match &*world.error() {
        CliError::ZeroDays { field } => assert_eq!(*field, ARG_DAYS),
        other => panic!("expected ZeroDays, found {other:?}"),
    }
}

macro_rules! register_adapt_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/adapt_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: AdaptWorld) {
            let _ = world;
        }
    };
}

register_adapt_scenario!(adapt_shortens_trip, "shortening a catalog trip");
register_adapt_scenario!(adapt_unknown_trip, "rejecting a trip that is not in the catalog");
register_adapt_scenario!(adapt_zero_days, "rejecting a zero-day request");
