//! Behavioural coverage for preference scoring.

use std::cell::{Cell, RefCell};

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use roadtrip_core::{Answers, Scorer, TagCategory, TagSet, Trip, TripDuration};
use roadtrip_scorer::PreferenceScorer;

#[fixture]
fn scorer() -> PreferenceScorer {
    PreferenceScorer::default()
}

#[fixture]
fn trip() -> RefCell<Trip> {
    RefCell::new(Trip::new("scenario"))
}

#[fixture]
fn answers() -> RefCell<Answers> {
    RefCell::new(Answers::new())
}

#[fixture]
fn result() -> Cell<i32> {
    Cell::new(i32::MIN)
}

#[given("a trip tagged relaxed and culture")]
fn given_tagged_trip(#[from(trip)] trip: &RefCell<Trip>) {
    trip.borrow_mut().tags = TagSet::new()
        .with_tag(TagCategory::Pace, "relaxed")
        .with_tag(TagCategory::Style, "culture");
}

#[given("the trip lasts between {min} and {max} days")]
fn given_window(#[from(trip)] trip: &RefCell<Trip>, min: u32, max: u32) {
    trip.borrow_mut().duration = Some(TripDuration::new(Some(min), None, Some(max)));
}

#[given("answers wanting relaxed with culture and foodie")]
fn given_answers(#[from(answers)] answers: &RefCell<Answers>) {
    answers.replace(
        Answers::new()
            .with_tag(TagCategory::Pace, "relaxed")
            .with_tag(TagCategory::Style, "culture")
            .with_tag(TagCategory::Style, "foodie")
            .with_days(0),
    );
}

#[given("answers with no preferences")]
fn given_empty_answers(#[from(answers)] answers: &RefCell<Answers>) {
    answers.replace(Answers::new());
}

#[given("the traveller wants {days} days")]
fn given_days(#[from(answers)] answers: &RefCell<Answers>, days: u32) {
    answers.borrow_mut().days = Some(days);
}

#[when("I score the trip")]
fn when_score(
    #[from(scorer)] scorer: &PreferenceScorer,
    #[from(trip)] trip: &RefCell<Trip>,
    #[from(answers)] answers: &RefCell<Answers>,
    #[from(result)] result: &Cell<i32>,
) {
    result.set(scorer.score(&trip.borrow(), &answers.borrow()));
}

#[then("the score is {expected}")]
fn then_score(expected: i32, #[from(result)] result: &Cell<i32>) {
    assert_eq!(result.get(), expected);
}

#[scenario(path = "tests/features/preference.feature", index = 0)]
fn shared_tags_without_days(
    scorer: PreferenceScorer,
    trip: RefCell<Trip>,
    answers: RefCell<Answers>,
    result: Cell<i32>,
) {
    let _ = (scorer, trip, answers, result);
}

#[scenario(path = "tests/features/preference.feature", index = 1)]
fn length_inside_window(
    scorer: PreferenceScorer,
    trip: RefCell<Trip>,
    answers: RefCell<Answers>,
    result: Cell<i32>,
) {
    let _ = (scorer, trip, answers, result);
}

#[scenario(path = "tests/features/preference.feature", index = 2)]
fn length_below_window(
    scorer: PreferenceScorer,
    trip: RefCell<Trip>,
    answers: RefCell<Answers>,
    result: Cell<i32>,
) {
    let _ = (scorer, trip, answers, result);
}

#[scenario(path = "tests/features/preference.feature", index = 3)]
fn nothing_in_common(
    scorer: PreferenceScorer,
    trip: RefCell<Trip>,
    answers: RefCell<Answers>,
    result: Cell<i32>,
) {
    let _ = (scorer, trip, answers, result);
}
