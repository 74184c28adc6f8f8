//! Behaviour-driven step definitions driving the score CLI scenarios.

use super::helpers::{RequestDir, cafe_request_json, write_utf8};
use super::*;
use crate::score::ScoreResponse;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;
use suggest_scorer::ScoreError;

struct ScoreWorld {
    dir: RequestDir,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl ScoreWorld {
    fn new() -> Self {
        Self {
            dir: RequestDir::new(),
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["suggest".to_string(), "score".to_string()];
        if *self.include_request.borrow() {
            argv.push(self.dir.request_path.as_str().to_string());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn write_request(&self, request: &serde_json::Value) {
        let payload = serde_json::to_vec_pretty(request).expect("serialise request");
        write_utf8(&self.dir.request_path, &payload);
    }

    fn response(&self) -> ScoreResponse {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be JSON score response")
    }

    fn with_error(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> ScoreWorld {
    ScoreWorld::new()
}

#[given("a valid score request exists on disk")]
fn valid_score_request_exists(#[from(world)] world: &ScoreWorld) {
    world.write_request(&cafe_request_json());
}

#[given("a score request with an out-of-range candidate exists on disk")]
fn score_request_with_bad_candidate(#[from(world)] world: &ScoreWorld) {
    world.write_request(&json!({
        "query": { "q": "cafe", "latitude": 1.0, "longitude": 1.0 },
        "candidates": [
            { "name": "nowhere", "latitude": 200.0, "longitude": 0.0 },
            { "name": "cafe", "latitude": 1.0, "longitude": 1.0 }
        ]
    }));
}

#[given("the score request contains invalid JSON")]
fn score_request_contains_invalid_json(#[from(world)] world: &ScoreWorld) {
    write_utf8(&world.dir.request_path, b"{ not valid json");
}

#[given("I omit the score request path")]
fn omit_score_request_path(#[from(world)] world: &ScoreWorld) {
    *world.include_request.borrow_mut() = false;
}

#[given("I pass a negative matching weight")]
fn pass_negative_matching_weight(#[from(world)] world: &ScoreWorld) {
    world
        .cli_args
        .borrow_mut()
        .push(format!("--{ARG_MATCHING_WEIGHT}=-0.5"));
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &ScoreWorld) {
    let invocation = world.build_command_line();
    let outcome = {
        let mut buffer = world.stdout.borrow_mut();
        run_with(invocation, &mut *buffer)
    };
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and ranks the exact match first")]
fn command_ranks_exact_match_first(#[from(world)] world: &ScoreWorld) {
    let response = world.response();
    let scores: Vec<_> = response.results.iter().map(|r| r.score).collect();
    match scores.as_slice() {
        [Some(exact), Some(other)] => assert!(exact > other, "{exact} <= {other}"),
        other => panic!("expected two scores, found {other:?}"),
    }
}

#[then("the command succeeds and reports the candidate error")]
fn command_reports_candidate_error(#[from(world)] world: &ScoreWorld) {
    let response = world.response();
    let failed = response.results.first().expect("first result");
    assert_eq!(failed.name, "nowhere");
    assert!(failed.score.is_none());
    assert!(failed.error.as_deref().is_some_and(|e| e.contains("latitude 200")));
    assert_eq!(response.results.get(1).and_then(|r| r.score), Some(1.0));
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &ScoreWorld) {
    world.with_error(|error| match error {
        CliError::ParseScoreRequest { .. } => {}
        other => panic!("expected ParseScoreRequest, found {other:?}"),
    });
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &ScoreWorld) {
    world.with_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_SCORE_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because the weights are invalid")]
fn command_fails_invalid_weights(#[from(world)] world: &ScoreWorld) {
    world.with_error(|error| match error {
        CliError::BuildScorer(ScoreError::InvalidWeights) => {}
        other => panic!("expected BuildScorer, found {other:?}"),
    });
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: ScoreWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_happy_path, "scoring a request from JSON");
register_score_scenario!(score_candidate_error, "reporting candidates that cannot be scored");
register_score_scenario!(score_invalid_json, "rejecting invalid JSON input");
register_score_scenario!(score_missing_request, "rejecting missing request paths");
register_score_scenario!(score_negative_weight, "rejecting negative weights");
