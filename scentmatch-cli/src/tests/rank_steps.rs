//! Behaviour-driven step definitions driving the rank CLI scenarios.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::rank::run_rank_with;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use std::cell::RefCell;

#[derive(Debug)]
struct RankWorld {
    workspace: Workspace,
    include_catalogue: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RankWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_catalogue: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["scentmatch".to_owned(), "rank".to_owned()];
        if *self.include_catalogue.borrow() {
            argv.extend([
                format!("--{ARG_CATALOGUE}"),
                self.workspace.catalogue.as_str().to_owned(),
            ]);
        }
        argv.extend([
            format!("--{ARG_ANSWERS}"),
            self.workspace.answers.as_str().to_owned(),
        ]);
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn printed(&self) -> Vec<Value> {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON array")
    }

    fn with_error<R>(&self, check: impl FnOnce(&CliError) -> R) -> R {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error)
    }
}

#[fixture]
fn world() -> RankWorld {
    RankWorld::new()
}

fn printed_id(item: &Value) -> u64 {
    item.get("id")
        .and_then(Value::as_u64)
        .expect("printed perfume should carry an id")
}

#[given("the sample catalogue exists on disk")]
fn sample_catalogue_exists(#[from(world)] world: &RankWorld) {
    world.workspace.write_sample_catalogue();
}

#[given("answers asking for a warm evening exist on disk")]
fn warm_evening_answers_exist(#[from(world)] world: &RankWorld) {
    world.workspace.write_answers(&json!({
        "moods": ["warm"],
        "moments": ["evening"],
        "times": ["night"],
    }));
}

#[given("answers disliking woody notes exist on disk")]
fn woody_dislike_answers_exist(#[from(world)] world: &RankWorld) {
    world.workspace.write_answers(&json!({
        "moods": ["fresh"],
        "noteDislikes": ["woody"],
    }));
}

#[given("the answers file contains invalid JSON")]
fn answers_contain_invalid_json(#[from(world)] world: &RankWorld) {
    write_utf8(&world.workspace.answers, b"{ not valid json");
}

#[given("I pass a limit of two")]
fn pass_limit_of_two(#[from(world)] world: &RankWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_LIMIT}"), "2".to_owned()]);
}

#[given("I request the exclude dislike policy")]
fn request_exclude_policy(#[from(world)] world: &RankWorld) {
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_DISLIKE_POLICY}"),
        "exclude".to_owned(),
        format!("--{ARG_LIMIT}"),
        "10".to_owned(),
    ]);
}

#[given("I omit the catalogue path")]
fn omit_catalogue_path(#[from(world)] world: &RankWorld) {
    *world.include_catalogue.borrow_mut() = false;
}

#[when("I run the rank command")]
fn run_rank_command(#[from(world)] world: &RankWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Rank(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_rank_with(args, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints six ranked perfumes")]
fn prints_six(#[from(world)] world: &RankWorld) {
    let printed = world.printed();
    assert_eq!(printed.len(), 6);
    let percentages: Vec<u64> = printed
        .iter()
        .map(|item| {
            assert!(item.get("quality").is_some_and(Value::is_string));
            assert!(item.get("qualityLabel").is_some_and(Value::is_string));
            assert!(item.get("reasons").is_some_and(Value::is_array));
            item.get("matchPercentage")
                .and_then(Value::as_u64)
                .expect("match percentage")
        })
        .collect();
    assert!(percentages.windows(2).all(|pair| match pair {
        [first, second] => first >= second,
        _ => true,
    }));
}

#[then("the command prints two ranked perfumes")]
fn prints_two(#[from(world)] world: &RankWorld) {
    assert_eq!(world.printed().len(), 2);
}

#[then("only perfumes without woody notes are printed")]
fn prints_only_non_woody(#[from(world)] world: &RankWorld) {
    let mut ids: Vec<u64> = world.printed().iter().map(printed_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 3, 7, 8]);
}

#[then("the command fails because the answers JSON is invalid")]
fn fails_invalid_answers(#[from(world)] world: &RankWorld) {
    world.with_error(|error| match error {
        CliError::ParseInput { field, .. } => assert_eq!(*field, ARG_ANSWERS),
        other => panic!("expected ParseInput, found {other:?}"),
    });
}

#[then("the command fails because the catalogue path is missing")]
fn fails_missing_catalogue(#[from(world)] world: &RankWorld) {
    world.with_error(|error| match error {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_CATALOGUE);
            assert_eq!(*env, ENV_CATALOGUE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

macro_rules! register_rank_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/rank_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RankWorld) {
            let _ = world;
        }
    };
}

register_rank_scenario!(rank_happy_path, "ranking a catalogue from JSON");
register_rank_scenario!(rank_with_limit, "limiting the printed perfumes");
register_rank_scenario!(rank_exclusion, "excluding perfumes with disliked notes");
register_rank_scenario!(rank_invalid_answers, "rejecting invalid answers JSON");
register_rank_scenario!(rank_missing_catalogue, "rejecting a missing catalogue path");
