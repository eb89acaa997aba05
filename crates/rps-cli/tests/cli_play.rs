//! Integration tests for the `rps` CLI.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn rps() -> Command {
    let mut cmd = Command::cargo_bin("rps").unwrap();
    cmd.args(["--fast", "--no-color", "--seed", "7"]);
    cmd
}

// ---------------------------------------------------------------------------
// startup
// ---------------------------------------------------------------------------

#[test]
fn help_lists_flags() {
    Command::cargo_bin("rps")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--seed")
                .and(predicate::str::contains("--fast"))
                .and(predicate::str::contains("--no-color")),
        );
}

#[test]
fn opening_shows_slogan() {
    rps()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Let's play ROCK, PAPER & SCISSORS !!!"));
}

#[test]
fn exit_at_name_plays_no_game() {
    rps()
        .write_stdin("0\ny\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Bye bye...")
                .and(predicate::str::contains("points a player needs").not()),
        );
}

#[test]
fn invalid_names_are_retried() {
    rps()
        .write_stdin("1\n\nPaul\n0\nY\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Let's try again...")
                .and(predicate::str::contains("points a player needs to win"))
                .and(predicate::str::contains("Bye bye...")),
        );
}

// ---------------------------------------------------------------------------
// playing
// ---------------------------------------------------------------------------

#[test]
fn exit_at_winning_score_prompt() {
    rps()
        .write_stdin("Ana\n0\nyes\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Are you sure you want to exit: Y/n?")
                .and(predicate::str::contains("plays").not()),
        );
}

#[test]
fn one_round_is_revealed() {
    rps()
        .write_stdin("Ana\n1\n2\n0\ny\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("winning score = 1")
                .and(predicate::str::contains("ANA plays Paper"))
                .and(predicate::str::contains("ROBOT plays"))
                .and(predicate::str::contains("Bye bye...")),
        );
}

#[test]
fn declined_exit_keeps_playing() {
    rps()
        .write_stdin("Ana\n0\nno\n1\n0\ny\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("winning score = 3")
                .and(predicate::str::contains("ANA plays Rock")),
        );
}

#[test]
fn invalid_move_is_retried() {
    rps()
        .write_stdin("Ana\n1\n9\n3\n0\ny\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Please enter 1, 2, or 3:")
                .and(predicate::str::contains("ANA plays Scissors")),
        );
}

#[test]
fn undecodable_move_is_retried() {
    rps()
        .write_stdin(b"Ana\n1\n\xff\xfe\n2\n0\ny\n".to_vec())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Please enter 1, 2, or 3:")
                .and(predicate::str::contains("ANA plays Paper"))
                .and(predicate::str::contains("Bye bye...")),
        );
}

#[test]
fn points_and_computer_name_flags() {
    rps()
        .args(["--points", "5", "--computer-name", "hal"])
        .write_stdin("Ana\n\n1\n0\ny\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(default: 5)")
                .and(predicate::str::contains("winning score = 5"))
                .and(predicate::str::contains("HAL plays")),
        );
}

#[test]
fn zero_points_is_rejected() {
    rps().args(["--points", "0"]).assert().failure();
}

#[test]
fn end_of_input_terminates() {
    rps()
        .write_stdin("Ana\n2\n")
        .assert()
        .success();
}

#[test]
fn same_seed_same_game() {
    let script = "Ana\n5\n1\n2\n3\n1\n2\n3\n";
    let first = rps().write_stdin(script).output().unwrap();
    let second = rps().write_stdin(script).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}
