//! Binary tests driving the prompt through stdin.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn resistor_pair() -> Command {
    cargo_bin_cmd!("resistor-pair")
}

#[test]
fn test_cli_help() {
    resistor_pair()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("within 2%"));
}

#[test]
fn test_cli_prompted_value() {
    resistor_pair()
        .write_stdin("100\n\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "*** Calculator for 2 resistor pair ***\n\nEnter desired value: \n\nResults within 2% of value...\n",
        ))
        .stdout(predicate::str::contains("Single:\t100R\t\t\t\t0.0%\n"))
        .stdout(predicate::str::contains("Series:\t\t18R\t82R\t100R\t0.0%\n"))
        .stdout(predicate::str::ends_with("\nPress enter to continue...\n"));
}

#[test]
fn test_cli_reprompts_on_bad_input() {
    resistor_pair()
        .write_stdin("abc\n-5\nk47\n4700\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Error: please enter a valid number**").count(2))
        .stdout(predicate::str::contains("**Error: please enter a value greater than zero**").count(1))
        .stdout(predicate::str::contains("Single:\t4k7\t\t\t\t0.0%"));
}

#[test]
fn test_cli_reads_number_before_trailing_text() {
    resistor_pair()
        .write_stdin("12ohms and more\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Error").not())
        .stdout(predicate::str::contains("Single:\t12R\t\t\t\t0.0%"));
}

#[test]
fn test_cli_blank_lines_do_not_prompt_again() {
    resistor_pair()
        .write_stdin("\n\n100\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter desired value").count(1));
}

#[test]
fn test_cli_value_argument_skips_prompt() {
    resistor_pair()
        .args(["2350", "--no-pause"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter desired value").not())
        .stdout(predicate::str::contains("Parallel:\t4k7\t4k7\t2k4\t0.0%"));
}

#[test]
fn test_cli_rejects_negative_argument() {
    resistor_pair()
        .args(["-100", "--no-pause"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn test_cli_end_of_input() {
    resistor_pair()
        .write_stdin("nothing useful\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended"));
}

#[test]
fn test_cli_output_is_repeatable() {
    let first = resistor_pair().args(["330", "--no-pause"]).output().unwrap();
    let second = resistor_pair().args(["330", "--no-pause"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}
