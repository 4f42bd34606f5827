//! End-to-end runs of the drills binary

use crate::support::harness::BinaryHarness;

#[test]
fn test_temperature_command_from_stdin() {
    let harness = BinaryHarness::new();
    let output = harness.run(&["temperature"], "50\n200\nabc\nq\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter a temperature ('q' to quit): "));
    assert!(stdout.contains("Total temperatures entered: 1"));
    assert!(stdout.contains("Average temperature: 50.00"));
}

#[test]
fn test_temperature_command_end_of_input_exits_cleanly() {
    let harness = BinaryHarness::new();
    let output = harness.run(&["temperature"], "");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Average temperature: NaN"));
}

#[test]
fn test_temperature_command_with_overrides_and_input_file() {
    let harness = BinaryHarness::new();
    let input = harness.write_file("readings.txt", "-5\n5\n15\n");
    let input = input.to_string_lossy().into_owned();

    let output = harness.run(
        &[
            "temperature",
            "--min",
            "0",
            "--max",
            "10",
            "--unit",
            "Celsius",
            "--input",
            &input,
        ],
        "",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Temperature must be between 0 and 10 Celsius."));
    assert!(stdout.contains("Total temperatures entered: 1"));
    assert!(stdout.contains("Average temperature: 5.00"));
}

#[test]
fn test_temperature_command_rejects_inverted_bounds() {
    let harness = BinaryHarness::new();
    let output = harness.run(&["temperature", "--min", "50", "--max", "10"], "q\n");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("must not exceed"));
}

#[test]
fn test_table_command_default_flow() {
    let harness = BinaryHarness::new();
    let output = harness.run(&["table", "--seed", "4"], "n\nn\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" 10|  10  20  30  40  50  60  70  80  90 100"));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn test_config_command_reads_config_file() {
    let harness = BinaryHarness::new();
    let config = harness.write_file("drills.yaml", "table:\n  default_size: 12\n");
    let config = config.to_string_lossy().into_owned();

    let output = harness.run(&["--config", &config, "config"], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("default_size: 12"));
    assert!(stdout.contains("unit: Fahrenheit"));
}

#[test]
fn test_config_command_missing_file_fails() {
    let harness = BinaryHarness::new();
    let output = harness.run(&["--config", "nope.yaml", "config"], "");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.yaml"));
}

#[test]
fn test_completion_command() {
    let harness = BinaryHarness::new();
    let output = harness.run(&["completion", "bash"], "");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("drills"));
}
