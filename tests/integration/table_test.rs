//! Multiplication table sessions driven through scripted input

use crate::support::harness::ScriptedConsole;

use drills::table::{self, render_table, QuizOutcome, QuizQuestion};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_default_table_without_practice() {
    let mut console = ScriptedConsole::new(&["n", "n"]);
    let mut rng = StdRng::seed_from_u64(0);
    let summary = table::run_session(&mut rng, 10, &mut console.source, &mut console.out).unwrap();

    let output = console.output();
    assert_eq!(summary.size, 10);
    assert_eq!(summary.quiz, None);
    assert!(!output.contains("Invalid input"));
    assert!(output.contains(&render_table(10)));
    assert!(output.contains(table::FAREWELL));
}

#[test]
fn test_invalid_custom_size_falls_back() {
    for bad in ["0", "abc", "-4"] {
        let mut console = ScriptedConsole::new(&["y", bad, "n"]);
        let mut rng = StdRng::seed_from_u64(0);
        let summary =
            table::run_session(&mut rng, 10, &mut console.source, &mut console.out).unwrap();

        assert_eq!(summary.size, 10);
        assert!(console
            .output()
            .contains("Invalid input. Using default size 10."));
    }
}

#[test]
fn test_oversized_custom_size_falls_back_without_rendering_it() {
    let mut console = ScriptedConsole::new(&["y", "18446744073709551615", "n"]);
    let mut rng = StdRng::seed_from_u64(0);
    let summary = table::run_session(&mut rng, 10, &mut console.source, &mut console.out).unwrap();

    let output = console.output();
    assert_eq!(summary.size, 10);
    assert!(output.contains("Invalid input. Using default size 10."));
    assert!(output.contains(&render_table(10)));
    assert!(output.contains(table::FAREWELL));
}

#[test]
fn test_size_three_grid_in_output() {
    let mut console = ScriptedConsole::new(&["y", "3", "n"]);
    let mut rng = StdRng::seed_from_u64(0);
    table::run_session(&mut rng, 10, &mut console.source, &mut console.out).unwrap();

    let output = console.output();
    assert!(output.contains("  x|   1   2   3\n----------------\n"));
    assert!(output.contains("  2|   2   4   6\n"));
    assert!(!output.contains("  4|"));
}

#[test]
fn test_seeded_practice_correct_answer() {
    let question = QuizQuestion::draw(&mut StdRng::seed_from_u64(99), 10);
    let answer = question.product().to_string();
    let mut console = ScriptedConsole::new(&["n", "y", answer.as_str()]);
    let mut rng = StdRng::seed_from_u64(99);
    let summary = table::run_session(&mut rng, 10, &mut console.source, &mut console.out).unwrap();

    assert_eq!(summary.quiz, Some(QuizOutcome::Correct));
    assert!(console.output().contains(&question.prompt()));
    assert!(console.output().contains("Correct!"));
}

#[test]
fn test_seeded_practice_wrong_answer_shows_product() {
    let question = QuizQuestion::draw(&mut StdRng::seed_from_u64(99), 10);
    let wrong = (question.product() + 3).to_string();
    let mut console = ScriptedConsole::new(&["n", "y", wrong.as_str()]);
    let mut rng = StdRng::seed_from_u64(99);
    let summary = table::run_session(&mut rng, 10, &mut console.source, &mut console.out).unwrap();

    assert_eq!(
        summary.quiz,
        Some(QuizOutcome::Incorrect {
            expected: question.product()
        })
    );
    assert!(console
        .output()
        .contains(&format!("The correct answer is {}.", question.product())));
}

#[test]
fn test_practice_with_non_numeric_answer() {
    let mut console = ScriptedConsole::new(&["n", "yes", "twelve"]);
    let mut rng = StdRng::seed_from_u64(1);
    let summary = table::run_session(&mut rng, 10, &mut console.source, &mut console.out).unwrap();

    assert_eq!(summary.quiz, Some(QuizOutcome::Invalid));
    assert!(console.output().contains(table::FAREWELL));
}
