use retrace_rs::retracer::invert;
use retrace_rs::session::{OutputFormat, Session, SessionConfig, SessionEnd, NO_ACTIONS};
use std::io::Cursor;
use test_env_log::test;

fn run_session(input: &str) -> (Session, SessionEnd, Vec<String>) {
    let mut session = Session::new(SessionConfig {
        banner: false,
        prompt: None,
        format: OutputFormat::Text,
    });
    let mut output = Vec::new();
    let end = session
        .run(Cursor::new(input.as_bytes()), &mut output)
        .unwrap();
    let lines = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect();
    (session, end, lines)
}

#[test]
fn test_calculate_return_walks_back() {
    let (_, end, lines) = run_session(
        "LOG FWD 10\nLOG LEFT\nLOG FWD 5\nLOG RIGHT\nCALCULATE_RETURN\nEXIT\n",
    );
    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(lines, vec!["1. LEFT", "2. FWD 5", "3. RIGHT", "4. FWD 10"]);
}

#[test]
fn test_calculate_return_with_nothing_logged() {
    let (_, _, lines) = run_session("CALCULATE_RETURN\nEXIT\n");
    assert_eq!(lines, vec![NO_ACTIONS]);
}

#[test]
fn test_log_without_action_changes_nothing() {
    let (session, _, lines) = run_session("LOG\n");
    assert_eq!(lines, vec!["Invalid LOG command"]);
    assert!(session.action_log().is_empty());

    let (_, _, lines) = run_session("LOG LEFT\nLOG   \nCALCULATE_RETURN\n");
    assert_eq!(lines, vec!["Invalid LOG command", "1. RIGHT"]);
}

#[test]
fn test_unknown_commands_are_reported() {
    let (session, end, lines) = run_session("JUMP\n\nLOGFWD 3\nEXIT\n");
    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(
        lines,
        vec!["Unknown command", "Unknown command", "Unknown command"]
    );
    assert!(session.action_log().is_empty());
}

#[test]
fn test_input_is_case_insensitive() {
    let (_, _, lines) = run_session("log fwd 3\n  Log left \ncalculate_return\nexit\n");
    assert_eq!(lines, vec!["1. RIGHT", "2. FWD 3"]);
}

#[test]
fn test_second_calculate_return_is_empty() {
    let (_, _, lines) = run_session("LOG LEFT\nCALCULATE_RETURN\nCALCULATE_RETURN\n");
    assert_eq!(lines, vec!["1. RIGHT", NO_ACTIONS]);
}

#[test]
fn test_logging_resumes_after_return() {
    let (_, _, lines) =
        run_session("LOG LEFT\nCALCULATE_RETURN\nLOG FWD 2\nLOG RIGHT\nCALCULATE_RETURN\n");
    assert_eq!(lines, vec!["1. RIGHT", "1. LEFT", "2. FWD 2"]);
}

#[test]
fn test_every_logged_action_comes_back_inverted() {
    let actions = ["FWD 1", "LEFT", "LEFT", "FWD 20", "RIGHT", "WAIT 3", "FWD 4"];
    let input: String = actions
        .iter()
        .map(|action| format!("LOG {}\n", action))
        .chain(std::iter::once("CALCULATE_RETURN\n".to_string()))
        .collect();
    let (_, _, lines) = run_session(&input);
    let expected: Vec<String> = actions
        .iter()
        .rev()
        .enumerate()
        .map(|(i, action)| format!("{}. {}", i + 1, invert(action)))
        .collect();
    assert_eq!(lines, expected);
}
