use super::*;

fn problem(message: &str, severity: ProblemSeverity) -> Problem {
    Problem {
        message: message.to_string(),
        severity,
    }
}

#[test]
fn test_starts_empty() {
    let problems = ProblemsState::default();
    assert!(problems.is_empty());
    assert_eq!(problems.count(ProblemSeverity::Error), 0);
}

#[test]
fn test_replace_reports_change() {
    let mut problems = ProblemsState::default();
    let items = vec![
        problem("unused import", ProblemSeverity::Warning),
        problem("missing semicolon", ProblemSeverity::Error),
        problem("another warning", ProblemSeverity::Warning),
    ];

    assert!(problems.replace(items.clone()));
    assert!(!problems.replace(items));
    assert_eq!(problems.count(ProblemSeverity::Warning), 2);
    assert_eq!(problems.count(ProblemSeverity::Error), 1);
    assert_eq!(problems.items()[1].severity.label(), "error");

    assert!(problems.replace(Vec::new()));
    assert!(problems.is_empty());
}
