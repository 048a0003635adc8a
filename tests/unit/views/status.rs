use super::*;
use crate::kernel::{CursorPosition, Problem, WorkbenchPhase};

#[test]
fn test_status_without_cursor_shows_line_count() {
    let state = AppState::default();
    let model = status_bar(&state);

    assert_eq!(model.phase, "Loading");
    assert_eq!(model.file, "app.tsx");
    assert_eq!(model.language, "TypeScript");
    assert_eq!(model.theme, "GitHub Dark");
    assert_eq!(
        model.right_text(),
        format!("{} lines  TypeScript  GitHub Dark ", model.line_count)
    );
}

#[test]
fn test_status_with_cursor() {
    let mut state = AppState::default();
    state.phase = WorkbenchPhase::Ready;
    state.cursor = Some(CursorPosition { line: 4, column: 9 });

    let model = status_bar(&state);
    assert_eq!(model.cursor, Some((4, 9)));
    assert!(model.right_text().starts_with("Ln 4, Col 9"));
    assert_eq!(model.left_text(), " Ready  app.tsx  ✕ 0 ⚠ 0");
}

#[test]
fn test_status_counts_problems() {
    let mut state = AppState::default();
    state.problems.replace(vec![
        Problem {
            message: "unused".to_string(),
            severity: ProblemSeverity::Warning,
        },
        Problem {
            message: "missing ;".to_string(),
            severity: ProblemSeverity::Error,
        },
        Problem {
            message: "hint".to_string(),
            severity: ProblemSeverity::Info,
        },
    ]);

    let model = status_bar(&state);
    assert_eq!((model.errors, model.warnings), (1, 1));
}
