use super::*;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn render(state: &AppState, snapshot: Option<&BufferSnapshot>) -> (Buffer, FrameLayout) {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut layout = FrameLayout::default();
    terminal
        .draw(|frame| layout = draw(frame, state, snapshot, &UiPalette::default()))
        .unwrap();
    (terminal.backend().buffer().clone(), layout)
}

fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn default_layout_has_explorer_and_bottom_panel() {
    let state = AppState::default();
    let layout = compute_layout(Rect::new(0, 0, 100, 30), &state);

    assert_eq!(layout.tabs, Rect::new(0, 1, 100, 1));
    assert_eq!(layout.explorer.map(|a| a.width), Some(EXPLORER_WIDTH));
    assert_eq!(layout.bottom.map(|a| a.height), Some(BOTTOM_PANEL_HEIGHT));
    assert!(layout.right.is_none());
    assert_eq!(layout.editor.height, 30 - 3 - BOTTOM_PANEL_HEIGHT);
    assert_eq!(layout.editor.width, 100 - EXPLORER_WIDTH);
}

#[test]
fn toggled_panels_change_layout() {
    let mut state = AppState::default();
    state.layout.toggle_explorer();
    state.layout.toggle_bottom_panel();
    state.layout.toggle_right_panel();

    let layout = compute_layout(Rect::new(0, 0, 100, 30), &state);
    assert!(layout.explorer.is_none());
    assert!(layout.bottom.is_none());
    assert_eq!(layout.right.map(|a| a.width), Some(RIGHT_PANEL_WIDTH));
    assert_eq!(layout.editor.height, 27);
}

#[test]
fn tiny_terminal_drops_side_panels() {
    let state = AppState::default();
    let layout = compute_layout(Rect::new(0, 0, 40, 10), &state);
    assert!(layout.explorer.is_none());
    assert!(layout.bottom.is_none());
}

#[test]
fn file_at_hits_tabs_and_explorer_rows() {
    let state = AppState::default();
    let layout = compute_layout(Rect::new(0, 0, 100, 30), &state);

    assert_eq!(layout.file_at(&state, 2, 1).as_deref(), Some("app.tsx"));
    assert_eq!(layout.file_at(&state, 12, 1).as_deref(), Some("styles.css"));
    // Explorer: y=2 is the title row, files start at y=3.
    assert_eq!(layout.file_at(&state, 3, 2), None);
    assert_eq!(layout.file_at(&state, 3, 3).as_deref(), Some("app.tsx"));
    assert_eq!(layout.file_at(&state, 3, 4).as_deref(), Some("styles.css"));
    assert_eq!(layout.file_at(&state, 3, 5), None);
    assert_eq!(layout.file_at(&state, 60, 10), None);
}

#[test]
fn loading_state_shows_placeholder() {
    let state = AppState::default();
    let (buffer, _) = render(&state, None);
    let text = screen_text(&buffer);
    assert!(text.contains("Loading editor…"));
    assert!(text.contains("OPEN FILES"));
    assert!(text.contains("No output."));
}

#[test]
fn failed_bootstrap_shows_reason_and_retry_hint() {
    let mut state = AppState::default();
    state.phase = WorkbenchPhase::BootstrapFailed {
        reason: "tab size must be positive".to_string(),
    };
    let (buffer, _) = render(&state, None);
    let text = screen_text(&buffer);
    assert!(text.contains("The editor failed to start."));
    assert!(text.contains("tab size must be positive"));
    assert!(text.contains("Press Ctrl+R to retry."));
}

#[test]
fn ready_state_draws_buffer_lines_with_gutter() {
    let mut state = AppState::default();
    state.phase = WorkbenchPhase::Ready;
    let snapshot = BufferSnapshot {
        model_id: "app.tsx".to_string(),
        language: "typescript".to_string(),
        first_line: 0,
        lines: vec!["const answer = 42;".to_string(), "\texport {};".to_string()],
        cursor_line: 1,
        cursor_col: 1,
        total_lines: 2,
    };

    let (buffer, layout) = render(&state, Some(&snapshot));
    let text = screen_text(&buffer);
    assert!(text.contains("1 const answer = 42;"));
    assert!(text.contains("2     export {};"));
    assert!(text.contains("Ready"));
    assert_eq!(layout.editor.x, EXPLORER_WIDTH);
}

#[test]
fn display_column_expands_tabs_and_wide_chars() {
    assert_eq!(display_column("\tab", 2), 5);
    assert_eq!(display_column("文a", 2), 3);
    assert_eq!(display_column("abc", 10), 3);
}

#[test]
fn wide_tab_titles_stay_inside_their_slot() {
    use crate::kernel::{OpenFile, OpenFiles};

    let mut state = AppState::default();
    let files = vec![
        OpenFile::new("文件.ts", "typescript", ""),
        OpenFile::new("b.ts", "typescript", ""),
    ];
    state.files = OpenFiles::from_parts(files, "文件.ts").unwrap().0;

    let (buffer, layout) = render(&state, None);
    let second = &layout.tab_row.slots[1];
    assert_eq!(layout.tab_row.slots[0].end, 9);
    assert_eq!(second.start, 10);

    let row = layout.tabs.y;
    assert_eq!(buffer.content[buffer.index_of(9, row)].symbol(), "│");
    assert_eq!(buffer.content[buffer.index_of(second.start + 1, row)].symbol(), "b");
}
