//! 工作台渲染：视图模型 -> ratatui 组件
//!
//! 布局（自上而下）：工具栏、标签行、主体（资源管理器 | 编辑器 | 详情）、底部面板、状态栏。

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use super::palette::UiPalette;
use crate::kernel::services::adapters::BufferSnapshot;
use crate::kernel::{AppState, ProblemSeverity, WorkbenchPhase};
use crate::views::{
    bottom_panel, compute_tab_row_layout, ellipsize, explorer, pad_to_width, right_panel, status_bar,
    toolbar, BottomPanelBody, TabRowLayout,
};

const EXPLORER_WIDTH: u16 = 24;
const RIGHT_PANEL_WIDTH: u16 = 30;
const BOTTOM_PANEL_HEIGHT: u16 = 8;
const MIN_EDITOR_HEIGHT: u16 = 3;

/// Screen areas of the last frame, for mouse hit testing and sizing the engine viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLayout {
    pub tabs: Rect,
    pub tab_row: TabRowLayout,
    pub explorer: Option<Rect>,
    pub editor: Rect,
    pub right: Option<Rect>,
    pub bottom: Option<Rect>,
}

impl FrameLayout {
    /// Id of the file whose tab or explorer row is at `(x, y)`.
    pub fn file_at(&self, state: &AppState, x: u16, y: u16) -> Option<String> {
        if contains(self.tabs, x, y) {
            return self
                .tab_row
                .hit_test(x - self.tabs.x)
                .map(|slot| slot.id.clone());
        }
        let area = self.explorer?;
        // Row 0 is the border/title.
        if !contains(area, x, y) || y <= area.y {
            return None;
        }
        let row = (y - area.y - 1) as usize;
        explorer(state)?.hit_test_row(row).map(str::to_string)
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    area.contains(Position::new(x, y))
}

/// Splits `area` into the workbench regions for the current panel layout.
pub fn compute_layout(area: Rect, state: &AppState) -> FrameLayout {
    let bottom_open = state.layout.bottom_panel_open
        && area.height >= 4 + MIN_EDITOR_HEIGHT + BOTTOM_PANEL_HEIGHT;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(if bottom_open { BOTTOM_PANEL_HEIGHT } else { 0 }),
            Constraint::Length(1),
        ])
        .split(area);

    let explorer_open = state.layout.explorer_open && area.width > EXPLORER_WIDTH * 2;
    let right_open = state.layout.right_panel_open
        && area.width > RIGHT_PANEL_WIDTH * 2 + if explorer_open { EXPLORER_WIDTH } else { 0 };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(if explorer_open { EXPLORER_WIDTH } else { 0 }),
            Constraint::Min(1),
            Constraint::Length(if right_open { RIGHT_PANEL_WIDTH } else { 0 }),
        ])
        .split(rows[2]);

    let tabs = rows[1];
    FrameLayout {
        tabs,
        tab_row: compute_tab_row_layout(&state.files, tabs.width),
        explorer: explorer_open.then_some(columns[0]),
        editor: columns[1],
        right: right_open.then_some(columns[2]),
        bottom: bottom_open.then_some(rows[3]),
    }
}

pub fn draw(
    frame: &mut Frame,
    state: &AppState,
    snapshot: Option<&BufferSnapshot>,
    palette: &UiPalette,
) -> FrameLayout {
    let area = frame.area();
    let layout = compute_layout(area, state);

    let toolbar_area = Rect { height: 1, ..area };
    let status_area = Rect {
        y: area.bottom().saturating_sub(1),
        height: 1,
        ..area
    };

    draw_toolbar(frame, toolbar_area, state, palette);
    draw_tabs(frame, &layout, palette);
    if let Some(explorer_area) = layout.explorer {
        draw_explorer(frame, explorer_area, state, palette);
    }
    draw_editor(frame, layout.editor, state, snapshot, palette);
    if let Some(right_area) = layout.right {
        draw_right_panel(frame, right_area, state, palette);
    }
    if let Some(bottom_area) = layout.bottom {
        draw_bottom_panel(frame, bottom_area, state, palette);
    }
    draw_status(frame, status_area, state, palette);

    layout
}

fn draw_toolbar(frame: &mut Frame, area: Rect, state: &AppState, palette: &UiPalette) {
    let model = toolbar(state);
    let base = Style::default().bg(palette.sidebar_bg).fg(palette.editor_fg);
    let muted = base.fg(palette.muted_fg);

    let mut spans = vec![
        Span::styled(" zbench ", base.add_modifier(Modifier::BOLD)),
        Span::styled("│ ", muted),
        Span::styled(format!("{} ", model.language_label), base),
        Span::styled("^L ", muted),
        Span::styled("│ ", muted),
        Span::styled(format!("{} ", model.theme_label), base),
        Span::styled("^T ", muted),
        Span::styled("│ ", muted),
        Span::styled(
            "Format ",
            if model.can_format { base } else { muted },
        ),
        Span::styled("M-F ", muted),
    ];
    for toggle in model.toggles {
        let marker = if toggle.open { "■" } else { "□" };
        spans.push(Span::styled("│ ", muted));
        spans.push(Span::styled(format!("{} {} ", marker, toggle.label), base));
        spans.push(Span::styled(format!("{} ", toggle.key_hint), muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
}

fn draw_tabs(frame: &mut Frame, layout: &FrameLayout, palette: &UiPalette) {
    let area = layout.tabs;
    let inactive = Style::default()
        .bg(palette.tab_inactive_bg)
        .fg(palette.muted_fg);
    let active = Style::default()
        .bg(palette.tab_active_bg)
        .fg(palette.editor_fg)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(layout.tab_row.slots.len() * 2);
    let mut x = 0u16;
    for slot in &layout.tab_row.slots {
        if slot.start > x {
            spans.push(Span::styled("│", inactive));
        }
        let style = if slot.active { active } else { inactive };
        let width = (slot.end - slot.start) as usize;
        spans.push(Span::styled(
            format!(" {} ", pad_to_width(&slot.title, width.saturating_sub(2))),
            style,
        ));
        x = slot.end;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(inactive), area);
}

fn draw_explorer(frame: &mut Frame, area: Rect, state: &AppState, palette: &UiPalette) {
    let Some(model) = explorer(state) else {
        return;
    };
    let base = Style::default().bg(palette.sidebar_bg).fg(palette.editor_fg);
    let width = area.width.saturating_sub(3) as usize;

    let lines: Vec<Line> = model
        .rows
        .iter()
        .map(|row| {
            let style = if row.active {
                base.fg(palette.accent_fg).add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Line::styled(format!(" {}", ellipsize(&row.label, width)), style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::TOP | Borders::RIGHT)
        .title(model.title)
        .border_style(base.fg(palette.muted_fg))
        .style(base);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_editor(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    snapshot: Option<&BufferSnapshot>,
    palette: &UiPalette,
) {
    let base = Style::default().bg(palette.editor_bg).fg(palette.editor_fg);

    let placeholder = match &state.phase {
        WorkbenchPhase::Loading => Some(vec![Line::styled("Loading editor…", base)]),
        WorkbenchPhase::BootstrapFailed { reason } => Some(vec![
            Line::styled(
                "The editor failed to start.",
                base.fg(palette.error_fg).add_modifier(Modifier::BOLD),
            ),
            Line::styled(reason.clone(), base),
            Line::default(),
            Line::styled("Press Ctrl+R to retry.", base.fg(palette.muted_fg)),
        ]),
        WorkbenchPhase::Ready => None,
    };
    if let Some(lines) = placeholder {
        frame.render_widget(
            Paragraph::new(lines).style(base).wrap(Wrap { trim: false }),
            area,
        );
        return;
    }

    let Some(snapshot) = snapshot else {
        frame.render_widget(Paragraph::new("").style(base), area);
        return;
    };

    let gutter = snapshot.total_lines.max(1).to_string().len() + 1;
    let lines: Vec<Line> = snapshot
        .lines
        .iter()
        .enumerate()
        .map(|(offset, text)| {
            let line_no = snapshot.first_line + offset;
            let row_style = if line_no == snapshot.cursor_line {
                base.bg(palette.current_line_bg)
            } else {
                base
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>w$} ", line_no + 1, w = gutter),
                    row_style.fg(palette.line_number_fg),
                ),
                Span::styled(expand_tabs(text), row_style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).style(base), area);

    if snapshot.cursor_line >= snapshot.first_line {
        let row = (snapshot.cursor_line - snapshot.first_line) as u16;
        let line = snapshot
            .lines
            .get(snapshot.cursor_line - snapshot.first_line)
            .map(String::as_str)
            .unwrap_or("");
        let col = display_column(line, snapshot.cursor_col) + gutter + 1;
        if row < area.height {
            let x = area.x + (col as u16).min(area.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, area.y + row));
        }
    }
}

fn draw_right_panel(frame: &mut Frame, area: Rect, state: &AppState, palette: &UiPalette) {
    let Some(model) = right_panel(state) else {
        return;
    };
    let base = Style::default().bg(palette.panel_bg).fg(palette.editor_fg);
    let key_style = base.fg(palette.muted_fg);

    let lines: Vec<Line> = model
        .rows
        .iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!(" {:<11}", key), key_style),
                Span::styled(value.clone(), base),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT)
        .title(model.title)
        .border_style(key_style)
        .style(base);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_bottom_panel(frame: &mut Frame, area: Rect, state: &AppState, palette: &UiPalette) {
    let Some(model) = bottom_panel(state) else {
        return;
    };
    let base = Style::default().bg(palette.panel_bg).fg(palette.editor_fg);
    let muted = base.fg(palette.muted_fg);

    let mut title = vec![Span::styled(" ", base)];
    for tab in &model.tabs {
        let style = if tab.active {
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            muted
        };
        title.push(Span::styled(tab.title.clone(), style));
        title.push(Span::styled("  ", base));
    }
    title.push(Span::styled("F6 ", muted));

    let inner_height = area.height.saturating_sub(1) as usize;
    let lines: Vec<Line> = match &model.body {
        BottomPanelBody::Empty(message) => vec![Line::styled(format!(" {}", message), muted)],
        BottomPanelBody::Terminal(lines) => {
            let skip = lines.len().saturating_sub(inner_height);
            lines[skip..]
                .iter()
                .map(|line| Line::styled(format!(" $ {}", line), base))
                .collect()
        }
        BottomPanelBody::Problems(rows) => rows
            .iter()
            .map(|row| {
                let color = match row.severity {
                    ProblemSeverity::Error => palette.error_fg,
                    ProblemSeverity::Warning => palette.warning_fg,
                    ProblemSeverity::Info => palette.accent_fg,
                };
                Line::from(vec![
                    Span::styled(format!(" {:<8}", row.severity.label()), base.fg(color)),
                    Span::styled(row.message.clone(), base),
                ])
            })
            .collect(),
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .title(Line::from(title))
        .border_style(muted)
        .style(base);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status(frame: &mut Frame, area: Rect, state: &AppState, palette: &UiPalette) {
    let model = status_bar(state);
    let style = Style::default().bg(palette.status_bg).fg(palette.status_fg);

    let left = model.left_text();
    let right = model.right_text();
    let used = left.chars().count() + right.chars().count();
    let gap = (area.width as usize).saturating_sub(used);
    let text = format!("{}{}{}", left, " ".repeat(gap), right);

    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn expand_tabs(text: &str) -> String {
    text.replace('\t', "    ")
}

/// Terminal column of char index `col` in `line`, with tabs expanded.
fn display_column(line: &str, col: usize) -> usize {
    line.chars()
        .take(col)
        .map(|ch| match ch {
            '\t' => 4,
            other => other.width().unwrap_or(0),
        })
        .sum()
}

#[cfg(test)]
#[path = "../../tests/unit/tui/render.rs"]
mod tests;
