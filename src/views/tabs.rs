use unicode_width::UnicodeWidthStr;

use super::text::ellipsize;
use crate::kernel::OpenFiles;

const PADDING_LEFT: u16 = 1;
const PADDING_RIGHT: u16 = 1;
const DIVIDER_WIDTH: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSlot {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub active: bool,
    /// Column range `[start, end)` relative to the row origin.
    pub start: u16,
    pub end: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabRowLayout {
    pub slots: Vec<TabSlot>,
}

impl TabRowLayout {
    pub fn hit_test(&self, x: u16) -> Option<&TabSlot> {
        self.slots.iter().find(|slot| x >= slot.start && x < slot.end)
    }

    pub fn active(&self) -> Option<&TabSlot> {
        self.slots.iter().find(|slot| slot.active)
    }
}

/// Lays out one tab per open file in `width` columns. Titles shrink evenly when the row is
/// too narrow, and tabs that do not fit at all are dropped from the end.
pub fn compute_tab_row_layout(files: &OpenFiles, width: u16) -> TabRowLayout {
    if width == 0 || files.is_empty() {
        return TabRowLayout::default();
    }

    let preferred: Vec<usize> = files
        .files()
        .iter()
        .map(|file| UnicodeWidthStr::width(file.label.as_str()))
        .collect();
    let fixed = files.len() * (PADDING_LEFT + PADDING_RIGHT) as usize
        + files.len().saturating_sub(1) * DIVIDER_WIDTH as usize;
    let budget = (width as usize).saturating_sub(fixed);
    let allocated = allocate_title_widths(&preferred, budget);

    let right = width;
    let mut x = 0u16;
    let mut slots = Vec::with_capacity(files.len());

    for (index, file) in files.files().iter().enumerate() {
        if x >= right {
            break;
        }

        let start = x;
        x = x.saturating_add(PADDING_LEFT).min(right);
        let title_width = allocated
            .get(index)
            .copied()
            .unwrap_or(0)
            .min(right.saturating_sub(x) as usize);
        x = x.saturating_add(title_width as u16).min(right);
        x = x.saturating_add(PADDING_RIGHT).min(right);

        slots.push(TabSlot {
            index,
            id: file.id.clone(),
            title: ellipsize(&file.label, title_width),
            active: file.id == files.active_id(),
            start,
            end: x,
        });

        if index + 1 < files.len() {
            x = x.saturating_add(DIVIDER_WIDTH).min(right);
        }
    }

    TabRowLayout { slots }
}

fn allocate_title_widths(preferred: &[usize], budget: usize) -> Vec<usize> {
    let mut widths = vec![0; preferred.len()];
    let mut remaining = budget;

    for width in &mut widths {
        if remaining == 0 {
            break;
        }
        *width = 1;
        remaining -= 1;
    }

    let mut needs: Vec<usize> = preferred
        .iter()
        .zip(widths.iter())
        .map(|(preferred, assigned)| preferred.saturating_sub(*assigned))
        .collect();

    while remaining > 0 {
        let mut progressed = false;
        for (width, need) in widths.iter_mut().zip(needs.iter_mut()) {
            if *need == 0 {
                continue;
            }
            *width += 1;
            *need -= 1;
            remaining -= 1;
            progressed = true;
            if remaining == 0 {
                break;
            }
        }
        if !progressed {
            break;
        }
    }

    widths
}

#[cfg(test)]
#[path = "../../tests/unit/views/tabs.rs"]
mod tests;
