//! Text frame rendering
//!
//! `render` is a pure function of the mixer state: same state and viewport,
//! same frame. The frame prints as plain text via `Display`; each line also
//! carries its role so a terminal surface can color it.

use std::fmt;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::mixer::MixerState;
use crate::stream::Stream;

pub const NO_STREAMS: &str = "No active audio streams found.";
pub const TITLE: &str = " Volume Mixer ";
pub const QUIT_HINT: &str = " q to quit";

const ELLIPSIS: char = '…';
const FILLED: &str = "░";
const EMPTY: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Message,
    Title,
    Row { selected: bool },
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub kind: LineKind,
    pub text: String,
}

impl FrameLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    pub lines: Vec<FrameLine>,
}

impl fmt::Display for TextFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Render the whole mixer
pub fn render(state: &MixerState) -> TextFrame {
    if state.is_empty() {
        return TextFrame {
            lines: vec![FrameLine::new(LineKind::Message, NO_STREAMS)],
        };
    }

    let config = state.config();
    let bar_width = config.bar_width(state.viewport().width);

    let mut lines = vec![
        FrameLine::blank(),
        FrameLine::new(LineKind::Title, TITLE),
        FrameLine::blank(),
    ];

    for (index, stream) in state.streams().iter().enumerate() {
        let selected = state.selected() == Some(index);
        let row = render_row(stream, config.name_width, bar_width);
        let text = if selected {
            format!("> {row} <")
        } else {
            format!("  {row}")
        };
        lines.push(FrameLine::new(LineKind::Row { selected }, text));
    }

    lines.push(FrameLine::blank());
    lines.push(FrameLine::new(LineKind::Hint, QUIT_HINT));

    TextFrame { lines }
}

/// One stream: padded name, animated bar, authoritative percentage
pub fn render_row(stream: &Stream, name_width: usize, bar_width: u16) -> String {
    format!(
        "{} {} {:>3}%",
        fit_name(&stream.name, name_width),
        volume_bar(stream.display_volume, bar_width),
        stream.volume
    )
}

/// Pad `name` to `width` columns, cutting it with an ellipsis if too wide
pub fn fit_name(name: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(name.len() + width);
    let mut used = 0;

    if name.width() <= width {
        fitted.push_str(name);
        used = name.width();
    } else if width > 0 {
        for c in name.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            fitted.push(c);
            used += w;
        }
        fitted.push(ELLIPSIS);
        used += 1;
    }

    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

/// `[░░░   ]` with `level * width / 100` filled cells
pub fn volume_bar(level: u8, width: u16) -> String {
    let width = width as usize;
    let filled = (level as usize * width / 100).min(width);
    format!("[{}{}]", FILLED.repeat(filled), EMPTY.repeat(width - filled))
}
