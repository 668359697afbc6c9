//! Text layout of the status screen.

use super::frame::FrameBuffer;
use crate::state::{SystemState, ToggleLine};
use core::fmt::Write;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

pub const TITLE: &str = "Turnstile Control";

/// Left margin of every line (px).
pub const TEXT_X: i32 = 5;
pub const TITLE_Y: i32 = 0;
/// Top row of the first toggle line (px).
pub const FIRST_LINE_Y: i32 = 16;
pub const LINE_HEIGHT: i32 = 8;
pub const STATUS_Y: i32 = 56;

/// Prefix of the selected toggle line.
pub const CURSOR_MARKER: char = '>';

/// One line of text.
pub type Line = heapless::String<24>;

/// `"{marker} {label}: {ON |OFF}"` for `line`.
pub fn toggle_line(state: &SystemState, line: ToggleLine) -> Line {
    let marker = if state.cursor.line() == line {
        CURSOR_MARKER
    } else {
        ' '
    };
    let value = if state.permissions.is_on(line) {
        "ON "
    } else {
        "OFF"
    };

    let mut text = Line::new();
    let _ = write!(text, "{} {}: {}", marker, line.label(), value);
    text
}

/// `"GATE: OPEN"` or `"GATE: CLOSED"`.
pub fn status_line(gate_open: bool) -> Line {
    let mut text = Line::new();
    let _ = write!(text, "GATE: {}", if gate_open { "OPEN" } else { "CLOSED" });
    text
}

/// Top-left corner of toggle line `index`.
pub fn toggle_origin(index: usize) -> Point {
    Point::new(TEXT_X, FIRST_LINE_Y + index as i32 * LINE_HEIGHT)
}

/// Clears `frame` and draws the complete screen for `state`.
pub fn draw(frame: &mut FrameBuffer, state: &SystemState) {
    let style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);

    frame.clear();

    let _ = Text::with_baseline(TITLE, Point::new(TEXT_X, TITLE_Y), style, Baseline::Top)
        .draw(frame);

    for line in ToggleLine::ALL {
        let text = toggle_line(state, line);
        let _ = Text::with_baseline(&text, toggle_origin(line.index()), style, Baseline::Top)
            .draw(frame);
    }

    let status = status_line(state.gate_open);
    let _ = Text::with_baseline(&status, Point::new(TEXT_X, STATUS_Y), style, Baseline::Top)
        .draw(frame);
}
