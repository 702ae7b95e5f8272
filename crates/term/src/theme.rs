//! Colours and small text helpers shared by the widgets.

use core::fmt::Write;

use arrayvec::ArrayString;

use crate::fb::{CellStyle, Rgb};

pub const BACKGROUND: Rgb = Rgb::new(40, 44, 52);
pub const PANEL: Rgb = Rgb::new(50, 54, 62);
pub const CARD_BACK: Rgb = Rgb::new(86, 98, 246);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const TITLE: Rgb = Rgb::new(255, 255, 200);
pub const GOLD: Rgb = Rgb::new(255, 215, 0);
pub const SKY: Rgb = Rgb::new(100, 200, 255);
pub const LAVENDER: Rgb = Rgb::new(200, 200, 255);
pub const GREEN: Rgb = Rgb::new(100, 255, 100);
pub const BUTTON: Rgb = Rgb::new(0, 0, 180);
pub const BUTTON_HOVER: Rgb = Rgb::new(100, 160, 210);
pub const OVERLAY: Rgb = Rgb::new(16, 18, 22);

/// Face colour per card value, indexed by `value - 1`.
pub const CARD_COLORS: [Rgb; 8] = [
    Rgb::new(255, 89, 94),
    Rgb::new(255, 202, 58),
    Rgb::new(138, 201, 38),
    Rgb::new(255, 0, 0),
    Rgb::new(106, 76, 147),
    Rgb::new(242, 100, 25),
    Rgb::new(0, 200, 200),
    Rgb::new(200, 0, 200),
];

pub fn card_color(value: u8) -> Rgb {
    let idx = (value.max(1) - 1) as usize % CARD_COLORS.len();
    CARD_COLORS[idx]
}

/// Plain text on the board background.
pub const fn text(fg: Rgb) -> CellStyle {
    CellStyle::new(fg, BACKGROUND)
}

pub const BEST_PLACEHOLDER: &str = "--:--.--";

/// Format milliseconds as `m:ss.cc`. Hundredths are truncated.
pub fn format_time(ms: u64) -> ArrayString<24> {
    let minutes = ms / 60_000;
    let rem = ms % 60_000;
    let secs = rem / 1_000;
    let centis = (rem % 1_000) / 10;

    let mut out = ArrayString::new();
    // 24 bytes always fit u64::MAX minutes plus the suffix.
    let _ = write!(out, "{minutes}:{secs:02}.{centis:02}");
    out
}
