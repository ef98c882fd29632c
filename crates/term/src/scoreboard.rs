//! ScoreboardView: maps a core `GameSnapshot` into a terminal screen.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The layout is the classic paper scoresheet: ten frame boxes with roll
//! marks (`X` strike, `/` spare, `-` gutter, digits otherwise) over the
//! cumulative score, a pin deck showing the standing rack, and a status line
//! driven by the most recent roll.

use crossterm::style::Color;

use crate::core::snapshot::{FrameSnapshot, GameSnapshot};
use crate::screen::{Screen, TextStyle};
use crate::types::{RollEvent, FRAME_COUNT, LAST_FRAME, PERFECT_SCORE, PIN_COUNT};

/// Inner width of a regular frame box (two mark slots).
const BOX_W: u16 = 5;
/// Inner width of the tenth-frame box (three mark slots).
const LAST_BOX_W: u16 = 7;
/// Full scoresheet width: nine regular boxes, the tenth box, shared borders.
const SHEET_W: u16 = 9 * (BOX_W + 1) + (LAST_BOX_W + 1) + 1;
/// Rows used by the whole view (title through help line).
const VIEW_H: u16 = 15;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal scoreboard for the bowling game.
pub struct ScoreboardView {
    anchor_y: AnchorY,
}

impl Default for ScoreboardView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl ScoreboardView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing screen.
    ///
    /// `status` is the line shown under the pin deck; shells usually build it
    /// with [`status_line`] but may substitute their own text (for example a
    /// rejected-roll message). Callers can reuse a screen across frames.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: &str,
        viewport: Viewport,
        screen: &mut Screen,
    ) {
        screen.resize(viewport.width, viewport.height);
        screen.clear(Default::default());

        let start_x = viewport.width.saturating_sub(SHEET_W) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(VIEW_H) / 2,
            AnchorY::Top => 0,
        };

        let title = TextStyle {
            bold: true,
            ..Default::default()
        };
        self.put_centered(screen, viewport, start_y, "TUI BOWLING", title);

        self.draw_sheet(screen, snap, start_x, start_y + 2);
        self.draw_pin_deck(screen, snap, start_x, start_y + 8);

        self.put_centered(screen, viewport, start_y + 13, status, Default::default());

        let help = "[0-9] pins  [x] sweep rack  [r] restart  [q] quit";
        let dim = TextStyle {
            dim: true,
            ..Default::default()
        };
        self.put_centered(screen, viewport, start_y + 14, help, dim);
    }

    /// Convenience helper that allocates a new screen.
    pub fn render(&self, snap: &GameSnapshot, status: &str, viewport: Viewport) -> Screen {
        let mut screen = Screen::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut screen);
        screen
    }

    fn put_centered(
        &self,
        screen: &mut Screen,
        viewport: Viewport,
        y: u16,
        text: &str,
        style: TextStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        screen.put_str(x, y, text, style);
    }

    /// The ten-box scoresheet: number row, borders, marks, cumulative scores.
    fn draw_sheet(&self, screen: &mut Screen, snap: &GameSnapshot, x: u16, y: u16) {
        let border = TextStyle {
            fg: Color::Rgb {
                r: 200,
                g: 200,
                b: 200,
            },
            ..Default::default()
        };
        let label = TextStyle {
            dim: true,
            ..Default::default()
        };
        let active = TextStyle {
            fg: Color::Rgb {
                r: 240,
                g: 220,
                b: 80,
            },
            bold: true,
            ..Default::default()
        };

        // Frame number row, with the active frame highlighted.
        for i in 0..FRAME_COUNT {
            let (box_x, box_w) = box_geometry(i);
            let num = (i + 1).to_string();
            let style = if snap.active_frame() == Some(i) {
                active
            } else {
                label
            };
            let nx = x + box_x + 1 + (box_w - num.chars().count() as u16) / 2;
            screen.put_str(nx, y, &num, style);
        }

        // Borders.
        let top = y + 1;
        let bottom = y + 4;
        for dy in [top, bottom] {
            for dx in 0..SHEET_W {
                screen.put_char(x + dx, dy, '─', border);
            }
        }
        for i in 0..FRAME_COUNT {
            let (box_x, _) = box_geometry(i);
            screen.put_char(x + box_x, top, if i == 0 { '┌' } else { '┬' }, border);
            screen.put_char(x + box_x, bottom, if i == 0 { '└' } else { '┴' }, border);
            for dy in [y + 2, y + 3] {
                screen.put_char(x + box_x, dy, '│', border);
            }
        }
        screen.put_char(x + SHEET_W - 1, top, '┐', border);
        screen.put_char(x + SHEET_W - 1, bottom, '┘', border);
        for dy in [y + 2, y + 3] {
            screen.put_char(x + SHEET_W - 1, dy, '│', border);
        }

        // Marks and scores.
        for i in 0..FRAME_COUNT {
            let (box_x, box_w) = box_geometry(i);
            let frame = &snap.frames[i];

            for (slot, mark) in frame_marks(frame, i == LAST_FRAME).iter().enumerate() {
                if let Some(mark) = mark {
                    let mx = x + box_x + 2 + 2 * slot as u16;
                    screen.put_char(mx, y + 2, mark.glyph, mark_style(*mark));
                }
            }

            if frame.roll_count > 0 {
                let score = frame.score.to_string();
                let sx = x + box_x + 1 + (box_w - score.chars().count() as u16) / 2;
                screen.put_str(sx, y + 3, &score, Default::default());
            }
        }
    }

    /// The 4-3-2-1 pin triangle, back row on top. Pins come down lowest
    /// number first; only the count is tracked, not positions.
    fn draw_pin_deck(&self, screen: &mut Screen, snap: &GameSnapshot, x: u16, y: u16) {
        const ROWS: [&[u8]; 4] = [&[7, 8, 9, 10], &[4, 5, 6], &[2, 3], &[1]];

        let standing = TextStyle {
            fg: Color::Rgb {
                r: 240,
                g: 220,
                b: 80,
            },
            bold: true,
            ..Default::default()
        };
        let knocked = TextStyle {
            dim: true,
            ..Default::default()
        };

        let down = PIN_COUNT - snap.pins_standing;
        let deck_x = x + SHEET_W / 2 - 4;

        for (row, pins) in ROWS.iter().enumerate() {
            let row_x = deck_x + row as u16;
            for (col, &pin) in pins.iter().enumerate() {
                let (ch, style) = if pin <= down {
                    ('·', knocked)
                } else {
                    ('█', standing)
                };
                screen.put_char(row_x + 2 * col as u16, y + row as u16, ch, style);
            }
        }
    }
}

/// Left border x-offset and inner width of frame box `i` within the sheet.
fn box_geometry(i: usize) -> (u16, u16) {
    let x = (i as u16) * (BOX_W + 1);
    let w = if i == LAST_FRAME { LAST_BOX_W } else { BOX_W };
    (x, w)
}

/// A roll mark with its display class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub glyph: char,
    pub kind: MarkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Strike,
    Spare,
    Gutter,
    Count,
}

/// Mark for a single roll by pin count: `X` for all ten, `-` for none,
/// the digit otherwise.
fn roll_mark(pins: u8) -> Mark {
    let (glyph, kind) = match pins {
        p if p == PIN_COUNT => ('X', MarkKind::Strike),
        0 => ('-', MarkKind::Gutter),
        p => (char::from(b'0' + p), MarkKind::Count),
    };
    Mark { glyph, kind }
}

/// The up-to-three mark slots of a frame box.
///
/// Regular frames: a strike occupies the first slot alone; a spare renders
/// the second roll as `/`. The tenth frame marks each roll on its own, with
/// `/` only for a genuine spare (first two rolls, no leading strike).
pub fn frame_marks(frame: &FrameSnapshot, is_last: bool) -> [Option<Mark>; 3] {
    let first = frame.roll(0);
    let second = frame.roll(1);
    let third = frame.roll(2);

    let spare_mark = Mark {
        glyph: '/',
        kind: MarkKind::Spare,
    };

    if !is_last {
        if frame.is_strike {
            return [Some(roll_mark(PIN_COUNT)), None, None];
        }
        let second = second.map(|pins| if frame.is_spare { spare_mark } else { roll_mark(pins) });
        return [first.map(roll_mark), second, None];
    }

    // The tenth frame reads spares off the raw rolls: the frame flags only
    // cover the first-roll strike / first-two-rolls spare cases.
    let spare = !frame.is_strike
        && second.is_some()
        && first.unwrap_or(0) + second.unwrap_or(0) == PIN_COUNT;
    let second = second.map(|pins| if spare { spare_mark } else { roll_mark(pins) });

    [first.map(roll_mark), second, third.map(roll_mark)]
}

fn mark_style(mark: Mark) -> TextStyle {
    match mark.kind {
        MarkKind::Strike => TextStyle {
            fg: Color::Rgb {
                r: 240,
                g: 220,
                b: 80,
            },
            bold: true,
            ..Default::default()
        },
        MarkKind::Spare => TextStyle {
            fg: Color::Rgb {
                r: 100,
                g: 220,
                b: 120,
            },
            bold: true,
            ..Default::default()
        },
        MarkKind::Gutter => TextStyle {
            dim: true,
            ..Default::default()
        },
        MarkKind::Count => Default::default(),
    }
}

/// Status line for the bottom of the scoreboard.
///
/// Banners for the notable roll events, a frame/roll/pins prompt mid-game,
/// and a rated final-score message once the game completes.
pub fn status_line(snap: &GameSnapshot, last_event: Option<RollEvent>) -> String {
    if snap.game_complete {
        let mut msg = format!("Game complete! Final score: {}", snap.total);
        if snap.total == PERFECT_SCORE {
            msg.push_str(" PERFECT GAME!");
        } else if snap.total >= 200 {
            msg.push_str(" Excellent bowling!");
        } else if snap.total >= 150 {
            msg.push_str(" Great job!");
        } else if snap.total >= 100 {
            msg.push_str(" Good game!");
        }
        return msg;
    }

    let prompt = format!(
        "Frame {}, roll {}. {} pins standing.",
        snap.current_frame, snap.current_roll, snap.pins_standing
    );

    match last_event {
        Some(RollEvent::Strike) => format!("STRIKE! {prompt}"),
        Some(RollEvent::Spare) => format!("SPARE! Nice recovery! {prompt}"),
        Some(RollEvent::Gutter) => format!("Gutter ball! {prompt}"),
        None => prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(rolls: &[u8], strike: bool, spare: bool) -> FrameSnapshot {
        let mut snap = FrameSnapshot::default();
        for (i, &pins) in rolls.iter().enumerate() {
            snap.rolls[i] = pins;
        }
        snap.roll_count = rolls.len() as u8;
        snap.is_strike = strike;
        snap.is_spare = spare;
        snap
    }

    fn glyphs(marks: [Option<Mark>; 3]) -> [Option<char>; 3] {
        marks.map(|m| m.map(|m| m.glyph))
    }

    #[test]
    fn regular_frame_marks() {
        let open = frame_with(&[7, 2], false, false);
        assert_eq!(glyphs(frame_marks(&open, false)), [Some('7'), Some('2'), None]);

        let strike = frame_with(&[10], true, false);
        assert_eq!(glyphs(frame_marks(&strike, false)), [Some('X'), None, None]);

        let spare = frame_with(&[6, 4], false, true);
        assert_eq!(glyphs(frame_marks(&spare, false)), [Some('6'), Some('/'), None]);

        let gutter = frame_with(&[0, 3], false, false);
        assert_eq!(glyphs(frame_marks(&gutter, false)), [Some('-'), Some('3'), None]);
    }

    #[test]
    fn tenth_frame_marks() {
        let turkey = frame_with(&[10, 10, 10], true, false);
        assert_eq!(
            glyphs(frame_marks(&turkey, true)),
            [Some('X'), Some('X'), Some('X')]
        );

        let spare_then_bonus = frame_with(&[6, 4, 10], false, true);
        assert_eq!(
            glyphs(frame_marks(&spare_then_bonus, true)),
            [Some('6'), Some('/'), Some('X')]
        );

        // After a leading strike the second roll shoots a fresh rack, so a
        // partial count is a digit, never a spare mark.
        let strike_then_counts = frame_with(&[10, 4, 2], true, false);
        assert_eq!(
            glyphs(frame_marks(&strike_then_counts, true)),
            [Some('X'), Some('4'), Some('2')]
        );
    }

    #[test]
    fn status_line_banners_and_ratings() {
        let mut snap = GameSnapshot::default();
        snap.current_frame = 3;
        snap.current_roll = 2;
        snap.pins_standing = 4;

        assert_eq!(status_line(&snap, None), "Frame 3, roll 2. 4 pins standing.");
        assert!(status_line(&snap, Some(RollEvent::Strike)).starts_with("STRIKE!"));
        assert!(status_line(&snap, Some(RollEvent::Gutter)).starts_with("Gutter ball!"));

        snap.game_complete = true;
        snap.total = 300;
        assert!(status_line(&snap, None).contains("PERFECT GAME"));
        snap.total = 201;
        assert!(status_line(&snap, None).contains("Excellent bowling"));
        snap.total = 99;
        assert_eq!(status_line(&snap, None), "Game complete! Final score: 99");
    }
}
