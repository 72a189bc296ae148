//! # IdCard Component
//!
//! The badge in the left panel, hanging from a lanyard, with a
//! "[Poke My ID Card]" button underneath. The card is drawn row by row
//! through `CardTilt::projected_rows`, so a tilt shows up as a shear plus
//! vertical squash pivoting on the top centre.
//!
//! Geometry used for hit-testing is written to `CardHits` on every render.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::core::id_card::{CELL_HEIGHT_PX, CELL_WIDTH_PX, CardTilt};
use crate::core::profile::CardProfile;
use crate::tui::component::Component;

pub const POKE_LABEL: &str = "[Poke My ID Card]";
const LANYARD_ROWS: u16 = 2;
const MAX_CARD_WIDTH: u16 = 34;
const MIN_CARD_WIDTH: u16 = 12;

/// Screen areas of the card, recorded while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardHits {
    /// Untilted card outline
    pub card: Option<Rect>,
    pub poke: Option<Rect>,
}

impl CardHits {
    pub fn on_card(&self, col: u16, row: u16) -> bool {
        self.card.is_some_and(|r| r.contains(Position::new(col, row)))
    }

    pub fn on_poke(&self, col: u16, row: u16) -> bool {
        self.poke.is_some_and(|r| r.contains(Position::new(col, row)))
    }

    /// Pointer offset from the card's top centre, in pixels.
    pub fn pointer_offset(&self, col: u16, row: u16) -> Option<(f64, f64)> {
        let card = self.card?;
        let centre_x = f64::from(card.x) + f64::from(card.width) / 2.0;
        let x = (f64::from(col) + 0.5 - centre_x) * CELL_WIDTH_PX;
        let y = (f64::from(row) + 0.5 - f64::from(card.y)) * CELL_HEIGHT_PX;
        Some((x, y))
    }
}

pub struct IdCard<'a> {
    pub profile: &'a CardProfile,
    pub tilt: &'a CardTilt,
    pub hits: &'a mut CardHits,
}

impl IdCard<'_> {
    /// Text rows of the visible face, without the border. Long rows are
    /// wrapped to the card width when drawn.
    fn face(&self) -> Vec<(String, Style)> {
        let bold = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let plain = Style::default().fg(Color::Gray);
        let dim = Style::default().fg(Color::DarkGray);

        if self.tilt.is_flipped()
            && let Some(back) = &self.profile.back
        {
            let mut rows = vec![(String::new(), plain)];
            rows.extend(back.lines().map(|l| (l.to_string(), plain)));
            rows.push((String::new(), plain));
            return rows;
        }

        let mut rows = vec![
            ("┌──────┐".to_string(), dim),
            ("│ ◕‿◕  │".to_string(), dim),
            ("└──────┘".to_string(), dim),
            (String::new(), plain),
            (self.profile.name.clone(), bold),
            (self.profile.title.clone(), plain),
        ];
        if let Some(detail) = &self.profile.detail {
            rows.push((detail.clone(), dim));
        }
        rows
    }
}

/// Write `text` starting at column `x` (may be off-screen), clipped to `area`.
fn put_clipped(buf: &mut Buffer, area: Rect, x: i32, y: u16, text: &str, style: Style) {
    if y < area.top() || y >= area.bottom() {
        return;
    }
    let mut col = x;
    for ch in text.chars() {
        if col >= i32::from(area.right()) {
            break;
        }
        if col >= i32::from(area.left())
            && let Ok(c) = u16::try_from(col)
            && let Some(cell) = buf.cell_mut((c, y))
        {
            cell.set_char(ch).set_style(style);
        }
        col += 1;
    }
}

/// `text` centred in `width` columns, truncated if longer (a single word
/// wider than the card).
fn centred(text: &str, width: usize) -> String {
    let text: String = if text.width() > width {
        text.chars().take(width).collect()
    } else {
        text.to_string()
    };
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

impl Component for IdCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        *self.hits = CardHits::default();
        let width = area.width.saturating_sub(4).min(MAX_CARD_WIDTH);
        if width < MIN_CARD_WIDTH || area.height < LANYARD_ROWS + 4 {
            return;
        }

        let inner = usize::from(width - 2);
        let border = Style::default().fg(Color::Cyan);
        let mut rows: Vec<(String, Style, Style)> = Vec::new();
        rows.push((format!("╭{}╮", "─".repeat(inner)), border, border));
        for (text, style) in self.face() {
            for piece in textwrap::wrap(&text, inner) {
                rows.push((centred(&piece, inner), style, border));
            }
        }
        rows.push((format!("╰{}╯", "─".repeat(inner)), border, border));

        let card_x = area.x + (area.width - width) / 2;
        let top = area.y + 1 + LANYARD_ROWS;
        let centre = card_x + width / 2;
        let buf = frame.buffer_mut();

        let strap = Style::default().fg(Color::Red);
        for dy in 0..LANYARD_ROWS {
            put_clipped(buf, area, i32::from(centre), area.y + 1 + dy, "║", strap);
        }

        let projected = self.tilt.projected_rows(rows.len());
        let mut drawn: u16 = 0;
        for (screen_row, (source, shift)) in projected.into_iter().enumerate() {
            let y = top + screen_row as u16;
            let x = i32::from(card_x) + shift;
            let (text, style, edge) = &rows[source];
            let is_border_row = source == 0 || source == rows.len() - 1;
            if is_border_row {
                put_clipped(buf, area, x, y, text, *style);
            } else {
                put_clipped(buf, area, x, y, "│", *edge);
                put_clipped(buf, area, x + 1, y, text, *style);
                put_clipped(buf, area, x + 1 + inner as i32, y, "│", *edge);
            }
            drawn = drawn.max(screen_row as u16 + 1);
        }

        let card_height = rows.len() as u16;
        self.hits.card = Some(Rect::new(card_x, top, width, card_height).intersection(area));

        let poke_y = top + card_height.max(drawn) + 1;
        if poke_y < area.bottom() {
            let label_width = POKE_LABEL.width() as u16;
            let poke_x = area.x + area.width.saturating_sub(label_width) / 2;
            put_clipped(
                buf,
                area,
                i32::from(poke_x),
                poke_y,
                POKE_LABEL,
                Style::default().fg(Color::Yellow),
            );
            self.hits.poke = Some(Rect::new(poke_x, poke_y, label_width, 1).intersection(area));
        }
    }
}
