/// Rendering layer: all terminal I/O lives here.
///
/// Paints the core's `DrawCommand` list onto a character grid scaled from
/// field coordinates to the terminal size, then flushes the grid row by
/// row.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use angler_raid::entities::{EnemyKind, EntireGameStateInfo, Rect};
use angler_raid::ui::{draw_list, DrawCommand, Sprite, TextAlign, Tint};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::DarkBlue;
const C_HILLS: Color = Color::DarkGreen;
const C_CITY: Color = Color::DarkGrey;
const C_FOREGROUND: Color = Color::DarkYellow;
const C_PLAYER: Color = Color::White;
const C_PLAYER_POWERED: Color = Color::Yellow;
const C_PROJECTILE: Color = Color::Yellow;
const C_GEAR: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

fn enemy_look(kind: EnemyKind) -> (char, Color) {
    match kind {
        EnemyKind::Angler1 => ('▒', Color::Green),
        EnemyKind::Angler2 => ('▒', Color::Cyan),
        EnemyKind::LuckyFish => ('♦', Color::Yellow),
        EnemyKind::HiveWhale => ('█', Color::Magenta),
        EnemyKind::Drone => ('▪', Color::Red),
    }
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Yellow => Color::Yellow,
        Tint::Black => Color::White,
        Tint::Red => Color::Red,
    }
}

// ── Cell grid ─────────────────────────────────────────────────────────────────

type Cell = (char, Color);

/// Terminal-sized canvas.  The bottom row is reserved for the controls hint.
struct Canvas {
    cols: usize,
    rows: usize,
    sx: f32,
    sy: f32,
    cells: Vec<Cell>,
}

impl Canvas {
    fn new(cols: u16, rows: u16, field_w: f32, field_h: f32) -> Self {
        let cols = cols as usize;
        let rows = rows.saturating_sub(1) as usize;
        Self {
            cols,
            rows,
            sx: cols as f32 / field_w,
            sy: rows as f32 / field_h,
            cells: vec![(' ', Color::Reset); cols * rows],
        }
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        self.cells[row as usize * self.cols + col as usize] = cell;
    }

    /// Cell span covered by a field rect; never smaller than one cell.
    fn span(&self, rect: &Rect) -> (i32, i32, i32, i32) {
        let c0 = (rect.x * self.sx).floor() as i32;
        let r0 = (rect.y * self.sy).floor() as i32;
        let c1 = ((rect.x + rect.width) * self.sx).ceil().max(c0 as f32 + 1.0) as i32;
        let r1 = ((rect.y + rect.height) * self.sy).ceil().max(r0 as f32 + 1.0) as i32;
        (c0, r0, c1, r1)
    }

    fn fill(&mut self, rect: &Rect, cell: Cell) {
        let (c0, r0, c1, r1) = self.span(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, cell);
            }
        }
    }

    fn outline(&mut self, rect: &Rect, color: Color) {
        let (c0, r0, c1, r1) = self.span(rect);
        for col in c0..c1 {
            self.put(col, r0, ('─', color));
            self.put(col, r1 - 1, ('─', color));
        }
        for row in r0..r1 {
            self.put(c0, row, ('│', color));
            self.put(c1 - 1, row, ('│', color));
        }
    }

    fn text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Color) {
        let len = text.chars().count() as i32;
        let mut col = (x * self.sx) as i32;
        if align == TextAlign::Center {
            col -= len / 2;
        }
        let row = (y * self.sy) as i32;
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, (ch, color));
        }
    }

    /// Sparse scrolling pattern standing in for layer artwork.
    fn layer(&mut self, id: u8, rect: &Rect) {
        let (glyph, color, row_share, every) = match id {
            1 => ('·', C_SKY, 0.15, 9),
            2 => ('^', C_HILLS, 0.55, 7),
            3 => ('▁', C_CITY, 0.8, 3),
            _ => ('░', C_FOREGROUND, 0.97, 5),
        };
        let (c0, _, c1, _) = self.span(rect);
        let row = (self.rows as f32 * row_share) as i32;
        for col in c0..c1 {
            if (col - c0) % every == 0 {
                self.put(col, row, (glyph, color));
            }
        }
    }

    fn apply(&mut self, cmd: &DrawCommand) {
        match cmd {
            DrawCommand::Sprite { sprite, frame_y, rect, .. } => match sprite {
                Sprite::Layer(id) => self.layer(*id, rect),
                Sprite::Player => {
                    let color = if *frame_y > 0 { C_PLAYER_POWERED } else { C_PLAYER };
                    self.fill(rect, ('▓', color));
                }
                Sprite::Projectile => self.fill(rect, ('─', C_PROJECTILE)),
                Sprite::Gear => {
                    let (cx, cy) = rect.center();
                    self.put((cx * self.sx) as i32, (cy * self.sy) as i32, ('*', C_GEAR));
                }
                Sprite::Enemy(kind) => self.fill(rect, enemy_look(*kind)),
            },
            DrawCommand::Rect { rect, tint, filled: true } => {
                self.fill(rect, ('█', tint_color(*tint)));
            }
            DrawCommand::Rect { rect, tint, filled: false } => {
                self.outline(rect, tint_color(*tint));
            }
            DrawCommand::Text { text, x, y, tint, align, .. } => {
                self.text(text, *x, *y, *align, tint_color(*tint));
            }
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &EntireGameStateInfo) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut canvas = Canvas::new(cols, rows, state.config.width, state.config.height);

    // Debug overlays go on top of the sprites they annotate.
    let (overlay, scene): (Vec<_>, Vec<_>) = draw_list(state).into_iter().partition(|c| {
        matches!(c, DrawCommand::Rect { filled: false, .. })
            || matches!(c, DrawCommand::Text { size, .. } if *size < 25.0 && state.debug)
    });
    for cmd in scene.iter().chain(overlay.iter()) {
        canvas.apply(cmd);
    }

    flush_canvas(out, &canvas)?;
    draw_controls_hint(out, state, rows)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn flush_canvas<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    for row in 0..canvas.rows {
        out.queue(cursor::MoveTo(0, row as u16))?;
        let line = &canvas.cells[row * canvas.cols..(row + 1) * canvas.cols];
        let mut current = Color::Reset;
        let mut run = String::new();
        for &(ch, color) in line {
            if color != current && !run.is_empty() {
                out.queue(style::SetForegroundColor(current))?;
                out.queue(Print(&run))?;
                run.clear();
            }
            current = color;
            run.push(ch);
        }
        out.queue(style::SetForegroundColor(current))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(
    out: &mut W,
    state: &EntireGameStateInfo,
    rows: u16,
) -> std::io::Result<()> {
    let hint = if state.is_game_over() {
        "R : Play Again   Q : Quit"
    } else {
        "↑ ↓ / W S : Move   SPACE : Shoot   D : Debug   Q : Quit"
    };
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
