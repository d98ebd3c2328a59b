//! Terminal backend built on crossterm
//!
//! Draws with half-block characters (two vertical pixels per cell) and reads
//! keys in raw mode. The playfield keeps its 2:3 aspect and is centered
//! horizontally.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Attribute, Color as TermColor};
use crossterm::{cursor, execute, queue, terminal};

use super::{InputEvent, InputSource, Renderer};
use crate::consts::{HEIGHT, WIDTH};
use crate::renderer::{Canvas, Color, DrawCommand, TextLabel};

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

/// Map a key press to an intent
pub fn classify_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char(' ') | KeyCode::Up => Some(InputEvent::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        _ => None,
    }
}

/// Largest (width, height) in half-block pixels with the playfield aspect
pub fn fit_playfield(cols: u16, rows: u16) -> (usize, usize) {
    let max_w = cols as usize;
    let max_h = rows as usize * 2;
    let (pw, ph) = (WIDTH as usize, HEIGHT as usize);
    let w = (max_h * pw / ph).min(max_w);
    let h = (w * ph / pw).min(max_h);
    // Whole cells only
    (w, h - h % 2)
}

/// Raw-mode alternate-screen terminal; restores the terminal on drop
pub struct TerminalPlatform {
    out: Stdout,
    canvas: Canvas,
    /// Column where the playfield starts
    x_offset: u16,
}

impl TerminalPlatform {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        log::debug!("Terminal entered raw mode");

        Ok(Self {
            out,
            canvas: Canvas::new(0, 0),
            x_offset: 0,
        })
    }

    fn fit_to_terminal(&mut self) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let (w, h) = fit_playfield(cols, rows);
        if (w, h) != (self.canvas.width(), self.canvas.height()) {
            self.canvas.resize(w, h);
            self.x_offset = ((cols as usize - w) / 2) as u16;
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }
        Ok(())
    }

    fn flush_pixels(&mut self) -> io::Result<()> {
        let rows = self.canvas.height() / 2;
        for row in 0..rows {
            queue!(self.out, cursor::MoveTo(self.x_offset, row as u16))?;
            let mut prev: Option<(Color, Color)> = None;
            for col in 0..self.canvas.width() {
                let top = self.canvas.get(col, row * 2);
                let bot = self.canvas.get(col, row * 2 + 1);
                if prev != Some((top, bot)) {
                    queue!(
                        self.out,
                        style::SetForegroundColor(term_color(top)),
                        style::SetBackgroundColor(term_color(bot))
                    )?;
                    prev = Some((top, bot));
                }
                queue!(self.out, style::Print('\u{2580}'))?; // ▀
            }
        }
        queue!(self.out, style::ResetColor)
    }

    fn print_label(&mut self, label: &TextLabel) -> io::Result<()> {
        let row = label.y / 2;
        if row >= self.canvas.height() / 2 {
            return Ok(());
        }
        let len = label.text.chars().count();
        let col = label.x.saturating_sub(len / 2);
        let bg = self.canvas.get(label.x.min(self.canvas.width().saturating_sub(1)), row * 2);

        queue!(
            self.out,
            cursor::MoveTo(self.x_offset + col as u16, row as u16),
            style::SetForegroundColor(term_color(label.color)),
            style::SetBackgroundColor(term_color(bg)),
        )?;
        if label.emphasis {
            queue!(self.out, style::SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.out,
            style::Print(&label.text),
            style::SetAttribute(Attribute::Reset),
            style::ResetColor
        )
    }
}

impl Drop for TerminalPlatform {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            style::ResetColor,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl InputSource for TerminalPlatform {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => events.extend(classify_key(&key)),
                Event::Resize(..) => self.fit_to_terminal()?,
                _ => {}
            }
        }
        Ok(events)
    }
}

impl Renderer for TerminalPlatform {
    fn present(&mut self, commands: &[DrawCommand]) -> io::Result<()> {
        self.fit_to_terminal()?;
        if self.canvas.width() == 0 || self.canvas.height() == 0 {
            return Ok(());
        }

        let labels = self.canvas.render(commands);
        self.flush_pixels()?;
        for label in &labels {
            self.print_label(label)?;
        }
        self.out.flush()
    }
}
