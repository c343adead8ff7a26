//! TermShell: raw-mode terminal session and the status banner.
//!
//! The shell keeps the drawing API deliberately tiny: the demo renders one
//! status line, not a scene. Entering and leaving raw mode mirrors the
//! usual alternate-screen dance, and callers should always attempt `exit`
//! on the way out even after an error.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use canvas_boot_types::ScreenProfile;

pub struct TermShell {
    stdout: io::Stdout,
}

impl TermShell {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the status banner in place.
    pub fn draw_status(&mut self, score: u32, profile: &ScreenProfile) -> Result<()> {
        let orientation = if profile.is_landscape {
            "landscape"
        } else {
            "portrait"
        };
        let line = format!(
            " score {:>6} | render {}x{} zoom {:.2} ({}) | q to quit ",
            score, profile.render_width, profile.render_height, profile.zoom_factor, orientation
        );

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.stdout.queue(SetAttribute(Attribute::Reverse))?;
        self.stdout.queue(Print(line))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TermShell {
    fn default() -> Self {
        Self::new()
    }
}
