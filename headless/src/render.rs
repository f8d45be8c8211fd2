use std::io::Write;

use anyhow::{Context, Result};
use game_core::{Events, Snapshot};

/// Render adapter that writes one JSON line per frame in which something
/// happened, plus the final state.
pub struct TextRenderer<W: Write> {
    out: W,
    last: Option<Snapshot>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn draw(&mut self, snapshot: &Snapshot, events: &Events) -> Result<()> {
        log::debug!(
            "tick {} ball {:?} paddles {:.3}/{:.3}",
            snapshot.tick,
            snapshot.ball_pos,
            snapshot.paddle_left.pos.y,
            snapshot.paddle_right.pos.y
        );

        if *events != Events::new() {
            self.write_line(snapshot)?;
        }
        self.last = Some(*snapshot);
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        if let Some(snapshot) = self.last.take() {
            self.write_line(&snapshot)?;
        }
        self.out.flush().context("flushing output")
    }

    fn write_line(&mut self, snapshot: &Snapshot) -> Result<()> {
        serde_json::to_writer(&mut self.out, snapshot).context("encoding snapshot")?;
        writeln!(self.out).context("writing snapshot")
    }
}
