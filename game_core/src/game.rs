use crate::{step, Config, Entities, Events, InputState, Params, Score, Side, Snapshot};

/// A running match: entity model plus score, driven by host frame deltas.
///
/// Host deltas vary from frame to frame; `advance` splits them into micro
/// steps of at most `config.fixed_dt` so a fast ball cannot skip through a
/// paddle on a slow frame.
#[derive(Debug, Clone)]
pub struct Match {
    pub entities: Entities,
    pub config: Config,
    pub score: Score,
    pub tick: u32,
}

impl Match {
    pub fn new(config: Config) -> Self {
        Self {
            entities: Entities::new(&config),
            config,
            score: Score::new(),
            tick: 0,
        }
    }

    /// Back to the kickoff layout with a clean score
    pub fn reset(&mut self) {
        self.entities = Entities::new(&self.config);
        self.score = Score::new();
        self.tick = 0;
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    /// Advance by one host frame. Returns everything that happened in it.
    ///
    /// A decided match no longer moves.
    pub fn advance(&mut self, input: &InputState, dt: f32) -> Events {
        let mut frame_events = Events::new();
        if self.winner().is_some() {
            return frame_events;
        }

        // Clamp dt to prevent large jumps
        let clamped_dt = crate::sanitize_dt(dt).min(self.config.max_dt);

        // Fixed micro-steps for stable physics
        let substeps = substep_count(clamped_dt, self.config.fixed_dt);
        let step_dt = clamped_dt / substeps as f32;
        for _ in 0..substeps {
            let (next, events) = step(&self.entities, input, step_dt, &self.config);
            self.entities = next;
            frame_events.merge(events);

            if let Some(side) = events.scorer() {
                self.score.increment(side);
                log::debug!(
                    "{side:?} scores: {} - {}",
                    self.score.left,
                    self.score.right
                );
                if let Some(winner) = self.winner() {
                    log::info!(
                        "{winner:?} wins {} - {}",
                        self.score.left,
                        self.score.right
                    );
                    break;
                }
            }
        }

        self.tick = self.tick.wrapping_add(1);
        frame_events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.tick, &self.entities, self.score)
    }
}

/// Number of equal micro steps covering `dt`, each no longer than `fixed_dt`
/// where possible, never more than `Params::MAX_SUBSTEPS`.
fn substep_count(dt: f32, fixed_dt: f32) -> u32 {
    if !(fixed_dt.is_finite() && fixed_dt > 0.0) {
        return 1;
    }
    (dt / fixed_dt)
        .ceil()
        .clamp(1.0, Params::MAX_SUBSTEPS as f32) as u32
}
