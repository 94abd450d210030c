//! Session driver: the imperative shell around the pure game.
//!
//! The session applies actions to its [`DivisionGame`], carries out the
//! requested effects (rendering, scheduling feedback clears), and keeps the
//! phase history of the current round.

use super::error::SessionError;
use super::summary::SessionSummary;
use crate::core::{PhaseChange, RoundHistory, State};
use crate::game::{Action, DivisionGame, Effect, Feedback, Generation, Phase, StepResult};
use crate::input::{parse_command, Command, HELP};
use crate::render::{Renderer, Snapshot};
use chrono::Utc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, Instrument};
use uuid::Uuid;

/// One learner playing rounds until they quit.
///
/// Must be driven from within a tokio runtime: feedback clears are scheduled
/// as tokio tasks.
pub struct Session<R: Renderer> {
    id: Uuid,
    game: DivisionGame,
    renderer: R,
    history: RoundHistory<Phase>,
    round_guesses: usize,
    summary: SessionSummary,
    timer_tx: mpsc::UnboundedSender<Generation>,
    timer_rx: mpsc::UnboundedReceiver<Generation>,
    pending: Option<JoinHandle<()>>,
}

impl<R: Renderer> Session<R> {
    pub fn new(game: DivisionGame, renderer: R) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let history = RoundHistory::new(game.phase(), Utc::now());
        Self {
            id: Uuid::new_v4(),
            game,
            renderer,
            history,
            round_guesses: 0,
            summary: SessionSummary::default(),
            timer_tx,
            timer_rx,
            pending: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn game(&self) -> &DivisionGame {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn history(&self) -> &RoundHistory<Phase> {
        &self.history
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Current state as the renderer sees it.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.game).with_session(self.id)
    }

    /// Draw the initial frame.
    pub fn start(&mut self) -> Result<(), SessionError> {
        info!(
            session = %self.id,
            dividend = self.game.dividend(),
            divisor = self.game.divisor(),
            "session started"
        );
        self.render()
    }

    /// Apply one action and carry out its effects.
    pub fn dispatch(&mut self, action: Action) -> Result<StepResult, SessionError> {
        let before = self.game.phase();
        let restarts = matches!(
            action,
            Action::SetDividend(_) | Action::SetDivisor(_) | Action::Reset
        );
        let guessed = matches!(action, Action::CheckAnswer(_));

        let result = self.game.dispatch(action);
        let effects = match &result {
            StepResult::Ignored(reason) => {
                debug!(%reason, "action ignored");
                return Ok(result);
            }
            StepResult::Applied(effects) => effects.clone(),
        };

        // Any applied step supersedes a pending clear.
        self.cancel_pending();

        if restarts {
            self.start_round();
        } else {
            if guessed {
                self.count_guess();
            }
            self.track_phase(before);
        }

        for effect in effects {
            match effect {
                Effect::Render => self.render()?,
                Effect::ScheduleFeedbackClear { generation, after } => {
                    self.schedule_clear(generation, after)
                }
            }
        }
        Ok(result)
    }

    /// Wait for the next feedback timer to fire and apply it.
    ///
    /// Stale timers are delivered too; the game ignores them. Only returns
    /// `None` if the timer channel closed.
    pub async fn wait_for_timer(&mut self) -> Result<Option<StepResult>, SessionError> {
        match self.timer_rx.recv().await {
            Some(generation) => self.dispatch(Action::ClearFeedback(generation)).map(Some),
            None => Ok(None),
        }
    }

    /// Play until the input ends or the learner quits.
    pub async fn run<I>(self, input: I) -> Result<SessionSummary, SessionError>
    where
        I: AsyncBufRead + Unpin,
    {
        let span = tracing::info_span!("session", id = %self.id);
        self.run_inner(input).instrument(span).await
    }

    async fn run_inner<I>(mut self, input: I) -> Result<SessionSummary, SessionError>
    where
        I: AsyncBufRead + Unpin,
    {
        self.start()?;
        let mut lines = input.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    match parse_command(&line) {
                        Command::Play(action) => {
                            self.dispatch(action)?;
                        }
                        Command::Help => self.renderer.notice(HELP)?,
                        Command::Quit => break,
                        Command::Unknown(text) => {
                            debug!(%text, "unknown command");
                            self.renderer
                                .notice(&format!("unknown command: {text} (try 'help')"))?;
                        }
                    }
                }
                Some(generation) = self.timer_rx.recv() => {
                    self.dispatch(Action::ClearFeedback(generation))?;
                }
            }
        }

        self.cancel_pending();
        info!(summary = %self.summary, "session finished");
        self.renderer.notice(&self.summary.to_string())?;
        Ok(self.summary.clone())
    }

    fn render(&mut self) -> Result<(), SessionError> {
        let snapshot = self.snapshot();
        self.renderer.render(&snapshot)?;
        Ok(())
    }

    fn start_round(&mut self) {
        self.history = RoundHistory::new(self.game.phase(), Utc::now());
        self.round_guesses = 0;
        debug!(
            dividend = self.game.dividend(),
            divisor = self.game.divisor(),
            "round started"
        );
    }

    fn count_guess(&mut self) {
        self.round_guesses += 1;
        self.summary.guesses += 1;
        if self.game.feedback() == Feedback::Incorrect {
            self.summary.wrong_guesses += 1;
            debug!(guesses = self.round_guesses, "wrong guess");
        }
    }

    fn track_phase(&mut self, before: Phase) {
        let after = self.game.phase();
        if after == before {
            return;
        }

        self.history = self.history.record(PhaseChange {
            from: before,
            to: after,
            timestamp: Utc::now(),
            guesses: self.round_guesses,
        });
        debug!(from = before.name(), to = after.name(), "phase changed");

        if after.is_final() {
            self.summary.rounds_solved += 1;
            self.summary.last_round = self.history.time_to_finish();
            info!(
                equation = %self.game.solution(),
                guesses = self.round_guesses,
                "round solved"
            );
        }
    }

    fn schedule_clear(&mut self, generation: Generation, after: Duration) {
        let tx = self.timer_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(generation).is_err() {
                debug!(%generation, "session gone before feedback clear");
            }
        }));
        debug!(%generation, ?after, "feedback clear scheduled");
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl<R: Renderer> Drop for Session<R> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
