use rand::prelude::*;

use crate::*;

/// Drives sessions from count submission to the final click.
///
/// Timers live outside of the controller: `submit` hands back a [`ScramblePlan`] and the caller reports the delay and
/// every interval tick back together with the [`SessionId`] it was armed for. Events carrying the id of a replaced
/// session are refused with [`GameError::StaleSession`] and change nothing.
#[derive(Clone, Debug)]
pub struct GameController<R> {
    messages: MessageRepository,
    rng: R,
    last_id: Option<SessionId>,
    session: Option<GameSession>,
}

impl<R: Rng> GameController<R> {
    pub fn new(messages: MessageRepository, rng: R) -> Self {
        Self {
            messages,
            rng,
            last_id: None,
            session: None,
        }
    }

    pub fn message(&self, key: MessageKey) -> &str {
        self.messages.message(key)
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.session.as_ref().map(GameSession::phase)
    }

    /// Validates the raw count input and starts a new session. An invalid count leaves any running session alone.
    pub fn submit(&mut self, input: &str) -> Result<ScramblePlan> {
        let count = ButtonCount::parse_input(input).inspect_err(|_| {
            log::debug!("rejected button count input: {:?}", input);
        })?;
        Ok(self.start(count))
    }

    pub fn start(&mut self, count: ButtonCount) -> ScramblePlan {
        let id = self.last_id.map_or(SessionId::FIRST, SessionId::next);
        self.last_id = Some(id);

        let session = GameSession::new(id, count, &mut self.rng);
        if let Some(previous) = self.session.replace(session) {
            log::debug!(
                "session {} replaced while {:?}",
                previous.id(),
                previous.phase()
            );
        }
        log::info!("session {} started with {} buttons", id, count);

        ScramblePlan::for_count(id, count)
    }

    pub fn begin_scramble(&mut self, id: SessionId) -> Result<()> {
        current_session(&mut self.session, id)?.begin_scramble()
    }

    pub fn scramble_tick<M>(&mut self, id: SessionId, metrics: &M) -> Result<ScrambleOutcome>
    where
        M: BoardMetrics + ?Sized,
    {
        let session = current_session(&mut self.session, id)?;
        let outcome = session.scramble_step(metrics, &mut self.rng)?;
        if outcome == ScrambleOutcome::Finished {
            log::debug!("session {} scrambled, awaiting clicks", id);
        }
        Ok(outcome)
    }

    pub fn click(&mut self, id: SessionId, button: ButtonId) -> Result<ClickOutcome> {
        let session = current_session(&mut self.session, id)?;
        let outcome = session.click(button)?;
        log::debug!("session {} button {} clicked: {:?}", id, button, outcome);
        Ok(outcome)
    }
}

fn current_session(session: &mut Option<GameSession>, id: SessionId) -> Result<&mut GameSession> {
    match session {
        Some(session) if session.id() == id => Ok(session),
        _ => Err(GameError::StaleSession),
    }
}
