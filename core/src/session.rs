use alloc::vec::Vec;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Scrambling,
    AwaitingClicks,
    Success,
    Failed,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Setup
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrambleOutcome {
    /// Buttons moved, more steps follow.
    Moved { remaining: u8 },
    /// Last step done: labels are hidden and clicks are armed.
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Revealed,
    Completed,
    WrongOrder,
}

impl ClickOutcome {
    pub const fn message_key(self) -> Option<MessageKey> {
        match self {
            Self::Revealed => None,
            Self::Completed => Some(MessageKey::ExcellentMemory),
            Self::WrongOrder => Some(MessageKey::WrongOrder),
        }
    }
}

/// State of one play-through, from the numbered buttons appearing to the final click.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    id: SessionId,
    count: ButtonCount,
    buttons: Vec<GameButton>,
    original_order: Vec<ButtonId>,
    expected_click_index: usize,
    scramble_steps_done: u8,
    phase: Phase,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(id: SessionId, count: ButtonCount, rng: &mut R) -> Self {
        let buttons: Vec<_> = count
            .ids()
            .map(|id| GameButton::new(id, Color::random(&mut *rng)))
            .collect();
        let original_order = buttons.iter().map(GameButton::id).collect();
        Self {
            id,
            count,
            buttons,
            original_order,
            expected_click_index: 0,
            scramble_steps_done: 0,
            phase: Default::default(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn count(&self) -> ButtonCount {
        self.count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn buttons(&self) -> &[GameButton] {
        &self.buttons
    }

    pub fn button(&self, id: ButtonId) -> Option<&GameButton> {
        self.buttons.iter().find(|button| button.id() == id)
    }

    pub fn original_order(&self) -> &[ButtonId] {
        &self.original_order
    }

    pub fn expected_click_index(&self) -> usize {
        self.expected_click_index
    }

    pub fn scramble_steps_done(&self) -> u8 {
        self.scramble_steps_done
    }

    pub fn begin_scramble(&mut self) -> Result<()> {
        if self.phase != Phase::Setup {
            return Err(GameError::NotInSetup);
        }
        self.phase = Phase::Scrambling;
        Ok(())
    }

    pub fn scramble_step<M, R>(&mut self, metrics: &M, rng: &mut R) -> Result<ScrambleOutcome>
    where
        M: BoardMetrics + ?Sized,
        R: Rng + ?Sized,
    {
        if self.phase != Phase::Scrambling {
            return Err(GameError::NotScrambling);
        }

        let container = metrics.container();
        for button in &mut self.buttons {
            let position = random_position(&mut *rng, container, metrics.button(button.id()));
            button.set_position(position);
        }
        self.scramble_steps_done += 1;

        let remaining = self.count.get().saturating_sub(self.scramble_steps_done);
        if remaining == 0 {
            self.start_recall();
            Ok(ScrambleOutcome::Finished)
        } else {
            Ok(ScrambleOutcome::Moved { remaining })
        }
    }

    pub fn click(&mut self, id: ButtonId) -> Result<ClickOutcome> {
        let index = self
            .buttons
            .iter()
            .position(|button| button.id() == id)
            .ok_or(GameError::UnknownButton)?;

        if self.phase != Phase::AwaitingClicks || !self.buttons[index].accepts_clicks() {
            return Err(GameError::NotAwaitingClicks);
        }

        if self.original_order.get(self.expected_click_index) == Some(&id) {
            self.buttons[index].show_label();
            self.expected_click_index += 1;

            if self.expected_click_index == self.original_order.len() {
                self.phase = Phase::Success;
                Ok(ClickOutcome::Completed)
            } else {
                Ok(ClickOutcome::Revealed)
            }
        } else {
            self.fail();
            Ok(ClickOutcome::WrongOrder)
        }
    }

    fn start_recall(&mut self) {
        for button in &mut self.buttons {
            button.hide_label();
            if !button.arm_click() {
                log::warn!("button {} was already armed", button.id());
            }
        }
        self.expected_click_index = 0;
        self.phase = Phase::AwaitingClicks;
    }

    fn fail(&mut self) {
        for button in &mut self.buttons {
            button.show_label();
            button.disable();
        }
        self.phase = Phase::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    const METRICS: FixedMetrics = FixedMetrics {
        container: Extent::new(800, 600),
        button: Extent::new(160, 80),
    };

    fn new_session(count: u8) -> (GameSession, SmallRng) {
        let mut rng = SmallRng::seed_from_u64(0xfeed);
        let count = ButtonCount::new(count).unwrap();
        (GameSession::new(SessionId::FIRST, count, &mut rng), rng)
    }

    fn scrambled(count: u8) -> GameSession {
        let (mut session, mut rng) = new_session(count);
        session.begin_scramble().unwrap();
        while let ScrambleOutcome::Moved { .. } = session.scramble_step(&METRICS, &mut rng).unwrap() {}
        session
    }

    #[test]
    fn new_session_creates_numbered_buttons_in_order() {
        for count in MIN_BUTTONS..=MAX_BUTTONS {
            let (session, _) = new_session(count);

            let ids: Vec<_> = session.buttons().iter().map(GameButton::id).collect();
            let expected: Vec<_> = (1..=count).collect();
            assert_eq!(ids, expected);
            assert_eq!(session.original_order(), expected.as_slice());
            assert!(session.buttons().iter().all(|b| b.label() == Some(b.id())));
            assert_eq!(session.phase(), Phase::Setup);
        }
    }

    #[test]
    fn scramble_runs_exactly_count_steps_then_hides_labels() {
        let (mut session, mut rng) = new_session(4);
        session.begin_scramble().unwrap();

        for remaining in (1..4).rev() {
            assert_eq!(
                session.scramble_step(&METRICS, &mut rng).unwrap(),
                ScrambleOutcome::Moved { remaining }
            );
            assert!(session.buttons().iter().all(GameButton::is_label_visible));
        }
        assert_eq!(
            session.scramble_step(&METRICS, &mut rng).unwrap(),
            ScrambleOutcome::Finished
        );

        assert_eq!(session.phase(), Phase::AwaitingClicks);
        assert_eq!(session.scramble_steps_done(), 4);
        assert!(session.buttons().iter().all(|b| b.label().is_none()));
        assert!(session.buttons().iter().all(GameButton::is_click_armed));
        assert_eq!(
            session.scramble_step(&METRICS, &mut rng),
            Err(GameError::NotScrambling)
        );
    }

    #[test]
    fn scrambled_positions_stay_in_bounds() {
        let session = scrambled(7);

        for button in session.buttons() {
            let pos = button.position().unwrap();
            assert!(pos.x <= METRICS.container.width - METRICS.button.width);
            assert!(pos.y <= METRICS.container.height - METRICS.button.height);
        }
    }

    #[test]
    fn scramble_requires_begin() {
        let (mut session, mut rng) = new_session(3);

        assert_eq!(
            session.scramble_step(&METRICS, &mut rng),
            Err(GameError::NotScrambling)
        );
        session.begin_scramble().unwrap();
        assert_eq!(session.begin_scramble(), Err(GameError::NotInSetup));
    }

    #[test]
    fn clicks_before_recall_are_rejected() {
        let (mut session, _) = new_session(3);

        assert_eq!(session.click(1), Err(GameError::NotAwaitingClicks));
        assert_eq!(session.button(1).unwrap().label(), Some(1));
    }

    #[test]
    fn clicking_in_order_succeeds_once_after_last_click() {
        let mut session = scrambled(4);

        for id in 1..4 {
            assert_eq!(session.click(id).unwrap(), ClickOutcome::Revealed);
            assert_eq!(session.button(id).unwrap().label(), Some(id));
            assert_eq!(session.button(id + 1).unwrap().label(), None);
        }
        assert_eq!(session.click(4).unwrap(), ClickOutcome::Completed);
        assert_eq!(session.phase(), Phase::Success);
        assert_eq!(session.click(4), Err(GameError::NotAwaitingClicks));
    }

    #[test]
    fn wrong_click_reveals_everything_and_freezes_board() {
        let mut session = scrambled(3);

        assert_eq!(session.click(2).unwrap(), ClickOutcome::WrongOrder);
        assert_eq!(session.phase(), Phase::Failed);
        assert!(session.buttons().iter().all(|b| b.label() == Some(b.id())));
        assert!(session.buttons().iter().all(|b| !b.accepts_clicks()));

        let frozen = session.clone();
        assert_eq!(session.click(3), Err(GameError::NotAwaitingClicks));
        assert_eq!(session, frozen);
    }

    #[test]
    fn clicking_revealed_button_again_is_wrong_order() {
        let mut session = scrambled(3);

        assert_eq!(session.click(1).unwrap(), ClickOutcome::Revealed);
        assert_eq!(session.click(1).unwrap(), ClickOutcome::WrongOrder);
    }

    #[test]
    fn unknown_button_is_an_error() {
        let mut session = scrambled(3);

        assert_eq!(session.click(9), Err(GameError::UnknownButton));
        assert_eq!(session.phase(), Phase::AwaitingClicks);
    }
}
