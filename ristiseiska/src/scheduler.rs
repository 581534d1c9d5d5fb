use std::time::{Duration, Instant};

use tracing::trace;

use crate::{GameState, Phase, TurnTicket};

/// An AI move waiting for its pause to run out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAiTurn {
    pub ticket: TurnTicket,
    pub due: Instant,
}

/// Paces computer players so that a human can follow along.
///
/// The shell calls [`sync`](Self::sync) whenever it has a new state, and
/// [`poll`](Self::poll) when it wakes up. At most one move is pending, and it
/// is tied to the [`TurnTicket`] of the state it was scheduled for: as soon
/// as the state moves on (a human acts, the game is restarted) the pending
/// move is dropped.
#[derive(Clone, Debug)]
pub struct AiTurnScheduler {
    delay: Duration,
    pending: Option<PendingAiTurn>,
}

impl AiTurnScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<PendingAiTurn> {
        self.pending
    }

    /// Brings the pending move in line with `state`.
    pub fn sync(&mut self, state: &GameState, now: Instant) {
        let wants_ai_move = state.phase() == Phase::Playing && state.current_player().is_ai();
        match self.pending {
            Some(pending) if wants_ai_move && pending.ticket == state.ticket() => {}
            Some(pending) => {
                trace!(ticket = ?pending.ticket, "Cancelling stale AI move");
                self.pending = None;
                if wants_ai_move {
                    self.schedule(state.ticket(), now);
                }
            }
            None if wants_ai_move => self.schedule(state.ticket(), now),
            None => {}
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns the ticket of the pending move once it is due, and forgets it.
    pub fn poll(&mut self, now: Instant) -> Option<TurnTicket> {
        match self.pending {
            Some(pending) if pending.due <= now => {
                self.pending = None;
                Some(pending.ticket)
            }
            _ => None,
        }
    }

    /// How long until the pending move is due. Zero if it already is.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.due.saturating_duration_since(now))
    }

    fn schedule(&mut self, ticket: TurnTicket, now: Instant) {
        trace!(?ticket, delay_ms = self.delay.as_millis() as u64, "Scheduling AI move");
        self.pending = Some(PendingAiTurn {
            ticket,
            due: now + self.delay,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, seat_players, CardId, DealtCard, FirstLegalCard, GameCode, GameLog, Player};

    fn game(human_first: bool) -> GameState {
        let mut players = seat_players(1, 1);
        if !human_first {
            players.reverse();
        }
        let hands = [[card!("7♣"), card!("2♥")], [card!("8♣"), card!("3♠")]];
        let players = players
            .into_iter()
            .zip(hands)
            .zip([0u16, 10])
            .map(|((player, cards), offset)| Player {
                hand: cards
                    .iter()
                    .zip(offset..)
                    .map(|(&card, id)| DealtCard {
                        id: CardId(id),
                        card,
                    })
                    .collect(),
                ..player
            })
            .collect();
        GameState::from_dealt_players(GameCode::from("S"), players, GameLog::default()).unwrap()
    }

    #[test]
    fn schedules_only_for_ai_players() {
        let now = Instant::now();
        let mut scheduler = AiTurnScheduler::new(Duration::from_millis(500));

        let human_to_move = game(true);
        scheduler.sync(&human_to_move, now);
        assert_eq!(scheduler.pending(), None);

        let ai_to_move = game(false);
        scheduler.sync(&ai_to_move, now);
        assert_eq!(scheduler.pending().map(|p| p.ticket), Some(ai_to_move.ticket()));
        assert_eq!(scheduler.time_until_due(now), Some(Duration::from_millis(500)));
    }

    #[test]
    fn fires_once_when_due() {
        let now = Instant::now();
        let mut scheduler = AiTurnScheduler::new(Duration::from_millis(500));
        let state = game(false);
        scheduler.sync(&state, now);
        assert_eq!(scheduler.poll(now + Duration::from_millis(499)), None);
        let ticket = scheduler.poll(now + Duration::from_millis(500)).unwrap();
        assert_eq!(scheduler.poll(now + Duration::from_secs(5)), None);

        let transition = state.play_ai_turn_for(ticket, &mut FirstLegalCard).unwrap();
        assert_eq!(transition.state.table().len(), 1);
    }

    #[test]
    fn resyncing_the_same_turn_keeps_the_deadline() {
        let now = Instant::now();
        let mut scheduler = AiTurnScheduler::new(Duration::from_millis(500));
        let state = game(false);
        scheduler.sync(&state, now);
        scheduler.sync(&state, now + Duration::from_millis(300));
        assert_eq!(
            scheduler.time_until_due(now + Duration::from_millis(300)),
            Some(Duration::from_millis(200))
        );
    }

    #[test]
    fn state_change_cancels_pending_move() {
        let now = Instant::now();
        let mut scheduler = AiTurnScheduler::new(Duration::from_millis(500));
        let ai_to_move = game(false);
        scheduler.sync(&ai_to_move, now);

        // The game was restarted with a human to move
        scheduler.sync(&game(true), now + Duration::from_millis(100));
        assert_eq!(scheduler.pending(), None);
        assert_eq!(scheduler.poll(now + Duration::from_secs(1)), None);
    }

    #[test]
    fn explicit_cancel() {
        let now = Instant::now();
        let mut scheduler = AiTurnScheduler::new(Duration::ZERO);
        scheduler.sync(&game(false), now);
        scheduler.cancel();
        assert_eq!(scheduler.poll(now), None);
    }
}
