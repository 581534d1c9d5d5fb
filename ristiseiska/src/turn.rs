use tracing::{debug, info};

use crate::{
    has_legal_move, is_boundary_card, is_legal, AiPolicy, Card, CardId, GameError, GameEvent,
    GameState, Phase, PlayerId, TurnTicket,
};

/// Summarizes the effect of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played {
        player: PlayerId,
        card: Card,
        /// The same player moves again.
        extra_turn: bool,
    },
    Penalty {
        player: PlayerId,
    },
    /// The card emptied the player's hand and the game is over.
    Won {
        player: PlayerId,
        card: Card,
    },
    /// Nothing needed to be done.
    Unchanged,
}

/// The state after a transition, together with what happened.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: GameState,
    pub outcome: TurnOutcome,
}

impl GameState {
    /// Plays a card from the hand of the player in `seat`.
    ///
    /// Aces and kings give an extra turn as long as the player can still
    /// play something afterwards.
    pub fn play_card(&self, seat: usize, card_id: CardId) -> Result<Transition, GameError> {
        self.check_turn(seat)?;
        let dealt = self.players[seat]
            .hand
            .get(card_id)
            .ok_or(GameError::CardNotInHand)?;
        if !is_legal(dealt.card, &self.table) {
            return Err(GameError::IllegalMove { card: dealt.card });
        }
        let mut state = self.clone();
        let outcome = state.apply_play(seat, card_id);
        Ok(Transition { state, outcome })
    }

    /// Passes the turn when the player in `seat` has nothing to play,
    /// which makes them the pantti holder.
    pub fn take_penalty(&self, seat: usize) -> Result<Transition, GameError> {
        self.check_turn(seat)?;
        if has_legal_move(&self.players[seat].hand, &self.table) {
            return Err(GameError::InvalidPass);
        }
        let mut state = self.clone();
        let player = &mut state.players[seat];
        player.has_passed = true;
        let id = player.id;
        let event = GameEvent::Passed {
            player: player.name.clone(),
        };
        debug!(player = %player.name, "Took a pantti");
        state.penalty_holder = Some(id);
        state.log.push(event);
        state.advance_turn();
        state.ticket.moves += 1;
        Ok(Transition {
            state,
            outcome: TurnOutcome::Penalty { player: id },
        })
    }

    /// Opens the table: whoever holds the seven of clubs plays it, and the
    /// player after them is next.
    ///
    /// Does nothing if cards have already been played, or nobody holds the card.
    pub fn deal_initial_cross_seven(&self) -> Result<Transition, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::GameOver);
        }
        let unchanged = || Transition {
            state: self.clone(),
            outcome: TurnOutcome::Unchanged,
        };
        if !self.table.is_empty() {
            return Ok(unchanged());
        }
        let Some(seat) = self.holder_of(Card::CROSS_SEVEN) else {
            return Ok(unchanged());
        };
        let mut state = self.clone();
        let card_id = state.players[seat]
            .hand
            .find(Card::CROSS_SEVEN)
            .map(|dealt| dealt.id)
            .ok_or(GameError::CardNotInHand)?;
        state.current_player_index = seat;
        let outcome = state.apply_play(seat, card_id);
        Ok(Transition { state, outcome })
    }

    /// Lets `policy` move for the active player. If it finds no card, the
    /// player takes a pantti.
    pub fn play_ai_turn(&self, policy: &mut dyn AiPolicy) -> Result<Transition, GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::GameOver);
        }
        let seat = self.current_player_index;
        match policy.choose_move(&self.players[seat].hand, &self.table) {
            Some(dealt) => self.play_card(seat, dealt.id),
            None => self.take_penalty(seat),
        }
    }

    /// Like [`Self::play_ai_turn`], but only if `ticket` still names the current turn.
    pub fn play_ai_turn_for(
        &self,
        ticket: TurnTicket,
        policy: &mut dyn AiPolicy,
    ) -> Result<Transition, GameError> {
        if ticket != self.ticket {
            return Err(GameError::StaleTurn);
        }
        self.play_ai_turn(policy)
    }

    fn check_turn(&self, seat: usize) -> Result<(), GameError> {
        if self.phase != Phase::Playing {
            return Err(GameError::GameOver);
        }
        if seat != self.current_player_index {
            return Err(GameError::NotYourTurn {
                expected: self.current_player_index,
                actual: seat,
            });
        }
        Ok(())
    }

    // Callers have checked that the card is in the hand and may be played.
    fn apply_play(&mut self, seat: usize, card_id: CardId) -> TurnOutcome {
        let player = &mut self.players[seat];
        let Some(dealt) = player.hand.take(card_id) else {
            return TurnOutcome::Unchanged;
        };
        let card = dealt.card;
        let id = player.id;
        let name = player.name.clone();
        player.has_passed = false;
        self.table.place(card);
        self.log.push(GameEvent::Played {
            player: name.clone(),
            card,
        });
        self.ticket.moves += 1;

        if self.players[seat].hand.is_empty() {
            info!(winner = %name, "Game won");
            self.phase = Phase::Finished;
            self.winner = Some(id);
            self.log.push(GameEvent::Won { player: name });
            return TurnOutcome::Won { player: id, card };
        }

        let extra_turn =
            is_boundary_card(card) && has_legal_move(&self.players[seat].hand, &self.table);
        if !extra_turn {
            self.advance_turn();
        }
        debug!(player = %name, %card, extra_turn, "Card played");
        TurnOutcome::Played {
            player: id,
            card,
            extra_turn,
        }
    }

    fn advance_turn(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
    }
}
