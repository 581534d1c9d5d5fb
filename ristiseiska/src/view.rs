use serde::Serialize;

use crate::{is_legal, Card, CardId, GameState, Phase, PileEnds, PlayerId, PlayerKind, Suit};

/// A read-only snapshot of a game, with everything that is public knowledge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub game_code: String,
    pub phase: Phase,
    pub current_seat: usize,
    pub seats: Vec<SeatView>,
    pub table: Vec<PileView>,
    pub penalty_holder: Option<PlayerId>,
    pub winner: Option<PlayerId>,
    /// Newest first.
    pub log: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
    pub card_count: usize,
    pub has_passed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PileView {
    pub suit: Suit,
    pub cards: Vec<Card>,
    pub ends: PileEnds,
}

/// What one player sees of their own hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HandView {
    pub seat: usize,
    pub cards: Vec<HandCardView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HandCardView {
    pub id: CardId,
    pub card: Card,
    /// Whether the card could be played on the current table.
    pub playable: bool,
}

impl GameState {
    pub fn view(&self) -> GameView {
        GameView {
            game_code: self.game_code.to_string(),
            phase: self.phase,
            current_seat: self.current_player_index,
            seats: self
                .players
                .iter()
                .map(|p| SeatView {
                    id: p.id,
                    name: p.name.clone(),
                    kind: p.kind,
                    card_count: p.hand.len(),
                    has_passed: p.has_passed,
                })
                .collect(),
            table: self
                .table
                .piles()
                .iter()
                .map(|pile| PileView {
                    suit: pile.suit,
                    cards: pile.cards().to_vec(),
                    ends: pile.ends(),
                })
                .collect(),
            penalty_holder: self.penalty_holder,
            winner: self.winner,
            log: self.log.lines(),
        }
    }

    pub fn hand_view(&self, seat: usize) -> Option<HandView> {
        let player = self.players.get(seat)?;
        Some(HandView {
            seat,
            cards: player
                .hand
                .iter()
                .map(|dealt| HandCardView {
                    id: dealt.id,
                    card: dealt.card,
                    playable: is_legal(dealt.card, &self.table),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::{create_game, GameCode, Phase};

    #[test]
    fn view_reflects_the_opened_table() {
        let mut rng = StdRng::seed_from_u64(9);
        let state = create_game(GameCode::from("VIEW01"), 2, 2, &mut rng)
            .unwrap()
            .deal_initial_cross_seven()
            .unwrap()
            .state;
        let view = state.view();
        assert_eq!(view.game_code, "VIEW01");
        assert_eq!(view.phase, Phase::Playing);
        assert_eq!(view.seats.iter().map(|s| s.card_count).sum::<usize>(), 51);
        assert_eq!(view.table.len(), 1);
        assert_eq!(view.log.len(), 1);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["table"][0]["suit"], "clubs");
        assert_eq!(json["table"][0]["ends"]["seven"]["rank"], 7);
        assert_eq!(json["seats"][2]["kind"], "ai");
    }

    #[test]
    fn hand_view_marks_playable_cards() {
        let mut rng = StdRng::seed_from_u64(9);
        let state = create_game(GameCode::from("VIEW02"), 1, 3, &mut rng).unwrap();
        let seat = state.current_player_index();
        let hand = state.hand_view(seat).unwrap();
        let playable: Vec<String> = hand
            .cards
            .iter()
            .filter(|c| c.playable)
            .map(|c| c.card.to_string())
            .collect();
        // Nothing is on the table yet, so exactly the sevens are playable
        assert!(playable.contains(&String::from("7♣")));
        assert!(playable.iter().all(|c| c.starts_with('7')));
        assert!(state.hand_view(4).is_none());
    }
}
