use itertools::Itertools;
use rand::rngs::StdRng;
use rand::Rng;
use ristiseiska::{GameCode, GameConfig, GameState, TurnOutcome, DECK_SIZE};
use tracing::debug;

/// Results of a series of games between computer players, indexed by seat.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MatchScore {
    pub names: Vec<String>,
    pub wins: Vec<usize>,
    pub penalties: Vec<usize>,
}

impl MatchScore {
    fn new(state: &GameState) -> Self {
        let seats = state.players().len();
        Self {
            names: state.players().iter().map(|p| p.name.clone()).collect(),
            wins: vec![0; seats],
            penalties: vec![0; seats],
        }
    }

    pub fn games(&self) -> usize {
        self.wins.iter().sum()
    }

    pub fn summary(&self) -> String {
        let games = self.games().max(1) as f32;
        let lines = (0..self.names.len())
            .map(|seat| {
                format!(
                    "- {} wins ({:5.1}%) by {}, {} pantti taken",
                    self.wins[seat],
                    self.wins[seat] as f32 / games * 100.0,
                    self.names[seat],
                    self.penalties[seat]
                )
            })
            .join("\n");
        format!("End result after {} games:\n{}", self.games(), lines)
    }
}

/// Plays `num_games` games in which every seat is a computer player.
pub fn simulate(config: &GameConfig, num_games: usize, rng: &mut StdRng) -> anyhow::Result<MatchScore> {
    let config = GameConfig {
        human_players: 0,
        ai_players: config.total_players(),
        ..config.clone()
    };
    let mut score: Option<MatchScore> = None;

    for game_idx in 0..num_games {
        let state = GameState::new(&config, GameCode::generate(rng), rng)?;
        let score = score.get_or_insert_with(|| MatchScore::new(&state));
        let mut policy = config.policy.build(rng.gen());

        let mut state = state.deal_initial_cross_seven()?.state;
        // Every full round somebody can play, so a game ends well before this
        let max_transitions = DECK_SIZE * (state.players().len() + 1);
        let mut transitions = 0;
        while !state.is_finished() {
            anyhow::ensure!(
                transitions < max_transitions,
                "Game {} did not finish after {} moves",
                game_idx,
                transitions
            );
            let transition = state.play_ai_turn(policy.as_mut())?;
            if let TurnOutcome::Penalty { player } = transition.outcome {
                if let Some(seat) = seat_of(&transition.state, player) {
                    score.penalties[seat] += 1;
                }
            }
            state = transition.state;
            transitions += 1;
        }

        let winner = state.winner().map(|p| p.id);
        if let Some(seat) = winner.and_then(|id| seat_of(&state, id)) {
            debug!(game_idx, winner = score.names[seat], transitions);
            score.wins[seat] += 1;
        }
    }

    Ok(score.unwrap_or_default())
}

fn seat_of(state: &GameState, id: ristiseiska::PlayerId) -> Option<usize> {
    state.players().iter().position(|p| p.id == id)
}
