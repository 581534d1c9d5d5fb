use std::io::{BufRead, Write};
use std::time::Instant;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::Rng;
use ristiseiska::{
    visualize_hand, visualize_seats, visualize_table, AiPolicy, AiTurnScheduler, GameCode,
    GameConfig, GameError, GameState, PlayerKind, Transition, TurnOutcome,
};
use tracing::{debug, info};

use crate::command::{Command, COMMAND_HELP};

/// A game at the terminal: humans type their moves, computer players move
/// on their own after a pause.
pub struct Session {
    config: GameConfig,
    rng: StdRng,
    policy: Box<dyn AiPolicy>,
    scheduler: AiTurnScheduler,
    state: GameState,
    json: bool,
}

enum Flow {
    Continue,
    Quit,
}

impl Session {
    pub fn new(config: GameConfig, mut rng: StdRng, json: bool) -> anyhow::Result<Self> {
        let state = deal_new_game(&config, &mut rng)?;
        let policy = config.policy.build(rng.gen());
        Ok(Self {
            scheduler: AiTurnScheduler::new(config.ai_delay()),
            config,
            rng,
            policy,
            state,
            json,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn restart(&mut self) -> anyhow::Result<()> {
        self.scheduler.cancel();
        self.state = deal_new_game(&self.config, &mut self.rng)?;
        self.policy = self.config.policy.build(self.rng.gen());
        Ok(())
    }

    /// Runs until the input ends or a player quits.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()> {
        let mut buf = String::new();
        self.show_state(&mut output)?;

        loop {
            if self.state.is_finished() {
                if let Some(winner) = self.state.winner() {
                    writeln!(output, "{} won the game!", winner.name)?;
                }
                writeln!(output, "r to play again, q to quit")?;
            } else {
                self.scheduler.sync(&self.state, Instant::now());
                if let Some(wait) = self.scheduler.time_until_due(Instant::now()) {
                    std::thread::sleep(wait);
                    self.play_due_ai_turn(&mut output)?;
                    continue;
                }
                let player = self.state.current_player();
                writeln!(
                    output,
                    "{}, your hand: {}",
                    player.name,
                    visualize_hand(&player.hand, self.state.table())
                )?;
            }
            write!(output, "> ")?;
            output.flush()?;

            // Read the next line into buf
            buf.clear();
            if input.read_line(&mut buf)? == 0 {
                break Ok(());
            }
            let command = match buf.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "{}. {}", err, COMMAND_HELP)?;
                    continue;
                }
            };
            if let Flow::Quit = self.handle_command(command, &mut output)? {
                break Ok(());
            }
        }
    }

    fn handle_command<W: Write>(&mut self, command: Command, output: &mut W) -> anyhow::Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Restart => {
                self.restart()?;
                info!(game = %self.state.game_code(), "Restarted");
                self.show_state(output)?;
            }
            _ if self.state.is_finished() => writeln!(output, "The game is over")?,
            Command::Hint => {
                let moves = self.state.current_legal_moves();
                if moves.is_empty() {
                    writeln!(output, "Nothing to play, pass with p")?;
                } else {
                    writeln!(output, "You can play {}", moves.iter().map(|d| d.card).join(", "))?;
                }
            }
            Command::Pass => {
                let seat = self.state.current_player_index();
                let result = self.state.take_penalty(seat);
                self.apply(result, output)?;
            }
            Command::Play(card) => {
                let seat = self.state.current_player_index();
                match self.state.current_player().hand.find(card) {
                    Some(dealt) => {
                        let result = self.state.play_card(seat, dealt.id);
                        self.apply(result, output)?;
                    }
                    None => writeln!(output, "You don't have {}", card)?,
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn play_due_ai_turn<W: Write>(&mut self, output: &mut W) -> anyhow::Result<()> {
        let Some(ticket) = self.scheduler.poll(Instant::now()) else {
            return Ok(());
        };
        let result = self.state.play_ai_turn_for(ticket, self.policy.as_mut());
        if let Err(GameError::StaleTurn) = result {
            debug!(?ticket, "Dropping AI move for an old turn");
            return Ok(());
        }
        self.apply(result, output)
    }

    /// Takes over the new state, or reports why the move was rejected.
    fn apply<W: Write>(
        &mut self,
        result: Result<Transition, GameError>,
        output: &mut W,
    ) -> anyhow::Result<()> {
        match result {
            Ok(Transition { state, outcome }) => {
                self.state = state;
                let new_entries = match outcome {
                    TurnOutcome::Won { .. } => 2,
                    TurnOutcome::Played { .. } | TurnOutcome::Penalty { .. } => 1,
                    TurnOutcome::Unchanged => 0,
                };
                let mut entries = self.state.log().entries().take(new_entries).collect_vec();
                entries.reverse();
                for entry in entries {
                    writeln!(output, "{}", entry)?;
                }
                if let TurnOutcome::Played {
                    extra_turn: true, ..
                } = outcome
                {
                    writeln!(output, "{} plays again", self.state.current_player().name)?;
                }
                self.show_state(output)
            }
            Err(err) => {
                writeln!(output, "{}", err)?;
                Ok(())
            }
        }
    }

    fn show_state<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer(&mut *output, &self.state.view())?;
            writeln!(output)?;
            return Ok(());
        }
        // Only redraw the board when a human is about to move or the game is over
        if self.state.current_player().kind == PlayerKind::Ai && !self.state.is_finished() {
            return Ok(());
        }
        writeln!(output, "\nGame {}", self.state.game_code())?;
        writeln!(output, "{}", visualize_table(self.state.table()))?;
        writeln!(output, "{}", visualize_seats(&self.state))?;
        Ok(())
    }
}

fn deal_new_game(config: &GameConfig, rng: &mut StdRng) -> anyhow::Result<GameState> {
    let code = GameCode::generate(rng);
    let state = GameState::new(config, code, rng)?;
    info!(game = %state.game_code(), players = state.players().len(), "New game");
    Ok(state.deal_initial_cross_seven()?.state)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn config(human_players: usize, ai_players: usize) -> GameConfig {
        GameConfig {
            human_players,
            ai_players,
            ai_delay_ms: 0,
            ..GameConfig::default()
        }
    }

    #[test]
    fn table_is_opened_on_start() {
        let session = Session::new(config(1, 3), StdRng::seed_from_u64(1), false).unwrap();
        assert_eq!(session.state().table().len(), 1);
        assert_eq!(session.state().card_counts().iter().sum::<usize>(), 51);
    }

    #[test]
    fn computer_players_finish_on_their_own() {
        let mut session = Session::new(config(0, 3), StdRng::seed_from_u64(2), false).unwrap();
        let mut output = Vec::new();
        session.run("q\n".as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(session.state().is_finished());
        assert!(output.contains("won the game!"));
    }

    #[test]
    fn bad_input_is_not_fatal() {
        let mut session = Session::new(config(2, 0), StdRng::seed_from_u64(3), false).unwrap();
        let before = session.state().clone();
        let mut output = Vec::new();
        session
            .run("zz\nh\n7x\n".as_bytes(), &mut output)
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains(COMMAND_HELP));
        assert!(output.contains("You can play") || output.contains("Nothing to play"));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn humans_play_through_commands() {
        let mut session = Session::new(config(2, 0), StdRng::seed_from_u64(4), false).unwrap();
        let seat = session.state().current_player_index();
        let input = match session.state().current_legal_moves().first() {
            Some(dealt) => format!("{}\n", dealt.card),
            None => String::from("p\n"),
        };
        session.run(input.as_bytes(), Vec::new()).unwrap();
        let moved = session.state().current_player_index() != seat
            || session.state().ticket().moves > 1;
        assert!(moved);
    }

    #[test]
    fn restart_deals_again() {
        let mut session = Session::new(config(2, 0), StdRng::seed_from_u64(5), true).unwrap();
        let code = session.state().game_code().clone();
        let mut output = Vec::new();
        session.run("r\nq\n".as_bytes(), &mut output).unwrap();
        assert_ne!(session.state().game_code(), &code);
        let first_line = String::from_utf8(output).unwrap();
        let view: serde_json::Value =
            serde_json::from_str(first_line.lines().next().unwrap()).unwrap();
        assert_eq!(view["phase"], "playing");
    }
}
