use crate::dealer::Deal;
use crate::error::PlayError;
use crate::event::{GameEvent, Output};
use crate::input::{Input, Selection, parse_play_first, parse_selection};
use crate::player::PlayerId;
use crate::result::Completion;

use super::{Game, Seat, Step, Turn, TurnOutcome};

impl Game {
    /// Plays a whole game against input and output collaborators.
    ///
    /// If no starting player is configured, the input is asked whether the
    /// human plays first. Invalid answers are asked again. The exit sentinel
    /// on a human turn ends the game at once with [`Completion::Aborted`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been started.
    pub fn run<I, O>(&self, input: &mut I, output: &mut O) -> Result<Completion, PlayError>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        let first = match self.options.first_player {
            Some(first) => first,
            None => Self::ask_first_player(input),
        };
        self.start(first)?;

        loop {
            if self.current_seat() == Some(Seat::Player(PlayerId::Computer)) {
                output.event(&GameEvent::ComputerHand(self.hand(PlayerId::Computer)));
            }

            match self.advance()? {
                Step::Dealt(deal) => {
                    if let Deal::NewGame { stake } = deal {
                        output.event(&GameEvent::InitialTable(stake));
                    }
                    output.event(&GameEvent::Table(self.table_summary()));
                }
                Step::Played(turn) => self.report_turn(&turn, output),
                Step::AwaitingHuman => match self.take_human_turn(input, output)? {
                    TurnOutcome::Continued(turn) => self.report_turn(&turn, output),
                    TurnOutcome::Aborted => {
                        output.event(&GameEvent::GameOver(None));
                        return Ok(Completion::Aborted);
                    }
                },
                Step::Finished(result) => {
                    output.event(&GameEvent::GameOver(Some(result)));
                    return Ok(Completion::Finished(result));
                }
            }
        }
    }

    /// Takes the human player's turn, asking the input for a card until it
    /// gives a usable answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or it is not the
    /// human player's turn.
    pub fn take_human_turn<I, O>(
        &self,
        input: &mut I,
        output: &mut O,
    ) -> Result<TurnOutcome, PlayError>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        self.ensure_in_progress()?;
        if self.next_seat() != Seat::Player(PlayerId::Human) {
            return Err(PlayError::NotYourTurn);
        }

        let hand = self.hand(PlayerId::Human);
        output.event(&GameEvent::Hand(hand.clone()));

        loop {
            output.event(&GameEvent::ChooseCard { count: hand.len() });

            match parse_selection(&input.choose_card(&hand), hand.len()) {
                Ok(Selection::Card(index)) => {
                    return self.play_human(index).map(TurnOutcome::Continued);
                }
                Ok(Selection::Exit) => {
                    self.abort()?;
                    return Ok(TurnOutcome::Aborted);
                }
                Err(err) => {
                    log::debug!("rejected card choice: {err}");
                    output.event(&GameEvent::InvalidSelection);
                }
            }
        }
    }

    fn ask_first_player<I: Input + ?Sized>(input: &mut I) -> PlayerId {
        loop {
            match parse_play_first(&input.play_first()) {
                Ok(true) => return PlayerId::Human,
                Ok(false) => return PlayerId::Computer,
                Err(err) => log::debug!("rejected answer: {err}"),
            }
        }
    }

    fn report_turn<O: Output + ?Sized>(&self, turn: &Turn, output: &mut O) {
        output.event(&GameEvent::CardPlayed {
            player: turn.player,
            card: turn.card,
        });

        if let Some(capture) = turn.capture {
            output.event(&GameEvent::Capture(capture));
            output.event(&GameEvent::Score(self.scoreboard()));
        }

        output.event(&GameEvent::Table(turn.table));
    }
}
