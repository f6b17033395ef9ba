//! CLI Indigo example (type 'exit' on your turn to quit).

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use indigo::{
    Card, Completion, Game, GameEvent, GameOptions, Input, Output, PlayerId, ScoreBoard, Suit,
};

fn main() {
    println!("Indigo Card Game");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    let mut terminal = Terminal { game: &game };

    match game.run(&mut Stdin, &mut terminal) {
        Ok(Completion::Finished(_) | Completion::Aborted) => {}
        Err(err) => println!("Game error: {err}"),
    }
}

struct Stdin;

impl Input for Stdin {
    fn play_first(&mut self) -> String {
        prompt_line("Play first?\n").unwrap_or_else(|| {
            println!("Game Over");
            std::process::exit(0)
        })
    }

    fn choose_card(&mut self, _hand: &[Card]) -> String {
        prompt_line("").unwrap_or_else(|| indigo::EXIT_SENTINEL.to_string())
    }
}

struct Terminal<'a> {
    game: &'a Game,
}

impl Terminal<'_> {
    fn name(&self, player: PlayerId) -> String {
        self.game.player_name(player)
    }

    fn print_score(&self, score: &ScoreBoard) {
        let (human, computer) = (PlayerId::Human, PlayerId::Computer);
        println!(
            "Score: {} {} - {} {}",
            self.name(human),
            score.points(human),
            self.name(computer),
            score.points(computer)
        );
        println!(
            "Cards: {} {} - {} {}",
            self.name(human),
            score.cards(human),
            self.name(computer),
            score.cards(computer)
        );
    }
}

impl Output for Terminal<'_> {
    fn event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::InitialTable(stake) => {
                println!("Initial cards on the table: {}", format_cards(stake));
            }
            GameEvent::Hand(hand) => {
                let indexed = hand
                    .iter()
                    .enumerate()
                    .map(|(index, card)| format!("{}){}", index + 1, format_card(card)))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("Cards in hand: {indexed}");
            }
            GameEvent::ComputerHand(hand) => println!("{}", format_cards(hand)),
            GameEvent::ChooseCard { count } => println!("Choose a card to play (1-{count}):"),
            GameEvent::InvalidSelection => {}
            GameEvent::CardPlayed { player, card } => {
                if *player == PlayerId::Computer {
                    println!("{} plays {}", self.name(*player), format_card(card));
                }
            }
            GameEvent::Capture(capture) => println!("{} wins cards", self.name(capture.player)),
            GameEvent::Score(score) => self.print_score(score),
            GameEvent::Table(summary) => println!("\n{summary}"),
            GameEvent::GameOver(result) => {
                if let Some(result) = result {
                    self.print_score(&result.score);
                }
                println!("Game Over");
            }
        }
    }
}

/// Returns `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
