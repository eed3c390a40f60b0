//! CLI Twenty-One example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::interface::{self, Display};
use twentyone::{
    Card, Decision, Game, GameOptions, Hand, InputProvider, MatchOutcome, MatchSummary,
    RoundResult, Side, TableView,
};

const CARD_HEIGHT: usize = 7;
const MESSAGE_WIDTH: usize = 23;

/// Reads answers line by line. At end of input the player stays and
/// declines to continue.
struct Keyboard<R> {
    input: R,
}

struct Screen {
    player_name: &'static str,
}

impl<R: BufRead> InputProvider for Keyboard<R> {
    fn ask_hit_or_stay(&mut self, _view: &TableView<'_>) -> Decision {
        loop {
            let Some(line) = prompt_line(&mut self.input, "\nHit or stay? [h/s]: ") else {
                return Decision::Stay;
            };
            match line.parse() {
                Ok(decision) => return decision,
                Err(err) => println!("{err}, type h or s."),
            }
        }
    }

    fn ask_continue(&mut self) -> bool {
        loop {
            let Some(line) =
                prompt_line(&mut self.input, "Would you like to continue playing? [y/n]: ")
            else {
                return false;
            };
            match interface::parse_confirmation(&line) {
                Ok(answer) => return answer,
                Err(err) => println!("{err}, type y or n."),
            }
        }
    }
}

impl Display for Screen {
    fn render_table(&mut self, view: &TableView<'_>) {
        clear_screen();
        print_boxed(&format_wallet(view.dollars, view.winning_dollars), None);

        let dealer_score = view
            .dealer_score
            .map_or_else(|| "??".to_string(), |score| score.to_string());
        println!("Dealer: {dealer_score} points");
        print_hand(view.dealer_hand);

        println!("{}: {} points", self.player_name, view.player_score);
        print_hand(view.player_hand);
    }

    fn render_round_result(&mut self, result: &RoundResult) {
        let name = |side: Side| match side {
            Side::Player => self.player_name,
            Side::Dealer => "Dealer",
        };

        let mut message = result
            .winner
            .map_or_else(|| "It's a tie.".to_string(), |side| format!("{} won!", name(side)));
        if let Some(side) = result.busted {
            message.push_str(&format!(" {} busted.", name(side)));
        }

        print_boxed(&message, Some('🃟'));
    }

    fn render_match_end(&mut self, summary: &MatchSummary) {
        match summary.outcome {
            MatchOutcome::PlayerBroke => print_boxed("You're out of money!", Some('‼')),
            MatchOutcome::PlayerRich => print_boxed("Your pockets are full!", Some('‼')),
            MatchOutcome::Active | MatchOutcome::Quit => {}
        }
        if summary.outcome != MatchOutcome::Quit {
            wait_for_enter();
        }

        let verb = match summary.winnings {
            w if w > 0 => "won",
            w if w < 0 => "lost",
            _ => "broke even",
        };
        let amount = summary.winnings.unsigned_abs();
        let first_line = if amount == 0 {
            format!("{} {verb}.", self.player_name)
        } else {
            format!("{} {verb} ${amount}.", self.player_name)
        };
        let second_line = match summary.outcome {
            MatchOutcome::PlayerBroke => "You're broke!",
            MatchOutcome::PlayerRich => "You're rich!",
            MatchOutcome::Active | MatchOutcome::Quit => "",
        };

        print_banner(&[
            first_line.as_str(),
            second_line,
            "",
            "Thanks for playing 21!",
            "Goodbye.",
        ]);
    }
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut screen = Screen {
        player_name: options.player_name,
    };

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid options: {err}");
            return;
        }
    };

    print_banner(&["Welcome to 21.", "Good luck!"]);
    wait_for_enter();

    let mut keyboard = Keyboard {
        input: io::stdin().lock(),
    };
    if let Err(err) = game.play(&mut keyboard, &mut screen) {
        eprintln!("Round aborted: {err}");
    }
}

/// Returns the next trimmed, lowercased line, or `None` once input is
/// closed or unreadable.
fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

fn wait_for_enter() {
    let _ = prompt_line(&mut io::stdin().lock(), "Press ENTER to continue... ");
}

fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

fn format_wallet(dollars: usize, winning: usize) -> String {
    let slots: Vec<&str> = (0..winning)
        .map(|slot| if slot < dollars { "$" } else { "_" })
        .collect();
    format!("Wallet: {}", slots.join(" "))
}

fn print_boxed(message: &str, icon: Option<char>) {
    let inner = icon.map_or_else(|| message.to_string(), |icon| format!("{icon}  {message}"));
    let width = inner.chars().count();
    println!("╭──{}──╮", "─".repeat(width));
    println!("│  {inner}  │");
    println!("╰──{}──╯\n", "─".repeat(width));
}

fn print_banner(lines: &[&str]) {
    clear_screen();
    let rule = "─".repeat(MESSAGE_WIDTH);
    let blank = " ".repeat(MESSAGE_WIDTH);
    let art = [
        "╭───────╮",
        "│21     │",
        "│♥      │",
        "│       │",
        "│      ♥│",
        "│     21│",
        "╰───────╯",
    ];

    println!("╭─────────────{rule}──╮");
    for (row, face) in art.iter().enumerate() {
        let text = row
            .checked_sub(1)
            .and_then(|index| lines.get(index))
            .copied()
            .unwrap_or("");
        let text = if row == 0 || row == art.len() - 1 {
            blank.clone()
        } else {
            format!("{text:>width$}", width = MESSAGE_WIDTH)
        };
        println!("│  {face}  {text}  │");
    }
    println!("╰─────────────{rule}──╯\n");
}

fn print_hand(hand: &Hand) {
    let mut rows: [Vec<String>; CARD_HEIGHT] = Default::default();

    for card in hand.cards() {
        let (rank, suit) = card_face(card);
        rows[0].push("╭───────╮".to_string());
        rows[1].push(format!("│{rank:<2}     │"));
        rows[2].push(format!("│{suit}      │"));
        rows[3].push("│       │".to_string());
        rows[4].push(format!("│      {suit}│"));
        rows[5].push(format!("│     {rank:>2}│"));
        rows[6].push("╰───────╯".to_string());
    }

    for row in rows {
        println!("{}", row.join(" "));
    }
}

fn card_face(card: &Card) -> (&'static str, char) {
    if card.is_hidden() {
        ("?", ' ')
    } else {
        (card.rank().label(), card.suit().symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twentyone::{Dealer, Participant, Player};

    fn view_with<'a>(player: &'a Player, dealer: &'a Dealer) -> TableView<'a> {
        TableView {
            dealer_hand: dealer.hand(),
            player_hand: player.hand(),
            dealer_score: None,
            player_score: 0,
            dollars: player.dollars(),
            winning_dollars: player.winning_dollars(),
        }
    }

    #[test]
    fn closed_input_stays_and_quits() {
        let player = Player::new(&GameOptions::default());
        let dealer = Dealer::new(17);
        let mut keyboard = Keyboard { input: &b""[..] };

        assert_eq!(
            keyboard.ask_hit_or_stay(&view_with(&player, &dealer)),
            Decision::Stay
        );
        assert!(!keyboard.ask_continue());
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let player = Player::new(&GameOptions::default());
        let dealer = Dealer::new(17);
        let mut keyboard = Keyboard {
            input: &b"maybe\nH\nwhat\nyes\n"[..],
        };

        assert_eq!(
            keyboard.ask_hit_or_stay(&view_with(&player, &dealer)),
            Decision::Hit
        );
        assert!(keyboard.ask_continue());
        assert!(!keyboard.ask_continue());
    }
}
