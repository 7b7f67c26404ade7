//! CLI hold'em dealing example.
//!
//! Run with `RUST_LOG=holdem_deal=debug` to see the engine's log lines.

use std::io::{self, Write};

use holdem_deal::{Card, HandEngine, HandOptions, HandSnapshot, Suit};

fn main() {
    env_logger::init();

    println!("Texas Hold'em dealer (enter = next stage, n = new hand, q = quit)");

    let burn = std::env::args().any(|arg| arg == "--burn");
    let options = HandOptions::default().with_burn_cards(burn);
    let engine = HandEngine::from_os_rng(options);

    print_table(&engine.current_state());

    loop {
        match prompt_line("> ").as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "n" | "new" => print_table(&engine.start_new_hand()),
            "" => {
                if engine.current_state().is_hand_complete {
                    println!("Hand complete. Press 'n' for a new hand.");
                    continue;
                }
                match engine.advance_stage() {
                    Ok(snapshot) => print_table(&snapshot),
                    Err(err) => {
                        println!("Deal error: {err}. Starting a new hand.");
                        print_table(&engine.start_new_hand());
                    }
                }
            }
            other => println!("Unknown command: {other}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &HandSnapshot) {
    println!(
        "\n{} | deck: {} cards remaining",
        snapshot.stage, snapshot.cards_remaining
    );
    println!("Opponent:  {}", format_cards(&snapshot.opponent));
    println!("Board:     {}", format_cards(&snapshot.community));
    println!("Player:    {}", format_cards(&snapshot.player));
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
