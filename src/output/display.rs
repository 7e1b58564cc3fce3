//! Display functions for game state and command results

use super::formatters::{attempts_meter, create_progress_bar, letter_mask};
use crate::commands::SimulationResult;
use crate::core::{GuessOutcome, SessionSnapshot, Verdict};
use colored::Colorize;

/// Print the hint and attempts of a game
pub fn print_snapshot(snapshot: &SessionSnapshot) {
    let hint = &snapshot.hint;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "  {}   {}",
        letter_mask(hint).bright_yellow().bold(),
        format!("({})", hint.category()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("  {}", hint.description_text());
    println!("  {}", hint.associations_text());
    println!("  Letter hints: {}", hint.letters_text());
    println!("  {}", hint.length_text());
    println!(
        "  Attempts left: {} {}",
        snapshot.attempts_remaining,
        attempts_meter(snapshot.attempts_remaining, snapshot.max_attempts)
            .bright_green()
    );
    if !snapshot.last_message.is_empty() {
        println!("  {}", snapshot.last_message);
    }
    println!();
}

/// Print the response to a guess
pub fn print_outcome(outcome: &GuessOutcome) {
    let line = match &outcome.verdict {
        Verdict::Won => format!("🎉 {}", outcome.message).green().bold(),
        Verdict::Lost { .. } => format!("💀 {}", outcome.message).red().bold(),
        Verdict::Missed { .. } => outcome.message.yellow(),
        Verdict::Rejected(_) | Verdict::AlreadyOver => format!("❌ {}", outcome.message).red(),
    };
    println!("{line}");

    if !outcome.game_over {
        println!("   Attempts left: {}", outcome.attempts_remaining);
    }
    println!();
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult, strategy: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Wins / losses:    {} / {}",
        format!("{}", result.wins).green(),
        format!("{}", result.losses).red()
    );
    println!(
        "   Avg attempts:     {:.2} (wins only)",
        result.average_attempts
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.wins > 0 {
        println!("\n📈 {}", "Attempts used by winning games:".bright_cyan().bold());
        for (&attempts, &count) in &result.distribution {
            let pct = count as f64 / result.wins as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {attempts}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    println!("\n📏 {}", "By word length:".bright_cyan().bold());
    for (length, (wins, games)) in &result.wins_by_length {
        let pct = if *games > 0 {
            *wins as f64 / *games as f64 * 100.0
        } else {
            0.0
        };
        println!("   {length:2} letters: {wins:5}/{games:<5} ({pct:5.1}%)");
    }
}
