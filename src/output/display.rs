//! Display functions for command results

use super::formatters::{count_noun, format_groups, format_millis, format_word_rows, letter_label};
use crate::commands::{BenchmarkResult, CheatResult, DecodeResult, SolveResult};
use crate::core::{LetterStatus, LetterStatuses};
use crate::solver::{MAX_RESULTS, Solver};
use crate::state::PuzzleState;
use colored::{ColoredString, Colorize};

/// Words per line in result listings
const WORDS_PER_ROW: usize = 6;
/// Results shown after each explorer command
const EXPLORE_PREVIEW: usize = 30;

fn colored_label(letter: char, status: LetterStatus) -> ColoredString {
    let label = letter_label(letter, status);
    if status.is_required() {
        label.bright_green().bold()
    } else if status.is_selected() {
        label.bright_blue().bold()
    } else {
        label.bright_black()
    }
}

fn print_words<S: AsRef<str>>(words: &[S]) {
    for row in format_word_rows(words, WORDS_PER_ROW) {
        println!("   {row}");
    }
}

/// Print all 26 letters coloured by status
pub fn print_board(statuses: &LetterStatuses) {
    let labels: Vec<String> = statuses
        .iter()
        .map(|(letter, status)| colored_label(letter, status).to_string())
        .collect();
    println!("   {}", labels.join(" "));
}

/// Print the result of a solve run
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Letters: {}", result.letters.bright_yellow().bold());
    if let Some(must_use) = &result.must_use {
        println!("Must use: {}", must_use.bright_green());
    }
    if let Some(cannot_use) = &result.cannot_use {
        println!("Cannot use: {}", cannot_use.red());
    }
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No matching words".red().bold());
        return;
    }

    println!();
    print_words(&result.words);

    if result.words.len() < result.total_matches {
        println!(
            "\n{}",
            format!(
                "Showing {} of {}",
                result.words.len(),
                count_noun(result.total_matches, "word")
            )
            .bright_black()
        );
    } else {
        println!(
            "\n{}",
            count_noun(result.total_matches, "word").green().bold()
        );
    }
}

/// Print word pairs
pub fn print_cheat_pairs(pairs: &[String]) {
    if pairs.is_empty() {
        println!("{}", "No two-word solutions".red().bold());
        return;
    }

    for pair in pairs {
        println!("   {}", pair.bright_white());
    }
    println!("{}", count_noun(pairs.len(), "pair").green().bold());
}

/// Print the result of a cheat run
pub fn print_cheat_result(result: &CheatResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Letters: {}", result.letters.bright_yellow().bold());
    if !result.groups.is_empty() {
        println!("Groups:  {}", result.groups);
    }
    println!("{}", "─".repeat(60).cyan());
    println!();
    print_cheat_pairs(&result.pairs);
}

/// Print a `#` token
pub fn print_share_token(token: &str) {
    println!("{}", token.bright_cyan());
}

fn print_state_summary(state: &PuzzleState) {
    print_board(&state.statuses);
    println!("   Groups: {}", format_groups(&state.group_list()));
    println!("   Sort:   {}", state.sort_order);
}

/// Print a decoded snapshot and its results
pub fn print_decode_result(result: &DecodeResult) {
    println!("\n{}", "─".repeat(60).cyan());
    print_state_summary(&result.state);
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No matching words".red().bold());
        return;
    }

    println!();
    print_words(&result.words);
    println!(
        "\n{}",
        format!(
            "{} (showing up to {MAX_RESULTS})",
            count_noun(result.total_matches, "word")
        )
        .green()
    );
}

/// Print the explorer view of a snapshot
pub fn print_explore_state(solver: &Solver<'_>, state: &PuzzleState) {
    let mut results = solver.filter(&state.statuses.constraints(&state.groups));
    let total = results.len();
    state.sort_order.sort(&mut results);

    println!();
    print_state_summary(state);
    println!(
        "   {}",
        count_noun(total, "matching word").bright_yellow().bold()
    );

    let preview = &results[..results.len().min(EXPLORE_PREVIEW)];
    print_words(preview);
    if total > preview.len() {
        println!("   {}", "...".bright_black());
    }
}

/// Print explorer commands
pub fn print_explore_help() {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LETTER BOXED EXPLORER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("  <letters> | cycle <letters>   cycle each letter's status");
    println!("  set <letter> <status>         excluded, available, required-start,");
    println!("                                required-anywhere or required-end");
    println!("  move <letter> <group#|new>    move a letter between groups");
    println!("  regroup                       rebuild groups from selected letters");
    println!("  groups [abc,def,...]          replace (or clear) the groups");
    println!("  sort <order>                  alphabetical-asc, alphabetical-desc,");
    println!("                                length-asc or length-desc");
    println!("  cheat                         list two-word solutions");
    println!("  share                         print a token for this view");
    println!("  load <token>                  restore a shared view");
    println!("  reset | help | quit");
    println!(
        "\n  Board: {}  {}  {}  {}  {}",
        colored_label('a', LetterStatus::Excluded),
        colored_label('a', LetterStatus::Available),
        colored_label('a', LetterStatus::RequiredStart),
        colored_label('a', LetterStatus::RequiredAnywhere),
        colored_label('a', LetterStatus::RequiredEnd),
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Seed:             {}", result.seed);
    println!("   Dictionary:       {}", count_noun(result.dictionary_size, "word"));
    println!("   Puzzles:          {}", result.puzzles.len());
    println!("   Results found:    {}", result.total_results);
    println!("   Pairs found:      {}", result.total_pairs);
    println!(
        "   Average filter:   {}",
        format_millis(result.average_filter).bright_yellow().bold()
    );
    println!("   Worst filter:     {}", format_millis(result.max_filter).yellow());
    println!(
        "   Average pairs:    {}",
        format_millis(result.average_pairs).bright_yellow().bold()
    );
    println!("   Worst pairs:      {}", format_millis(result.max_pairs).yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.max_filter.as_millis() < 500 {
        println!("\n{}", "✅ Filtering within 500 ms".green().bold());
    } else {
        println!("\n{}", "❌ Filtering exceeded 500 ms".red().bold());
    }
}
