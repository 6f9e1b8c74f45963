//! Wordle Advisor CLI
//!
//! Interactive command-line front end. It owns the round history and hands
//! it to the engine on every command.

use clap::{Parser, Subcommand};
use std::error::Error as _;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use wordle_advisor::{
    load_dictionary, most_likely, Advisor, Dictionary, History, HistoryEntry, Word, DEFAULT_TOP_K,
    MAX_ROUNDS,
};

const HELP_TEXT: &str = include_str!("text/help.txt");

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Word list, one word per line (defaults to the built-in list)
    #[clap(short, long)]
    dictionary: Option<PathBuf>,

    /// How many suggestions `top` shows by default
    #[clap(short, long, default_value_t = DEFAULT_TOP_K)]
    top: usize,

    /// Worker threads for filtering and ranking
    #[clap(long)]
    threads: Option<usize>,

    /// Log debug output to stderr
    #[clap(short, long)]
    verbose: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the best opening guesses and exit
    Suggest,
    /// Play against a known answer and print each round
    Solve { target: String },
    /// Start the interactive prompt (the default)
    Interactive,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                let _ = io::stdout().flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            let _ = io::stdout().flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn print_top(advisor: &Advisor, history: &History, k: usize) {
    let spinner = Spinner::new("Ranking...");
    let candidates = advisor.candidates(history);
    let remaining = candidates.len();
    let top = Advisor::rank_candidates(&candidates, k);
    spinner.stop();

    if top.is_empty() {
        println!("No possible words remaining. Use 'undo' or 'reset'.");
        return;
    }

    println!();
    println!("Top {} guesses ({} possible):", top.len(), remaining);
    println!("{:>4} {:>8} {:>8} {:>12}", "#", "Word", "Bits", "Exp. Remain");
    println!("{}", "-".repeat(36));
    for (i, suggestion) in top.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1}",
            i + 1,
            suggestion.word.to_uppercase(),
            suggestion.bits,
            suggestion.expected_remaining(remaining)
        );
    }
    println!();
}

fn print_solve(advisor: &Advisor, target: &Word) {
    println!();
    println!("Solving for: {}", target.to_uppercase());
    println!();

    let rounds = advisor.play(target, MAX_ROUNDS);
    for (i, entry) in rounds.iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            entry.guess.to_uppercase(),
            entry.feedback
        );
    }

    println!();
    if rounds.is_solved() {
        println!("✓ Solved in {} guesses!", rounds.len());
    } else if !advisor.dictionary().contains(target) {
        println!("✗ {} is not in the dictionary.", target.to_uppercase());
    } else {
        println!("✗ Failed to solve within {} guesses.", MAX_ROUNDS);
    }
    println!();
}

fn run_interactive(advisor: &Advisor, default_top: usize) -> io::Result<()> {
    println!("Loaded {} words.", advisor.dictionary().len());
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let mut history = History::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", HELP_TEXT);
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" | "best" => {
                let candidates = advisor.candidates(&history);
                let remaining = candidates.len();
                match Advisor::rank_candidates(&candidates, 1).into_iter().next() {
                    Some(best) => {
                        println!();
                        println!("Best guess: {}", best.word.to_uppercase());
                        println!("  Entropy: {:.3} bits", best.bits);
                        println!(
                            "  Expected remaining: {:.1} words",
                            best.expected_remaining(remaining)
                        );
                        if let Some(pick) = most_likely(candidates.words()) {
                            println!("  Most likely answer: {}", pick.to_uppercase());
                        }
                        println!();
                        println!("Remaining possibilities: {}", remaining);
                        println!();
                    }
                    None => {
                        println!("No possible words remaining. Use 'undo' or 'reset'.");
                    }
                }
            }
            "top" | "t" => {
                let k = parts
                    .get(1)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(default_top);
                print_top(advisor, &history, k);
            }
            "feedback" | "f" | "fb" => {
                if parts.len() < 3 {
                    println!("Usage: feedback <word> <pattern>");
                    println!("Example: feedback crane gybbb");
                    continue;
                }

                let entry = match HistoryEntry::parse(parts[1], parts[2]) {
                    Ok(entry) => entry,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };

                let prev_count = advisor.candidates(&history).len();
                history.push(entry);
                let candidates = advisor.candidates(&history);

                println!();
                println!("Guess: {}", entry.guess.to_uppercase());
                println!("Feedback: {}", entry.feedback);
                println!(
                    "Eliminated {} words ({} → {})",
                    prev_count - candidates.len(),
                    prev_count,
                    candidates.len()
                );

                if entry.feedback.is_win() {
                    println!();
                    println!("🎉 Solved!");
                } else if candidates.is_empty() {
                    println!();
                    println!("⚠️  No words match this feedback.");
                    println!("Check the pattern, then 'undo' to take it back.");
                } else if candidates.len() <= 10 {
                    println!();
                    println!(
                        "Remaining words: {:?}",
                        candidates.iter().map(|w| w.to_uppercase()).collect::<Vec<_>>()
                    );
                }
                println!();
            }
            "undo" | "u" => match history.undo() {
                Some(entry) => println!(
                    "Took back {} {}. {} words possible.",
                    entry.guess.to_uppercase(),
                    entry.feedback,
                    advisor.candidates(&history).len()
                ),
                None => println!("Nothing to undo."),
            },
            "remaining" | "r" | "left" => {
                let remaining = advisor.candidates(&history);
                println!();
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 20 {
                    for (i, word) in remaining.iter().enumerate() {
                        if i > 0 && i % 10 == 0 {
                            println!();
                        }
                        print!("{:>8}", word.to_uppercase());
                    }
                    println!();
                }
                println!();
            }
            "solve" => {
                if parts.len() < 2 {
                    println!("Usage: solve <target_word>");
                    continue;
                }
                match Word::parse(parts[1]) {
                    Ok(target) => print_solve(advisor, &target),
                    Err(err) => println!("{}", err),
                }
            }
            "reset" => {
                history.clear();
                println!(
                    "Reset to initial state. {} words available.",
                    advisor.dictionary().len()
                );
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(threads) = args.threads {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            log::warn!("keeping default thread pool: {}", err);
        }
    }

    let dictionary = match &args.dictionary {
        Some(path) => Dictionary::load(path)?,
        None => load_dictionary(),
    };
    if dictionary.is_empty() {
        return Err("dictionary contains no five-letter words".into());
    }
    let advisor = Advisor::new(dictionary);

    match args.command.unwrap_or(Command::Interactive) {
        Command::Suggest => {
            let history = History::new();
            let spinner = Spinner::new("Ranking opening guesses...");
            let top = advisor.suggestions(&history, args.top);
            spinner.stop();
            for suggestion in top {
                println!("{} {:.3} bits", suggestion.word.to_uppercase(), suggestion.bits);
            }
        }
        Command::Solve { target } => {
            let target = Word::parse(&target)?;
            print_solve(&advisor, &target);
        }
        Command::Interactive => run_interactive(&advisor, args.top)?,
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(args) {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}
