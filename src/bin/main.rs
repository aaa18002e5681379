use analyzer_core::input::{clean_ciphertext, parse_letter, read_ciphertext_file, SAMPLE_CIPHERTEXT};
use analyzer_core::reference_io::save_table;
use analyzer_core::report::{
    describe_settings, write_frequencies, write_groups, write_suggestions, AnalysisReport,
};
use analyzer_core::{AnalyzerConfig, CaseMode, CryptoAnalyzer};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{stdin, stdout, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cryptanalyzer")]
#[command(about = "Break monoalphabetic substitution ciphers on Cyrillic text, one letter at a time")]
#[command(version)]
struct Cli {
    /// Ciphertext given on the command line
    #[arg(long, global = true, conflicts_with_all = ["file", "sample"])]
    text: Option<String>,

    /// Read the ciphertext from a file
    #[arg(long, global = true, conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Use the bundled sample cryptogram
    #[arg(long, global = true)]
    sample: bool,

    /// Count upper- and lowercase forms of a letter together
    #[arg(long, global = true)]
    fold_case: bool,

    /// JSON reference frequency table to rank against (default: built-in Russian)
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Menu-driven session (default)
    Interactive,

    /// Print frequencies, suggestions and word groups once, then exit
    Analyze {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the active reference table as JSON, for editing and reuse with --table
    ExportTable {
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut cli = Cli::parse();

    let case_mode = if cli.fold_case { CaseMode::Folded } else { CaseMode::Sensitive };
    let config = AnalyzerConfig::load(case_mode, cli.table.as_deref())?;

    match cli.command.take().unwrap_or(Commands::Interactive) {
        Commands::ExportTable { path } => {
            save_table(&config.reference, &path)?;
            println!("Reference table written to {:?}", path);
        }
        Commands::Analyze { json } => {
            let ciphertext = obtain_ciphertext(&cli)?;
            let analyzer = CryptoAnalyzer::with_config(&ciphertext, config);
            let report = AnalysisReport::from_analyzer(&analyzer);
            if json {
                println!("{}", report.to_json()?);
            } else {
                report.write_text(&mut stdout().lock())?;
            }
        }
        Commands::Interactive => {
            let ciphertext = obtain_ciphertext(&cli)?;
            run_session(CryptoAnalyzer::with_config(&ciphertext, config))?;
        }
    }
    Ok(())
}

fn obtain_ciphertext(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        return read_ciphertext_file(path);
    }
    if cli.sample {
        return Ok(SAMPLE_CIPHERTEXT.to_string());
    }
    println!("Enter the cryptogram:");
    let line = read_line()?.unwrap_or_default();
    Ok(clean_ciphertext(&line).to_string())
}

/// One console line, or `None` at end of input.
fn read_line() -> Result<Option<String>> {
    let mut input = String::new();
    let read = stdin().read_line(&mut input).context("Failed to read from stdin")?;
    Ok(if read == 0 { None } else { Some(input) })
}

/// Prompts until a non-blank line arrives. `None` at end of input.
fn prompt_letter(prompt: &str) -> Result<Option<char>> {
    loop {
        print!("{} ", prompt);
        stdout().flush()?;
        let Some(line) = read_line()? else {
            return Ok(None);
        };
        match parse_letter(&line) {
            Ok(letter) => return Ok(Some(letter)),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

fn run_session(mut analyzer: CryptoAnalyzer) -> Result<()> {
    let mut status = String::new();
    loop {
        print_ui(&analyzer, &status)?;
        status.clear();

        let Some(input) = read_line()? else {
            break;
        };
        let mut out = stdout().lock();

        match input.trim() {
            "1" => {
                write_frequencies(&mut out, &analyzer.analyze_frequency())?;
                write_suggestions(&mut out, &analyzer.suggest_replacements())?;
                pause(out)?;
            }
            "2" => {
                write_groups(&mut out, "Words by length:", "letters", &analyzer.group_words_by_length())?;
                pause(out)?;
            }
            "3" => {
                let groups = analyzer.group_words_by_unknown_letters();
                write_groups(&mut out, "Words by unknown letters:", "unknown", &groups)?;
                pause(out)?;
            }
            "4" => {
                drop(out);
                let Some(from) = prompt_letter("Letter to replace:")? else {
                    break;
                };
                let Some(to) = prompt_letter("Replacement letter:")? else {
                    break;
                };
                analyzer.replace(from, to);
                status = format!("Replaced {} -> {}", from, to);
            }
            "5" => {
                if analyzer.history_depth() == 0 {
                    status = "Nothing to undo.".to_string();
                } else {
                    analyzer.undo();
                    status = "Last replacement undone.".to_string();
                }
            }
            "6" => {
                let before = analyzer.history_depth();
                analyzer.auto_replace();
                status = format!(
                    "Automatic replacement applied ({} rules).",
                    analyzer.history_depth() - before
                );
            }
            "7" | "exit" => break,
            _ => status = "Unknown choice, try again.".to_string(),
        }
    }
    println!("\nBye.");
    Ok(())
}

fn pause(mut out: std::io::StdoutLock<'_>) -> Result<()> {
    write!(out, "\nPress [Enter] to continue...")?;
    out.flush()?;
    drop(out);
    read_line()?;
    Ok(())
}

fn print_ui(analyzer: &CryptoAnalyzer, status: &str) -> Result<()> {
    let mut out = stdout().lock();
    if out.is_terminal() {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    writeln!(out, "{}", "Cyrillic Cryptanalyzer".bold())?;
    writeln!(out, "---------------------------------------------------------------")?;
    writeln!(out, "{}", describe_settings(analyzer.case_mode(), analyzer.reference().len()))?;
    writeln!(out, "Ciphertext: {}", analyzer.ciphertext())?;
    writeln!(out, "Current:    {}", analyzer.decrypted_text().green())?;

    if !analyzer.rules().is_empty() {
        let rules: Vec<String> = analyzer.rules().iter().map(|r| r.to_string()).collect();
        writeln!(out, "Rules:      {}", rules.join(", "))?;
    }
    if !status.is_empty() {
        writeln!(out, "\n{}", status.yellow())?;
    }

    writeln!(out, "\n1. Frequency analysis")?;
    writeln!(out, "2. Group words by length")?;
    writeln!(out, "3. Group words by unknown letters")?;
    writeln!(out, "4. Replace a letter")?;
    writeln!(out, "5. Undo last replacement")?;
    writeln!(out, "6. Automatic replacement")?;
    writeln!(out, "7. Exit")?;
    write!(out, "\n> ")?;
    out.flush()?;
    Ok(())
}
