//! btm-syntax command line host
//!
//! Prints a BTM source file to the terminal with syntax highlighting,
//! threading the tokenizer state line by line the way an editor host
//! would.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use btm_syntax::{
    gutter_width, HighlightError, LineState, ModeRegistry, Renderer, Result, Theme,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut file: Option<PathBuf> = None;
    let mut theme_file: Option<PathBuf> = None;
    let mut plain = false;
    let mut numbers = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--theme" | "-t" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| HighlightError::Message("--theme requires a file".into()))?;
                theme_file = Some(PathBuf::from(path));
            }
            "--plain" | "-p" => plain = true,
            "--line-numbers" | "-n" => numbers = true,
            arg if arg.starts_with('-') => {
                return Err(HighlightError::Message(format!("unknown option: {}", arg)));
            }
            arg => file = Some(PathBuf::from(arg)),
        }
        i += 1;
    }

    let file = file.ok_or_else(|| HighlightError::Message("no input file (try --help)".into()))?;

    let theme = match theme_file {
        Some(path) => Theme::load(&path)?,
        None => Theme::new(),
    };

    let registry = ModeRegistry::new();
    let mode_id = registry
        .detect_mode(&file)
        .ok_or_else(|| HighlightError::UnknownMode(file.display().to_string()))?;
    let mode = registry
        .get_mode(mode_id)
        .ok_or_else(|| HighlightError::UnknownMode(mode_id.to_string()))?;

    let contents = fs::read_to_string(&file)?;
    let renderer = Renderer::new(theme).with_color(!plain);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let line_count = contents.lines().count();
    let width = gutter_width(line_count);

    let mut state = LineState::default();
    for (idx, line) in contents.lines().enumerate() {
        if numbers {
            renderer.render_gutter(&mut out, idx + 1, width)?;
        }
        let result = mode.tokenize_line(line, state);
        renderer.render_line(&mut out, line, &result.tokens)?;
        writeln!(out)?;
        state = result.end_state;
    }
    out.flush()?;

    Ok(())
}

fn print_usage() {
    println!(
        "btm-syntax {} - syntax highlighting for BTM files",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: btm-syntax [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -t, --theme FILE    Load token styles from a TOML theme file");
    println!("  -p, --plain         Disable ANSI styling");
    println!("  -n, --line-numbers  Show a line number gutter");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
}

fn print_version() {
    println!("btm-syntax {}", env!("CARGO_PKG_VERSION"));
}
