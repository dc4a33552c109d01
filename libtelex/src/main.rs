use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use libtelex::{
    DefaultSpellChecker, Engine, EngineResult, MarkStyle, SpellChecker, SyllableParser,
    TelexConfig, KEY_DELETE,
};
use libvietnamese_core::spelling::canonical_nucleus;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "libtelex")]
#[command(about = "Vietnamese Telex / Simple Telex composition engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input method id (telex, simple-telex)
    #[arg(long, global = true)]
    method: Option<String>,

    /// Enable cc→ch, gg→gi, kk→kh, ngg→ngh, nn→ng, pp→ph, qq→qu, tt→th
    #[arg(long, global = true)]
    quick_telex: bool,

    /// Disable syllable validation
    #[arg(long, global = true)]
    no_spell_check: bool,

    /// Keep invalid words instead of restoring the typed keys
    #[arg(long, global = true)]
    no_restore: bool,

    /// Modern tone placement (hoà, thuý)
    #[arg(long, global = true)]
    modern: bool,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive REPL mode: each line is typed through the engine
    Repl,
    /// Type a keystroke string and print the resulting text
    Type {
        /// Raw keystrokes, e.g. "tieengs Vieetj"
        input: String,
        /// Print the decision for every key
        #[arg(long)]
        trace: bool,
    },
    /// Spell-check a composed word
    Check {
        word: String,
    },
    /// Show the syllable structure of a composed word
    Parse {
        word: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

fn build_engine(cli: &Cli) -> anyhow::Result<Engine> {
    let mut config = match &cli.config {
        Some(path) => TelexConfig::load_toml(path)?,
        None => TelexConfig::default(),
    };
    if let Some(method) = &cli.method {
        config.input_method = method.clone();
    }
    if cli.quick_telex {
        config.quick_telex_enabled = true;
    }
    if cli.no_spell_check {
        config.base_mut().spell_check_enabled = false;
    }
    if cli.no_restore {
        config.base_mut().restore_if_wrong_spelling = false;
    }
    if cli.modern {
        config.base_mut().modern_orthography = true;
    }
    Ok(Engine::from_config(&config)?)
}

fn describe(result: &EngineResult) -> String {
    match result {
        EngineResult::PassThrough => "pass".to_string(),
        EngineResult::Suppress => "suppress".to_string(),
        EngineResult::Replace {
            backspace_count,
            replacement,
        } => format!("replace ⌫{} '{}'", backspace_count, replacement),
    }
}

fn run_type(engine: &mut Engine, input: &str, trace: bool) {
    if !trace {
        println!("{}", engine.process_str(input));
        return;
    }
    for ch in input.chars() {
        let key_code = if matches!(ch, '\u{8}' | '\u{7f}') { KEY_DELETE } else { 0 };
        let result = engine.process_key(key_code, Some(ch), 0);
        println!(
            "{:?} → {:<24} word='{}'",
            ch,
            describe(&result),
            engine.buffer().render()
        );
    }
}

fn run_repl(engine: &mut Engine) {
    let style = match engine.mark_style() {
        MarkStyle::Traditional => "traditional",
        MarkStyle::Modern => "modern",
    };
    println!(
        "libtelex demo CLI ({}, {} tone placement): type keystrokes and press Enter",
        engine.input_method().name(),
        style
    );
    println!("Example: tieengs Vieetj");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        match line {
            Ok(raw) => {
                let output = engine.process_str(&raw);
                engine.reset();
                println!("  → {}", output);
                let _ = stdout.flush();
            }
            Err(e) => {
                eprintln!("error reading stdin: {}", e);
                break;
            }
        }
    }
}

fn run_check(word: &str) {
    println!("{}: {}", word, DefaultSpellChecker::new().check(word));
}

fn run_parse(word: &str, json: bool) -> anyhow::Result<()> {
    let Some(parts) = SyllableParser::parse(word) else {
        println!("(empty)");
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
        return Ok(());
    }
    println!("initial: '{}'", parts.initial_consonant);
    println!(
        "nucleus: '{}' ({})",
        parts.vowel_nucleus,
        canonical_nucleus(&parts.vowel_nucleus)
    );
    println!("final:   '{}'", parts.final_consonant);
    match parts.tone {
        Some(tone) => println!("tone:    {:?}", tone),
        None => println!("tone:    none"),
    }
    for (pos, modifier) in &parts.vowel_modifiers {
        println!("  [{}] {:?}", pos, modifier);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        None | Some(Commands::Repl) => {
            let mut engine = build_engine(&cli)?;
            run_repl(&mut engine);
        }
        Some(Commands::Type { input, trace }) => {
            let mut engine = build_engine(&cli)?;
            run_type(&mut engine, input, *trace);
        }
        Some(Commands::Check { word }) => run_check(word),
        Some(Commands::Parse { word, json }) => run_parse(word, *json)?,
    }
    Ok(())
}
