//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostics;
use crate::dictionary::{CmuDictionary, DictionaryFormat, PronouncingDictionary};
use crate::form::{Analysis, FormClassifier};
use crate::poem::Poem;
use crate::profile::{LanguageProfile, ProfileKind};
use crate::stress::select_pronunciation;
use crate::template::best_match;
use crate::template::tables::{METRES, RHYMES};

use super::args::{Commands, DictArgs};
use super::detect::detect_format;
use super::paths::{config_file_path_with_override, default_dict_path, PersistentConfig};

/// Settings shared by every command of one invocation
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Stored configuration merged with global flags
    pub config: PersistentConfig,
    /// Config file given with `--config`
    pub config_path: Option<PathBuf>,
}

impl Session {
    /// Load the stored configuration and apply global flags.
    pub fn load(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let stored = PersistentConfig::load_from(config_path.as_deref())?;
        let overrides = PersistentConfig {
            verbose: verbose.then_some(true),
            ..PersistentConfig::default()
        };
        Ok(Self {
            config: stored.merge_with_cli(&overrides),
            config_path,
        })
    }

    /// Whether verbose output was requested on the command line or in the config.
    pub fn verbose(&self) -> bool {
        self.config.verbose.unwrap_or(false)
    }
}

/// Execute a CLI command
pub fn execute(command: Commands, session: &Session) -> Result<()> {
    match command {
        Commands::Form { poem, dict, json } => cmd_form(poem.as_deref(), &dict, json, session),
        Commands::Scan { poem, dict } => cmd_scan(poem.as_deref(), &dict, session),
        Commands::Rhyme { poem, dict } => cmd_rhyme(poem.as_deref(), &dict, session),
        Commands::Lookup { words, dict } => cmd_lookup(&words, &dict, session),
        Commands::Settings {
            set_dict,
            set_profile,
            set_verbose,
            reset,
        } => cmd_settings(set_dict, set_profile, set_verbose, reset, session),
    }
}

/// Dictionary and profile resolved for one command
struct Resources {
    dictionary: CmuDictionary,
    profile: Box<dyn LanguageProfile + Send + Sync>,
}

impl Resources {
    fn load(args: &DictArgs, session: &Session) -> Result<Self> {
        let overrides = PersistentConfig {
            dict_path: args.dict.clone(),
            profile: args.profile,
            verbose: None,
        };
        let config = session.config.merge_with_cli(&overrides);

        let path = resolve_dict_path(config.dict_path)?;
        let dictionary = load_dictionary(&path, args.format)?;
        let profile = config.profile.unwrap_or_default().build();
        Ok(Self {
            dictionary,
            profile,
        })
    }

    fn classifier(&self) -> FormClassifier<'_, CmuDictionary, dyn LanguageProfile + Send + Sync> {
        FormClassifier::new(&self.dictionary, self.profile.as_ref())
    }
}

/// Resolve the dictionary path: explicit, configured, or the default location
pub fn resolve_dict_path(dict_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = match dict_path {
        Some(path) => path,
        None => default_dict_path()?,
    };
    if !path.exists() {
        bail!(
            "Dictionary file does not exist: {} (use --dict or `poetics settings --set-dict`)",
            path.display()
        );
    }
    Ok(path)
}

/// Load dictionary from file, detecting its format unless given
pub fn load_dictionary(path: &Path, format: Option<DictionaryFormat>) -> Result<CmuDictionary> {
    let detection = detect_format(path, format)?;
    tracing::debug!(
        path = %path.display(),
        format = %detection.format,
        method = %detection.method,
        "dictionary format"
    );
    CmuDictionary::load(path, detection.format)
        .with_context(|| format!("Failed to load dictionary: {}", path.display()))
}

/// Read the poem from a file, or from stdin when no file is given
pub fn read_poem(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read poem: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read poem from stdin")?;
            Ok(text)
        }
    }
}

/// Form command
fn cmd_form(poem: Option<&Path>, args: &DictArgs, json: bool, session: &Session) -> Result<()> {
    let text = read_poem(poem)?;
    let resources = Resources::load(args, session)?;
    let analysis = resources.classifier().analyze_text(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    if session.verbose() {
        print_analysis(&analysis);
    }
    println!("{}", analysis.form.to_string().green().bold());

    Ok(())
}

fn print_analysis(analysis: &Analysis) {
    for pattern in &analysis.stress {
        println!("  {}", pattern.as_str().cyan());
    }
    println!();
    println!(
        "  Metre:  {}",
        analysis.metre_name().yellow()
    );
    println!(
        "  Rhyme:  {} ({})",
        analysis.rhyme_name().yellow(),
        analysis.rhyme_scheme.to_string().cyan()
    );
    println!(
        "  Stanza: {} ({})",
        analysis.stanza_name().yellow(),
        analysis.stanza_lengths.cyan()
    );
    print_unknown_words(&analysis.unknown_words);
    println!();
}

fn print_unknown_words(words: &[String]) {
    if !words.is_empty() {
        println!(
            "  {}: {}",
            "Not in dictionary".yellow().bold(),
            words.join(", ")
        );
    }
}

/// Scan command
fn cmd_scan(poem: Option<&Path>, args: &DictArgs, session: &Session) -> Result<()> {
    let text = read_poem(poem)?;
    let resources = Resources::load(args, session)?;
    let classifier = resources.classifier();
    let poem: Poem = resources.profile.tokenize(&text);

    let mut diagnostics = Diagnostics::new();
    let patterns = classifier.stress_analyzer().scan(&poem, &mut diagnostics);
    let width = patterns.iter().map(|p| p.len()).max().unwrap_or(0);

    for (line, pattern) in poem.lines().iter().zip(&patterns) {
        if line.is_stanza_break() {
            println!();
        } else {
            println!("{:<width$}  {}", pattern.as_str().cyan(), line, width = width);
        }
    }

    let scanned: Vec<_> = patterns.iter().filter(|p| !p.is_empty()).collect();
    let lines: Vec<&str> = scanned.iter().map(|p| p.as_str()).collect();
    if let Some(metre) = best_match(&lines[..], METRES) {
        println!();
        println!(
            "  Metre: {} (distance {})",
            metre.name.yellow(),
            metre.distance
        );
    }
    print_unknown_words(diagnostics.unknown_words());

    Ok(())
}

/// Rhyme command
fn cmd_rhyme(poem: Option<&Path>, args: &DictArgs, session: &Session) -> Result<()> {
    let text = read_poem(poem)?;
    let resources = Resources::load(args, session)?;
    let poem: Poem = resources.profile.tokenize(&text);
    let scheme = resources.classifier().rhyme_detector().detect(&poem);

    for (line, label) in poem.lines().iter().zip(scheme.labels()) {
        if line.is_stanza_break() {
            println!();
        } else {
            println!("{}  {}", label.to_char().to_string().cyan().bold(), line);
        }
    }

    if let Some(rhyme) = best_match(scheme.without_breaks().as_str(), RHYMES) {
        println!();
        println!(
            "  Rhyme: {} ({})",
            rhyme.name.yellow(),
            scheme.to_string().cyan()
        );
    }

    Ok(())
}

/// Lookup command
fn cmd_lookup(words: &[String], args: &DictArgs, session: &Session) -> Result<()> {
    let resources = Resources::load(args, session)?;
    let analyzer = resources.classifier().stress_analyzer();
    let mut diagnostics = Diagnostics::new();

    for word in words {
        let key = word.to_lowercase();
        println!("{}", word.bold());
        match resources.dictionary.pronunciations(&key) {
            Some(pronunciations) if !pronunciations.is_empty() => {
                let selected = select_pronunciation(pronunciations);
                for pronunciation in pronunciations {
                    let marker = if Some(pronunciation) == selected { "*" } else { " " };
                    println!(
                        "  {} {}  {}",
                        marker.green(),
                        pronunciation,
                        pronunciation.stress_pattern().cyan()
                    );
                }
            }
            _ => {
                let stress = analyzer.word_stress(word, &mut diagnostics);
                println!(
                    "  {}  {} (estimated)",
                    "not in dictionary".yellow(),
                    stress.cyan()
                );
            }
        }
    }

    Ok(())
}

/// Settings command
fn cmd_settings(
    set_dict: Option<PathBuf>,
    set_profile: Option<ProfileKind>,
    set_verbose: Option<bool>,
    reset: bool,
    session: &Session,
) -> Result<()> {
    let config_path = session.config_path.as_deref();

    if reset {
        let config = PersistentConfig::default();
        config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config, config_path);
        return Ok(());
    }

    let mut config = PersistentConfig::load_from(config_path)?;
    let mut changed = false;

    if let Some(dict) = set_dict {
        println!(
            "  Set default dictionary path: {}",
            dict.display().to_string().cyan()
        );
        config.dict_path = Some(dict);
        changed = true;
    }

    if let Some(profile) = set_profile {
        config.profile = Some(profile);
        println!("  Set default profile: {}", profile.to_string().green());
        changed = true;
    }

    if let Some(verbose) = set_verbose {
        config.verbose = Some(verbose);
        println!("  Set default verbosity: {}", verbose.to_string().green());
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
        println!();
    }

    print_config(&config, config_path);

    Ok(())
}

/// Print current configuration
fn print_config(config: &PersistentConfig, config_path: Option<&Path>) {
    println!("{}", "Current Configuration:".bold().underline());
    println!();

    let dict_path = match &config.dict_path {
        Some(path) => path.display().to_string(),
        None => default_dict_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "(auto)".to_string()),
    };
    println!("  Dictionary Path: {}", dict_path.cyan());
    println!(
        "  Profile:         {}",
        config.profile.unwrap_or_default().to_string().yellow()
    );
    println!(
        "  Verbose:         {}",
        if config.verbose.unwrap_or(false) {
            "enabled".green()
        } else {
            "disabled".red()
        }
    );

    if let Ok(path) = config_file_path_with_override(config_path) {
        println!();
        println!("  Config file: {}", path.display().to_string().cyan());
    }
}
