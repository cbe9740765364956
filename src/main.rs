use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crackctl::args::AttackMode;
use crackctl::config::Config;
use crackctl::hash_types;
use crackctl::options::OptionStore;
use crackctl::process::{parse_status_line, StatusLine};
use crackctl::restore::{restore_path, RestoreDecoder};
use crackctl::results::read_results;
use crackctl::CrackSession;

#[derive(Debug, Parser)]
#[command(name = "crackctl", version, about = "Drive a password-cracking engine")]
struct Cli {
    /// Config file (default: <config dir>/crackctl/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile an attack and run the engine with it.
    Attack(AttackArgs),
    /// Decode a session checkpoint file.
    Restore {
        /// Session name; the file is <install_dir>/<session>.restore.
        #[arg(long, conflicts_with = "file")]
        session: Option<String>,
        /// Explicit checkpoint file.
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print cracked records from an output file.
    Results {
        file: PathBuf,
        /// Comma-separated field names.
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
        #[arg(long)]
        separator: Option<char>,
        #[arg(long)]
        json: bool,
    },
    /// Resolve a hash-type name or code.
    HashType { query: String },
}

#[derive(Debug, Args)]
struct AttackArgs {
    /// straight, combinator, brute-force, hybrid-dict-mask, hybrid-mask-dict or 0/1/3/6/7.
    mode: AttackMode,
    #[arg(long)]
    hash_file: PathBuf,
    /// Hash-type code or name, e.g. 1000 or NTLM.
    #[arg(long)]
    hash_type: Option<String>,
    #[arg(long = "dict")]
    dicts: Vec<PathBuf>,
    #[arg(long)]
    rules: Vec<PathBuf>,
    #[arg(long)]
    mask: Option<String>,
    #[arg(long)]
    mask_file: Option<PathBuf>,
    #[arg(long)]
    outfile: Option<PathBuf>,
    /// Any other option as name=value, e.g. --set gpu_temp_abort=85.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    sets: Vec<String>,
    /// Print the compiled command instead of running it.
    #[arg(long)]
    dry_run: bool,
    #[arg(long, default_value_t = 200)]
    poll_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Command::Attack(args) => run_attack(config, args),
        Command::Restore {
            session,
            file,
            json,
        } => {
            let path = match file {
                Some(path) => path,
                None => session_restore_file(&config, session.as_deref())?,
            };
            let snapshot = RestoreDecoder::new(config.restore.pointer_width)
                .read(&path)
                .with_context(|| format!("Failed to decode {}", path.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                for (name, value) in snapshot.fields() {
                    println!("{:<12} {}", name, value);
                }
            }
            Ok(())
        }
        Command::Results {
            file,
            fields,
            separator,
            json,
        } => {
            let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
            let separator = separator.unwrap_or(config.results.separator);
            let records: Vec<BTreeMap<String, String>> = read_results(&file, &fields, separator)
                .into_iter()
                .map(|record| record.into_iter().collect())
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    let line: Vec<String> =
                        record.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                    println!("{}", line.join(" "));
                }
            }
            Ok(())
        }
        Command::HashType { query } => {
            let code = hash_types::resolve(&query);
            println!("{} {}", code, hash_types::reverse_lookup(&code));
            Ok(())
        }
    }
}

/// Checkpoint path of `session`, or of the default session name.
fn session_restore_file(config: &Config, session: Option<&str>) -> Result<PathBuf> {
    let mut options = OptionStore::new();
    if let Some(name) = session {
        options.set("session", name)?;
    }
    Ok(restore_path(&config.engine.install_dir, options.session()))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

fn run_attack(config: Config, args: AttackArgs) -> Result<()> {
    let mut session = CrackSession::new(config);
    apply_options(&mut session, &args)?;

    if args.dry_run {
        let Some(job) = session.dry_run(args.mode) else {
            bail!("{} attack is missing a required input", args.mode);
        };
        println!("{}", job.command_line(session.supervisor().program()));
        return Ok(());
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&interrupted))
            .context("Failed to register signal handler")?;
    }

    if session
        .attack(args.mode)
        .context("Failed to start engine")?
        .is_none()
    {
        bail!("{} attack is missing a required input", args.mode);
    }

    let poll = Duration::from_millis(args.poll_ms);
    loop {
        drain_output(&session);
        if interrupted.load(Ordering::Relaxed) {
            tracing::info!("Interrupted, stopping engine");
            let outcome = session.stop();
            if outcome.is_abnormal() {
                bail!("Engine did not stop cleanly: {:?}", outcome);
            }
            break;
        }
        if !session.is_running() {
            drain_output(&session);
            break;
        }
        thread::sleep(poll);
    }

    match session.exit_status() {
        Some(status) => println!("{}", status),
        None => println!("Engine exit code unknown"),
    }
    Ok(())
}

fn apply_options(session: &mut CrackSession, args: &AttackArgs) -> Result<()> {
    let options = session.options_mut();
    options.set("hash_file", args.hash_file.clone())?;
    if let Some(hash_type) = &args.hash_type {
        options.set("hash_type", hash_type.as_str())?;
    }
    for dict in &args.dicts {
        options.add_dictionary(dict.clone());
    }
    for rules in &args.rules {
        options.add_rules_file(rules.clone());
    }
    if let Some(mask) = &args.mask {
        options.set("mask", mask.as_str())?;
    }
    if let Some(mask_file) = &args.mask_file {
        options.set("masks_file", mask_file.clone())?;
    }
    if let Some(outfile) = &args.outfile {
        options.set("outfile", outfile.clone())?;
    }
    for assignment in &args.sets {
        let Some((name, value)) = assignment.split_once('=') else {
            bail!("Expected NAME=VALUE, got '{}'", assignment);
        };
        options
            .set(name.trim(), value)
            .with_context(|| format!("Invalid option '{}'", assignment))?;
    }
    Ok(())
}

fn drain_output(session: &CrackSession) {
    while let Some(line) = session.stdout() {
        if let Some(StatusLine::Progress { percent, .. }) = parse_status_line(&line) {
            tracing::debug!("Progress {:.2}%", percent);
        }
        println!("{}", line);
    }
    while let Some(line) = session.stderr() {
        eprintln!("{}", line);
    }
}
