use clap::{Args, Parser, Subcommand};
use integrity_check::{
    config, hash_file_with, set_hash_progress_callback, verify_integrity_with, verify_manifest_with,
    Algorithm, VerifyOptions,
};
use std::{io::IsTerminal, path::PathBuf, process};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "integrity-check")]
#[command(about = "Verify files against expected cryptographic digests", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare one file against an expected digest (default)
    Verify(VerifyArgs),

    /// Print the digest of a file
    Hash {
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
        algorithm: Algorithm,
    },

    /// Verify every file listed in a JSON manifest
    Check {
        #[arg(short, long)]
        manifest: PathBuf,

        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Args, Default)]
struct VerifyArgs {
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[arg(short, long)]
    expected: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Algorithm::Sha256)]
    algorithm: Algorithm,

    #[arg(long)]
    chunk_size: Option<usize>,

    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command.unwrap_or(Commands::Verify(VerifyArgs::default())) {
        Commands::Verify(args) => handle_verify(args),
        Commands::Hash { file, algorithm } => handle_hash(file, algorithm),
        Commands::Check { manifest, quiet } => handle_check(manifest, quiet),
    };

    match result {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn handle_verify(args: VerifyArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let file = args.file.unwrap_or_else(config::target_file);
    let expected = args.expected.unwrap_or_else(config::expected_digest);
    let opts = VerifyOptions {
        algorithm: args.algorithm,
        chunk_size: args.chunk_size.unwrap_or_else(config::chunk_size),
    };
    let name = opts.algorithm.display_name();

    if !args.quiet {
        println!("Expected {} hash of '{}': {}", name, file.display(), expected);
    }

    let v = verify_integrity_with(&file, &expected, &opts)?;

    if args.quiet {
        println!("{}", if v.passed { "passed" } else { "failed" });
    } else {
        println!("Calculated {} hash of '{}': {}", name, file.display(), v.calculated);
        if v.passed {
            println!("Integrity check passed!");
        } else {
            println!("Integrity check failed.");
        }
    }

    Ok(v.passed)
}

fn handle_hash(file: PathBuf, algorithm: Algorithm) -> Result<bool, Box<dyn std::error::Error>> {
    let opts = VerifyOptions {
        algorithm,
        chunk_size: config::chunk_size(),
    };
    let digest = hash_file_with(&file, &opts)?;
    println!("{}  {}", digest, file.display());
    Ok(true)
}

fn handle_check(manifest: PathBuf, quiet: bool) -> Result<bool, Box<dyn std::error::Error>> {
    if !quiet {
        set_hash_progress_callback(|done, total| {
            if total > 1_000_000 {
                let percent = (done as f64 / total as f64 * 100.0).round() as u64;
                eprint!("\rHashing: {:>3}%", percent);
                if done >= total {
                    eprintln!();
                }
            }
        });
    }

    let report = verify_manifest_with(&manifest, config::chunk_size())?;

    for entry in &report.entries {
        let v = &entry.verification;
        let status = if v.passed { "OK" } else { "FAILED" };
        println!("{}: {}", v.path.display(), status);
        if !quiet && !v.passed {
            println!("  expected:   {}", v.expected);
            println!("  calculated: {}", v.calculated);
        }
    }

    let total = report.entries.len();
    let failed = report.failed();
    let source = report.manifest_path.display();
    if failed == 0 {
        println!("{}: all {} files passed.", source, total);
    } else {
        println!("{}: {} of {} files failed.", source, failed, total);
    }

    Ok(report.all_passed())
}
