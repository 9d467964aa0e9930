//! dhkey
//!
//! Generate Diffie-Hellman public keys, merge them into shared secrets, or replay a
//! recorded exchange against the selected group.
//!
//! ## Usage
//!
//! ```bash
//! dhkey --mode generate --secret 0x1f2e3d --output keys/alice.pub
//! dhkey --mode merge --secret 0x1f2e3d --public-file keys/bob.pub
//! dhkey --mode test --group rfc5114-1024
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use num_bigint::BigUint;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use modp_dh::files;
use modp_dh::parse::{parse_biguint, to_hex};
use modp_dh::{
    execute, ErrorKind, Mode, Outcome, Request, Result, VerificationReport, WellKnownGroup,
};

/// Generate public and shared keys with the Diffie-Hellman algorithm
#[derive(Parser, Debug)]
#[command(name = "dhkey")]
#[command(version)]
#[command(about = "Diffie-Hellman key generation over MODP groups", long_about = None)]
struct Args {
    /// Generate a public key, compute a shared private key, or test the program
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Well-known group providing the default prime, root and test vectors
    #[arg(short, long, value_enum, default_value_t = WellKnownGroup::default())]
    group: WellKnownGroup,

    /// Directory holding prime.txt and generator.txt, used instead of --group. Test mode
    /// also reads the test_*.txt vectors from it unless --vectors-dir is given
    #[arg(long, conflicts_with = "group")]
    group_dir: Option<PathBuf>,

    /// Prime (hex or decimal) used for key generation
    #[arg(long, value_parser = parse_biguint)]
    prime: Option<BigUint>,

    /// Primitive root (hex or decimal) used for key generation
    #[arg(long, value_parser = parse_biguint)]
    root: Option<BigUint>,

    /// Private key (hex or decimal)
    #[arg(short, long, value_parser = parse_biguint)]
    secret: Option<BigUint>,

    /// Public key (hex or decimal) to be merged with the private key
    #[arg(short, long, value_parser = parse_biguint)]
    public: Option<BigUint>,

    /// File holding the public key to be merged, as written by --output
    #[arg(long, conflicts_with = "public")]
    public_file: Option<PathBuf>,

    /// Directory holding test_xA.txt, test_yA.txt, test_xB.txt, test_yB.txt and test_Z.txt
    #[arg(long)]
    vectors_dir: Option<PathBuf>,

    /// File to which the derived key is written (standard output if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Display the parameters used even when writing to a file
    #[arg(short, long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(err.kind()))
        }
    }
}

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Format => 2,
        ErrorKind::InvalidParameter => 3,
        ErrorKind::Range => 4,
        ErrorKind::MissingInput => 5,
        ErrorKind::Io => 6,
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let (prime, root) = match &args.group_dir {
        Some(dir) => files::read_group_dir(dir)?,
        None => {
            let params = args.group.parameters();
            (params.prime().clone(), params.generator().clone())
        }
    };

    let peer_public = match &args.public_file {
        Some(path) => Some(files::read_hex_file(path)?),
        None => args.public.clone(),
    };

    let vectors = match (args.mode, &args.vectors_dir, &args.group_dir) {
        (Mode::Test, Some(dir), _) | (Mode::Test, None, Some(dir)) => {
            Some(files::read_test_vectors_dir(dir)?)
        }
        (Mode::Test, None, None) => args.group.test_vectors().cloned(),
        _ => None,
    };
    let vector_group = match args.mode {
        Mode::Test => Some((prime.clone(), root.clone())),
        _ => None,
    };

    let request = Request {
        mode: args.mode,
        prime: args.prime.clone().unwrap_or(prime),
        root: args.root.clone().unwrap_or(root),
        secret: args.secret.clone(),
        peer_public,
        vectors,
        vector_group,
    };
    let display = args.output.is_none() || args.verbose;

    match execute(&request)? {
        Outcome::Generated {
            group,
            secret,
            public,
        } => {
            if display {
                println!("Prime used for key generation : {}", to_hex(group.prime()));
                println!(
                    "Primitive root used for key generation : {}",
                    to_hex(group.generator())
                );
                println!(
                    "Private key used for key generation : {}",
                    to_hex(secret.value())
                );
                println!("Generated public key : {}", to_hex(public.value()));
            }
            if let Some(path) = &args.output {
                files::write_hex_file(path, public.value())?;
                println!("Public key written to {}", path.display());
            }
        }
        Outcome::Merged {
            secret,
            peer,
            shared,
        } => {
            if display {
                println!(
                    "Private key used for shared key generation : {}",
                    to_hex(secret.value())
                );
                println!(
                    "Public key used for shared key generation : {}",
                    to_hex(peer.value())
                );
                println!("Computed shared private key : {}", to_hex(shared.value()));
            }
            if let Some(path) = &args.output {
                files::write_hex_file(path, shared.value())?;
                println!("Shared private key written to {}", path.display());
            }
        }
        Outcome::Tested(report) => {
            print_report(&report, args.verbose);
            if !report.all_passed() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &VerificationReport, verbose: bool) {
    for check in report.checks() {
        if check.passed() {
            println!("{} is OK", check.label);
        } else {
            println!("ERROR : {} is not equal to the test one !", check.label);
        }
        if verbose {
            println!("  expected : {}", to_hex(&check.expected));
            println!("  computed : {}", to_hex(&check.computed));
        }
    }
}
