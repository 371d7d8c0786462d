//! factpi - Driver for the factpi C ABI
//!
//! Prints factorials and π by calling the library's exported `extern "C"`
//! functions, the same entry points a foreign caller links against.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use factpi::ffi;
use factpi::{FactStatus, FactorialError};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Inputs printed when no subcommand is given
const DEMO_INPUTS: [i64; 6] = [1, 2, 3, 4, 5, 10];

/// Factorial and pi through the factpi C ABI
#[derive(Parser, Debug)]
#[command(name = "factpi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Digits after the decimal point when printing pi
    #[arg(long, global = true, value_name = "DIGITS")]
    precision: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Print the factorials of 1, 2, 3, 4, 5 and 10, then pi
    Demo,

    /// Print the factorial of each number
    Fact {
        /// Numbers to take the factorial of
        #[arg(value_name = "N", required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Reject inputs whose factorial is not exact instead of wrapping
        #[arg(long)]
        checked: bool,
    },

    /// Print pi
    Pi,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Demo) => {
            for n in DEMO_INPUTS {
                println!("{}", ffi::fact(n));
            }
            println!("{}", format_pi(cli.precision));
        }
        Some(Commands::Fact { numbers, checked }) => {
            for n in numbers {
                let value = if checked { fact_checked(n)? } else { ffi::fact(n) };
                println!("{}", value);
            }
        }
        Some(Commands::Pi) => {
            println!("{}", format_pi(cli.precision));
        }
    }

    Ok(())
}

/// Call the checked export and turn its status into an error
fn fact_checked(n: i64) -> Result<i64> {
    let mut out: i64 = 0;
    // SAFETY: `out` is a live local
    let status = unsafe { ffi::fact_checked(n, &mut out) };
    debug!(n, ?status, "fact_checked returned");

    match status {
        FactStatus::Ok => Ok(out),
        FactStatus::Negative => Err(FactorialError::Negative { n }.into()),
        FactStatus::Overflow => Err(FactorialError::Overflow { n }.into()),
        FactStatus::NullPointer => bail!("fact_checked rejected its output pointer"),
    }
}

fn format_pi(precision: Option<usize>) -> String {
    let value = ffi::pi();
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_demo() {
        let cli = Cli::try_parse_from(["factpi"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.precision, None);
    }

    #[test]
    fn test_parse_fact() {
        let cli = Cli::try_parse_from(["factpi", "fact", "5", "-3", "--checked"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Fact {
                numbers: vec![5, -3],
                checked: true,
            })
        );
    }

    #[test]
    fn test_fact_requires_numbers() {
        assert!(Cli::try_parse_from(["factpi", "fact"]).is_err());
        assert!(Cli::try_parse_from(["factpi", "fact", "ten"]).is_err());
    }

    #[test]
    fn test_parse_pi_with_precision() {
        let cli = Cli::try_parse_from(["factpi", "pi", "--precision", "4", "-v"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Pi));
        assert_eq!(cli.precision, Some(4));
        assert!(cli.verbose);
    }

    #[test]
    fn test_format_pi() {
        assert_eq!(format_pi(None), "3.141592653589793");
        assert_eq!(format_pi(Some(2)), "3.14");
        assert_eq!(format_pi(Some(0)), "3");
    }

    #[test]
    fn test_fact_checked() {
        assert_eq!(fact_checked(10).unwrap(), 3_628_800);
        assert!(fact_checked(-1).is_err());

        let err = fact_checked(21).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }
}
