use std::env;
use std::process::ExitCode;
use std::str::FromStr;

use exact_fraction::{
    BigFraction, DivisionMode, FareyMode, FractionError, RatioStyle, RoundingMode,
};
use num_bigint::BigInt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "EXACT_FRACTION_LOG";
const RADIX_ENV: &str = "EXACT_FRACTION_RADIX";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Fraction(#[from] FractionError),
    #[error("invalid command: {0}")]
    InvalidCommand(String),
    #[error("cannot parse `{value}` as {expected}")]
    Parse {
        value: String,
        expected: &'static str,
    },
}

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), CliError> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_help();
        return Ok(());
    };
    let rest: Vec<String> = args.collect();
    debug!(%command, args = ?rest, "dispatching");

    let output = match command.as_str() {
        "-h" | "--help" => {
            print_help();
            return Ok(());
        }
        "reduce" => cmd_reduce(&rest)?,
        "mixed" => cmd_mixed(&rest)?,
        "decimal" => cmd_decimal(&rest)?,
        "repeating" => cmd_repeating(&rest)?,
        "float" => cmd_float(&rest)?,
        "divmod" => cmd_divmod(&rest)?,
        "round" => cmd_round(&rest)?,
        "farey" => cmd_farey(&rest)?,
        other => {
            return Err(CliError::InvalidCommand(format!(
                "unknown command {other} (try --help)"
            )))
        }
    };
    println!("{output}");
    Ok(())
}

fn print_help() {
    println!(
        "frac

USAGE:
  frac <COMMAND>

COMMANDS:
  reduce    <num> <den> [--whole]
  mixed     <num> <den>
  decimal   <num> <den> <scale> [--mode <rounding>]
  repeating <num> <den> [--radix <2..36>] [--force]
  float     <value> [--single]
  divmod    <an> <ad> <bn> <bd> [--mode truncated|floored|euclidean]
  round     <num> <den> [--mode <rounding>] [--denominator <d>]
  farey     next|prev|closest <num> <den> <order>

  -h, --help

ROUNDING MODES:
  up, down, ceiling, floor, half-up, half-down, half-even, unnecessary

ENVIRONMENT:
  {LOG_ENV}    log filter (default: warn)
  {RADIX_ENV}  default radix for `repeating`"
    );
}

/// Positional arguments and `--flag [value]` options, split apart.
struct CommandArgs {
    positional: Vec<String>,
    switches: Vec<String>,
    options: Vec<(String, String)>,
}

impl CommandArgs {
    /// `valued` lists the flags that take a value; any other `--flag` must be in `switches`.
    fn parse(args: &[String], valued: &[&str], switches: &[&str]) -> Result<Self, CliError> {
        let mut parsed = CommandArgs {
            positional: Vec::new(),
            switches: Vec::new(),
            options: Vec::new(),
        };
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if valued.contains(&arg.as_str()) {
                let Some(value) = iter.next() else {
                    return Err(CliError::InvalidCommand(format!("{arg} expects a value")));
                };
                parsed.options.push((arg.clone(), value.clone()));
            } else if switches.contains(&arg.as_str()) {
                parsed.switches.push(arg.clone());
            } else if arg.starts_with("--") {
                return Err(CliError::InvalidCommand(format!("unknown flag {arg}")));
            } else {
                parsed.positional.push(arg.clone());
            }
        }
        Ok(parsed)
    }

    fn expect_positional<const N: usize>(&self, usage: &str) -> Result<[&str; N], CliError> {
        let values: Vec<&str> = self.positional.iter().map(String::as_str).collect();
        values
            .try_into()
            .map_err(|_| CliError::InvalidCommand(format!("usage: frac {usage}")))
    }

    fn has(&self, switch: &str) -> bool {
        self.switches.iter().any(|s| s == switch)
    }

    fn option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .rev()
            .find(|(flag, _)| flag == name)
            .map(|(_, value)| value.as_str())
    }
}

fn parse_value<T: FromStr>(value: &str, expected: &'static str) -> Result<T, CliError> {
    value.trim().parse().map_err(|_| CliError::Parse {
        value: value.to_string(),
        expected,
    })
}

fn parse_fraction(numerator: &str, denominator: &str) -> Result<BigFraction, CliError> {
    let numerator: BigInt = parse_value(numerator, "an integer")?;
    let denominator: BigInt = parse_value(denominator, "an integer")?;
    Ok(BigFraction::new(numerator, denominator)?)
}

fn mode_option<T: FromStr<Err = FractionError>>(
    args: &CommandArgs,
    default: T,
) -> Result<T, CliError> {
    match args.option("--mode") {
        Some(text) => Ok(text.parse()?),
        None => Ok(default),
    }
}

fn cmd_reduce(rest: &[String]) -> Result<String, CliError> {
    let args = CommandArgs::parse(rest, &[], &["--whole"])?;
    let [n, d] = args.expect_positional::<2>("reduce <num> <den> [--whole]")?;
    let value = parse_fraction(n, d)?;
    let style = if args.has("--whole") {
        RatioStyle::OmitUnitDenominator
    } else {
        RatioStyle::Full
    };
    Ok(value.to_ratio_string(style))
}

fn cmd_mixed(rest: &[String]) -> Result<String, CliError> {
    let args = CommandArgs::parse(rest, &[], &[])?;
    let [n, d] = args.expect_positional::<2>("mixed <num> <den>")?;
    Ok(parse_fraction(n, d)?.to_mixed_string()?)
}

fn cmd_decimal(rest: &[String]) -> Result<String, CliError> {
    let args = CommandArgs::parse(rest, &["--mode"], &[])?;
    let [n, d, scale] =
        args.expect_positional::<3>("decimal <num> <den> <scale> [--mode <rounding>]")?;
    let value = parse_fraction(n, d)?;
    let scale: u32 = parse_value(scale, "a non-negative scale")?;
    let mode = mode_option(&args, RoundingMode::HalfEven)?;
    Ok(value.to_decimal_string(scale, mode)?)
}

fn cmd_repeating(rest: &[String]) -> Result<String, CliError> {
    let args = CommandArgs::parse(rest, &["--radix"], &["--force"])?;
    let [n, d] = args.expect_positional::<2>("repeating <num> <den> [--radix R] [--force]")?;
    let value = parse_fraction(n, d)?;
    let radix = match args.option("--radix") {
        Some(text) => parse_value(text, "a radix")?,
        None => default_radix()?,
    };
    if !(2..=36).contains(&radix) {
        return Err(CliError::InvalidCommand(format!(
            "radix must lie in 2..=36, got {radix}"
        )));
    }
    Ok(value.to_repeating_digit_string(radix, args.has("--force"))?)
}

fn default_radix() -> Result<u32, CliError> {
    match env::var(RADIX_ENV) {
        Ok(text) => parse_value(&text, "a radix"),
        Err(_) => Ok(10),
    }
}

fn cmd_float(rest: &[String]) -> Result<String, CliError> {
    let args = CommandArgs::parse(rest, &[], &["--single"])?;
    let [text] = args.expect_positional::<1>("float <value> [--single]")?;
    let value = if args.has("--single") {
        BigFraction::try_from_f32(parse_value(text, "a float")?)?
    } else {
        BigFraction::try_from_f64(parse_value(text, "a float")?)?
    };
    Ok(value.to_ratio_string(RatioStyle::OmitUnitDenominator))
}

fn cmd_divmod(rest: &[String]) -> Result<String, CliError> {
    let args = CommandArgs::parse(rest, &["--mode"], &[])?;
    let [an, ad, bn, bd] = args.expect_positional::<4>("divmod <an> <ad> <bn> <bd> [--mode M]")?;
    let dividend = parse_fraction(an, ad)?;
    let divisor = parse_fraction(bn, bd)?;
    let mode = mode_option(&args, DivisionMode::default())?;
    let (quotient, remainder) = dividend.div_rem(&divisor, mode)?;
    Ok(format!(
        "{quotient} {}",
        remainder.to_ratio_string(RatioStyle::OmitUnitDenominator)
    ))
}

fn cmd_round(rest: &[String]) -> Result<String, CliError> {
    let args = CommandArgs::parse(rest, &["--mode", "--denominator"], &[])?;
    let [n, d] = args.expect_positional::<2>("round <num> <den> [--mode M] [--denominator D]")?;
    let value = parse_fraction(n, d)?;
    let mode = mode_option(&args, RoundingMode::HalfEven)?;
    match args.option("--denominator") {
        Some(text) => {
            let denominator: BigInt = parse_value(text, "an integer")?;
            let rounded = value.round_to_denominator(&denominator, mode)?;
            Ok(rounded.to_ratio_string(RatioStyle::OmitUnitDenominator))
        }
        None => Ok(value.round(mode)?.to_string()),
    }
}

fn cmd_farey(rest: &[String]) -> Result<String, CliError> {
    let args = CommandArgs::parse(rest, &[], &[])?;
    let [mode, n, d, order] =
        args.expect_positional::<4>("farey next|prev|closest <num> <den> <order>")?;
    let mode: FareyMode = mode.parse()?;
    let value = parse_fraction(n, d)?;
    let order: BigInt = parse_value(order, "an integer")?;
    let neighbour = value.farey(&order, mode)?;
    Ok(neighbour.to_ratio_string(RatioStyle::OmitUnitDenominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn reduce_and_mixed() {
        assert_eq!(cmd_reduce(&args(&["6", "-4"])).unwrap(), "-3/2");
        assert_eq!(cmd_reduce(&args(&["8", "4", "--whole"])).unwrap(), "2");
        assert_eq!(cmd_reduce(&args(&["8", "4"])).unwrap(), "2/1");
        assert_eq!(cmd_mixed(&args(&["-7", "2"])).unwrap(), "-3 1/2");
    }

    #[test]
    fn decimal_and_repeating() {
        assert_eq!(cmd_decimal(&args(&["1", "3", "4"])).unwrap(), "0.3333");
        assert_eq!(
            cmd_decimal(&args(&["1", "8", "2", "--mode", "HALF_UP"])).unwrap(),
            "0.13"
        );
        assert_eq!(cmd_repeating(&args(&["500", "11"])).unwrap(), "45.(45)");
        assert_eq!(cmd_repeating(&args(&["1", "1", "--force"])).unwrap(), "0.(9)");
        assert_eq!(
            cmd_repeating(&args(&["1", "3", "--radix", "2"])).unwrap(),
            "0.(01)"
        );
        assert!(cmd_repeating(&args(&["1", "3", "--radix", "40"])).is_err());
    }

    #[test]
    fn float_division_rounding_and_farey() {
        assert_eq!(cmd_float(&args(&["0.75"])).unwrap(), "3/4");
        assert_eq!(cmd_float(&args(&["-2", "--single"])).unwrap(), "-2");
        assert_eq!(
            cmd_divmod(&args(&["-5", "4", "1", "2", "--mode", "floored"])).unwrap(),
            "-3 1/4"
        );
        assert_eq!(cmd_divmod(&args(&["-5", "4", "1", "2"])).unwrap(), "-2 -1/4");
        assert_eq!(cmd_round(&args(&["5", "2"])).unwrap(), "2");
        assert_eq!(
            cmd_round(&args(&["1", "3", "--denominator", "4", "--mode", "up"])).unwrap(),
            "1/2"
        );
        assert_eq!(cmd_farey(&args(&["next", "0", "1", "20"])).unwrap(), "1/20");
        assert_eq!(cmd_farey(&args(&["closest", "355", "113", "10"])).unwrap(), "22/7");
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(matches!(
            cmd_reduce(&args(&["1", "0"])),
            Err(CliError::Fraction(FractionError::DivideByZero))
        ));
        assert!(matches!(
            cmd_reduce(&args(&["x", "2"])),
            Err(CliError::Parse { .. })
        ));
        assert!(matches!(
            cmd_reduce(&args(&["1"])),
            Err(CliError::InvalidCommand(_))
        ));
        assert!(matches!(
            cmd_round(&args(&["1", "2", "--mode", "sideways"])),
            Err(CliError::Fraction(FractionError::InvalidArgument(_)))
        ));
        assert!(matches!(
            cmd_mixed(&args(&["1", "2", "--bogus"])),
            Err(CliError::InvalidCommand(_))
        ));
    }
}
