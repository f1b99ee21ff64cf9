//! atm-fees CLI
//!
//! Compute ATM withdrawal fees from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Balance needed to withdraw $100 at BAC, converting to córdobas
//! atm-fees withdraw --amount 100 --bank bac
//!
//! # What a $250 balance yields at Banpro, withdrawing dollars
//! atm-fees available --balance 250 --bank banpro --no-conversion
//!
//! # List the known banks
//! atm-fees banks
//! ```

use atm_fees::calculator::{FeeCalculator, TotalPolicy};
use atm_fees::core::bank::{BankId, BankRecord};
use atm_fees::core::config::FeeConfig;
use atm_fees::format::format_currency;
use atm_fees::input::parse_amount;
use atm_fees::report::{AvailableReport, WithdrawalReport};
use log::debug;
use rust_decimal::Decimal;
use std::process;

fn print_usage() {
    eprintln!(
        r#"atm-fees: ATM withdrawal fee calculator

USAGE:
    atm-fees <COMMAND> [OPTIONS]

COMMANDS:
    withdraw    Balance required to withdraw an amount
    available   Amount that can be withdrawn from a balance
    banks       List the banks and their ATM terms
    help        Show this message

OPTIONS (withdraw):
    --amount <USD>      Amount to withdraw

OPTIONS (available):
    --balance <USD>     Current account balance

OPTIONS (withdraw, available):
    --bank <ID>         Bank id (default: first bank listed)
    --no-conversion     Withdraw dollars, skipping the conversion fee
    --follow-toggle     Leave the conversion fee out of the required total
                        when --no-conversion is given

OPTIONS (all):
    --config <FILE>     JSON file with the fee schedule and banks
    --format <FORMAT>   Output format: text (default) or json

EXAMPLES:
    atm-fees withdraw --amount 100 --bank bac
    atm-fees available --balance 250 --bank banpro --no-conversion
    atm-fees banks --format json
    atm-fees withdraw --amount 300 --config fees.json"#
    );
}

/// Options shared by every command.
struct Options {
    value: Option<String>,
    bank: Option<String>,
    include_conversion: bool,
    total_policy: TotalPolicy,
    config_path: Option<String>,
    format: String,
}

fn parse_options(args: &[String], value_flag: Option<&str>) -> Options {
    let mut options = Options {
        value: None,
        bank: None,
        include_conversion: true,
        total_policy: TotalPolicy::default(),
        config_path: None,
        format: "text".to_string(),
    };
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            _ if Some(arg) == value_flag => {
                i += 1;
                options.value = Some(required_value(args, i, arg));
            }
            "--bank" if value_flag.is_some() => {
                i += 1;
                options.bank = Some(required_value(args, i, arg));
            }
            "--no-conversion" if value_flag.is_some() => options.include_conversion = false,
            "--follow-toggle" if value_flag.is_some() => {
                options.total_policy = TotalPolicy::FollowToggle
            }
            "--config" => {
                i += 1;
                options.config_path = Some(required_value(args, i, arg));
            }
            "--format" => {
                i += 1;
                options.format = required_value(args, i, arg);
                if options.format != "text" && options.format != "json" {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", arg);
                process::exit(1);
            }
        }
        i += 1;
    }
    options
}

fn required_value(args: &[String], i: usize, flag: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires a value", flag);
        process::exit(1);
    })
}

fn load_config(options: &Options) -> FeeConfig {
    match &options.config_path {
        Some(path) => FeeConfig::from_path(path).unwrap_or_else(|e| {
            eprintln!("Error loading config '{}': {}", path, e);
            process::exit(1);
        }),
        None => FeeConfig::standard(),
    }
}

fn select_bank<'a>(config: &'a FeeConfig, options: &Options) -> &'a BankRecord {
    match &options.bank {
        Some(id) => config.banks.require(&BankId::new(id.as_str())).unwrap_or_else(|e| {
            let known: Vec<String> = config.banks.ids().iter().map(|id| id.to_string()).collect();
            eprintln!("Error: {} (known banks: {})", e, known.join(", "));
            process::exit(1);
        }),
        None => config.banks.first(),
    }
}

fn parse_value(options: &Options, flag: &str) -> Decimal {
    let raw = options.value.as_deref().unwrap_or_else(|| {
        eprintln!("Error: {} <USD> is required", flag);
        process::exit(1);
    });
    parse_amount(raw).unwrap_or_else(|e| {
        eprintln!("Invalid amount '{}': {}", raw, e);
        process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error encoding JSON: {}", e);
            process::exit(1);
        }
    }
}

fn calculator(config: &FeeConfig, options: &Options) -> FeeCalculator {
    config.calculator().with_total_policy(options.total_policy)
}

fn cmd_withdraw(args: &[String]) {
    let options = parse_options(args, Some("--amount"));
    let amount = parse_value(&options, "--amount");
    let config = load_config(&options);
    let bank = select_bank(&config, &options);
    debug!(
        "withdraw {} at {} (conversion: {})",
        amount,
        bank.id(),
        options.include_conversion
    );

    let result = calculator(&config, &options).required_balance(
        amount,
        bank,
        options.include_conversion,
    );
    let report = WithdrawalReport::new(bank, options.include_conversion, result);

    if options.format == "json" {
        print_json(&report);
    } else {
        print!("{}", report);
    }
}

fn cmd_available(args: &[String]) {
    let options = parse_options(args, Some("--balance"));
    let balance = parse_value(&options, "--balance");
    let config = load_config(&options);
    let bank = select_bank(&config, &options);
    debug!(
        "available from {} at {} (conversion: {})",
        balance,
        bank.id(),
        options.include_conversion
    );

    let result = calculator(&config, &options).available_to_withdraw(
        balance,
        bank,
        options.include_conversion,
    );
    let report = AvailableReport::new(bank, options.include_conversion, result);

    if options.format == "json" {
        print_json(&report);
    } else {
        print!("{}", report);
    }
}

fn cmd_banks(args: &[String]) {
    let options = parse_options(args, None);
    let config = load_config(&options);

    if options.format == "json" {
        print_json(&config.banks);
    } else {
        println!("{:<10} {:<12} {:>8} {:>10}", "ID", "NAME", "ATM FEE", "MAX");
        for bank in config.banks.iter() {
            println!(
                "{:<10} {:<12} {:>8} {:>10}",
                bank.id().as_str(),
                bank.name(),
                format_currency(bank.atm_fee()),
                format_currency(bank.max_withdrawal())
            );
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "withdraw" => cmd_withdraw(rest),
        "available" => cmd_available(rest),
        "banks" => cmd_banks(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
