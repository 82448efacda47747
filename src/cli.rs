use crate::{
    services::GatewayService,
    types::{Config, TradeOutcome},
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td")]
#[command(about = "Trading System Dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Instrument {
        instrument_id: String,
    },
    Instruments,
    Approve {
        instrument_id: String,
    },
    Limit {
        counterparty: String,
    },
    Trade {
        instrument_id: String,
        counterparty: String,
        amount: f64,
        #[arg(
            long,
            help = "Submit an approval request and proceed if the instrument is unknown"
        )]
        approve: bool,
    },
}

pub async fn run_cli(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let gateway = GatewayService::new(config)?;

    match cli.command {
        Commands::Instrument { instrument_id } => {
            println!("Fetching instrument {}...", instrument_id);
            match gateway.fetch_instrument(&instrument_id).await {
                Ok(instrument) => print_json(&instrument),
                Err(err) => {
                    eprintln!("Error: {}", err);
                    eprintln!(
                        "If the instrument is not onboarded yet, run: td approve {}",
                        instrument_id
                    );
                    std::process::exit(1);
                }
            }
        }
        Commands::Instruments => {
            println!("Fetching available instruments...");
            let instruments = gateway.list_instruments().await;
            print_instruments(&instruments);
        }
        Commands::Approve { instrument_id } => {
            println!("Submitting approval request for {}...", instrument_id);
            match gateway.submit_approval_request(&instrument_id).await {
                Ok(receipt) => {
                    println!("Approval request submitted (status PENDING)");
                    print_json(&receipt);
                }
                Err(err) => {
                    eprintln!("Error submitting approval request: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Commands::Limit { counterparty } => {
            println!("Fetching available limit for {}...", counterparty);
            match gateway.fetch_available_limit(&counterparty).await {
                Ok(limit) => println!("Available Limit: {}", limit),
                Err(err) => {
                    eprintln!("Error fetching limit: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Commands::Trade {
            instrument_id,
            counterparty,
            amount,
            approve,
        } => {
            if amount <= 0.0 {
                eprintln!("Error: Trade amount must be greater than 0");
                std::process::exit(1);
            }

            // precheck mirrors the dashboard flow: unknown instruments are
            // not traded without explicit consent to the approval step
            if let Err(err) = gateway.fetch_instrument(&instrument_id).await {
                if !approve {
                    eprintln!("Instrument {} not recognized: {}", instrument_id, err);
                    eprintln!(
                        "Re-run with --approve to submit an approval request and proceed"
                    );
                    std::process::exit(1);
                }

                println!(
                    "Instrument {} not recognized, submitting approval request...",
                    instrument_id
                );
                match gateway.submit_approval_request(&instrument_id).await {
                    Ok(receipt) => print_json(&receipt),
                    Err(approval_err) => {
                        eprintln!("Error submitting approval request: {}", approval_err);
                        std::process::exit(1);
                    }
                }
            }

            println!(
                "Executing trade: {} {} with {}",
                amount, instrument_id, counterparty
            );
            match gateway
                .execute_trade(&instrument_id, &counterparty, amount)
                .await
            {
                Ok(outcome) => print_trade_outcome(&instrument_id, &counterparty, amount, outcome),
                Err(err) => {
                    eprintln!("Trade execution failed: {}", err);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

fn print_instruments(instruments: &[String]) {
    if instruments.is_empty() {
        println!("No instruments available (or the backend call failed)");
        return;
    }

    println!("\n╔══════════════════════════════════════╗");
    println!("║         AVAILABLE INSTRUMENTS        ║");
    println!("╠══════════════════════════════════════╣");
    for instrument_id in instruments {
        println!("║ {:<36} ║", instrument_id);
    }
    println!("╚══════════════════════════════════════╝");
    println!("{} instruments retrieved", instruments.len());
}

fn print_trade_outcome(instrument_id: &str, counterparty: &str, amount: f64, outcome: TradeOutcome) {
    println!("\n╔══════════════════════════════════════╗");
    println!("║           TRADE CONFIRMATION         ║");
    println!("╠══════════════════════════════════════╣");
    println!("║ Instrument: {:<24} ║", instrument_id);
    println!("║ Counterparty: {:<22} ║", counterparty);
    println!("║ Amount: {:<28.4} ║", amount);

    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    match outcome {
        TradeOutcome::Report(report) => {
            println!("║ Status: {:<28} ║", "EXECUTED");
            println!("║ Timestamp: {:<25} ║", timestamp.to_string());
            println!("╚══════════════════════════════════════╝");
            print_json(&report);
            println!("Trade executed successfully!");
        }
        TradeOutcome::Message { message } => {
            println!("║ Status: {:<28} ║", "ACKNOWLEDGED");
            println!("║ Timestamp: {:<25} ║", timestamp.to_string());
            println!("╚══════════════════════════════════════╝");
            println!("Warning: backend replied without a fill report: {}", message);
        }
    }
}
