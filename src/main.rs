use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde_json::Value;

use fluent_switch::{CompareOp, Switch, SwitchConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the sample switch: `case 10 ==`, then a default
    Demo {
        /// Subject as a JSON literal; runs 10 and 4 when omitted
        #[arg(short, long)]
        subject: Option<String>,

        /// Trace clause registration
        #[arg(short, long)]
        trace: bool,

        /// YAML config file (overrides the environment)
        #[arg(short, long)]
        config: Option<String>,
    },
    /// List the supported operators
    Ops,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Demo {
            subject,
            trace,
            config,
        } => {
            let mut config = match config {
                Some(path) => SwitchConfig::load(&path)
                    .with_context(|| format!("Failed to load config from {}", path))?,
                None => SwitchConfig::from_env()?,
            };
            config.trace |= trace;
            log::info!("Switch config: {:?}", config);

            let subjects = match subject {
                Some(raw) => vec![serde_json::from_str::<Value>(&raw)
                    .with_context(|| format!("Subject is not a JSON literal: {}", raw))?],
                None => vec![Value::from(10), Value::from(4)],
            };

            for subject in subjects {
                run_demo(subject, &config)?;
            }
        }
        Commands::Ops => {
            for op in CompareOp::ALL {
                println!(
                    "{:<3} {:<22} {}",
                    op.symbol(),
                    op.name(),
                    if op.is_ordering() { "ordering" } else { "equality" }
                );
            }
        }
    }

    Ok(())
}

fn run_demo(subject: Value, config: &SwitchConfig) -> anyhow::Result<()> {
    Switch::with_config(subject, config)
        .add_case(Value::from(10), CompareOp::Eq, |_| println!("Equal to 10"))?
        .set_default(|_| println!("Default case"))?;
    Ok(())
}
