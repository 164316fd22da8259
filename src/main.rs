use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uvie_compose::{InputMethod, TypingSession};

/// Types each stdin line through the composer and prints the Vietnamese text.
#[derive(Parser, Debug)]
#[command(name = "uvie", version, about)]
struct Args {
    /// Input method: telex or vni
    #[arg(short, long, env = "UVIE_METHOD", default_value = "telex")]
    method: InputMethod,

    /// Print the edit produced by every key
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uvie=warn,uvie_compose=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    tracing::info!(method = %args.method, "starting");

    let mut session = TypingSession::new(args.method);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    for line in stdin.lines() {
        let line = line.context("reading stdin")?;
        for key in line.chars() {
            let edit = session.process(key);
            if args.trace {
                match edit {
                    Some(e) if !e.is_pass() => writeln!(
                        stdout,
                        "{key:?} -> backspace {} insert {:?}",
                        e.backspaces,
                        e.replacement().unwrap_or_default()
                    )?,
                    Some(_) => writeln!(stdout, "{key:?} -> pass")?,
                    None => writeln!(stdout, "{key:?} -> boundary")?,
                }
            }
        }
        let text = session.commit();
        writeln!(stdout, "{}", &text[..]).context("writing stdout")?;
    }

    stdout.flush()?;
    Ok(())
}
