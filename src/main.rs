use clap::Parser;
use color_eyre::Result;
use credit_committee::app::App;
use credit_committee::dashboard::evaluate;
use credit_committee::event::{Event, EventHandler};
use credit_committee::scoring::ScoreInputs;
use credit_committee::telemetry::{self, LogTarget};
use credit_committee::tui;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "credit-committee")]
#[command(version)]
#[command(about = "Simulate a wholesale banking credit-committee vote in the terminal")]
struct Args {
    /// Solvency (Altman Z-Score strength), 0-10
    #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
    solvency: i64,

    /// Efficiency (Piotroski F-Score trend), 0-10
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    efficiency: i64,

    /// Strategic fit with growth/sustainability goals, 0-10
    #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
    strategic_fit: i64,

    /// Collateral structure (0 = unsecured, 10 = fully secured)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    collateral: i64,

    /// Management quality, 0-10
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    management: i64,

    /// Print the evaluation as JSON and exit instead of opening the dashboard
    #[arg(short, long)]
    snapshot: bool,

    /// Event poll interval in milliseconds
    #[arg(short, long, default_value = "250")]
    tick_rate: u64,

    /// Write logs to this file (the dashboard itself owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn inputs(&self) -> ScoreInputs {
        ScoreInputs::clamped([
            self.solvency,
            self.efficiency,
            self.strategic_fit,
            self.collateral,
            self.management,
        ])
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if args.snapshot {
        telemetry::init(LogTarget::Stderr, &args.log_level)?;
        let evaluation = evaluate(args.inputs());
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    if let Some(ref path) = args.log_file {
        telemetry::init(LogTarget::File(path), &args.log_level)?;
    }

    let mut app = App::new(args.inputs());
    tracing::info!(inputs = ?app.evaluation().inputs.values(), "starting dashboard");

    let mut terminal = tui::init()?;
    let mut events = EventHandler::new(Duration::from_millis(args.tick_rate));

    loop {
        terminal.draw(|frame| app.render(frame))?;

        match events.next().await? {
            Event::Key(key) => app.handle_key(key),
            Event::Tick => {}
            Event::Resize(_, _) => {
                // Terminal will handle resize on next draw
            }
        }

        if app.should_quit {
            break;
        }
    }

    tui::restore()?;
    Ok(())
}
