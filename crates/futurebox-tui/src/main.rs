//! # futurebox
//!
//! Entry point for the `futurebox` terminal client.
//!
//! Connects to a Sui fullnode, renders the capsule pages, and hands
//! every write to the configured wallet session.

use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use futurebox_core::config::Config;
use futurebox_core::network::Network;
use futurebox_core::types::SuiAddress;
use futurebox_sui::client::SuiClient;
use futurebox_sui::wallet::{StaticWallet, WalletSession};

mod app;
mod event;
mod notify;
mod tasks;
mod ui;

use app::App;
use event::{Event, EventHandler};
use tasks::TaskRunner;

/// Tick interval driving toast expiry and redraws.
const TICK_RATE: Duration = Duration::from_millis(250);

/// FutureBox — browse, vote on, and submit capsules on Sui testnet.
#[derive(Parser)]
#[command(name = "futurebox", version, about)]
struct Cli {
    /// Network to connect to (testnet, devnet, mainnet, localnet).
    #[arg(long, default_value = "testnet")]
    network: Network,

    /// Fullnode RPC URL override.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Account address for a watch-only session (0x...).
    #[arg(long)]
    address: Option<SuiAddress>,
}

/// RAII guard that restores the terminal on drop, even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config {
        network: cli.network,
        rpc_url: cli.rpc_url,
        ..Config::default()
    };
    info!(network = %config.network, url = config.effective_rpc_url(), "starting futurebox");

    let client = Arc::new(SuiClient::with_url(config.effective_rpc_url()));
    let wallet: Arc<dyn WalletSession> = match cli.address {
        Some(address) => Arc::new(StaticWallet::watch_only(address)),
        None => Arc::new(StaticWallet::disconnected()),
    };

    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
    let runner = TaskRunner::new(client, wallet.clone(), config.clone(), msg_tx);
    let mut app = App::new(config, wallet.address());

    // Initial mount of the capsules page.
    runner.run(app.refetch_capsules());

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Event::Tick) => app.on_tick(),
                    Some(Event::Key(key)) => {
                        if let Some(effect) = app.handle_key(key) {
                            runner.run(effect);
                        }
                    }
                    Some(Event::Resize(..)) => {}
                    None => break,
                }
            }
            Some(msg) = msg_rx.recv() => {
                if let Some(effect) = app.apply(msg) {
                    runner.run(effect);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
