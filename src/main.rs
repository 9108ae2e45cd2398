use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use emi_calculator::{
    engine::{self, QuoteReport},
    logging, ui, App, Config, SliderStyle,
};

/// Loan EMI calculator
#[derive(Parser)]
#[command(name = "emi", version, about = "Equated monthly installment calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON file with starting values and display settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file while the form is open
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Starting loan amount
    #[arg(long)]
    principal: Option<f64>,

    /// Starting annual interest rate, in percent
    #[arg(long)]
    rate: Option<f64>,

    /// Starting term, in months
    #[arg(long)]
    term: Option<f64>,

    /// Slider widget to draw
    #[arg(long, value_enum)]
    slider: Option<SliderStyle>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the repayment breakdown as JSON and exit
    Quote {
        #[arg(long, allow_negative_numbers = true)]
        principal: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        term: f64,
    },
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(principal) = self.principal {
            config.principal = principal;
        }
        if let Some(rate) = self.rate {
            config.rate = rate;
        }
        if let Some(term) = self.term {
            config.term = term;
        }
        if let Some(slider) = self.slider {
            config.slider = slider;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    match cli.command {
        Some(Command::Quote {
            principal,
            rate,
            term,
        }) => {
            logging::init_stderr();
            run_quote(principal, rate, term)
        }
        None => {
            if let Some(path) = &cli.log_file {
                logging::init_file(path)?;
            }
            run_form(config)
        }
    }
}

fn run_quote(principal: f64, rate: f64, term: f64) -> Result<()> {
    let result = engine::quote(principal, rate, term);
    if let Err(reason) = &result {
        info!(%reason, "no quote for these inputs");
    }
    let report = QuoteReport::from(result);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_form(config: Config) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(slider = config.slider.name(), "form opened");
    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("form closed");

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key) {
                return Ok(());
            }
        }
    }
}
