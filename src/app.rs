use std::path::Path;
use std::time::Duration;

use crate::cli::{Action, Cli, parse_action};
use crate::core::{Period, calculate_stats, parse_duration};
use crate::error::AppError;
use crate::output::{
    StatsTableOptions, output_stats_json, output_status_json, print_stats_table, reset_message,
    status_message,
};
use crate::render::{Screen, TerminalScreen, farewell_message, interrupted_message};
use crate::store::{SessionStore, load_records};
use crate::timer::{Clock, Interrupt, SystemClock, Timer, TimerOutcome};
use crate::utils::Timezone;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: SessionStore,
    pub(crate) timezone: Timezone,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(cli: &'a Cli, config_data_dir: Option<&Path>) -> Result<Self, AppError> {
        let timezone = Timezone::parse(cli.timezone.as_deref())?;
        let store = SessionStore::resolve(cli.data_dir.as_deref(), config_data_dir)?;
        log::debug!("Using data directory {}", store.dir().display());
        Ok(Self {
            cli,
            store,
            timezone,
        })
    }
}

fn handle_reset(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    ctx.store.reset(ctx.timezone.today())?;
    println!("{}", reset_message());
    Ok(())
}

fn handle_status(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let today = ctx.timezone.today();
    let count = ctx.store.load_count(today);
    if ctx.cli.json {
        println!("{}", output_status_json(today, count)?);
    } else {
        println!("{}", status_message(count));
    }
    Ok(())
}

fn handle_stats(ctx: &CommandContext<'_>, raw_period: &str) -> Result<(), AppError> {
    // A bad range is reported but is not a failure of the process
    let period = match Period::parse(raw_period) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let filter = period.to_filter(ctx.timezone.today());
    let result = load_records(&ctx.store);
    if result.skipped > 0 {
        log::debug!("{} session files could not be parsed", result.skipped);
    }
    let summary = calculate_stats(&result.records, &filter);

    if ctx.cli.json {
        println!("{}", output_stats_json(&summary, period)?);
    } else {
        print_stats_table(
            &summary,
            period,
            StatsTableOptions {
                use_color: ctx.cli.use_color(),
                breakdown: ctx.cli.breakdown,
            },
        );
    }
    Ok(())
}

fn handle_timer(ctx: &CommandContext<'_>, raw_duration: &str) -> Result<(), AppError> {
    let minutes = parse_duration(raw_duration);
    let interrupt = Interrupt::new();
    interrupt.install()?;

    println!("🍅 Starting {minutes}-minute pomodoro timer...");
    let mut clock = SystemClock;
    clock.sleep(Duration::from_secs(1), &interrupt);

    let mut screen = TerminalScreen::new(ctx.cli.use_color());
    let mut timer = Timer::new(
        &ctx.store,
        &mut screen,
        clock,
        interrupt,
        ctx.timezone,
        minutes.saturating_mul(60),
    );
    let outcome = timer.run()?;
    log::debug!("{} pomodoros completed this run", timer.completed_runs());

    match outcome {
        TimerOutcome::Quit { count } => {
            screen.clear()?;
            println!("\n{}\n", farewell_message(count));
        }
        TimerOutcome::Interrupted { count } => {
            screen.clear()?;
            println!("\n{}\n", interrupted_message(count));
        }
        TimerOutcome::InputClosed { count } => {
            log::debug!("Input closed at prompt, {count} pomodoros today");
            println!();
        }
    }
    Ok(())
}

pub(crate) fn run(cli: &Cli, config_data_dir: Option<&Path>) -> Result<(), AppError> {
    let ctx = CommandContext::new(cli, config_data_dir)?;

    match parse_action(cli) {
        Action::Reset => handle_reset(&ctx),
        Action::Status => handle_status(&ctx),
        Action::Stats { period } => handle_stats(&ctx, &period),
        Action::Timer { duration } => handle_timer(&ctx, &duration),
    }
}
