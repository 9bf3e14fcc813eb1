//! Interactive dose entry: one action per line, full redraw after each.

use std::io::{self, BufRead, Write};

use caffeine_core::error::Result;
use caffeine_core::{Action, Config, Session, View};
use clap::Args;
use tracing::{debug, info};

use crate::display::{render_view, RenderOptions};

const HELP: &str = "\
Actions:
  dose ±1|±10|±100        change the pending dose amount
  day ±1|±10              change the pending day
  hour ±1|±10             change the pending hour (rolls over into days)
  minute ±1|±10           change the pending minute (rolls over into hours)
  set FIELD N             type a value into dose, day, hour or minute
  add                     add the pending dose
  clear                   remove all doses
  delete N                remove dose N from the table
  nudge ±15m|±1h|±10h     move the selected time
  select HOURS            set the selected time (total hours since Day 1 00:00)
  show                    redraw
  json                    print the current view as JSON
  help                    this text
  quit                    leave";

#[derive(Args, Default)]
pub struct SessionArgs {
    /// Chart width in columns (overrides config)
    #[arg(long)]
    pub width: Option<usize>,
    /// Chart height in rows (overrides config)
    #[arg(long)]
    pub height: Option<usize>,
    /// Print each view as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SessionArgs) -> Result<()> {
    let config = Config::load_or_default();
    let opts = RenderOptions {
        width: args.width.unwrap_or(config.render.width),
        height: args.height.unwrap_or(config.render.height),
        show_dose_table: config.render.show_dose_table,
    };
    let mut session = Session::new(config.inputs.pending());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock(), &opts, args.json)
}

fn print_view<W: Write>(
    session: &Session,
    out: &mut W,
    opts: &RenderOptions,
    json: bool,
) -> Result<()> {
    let view = View::from_session(session);
    if json {
        writeln!(out, "{}", serde_json::to_string(&view)?)?;
    } else {
        write!(out, "{}", render_view(&view, opts))?;
    }
    Ok(())
}

/// Drive `session` from `input` until EOF or `quit`.
pub fn run_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    opts: &RenderOptions,
    json: bool,
) -> Result<()> {
    info!("session started");
    print_view(session, &mut out, opts, json)?;

    let mut lines = input.lines();
    loop {
        if !json {
            write!(out, "> ")?;
        }
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "show" => print_view(session, &mut out, opts, json)?,
            "json" => print_view(session, &mut out, opts, true)?,
            _ => match command.parse::<Action>() {
                Ok(action) => match session.apply(action) {
                    Ok(()) => {
                        debug!(?action, "applied action");
                        print_view(session, &mut out, opts, json)?;
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                },
                Err(e) => writeln!(out, "error: {e} (type 'help' for actions)")?,
            },
        }
    }
    info!(doses = session.doses().len(), "session ended");
    Ok(())
}
