//! One-shot chart for doses given on the command line.

use caffeine_core::error::Result;
use caffeine_core::{Config, PendingInputs, Session, View};
use clap::Args;

use crate::display::{render_view, RenderOptions};

#[derive(Args)]
pub struct ChartArgs {
    /// Dose as DAY,HH:MM,MG with a 1-based day (repeatable), e.g. 1,08:00,100
    #[arg(long = "dose", value_parser = parse_dose, required = true)]
    pub doses: Vec<PendingInputs>,
    /// Selected time in total hours since Day 1 00:00 (defaults to the first dose)
    #[arg(long)]
    pub at: Option<f64>,
    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
    /// Chart width in columns (overrides config)
    #[arg(long)]
    pub width: Option<usize>,
    /// Chart height in rows (overrides config)
    #[arg(long)]
    pub height: Option<usize>,
}

/// Parse `DAY,HH:MM,MG` into stepper inputs, rejecting out-of-range fields.
fn parse_dose(raw: &str) -> std::result::Result<PendingInputs, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [day, time, mg] = parts.as_slice() else {
        return Err(format!("expected DAY,HH:MM,MG, got '{raw}'"));
    };
    let day: u32 = day
        .parse()
        .ok()
        .filter(|d| *d >= 1)
        .ok_or_else(|| format!("day must be a whole number >= 1, got '{day}'"))?;
    let (hour, minute) = time
        .split_once(':')
        .ok_or_else(|| format!("time must be HH:MM, got '{time}'"))?;
    let hour: u32 = hour
        .parse()
        .ok()
        .filter(|h| *h <= 23)
        .ok_or_else(|| format!("hour must be 0-23, got '{hour}'"))?;
    let minute: u32 = minute
        .parse()
        .ok()
        .filter(|m| *m <= 59)
        .ok_or_else(|| format!("minute must be 0-59, got '{minute}'"))?;
    let dose_mg: u32 = mg
        .parse()
        .map_err(|_| format!("dose must be whole mg >= 0, got '{mg}'"))?;
    Ok(PendingInputs {
        dose_mg,
        day,
        hour,
        minute,
    })
}

pub fn run(args: ChartArgs) -> Result<()> {
    let config = Config::load_or_default();
    let mut session = Session::new(config.inputs.pending());
    for dose in &args.doses {
        session.set_inputs(*dose);
        session.add_dose();
    }
    if let Some(at) = args.at {
        session.set_selected(at);
    }

    let view = View::from_session(&session);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let opts = RenderOptions {
            width: args.width.unwrap_or(config.render.width),
            height: args.height.unwrap_or(config.render.height),
            show_dose_table: config.render.show_dose_table,
        };
        print!("{}", render_view(&view, &opts));
    }
    Ok(())
}
