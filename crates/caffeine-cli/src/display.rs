//! Text layout of a [`View`] for the terminal.

use caffeine_core::{render_ascii, View};

/// Terminal layout options, usually taken from `[render]` in the config.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
    pub show_dose_table: bool,
}

pub fn render_view(view: &View, opts: &RenderOptions) -> String {
    let mut output = String::new();
    let inputs = view.inputs;
    output.push_str(&format!(
        "Next dose: {} mg on Day {} at {:02}:{:02}\n",
        inputs.dose_mg, inputs.day, inputs.hour, inputs.minute
    ));

    if let Some(message) = &view.message {
        output.push_str(&format!("\n{message}\n"));
        return output;
    }

    output.push_str(&format!("Selected time: {}\n", view.selected_label));
    if let Some(chart) = &view.chart {
        output.push_str(&render_ascii(chart, opts.width, opts.height));
    }

    output.push_str("\nCaffeine at Selected Time\n");
    for readout in &view.readouts {
        output.push_str(&format!("  {}: {}\n", readout.label, readout.text));
    }

    if opts.show_dose_table {
        output.push_str("\nDoses\n");
        output.push_str(&format!("  {:>3}  {:>6}  {:>4}  {}\n", "#", "mg", "day", "time"));
        for row in &view.doses {
            output.push_str(&format!(
                "  {:>3}  {:>6}  {:>4}  {}\n",
                row.index, row.amount_mg, row.day, row.time
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use caffeine_core::{Action, Session};

    const OPTS: RenderOptions = RenderOptions {
        width: 60,
        height: 10,
        show_dose_table: true,
    };

    #[test]
    fn empty_view_shows_message_only() {
        let text = render_view(&View::from_session(&Session::default()), &OPTS);
        assert!(text.contains("Next dose: 100 mg on Day 1 at 08:00"));
        assert!(text.contains("Add one or more doses"));
        assert!(!text.contains("Cumulative Caffeine"));
    }

    #[test]
    fn populated_view_has_chart_readouts_and_table() {
        let mut session = Session::default();
        session.apply(Action::Add).unwrap();
        let text = render_view(&View::from_session(&session), &OPTS);
        assert!(text.contains("Cumulative Caffeine"));
        assert!(text.contains("Min (3h): 100 mg"));
        assert!(text.contains("    1     100     1  08:00"));
    }

    #[test]
    fn dose_table_can_be_hidden() {
        let mut session = Session::default();
        session.apply(Action::Add).unwrap();
        let opts = RenderOptions {
            show_dose_table: false,
            ..OPTS
        };
        let text = render_view(&View::from_session(&session), &opts);
        assert!(!text.contains("\nDoses"));
    }
}
