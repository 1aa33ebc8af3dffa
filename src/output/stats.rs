use comfy_table::{Cell, Color};

use crate::consts::{DATE_FORMAT, MINUTES_PER_POMODORO};
use crate::core::{Period, StatsSummary};
use crate::output::format::{
    create_styled_table, format_minutes, format_number, header_cell, right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct StatsTableOptions {
    pub(crate) use_color: bool,
    /// One row per active day instead of the summary only
    pub(crate) breakdown: bool,
}

fn window_label(summary: &StatsSummary) -> String {
    let since = summary
        .since
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "beginning".to_string());
    let until = summary
        .until
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "today".to_string());
    format!("{since} → {until}")
}

pub(crate) fn render_stats_table(
    summary: &StatsSummary,
    period: Period,
    options: StatsTableOptions,
) -> String {
    let c = options.use_color;
    let cyan = if c { Some(Color::Cyan) } else { None };
    let green = if c { Some(Color::Green) } else { None };

    let mut table = create_styled_table();

    if options.breakdown {
        table.set_header(vec![
            header_cell("Date", c),
            header_cell("Pomodoros", c),
            header_cell("Minutes", c),
        ]);
        for day in &summary.days {
            table.add_row(vec![
                Cell::new(day.date.format(DATE_FORMAT).to_string()),
                right_cell(&format_number(day.count), None, false),
                right_cell(
                    &format_minutes(day.count.saturating_mul(MINUTES_PER_POMODORO)),
                    None,
                    false,
                ),
            ]);
        }
        table.add_row(vec![
            styled_cell("TOTAL", cyan, true),
            right_cell(&format_number(summary.total_pomodoros), cyan, true),
            right_cell(&format_minutes(summary.total_minutes), green, true),
        ]);
    } else {
        table.set_header(vec![header_cell("Metric", c), header_cell("Value", c)]);
        let rows = [
            ("Total pomodoros", format_number(summary.total_pomodoros)),
            ("Total focus time", format_minutes(summary.total_minutes)),
            ("Active days", format_number(summary.days_active as i64)),
            ("Daily average", format!("{:.1}", summary.daily_average)),
        ];
        for (label, value) in rows {
            table.add_row(vec![Cell::new(label), right_cell(&value, green, false)]);
        }
    }

    format!(
        "\n  🍅 Pomodoro Statistics: {} ({})\n\n{table}\n",
        period.label(),
        window_label(summary)
    )
}

pub(crate) fn print_stats_table(summary: &StatsSummary, period: Period, options: StatsTableOptions) {
    println!("{}", render_stats_table(summary, period, options));
}

pub(crate) fn output_stats_json(summary: &StatsSummary, period: Period) -> serde_json::Result<String> {
    let days: Vec<serde_json::Value> = summary
        .days
        .iter()
        .map(|d| {
            serde_json::json!({
                "date": d.date.format(DATE_FORMAT).to_string(),
                "pomodoros": d.count,
            })
        })
        .collect();
    let output = serde_json::json!({
        "period": period.label(),
        "summary": summary,
        "days": days,
    });
    serde_json::to_string_pretty(&output)
}
