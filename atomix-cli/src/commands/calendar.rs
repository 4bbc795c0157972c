use anyhow::{Context, Result, anyhow};
use atomix_calendar::{
    CalendarDate, Weekday, YearMonth,
    grid::{self, GRID_COLUMNS},
};
use atomix_dom::{DatePickerOptions, DomHost, MemoryDocument, initialize_all};
use console::Style;

use crate::output;

pub struct CalendarOptions {
    pub month: Option<String>,
    pub week_numbers: bool,
    pub first_day: Weekday,
    pub html: bool,
}

pub fn execute(options: &CalendarOptions) -> Result<()> {
    let today = CalendarDate::today();
    let month = match options.month.as_deref() {
        Some(text) => parse_month(text)?,
        None => today.year_month(),
    };

    let rendered = if options.html {
        render_html(month, options, today)?
    } else {
        render_text(
            month,
            options.first_day,
            options.week_numbers,
            today,
            console::colors_enabled(),
        )
    };
    output::status(
        "Calendar",
        format!("{} {}", grid::month_name(month.month()), month.year()),
    );
    println!("{rendered}");
    Ok(())
}

fn parse_month(text: &str) -> Result<YearMonth> {
    let (year, month) = text
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("expected yyyy-MM, got `{text}`"))?;
    let year = year
        .parse()
        .with_context(|| format!("invalid year in `{text}`"))?;
    let month = month
        .parse()
        .with_context(|| format!("invalid month in `{text}`"))?;
    YearMonth::new(year, month).ok_or_else(|| anyhow!("month must be 1-12, got `{text}`"))
}

/// A `cal`-style grid: title, weekday header and six week rows.
pub fn render_text(
    month: YearMonth,
    first_day: Weekday,
    week_numbers: bool,
    today: CalendarDate,
    colors: bool,
) -> String {
    let outside = Style::new().dim().force_styling(colors);
    let highlight = Style::new().reverse().force_styling(colors);
    let prefix = if week_numbers { "Wk " } else { "" };

    let mut lines = Vec::with_capacity(8);
    let title = format!("{} {}", grid::month_name(month.month()), month.year());
    lines.push(format!("{prefix}{title:^20}").trim_end().to_string());
    lines.push(format!(
        "{prefix}{}",
        grid::weekday_labels(first_day).join(" ")
    ));

    for week in grid::month_grid(month, first_day).chunks(GRID_COLUMNS) {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| {
                let text = format!("{:>2}", cell.date.day());
                if cell.date == today {
                    highlight.apply_to(text).to_string()
                } else if !cell.is_current_month {
                    outside.apply_to(text).to_string()
                } else {
                    text
                }
            })
            .collect();
        let line = match week.first() {
            Some(first) if week_numbers => {
                format!("{:>2} {}", first.date.week_number(), cells.join(" "))
            }
            _ => cells.join(" "),
        };
        lines.push(line);
    }
    lines.join("\n")
}

fn render_html(month: YearMonth, options: &CalendarOptions, today: CalendarDate) -> Result<String> {
    let mut doc = MemoryDocument::new();
    let element = doc.create_element("div");
    doc.set_attribute(element, "data-datepicker", "");
    doc.set_attribute(element, "data-inline", "true");
    if options.week_numbers {
        doc.set_attribute(element, "data-show-week-numbers", "true");
    }
    doc.append_to_body(element);

    let defaults = DatePickerOptions::default()
        .first_day_of_week(options.first_day)
        .today(today);
    let mut widgets = initialize_all(&mut doc, "data-datepicker", &defaults)?;
    let widget = widgets
        .first_mut()
        .context("no date picker was attached")?;
    widget.show_month(&mut doc, month);
    Ok(doc.inner_html(widget.calendar()).to_string())
}
