use anyhow::{Result, anyhow};
use atomix_calendar::format::{format_range_text, parse_date, parse_date_range};

use crate::output;

const ISO_FORMAT: &str = "yyyy-MM-dd";

pub fn execute(text: &str, format: &str, range: bool) -> Result<()> {
    println!("{}", describe(text, format, range)?);
    Ok(())
}

/// Parses `text` and returns it in ISO form.
pub fn describe(text: &str, format: &str, range: bool) -> Result<String> {
    if range {
        let (mut start, mut end) = parse_date_range(text, format)
            .ok_or_else(|| anyhow!("`{text}` is not a date range in {format}"))?;
        if end < start {
            output::note("range endpoints were given in reverse order");
            std::mem::swap(&mut start, &mut end);
        }
        output::status(
            "Parsed",
            format!("{} days", end.days_since(start) + 1),
        );
        return Ok(format_range_text(Some(start), Some(end), ISO_FORMAT));
    }

    let date = parse_date(text, format)
        .ok_or_else(|| anyhow!("`{text}` is not a date in {format}"))?;
    output::status(
        "Parsed",
        format!("{}, week {}", date.weekday(), date.week_number()),
    );
    Ok(date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dates() {
        assert_eq!(describe("03/15/2024", "MM/dd/yyyy", false).expect("date"), "2024-03-15");
        assert_eq!(describe("15/03/2024", "dd/MM/yyyy", false).expect("date"), "2024-03-15");
        assert_eq!(describe("March 15, 2024", "d MMM", false).expect("date"), "2024-03-15");
        assert!(describe("02/30/2024", "MM/dd/yyyy", false).is_err());
    }

    #[test]
    fn ranges_are_ordered() {
        assert_eq!(
            describe("03/20/2024 - 03/15/2024", "MM/dd/yyyy", true).expect("range"),
            "2024-03-15 - 2024-03-20"
        );
        assert!(describe("2024-03-15 - 2024-03-20", "yyyy-MM-dd", true).is_err());
        assert!(describe("03/15/2024", "MM/dd/yyyy", true).is_err());
    }
}
