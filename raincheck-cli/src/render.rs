//! Human-readable report lines.

use chrono::{DateTime, TimeZone, Utc};
use colored::{ColoredString, Colorize};
use raincheck_core::{Forecast, HourlyForecast};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Plain,
    Current,
    Rain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub highlight: Highlight,
}

impl Line {
    pub fn styled(&self) -> ColoredString {
        match self.highlight {
            Highlight::Plain => self.text.normal(),
            Highlight::Current => self.text.green(),
            Highlight::Rain => self.text.blue(),
        }
    }
}

pub fn current_line(forecast: &Forecast) -> Line {
    let (location, current) = (&forecast.location, &forecast.current);

    Line {
        text: format!(
            "{}, {}: {:.0}°C, {}",
            location.name, location.country, current.temp_c, current.condition
        ),
        highlight: Highlight::Current,
    }
}

pub fn hour_line<Tz>(hour: &HourlyForecast, tz: &Tz, rain_threshold: f64) -> Line
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = hour.time.with_timezone(tz);

    Line {
        text: format!(
            "{} - {:.0}°C, {:.0}%, {}",
            local.format("%H:%M"),
            hour.temp_c,
            hour.chance_of_rain,
            hour.condition
        ),
        highlight: if hour.is_rainy(rain_threshold) { Highlight::Rain } else { Highlight::Plain },
    }
}

/// Current conditions followed by every hour from `now` on.
pub fn report_lines<Tz>(
    forecast: &Forecast,
    now: DateTime<Utc>,
    tz: &Tz,
    rain_threshold: f64,
) -> Vec<Line>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    std::iter::once(current_line(forecast))
        .chain(forecast.upcoming_hours(now).map(|h| hour_line(h, tz, rain_threshold)))
        .collect()
}

pub fn print_lines(lines: &[Line]) {
    for line in lines {
        println!("{}", line.styled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use raincheck_core::{CurrentConditions, Location};

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, h, 0, 0).unwrap()
    }

    fn hour(h: u32, temp_c: f64, chance_of_rain: f64, condition: &str) -> HourlyForecast {
        HourlyForecast { time: at(h), temp_c, chance_of_rain, condition: condition.into() }
    }

    fn forecast() -> Forecast {
        Forecast {
            location: Location { name: "Cracow".into(), country: "Poland".into() },
            current: CurrentConditions { temp_c: 17.8, condition: "Partly cloudy".into() },
            hours: vec![
                hour(8, 12.2, 0.0, "Clear"),
                hour(9, 13.9, 12.0, "Cloudy"),
                hour(10, 14.1, 40.0, "Light rain"),
            ],
        }
    }

    #[test]
    fn current_line_rounds_temperature() {
        let line = current_line(&forecast());

        assert_eq!(line.text, "Cracow, Poland: 18°C, Partly cloudy");
        assert_eq!(line.highlight, Highlight::Current);
    }

    #[test]
    fn hour_line_uses_given_timezone() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        let line = hour_line(&forecast().hours[1], &cest, 40.0);

        assert_eq!(line.text, "11:00 - 14°C, 12%, Cloudy");
        assert_eq!(line.highlight, Highlight::Plain);
    }

    #[test]
    fn rainy_hour_is_highlighted() {
        let line = hour_line(&forecast().hours[2], &Utc, 40.0);

        assert_eq!(line.text, "10:00 - 14°C, 40%, Light rain");
        assert_eq!(line.highlight, Highlight::Rain);
    }

    #[test]
    fn report_skips_past_hours() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 8, 15, 0).unwrap();
        let lines = report_lines(&forecast(), now, &Utc, 40.0);

        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Cracow, Poland: 18°C, Partly cloudy",
                "09:00 - 14°C, 12%, Cloudy",
                "10:00 - 14°C, 40%, Light rain",
            ]
        );
    }

    #[test]
    fn report_threshold_is_configurable() {
        let lines = report_lines(&forecast(), at(0), &Utc, 10.0);

        let highlights: Vec<_> = lines.iter().map(|l| l.highlight).collect();
        assert_eq!(
            highlights,
            vec![Highlight::Current, Highlight::Plain, Highlight::Rain, Highlight::Rain]
        );
    }
}
