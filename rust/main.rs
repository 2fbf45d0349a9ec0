use busday::error::CalendarError;
use busday::scheduling::{
    adjust, BusinessDayConvention, CalendarId, CalendarManager, DateRoll,
};
use chrono::NaiveDate;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
    main <CALENDAR> <YEAR>
    main <CALENDAR> <YYYY-MM-DD> <CONVENTION>

CALENDAR is one of GBLO, NYSE, EUTA, CUST.
CONVENTION is one of \"No Adjustment\", \"Following\", \"Modified Following\",
\"Preceding\", \"Modified Preceding\".";

// A year is accepted only if every day of it is a representable date.
fn parse_year(arg: &str) -> Result<i32, CalendarError> {
    let invalid = || CalendarError::InvalidDate(arg.to_string());
    let year: i32 = arg.trim().parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
    Ok(year)
}

fn run(args: &[String]) -> Result<String, CalendarError> {
    let id: CalendarId = args[0].parse()?;
    let cal = CalendarManager::new().get(id);
    debug!(calendar = %id, holidays = cal.holidays().len(), "loaded calendar");
    match args.len() {
        2 => {
            let year = parse_year(&args[1])?;
            Ok(cal.print_year(year))
        }
        _ => {
            let date = NaiveDate::parse_from_str(&args[1], "%Y-%m-%d")
                .map_err(|_| CalendarError::InvalidDate(args[1].clone()))?;
            let convention: BusinessDayConvention = args[2].parse()?;
            let adjusted = adjust(date, cal.as_ref(), convention)?;
            Ok(adjusted.format("%Y-%m-%d").to_string())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 && args.len() != 3 {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }
    match run(&args) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
