use std::env;
use std::process::ExitCode;

use chrono::{Datelike, Local};
use log::error;

use feiertage::calendar::holidayengine::HolidayEngine;
use feiertage::configuration::Configuration;
use feiertage::holidayerror::{HolidayError, Result};
use feiertage::region::region::Region;

// Usage: feiertage [REGION] [YEAR] [CONFIG_JSON]
fn run(args: &[String]) -> Result<()> {
    let region: Region = match args.first() {
        Some(code) => code.parse()?,
        None => Region::Bund
    };
    let year = match args.get(1) {
        Some(year) => year.parse().map_err(|_| HolidayError::InvalidYear(year.to_owned()))?,
        None => Local::now().year()
    };
    let configuration = match args.get(2) {
        Some(path) => Configuration::from_path(path)?,
        None => Configuration::new()
    };

    let engine = HolidayEngine::from_configuration(&configuration)?;
    let holidays = engine.get_holidays_of_year(year, region)?;
    println!("{}", serde_json::to_string_pretty(&holidays)?);
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn bad_arguments_surface_as_errors() {
        assert!(matches!(run(&args(&["XX"])), Err(HolidayError::UnknownRegion(_))));
        assert!(matches!(run(&args(&["BY", "next"])), Err(HolidayError::InvalidYear(_))));
        assert!(matches!(run(&args(&["BY", "1200"])), Err(HolidayError::YearOutOfRange(1200))));
        assert!(matches!(
            run(&args(&["BY", "2025", "/nonexistent/feiertage.json"])),
            Err(HolidayError::Io(_))
        ));
    }

    #[test]
    fn valid_arguments_print_the_year() {
        assert!(run(&args(&["SN", "2025"])).is_ok());
    }
}
