pub mod config;
pub mod dictionary;
pub mod quiz;
pub mod srs;
pub mod vocabulary;

use chrono::{Local, NaiveDate};

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
