#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod workout_report;
pub mod workout_report_json;
pub mod workout_report_txt;
