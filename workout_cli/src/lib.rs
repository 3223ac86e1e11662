#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod workout_cli;
pub mod workout_cli_opts;
