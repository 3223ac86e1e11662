use log::error;

use workout_cli::workout_cli_opts::WorkoutCliOpts;

#[tokio::main]
async fn main() {
    env_logger::init();

    match WorkoutCliOpts::process_args().await {
        Ok(()) => (),
        Err(e) => {
            if e.to_string().contains("Broken pipe") {
            } else {
                error!("{e}");
                eprintln!("{e}");
                std::process::exit(if e.is_input_error() { 1 } else { 2 });
            }
        }
    }
}
