use infosweb::{
    cli::execute_command,
    commands::{create_cli_commands, PARAMETER_VERBOSE},
    exit_codes::InfoswebExitCode,
};
use tracing_subscriber::EnvFilter;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    let matches = create_cli_commands();

    // Intialize the logging subsystem; RUST_LOG wins over --verbose
    let default_filter = if matches.get_flag(PARAMETER_VERBOSE) {
        "infosweb=debug"
    } else {
        "error"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match execute_command(&matches).await {
        Ok(()) => InfoswebExitCode::Success,
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.code());
}
