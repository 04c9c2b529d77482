use tracing_subscriber::EnvFilter;
use worklog::msg_error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = worklog::ui::run() {
        msg_error!(err);
        std::process::exit(1);
    }
}
