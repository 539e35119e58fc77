mod boards;
mod browse;
mod create;
mod play;
mod shell;

use std::{env, path::PathBuf};
use tokio::runtime::Runtime;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let base = env::var("QUIZLINE_API").unwrap_or_else(|_| String::from("http://localhost:5000"));
    let token_path = match env::var_os("QUIZLINE_TOKEN") {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(".quizline-token"),
    };

    log::info!("talking to {base}");
    let api = client::Api::new(&base);
    let session = client::Session::new(api, token_path);

    let runtime = Runtime::new()?;
    runtime.block_on(shell::run(session))
}
