use clap::Parser;
use retrofit_advisor::app::{self, Cli};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 로그를 설정한 뒤 CLI 요청을 처리한다.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    if let Err(err) = app::run(&cli, &mut stdout.lock()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
