use charstat::args::Args;
use charstat::config::CliConfig;
use clap::Parser;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // log クレート経由の記録も tracing-log ブリッジで拾われる
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // 使い方の誤りは終了コード1（--help / --version は0）
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(args.verbose);

    let result = CliConfig::try_from(args).and_then(|config| charstat::app::run(&config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("charstat: {e}");
            ExitCode::FAILURE
        }
    }
}
