use anyhow::Context;
use clap::Parser;
use tracing::debug;

use url_compactor::cli::{Cli, Commands};
use url_compactor::config::init_config;
use url_compactor::interfaces::cli::run_cli_command;
use url_compactor::system::{
    RunMode, build_runtime, init_logging, install_panic_hook, shutdown_runtime,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref()).context("failed to load configuration")?;

    let mode = match &cli.command {
        None if cfg!(feature = "tui") => RunMode::Tui,
        #[cfg(feature = "tui")]
        Some(Commands::Tui) => RunMode::Tui,
        _ => RunMode::Cli,
    };

    // 日志 guard 必须存活到程序结束
    let guard = init_logging(&config.logging, mode).context("failed to initialize logging")?;
    install_panic_hook(mode);
    debug!("Starting in {:?} mode", mode);

    let runtime = build_runtime().context("failed to start async runtime")?;
    let mut exit_code = 0;

    let result = match cli.command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => {
            let _enter = runtime.enter();
            url_compactor::interfaces::tui::run_tui(&config).context("terminal UI failed")
        }

        #[cfg(not(feature = "tui"))]
        None => Err(anyhow::anyhow!(
            "built without the `tui` feature; use `url-compactor shorten <URL>` instead"
        )),

        Some(cmd) => {
            if let Err(e) = runtime.block_on(run_cli_command(cmd, &config)) {
                eprintln!("{}", e.format_colored());
                exit_code = 1;
            }
            Ok(())
        }
    };

    // 不等待仍在进行中的请求
    shutdown_runtime(runtime);

    if exit_code != 0 {
        drop(guard);
        std::process::exit(exit_code);
    }
    result
}
