use clap::Parser;
use late_show::cli::{self, Cli, Commands};
use late_show::{Config, run};

fn main() -> anyhow::Result<()> {
    let command = Cli::parse().command.unwrap_or(Commands::Serve);

    if !command.needs_config() {
        return cli::cmd_init();
    }

    let (config, config_path) = Config::load()?;
    let worker_threads = config.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run(command, config, config_path))
}
