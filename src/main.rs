use anyhow::Context;
use netsh_fw::config::cli::USAGE;
use netsh_fw::utils::{logger, validation::Validate};
use netsh_fw::{app, CliConfig, CommandRunner, DryRunRunner, Firewall, FwConfig, FwError, NetshRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match netsh_fw::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(FwError::HelpDisplayed { text }) => {
            print!("{}", text);
            return;
        }
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {:#}", e);
        match e.downcast_ref::<FwError>() {
            Some(fw_error) => {
                eprintln!("❌ {}", fw_error.user_friendly_message());
                eprintln!("💡 {}", fw_error.recovery_suggestion());
            }
            None => eprintln!("❌ {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let config = FwConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config file '{}'", path.display()),
        None => "Failed to build default configuration".to_string(),
    })?;
    config.validate()?;

    let runner: Box<dyn CommandRunner> = if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - netsh will not be executed");
        Box::new(DryRunRunner::new(config.netsh.program.clone()))
    } else {
        Box::new(NetshRunner::new(config.netsh.program.clone()))
    };
    let firewall = Firewall::new(runner, config);

    let mut stdout = std::io::stdout().lock();
    app::execute(&firewall, &cli.command, &mut stdout).await?;
    Ok(())
}
