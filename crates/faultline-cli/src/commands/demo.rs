//! Demo command
//!
//! Usage: faultline demo [--dsn <DSN>] [--environment <ENV>] [--hold]

use clap::Args;
use faultline_core::config::{DEFAULT_ENVIRONMENT, ENV_DSN, ENV_ENVIRONMENT};
use faultline_core::logging_facility::{self, Profile};
use faultline_core::{fields, logger, FacadeConfig, LoggerFacade};

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Backend DSN; empty disables remote reporting
    #[arg(long, env = ENV_DSN, default_value = "", hide_env_values = true)]
    pub dsn: String,

    /// Environment tag attached to remote events
    #[arg(long, env = ENV_ENVIRONMENT, default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// Keep running until Ctrl-C or SIGTERM
    #[arg(long)]
    pub hold: bool,
}

/// Flushes the global logger when dropped, covering early returns
struct FlushGuard;

impl Drop for FlushGuard {
    fn drop(&mut self) {
        logger().flush();
    }
}

#[derive(Debug)]
struct DemoFault(&'static str);

impl std::fmt::Display for DemoFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for DemoFault {}

/// Execute demo command
pub fn execute(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    logging_facility::init(Profile::Development);

    let config = FacadeConfig::new(args.dsn, args.environment);
    let log = logger();
    log.init_with_config(&config)?;
    let _flush = FlushGuard;

    log.info("Application started", None);

    log.debug("This is a debug message", None);
    log.info("This is an info message", None);
    log.warn("This is a warning message", None);

    log.info(
        "User logged in",
        Some(fields! {
            "user_id" => 12345,
            "action" => "login",
            "ip" => "192.168.1.1",
        }),
    );

    log.error(
        "This is an error - will be sent to the error backend",
        Some(fields! {
            "component" => "example",
            "severity" => "high",
        }),
    );

    let fault = DemoFault("database connection failed");
    log.error_with_err(
        Some(&fault),
        "Failed to connect to database",
        Some(fields! {
            "database" => "postgres",
            "host" => "localhost",
            "port" => 5432,
        }),
    );

    if args.hold {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(wait_for_shutdown(log))?;
        log.info("Shutting down gracefully", None);
    }

    Ok(())
}

/// Block until Ctrl-C or SIGTERM; announces itself once the handlers are in
/// place
#[cfg(unix)]
async fn wait_for_shutdown(log: &LoggerFacade) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    let interrupt = tokio::signal::ctrl_c();
    log.info("Application running, press Ctrl-C to stop", None);
    tokio::select! {
        r = interrupt => r,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown(log: &LoggerFacade) -> std::io::Result<()> {
    log.info("Application running, press Ctrl-C to stop", None);
    tokio::signal::ctrl_c().await
}
