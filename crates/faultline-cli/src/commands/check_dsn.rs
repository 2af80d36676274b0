//! Check-DSN command
//!
//! Usage: faultline check-dsn <DSN>

use clap::Args;
use faultline_core::Dsn;

#[derive(Debug, Args)]
pub struct CheckDsnArgs {
    /// DSN to validate
    pub dsn: String,
}

/// Execute check-dsn command
pub fn execute(args: CheckDsnArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dsn = Dsn::parse(&args.dsn)?;

    println!("host:       {}", dsn.host());
    println!("project id: {}", dsn.project_id());
    println!("store url:  {}", dsn.store_url());

    Ok(())
}
