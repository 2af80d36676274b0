pub mod check_dsn;
pub mod demo;
