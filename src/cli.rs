use clap::Parser;

#[derive(Parser)]
#[command(name = "ytsum", about = "YouTube transcript summarizer HTTP service", version)]
pub struct Cli {
    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Disable request rate limiting (for local testing)
    #[arg(long)]
    pub no_rate_limit: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
