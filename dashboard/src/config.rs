use clap::Parser;

/// Vehicle fuel telemetry dashboard
#[derive(Debug, Parser)]
#[command(name = "dashboard", version)]
pub struct Config {
    /// Telemetry API base URL, required unless running in demo mode
    #[arg(long, env = "API_BASE_URL", required_unless_present = "demo")]
    pub api_base_url: Option<String>,

    /// API credential, required unless running in demo mode
    #[arg(long, env = "API_KEY", required_unless_present = "demo")]
    pub api_key: Option<String>,

    /// Tracked object identifier
    #[arg(long, env = "OBJECT_ID", required_unless_present = "demo")]
    pub object_id: Option<String>,

    /// Generate synthetic data instead of calling the live API
    #[arg(long, env = "DEMO_MODE")]
    pub demo: bool,

    /// Network timeout in seconds
    #[arg(long, env = "TIMEOUT_SECS", default_value_t = 5)]
    pub timeout_secs: u64,

    /// Range start, RFC 3339 or YYYY-MM-DDTHH:MM (defaults to 24h before end)
    #[arg(long)]
    pub from: Option<String>,

    /// Range end, same formats (defaults to now)
    #[arg(long)]
    pub to: Option<String>,

    /// Invoke the show-details hook for the displayed object after loading
    #[arg(long)]
    pub show_details: bool,

    /// Invoke the download-report hook for the displayed object after loading
    #[arg(long)]
    pub download_report: bool,
}
