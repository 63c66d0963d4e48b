use clap::Parser;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

/// Query the BuiltWith API for the technology profile of a domain
#[derive(Parser, Debug)]
#[command(name = "builtwith")]
#[command(version)]
#[command(about = "Query the BuiltWith API for the technology profile of a domain", long_about = None)]
pub struct Args {
    /// Domain to look up (e.g. example.com)
    pub domain: String,

    /// BuiltWith API key
    #[arg(short, long)]
    pub key: String,

    /// API version: 1 returns the raw response, 2 returns per-URL technology sets
    #[arg(long, default_value_t = 2)]
    pub api_version: u32,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
