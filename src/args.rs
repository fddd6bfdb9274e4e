use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "hot_login",
    version,
    about = "Log in to the doctor or patient user pool and print the issued tokens"
)]
pub struct Args {
    /// Pool to authenticate against: doctor or patient. Prompted for when omitted.
    #[arg(short, long)]
    pub role: Option<String>,

    /// Prompted for when omitted.
    #[arg(short, long)]
    pub username: Option<String>,

    /// Prompted for (without echo) when omitted.
    #[arg(short, long, env = "HOT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Cognito region
    #[arg(long, env = "HOT_AWS_REGION")]
    pub region: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
