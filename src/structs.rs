use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Generate a self-signed key and certificate for development, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, requires("create_selfsigned"), default_value = "localhost")]
    pub selfsigned_domain: String,
    #[arg(long, requires("create_selfsigned"), default_value = "certs/tls.crt")]
    pub selfsigned_certfile: String,
    #[arg(long, requires("create_selfsigned"), default_value = "certs/tls.key")]
    pub selfsigned_keyfile: String,
    /// Validity of the generated certificate in days.
    #[arg(long, requires("create_selfsigned"), default_value_t = 365)]
    pub selfsigned_days: u32,
}
