use crate::types::{EcLevelArg, OutputFormat};
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "qrwire")]
#[command(about = "Turn contacts, events, WiFi credentials and links into scannable QR codes", long_about = None)]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Scheme to build, e.g. wifi, vcard, url (see --list)
    #[arg(long = "type", value_name = "SCHEME")]
    pub scheme: Option<String>,

    /// Save the code as NAME.png (any extension on NAME is replaced)
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Print the payload text instead of drawing the code
    #[arg(long)]
    pub print: bool,

    /// List the supported schemes
    #[arg(long)]
    pub list: bool,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    /// How much symbol damage scanning should tolerate
    #[arg(long, default_value = "medium")]
    pub ec_level: EcLevelArg,

    /// Pixels per module in saved images
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub box_size: u32,

    /// Quiet-zone width in modules
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(0..=50))]
    pub border: u32,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}
