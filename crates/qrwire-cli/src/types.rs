use clap::ValueEnum;
use qrwire_types::EcLevel;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EcLevelArg {
    Low,
    Medium,
    Quartile,
    High,
}

impl fmt::Display for EcLevelArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcLevelArg::Low => write!(f, "low"),
            EcLevelArg::Medium => write!(f, "medium"),
            EcLevelArg::Quartile => write!(f, "quartile"),
            EcLevelArg::High => write!(f, "high"),
        }
    }
}

impl From<EcLevelArg> for EcLevel {
    fn from(arg: EcLevelArg) -> Self {
        match arg {
            EcLevelArg::Low => EcLevel::Low,
            EcLevelArg::Medium => EcLevel::Medium,
            EcLevelArg::Quartile => EcLevel::Quartile,
            EcLevelArg::High => EcLevel::High,
        }
    }
}
