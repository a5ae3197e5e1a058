use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tariff-push",
    version,
    about = "Decide whether a tariff update should be pushed to the battery"
)]
pub struct Cli {
    #[arg(long, help = "Push even when the tariff is unchanged")]
    pub force: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(help = "Push request file, or - to read from stdin")]
    pub input: Option<PathBuf>,
}

impl Cli {
    // None means stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
