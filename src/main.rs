use anyhow::Result;
use clap::Parser;

use covsum::cli::{self, Style};
use covsum::model::Options;

/// covsum — Summarize a Cobertura coverage report.
#[derive(Parser)]
#[command(name = "covsum", version, about)]
struct Cli {
    /// Path to the Cobertura XML report. Glob patterns use the first match.
    report: String,

    /// Leave fully covered files out of the listing.
    #[arg(long, env = "COVSUM_SKIP_COVERED")]
    skip_covered: bool,

    /// Output style.
    #[arg(long, value_enum, default_value = "text")]
    style: Style,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = Options {
        skip_covered: cli.skip_covered,
    };

    let output = cli::cmd_summary(&cli.report, &options, cli.style)?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_covered_from_flag_and_env() {
        std::env::remove_var("COVSUM_SKIP_COVERED");
        let cli = Cli::try_parse_from(["covsum", "coverage.xml"]).unwrap();
        assert!(!cli.skip_covered);
        assert_eq!(cli.style, Style::Text);

        let cli = Cli::try_parse_from(["covsum", "--skip-covered", "coverage.xml"]).unwrap();
        assert!(cli.skip_covered);

        std::env::set_var("COVSUM_SKIP_COVERED", "true");
        let from_env = Cli::try_parse_from(["covsum", "coverage.xml"]);
        std::env::set_var("COVSUM_SKIP_COVERED", "false");
        let disabled = Cli::try_parse_from(["covsum", "coverage.xml"]);
        std::env::remove_var("COVSUM_SKIP_COVERED");

        assert!(from_env.unwrap().skip_covered);
        assert!(!disabled.unwrap().skip_covered);
    }
}
