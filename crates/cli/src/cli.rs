use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gymfee_membership::PremiumTier;
use gymfee_observability::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "gymfee", version, about = "Gym membership pricing")]
pub struct Cli {
    /// JSON catalog of plans and features (defaults to the built-in catalog)
    #[arg(long, env = "GYMFEE_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Fallback log filter when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Emit human-readable logs instead of JSON
    #[arg(long, global = true)]
    pub pretty_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn log_format(&self) -> LogFormat {
        if self.pretty_logs {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Walk through plan, members, features and premium tier interactively (default)
    Interactive,

    /// Price a selection without prompting
    Quote(QuoteArgs),

    /// Print the summaries of a set of canned selections
    Demo,

    /// List available plans and features
    Catalog,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Membership plan name
    #[arg(long, required_unless_present = "selection")]
    pub plan: Option<String>,

    /// Add-on feature; repeat to add several (duplicates are charged each time)
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Number of members (1-10)
    #[arg(long, default_value = "1")]
    pub members: String,

    /// Premium tier: none, exclusive-facilities or specialized-training
    #[arg(long, default_value = "none")]
    pub premium: PremiumTier,

    /// Read the selection from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["plan", "features", "members", "premium"])]
    pub selection: Option<PathBuf>,

    /// Print the quote as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["gymfee"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn quote_collects_repeated_features() {
        let cli = Cli::try_parse_from([
            "gymfee",
            "quote",
            "--plan",
            "Family",
            "--feature",
            "Personal Training",
            "--feature",
            "Personal Training",
            "--members",
            "3",
            "--premium",
            "specialized-training",
        ])
        .unwrap();

        let Some(Commands::Quote(args)) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.plan.as_deref(), Some("Family"));
        assert_eq!(args.features, vec!["Personal Training", "Personal Training"]);
        assert_eq!(args.members, "3");
        assert_eq!(args.premium, PremiumTier::SpecializedTraining);
    }

    #[test]
    fn quote_requires_plan_or_selection_file() {
        assert!(Cli::try_parse_from(["gymfee", "quote"]).is_err());
        assert!(Cli::try_parse_from(["gymfee", "quote", "--selection", "s.json"]).is_ok());
        assert!(Cli::try_parse_from(["gymfee", "quote", "--premium", "gold", "--plan", "Basic"]).is_err());
    }

    #[test]
    fn selection_file_rejects_flag_overrides() {
        for extra in [
            ["--members", "3"],
            ["--premium", "exclusive-facilities"],
            ["--plan", "Basic"],
            ["--feature", "Yoga"],
        ] {
            let mut argv = vec!["gymfee", "quote", "--selection", "s.json"];
            argv.extend(extra);
            assert!(Cli::try_parse_from(argv).is_err(), "{extra:?}");
        }
    }
}
