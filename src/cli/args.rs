//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Component renderer and asset bundler CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Components directory path (relative to project root)
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub components: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: components.toml)
    #[arg(short = 'C', long, global = true, default_value = "components.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render components in one pass and write the asset bundles
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// List the loaded component tree
    #[command(visible_alias = "l")]
    List,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Dotted component paths, e.g. `layout.header`
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Properties passed to every call, as a JSON object
    #[arg(short, long, value_name = "JSON")]
    pub props: Option<String>,

    /// Skip writing the css/js bundles
    #[arg(long)]
    pub no_bundle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from([
            "tola-components",
            "render",
            "button",
            "layout.Header",
            "--props",
            r#"{"label":"Hi"}"#,
        ]);
        let Commands::Render { args } = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.paths, vec!["button", "layout.Header"]);
        assert_eq!(args.props.as_deref(), Some(r#"{"label":"Hi"}"#));
        assert!(!args.no_bundle);
        assert_eq!(cli.config, PathBuf::from("components.toml"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tola-components", "list", "-v", "-C", "site.toml"]);
        assert!(matches!(cli.command, Commands::List));
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_render_requires_path() {
        assert!(Cli::try_parse_from(["tola-components", "render"]).is_err());
    }
}
