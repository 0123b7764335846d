// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use lambda_deploy::types::{EnvVar, FunctionName, Region};

#[derive(Parser)]
#[command(name = "lambda-deploy")]
#[command(about = "Scaffold and deploy Node.js AWS Lambda functions")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (API requests and responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final result
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print results as JSON lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not check the installed node and yarn versions
    #[arg(long, global = true, env = "LAMBDA_DEPLOY_SKIP_TOOLCHAIN_CHECK")]
    pub skip_toolchain_check: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create lambda-deploy.json in the current directory
    Init {
        /// Reset an existing file to an empty configuration
        #[arg(long)]
        force: bool,
    },

    /// Scaffold a new function directory
    Create(CreateArgs),

    /// Package a function directory and create or update it in AWS
    Deploy(DeployArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    /// Function name, also the directory name (prompted when omitted)
    pub name: Option<FunctionName>,

    /// Prefix for the function name within AWS ("null" for none)
    #[arg(long)]
    pub prefix: Option<String>,

    /// AWS region the function will be deployed to
    #[arg(long)]
    pub region: Option<Region>,

    /// Never prompt; fall back to configured defaults
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Args)]
pub struct DeployArgs {
    /// Function directory in the current directory
    pub name: FunctionName,

    /// Function description
    #[arg(long)]
    pub desc: Option<String>,

    /// Environment variable for the function (repeatable)
    #[arg(short, long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<EnvVar>,

    /// Prefix for the function name within AWS ("null" for none)
    #[arg(long, env = "PREFIX")]
    pub prefix: Option<String>,

    /// AWS region to deploy to
    #[arg(long)]
    pub region: Option<Region>,

    /// Execution role ARN, required when the function is created
    #[arg(long)]
    pub role: Option<String>,

    /// Runtime identifier for a new function
    #[arg(long)]
    pub runtime: Option<String>,

    /// Handler for a new function
    #[arg(long)]
    pub handler: Option<String>,

    /// Memory size in MB for a new function
    #[arg(long, value_parser = clap::value_parser!(i32).range(128..=10240))]
    pub memory: Option<i32>,

    /// Timeout in seconds for a new function
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=900))]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn deploy_collects_repeated_env_pairs() {
        let cli = Cli::try_parse_from([
            "lambda-deploy",
            "deploy",
            "myFunFunction",
            "--env",
            "STAGE=prod",
            "-e",
            "URL=https://x?a=b",
        ])
        .unwrap();

        let Commands::Deploy(args) = cli.command else {
            panic!("expected deploy");
        };
        assert_eq!(args.env.len(), 2);
        assert_eq!(args.env[1].value(), "https://x?a=b");
    }

    #[test]
    fn deploy_rejects_pair_without_separator() {
        let result = Cli::try_parse_from(["lambda-deploy", "deploy", "fn", "--env", "STAGE"]);
        assert!(result.is_err());
    }

    #[test]
    fn create_name_is_optional() {
        let cli = Cli::try_parse_from(["lambda-deploy", "create", "--no-input"]).unwrap();
        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert!(args.name.is_none());
        assert!(args.no_input);
    }

    #[test]
    fn quiet_conflicts_with_json() {
        let result = Cli::try_parse_from(["lambda-deploy", "-q", "--json", "init"]);
        assert!(result.is_err());
    }
}
