// ABOUTME: Create command implementation.
// ABOUTME: Collects name, prefix and region (prompting when needed) and scaffolds the function.

use dialoguer::{Confirm, Input, Select};
use is_terminal::IsTerminal;
use std::path::Path;

use crate::cli::CreateArgs;
use lambda_deploy::config::{Defaults, FunctionSettings, LocalConfig};
use lambda_deploy::diagnostics::{Diagnostics, Warning};
use lambda_deploy::error::{Error, Result};
use lambda_deploy::output::{Output, OutputMode};
use lambda_deploy::package::Yarn;
use lambda_deploy::scaffold::{InstallStatus, create_boilerplate, function_dir};
use lambda_deploy::types::{FunctionName, FunctionPrefix, NO_PREFIX, REGIONS, Region};

const DEFAULT_FUNCTION_NAME: &str = "myFunFunction";

/// Answers collected for a new function.
struct Answers {
    name: FunctionName,
    prefix: Option<FunctionPrefix>,
    region: Option<Region>,
    save_as_defaults: bool,
}

pub async fn create(dir: &Path, args: CreateArgs, output: &mut Output) -> Result<()> {
    output.start_timer();

    let mut config = LocalConfig::open(dir)?;
    let defaults = config.defaults()?;

    let tty = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();

    let answers = if should_prompt(args.no_input, output.mode(), tty) {
        prompt(dir, args, &defaults)?
    } else {
        from_args(args, defaults)?
    };

    let yarn = Yarn::new();
    output.progress(&format!(
        "Creating function {} in {}...",
        answers.name,
        function_dir(dir, &answers.name).display()
    ));
    output.progress("  → Installing dependencies...");
    let scaffolded = create_boilerplate(dir, &answers.name, &yarn).await?;

    let mut diag = Diagnostics::default();
    if let InstallStatus::Failed(reason) = &scaffolded.install {
        diag.warn(Warning::install(format!(
            "installing dependencies for {} failed: {reason}",
            answers.name
        )));
    }

    if answers.save_as_defaults {
        config.save_defaults(answers.prefix.as_ref(), answers.region.as_ref());
    }
    config.record_function(
        &answers.name,
        &FunctionSettings {
            prefix: answers.prefix,
            region: answers.region,
        },
    );
    config.save()?;

    for warning in diag.warnings() {
        output.warning(&warning.message);
    }
    let note = if diag.has_warnings() { " with warnings" } else { "" };
    output.success(&format!(
        "Function {} created at {}{note}",
        answers.name,
        scaffolded.dir.display()
    ));
    Ok(())
}

/// Prompts go to stderr, so quiet output still asks; JSON output never does.
fn should_prompt(no_input: bool, mode: OutputMode, tty: bool) -> bool {
    !no_input && tty && mode != OutputMode::Json
}

/// Ask for every value not given on the command line.
fn prompt(dir: &Path, args: CreateArgs, defaults: &Defaults) -> Result<Answers> {
    let mut asked = false;

    let name = match args.name {
        Some(name) => name,
        None => {
            asked = true;
            Input::<FunctionName>::new()
                .with_prompt("Name of Function")
                .default(FunctionName::new(DEFAULT_FUNCTION_NAME)?)
                .validate_with(|name: &FunctionName| -> std::result::Result<(), String> {
                    if function_dir(dir, name).exists() {
                        Err(format!("Directory under the name {name} already exists."))
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?
        }
    };

    let prefix = match args.prefix {
        Some(raw) => FunctionPrefix::parse_optional(&raw)?,
        None => {
            asked = true;
            let default = defaults
                .function_prefix
                .as_ref()
                .map_or_else(|| NO_PREFIX.to_string(), ToString::to_string);
            let raw: String = Input::new()
                .with_prompt(
                    "Lambda Function Name Prefix? (used only to name the function within AWS)",
                )
                .default(default)
                .interact_text()?;
            FunctionPrefix::parse_optional(&raw)?
        }
    };

    let region = match args.region {
        Some(region) => Some(region),
        None => {
            asked = true;
            let selection = Select::new()
                .with_prompt("AWS Region?")
                .items(REGIONS)
                .default(defaults.aws_region.as_ref().map_or(0, Region::index))
                .interact()?;
            Some(
                Region::all()
                    .nth(selection)
                    .ok_or(Error::MissingInput("region"))?,
            )
        }
    };

    let save_as_defaults = asked
        && Confirm::new()
            .with_prompt("Save your settings as defaults?")
            .default(false)
            .interact()?;

    Ok(Answers {
        name,
        prefix,
        region,
        save_as_defaults,
    })
}

/// Fill in missing values from the configured defaults without prompting.
fn from_args(args: CreateArgs, defaults: Defaults) -> Result<Answers> {
    let name = args.name.ok_or(Error::MissingInput("function name"))?;
    let prefix = match args.prefix {
        Some(raw) => FunctionPrefix::parse_optional(&raw)?,
        None => defaults.function_prefix,
    };

    Ok(Answers {
        name,
        prefix,
        region: args.region.or(defaults.aws_region),
        save_as_defaults: false,
    })
}
