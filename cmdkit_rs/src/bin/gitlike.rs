//! `gitlike` - a dummy git front-end built on cmdkit.
//!
//! Exercises every parsing form: flag-only options, `--flag value`,
//! `--flag=value`, flagless positional values and the `--` stop marker.

use cmdkit::{AppInfo, Cli, CliResult, Command, Context, EXIT_SUCCESS, Options, Outcome};

#[derive(Debug, Default)]
struct CommitCommand {
    all: bool,
    patch: bool,
    message: Option<String>,
    reuse: Option<String>,
    paths: Vec<String>,
}

impl Command for CommitCommand {
    fn name(&self) -> &str {
        "commit"
    }

    fn help_description(&self) -> &str {
        "Record changes to the repository"
    }

    fn fail_on_unrecognized_options(&self) -> bool {
        true
    }

    fn configure_options(&self, options: &mut Options<Self>) {
        options
            .add_option(&["-a", "--all"], "commit all changed files", |cmd, _, _| {
                cmd.all = true
            })
            .add_option(&["-p", "--patch"], "pick hunks interactively", |cmd, _, _| {
                cmd.patch = true
            })
            .add_option_value(
                &["-m", "--message"],
                "use the given message",
                "<msg>",
                |cmd, _, value| cmd.message = value.map(str::to_owned),
            )
            .add_option_value(
                &["-C", "--reuse-message"],
                "reuse the message of a commit",
                "<commit>",
                |cmd, _, value| cmd.reuse = value.map(str::to_owned),
            )
            .add_quiet_option(&["-q", "--quiet"], "suppress summary output")
            .add_flagless_option_values(&["<pathspec>"], |cmd, _, value| {
                cmd.paths.extend(value.map(str::to_owned))
            });
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<Outcome> {
        let message = self
            .message
            .as_deref()
            .or(self.reuse.as_deref())
            .unwrap_or("<none>");
        ctx.out(&format!("message: {message}"))?;
        ctx.out(&format!("all: {}", self.all))?;
        ctx.out(&format!("patch: {}", self.patch))?;
        ctx.out(&format!("paths: {}", self.paths.join(" ")))?;
        if ctx.verbose() {
            ctx.out(&format!("verbose: {} path(s) staged", self.paths.len()))?;
        }
        Ok(Outcome::success().describe("committed"))
    }
}

#[derive(Debug, Default)]
struct StatusCommand {
    short: bool,
    branch: bool,
    paths: Vec<String>,
}

impl Command for StatusCommand {
    fn name(&self) -> &str {
        "status"
    }

    fn help_description(&self) -> &str {
        "Show the working tree status"
    }

    fn configure_options(&self, options: &mut Options<Self>) {
        options
            .add_option(&["-s", "--short"], "give the output in short format", |cmd, _, _| {
                cmd.short = true
            })
            .add_option(&["-b", "--branch"], "show branch information", |cmd, _, _| {
                cmd.branch = true
            })
            .add_flagless_option_values(&["<pathspec>"], |cmd, _, value| {
                cmd.paths.extend(value.map(str::to_owned))
            });
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<Outcome> {
        let format = if self.short { "short" } else { "long" };
        ctx.out(&format!("status ({format})"))?;
        if self.branch {
            ctx.out("on branch main")?;
        }
        for path in &self.paths {
            ctx.out(&format!("  {path}"))?;
        }
        Ok(Outcome::success())
    }
}

fn register(cli: &mut Cli) -> CliResult<()> {
    cli.add_command(CommitCommand::default())?
        .add_command(StatusCommand::default())?;
    Ok(())
}

fn main() {
    cmdkit::init_logging();

    let mut cli = Cli::new(AppInfo::new(
        "gitlike",
        env!("CARGO_PKG_VERSION"),
        "A dummy git interface",
    ));
    if let Err(err) = register(&mut cli) {
        let code = cli.report_error(&err);
        std::process::exit(code);
    }

    let code = cli
        .run_or_exit()
        .and_then(|result| result.result_code)
        .unwrap_or(EXIT_SUCCESS);
    std::process::exit(code);
}
