//! Dispatcher contract tests: command identification, option matching,
//! positional delivery, stop marker and error surfacing, driven through the
//! public API with an in-memory sink.

use std::cell::Cell;
use std::rc::Rc;

use cmdkit::{
    AppInfo, Cli, CliError, CliResult, Command, CommandHandle, Context, MemorySink, Options,
    Outcome,
};

#[derive(Debug, Default)]
struct CommitCommand {
    strict: bool,
    all: bool,
    all_flag: Option<String>,
    patch: bool,
    message: Option<String>,
    commit: Option<String>,
    non_flag_values: Vec<String>,
    executions: Rc<Cell<usize>>,
}

impl CommitCommand {
    fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

impl Command for CommitCommand {
    fn name(&self) -> &str {
        "commit"
    }

    fn help_description(&self) -> &str {
        "Record changes to the repository"
    }

    fn fail_on_unrecognized_options(&self) -> bool {
        self.strict
    }

    fn configure_options(&self, options: &mut Options<Self>) {
        options
            .add_option(&["-a", "--all"], "commit all changed files", |cmd, flag, _| {
                cmd.all = true;
                cmd.all_flag = flag.map(str::to_owned);
            })
            .add_option(&["-p", "--patch"], "pick hunks interactively", |cmd, _, _| {
                cmd.patch = true
            })
            .add_option_value(&["-m", "--message"], "commit message", "<msg>", |cmd, _, value| {
                cmd.message = value.map(str::to_owned)
            })
            .add_option_value(
                &["-C", "--reuse-message"],
                "reuse message from commit",
                "<commit>",
                |cmd, _, value| cmd.commit = value.map(str::to_owned),
            )
            .add_flagless_option_values(&["<pathspec>"], |cmd, _, value| {
                cmd.non_flag_values.extend(value.map(str::to_owned))
            });
    }

    fn execute(&mut self, _ctx: &mut Context<'_>) -> CliResult<Outcome> {
        self.executions.set(self.executions.get() + 1);
        Ok(Outcome::success())
    }
}

fn git(args: &[&str]) -> Cli<MemorySink> {
    let mut argv = vec!["git"];
    argv.extend_from_slice(args);
    Cli::from_argv(
        AppInfo::new("git", "1.0", "A dummy git interface"),
        argv,
        MemorySink::new(),
    )
}

fn run_commit(args: &[&str]) -> CommitCommandState {
    let mut cli = git(args);
    cli.add_command(CommitCommand::strict()).unwrap();
    let result = cli.run().unwrap().expect("a command should run");
    let command = result.command::<CommitCommand>().expect("commit ran");
    CommitCommandState::from(command)
}

#[derive(Debug, PartialEq, Eq)]
struct CommitCommandState {
    all: bool,
    patch: bool,
    message: Option<String>,
    commit: Option<String>,
    non_flag_values: Vec<String>,
}

impl From<&CommitCommand> for CommitCommandState {
    fn from(cmd: &CommitCommand) -> Self {
        Self {
            all: cmd.all,
            patch: cmd.patch,
            message: cmd.message.clone(),
            commit: cmd.commit.clone(),
            non_flag_values: cmd.non_flag_values.clone(),
        }
    }
}

mod command_interpretation {
    use super::*;

    #[test]
    fn basic_command_interpretation() {
        let state = run_commit(&["commit", "-a", "-m", "a commit message"]);
        assert!(state.all);
        assert_eq!(state.message.as_deref(), Some("a commit message"));
        assert!(!state.patch);
        assert_eq!(state.commit, None);
        assert!(state.non_flag_values.is_empty());
    }

    #[test]
    fn alternate_value_marker_is_equivalent() {
        let spaced = run_commit(&["commit", "-a", "-m", "a commit message"]);
        let inline = run_commit(&["commit", "--all", "--message=a commit message"]);
        assert_eq!(spaced, inline);
    }

    #[test]
    fn short_and_long_alias_report_matched_flag() {
        for flag in ["-a", "--all"] {
            let mut cli = git(&["commit", flag]);
            cli.add_command(CommitCommand::default()).unwrap();
            let result = cli.run().unwrap().unwrap();
            let command = result.command::<CommitCommand>().unwrap();
            assert!(command.all);
            assert_eq!(command.all_flag.as_deref(), Some(flag));
        }
    }

    #[test]
    fn stop_marker_discards_remaining_tokens() {
        let state = run_commit(&["commit", "-a", "--", "-m", "a commit message", "p1"]);
        assert!(state.all);
        assert_eq!(state.message, None);
        assert!(!state.patch);
        assert_eq!(state.commit, None);
        assert!(state.non_flag_values.is_empty());
    }

    #[test]
    fn flagless_values_arrive_one_per_token() {
        let state = run_commit(&[
            "commit",
            "-a",
            "-m",
            "a commit message",
            "firstFlaglessParam",
            "secondFlaglessParam",
            "thirdFlaglessParam",
        ]);
        assert!(state.all);
        assert!(state.message.is_some());
        assert_eq!(
            state.non_flag_values,
            [
                "firstFlaglessParam",
                "secondFlaglessParam",
                "thirdFlaglessParam"
            ]
        );
        assert!(!state.patch);
        assert_eq!(state.commit, None);
    }

    #[test]
    fn positional_callback_invocation_count() {
        #[derive(Default)]
        struct Counter {
            calls: usize,
        }

        impl Command for Counter {
            fn name(&self) -> &str {
                "count"
            }

            fn configure_options(&self, options: &mut Options<Self>) {
                options.add_flagless_option_values(&["<item>"], |cmd, flag, value| {
                    assert!(flag.is_none());
                    assert!(value.is_some());
                    cmd.calls += 1;
                });
            }

            fn execute(&mut self, _ctx: &mut Context<'_>) -> CliResult<Outcome> {
                Ok(Outcome::success())
            }
        }

        let mut cli = git(&["count", "p1", "p2", "p3"]);
        cli.add_command(Counter::default()).unwrap();
        let result = cli.run().unwrap().unwrap();
        assert_eq!(result.command::<Counter>().unwrap().calls, 3);
    }

    #[test]
    fn verbose_global_option_is_visible_on_result() {
        let mut cli = git(&["commit", "-v"]);
        cli.add_command(CommitCommand::default()).unwrap();
        let result = cli.run().unwrap().unwrap();
        let handle = result.executed_command.unwrap();
        assert!(handle.verbose());
        assert!(!handle.quiet());
    }
}

mod error_surfacing {
    use super::*;

    #[test]
    fn unknown_command_does_not_execute_anything() {
        let executions = Rc::new(Cell::new(0));
        let mut cli = git(&["unknownCmd", "--x"]);
        cli.add_command(CommitCommand {
            executions: Rc::clone(&executions),
            ..CommitCommand::default()
        })
        .unwrap();

        let err = cli.run().unwrap_err();
        assert!(matches!(err, CliError::UnknownCommand { ref name, .. } if name == "unknownCmd"));
        assert_eq!(err.to_string(), "unknown command `unknownCmd'");
        assert_eq!(executions.get(), 0);
        assert!(cli.sink().stdout().is_empty());
    }

    #[test]
    fn unrecognized_option_with_strict_command() {
        let executions = Rc::new(Cell::new(0));
        let mut cli = git(&["commit", "--unknownFlag"]);
        cli.add_command(CommitCommand {
            executions: Rc::clone(&executions),
            ..CommitCommand::strict()
        })
        .unwrap();

        let err = cli.run().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown option `--unknownFlag' for command `commit'"
        );
        assert_eq!(err.exit_code(), 1);
        assert_eq!(executions.get(), 0);
    }

    #[test]
    fn unrecognized_option_with_lenient_command() {
        let executions = Rc::new(Cell::new(0));
        let mut cli = git(&["commit", "--unknownFlag", "-a"]);
        cli.add_command(CommitCommand {
            executions: Rc::clone(&executions),
            ..CommitCommand::default()
        })
        .unwrap();

        let result = cli.run().unwrap().unwrap();
        assert!(result.command::<CommitCommand>().unwrap().all);
        assert_eq!(executions.get(), 1);
    }

    #[test]
    fn command_help_option_stops_before_execute() {
        let executions = Rc::new(Cell::new(0));
        let mut cli = git(&["commit", "--help"]);
        cli.add_command(CommitCommand {
            executions: Rc::clone(&executions),
            ..CommitCommand::default()
        })
        .unwrap();

        let err = cli.run().unwrap_err();
        assert!(matches!(err, CliError::HelpDisplayed { ref command } if command == "commit"));
        assert!(!err.is_failure());
        assert_eq!(executions.get(), 0);
        assert!(
            cli.sink()
                .stdout()
                .starts_with("usage: git commit [options] <pathspec>\n\n")
        );
    }

    #[test]
    fn duplicate_registration_fails_fast() {
        let mut cli = git(&[]);
        cli.add_command(CommitCommand::default()).unwrap();
        let err = cli.add_command(CommitCommand::default()).unwrap_err();
        assert!(matches!(err, CliError::DuplicateCommand { .. }));
        assert_eq!(cli.command_names().filter(|n| *n == "commit").count(), 1);
    }
}

mod builtins_and_help {
    use super::*;

    #[test]
    fn show_version() {
        let mut cli = git(&["--version"]);
        cli.add_command(CommitCommand::default()).unwrap();
        let result = cli.run().unwrap().unwrap();
        assert_eq!(result.result_code, Some(0));
        assert_eq!(
            cli.sink().stdout(),
            "git version 1.0, A dummy git interface\n"
        );
    }

    #[test]
    fn show_help_summary() {
        let mut cli = git(&["--help"]);
        cli.add_command(CommitCommand::default()).unwrap();
        let result = cli.run().unwrap().unwrap();
        assert!(result.is_success());
        assert_eq!(
            cli.sink().stdout(),
            "usage: git <command> [<args>]\n\n\
             The most commonly used git commands are:\n   \
             commit         Record changes to the repository\n\n"
        );
    }

    #[test]
    fn help_summary_matches_render_help() {
        let mut cli = git(&["--help"]);
        cli.add_command(CommitCommand::default()).unwrap();
        let rendered = cli.render_help();
        cli.run().unwrap();
        assert_eq!(cli.sink().stdout(), rendered);
    }

    #[test]
    fn command_help_rendering_is_idempotent() {
        let mut cli = git(&[]);
        cli.add_command(CommitCommand::default()).unwrap();
        let first = cli.render_command_help("commit").unwrap();
        let second = cli.render_command_help("commit").unwrap();
        assert_eq!(first, second);
        assert!(first.contains("     -m, --message <msg>   commit message\n"));
    }
}
