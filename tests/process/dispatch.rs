use crate::support::{TestEnv, assert_paths_equal, lock_env};
use mar1bash::cmd::{CommandLine, tokenize};
use mar1bash::process::builtin::map::BuiltinMap;
use mar1bash::process::{self, ExitStatus, Launcher, Outcome};
use std::env;

/// Launcher that records what it was asked to run instead of spawning.
#[derive(Default)]
struct RecordingLauncher {
    launched: Vec<Vec<String>>,
    status: Option<ExitStatus>,
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, command: &CommandLine) -> ExitStatus {
        self.launched.push(command.tokens().to_vec());
        self.status.unwrap_or(ExitStatus::SUCCESS)
    }
}

#[test]
fn builtins_never_reach_the_launcher() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    env_state.set_current_dir(&env_state.root());

    let mut builtin_map = BuiltinMap::new();
    let mut launcher = RecordingLauncher::default();

    for line in ["cd", "cd /", "cd a b c", "exit", "exit 3", "exit a b"] {
        let command = tokenize(line).unwrap();
        process::execute(&mut builtin_map, &mut launcher, &command);
    }

    assert!(launcher.launched.is_empty());
}

#[test]
fn other_commands_always_reach_the_launcher() {
    let _guard = lock_env();
    let mut builtin_map = BuiltinMap::new();
    let mut launcher = RecordingLauncher {
        status: Some(ExitStatus::Code(7)),
        ..Default::default()
    };

    let command = tokenize("ls  -la /tmp").unwrap();
    let outcome = process::execute(&mut builtin_map, &mut launcher, &command);
    assert_eq!(outcome, Outcome::Continue(ExitStatus::Code(7)));

    // Builtin names only match exactly.
    let command = tokenize("CD /").unwrap();
    process::execute(&mut builtin_map, &mut launcher, &command);

    assert_eq!(
        launcher.launched,
        vec![
            vec!["ls".to_string(), "-la".to_string(), "/tmp".to_string()],
            vec!["CD".to_string(), "/".to_string()],
        ]
    );
}

#[test]
fn cd_through_dispatch_changes_directory() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let root = env_state.root();
    env_state.set_current_dir(&root);
    std::fs::create_dir(root.join("sub")).unwrap();

    let mut builtin_map = BuiltinMap::new();
    let mut launcher = RecordingLauncher::default();
    let command = tokenize("cd sub").unwrap();

    let outcome = process::execute(&mut builtin_map, &mut launcher, &command);
    assert_eq!(outcome, Outcome::Continue(ExitStatus::SUCCESS));
    assert_paths_equal(&env::current_dir().unwrap(), &root.join("sub"));
}
