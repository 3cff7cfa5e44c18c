use crate::support::{TestEnv, lock_env};
use mar1bash::cmd::tokenize;
use mar1bash::process::launch::run_foreground;
use mar1bash::process::{ExitStatus, ForegroundLauncher, Launcher};
use mar1bash::signal::{self, SignalDisposition};
use nix::sys::signal::Signal;

#[test]
fn reports_child_exit_code() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let script = env_state.script("seven.sh", "exit 7");

    let command = tokenize(&format!("sh {}", script.display())).unwrap();
    assert_eq!(ForegroundLauncher::new().launch(&command), ExitStatus::Code(7));
}

#[test]
fn passes_arguments_in_order() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let script = env_state.script("args.sh", "[ \"$1\" = a ] && [ \"$2\" = b ] && [ $# -eq 2 ]");

    let command = tokenize(&format!("sh {} a   b", script.display())).unwrap();
    assert_eq!(run_foreground(&command), ExitStatus::SUCCESS);
}

#[test]
fn unknown_program_is_an_ordinary_failure() {
    let _guard = lock_env();
    let command = tokenize("mar1bash-definitely-not-a-program --flag").unwrap();
    assert_eq!(run_foreground(&command), ExitStatus::Code(127));
}

#[test]
fn signal_termination_is_abnormal() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let script = env_state.script("killed.sh", "kill -9 $$");

    let command = tokenize(&format!("sh {}", script.display())).unwrap();
    let status = run_foreground(&command);
    assert_eq!(
        status,
        ExitStatus::Abnormal {
            signal: Signal::SIGKILL as i32,
            core_dumped: false
        }
    );
    assert!((0..=255).all(|code| status != ExitStatus::Code(code)));
}

#[test]
fn child_receives_default_interrupt_handling() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    SignalDisposition::ShellHandler.apply().unwrap();

    // The shell ignores SIGINT while waiting; the child must not inherit that.
    let script = env_state.script("self_interrupt.sh", "kill -INT $$\nexit 0");
    let command = tokenize(&format!("sh {}", script.display())).unwrap();

    assert!(matches!(
        run_foreground(&command),
        ExitStatus::Abnormal { signal, .. } if signal == Signal::SIGINT as i32
    ));
}

#[test]
fn interrupt_during_foreground_spares_the_shell() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    SignalDisposition::ShellHandler.apply().unwrap();
    signal::take_pending_interrupt();

    // The child interrupts its parent (this test process) and exits normally.
    let script = env_state.script("interrupt.sh", "kill -INT $PPID\nexit 3");
    let command = tokenize(&format!("sh {}", script.display())).unwrap();

    assert_eq!(run_foreground(&command), ExitStatus::Code(3));
    assert!(!signal::take_pending_interrupt());
}

#[test]
fn shell_handler_is_restored_after_child() {
    let _guard = lock_env();
    SignalDisposition::ShellHandler.apply().unwrap();
    signal::take_pending_interrupt();

    assert_eq!(run_foreground(&tokenize("true").unwrap()), ExitStatus::SUCCESS);

    nix::sys::signal::raise(Signal::SIGINT).unwrap();
    assert!(signal::take_pending_interrupt());
}
