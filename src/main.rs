use mar1bash::control;
use mar1bash::error::ShellError;

/// Entry point that starts the control loop.
fn main() -> Result<(), ShellError> {
    control::control_loop()
}
