//! SIGINT disposition management for the shell process.
//!
//! The shell moves between three dispositions:
//!
//! * [`SignalDisposition::ShellHandler`] while waiting for input. The handler
//!   only raises a flag that the control loop polls after each read.
//! * [`SignalDisposition::Ignored`] while a foreground child runs, so a Ctrl-C
//!   aimed at the child leaves the shell alone.
//! * [`SignalDisposition::Default`] inside a freshly forked child, right
//!   before the program image is replaced.

use nix::errno::Errno;
use nix::libc;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use std::sync::atomic::{AtomicBool, Ordering};

static PENDING_INTERRUPT: AtomicBool = AtomicBool::new(false);

/// How the shell process reacts to SIGINT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalDisposition {
    /// Record the interrupt and let the control loop redraw the prompt.
    ShellHandler,
    /// Terminate on interrupt.
    Default,
    /// Discard the interrupt.
    Ignored,
}

impl SignalDisposition {
    /// Install this disposition for SIGINT.
    ///
    /// Only calls `sigaction`, so it is safe to run between fork and exec.
    pub fn apply(self) -> Result<(), Errno> {
        let handler = match self {
            SignalDisposition::ShellHandler => SigHandler::Handler(record_interrupt),
            SignalDisposition::Default => SigHandler::SigDfl,
            SignalDisposition::Ignored => SigHandler::SigIgn,
        };
        let action = SigAction::new(handler, SaFlags::SA_RESTART, SigSet::empty());

        // SAFETY: the installed handler only touches an atomic.
        unsafe { signal::sigaction(Signal::SIGINT, &action) }?;
        Ok(())
    }
}

extern "C" fn record_interrupt(_signal: libc::c_int) {
    PENDING_INTERRUPT.store(true, Ordering::SeqCst);
}

/// Consume the pending-interrupt flag, returning whether it was raised.
pub fn take_pending_interrupt() -> bool {
    PENDING_INTERRUPT.swap(false, Ordering::SeqCst)
}

/// Scope during which a foreground child owns SIGINT.
///
/// Entering ignores SIGINT in the shell; dropping the guard reinstalls the
/// shell handler, including on early returns.
#[derive(Debug)]
pub struct ForegroundGuard {
    _private: (),
}

impl ForegroundGuard {
    pub fn enter() -> Result<Self, Errno> {
        SignalDisposition::Ignored.apply()?;
        tracing::trace!("SIGINT ignored for foreground child");
        Ok(Self { _private: () })
    }
}

impl Drop for ForegroundGuard {
    fn drop(&mut self) {
        match SignalDisposition::ShellHandler.apply() {
            Ok(()) => tracing::trace!("SIGINT handler restored"),
            Err(errno) => tracing::error!("unable to restore SIGINT handler: {errno}"),
        }
    }
}
