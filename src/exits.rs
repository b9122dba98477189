//! Exit handling: signal handlers and terminal cleanup.

use std::sync::atomic::{AtomicBool, Ordering};

/// Set while the TUI owns the screen.
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
const RESTORE_SEQ: &[u8] = b"\x1b[0m\x1b[?25h\x1b[?1049l\r\n";

pub fn set_screen_active(active: bool) {
    SCREEN_ACTIVE.store(active, Ordering::SeqCst);
}

/// Reset terminal to sane state using termios directly
#[cfg(unix)]
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit. Only does work if the process exits mid-TUI.
#[cfg(unix)]
extern "C" fn cleanup_on_exit() {
    if !SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                RESTORE_SEQ.as_ptr() as *const libc::c_void,
                RESTORE_SEQ.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit handles cleanup
#[cfg(unix)]
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
#[cfg(unix)]
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

#[cfg(not(unix))]
pub fn install_handlers() {}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
