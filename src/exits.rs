//! Exit handling: terminal restore on signals and core dump suppression.

/// Put the tty back in cooked mode with echo.
fn restore_termios() {
    unsafe {
        if libc::isatty(libc::STDIN_FILENO) != 1 {
            return;
        }
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

extern "C" fn cleanup_on_exit() {
    restore_termios();
}

/// SIGINT/SIGTERM/SIGHUP: exit with 128 + signo, atexit restores the tty.
extern "C" fn signal_handler(sig: libc::c_int) {
    unsafe { libc::exit(128 + sig) }
}

/// Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps and ptrace.
pub fn harden() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
