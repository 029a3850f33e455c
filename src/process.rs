use crate::Result;
#[cfg(not(unix))]
use crate::Error;

pub fn current_pid() -> u32 {
    std::process::id()
}

/// Probe whether a process with `pid` exists. Signal 0 checks delivery
/// without delivering anything; a pid owned by another user that denies
/// the probe reports as absent.
#[cfg(unix)]
pub fn process_exists(pid: u32) -> Result<bool> {
    let alive = unsafe { libc::kill(pid as libc::pid_t, 0) } == 0;
    Ok(alive)
}

#[cfg(not(unix))]
pub fn process_exists(_pid: u32) -> Result<bool> {
    Err(Error::Unsupported("process existence probe"))
}
