//! Host probing
//!
//! The station drives the physical panel only when running on an ARM Linux
//! host; everywhere else it opens the simulator window.

/// Whether the current host looks like the panel's Raspberry Pi
#[must_use]
pub fn hardware_detected() -> bool {
    is_panel_host(std::env::consts::OS, std::env::consts::ARCH)
}

/// Pure classification of an (os, arch) pair
#[must_use]
pub fn is_panel_host(os: &str, arch: &str) -> bool {
    os == "linux" && (arch == "arm" || arch == "aarch64")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_linux_counts_as_panel_host() {
        assert!(is_panel_host("linux", "arm"));
        assert!(is_panel_host("linux", "aarch64"));
    }

    #[test]
    fn desktops_fall_back_to_the_simulator() {
        assert!(!is_panel_host("linux", "x86_64"));
        assert!(!is_panel_host("macos", "aarch64"));
        assert!(!is_panel_host("windows", "x86_64"));
    }
}
