//! Build-mode oracle.
//!
//! The host application's build configuration is a process-wide fact that
//! this crate consults but never owns. Keeping it behind a trait lets
//! tests pin each mode deterministically instead of depending on how the
//! test binary itself was compiled.

/// Reports the three build-mode facts.
///
/// Exactly one fact is expected to be true at a time, but nothing here
/// assumes the oracle enforces that; callers must tolerate none being set.
pub trait BuildMode: Send + Sync {
    fn is_debug(&self) -> bool;
    fn is_profile(&self) -> bool;
    fn is_release(&self) -> bool;
}

/// Build mode derived from the cargo build configuration.
///
/// Debug tracks `debug_assertions`. Cargo has no native notion of a
/// profiling build, so profiling opts in through the `profile` cargo
/// feature; release is the complement of both.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoBuildMode;

impl BuildMode for CargoBuildMode {
    fn is_debug(&self) -> bool {
        cfg!(debug_assertions) && !cfg!(feature = "profile")
    }

    fn is_profile(&self) -> bool {
        cfg!(feature = "profile")
    }

    fn is_release(&self) -> bool {
        !cfg!(debug_assertions) && !cfg!(feature = "profile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_mode_reports_exactly_one_fact() {
        let mode = CargoBuildMode;
        let set = [mode.is_debug(), mode.is_profile(), mode.is_release()]
            .iter()
            .filter(|&&f| f)
            .count();
        assert_eq!(set, 1);
    }

    #[test]
    fn test_cargo_mode_matches_debug_assertions() {
        let mode = CargoBuildMode;
        if cfg!(feature = "profile") {
            assert!(mode.is_profile());
        } else {
            assert_eq!(mode.is_debug(), cfg!(debug_assertions));
            assert_eq!(mode.is_release(), !cfg!(debug_assertions));
        }
    }
}
