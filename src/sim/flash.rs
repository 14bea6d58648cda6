//! Crash flicker
//!
//! After a collision the wrecked cars alternate between a bright flash and
//! dead grey for a few frames, then stay grey. Driven purely by the number
//! of frames since the crash so it stays deterministic.

use serde::Serialize;

/// Frames per flicker half-period
pub const FLASH_PERIOD: u32 = 4;
/// Total frames of flicker before settling
pub const FLASH_FRAMES: u32 = FLASH_PERIOD * 6;

/// Tint the renderer should apply to the crashed cars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CrashTint {
    Flash,
    Grey,
}

pub fn crash_tint(frames_since_crash: u32, flicker: bool) -> CrashTint {
    if !flicker || frames_since_crash >= FLASH_FRAMES {
        return CrashTint::Grey;
    }
    if (frames_since_crash / FLASH_PERIOD).is_multiple_of(2) {
        CrashTint::Flash
    } else {
        CrashTint::Grey
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flicker_sequence() {
        let tints: Vec<_> = (0..FLASH_FRAMES + 8).map(|f| crash_tint(f, true)).collect();
        assert_eq!(tints[0], CrashTint::Flash);
        assert_eq!(tints[3], CrashTint::Flash);
        assert_eq!(tints[4], CrashTint::Grey);
        assert_eq!(tints[8], CrashTint::Flash);
        let toggles = tints.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(toggles, 5);
        assert!(tints[FLASH_FRAMES as usize..].iter().all(|t| *t == CrashTint::Grey));
    }

    #[test]
    fn test_no_flicker_is_grey() {
        assert!((0..50).all(|f| crash_tint(f, false) == CrashTint::Grey));
    }
}
