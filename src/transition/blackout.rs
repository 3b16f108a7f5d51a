use anyhow::{Result, bail};
use raylib::prelude::*;

use super::Transition;

/// Which frame a blackout draws over the black base at a given time.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Phase {
    FadingOut, // first half: the outgoing frame sinks into black
    FadingIn,  // second half: the incoming frame rises out of black
}

/// Two-phase fade through solid black. The target is cleared to black every
/// frame, so this transition assumes exclusive use of the target and is not
/// compositable with anything drawn earlier in the same frame.
pub struct Blackout {
    duration: f32,
}

impl Blackout {
    pub fn new(duration: f32) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            bail!("blackout duration must be positive, got {}", duration);
        }
        Ok(Self { duration })
    }

    // Phase and layer opacity at `elapsed` seconds. The 500 factor ramps
    // each half over a 0.5-wide span of normalized time, peaking at 250.
    fn phase(&self, elapsed: f32) -> (Phase, f32) {
        let e = elapsed / self.duration;
        if e < 0.5 {
            (Phase::FadingOut, 500.0 * (0.5 - e))
        } else {
            (Phase::FadingIn, 500.0 * (e - 0.5))
        }
    }
}

impl Transition for Blackout {
    fn duration(&self) -> f32 {
        self.duration
    }

    fn render(&self, from: &Texture2D, to: &Texture2D, d: &mut RaylibDrawHandle, elapsed: f32) {
        d.clear_background(Color::BLACK);

        let (phase, alpha) = self.phase(elapsed);
        let tint = Color::new(255, 255, 255, alpha as u8);
        match phase {
            Phase::FadingOut => d.draw_texture(from, 0, 0, tint),
            Phase::FadingIn => d.draw_texture(to, 0, 0, tint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_durations() {
        assert!(Blackout::new(0.0).is_err());
        assert!(Blackout::new(-2.0).is_err());
        assert!(Blackout::new(f32::NAN).is_err());
    }

    #[test]
    fn only_the_outgoing_frame_is_drawn_in_the_first_half() {
        let blackout = Blackout::new(1.0).unwrap();
        for step in 0..5 {
            let (phase, _) = blackout.phase(step as f32 * 0.1);
            assert_eq!(phase, Phase::FadingOut);
        }
    }

    #[test]
    fn only_the_incoming_frame_is_drawn_from_the_midpoint_on() {
        let blackout = Blackout::new(1.0).unwrap();
        for step in 5..=10 {
            let (phase, _) = blackout.phase(step as f32 * 0.1);
            assert_eq!(phase, Phase::FadingIn);
        }
    }

    #[test]
    fn outgoing_alpha_decreases_then_incoming_alpha_increases() {
        let blackout = Blackout::new(1.0).unwrap();

        let mut previous = f32::INFINITY;
        for step in 0..5 {
            let (_, alpha) = blackout.phase(step as f32 * 0.1);
            assert!(alpha < previous);
            previous = alpha;
        }

        let mut previous = f32::NEG_INFINITY;
        for step in 5..=10 {
            let (_, alpha) = blackout.phase(step as f32 * 0.1);
            assert!(alpha > previous);
            previous = alpha;
        }
    }

    #[test]
    fn both_halves_peak_at_250() {
        let blackout = Blackout::new(1.0).unwrap();
        assert_eq!(blackout.phase(0.0), (Phase::FadingOut, 250.0));
        assert_eq!(blackout.phase(1.0), (Phase::FadingIn, 250.0));
    }

    #[test]
    fn both_halves_are_near_black_at_the_midpoint() {
        let blackout = Blackout::new(1.0).unwrap();
        let (_, alpha_before) = blackout.phase(0.499);
        let (phase_at, alpha_at) = blackout.phase(0.5);
        assert!(alpha_before < 1.0);
        assert_eq!(phase_at, Phase::FadingIn);
        assert_eq!(alpha_at, 0.0);
    }
}
