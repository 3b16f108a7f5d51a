use raylib::prelude::*;

mod blackout;
mod blocks;
mod fade;

pub use blackout::Blackout;
pub use blocks::BlockWipe;
pub use fade::Fade;

/// A screen-space transition between two already rendered frames.
///
/// `from` and `to` are read-only borrows owned by the caller; a transition
/// never mutates them and its only side effect is the draw onto the target.
/// Instances are built once with a fixed duration, driven with monotonically
/// increasing `elapsed` values over a single run, and discarded afterwards.
pub trait Transition {
    /// Fixed length of the transition in seconds. Always positive.
    fn duration(&self) -> f32;

    /// Whether the transition has finished at `elapsed` seconds.
    /// Pure function of elapsed time; callable at any point without side effects.
    fn is_complete(&self, elapsed: f32) -> bool {
        elapsed >= self.duration()
    }

    /// Draws the blended frame for `elapsed` seconds since the transition
    /// started. `elapsed` is expected in `[0, duration]`; values outside that
    /// range produce out-of-range alphas that saturate on conversion.
    fn render(&self, from: &Texture2D, to: &Texture2D, d: &mut RaylibDrawHandle, elapsed: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_is_a_pure_function_of_elapsed() {
        let transitions: Vec<Box<dyn Transition>> = vec![
            Box::new(Fade::new(0.5).unwrap()),
            Box::new(BlockWipe::new(0.5).unwrap()),
            Box::new(Blackout::new(0.5).unwrap()),
        ];
        for transition in &transitions {
            assert_eq!(transition.duration(), 0.5);
            assert!(!transition.is_complete(0.0));
            assert!(!transition.is_complete(0.25));
            assert!(transition.is_complete(0.5));
            assert!(transition.is_complete(2.0));
        }
    }
}
