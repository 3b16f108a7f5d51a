#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DemoState {
    ShowingFrom,   // Holding the first frame on screen
    Transitioning, // Blending from the first frame to the second
    ShowingTo,     // Holding the second frame before the cycle restarts
}
