pub const WINDOW_WIDTH: i32 = 1280;           // Width of the demo window
pub const WINDOW_HEIGHT: i32 = 720;           // Height of the demo window
pub const FPS: u32 = 60;                      // Frames per second

pub const HOLD_FROM_DURATION: f32 = 1.0;      // Time the first frame is held (seconds)
pub const TRANSITION_DURATION: f32 = 0.5;     // Length of the transition effect (seconds)
pub const HOLD_TO_DURATION: f32 = 1.5;        // Time the second frame is held (seconds)

pub const WIPE_PIECES_X: i32 = 16;            // Block wipe grid columns
pub const WIPE_PIECES_Y: i32 = 9;             // Block wipe grid rows
