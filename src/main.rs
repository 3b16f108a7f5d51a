use std::process;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use raylib::prelude::*;

mod constants;
mod frame;
mod state;
mod transition;

use crate::constants::*;
use crate::frame::solid_color_frame;
use crate::state::DemoState;
use crate::transition::{Blackout, BlockWipe, Fade, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TransitionKind {
    /// Linear cross-dissolve
    Fade,
    /// Block-wise diagonal wipe
    Blocks,
    /// Fade to black, then fade back up
    Blackout,
}

#[derive(Parser, Debug)]
#[command(about = "Renders two colored frames joined by a screen transition effect")]
struct Cli {
    /// Transition effect used between the two frames
    #[arg(long, value_enum, default_value = "blackout")]
    transition: TransitionKind,
}

fn build_transition(kind: TransitionKind) -> Result<Box<dyn Transition>> {
    Ok(match kind {
        TransitionKind::Fade => Box::new(Fade::new(TRANSITION_DURATION)?),
        TransitionKind::Blocks => Box::new(BlockWipe::new(TRANSITION_DURATION)?),
        TransitionKind::Blackout => Box::new(Blackout::new(TRANSITION_DURATION)?),
    })
}

fn main() {
    let cli = Cli::parse();

    let transition = match build_transition(cli.transition) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error creating transition: {}", e);
            process::exit(1);
        }
    };

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Transition")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // The two frames a real application would have rendered elsewhere.
    // The transition only ever reads them.
    let from_frame = match solid_color_frame(&mut rl, &thread, Color::BLUE) {
        Ok(texture) => texture,
        Err(e) => {
            eprintln!("Error creating first frame: {}", e);
            process::exit(1);
        }
    };
    let to_frame = match solid_color_frame(&mut rl, &thread, Color::GREEN) {
        Ok(texture) => texture,
        Err(e) => {
            eprintln!("Error creating second frame: {}", e);
            process::exit(1);
        }
    };

    // --- Timeline State Variables ---
    let mut demo_state = DemoState::ShowingFrom;
    let mut phase_timer: f32 = 0.0;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        phase_timer += dt;

        // 1. Update the timeline state machine
        match demo_state {
            DemoState::ShowingFrom => {
                if phase_timer >= HOLD_FROM_DURATION {
                    // Time to start the transition
                    demo_state = DemoState::Transitioning;
                    phase_timer = 0.0;
                }
            }
            DemoState::Transitioning => {
                if transition.is_complete(phase_timer) {
                    demo_state = DemoState::ShowingTo;
                    phase_timer = 0.0;
                }
            }
            DemoState::ShowingTo => {
                if phase_timer >= HOLD_TO_DURATION {
                    // Restart the cycle from the first frame
                    demo_state = DemoState::ShowingFrom;
                    phase_timer = 0.0;
                }
            }
        }

        // 2. Draw the current phase
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        match demo_state {
            DemoState::ShowingFrom => d.draw_texture(&from_frame, 0, 0, Color::WHITE),
            DemoState::Transitioning => {
                transition.render(&from_frame, &to_frame, &mut d, phase_timer)
            }
            DemoState::ShowingTo => d.draw_texture(&to_frame, 0, 0, Color::WHITE),
        }
    } // End main loop
}
