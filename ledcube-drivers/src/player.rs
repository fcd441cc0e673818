//! Animation player
//!
//! Runs an animation program against a frame sink: each step is
//! resolved to a chip image, transmitted, and held for its dwell time.
//! The player owns no program state between calls; the control loop
//! decides what to play next.

use embedded_hal::delay::DelayNs;

use ledcube_core::animation::AnimationProgram;
use ledcube_core::pattern::{ChipImage, PatternError};
use ledcube_core::traits::FrameSink;

/// Error from playing an animation program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerError<E> {
    /// A step referenced a pattern index outside its table
    Pattern(PatternError),
    /// The frame sink failed to transmit
    Sink(E),
}

impl<E> From<PatternError> for PlayerError<E> {
    fn from(err: PatternError) -> Self {
        PlayerError::Pattern(err)
    }
}

/// Plays animation programs through a frame sink
pub struct AnimationPlayer<S, D> {
    sink: S,
    delay: D,
}

impl<S, D> AnimationPlayer<S, D>
where
    S: FrameSink,
    D: DelayNs,
{
    pub const fn new(sink: S, delay: D) -> Self {
        Self { sink, delay }
    }

    /// Release the sink and delay provider
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }

    /// Play one full pass of a program
    ///
    /// Each step's image is latched before its hold time starts, so
    /// the dwell applies to the displayed frame, not the shifting.
    pub fn run(&mut self, program: &AnimationProgram) -> Result<(), PlayerError<S::Error>> {
        for step in program.steps() {
            let image = step.resolve()?;
            self.sink.transmit(&image).map_err(PlayerError::Sink)?;
            self.delay.delay_ms(step.hold_ms as u32);
        }
        Ok(())
    }

    /// Turn every LED off
    pub fn blank(&mut self) -> Result<(), PlayerError<S::Error>> {
        self.sink.transmit(&ChipImage::blank()).map_err(PlayerError::Sink)
    }
}
