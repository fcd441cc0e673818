//! Display output trait

use crate::pattern::ChipImage;

/// Sink for complete display frames
///
/// Implementations push one [`ChipImage`] out to the shift register
/// chain and latch it. The whole image becomes visible in a single
/// atomic update: an observer sampling the output lines never sees a
/// state that mixes bits from two different images.
pub trait FrameSink {
    /// Error type for transmit operations
    type Error;

    /// Present `image` on the cube
    ///
    /// Blocks for the duration of the serial transfer (a few tens of
    /// microseconds for three chips).
    fn transmit(&mut self, image: &ChipImage) -> Result<(), Self::Error>;
}
