//! Finished frames and the one-way, drop-on-full hand-off to a consumer.
//!
//! The channel holds at most one frame. The emulation side never blocks: if
//! the consumer has not taken the previous frame yet, the new one is dropped.

use std::sync::Arc;

use crossbeam_channel as cb;

pub const SCREEN_WIDTH: usize = 160;
pub const SCREEN_HEIGHT: usize = 144;
/// Packed RGB, three bytes per pixel, row-major.
pub const FRAME_BYTES: usize = SCREEN_WIDTH * SCREEN_HEIGHT * 3;

/// An immutable RGB snapshot of one complete frame.
///
/// Cloning shares the pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    number: u64,
    pixels: Arc<[u8]>,
}

impl Frame {
    pub fn new(number: u64, pixels: impl Into<Arc<[u8]>>) -> Self {
        Self {
            number,
            pixels: pixels.into(),
        }
    }

    /// Sequence number, counting from 1 for the first completed frame.
    #[inline]
    pub fn number(&self) -> u64 {
        self.number
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGB triple at `(x, y)`, or `None` outside the screen.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        let i = (y * SCREEN_WIDTH + x) * 3;
        let rgb = self.pixels.get(i..i + 3)?;
        Some([rgb[0], rgb[1], rgb[2]])
    }

    /// One scanline as packed RGB.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let start = y.checked_mul(SCREEN_WIDTH * 3)?;
        self.pixels.get(start..start + SCREEN_WIDTH * 3)
    }
}

/// What happened to a frame offered to the channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// The consumer still had the previous frame pending.
    Dropped,
    /// The consumer is gone.
    Disconnected,
}

#[derive(Clone, Debug)]
pub struct FrameSender {
    tx: cb::Sender<Frame>,
}

impl FrameSender {
    /// Never blocks.
    pub fn offer(&self, frame: Frame) -> Delivery {
        match self.tx.try_send(frame) {
            Ok(()) => Delivery::Delivered,
            Err(cb::TrySendError::Full(_)) => Delivery::Dropped,
            Err(cb::TrySendError::Disconnected(_)) => Delivery::Disconnected,
        }
    }
}

#[derive(Debug)]
pub struct FrameReceiver {
    rx: cb::Receiver<Frame>,
}

impl FrameReceiver {
    /// Block until a frame arrives; `None` once every sender is gone.
    pub fn recv(&self) -> Option<Frame> {
        self.rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<Frame> {
        self.rx.try_recv().ok()
    }
}

/// A depth-1 frame channel.
pub fn frame_channel() -> (FrameSender, FrameReceiver) {
    let (tx, rx) = cb::bounded(1);
    (FrameSender { tx }, FrameReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(number: u64, fill: u8) -> Frame {
        Frame::new(number, vec![fill; FRAME_BYTES])
    }

    #[test]
    fn second_offer_is_dropped_until_consumed() {
        let (tx, rx) = frame_channel();
        assert_eq!(tx.offer(frame(1, 0x11)), Delivery::Delivered);
        assert_eq!(tx.offer(frame(2, 0x22)), Delivery::Dropped);

        let got = rx.try_recv().unwrap();
        assert_eq!(got.number(), 1);
        assert_eq!(got.pixel(0, 0), Some([0x11; 3]));

        assert_eq!(tx.offer(frame(3, 0x33)), Delivery::Delivered);
        assert_eq!(rx.try_recv().unwrap().number(), 3);
        assert!(rx.try_recv().is_none());
    }

    #[test]
    fn offer_after_consumer_exit_reports_disconnect() {
        let (tx, rx) = frame_channel();
        drop(rx);
        assert_eq!(tx.offer(frame(1, 0)), Delivery::Disconnected);
    }

    #[test]
    fn receiver_sees_end_of_stream() {
        let (tx, rx) = frame_channel();
        tx.offer(frame(7, 0));
        drop(tx);
        assert_eq!(rx.recv().map(|f| f.number()), Some(7));
        assert!(rx.recv().is_none());
    }

    #[test]
    fn pixel_and_row_bounds() {
        let mut data = vec![0u8; FRAME_BYTES];
        let i = (143 * SCREEN_WIDTH + 159) * 3;
        data[i..i + 3].copy_from_slice(&[1, 2, 3]);
        let f = Frame::new(1, data);
        assert_eq!(f.pixel(159, 143), Some([1, 2, 3]));
        assert_eq!(f.pixel(160, 0), None);
        assert_eq!(f.pixel(0, 144), None);
        assert_eq!(f.row(143).map(|r| r.len()), Some(SCREEN_WIDTH * 3));
        assert!(f.row(144).is_none());
    }

    #[test]
    fn clones_share_pixels() {
        let f = frame(1, 9);
        let g = f.clone();
        assert!(std::ptr::eq(f.pixels().as_ptr(), g.pixels().as_ptr()));
    }
}
