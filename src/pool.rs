//! # Message Pool
//!
//! Decoded messages are handed over to a [`MessagePool`]. The decoder asks the
//! pool for a slot when a sentence starts and publishes the message in that
//! slot once the sentence is complete. A sentence that could not get a slot is
//! still followed to its end, so that the stream stays synchronized, but its
//! fields are not decoded.

use crate::sentences::NmeaMessage;

/// Storage for decoded messages.
///
/// [`prepare`](MessagePool::prepare) is called exactly once per `$`, and
/// [`publish`](MessagePool::publish) exactly once per
/// [`DecodeStatus::Decoded`](crate::DecodeStatus::Decoded). A slot that is
/// dropped without being published is released.
///
/// # Examples
///
/// A pool that only keeps the latest message:
///
/// ```rust
/// use nmea0183_decoder::{MessagePool, NmeaDecoder, NmeaMessage};
///
/// #[derive(Default)]
/// struct Latest(Option<NmeaMessage>);
///
/// impl MessagePool for Latest {
///     type Slot = ();
///
///     fn prepare(&mut self) -> Option<()> {
///         Some(())
///     }
///
///     fn publish(&mut self, _: (), message: NmeaMessage) {
///         self.0 = Some(message);
///     }
/// }
///
/// let mut decoder = NmeaDecoder::new(Latest::default());
/// decoder.decode(b"$GPGLL,4916.45,N,12311.12,W,225444,A,A*5C\r\n").for_each(drop);
/// assert!(decoder.pool().0.is_some());
/// ```
pub trait MessagePool {
    /// Reservation held by the decoder while a sentence is in progress.
    type Slot;

    /// Reserves room for a message, or returns `None` to skip the sentence.
    fn prepare(&mut self) -> Option<Self::Slot>;

    /// Stores a decoded message in a previously reserved slot.
    fn publish(&mut self, slot: Self::Slot, message: NmeaMessage);
}

/// Unbounded pool, a slot is always available.
impl MessagePool for Vec<NmeaMessage> {
    type Slot = ();

    fn prepare(&mut self) -> Option<()> {
        Some(())
    }

    fn publish(&mut self, _: (), message: NmeaMessage) {
        self.push(message);
    }
}

/// Bounded pool, no slot is available while the queue is full.
impl<const C: usize> MessagePool for heapless::Deque<NmeaMessage, C> {
    type Slot = ();

    fn prepare(&mut self) -> Option<()> {
        (!self.is_full()).then_some(())
    }

    fn publish(&mut self, _: (), message: NmeaMessage) {
        if let Err(message) = self.push_back(message) {
            log::warn!(
                "Message pool full, dropping {:?} from {:?}",
                message.sentence_id,
                message.talker
            );
        }
    }
}

impl<P: MessagePool + ?Sized> MessagePool for &mut P {
    type Slot = P::Slot;

    fn prepare(&mut self) -> Option<Self::Slot> {
        (**self).prepare()
    }

    fn publish(&mut self, slot: Self::Slot, message: NmeaMessage) {
        (**self).publish(slot, message);
    }
}

#[cfg(all(test, feature = "pubx"))]
mod tests {
    use super::*;
    use crate::identifier::{SentenceId, TalkerId, resolve};

    fn message() -> NmeaMessage {
        resolve("PUBX").unwrap()
    }

    fn fill<P: MessagePool>(mut pool: P) {
        let slot = pool.prepare().unwrap();
        pool.publish(slot, message());
    }

    #[test]
    fn test_bounded_pool() {
        let mut pool = heapless::Deque::<NmeaMessage, 2>::new();

        for _ in 0..2 {
            let slot = pool.prepare().unwrap();
            pool.publish(slot, message());
        }
        assert!(pool.prepare().is_none());

        // The caller may fill the queue between prepare and publish.
        let mut other = heapless::Deque::<NmeaMessage, 1>::new();
        let slot = other.prepare().unwrap();
        other.push_back(message()).unwrap();
        other.publish(slot, message());
        assert_eq!(other.len(), 1);

        let first = pool.pop_front().unwrap();
        assert_eq!(first.talker, TalkerId::UBLOX);
        assert_eq!(first.sentence_id, SentenceId::PUBX);
    }

    #[test]
    fn test_borrowed_pool() {
        let mut messages = Vec::<NmeaMessage>::new();
        fill(&mut messages);
        fill(&mut messages);
        assert_eq!(messages.len(), 2);
    }
}
