//! Background-music toggle. The host media element is behind [`AudioHost`];
//! autoplay may be silently refused by host policy, so the observable
//! "is playing" state is driven only by confirmed playback events, never by
//! the request having been made.

/// Confirmed playback transitions reported by the host element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    Started,
    Paused,
}

/// The seam to the host's hidden audio element. `request_play` is
/// best-effort: a policy rejection is expected and surfaces only as the
/// absence of a [`PlaybackEvent::Started`].
pub trait AudioHost {
    fn request_play(&mut self);
    fn request_pause(&mut self);
    fn is_paused(&self) -> bool;
}

/// Boolean play/pause control mirrored from the host element. Intent and
/// outcome are separate states: `requested` records that playback was asked
/// for, `is_playing` only what the host confirmed.
#[derive(Clone, Copy, Debug, Default)]
pub struct MusicToggle {
    requested: bool,
    confirmed_playing: bool,
}

impl MusicToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The observable flag: true only after the host confirmed playback.
    pub fn is_playing(&self) -> bool {
        self.confirmed_playing
    }

    /// Whether playback was ever requested, confirmed or not.
    pub fn requested(&self) -> bool {
        self.requested
    }

    /// Mount-time autoplay attempt. Not retried; a manual toggle is the
    /// only recovery path when the host refuses.
    pub fn on_mount(&mut self, host: &mut dyn AudioHost) {
        self.requested = true;
        host.request_play();
    }

    /// The sole authoritative control. Consults the host's true paused
    /// state, so it stays correct whether or not autoplay succeeded.
    pub fn toggle(&mut self, host: &mut dyn AudioHost) {
        if host.is_paused() {
            self.requested = true;
            host.request_play();
        } else {
            host.request_pause();
        }
    }

    pub fn handle_event(&mut self, event: PlaybackEvent) {
        self.confirmed_playing = match event {
            PlaybackEvent::Started => true,
            PlaybackEvent::Paused => false,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Host that optionally refuses the first (autoplay) request, the way
    /// browser policy does, and records confirmed transitions.
    struct FakeHost {
        paused: bool,
        refuse_autoplay: bool,
        events: Vec<PlaybackEvent>,
    }

    impl FakeHost {
        fn new(refuse_autoplay: bool) -> Self {
            Self {
                paused: true,
                refuse_autoplay,
                events: Vec::new(),
            }
        }

        fn drain_into(&mut self, toggle: &mut MusicToggle) {
            for event in self.events.drain(..) {
                toggle.handle_event(event);
            }
        }
    }

    impl AudioHost for FakeHost {
        fn request_play(&mut self) {
            if self.refuse_autoplay {
                // Policy rejection: swallowed, no event, stays paused.
                self.refuse_autoplay = false;
                return;
            }
            if self.paused {
                self.paused = false;
                self.events.push(PlaybackEvent::Started);
            }
        }

        fn request_pause(&mut self) {
            if !self.paused {
                self.paused = true;
                self.events.push(PlaybackEvent::Paused);
            }
        }

        fn is_paused(&self) -> bool {
            self.paused
        }
    }

    #[test]
    fn autoplay_rejection_leaves_state_honest() {
        let mut host = FakeHost::new(true);
        let mut toggle = MusicToggle::new();

        toggle.on_mount(&mut host);
        host.drain_into(&mut toggle);
        assert!(!toggle.is_playing());

        // Manual tap recovers.
        toggle.toggle(&mut host);
        host.drain_into(&mut toggle);
        assert!(toggle.is_playing());
    }

    #[test]
    fn double_toggle_restores_the_flag() {
        for refuse_autoplay in [false, true] {
            let mut host = FakeHost::new(refuse_autoplay);
            let mut toggle = MusicToggle::new();
            toggle.on_mount(&mut host);
            host.drain_into(&mut toggle);
            let initial = toggle.is_playing();

            toggle.toggle(&mut host);
            host.drain_into(&mut toggle);
            toggle.toggle(&mut host);
            host.drain_into(&mut toggle);

            assert_eq!(toggle.is_playing(), initial);
        }
    }

    #[test]
    fn successful_autoplay_confirms_via_event() {
        let mut host = FakeHost::new(false);
        let mut toggle = MusicToggle::new();
        toggle.on_mount(&mut host);

        // Intent alone proves nothing until the event lands.
        assert!(toggle.requested());
        assert!(!toggle.is_playing());
        host.drain_into(&mut toggle);
        assert!(toggle.is_playing());
    }
}
