use std::rc::Rc;

use super::player::VideoPlayer;
use super::roster::RosterEntry;
use super::selector::{MemberSelector, SelectionChange};

/// Keeps the featured member in step with the team video. Every command is
/// a no-op until a player has been attached.
pub struct SpeakerSync<'a> {
    selector: MemberSelector<'a>,
    player: Option<Rc<dyn VideoPlayer>>,
    player_requested: bool,
    visible: bool,
}

impl<'a> SpeakerSync<'a> {
    pub fn new(roster: &'a [RosterEntry]) -> Self {
        Self {
            selector: MemberSelector::new(roster),
            player: None,
            player_requested: false,
            visible: false,
        }
    }

    pub fn selector(&self) -> &MemberSelector<'a> {
        &self.selector
    }

    pub fn is_ready(&self) -> bool {
        self.player.is_some()
    }

    /// True exactly once, for the caller that should go and load the player.
    pub fn claim_player_load(&mut self) -> bool {
        if self.player_requested || self.player.is_some() {
            return false;
        }
        self.player_requested = true;
        true
    }

    pub fn attach(&mut self, player: Rc<dyn VideoPlayer>) {
        if self.visible {
            player.play();
        }
        self.player = Some(player);
    }

    /// Poll the playback position and follow it.
    pub fn tick(&mut self) -> Option<SelectionChange> {
        let time = self.player.as_ref()?.current_time();
        self.selector.advance_to(time)
    }

    /// Feature `name` right away and jump the video to their segment.
    pub fn select(&mut self, name: &str) -> Option<SelectionChange> {
        let player = self.player.clone()?;
        let change = self.selector.select_member(name)?;
        if let Some(seconds) = change.seek_to {
            player.seek_to(seconds, true);
            player.play();
        }
        Some(change)
    }

    /// Report the section's visibility. Returns true when it flipped.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        if let Some(player) = &self.player {
            if visible {
                player.play();
            } else {
                player.pause();
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::roster::ROSTER;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakePlayer {
        time: Cell<f64>,
        calls: RefCell<Vec<String>>,
    }

    impl VideoPlayer for FakePlayer {
        fn current_time(&self) -> f64 {
            self.time.get()
        }

        fn seek_to(&self, seconds: f64, allow_seek_ahead: bool) {
            self.time.set(seconds);
            self.calls.borrow_mut().push(format!("seek {seconds} {allow_seek_ahead}"));
        }

        fn play(&self) {
            self.calls.borrow_mut().push("play".into());
        }

        fn pause(&self) {
            self.calls.borrow_mut().push("pause".into());
        }
    }

    fn ready_sync() -> (SpeakerSync<'static>, Rc<FakePlayer>) {
        let player = Rc::new(FakePlayer::default());
        let mut sync = SpeakerSync::new(ROSTER);
        sync.attach(player.clone());
        (sync, player)
    }

    #[test]
    fn commands_before_ready_are_suppressed() {
        let mut sync = SpeakerSync::new(ROSTER);
        assert!(!sync.is_ready());
        assert_eq!(sync.tick(), None);
        assert_eq!(sync.select("Belen Ramos"), None);
        assert_eq!(sync.selector().active().map(|m| m.name), Some("Abel Ortega"));
    }

    #[test]
    fn tick_follows_playback_without_commanding_player() {
        let (mut sync, player) = ready_sync();
        player.time.set(100.0);

        let change = sync.tick();

        assert_eq!(change.map(|c| c.active), Some(1));
        assert!(player.calls.borrow().is_empty());
    }

    #[test]
    fn click_seeks_and_later_ticks_resume_from_there() {
        let (mut sync, player) = ready_sync();
        player.time.set(50.0);

        let change = sync.select("Belen Ramos");

        assert_eq!(change.map(|c| c.active), Some(3));
        assert_eq!(*player.calls.borrow(), ["seek 389 true", "play"]);
        player.time.set(391.0);
        assert_eq!(sync.tick(), None);
        assert_eq!(sync.selector().active().map(|m| m.name), Some("Belen Ramos"));
    }

    #[test]
    fn clicking_the_active_member_replays_their_segment() {
        let (mut sync, player) = ready_sync();
        player.time.set(120.0);
        assert_eq!(sync.tick().map(|c| c.active), Some(1));

        let change = sync.select("Alex Avila");

        assert_eq!(change.and_then(|c| c.seek_to), Some(97.0));
        assert_eq!(*player.calls.borrow(), ["seek 97 true", "play"]);
        assert_eq!(sync.selector().active().map(|m| m.name), Some("Alex Avila"));
    }

    #[test]
    fn player_load_is_claimed_once() {
        let mut sync = SpeakerSync::new(ROSTER);

        assert!(sync.claim_player_load());
        assert!(!sync.claim_player_load());
    }

    #[test]
    fn attached_sync_needs_no_player_load() {
        let (mut sync, _player) = ready_sync();
        assert!(!sync.claim_player_load());
    }

    #[test]
    fn visibility_plays_and_pauses_on_edges_only() {
        let (mut sync, player) = ready_sync();

        assert!(sync.set_visible(true));
        assert!(!sync.set_visible(true));
        assert!(sync.set_visible(false));

        assert_eq!(*player.calls.borrow(), ["play", "pause"]);
    }

    #[test]
    fn player_ready_while_visible_starts_playing() {
        let mut sync = SpeakerSync::new(ROSTER);
        sync.set_visible(true);
        let player = Rc::new(FakePlayer::default());

        sync.attach(player.clone());

        assert_eq!(*player.calls.borrow(), ["play"]);
    }
}
