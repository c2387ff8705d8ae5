//! Acquisition session state machine.
//!
//! One `Session` owns the acquisition half of the UI state: the current
//! image (at most one), the camera panel visibility, and a generation
//! counter that makes the asynchronous file decode cancellable. The
//! browser's FileReader callback cannot be aborted once started, so every
//! state change that supersedes an in-flight decode bumps the generation
//! and the late completion is refused instead of overwriting newer state.

use crate::image::{AcquiredImage, ImageSource};

/// Pins an asynchronous decode to the generation that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeTicket {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Session {
    image: Option<AcquiredImage>,
    camera_open: bool,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&AcquiredImage> {
        self.image.as_ref()
    }

    pub fn camera_open(&self) -> bool {
        self.camera_open
    }

    /// Start a file decode for a validated drop.
    ///
    /// Claims the acquisition surface: the camera panel closes (the caller
    /// releases the stream) and any older in-flight decode becomes stale.
    pub fn begin_decode(&mut self) -> DecodeTicket {
        self.generation += 1;
        self.camera_open = false;
        DecodeTicket {
            generation: self.generation,
        }
    }

    /// Install a decoded drop, unless the ticket went stale while the
    /// decode ran. A stale completion leaves the session untouched and
    /// returns `false`.
    pub fn complete_decode(&mut self, ticket: DecodeTicket, data_url: String) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.image = Some(AcquiredImage {
            data_url,
            source: ImageSource::Drop,
        });
        true
    }

    /// Install a captured webcam frame. Capturing always closes the panel.
    pub fn accept_capture(&mut self, data_url: String) {
        self.generation += 1;
        self.image = Some(AcquiredImage {
            data_url,
            source: ImageSource::Capture,
        });
        self.camera_open = false;
    }

    /// Show or hide the camera panel. Toggling in either direction drops
    /// the current image and invalidates in-flight decodes; returns the
    /// new visibility so the caller can manage the stream.
    pub fn toggle_camera(&mut self) -> bool {
        self.generation += 1;
        self.image = None;
        self.camera_open = !self.camera_open;
        self.camera_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(tag: &str) -> String {
        format!("data:image/png;base64,{tag}")
    }

    #[test]
    fn decode_roundtrip_installs_a_drop() {
        let mut s = Session::new();
        let ticket = s.begin_decode();
        assert!(s.complete_decode(ticket, url("a")));

        let img = s.image().expect("image installed");
        assert_eq!(img.source, ImageSource::Drop);
        assert_eq!(img.data_url, url("a"));
    }

    #[test]
    fn stale_ticket_is_refused_after_a_newer_decode() {
        let mut s = Session::new();
        let old = s.begin_decode();
        let new = s.begin_decode();

        assert!(!s.complete_decode(old, url("old")));
        assert!(s.image().is_none());

        assert!(s.complete_decode(new, url("new")));
        assert_eq!(s.image().unwrap().data_url, url("new"));
    }

    #[test]
    fn toggling_the_camera_invalidates_inflight_decodes() {
        let mut s = Session::new();
        let ticket = s.begin_decode();
        s.toggle_camera();

        assert!(!s.complete_decode(ticket, url("late")));
        assert!(s.image().is_none());
        assert!(s.camera_open());
    }

    #[test]
    fn opening_the_camera_clears_the_current_image() {
        let mut s = Session::new();
        let ticket = s.begin_decode();
        assert!(s.complete_decode(ticket, url("a")));

        assert!(s.toggle_camera());
        assert!(s.image().is_none());
        assert!(s.camera_open());

        // Closing clears as well; the surfaces never share an image.
        assert!(!s.toggle_camera());
        assert!(s.image().is_none());
    }

    #[test]
    fn capture_closes_the_panel_and_installs_the_frame() {
        let mut s = Session::new();
        assert!(s.toggle_camera());

        s.accept_capture(url("frame"));
        assert!(!s.camera_open());
        let img = s.image().expect("captured frame installed");
        assert_eq!(img.source, ImageSource::Capture);
    }

    #[test]
    fn capture_supersedes_a_pending_decode() {
        let mut s = Session::new();
        let ticket = s.begin_decode();
        s.accept_capture(url("frame"));

        assert!(!s.complete_decode(ticket, url("late")));
        assert_eq!(s.image().unwrap().source, ImageSource::Capture);
    }

    #[test]
    fn begin_decode_closes_the_camera_panel() {
        let mut s = Session::new();
        assert!(s.toggle_camera());

        let _ticket = s.begin_decode();
        assert!(!s.camera_open());
    }
}
