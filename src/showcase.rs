use crate::catalog::ProjectId;

/// Instruction for the media layer. Controllers never touch a playback
/// handle directly; they hand one of these to whoever owns the element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaDirective {
    Play { from_start: bool, looping: bool },
    Halt { rewind: bool },
}

/// Per-card hover state. Whether the card swaps to video or zooms the image
/// is fixed for the card's lifetime by the presence of a video source.
#[derive(Clone, PartialEq)]
pub struct CardPreview {
    hovering: bool,
    has_video: bool,
}

impl CardPreview {
    pub fn new(has_video: bool) -> Self {
        Self {
            hovering: false,
            has_video,
        }
    }

    pub fn pointer_enter(&mut self) -> Option<MediaDirective> {
        self.hovering = true;
        self.has_video.then_some(MediaDirective::Play {
            from_start: true,
            looping: true,
        })
    }

    /// Idempotent: every leave halts and rewinds, so a repeated leave cannot
    /// strand the clip mid-playback.
    pub fn pointer_leave(&mut self) -> Option<MediaDirective> {
        self.hovering = false;
        self.has_video.then_some(MediaDirective::Halt { rewind: true })
    }

    pub fn video_visible(&self) -> bool {
        self.hovering && self.has_video
    }

    pub fn zoom_on_hover(&self) -> bool {
        !self.has_video
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OverlayPhase {
    Autoplaying,
    HoverLoop,
    ImageOnly,
}

/// Playback state for one open overlay instance. Created on open, discarded
/// on close; reopening always starts a fresh instance.
#[derive(Clone, PartialEq)]
pub struct OverlayMedia {
    phase: OverlayPhase,
    has_played_once: bool,
}

impl OverlayMedia {
    pub fn new(has_video: bool) -> Self {
        Self {
            phase: if has_video {
                OverlayPhase::Autoplaying
            } else {
                OverlayPhase::ImageOnly
            },
            has_played_once: false,
        }
    }

    /// Directive to issue when the media element mounts: the one-shot
    /// autoplay, muted and non-looping. None once that shot has been fired
    /// or when there is no video at all.
    pub fn mount_directive(&self) -> Option<MediaDirective> {
        (self.phase == OverlayPhase::Autoplaying).then_some(MediaDirective::Play {
            from_start: true,
            looping: false,
        })
    }

    pub fn video_ended(&mut self) {
        if self.phase == OverlayPhase::Autoplaying {
            self.phase = OverlayPhase::HoverLoop;
            self.has_played_once = true;
        }
    }

    /// Hovering the media region after the one-shot autoplay resumes from
    /// the current position with looping on.
    pub fn pointer_enter(&self) -> Option<MediaDirective> {
        (self.phase == OverlayPhase::HoverLoop).then_some(MediaDirective::Play {
            from_start: false,
            looping: true,
        })
    }

    pub fn pointer_leave(&self) -> Option<MediaDirective> {
        (self.phase == OverlayPhase::HoverLoop).then_some(MediaDirective::Halt { rewind: true })
    }

    pub fn video_layer_visible(&self, hovering_media: bool) -> bool {
        match self.phase {
            OverlayPhase::Autoplaying => true,
            OverlayPhase::HoverLoop => hovering_media,
            OverlayPhase::ImageOnly => false,
        }
    }

    pub fn has_played_once(&self) -> bool {
        self.has_played_once
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }
}

/// The single shared piece of showcase state: at most one selected project.
/// Stored ids are not validated here; consumers resolve against the catalog
/// at read time and treat a failed lookup as "nothing selected".
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Selection {
    selected: Option<ProjectId>,
}

impl Selection {
    pub fn select(&mut self, id: Option<ProjectId>) {
        self.selected = id;
    }

    pub fn current(&self) -> Option<ProjectId> {
        self.selected
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollEdge {
    Engage,
    Release,
}

/// Edge detector for the page scroll lock. `sync` reports a transition only
/// when the lock condition actually changes, so an id-to-id selection change
/// produces no edge and the lock never flickers.
#[derive(Default)]
pub struct ScrollLatch {
    engaged: bool,
}

impl ScrollLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, active: bool) -> Option<ScrollEdge> {
        if active == self.engaged {
            return None;
        }

        self.engaged = active;
        Some(if active {
            ScrollEdge::Engage
        } else {
            ScrollEdge::Release
        })
    }

    /// Teardown path: releases regardless of how the overlay went away.
    pub fn release(&mut self) -> Option<ScrollEdge> {
        self.sync(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn card_without_video_never_issues_a_directive() {
        let mut card = CardPreview::new(false);

        for _ in 0..3 {
            assert_eq!(card.pointer_enter(), None);
            assert!(!card.video_visible());
            assert!(card.zoom_on_hover());
            assert_eq!(card.pointer_leave(), None);
        }
    }

    #[test]
    fn card_hover_swaps_to_video_and_restarts_playback() {
        let mut card = CardPreview::new(true);

        assert_eq!(
            card.pointer_enter(),
            Some(MediaDirective::Play {
                from_start: true,
                looping: true
            })
        );
        assert!(card.video_visible());
        assert!(!card.zoom_on_hover());

        assert_eq!(card.pointer_leave(), Some(MediaDirective::Halt { rewind: true }));
        assert!(!card.video_visible());
    }

    #[test]
    fn card_leave_is_idempotent() {
        let mut card = CardPreview::new(true);
        card.pointer_enter();

        let first = card.pointer_leave();
        let second = card.pointer_leave();

        assert_eq!(first, Some(MediaDirective::Halt { rewind: true }));
        assert_eq!(second, first);
        assert!(!card.video_visible());
    }

    #[test]
    fn unresolved_selection_keeps_the_id_but_renders_no_overlay() {
        let mut selection = Selection::default();
        selection.select(Some(999));

        assert_eq!(selection.current(), Some(999));
        assert!(selection.current().and_then(catalog::find).is_none());
    }

    #[test]
    fn reselecting_the_same_id_is_a_no_op() {
        let mut selection = Selection::default();
        selection.select(Some(1));
        let before = selection.clone();
        selection.select(Some(1));

        assert_eq!(selection, before);
    }

    #[test]
    fn overlay_plays_once_then_degrades_to_hover_loop() {
        let mut media = OverlayMedia::new(true);

        assert_eq!(media.phase(), OverlayPhase::Autoplaying);
        assert_eq!(
            media.mount_directive(),
            Some(MediaDirective::Play {
                from_start: true,
                looping: false
            })
        );
        assert!(media.video_layer_visible(false));

        media.video_ended();

        assert_eq!(media.phase(), OverlayPhase::HoverLoop);
        assert!(media.has_played_once());
        // No further automatic playback: only a hover produces a directive.
        assert_eq!(media.mount_directive(), None);
        assert!(!media.video_layer_visible(false));
        assert_eq!(
            media.pointer_enter(),
            Some(MediaDirective::Play {
                from_start: false,
                looping: true
            })
        );
        assert!(media.video_layer_visible(true));
        assert_eq!(media.pointer_leave(), Some(MediaDirective::Halt { rewind: true }));
    }

    #[test]
    fn overlay_without_video_stays_image_only() {
        let mut media = OverlayMedia::new(false);

        assert_eq!(media.phase(), OverlayPhase::ImageOnly);
        assert_eq!(media.mount_directive(), None);
        assert_eq!(media.pointer_enter(), None);
        assert_eq!(media.pointer_leave(), None);
        assert!(!media.video_layer_visible(true));

        media.video_ended();
        assert_eq!(media.phase(), OverlayPhase::ImageOnly);
        assert!(!media.has_played_once());
    }

    #[test]
    fn reopening_resets_the_played_once_flag() {
        let mut first = OverlayMedia::new(true);
        first.video_ended();
        assert!(first.has_played_once());

        // Close and reopen: a fresh instance, back at the one-shot autoplay.
        let second = OverlayMedia::new(true);
        assert!(!second.has_played_once());
        assert_eq!(second.phase(), OverlayPhase::Autoplaying);
    }

    #[test]
    fn scroll_lock_survives_id_to_id_transition_and_releases_once() {
        let mut latch = ScrollLatch::new();
        let mut edges = Vec::new();

        // select(1), select(2), select(None)
        edges.extend(latch.sync(true));
        edges.extend(latch.sync(true));
        edges.extend(latch.sync(false));

        assert_eq!(edges, vec![ScrollEdge::Engage, ScrollEdge::Release]);
    }

    #[test]
    fn scroll_release_on_teardown_is_single_shot() {
        let mut latch = ScrollLatch::new();
        latch.sync(true);

        assert_eq!(latch.release(), Some(ScrollEdge::Release));
        assert_eq!(latch.release(), None);
    }

    #[test]
    fn end_to_end_hover_select_escape() {
        let with_video = catalog::find(1).expect("id 1 is in the catalog");
        let without_video = catalog::find(2).expect("id 2 is in the catalog");
        assert!(with_video.video.is_some());
        assert!(without_video.video.is_none());

        // Hover card 1: video swaps in, leave rewinds back to the image.
        let mut card = CardPreview::new(with_video.video.is_some());
        assert_eq!(
            card.pointer_enter(),
            Some(MediaDirective::Play {
                from_start: true,
                looping: true
            })
        );
        assert!(card.video_visible());
        assert_eq!(card.pointer_leave(), Some(MediaDirective::Halt { rewind: true }));
        assert!(!card.video_visible());

        // Click card 2: overlay opens image-only, scroll locks.
        let mut selection = Selection::default();
        let mut latch = ScrollLatch::new();
        selection.select(Some(without_video.id));

        let resolved = selection.current().and_then(catalog::find);
        assert_eq!(resolved.map(|record| record.id), Some(2));
        assert_eq!(latch.sync(resolved.is_some()), Some(ScrollEdge::Engage));

        let media = OverlayMedia::new(resolved.and_then(|record| record.video).is_some());
        assert_eq!(media.mount_directive(), None);
        assert!(!media.video_layer_visible(false));

        // Escape: overlay closes, scroll restores.
        selection.select(None);
        let resolved = selection.current().and_then(catalog::find);
        assert!(resolved.is_none());
        assert_eq!(latch.sync(false), Some(ScrollEdge::Release));
        assert_eq!(selection.current(), None);
    }
}
