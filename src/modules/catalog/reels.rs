use std::collections::HashSet;

use super::Reel;

/// Viewer state for the short-video feed
#[derive(Debug, Clone, PartialEq)]
pub struct ReelFeed {
    index: usize,
    len: usize,
    liked: HashSet<String>,
    pub muted: bool,
    pub show_comments: bool,
}

impl ReelFeed {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            liked: HashSet::new(),
            muted: true,
            show_comments: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current<'a>(&self, reels: &'a [Reel]) -> Option<&'a Reel> {
        reels.get(self.index)
    }

    /// No wrap: stops at the last reel
    pub fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn toggle_like(&mut self, reel_id: &str) {
        if !self.liked.remove(reel_id) {
            self.liked.insert(reel_id.to_string());
        }
    }

    pub fn is_liked(&self, reel_id: &str) -> bool {
        self.liked.contains(reel_id)
    }

    /// Like count including this viewer's like
    pub fn like_count(&self, reel: &Reel) -> u32 {
        if self.is_liked(&reel.id) { reel.likes + 1 } else { reel.likes }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_comments(&mut self) {
        self.show_comments = !self.show_comments;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::MockDataStore;

    #[test]
    fn navigation_is_clamped() {
        let mut feed = ReelFeed::new(2);
        feed.prev();
        assert_eq!(feed.index(), 0);
        feed.next();
        feed.next();
        assert_eq!(feed.index(), 1);
    }

    #[test]
    fn liking_adds_one_and_unliking_restores() {
        let store = MockDataStore::load().unwrap();
        let mut feed = ReelFeed::new(store.reels.len());
        let reel = feed.current(&store.reels).unwrap().clone();

        feed.toggle_like(&reel.id);
        assert_eq!(feed.like_count(&reel), 1246);
        feed.toggle_like(&reel.id);
        assert_eq!(feed.like_count(&reel), 1245);
    }

    #[test]
    fn starts_muted_with_comments_hidden() {
        let mut feed = ReelFeed::new(4);
        assert!(feed.muted);
        assert!(!feed.show_comments);
        feed.toggle_mute();
        feed.toggle_comments();
        assert!(!feed.muted);
        assert!(feed.show_comments);
    }
}
