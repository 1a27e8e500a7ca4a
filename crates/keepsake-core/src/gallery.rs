//! Flip-card grid of reasons. Any number of cards can be face-up at once.

use std::collections::BTreeSet;

use tracing::debug;

use crate::content::Reason;
use crate::error::GalleryError;

#[derive(Debug, Clone)]
pub struct Gallery {
    reasons: Vec<Reason>,
    flipped: BTreeSet<u32>,
}

impl Gallery {
    pub fn new(reasons: Vec<Reason>) -> Self {
        Self {
            reasons,
            flipped: BTreeSet::new(),
        }
    }

    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    pub fn is_flipped(&self, id: u32) -> bool {
        self.flipped.contains(&id)
    }

    pub fn flipped_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.flipped.iter().copied()
    }

    /// Flips card `id` and returns whether it is now showing its back.
    pub fn toggle(&mut self, id: u32) -> Result<bool, GalleryError> {
        if !self.reasons.iter().any(|reason| reason.id == id) {
            return Err(GalleryError::UnknownReason(id));
        }
        let flipped = if self.flipped.remove(&id) {
            false
        } else {
            self.flipped.insert(id);
            true
        };
        debug!("reason card {id} flipped={flipped}");
        Ok(flipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_reasons;

    #[test]
    fn toggle_flips_and_unflips_independently() {
        let mut gallery = Gallery::new(default_reasons());
        assert_eq!(gallery.toggle(2), Ok(true));
        assert_eq!(gallery.toggle(5), Ok(true));
        assert!(gallery.is_flipped(2));
        assert_eq!(gallery.flipped_ids().collect::<Vec<_>>(), vec![2, 5]);

        assert_eq!(gallery.toggle(2), Ok(false));
        assert!(!gallery.is_flipped(2));
        assert!(gallery.is_flipped(5));
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut gallery = Gallery::new(default_reasons());
        assert_eq!(gallery.toggle(99), Err(GalleryError::UnknownReason(99)));
        assert_eq!(gallery.flipped_ids().count(), 0);
    }
}
