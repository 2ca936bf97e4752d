//! Upcoming-piece queue and hold slot.
//!
//! The lookahead is a fixed-capacity sequence indexed by position: slot 0 is
//! the next piece to spawn. Its length never changes after construction.

use arrayvec::ArrayVec;

use crate::pieces::{presentation_offset, PresentationOffset};
use crate::rng::BagRandomizer;
use crate::types::{PieceKind, MAX_LOOKAHEAD};

/// One slot of the lookahead
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedPiece {
    pub kind: PieceKind,
    /// Where a presenter should center this preview (see [`PresentationOffset`])
    pub presentation: PresentationOffset,
}

impl QueuedPiece {
    /// A preview of `kind` centered by its spawn-orientation bounding box
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            presentation: presentation_offset(kind),
        }
    }
}

/// Result of a hold request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// Hold was already used for this placement; nothing changed.
    Unavailable,
    /// The slot was empty and now holds the current kind. The caller takes a
    /// replacement from the queue head.
    Stored,
    /// The slot held this kind, which becomes the current piece.
    Swapped(PieceKind),
}

/// Upcoming pieces plus the hold slot
#[derive(Debug, Clone)]
pub struct PieceQueue {
    randomizer: BagRandomizer,
    upcoming: ArrayVec<QueuedPiece, MAX_LOOKAHEAD>,
    lookahead: usize,
    hold: Option<PieceKind>,
    hold_used: bool,
}

impl PieceQueue {
    /// Create a queue showing `lookahead` upcoming pieces.
    ///
    /// Panics unless `1 <= lookahead <= MAX_LOOKAHEAD`.
    pub fn new(lookahead: usize, seed: u32) -> Self {
        assert!(
            (1..=MAX_LOOKAHEAD).contains(&lookahead),
            "lookahead must be within 1..={}, got {}",
            MAX_LOOKAHEAD,
            lookahead
        );
        let mut queue = Self {
            randomizer: BagRandomizer::new(seed),
            upcoming: ArrayVec::new(),
            lookahead,
            hold: None,
            hold_used: false,
        };
        queue.reset();
        queue
    }

    /// Refill the lookahead from a fresh bag and empty the hold slot
    pub fn reset(&mut self) {
        self.upcoming.clear();
        for i in 0..self.lookahead {
            let kind = self.randomizer.draw(i == 0);
            self.upcoming.push(QueuedPiece::new(kind));
        }
        self.hold = None;
        self.hold_used = false;
    }

    /// The next piece to spawn
    pub fn head(&self) -> PieceKind {
        self.upcoming[0].kind
    }

    /// Drop the head and append a freshly drawn piece at the tail.
    ///
    /// Returns the new head.
    pub fn advance(&mut self) -> PieceKind {
        self.upcoming.remove(0);
        let kind = self.randomizer.draw(false);
        self.upcoming.push(QueuedPiece::new(kind));
        self.head()
    }

    /// Upcoming pieces, head first
    pub fn upcoming(&self) -> &[QueuedPiece] {
        &self.upcoming
    }

    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.hold
    }

    /// Whether hold may be used for the current placement
    pub fn can_hold(&self) -> bool {
        !self.hold_used
    }

    /// Bank `current` in the hold slot.
    ///
    /// Only the first request per placement has any effect; see [`HoldOutcome`].
    pub fn hold(&mut self, current: PieceKind) -> HoldOutcome {
        if self.hold_used {
            return HoldOutcome::Unavailable;
        }
        self.hold_used = true;
        match self.hold.replace(current) {
            Some(previous) => HoldOutcome::Swapped(previous),
            None => HoldOutcome::Stored,
        }
    }

    /// Make hold available again; called once a piece has locked
    pub fn release_hold(&mut self) {
        self.hold_used = false;
    }

    /// Current RNG state of the randomizer
    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }
}
