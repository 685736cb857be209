//! Deck session: a shuffle-bag dispenser over one corpus at a time.
//!
//! Every item in the active corpus is shown once per cycle. When the
//! remaining pile runs dry the used pile is reshuffled into it and a new
//! cycle starts. The item shown last in a cycle re-enters the pool with
//! everything else, so it can come up first in the next one.
//!
//! All mutation goes through `&mut self`; a host sharing one session
//! across threads wraps it in a `Mutex`.

use std::collections::{HashMap, VecDeque};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, warn};

use crate::corpus::corpus_for;
use crate::error::{DrillError, Result};
use crate::types::{DrillConfig, Item, Mode, Phase, SessionState, Snapshot};

/// Current session-state handoff version.
pub const STATE_VERSION: u32 = 1;

// ============================================================================
// CORPORA
// ============================================================================

/// The pair of corpora a session switches between.
///
/// Defaults to the process-wide static corpora.
#[derive(Debug, Clone, Copy)]
pub struct Corpora {
    pub characters: &'static [Item],
    pub words: &'static [Item],
}

impl Corpora {
    pub fn get(&self, mode: Mode) -> &'static [Item] {
        match mode {
            Mode::Characters => self.characters,
            Mode::Words => self.words,
        }
    }
}

impl Default for Corpora {
    fn default() -> Self {
        Self {
            characters: corpus_for(Mode::Characters),
            words: corpus_for(Mode::Words),
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Mutable state of one drill session.
#[derive(Debug)]
pub struct DeckSession<R = StdRng> {
    corpora: Corpora,
    mode: Mode,
    remaining: VecDeque<Item>,
    used: Vec<Item>,
    current: Option<Item>,
    revealed: bool,
    rng: R,
}

impl DeckSession<StdRng> {
    /// Start a session with an OS-seeded shuffle.
    ///
    /// Returns the session together with the initialization outcome; on
    /// `EmptyCorpus` the session is still usable and sits in the empty
    /// phase until a mode switch.
    pub fn new(mode: Mode) -> (Self, Result<()>) {
        Self::with_rng(mode, StdRng::from_os_rng())
    }

    /// Start a session from config. A fixed seed gives a reproducible deck.
    pub fn from_config(config: &DrillConfig) -> (Self, Result<()>) {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config.mode, rng)
    }
}

impl<R: Rng> DeckSession<R> {
    /// Start a session on the static corpora.
    pub fn with_rng(mode: Mode, rng: R) -> (Self, Result<()>) {
        Self::with_corpora(Corpora::default(), mode, rng)
    }

    /// Start a session on caller-supplied corpora.
    pub fn with_corpora(corpora: Corpora, mode: Mode, rng: R) -> (Self, Result<()>) {
        let mut session = DeckSession {
            corpora,
            mode,
            remaining: VecDeque::new(),
            used: Vec::new(),
            current: None,
            revealed: false,
            rng,
        };
        let outcome = session.initialize(mode);
        (session, outcome)
    }

    /// Rebuild a session from a handoff state.
    ///
    /// Rejects states whose piles do not partition the mode's corpus or
    /// whose current item is not the latest draw.
    pub fn from_state(state: SessionState, corpora: Corpora, rng: R) -> Result<Self> {
        validate_state(&state, corpora.get(state.mode))?;
        Ok(DeckSession {
            corpora,
            mode: state.mode,
            remaining: state.remaining.into(),
            used: state.used,
            current: state.current,
            revealed: state.revealed,
            rng,
        })
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Reset to a freshly shuffled deck for `mode` and draw the first item.
    ///
    /// On an empty corpus the session is left with no current item and
    /// `EmptyCorpus` is returned.
    pub fn initialize(&mut self, mode: Mode) -> Result<()> {
        let mut pool = self.corpora.get(mode).to_vec();
        pool.shuffle(&mut self.rng);

        self.mode = mode;
        self.remaining = pool.into();
        self.used.clear();
        self.revealed = false;
        self.current = self.advance();

        if self.current.is_none() {
            warn!(%mode, "corpus is empty, no items available");
            return Err(DrillError::EmptyCorpus { mode });
        }
        debug!(%mode, size = self.remaining.len() + 1, "deck initialized");
        Ok(())
    }

    /// Draw the next item without replacement, refilling from the used
    /// pile when the remaining pile is empty.
    ///
    /// Returns `None` only when the corpus itself is empty. Does not touch
    /// `current` or `revealed`; see [`next`](Self::next).
    pub fn advance(&mut self) -> Option<Item> {
        if self.remaining.is_empty() {
            if self.used.is_empty() {
                return None;
            }
            let mut pool = std::mem::take(&mut self.used);
            pool.shuffle(&mut self.rng);
            debug!(mode = %self.mode, size = pool.len(), "cycle complete, reshuffled");
            self.remaining = pool.into();
        }

        let item = self.remaining.pop_front()?;
        self.used.push(item.clone());
        Some(item)
    }

    /// Show the pronunciation. Idempotent; ignored with no current item.
    pub fn reveal(&mut self) {
        if self.current.is_some() {
            self.revealed = true;
        }
    }

    /// Move to the next card, hidden.
    ///
    /// On failure `current` is left as it was.
    pub fn next(&mut self) -> Result<&Item> {
        match self.advance() {
            Some(item) => {
                self.revealed = false;
                Ok(&*self.current.insert(item))
            }
            None if self.current.is_some() => {
                error!(mode = %self.mode, "draw failed on an initialized deck");
                Err(DrillError::Exhausted { mode: self.mode })
            }
            None => Err(DrillError::EmptyCorpus { mode: self.mode }),
        }
    }

    /// Switch corpus. Reinitializes only when the mode actually changes.
    pub fn switch_mode(&mut self, mode: Mode) -> Result<()> {
        if mode == self.mode {
            return Ok(());
        }
        debug!(from = %self.mode, to = %mode, "switching mode");
        self.initialize(mode)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current(&self) -> Option<&Item> {
        self.current.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn remaining(&self) -> impl Iterator<Item = &Item> {
        self.remaining.iter()
    }

    pub fn used(&self) -> &[Item] {
        &self.used
    }

    pub fn phase(&self) -> Phase {
        match self.current {
            Some(_) => Phase::Ready {
                revealed: self.revealed,
            },
            None => Phase::Empty,
        }
    }

    /// `EmptyCorpus` when there is nothing to show.
    pub fn ensure_ready(&self) -> Result<()> {
        match self.phase() {
            Phase::Ready { .. } => Ok(()),
            Phase::Empty => Err(DrillError::EmptyCorpus { mode: self.mode }),
        }
    }

    /// Items shown in the current cycle, and the corpus size.
    pub fn cycle_progress(&self) -> (usize, usize) {
        (self.used.len(), self.corpora.get(self.mode).len())
    }

    /// Read-only view for rendering. Omits the pronunciation while hidden.
    pub fn snapshot(&self) -> Snapshot {
        let (shown, total) = self.cycle_progress();
        let current = self.current.as_ref();
        Snapshot {
            text: current.map(|i| i.text.clone()),
            pronunciation: current
                .filter(|_| self.revealed)
                .map(|i| i.pronunciation.clone()),
            revealed: self.revealed,
            mode: self.mode,
            shown,
            total,
        }
    }

    /// Full state for handoff.
    pub fn to_state(&self) -> SessionState {
        SessionState {
            version: STATE_VERSION,
            mode: self.mode,
            remaining: self.remaining.iter().cloned().collect(),
            used: self.used.clone(),
            current: self.current.clone(),
            revealed: self.revealed,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

fn validate_state(state: &SessionState, corpus: &[Item]) -> Result<()> {
    if state.version != STATE_VERSION {
        return Err(DrillError::InvalidState(format!(
            "unsupported version {} (expected {})",
            state.version, STATE_VERSION
        )));
    }

    let mut counts: HashMap<&Item, isize> = HashMap::new();
    for item in corpus {
        *counts.entry(item).or_default() += 1;
    }
    for item in state.remaining.iter().chain(&state.used) {
        *counts.entry(item).or_default() -= 1;
    }
    if counts.values().any(|&n| n != 0) {
        return Err(DrillError::InvalidState(format!(
            "remaining and used do not cover the {} corpus",
            state.mode
        )));
    }

    match &state.current {
        Some(current) if state.used.last() != Some(current) => Err(DrillError::InvalidState(
            "current item is not the latest draw".into(),
        )),
        None if !corpus.is_empty() => Err(DrillError::InvalidState(
            "no current item for a non-empty corpus".into(),
        )),
        None if state.revealed => Err(DrillError::InvalidState(
            "revealed with no current item".into(),
        )),
        _ => Ok(()),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{CHARACTER_ITEMS, WORD_ITEMS};
    use std::collections::HashSet;

    fn seeded(mode: Mode) -> DeckSession {
        let (session, started) = DeckSession::with_rng(mode, StdRng::seed_from_u64(7));
        started.expect("static corpora are non-empty");
        session
    }

    fn empty_words() -> Corpora {
        Corpora {
            characters: corpus_for(Mode::Characters),
            words: &[],
        }
    }

    fn empty_session() -> DeckSession {
        DeckSession::with_corpora(empty_words(), Mode::Words, StdRng::seed_from_u64(1)).0
    }

    fn sorted_texts<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<&'a str> {
        let mut texts: Vec<&str> = items.map(|i| i.text.as_str()).collect();
        texts.sort_unstable();
        texts
    }

    fn assert_partition(session: &DeckSession) {
        let corpus = corpus_for(session.mode());
        let piles = sorted_texts(session.remaining().chain(session.used()));
        assert_eq!(piles, sorted_texts(corpus.iter()));
    }

    // -- initialize --

    #[test]
    fn initialize_draws_hidden_card_from_corpus() {
        let session = seeded(Mode::Characters);
        let current = session.current().expect("non-empty corpus");
        assert!(CHARACTER_ITEMS.contains(current));
        assert!(!session.is_revealed());
        assert_eq!(session.phase(), Phase::Ready { revealed: false });
        assert_eq!(session.used(), std::slice::from_ref(current));
        assert_eq!(session.remaining().count(), 299);
    }

    #[test]
    fn initialize_empty_corpus_enters_empty_phase() {
        let (mut session, started) =
            DeckSession::with_corpora(empty_words(), Mode::Words, StdRng::seed_from_u64(1));
        assert!(matches!(
            started,
            Err(DrillError::EmptyCorpus { mode: Mode::Words })
        ));
        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.current().is_none());
        assert!(matches!(
            session.initialize(Mode::Words),
            Err(DrillError::EmptyCorpus { mode: Mode::Words })
        ));
        assert!(matches!(
            session.ensure_ready(),
            Err(DrillError::EmptyCorpus { .. })
        ));
    }

    #[test]
    fn from_config_with_seed_is_reproducible() {
        let config = DrillConfig {
            mode: Mode::Words,
            seed: Some(42),
        };
        let (a, _) = DeckSession::from_config(&config);
        let (b, _) = DeckSession::from_config(&config);
        assert_eq!(a.to_state(), b.to_state());
    }

    #[test]
    fn new_reports_successful_start() {
        let (session, started) = DeckSession::new(Mode::Words);
        assert!(started.is_ok());
        assert_eq!(session.phase(), Phase::Ready { revealed: false });
        assert_partition(&session);
    }

    // -- advance --

    #[test]
    fn advance_never_repeats_within_a_cycle() {
        let mut session = seeded(Mode::Characters);
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(session.current().unwrap().text.clone());
        for _ in 1..CHARACTER_ITEMS.len() {
            let item = session.advance().expect("refills automatically");
            assert!(seen.insert(item.text), "repeat before cycle end");
        }
        assert_eq!(seen.len(), 300);
    }

    #[test]
    fn full_cycle_leaves_used_complete_and_remaining_empty() {
        let mut session = seeded(Mode::Words);
        // initialize already drew one
        for _ in 1..WORD_ITEMS.len() {
            session.advance().unwrap();
        }
        assert_eq!(session.remaining().count(), 0);
        assert_eq!(sorted_texts(session.used().iter()), sorted_texts(WORD_ITEMS.iter()));
    }

    #[test]
    fn corpus_size_draws_show_every_item_once() {
        let mut session = seeded(Mode::Words);
        assert_partition(&session);
        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(session.current().unwrap().text.clone());

        // initialize drew the first of the cycle
        for _ in 1..WORD_ITEMS.len() {
            let item = session.next().unwrap().clone();
            assert_partition(&session);
            assert!(seen.insert(item.text), "repeat before cycle end");
        }
        assert_eq!(seen.len(), WORD_ITEMS.len());
        assert_eq!(session.remaining().count(), 0);
        assert_eq!(session.used().len(), WORD_ITEMS.len());
        assert_eq!(session.used().last(), session.current());
    }

    #[test]
    fn draining_words_then_drawing_reshuffles_once() {
        let mut session = seeded(Mode::Words);
        for _ in 1..WORD_ITEMS.len() {
            session.advance().unwrap();
        }
        assert_eq!(session.remaining().count(), 0);

        let item = session.advance().expect("refilled from used");
        assert!(WORD_ITEMS.contains(&item));
        assert_eq!(session.used(), std::slice::from_ref(&item));
        assert_eq!(session.remaining().count(), 9);
        assert_partition(&session);
    }

    #[test]
    fn partition_holds_across_many_cycles() {
        let mut session = seeded(Mode::Words);
        for _ in 0..57 {
            session.next().unwrap();
            assert_partition(&session);
            assert_eq!(session.used().last(), session.current());
        }
    }

    #[test]
    fn advance_on_empty_corpus_returns_none() {
        let mut session = empty_session();
        assert!(session.advance().is_none());
    }

    // -- reveal --

    #[test]
    fn reveal_is_idempotent() {
        let mut session = seeded(Mode::Words);
        session.reveal();
        let once = session.to_state();
        session.reveal();
        assert_eq!(session.to_state(), once);
        assert_eq!(session.phase(), Phase::Ready { revealed: true });
    }

    #[test]
    fn reveal_without_current_does_nothing() {
        let mut session = empty_session();
        session.reveal();
        assert!(!session.is_revealed());
        assert_eq!(session.phase(), Phase::Empty);
    }

    // -- next --

    #[test]
    fn next_hides_and_replaces_current() {
        let mut session = seeded(Mode::Words);
        session.reveal();
        let drawn = session.next().unwrap().clone();
        assert_eq!(session.current(), Some(&drawn));
        assert!(!session.is_revealed());
    }

    #[test]
    fn next_on_empty_corpus_reports_empty() {
        let mut session = empty_session();
        assert!(matches!(
            session.next(),
            Err(DrillError::EmptyCorpus { mode: Mode::Words })
        ));
        assert!(session.current().is_none());
    }

    #[test]
    fn next_reports_exhaustion_when_piles_are_corrupted() {
        let mut session = seeded(Mode::Words);
        let before = session.current().cloned();
        session.remaining.clear();
        session.used.clear();
        assert!(matches!(
            session.next(),
            Err(DrillError::Exhausted { mode: Mode::Words })
        ));
        assert_eq!(session.current().cloned(), before);
    }

    // -- switch_mode --

    #[test]
    fn switch_mode_resets_to_hidden_card_from_new_corpus() {
        let mut session = seeded(Mode::Characters);
        session.reveal();
        session.switch_mode(Mode::Words).unwrap();
        assert_eq!(session.mode(), Mode::Words);
        assert!(!session.is_revealed());
        assert!(WORD_ITEMS.contains(session.current().unwrap()));
        assert_eq!(session.used().len(), 1);
        assert_partition(&session);
    }

    #[test]
    fn switch_to_same_mode_is_noop() {
        let mut session = seeded(Mode::Words);
        session.next().unwrap();
        session.reveal();
        let before = session.to_state();
        session.switch_mode(Mode::Words).unwrap();
        assert_eq!(session.to_state(), before);
    }

    #[test]
    fn switch_from_empty_to_non_empty_recovers() {
        let mut session = empty_session();
        session.switch_mode(Mode::Characters).unwrap();
        assert_eq!(session.phase(), Phase::Ready { revealed: false });

        let err = session.switch_mode(Mode::Words).unwrap_err();
        assert!(matches!(err, DrillError::EmptyCorpus { .. }));
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.used().len(), 0);
    }

    // -- snapshot --

    #[test]
    fn snapshot_hides_pronunciation_until_revealed() {
        let mut session = seeded(Mode::Words);
        let hidden = session.snapshot();
        assert!(hidden.text.is_some());
        assert!(hidden.pronunciation.is_none());
        assert!(!hidden.revealed);
        assert_eq!((hidden.shown, hidden.total), (1, 10));

        session.reveal();
        let shown = session.snapshot();
        let current = session.current().unwrap();
        assert_eq!(shown.pronunciation.as_deref(), Some(current.pronunciation.as_str()));
        assert!(shown.revealed);
    }

    #[test]
    fn snapshot_of_empty_session_has_no_text() {
        let session = empty_session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.text, None);
        assert_eq!(snapshot.total, 0);
    }

    // -- handoff --

    #[test]
    fn state_round_trip_preserves_deck() {
        let mut session = seeded(Mode::Words);
        session.next().unwrap();
        session.reveal();
        let state = session.to_state();

        let restored =
            DeckSession::from_state(state.clone(), Corpora::default(), StdRng::seed_from_u64(9))
                .unwrap();
        assert_eq!(restored.to_state(), state);
        assert_eq!(restored.snapshot(), session.snapshot());
    }

    #[test]
    fn from_state_rejects_missing_items() {
        let session = seeded(Mode::Words);
        let mut state = session.to_state();
        state.remaining.pop();
        let result = DeckSession::from_state(state, Corpora::default(), StdRng::seed_from_u64(9));
        assert!(matches!(result, Err(DrillError::InvalidState(_))));
    }

    #[test]
    fn from_state_rejects_foreign_current() {
        let session = seeded(Mode::Words);
        let mut state = session.to_state();
        state.current = state.remaining.first().cloned();
        let result = DeckSession::from_state(state, Corpora::default(), StdRng::seed_from_u64(9));
        assert!(matches!(result, Err(DrillError::InvalidState(_))));
    }

    #[test]
    fn from_state_rejects_unknown_version() {
        let session = seeded(Mode::Words);
        let mut state = session.to_state();
        state.version = 99;
        let result = DeckSession::from_state(state, Corpora::default(), StdRng::seed_from_u64(9));
        assert!(matches!(result, Err(DrillError::InvalidState(_))));
    }

    #[test]
    fn from_state_rejects_missing_current() {
        let session = seeded(Mode::Words);
        let mut state = session.to_state();
        state.current = None;
        let result = DeckSession::from_state(state, Corpora::default(), StdRng::seed_from_u64(9));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no current item"), "got {err}");
    }

    #[test]
    fn from_state_rejects_revealed_without_current() {
        let state = SessionState {
            version: STATE_VERSION,
            mode: Mode::Words,
            remaining: Vec::new(),
            used: Vec::new(),
            current: None,
            revealed: true,
        };
        let result = DeckSession::from_state(state, empty_words(), StdRng::seed_from_u64(9));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("revealed with no current item"), "got {err}");
    }

    #[test]
    fn from_state_accepts_empty_corpus_at_rest() {
        let state = empty_session().to_state();
        let session = DeckSession::from_state(state, empty_words(), StdRng::seed_from_u64(9))
            .expect("hidden empty deck is a valid state");
        assert_eq!(session.phase(), Phase::Empty);
    }
}
