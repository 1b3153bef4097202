//! Parallel brute-force seed search.
//!
//! Every candidate is a state reached by stepping forward from the
//! configured initial state. For offset `i` in `start..end` the candidate is
//! `initial.advance(i + 1)`: the generator is stepped once before the first
//! candidate is taken, as the game's own `rand()` call would.
//!
//! Each candidate replays the pre-duel events on its own copy of the sorted
//! deck and is kept when the replay starts with the observed draws. The
//! recorded state is the candidate itself, before any shuffle draws.
//!
//! The range is split into chunks of `chunk_size` candidates. A worker jumps
//! to the start of its chunk with [`RngState::advance`] and then steps
//! sequentially, so no RNG state is ever shared between workers.

use std::sync::mpsc::Sender;
use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::RngState;
use crate::data::{Duelist, Pool, PoolType};
use crate::deck::{generate_from_pool, Deck, DECK_SIZE};
use crate::error::{ManipError, Result};

use super::config::SearchConfig;
use super::event::{CancelToken, SearchEvent, SearchProgress, SearchStatus};
use super::stats::SearchStats;

type Prefix<'a> = SmallVec<[&'a Card; DECK_SIZE]>;

fn prefix<'a>(drawn: &[&'a Card]) -> Result<Prefix<'a>> {
    if drawn.len() > DECK_SIZE {
        return Err(ManipError::PrefixTooLong {
            len: drawn.len(),
            max: DECK_SIZE,
        });
    }
    Ok(drawn.iter().copied().collect())
}

/// The opposing duelist's Deck pool and the AI cards seen so far.
#[derive(Clone, Debug)]
struct Opponent<'a> {
    pool: &'a Pool,
    drawn: Prefix<'a>,
}

/// What a candidate has to reproduce. Shared read-only by every worker.
#[derive(Clone, Debug)]
struct Replay<'a> {
    deck: Deck<'a>,
    drawn: Prefix<'a>,
    opponent: Option<Opponent<'a>>,
}

impl Replay<'_> {
    fn matches(&self, candidate: RngState) -> bool {
        let mut rng = candidate;
        let mut player = self.deck;
        player.shuffle(&mut rng);
        if !player.prefix_matches(&self.drawn) {
            return false;
        }

        match &self.opponent {
            None => true,
            Some(opponent) => match generate_from_pool(opponent.pool, &mut rng) {
                Ok(mut ai) => {
                    ai.shuffle(&mut rng);
                    ai.prefix_matches(&opponent.drawn)
                }
                Err(_) => false,
            },
        }
    }
}

/// Result of a finished (or cancelled) search.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Distinct candidate states consistent with every observation.
    pub seeds: FxHashSet<RngState>,
    pub status: SearchStatus,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// The only match, if there is exactly one.
    #[must_use]
    pub fn unique(&self) -> Option<RngState> {
        if self.seeds.len() == 1 {
            self.seeds.iter().next().copied()
        } else {
            None
        }
    }

    /// Matches ordered by delta, then seed.
    #[must_use]
    pub fn sorted_seeds(&self) -> Vec<RngState> {
        let mut seeds: Vec<RngState> = self.seeds.iter().copied().collect();
        seeds.sort_by_key(|s| (s.delta(), s.seed()));
        seeds
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == SearchStatus::Cancelled
    }
}

/// A configured seed search, consumed by [`SeedSearch::run`].
///
/// The player deck is sorted with the configured pre-duel order once, at
/// construction. Cancellation and progress handles can be taken before
/// `run` and used from other threads while it executes.
pub struct SeedSearch<'a> {
    replay: Replay<'a>,
    config: SearchConfig,
    events: Option<Sender<SearchEvent>>,
    cancel: CancelToken,
    progress: SearchProgress,
}

impl<'a> SeedSearch<'a> {
    /// Search for states whose player shuffle starts with `drawn`.
    ///
    /// `deck` may be in any order. Fails if `drawn` is longer than a deck or
    /// the configured range is reversed.
    pub fn new(deck: &Deck<'a>, drawn: &[&'a Card], config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let drawn = prefix(drawn)?;

        let mut sorted = *deck;
        sorted.sort(config.sort);

        Ok(Self {
            replay: Replay {
                deck: sorted,
                drawn,
                opponent: None,
            },
            config,
            events: None,
            cancel: CancelToken::new(),
            progress: SearchProgress::new(),
        })
    }

    /// Also generate and shuffle `duelist`'s deck after the player shuffle,
    /// and require it to start with `ai_drawn`.
    ///
    /// Fails if the duelist has no Deck pool, the pool can never fill a
    /// deck, or `ai_drawn` is longer than a deck.
    pub fn with_opponent(mut self, duelist: &'a Duelist, ai_drawn: &[&'a Card]) -> Result<Self> {
        let pool = duelist.require_pool(PoolType::Deck)?;
        pool.check_can_fill_deck()?;
        self.replay.opponent = Some(Opponent {
            pool,
            drawn: prefix(ai_drawn)?,
        });
        Ok(self)
    }

    /// Send hits and progress to `events` while running.
    ///
    /// A `Hit` is sent as each match is found. `Progress` is sent once per
    /// finished chunk rather than per candidate, so its granularity is
    /// [`SearchConfig::chunk_size`]; lower it for finer updates.
    pub fn with_events(mut self, events: Sender<SearchEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Handle that stops the search when cancelled.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Handle reporting how many candidates have been replayed.
    ///
    /// The count moves in steps of one chunk, like `Progress` events.
    #[must_use]
    pub fn progress(&self) -> SearchProgress {
        self.progress.clone()
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn space_start(&self) -> u64 {
        self.config.space_start()
    }

    #[must_use]
    pub fn space_end(&self) -> u64 {
        self.config.space_end()
    }

    #[must_use]
    pub fn space_len(&self) -> u64 {
        self.config.space_len()
    }

    /// Scan the whole range and return every matching state.
    ///
    /// Never fails: an empty set is a valid outcome.
    pub fn run(self) -> SearchOutcome {
        let threads = self.config.threads;
        match threads.map(|n| rayon::ThreadPoolBuilder::new().num_threads(n).build()) {
            Some(Ok(pool)) => pool.install(|| self.scan()),
            Some(Err(err)) => {
                tracing::warn!(%err, "could not build search thread pool; using the global pool");
                self.scan()
            }
            None => self.scan(),
        }
    }

    fn scan(self) -> SearchOutcome {
        let SeedSearch {
            replay,
            config,
            events,
            cancel,
            progress,
        } = self;

        let start = Instant::now();
        let total = config.space_len();
        let chunk_size = config.chunk_size.max(1);
        let chunks = total.div_ceil(chunk_size);
        let base = config.initial_seed.advance(config.space_start());

        tracing::info!(
            initial = %config.initial_seed,
            start = config.space_start(),
            end = config.space_end(),
            sort = %config.sort,
            drawn = replay.drawn.len(),
            duel = replay.opponent.is_some(),
            "seed search started"
        );

        let seeds = (0..chunks)
            .into_par_iter()
            .map_with(events, |events, index| {
                let from = index * chunk_size;
                let to = (from + chunk_size).min(total);
                scan_chunk(&replay, base, from, to, total, &cancel, &progress, events)
            })
            .reduce(FxHashSet::default, |mut a, b| {
                a.extend(b);
                a
            });

        let checked = progress.completed();
        let status = if checked < total {
            SearchStatus::Cancelled
        } else {
            SearchStatus::Completed
        };
        let stats = SearchStats {
            candidates_checked: checked,
            hits: seeds.len() as u64,
            elapsed_us: start.elapsed().as_micros() as u64,
        };

        tracing::info!(
            hits = stats.hits,
            checked = stats.candidates_checked,
            elapsed_us = stats.elapsed_us,
            status = ?status,
            "seed search finished"
        );

        SearchOutcome {
            seeds,
            status,
            stats,
        }
    }
}

/// Replay candidates `from + 1 ..= to` past `base`.
#[allow(clippy::too_many_arguments)]
fn scan_chunk(
    replay: &Replay<'_>,
    base: RngState,
    from: u64,
    to: u64,
    total: u64,
    cancel: &CancelToken,
    progress: &SearchProgress,
    events: &mut Option<Sender<SearchEvent>>,
) -> FxHashSet<RngState> {
    let mut hits = FxHashSet::default();
    let mut rng = base.advance(from);
    let mut checked = 0;

    for _ in from..to {
        if cancel.is_cancelled() {
            break;
        }
        rng = rng.next().1;
        checked += 1;

        if replay.matches(rng) {
            tracing::debug!(seed = %rng, "candidate matches observed draws");
            if let Some(tx) = events {
                let _ = tx.send(SearchEvent::Hit(rng));
            }
            hits.insert(rng);
        }
    }

    let completed = progress.record(checked);
    if let Some(tx) = events {
        let _ = tx.send(SearchEvent::Progress { completed, total });
    }
    hits
}
