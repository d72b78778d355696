//! Event-driven regeneration of the current mosaic
//!
//! The session owns the only `MosaicState`. Each accepted event composes a
//! complete replacement off to the side and swaps it in only once it is
//! finished, so readers never see a half-built mosaic and a failed
//! regeneration leaves the previous one in place.

use log::{debug, error, info, warn};

use crate::io::error::{LogoError, Result};
use crate::io::events::SeedEvent;
use crate::mosaic::composer::{MosaicComposer, MosaicState};
use crate::seed::parameters::ParameterSet;

/// What happened to one inbound event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was not a detection and was dropped
    Ignored,
    /// A new mosaic replaced the current one
    Regenerated {
        /// Seed of the new mosaic
        seed: u64,
    },
}

/// Counters reported when the event stream ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Events decoded from the stream
    pub received: usize,
    /// Events dropped because nothing was detected
    pub ignored: usize,
    /// Successful regenerations
    pub regenerated: usize,
    /// Lines that could not be decoded
    pub malformed: usize,
    /// Regenerations aborted by allocation failure
    pub failed: usize,
}

/// Owner of the current mosaic
#[derive(Debug)]
pub struct LogoSession {
    composer: MosaicComposer,
    current: MosaicState,
}

impl LogoSession {
    /// Start a session showing the startup mosaic (every field at 0.5)
    ///
    /// # Errors
    ///
    /// Returns an error if the startup mosaic cannot be composed.
    pub fn new(composer: MosaicComposer) -> Result<Self> {
        let current = composer.compose(&ParameterSet::default())?;
        Ok(Self { composer, current })
    }

    /// Mosaic from the most recently completed regeneration
    pub const fn current(&self) -> &MosaicState {
        &self.current
    }

    /// Composer used for regenerations
    pub const fn composer(&self) -> &MosaicComposer {
        &self.composer
    }

    /// Handle one event, regenerating when it reports a detection
    ///
    /// # Errors
    ///
    /// Returns an error if composition fails; the current mosaic is unchanged.
    pub fn handle(&mut self, event: &SeedEvent) -> Result<EventOutcome> {
        if !event.detected {
            debug!("ignoring event without detection");
            return Ok(EventOutcome::Ignored);
        }

        let seed = event.seed();
        self.regenerate(seed)?;
        Ok(EventOutcome::Regenerated { seed })
    }

    /// Replace the current mosaic with the one for `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if composition fails; the current mosaic is unchanged.
    pub fn regenerate(&mut self, seed: u64) -> Result<&MosaicState> {
        let next = self.composer.compose_seed(seed)?;
        self.current = next;
        info!("regenerated mosaic for seed {seed}");
        Ok(&self.current)
    }

    /// Drain an event stream until it closes
    ///
    /// `on_render` runs after every successful regeneration with the new
    /// mosaic. Malformed lines are skipped. Allocation failures abort only the
    /// regeneration in progress. A read error closes the stream like end of
    /// input. The last mosaic stays current afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `on_render`.
    pub fn run<I, F>(&mut self, events: I, mut on_render: F) -> Result<SessionSummary>
    where
        I: IntoIterator<Item = Result<SeedEvent>>,
        F: FnMut(&MosaicState) -> Result<()>,
    {
        let mut summary = SessionSummary::default();

        for item in events {
            let event = match item {
                Ok(event) => event,
                Err(decode @ LogoError::EventDecode { .. }) => {
                    warn!("{decode}");
                    summary.malformed += 1;
                    continue;
                }
                Err(other) => {
                    warn!("event stream failed, treating as disconnect: {other}");
                    break;
                }
            };

            summary.received += 1;
            match self.handle(&event) {
                Ok(EventOutcome::Ignored) => summary.ignored += 1,
                Ok(EventOutcome::Regenerated { .. }) => {
                    summary.regenerated += 1;
                    on_render(&self.current)?;
                }
                Err(failure) => {
                    error!("regeneration aborted, keeping previous mosaic: {failure}");
                    summary.failed += 1;
                }
            }
        }

        info!(
            "event channel closed after {} event(s); serving last mosaic",
            summary.received
        );
        Ok(summary)
    }
}
