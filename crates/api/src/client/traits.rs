//! Hiscores source trait definitions.
//!
//! [`HiscoresSource::fetch_player`] is the only required method. The batch
//! fetch and game mode detection are provided on top of it so that every
//! source, real or fake, shares the same semantics.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::errors::HiscoresError;
use crate::models::{GameMode, PlayerPayload};

/// Which game modes [`HiscoresSource::determine_mode`] may skip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeOptions {
    pub skip_hardcore: bool,
    pub skip_ultimate: bool,
}

/// Game modes to probe, most restrictive first.
///
/// An ultimate or hardcore account also appears on the ironman and regular
/// tables, so the restrictive tables must be asked first.
pub fn probe_order(options: ProbeOptions) -> Vec<GameMode> {
    let mut modes = Vec::with_capacity(4);
    if !options.skip_ultimate {
        modes.push(GameMode::Ultimate);
    }
    if !options.skip_hardcore {
        modes.push(GameMode::Hardcore);
    }
    modes.push(GameMode::Ironman);
    modes.push(GameMode::Regular);
    modes
}

/// Anything that can answer "what are this player's stats in this mode".
#[async_trait]
pub trait HiscoresSource: Send + Sync {
    /// Fetch one player's raw stats.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))` when the player is ranked in `mode`
    /// - `Ok(None)` when the endpoint reports the player as not found
    /// - `Err(_)` on transport or format failures
    async fn fetch_player(
        &self,
        username: &str,
        mode: GameMode,
    ) -> Result<Option<PlayerPayload>, HiscoresError>;

    /// Fetch several players one after another.
    ///
    /// Players that are not found or fail to fetch are left out of the
    /// result; one failure never stops the rest.
    async fn fetch_many(
        &self,
        usernames: &[String],
        mode: GameMode,
    ) -> BTreeMap<String, PlayerPayload> {
        info!(
            "Fetching data for {} players in {} mode",
            usernames.len(),
            mode
        );

        let mut players = BTreeMap::new();
        for username in usernames {
            match self.fetch_player(username, mode).await {
                Ok(Some(payload)) => {
                    players.insert(username.clone(), payload);
                }
                Ok(None) => {
                    warn!("Could not fetch data for player '{}': not found", username);
                }
                Err(e) => {
                    warn!(
                        "Could not fetch data for player '{}' ({} error): {}",
                        username,
                        e.kind(),
                        e
                    );
                }
            }
        }

        info!(
            "Successfully fetched data for {} out of {} players",
            players.len(),
            usernames.len()
        );
        players
    }

    /// Work out which game mode an account belongs to.
    ///
    /// Returns the first mode from [`probe_order`] that has the player, or
    /// `None` if no mode does.
    async fn determine_mode(&self, username: &str, options: ProbeOptions) -> Option<GameMode> {
        info!("Determining game mode for player '{}'", username);

        for mode in probe_order(options) {
            match self.fetch_player(username, mode).await {
                Ok(Some(_)) => {
                    info!("Game mode found for '{}': {}", username, mode);
                    return Some(mode);
                }
                Ok(None) => debug!("'{}' is not ranked in {} mode", username, mode),
                Err(e) => warn!(
                    "Probe of {} mode for '{}' failed ({} error): {}",
                    mode,
                    username,
                    e.kind(),
                    e
                ),
            }
        }

        warn!(
            "Unable to determine game mode for '{}'. Account may not exist.",
            username
        );
        None
    }
}
