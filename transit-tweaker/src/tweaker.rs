//! The load-time pass that rescales transit prices, grids and durations.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TweakerConfig;
use crate::locations::LocationId;
use crate::logger::{LogTextColor, ModLogger};
use crate::numbers::scale_transit_time;
use crate::tables::{DatabaseTables, TransitSettings};

/// Prefix attached to every line this mod writes.
pub const LOG_PREFIX: &str = "[TransitTweaker]";

/// Host tables did not have the shape the pass relies on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TweakError {
    #[error("location {0} is missing from the database")]
    MissingLocation(LocationId),
    #[error("location {0} has no base record")]
    MissingLocationBase(LocationId),
    #[error("transit tweaks were already applied")]
    AlreadyLoaded,
}

/// Counts of what a single pass touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TweakSummary {
    pub prices_adjusted: usize,
    pub fence_levels: usize,
    pub transits_scaled: usize,
    pub locations_skipped: usize,
}

impl TweakSummary {
    /// Number of debug lines the pass writes when debug output is on.
    #[must_use]
    pub const fn debug_lines(&self) -> usize {
        self.prices_adjusted + self.fence_levels + self.transits_scaled + self.locations_skipped
    }
}

/// Applies a [`TweakerConfig`] to server tables.
///
/// The pass is not idempotent: every call multiplies the current values again.
#[derive(Debug, Clone)]
pub struct TransitTweaker {
    config: TweakerConfig,
}

impl TransitTweaker {
    #[must_use]
    pub const fn new(config: TweakerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &TweakerConfig {
        &self.config
    }

    /// Run the full pass over `tables` and announce completion.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the known maps, or its base record, is
    /// absent. Prices and grids are already updated at that point.
    pub fn apply(
        &self,
        tables: &mut DatabaseTables,
        logger: &dyn ModLogger,
    ) -> Result<TweakSummary, TweakError> {
        let mut summary = TweakSummary::default();
        self.adjust_prices(&mut tables.globals.config.transit_settings, logger, &mut summary);
        self.adjust_grid_sizes(tables, logger, &mut summary);
        self.adjust_transit_times(tables, logger, &mut summary)?;
        logger.info(&format!("{LOG_PREFIX} loaded."));
        Ok(summary)
    }

    fn adjust_prices(
        &self,
        transit: &mut TransitSettings,
        logger: &dyn ModLogger,
        summary: &mut TweakSummary,
    ) {
        let multiplier = self.config.transit_cost_multiplier;
        for (faction, price) in [
            ("Bear", &mut transit.bear_price_mod),
            ("Usec", &mut transit.usec_price_mod),
        ] {
            let old = *price;
            *price *= multiplier;
            self.debug_log(logger, &format!("Changed {faction} price from {old} to {price}"));
            summary.prices_adjusted += 1;
        }
    }

    fn adjust_grid_sizes(
        &self,
        tables: &mut DatabaseTables,
        logger: &dyn ModLogger,
        summary: &mut TweakSummary,
    ) {
        let levels = &mut tables.globals.config.fence_settings.levels;
        for level in levels.values_mut() {
            let old = level.transit_grid_size;
            level.transit_grid_size = self.config.transit_grid_size.to_grid();
            let new = level.transit_grid_size;
            self.debug_log(
                logger,
                &format!(
                    "Changed grid size from {}x{} to {}x{}",
                    old.x, old.y, new.x, new.y
                ),
            );
            summary.fence_levels += 1;
        }
    }

    fn adjust_transit_times(
        &self,
        tables: &mut DatabaseTables,
        logger: &dyn ModLogger,
        summary: &mut TweakSummary,
    ) -> Result<(), TweakError> {
        let multiplier = self.config.transit_time_multiplier;
        for id in LocationId::ALL {
            let location = tables
                .locations
                .get_mut(id.key())
                .ok_or(TweakError::MissingLocation(id))?;
            let base = location
                .base
                .as_mut()
                .ok_or(TweakError::MissingLocationBase(id))?;

            let Some(transits) = base.transits.as_mut() else {
                self.debug_log(logger, &format!("{} has no transits. Skipping...", base.name));
                summary.locations_skipped += 1;
                continue;
            };

            for transit in transits.iter_mut() {
                let old = transit.time;
                transit.time = scale_transit_time(old, multiplier);
                self.debug_log(
                    logger,
                    &format!("{} - {}: {old} -> {}", base.name, transit.name, transit.time),
                );
                summary.transits_scaled += 1;
            }
        }
        Ok(())
    }

    fn debug_log(&self, logger: &dyn ModLogger, message: &str) {
        if self.config.debug {
            logger.log_with_color(&format!("{LOG_PREFIX} {message}"), LogTextColor::Cyan);
        }
    }
}
