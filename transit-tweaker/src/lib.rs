//! Transit Tweaker
//!
//! Server mod that rescales transit prices, transit container grids and
//! transit durations once the server database has been loaded. The host owns
//! the tables and the logger; this crate only mutates the fields it names.

pub mod config;
pub mod locations;
pub mod logger;
pub mod numbers;
pub mod tables;
pub mod tweaker;

// Re-export commonly used types
pub use config::{
    CONFIG_RELATIVE_PATH, ConfigError, ConfiguredGridSize, FileConfigLoader, TweakerConfig,
};
pub use locations::LocationId;
pub use logger::{LogFacade, LogTextColor, ModLogger};
pub use tables::{DatabaseTables, GridSize, Transit};
pub use tweaker::{TransitTweaker, TweakError, TweakSummary};

/// Trait for abstracting where the mod configuration comes from
/// Hosts that do not ship a config file can provide their own
pub trait ConfigLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the mod configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read, parsed or validated.
    fn load_config(&self) -> Result<TweakerConfig, Self::Error>;
}

/// Lifecycle of the mod inside one server process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModState {
    NotLoaded,
    Loaded(TweakSummary),
}

/// Host-facing mod instance, constructed once and run after the database loads.
pub struct TransitTweakerMod<L>
where
    L: ConfigLoader,
{
    loader: L,
    state: ModState,
}

impl<L> TransitTweakerMod<L>
where
    L: ConfigLoader,
{
    pub const fn new(loader: L) -> Self {
        Self {
            loader,
            state: ModState::NotLoaded,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ModState {
        self.state
    }

    /// Load the configuration and apply it to the freshly loaded tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable, if the tables lack a
    /// known location, or if the mod has already run.
    pub fn post_db_load(
        &mut self,
        tables: &mut DatabaseTables,
        logger: &dyn ModLogger,
    ) -> Result<TweakSummary, anyhow::Error> {
        self.run(tables, logger, |config| config)
    }

    /// Same as [`Self::post_db_load`], letting the caller adjust the loaded
    /// configuration first.
    ///
    /// # Errors
    ///
    /// See [`Self::post_db_load`].
    pub fn run(
        &mut self,
        tables: &mut DatabaseTables,
        logger: &dyn ModLogger,
        adjust: impl FnOnce(TweakerConfig) -> TweakerConfig,
    ) -> Result<TweakSummary, anyhow::Error> {
        if matches!(self.state, ModState::Loaded(_)) {
            return Err(TweakError::AlreadyLoaded.into());
        }
        let config = adjust(self.loader.load_config()?);
        config.validate()?;
        let summary = TransitTweaker::new(config).apply(tables, logger)?;
        self.state = ModState::Loaded(summary);
        Ok(summary)
    }
}
