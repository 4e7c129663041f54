//! Fluent builder for constructing a [`Sim`].

use courier_core::{Point, Tick};
use courier_scheduler::{DeliveryScheduler, SchedulerConfig};
use courier_world::HouseTable;

use crate::{OrderSpawner, Sim, SimConfig, SimError, SimResult, SimWorld};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — timestep, run length, seed, spawn policy
/// - [`HouseTable`] — at least one house
/// - the depot location
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                      |
/// |------------------------|------------------------------|
/// | `.scheduler_config(c)` | `SchedulerConfig::default()` |
/// | `.max_speed(v)`        | 600 units/s                  |
/// | `.cargo_capacity(n)`   | 3 units                      |
///
/// # Example
///
/// ```rust,ignore
/// let houses = load_houses_csv(Path::new("houses.csv"))?;
/// let mut sim = SimBuilder::new(SimConfig::default(), houses, Point::new(0.0, 0.0))
///     .cargo_capacity(8)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:           SimConfig,
    houses:           HouseTable,
    depot:            Point,
    scheduler_config: SchedulerConfig,
    max_speed:        Option<f32>,
    cargo_capacity:   Option<u32>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, houses: HouseTable, depot: Point) -> Self {
        Self {
            config,
            houses,
            depot,
            scheduler_config: SchedulerConfig::default(),
            max_speed:        None,
            cargo_capacity:   None,
        }
    }

    /// Override the scheduler's arrival radius / urgency margin.
    pub fn scheduler_config(mut self, config: SchedulerConfig) -> Self {
        self.scheduler_config = config;
        self
    }

    /// Agent speed in world units per second.
    pub fn max_speed(mut self, units_per_sec: f32) -> Self {
        self.max_speed = Some(units_per_sec);
        self
    }

    /// How many cargo units one depot pickup loads.
    pub fn cargo_capacity(mut self, units: u32) -> Self {
        self.cargo_capacity = Some(units);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.dt_secs <= 0.0 {
            return Err(SimError::Config(format!(
                "dt_secs must be positive, got {}",
                self.config.dt_secs
            )));
        }
        if self.houses.is_empty() {
            return Err(SimError::Config("house table is empty".into()));
        }
        let max_speed = self.max_speed.unwrap_or(600.0);
        if max_speed <= 0.0 {
            return Err(SimError::Config(format!(
                "max_speed must be positive, got {max_speed}"
            )));
        }

        let spawner = OrderSpawner::new(
            &self.houses,
            self.config.seed,
            self.config.spawn_interval_ticks,
            self.config.order_deadline_secs,
        );

        let mut world = SimWorld::new(self.houses, self.depot).with_max_speed(max_speed);
        if let Some(capacity) = self.cargo_capacity {
            world = world.with_cargo_capacity(capacity);
        }

        Ok(Sim {
            config:    self.config,
            tick:      Tick::ZERO,
            world,
            scheduler: DeliveryScheduler::new(self.scheduler_config),
            spawner,
        })
    }
}
