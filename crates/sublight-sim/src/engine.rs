//! Simulation engine — owner of the tick loop's state.
//!
//! `SimulationEngine` owns the hecs ECS world of ships, processes queued
//! commands at tick boundaries, runs the systems in order, and produces
//! `SimSnapshot`s. Single-threaded and synchronous: a tick always runs to
//! completion, and the caller is responsible for scheduling and for
//! supplying a consistent timestep through the environment.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sublight_core::commands::SimCommand;
use sublight_core::components::ShipLabel;
use sublight_core::config::{ShipConfig, SimEnvironment};
use sublight_core::control::ControlIntent;
use sublight_core::enums::SimPhase;
use sublight_core::errors::ConfigError;
use sublight_core::state::SimSnapshot;
use sublight_core::types::SimTime;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial environment (timestep, speed limit, inertia scale).
    pub env: SimEnvironment,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            env: SimEnvironment::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all cross-tick state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    env: SimEnvironment,
    rng: ChaCha8Rng,
    next_ship_id: u32,
    command_queue: VecDeque<SimCommand>,
}

impl SimulationEngine {
    /// Create a new engine. Fails fast on a degenerate environment.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.env.validate()?;
        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            env: config.env,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_ship_id: 0,
            command_queue: VecDeque::new(),
        })
    }

    /// Add a ship from a configuration snapshot and return its id.
    pub fn add_ship(&mut self, config: &ShipConfig) -> Result<u32, ConfigError> {
        let id = self.next_ship_id;
        world_setup::spawn_ship(&mut self.world, id, config)?;
        self.next_ship_id += 1;
        Ok(id)
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            systems::assist::run(&mut self.world, &mut self.rng, &self.env);
            systems::integrator::run(&mut self.world, &self.env);
            systems::integrator::update_cameras(&mut self.world);
            self.time.advance(self.env.dt_sec);
        }

        systems::snapshot::build_snapshot(&self.world, &self.time)
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Directly set a ship's velocity, keeping momentum consistent (for
    /// tests needing relativistic starting conditions).
    #[cfg(test)]
    pub fn set_ship_velocity(&mut self, ship_id: u32, velocity: glam::DVec2) {
        use sublight_core::components::ShipDynamics;
        use sublight_core::relativity::{gamma_from_speed, velocity_from_momentum};

        let c = self.env.c_mps;
        for (_entity, (label, dynamics)) in
            self.world.query_mut::<(&ShipLabel, &mut ShipDynamics)>()
        {
            if label.id == ship_id {
                let gamma = gamma_from_speed(velocity.length(), c);
                dynamics.momentum = velocity * gamma * dynamics.mass_kg;
                let (v, g) = velocity_from_momentum(dynamics.momentum, dynamics.mass_kg, c);
                dynamics.velocity = v;
                dynamics.gamma = g;
            }
        }
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn env(&self) -> SimEnvironment {
        self.env
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SetIntent { ship_id, intent } => {
                for (_entity, (label, slot)) in
                    self.world.query_mut::<(&ShipLabel, &mut ControlIntent)>()
                {
                    if label.id == ship_id {
                        *slot = intent;
                    }
                }
            }
            SimCommand::SetEnvironment { env } => match env.validate() {
                Ok(()) => self.env = env,
                Err(e) => log::warn!("rejected environment update: {e}"),
            },
            SimCommand::Pause => {
                self.phase = SimPhase::Paused;
            }
            SimCommand::Resume => {
                self.phase = SimPhase::Running;
            }
        }
    }
}
