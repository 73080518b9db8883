//! Simulated live-metrics generator.
//!
//! A single controller task owns the gauges and is their only writer. Control
//! commands arrive over an mpsc channel and every state change is published as
//! a whole [`SimulationSnapshot`] on a `watch` channel, so readers never see a
//! partially applied update.
//!
//! While `Running` the controller sleeps until the next scheduled tick. A
//! speed change takes effect when the following tick is scheduled; it does not
//! move a deadline that is already armed. While `Paused` no tick is armed at
//! all.

pub mod gauges;

pub use gauges::LiveMetrics;

use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::tracing::{log_error, ErrorKind};
use rand::Rng;
use serde::{Serialize, Serializer};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

const COMMAND_BUFFER: usize = 32;

/// Playback speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationSpeed {
    Half,
    #[default]
    Normal,
    Double,
    Quadruple,
}

impl SimulationSpeed {
    pub const ALL: [SimulationSpeed; 4] = [
        SimulationSpeed::Half,
        SimulationSpeed::Normal,
        SimulationSpeed::Double,
        SimulationSpeed::Quadruple,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            SimulationSpeed::Half => 0.5,
            SimulationSpeed::Normal => 1.0,
            SimulationSpeed::Double => 2.0,
            SimulationSpeed::Quadruple => 4.0,
        }
    }

    /// Exact match against the supported multipliers
    pub fn from_multiplier(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|speed| (speed.multiplier() - value).abs() < f64::EPSILON)
    }

    /// Tick interval at this speed
    pub fn interval(self, base: Duration) -> Duration {
        base.div_f64(self.multiplier())
    }
}

impl Serialize for SimulationSpeed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.multiplier())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
pub enum RunState {
    Running,
    Paused,
}

/// Whole-value view of the generator published after every change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSnapshot {
    pub state: RunState,
    pub speed: SimulationSpeed,
    /// Ticks since start or the last reset
    pub tick: u64,
    pub metrics: LiveMetrics,
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub base_interval: Duration,
    pub default_speed: SimulationSpeed,
    pub autostart: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_millis(2000),
            default_speed: SimulationSpeed::Normal,
            autostart: true,
        }
    }
}

impl From<&AppConfig> for SimulationConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_interval: config.simulation_interval(),
            default_speed: SimulationSpeed::from_multiplier(config.simulation_default_speed)
                .unwrap_or_default(),
            autostart: config.simulation_autostart,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Pause,
    Resume,
    SetSpeed(SimulationSpeed),
    Reset,
}

enum Command {
    Control {
        control: Control,
        reply: oneshot::Sender<SimulationSnapshot>,
    },
    Shutdown,
}

/// Owner side of the generator task
struct Controller<R> {
    config: SimulationConfig,
    rng: R,
    state: RunState,
    speed: SimulationSpeed,
    tick: u64,
    metrics: LiveMetrics,
    next_tick: Instant,
    commands: mpsc::Receiver<Command>,
    publisher: watch::Sender<SimulationSnapshot>,
}

impl<R: Rng> Controller<R> {
    fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            state: self.state,
            speed: self.speed,
            tick: self.tick,
            metrics: self.metrics,
        }
    }

    fn publish(&self) -> SimulationSnapshot {
        let snapshot = self.snapshot();
        self.publisher.send_replace(snapshot.clone());
        snapshot
    }

    fn schedule_next(&mut self) {
        self.next_tick = Instant::now() + self.speed.interval(self.config.base_interval);
    }

    fn apply(&mut self, control: Control) {
        match control {
            Control::Pause => {
                if self.state == RunState::Running {
                    self.state = RunState::Paused;
                }
            }
            Control::Resume => {
                if self.state == RunState::Paused {
                    self.state = RunState::Running;
                    self.schedule_next();
                }
            }
            Control::SetSpeed(speed) => {
                self.speed = speed;
            }
            Control::Reset => {
                self.metrics = LiveMetrics::default();
                self.speed = self.config.default_speed;
                self.tick = 0;
                self.state = RunState::Running;
                self.schedule_next();
            }
        }
        debug!(
            ?control,
            state = %self.state,
            speed = self.speed.multiplier(),
            "Simulation control applied"
        );
    }

    fn on_tick(&mut self) {
        self.metrics.tick(&mut self.rng);
        self.tick += 1;
        metrics::counter!("pharmadash.simulation.ticks", 1);
        self.schedule_next();
        self.publish();
    }

    async fn run(mut self) {
        info!(
            interval_ms = self.config.base_interval.as_millis() as u64,
            state = %self.state,
            "Simulation controller started"
        );

        loop {
            let running = self.state == RunState::Running;
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Control { control, reply }) => {
                        self.apply(control);
                        let snapshot = self.publish();
                        if reply.send(snapshot).is_err() {
                            debug!("Simulation control caller went away before the reply");
                        }
                    }
                    Some(Command::Shutdown) | None => break,
                },
                _ = sleep_until(self.next_tick), if running => self.on_tick(),
            }
        }

        info!(ticks = self.tick, "Simulation controller stopped");
    }
}

/// Read/control side of the generator, shared behind an `Arc`.
///
/// Dropping the handle aborts the controller task. Call
/// [`SimulationHandle::shutdown`] to stop it and wait for it to finish.
pub struct SimulationHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<SimulationSnapshot>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl SimulationHandle {
    /// Spawns the controller task on the current tokio runtime.
    pub fn spawn<R>(config: SimulationConfig, rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let state = if config.autostart {
            RunState::Running
        } else {
            RunState::Paused
        };
        let speed = config.default_speed;
        let initial = SimulationSnapshot {
            state,
            speed,
            tick: 0,
            metrics: LiveMetrics::default(),
        };
        let (publisher, snapshots) = watch::channel(initial);

        let next_tick = Instant::now() + speed.interval(config.base_interval);
        let controller = Controller {
            config,
            rng,
            state,
            speed,
            tick: 0,
            metrics: LiveMetrics::default(),
            next_tick,
            commands: command_rx,
            publisher,
        };
        let task = tokio::spawn(controller.run());

        Self {
            commands: command_tx,
            snapshots,
            task: Mutex::new(Some(task)),
        }
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> SimulationSnapshot {
        self.snapshots.borrow().clone()
    }

    /// New subscription to snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<SimulationSnapshot> {
        self.snapshots.clone()
    }

    pub fn is_alive(&self) -> bool {
        self.task
            .lock()
            .map(|task| task.as_ref().map_or(false, |t| !t.is_finished()))
            .unwrap_or(false)
    }

    pub async fn pause(&self) -> Result<SimulationSnapshot, ServiceError> {
        self.control(Control::Pause).await
    }

    pub async fn resume(&self) -> Result<SimulationSnapshot, ServiceError> {
        self.control(Control::Resume).await
    }

    pub async fn set_speed(
        &self,
        speed: SimulationSpeed,
    ) -> Result<SimulationSnapshot, ServiceError> {
        self.control(Control::SetSpeed(speed)).await
    }

    /// Restores default gauges and speed and resumes ticking
    pub async fn reset(&self) -> Result<SimulationSnapshot, ServiceError> {
        self.control(Control::Reset).await
    }

    async fn control(&self, control: Control) -> Result<SimulationSnapshot, ServiceError> {
        let (reply, response) = oneshot::channel();
        let outcome = match self.commands.send(Command::Control { control, reply }).await {
            Ok(()) => response.await.map_err(|_| {
                ServiceError::SimulationError("controller dropped the request".into())
            }),
            Err(_) => Err(ServiceError::SimulationError(
                "controller is not running".into(),
            )),
        };
        if let Err(err) = &outcome {
            log_error(err, ErrorKind::Simulation, Some("simulation control"));
        }
        outcome
    }

    /// Stops the controller and waits for the task to exit. Idempotent.
    pub async fn shutdown(&self) {
        let task = match self.task.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(task) = task else {
            return;
        };
        if self.commands.send(Command::Shutdown).await.is_err() {
            debug!("Simulation controller already stopped");
        }
        if let Err(err) = task.await {
            if !err.is_cancelled() {
                warn!(error = %err, "Simulation controller task failed");
            }
        }
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        let task = match self.task.get_mut() {
            Ok(task) => task.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(task) = task {
            task.abort();
        }
    }
}
