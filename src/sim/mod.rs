//! Discrete-event simulation of two queueing stations in tandem.
//!
//! Two switches in cascade are modeled as a network of two single-server
//! FIFO queues: packets arrive at the first station, and packets departing
//! it arrive at the second immediately. Interarrival gaps and service times
//! are all doubly truncated exponential variates sharing the configured
//! `[a, b]` bounds.

pub mod config;

pub use config::{ConfigError, SimConfig};

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::dist::{DistError, TruncExpon};

/// Errors that abort a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("event list empty at simulated time {clock}")]
    EventListEmpty { clock: f64 },

    #[error("{station} overflow at simulated time {clock} (mean service time: {mean_service_time}, mean interarrival time: {mean_interarrival_time})")]
    QueueOverflow {
        station: String,
        clock: f64,
        mean_service_time: f64,
        mean_interarrival_time: f64,
    },

    #[error("invalid distribution parameters: {0}")]
    Dist(#[from] DistError),

    #[error("cannot write event trace: {0}")]
    Trace(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    Arrival,
    Departure,
}

/// Scheduled event; the event list pops the earliest one, breaking ties
/// arrival before departure, then by station index.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Event {
    time: f64,
    kind: EventKind,
    station: usize,
}

impl Eq for Event {}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.station.cmp(&other.station))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One single-server FIFO station. `pending` holds the arrival times of
/// packets waiting behind the one in service.
#[derive(Debug)]
struct Station {
    name: String,
    service: TruncExpon,
    busy: bool,
    pending: VecDeque<f64>,
}

impl Station {
    fn new(name: &str, service: TruncExpon) -> Self {
        Station {
            name: name.to_string(),
            service,
            busy: false,
            pending: VecDeque::new(),
        }
    }
}

/// Final counters of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimReport {
    pub processed_pkts: u64,
    /// Queue delay plus service time, averaged over the processed packets.
    pub avg_system_delay: f64,
}

impl SimReport {
    /// Writes the bare average system delay to `path`, one line.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, format!("{:.6}\n", self.avg_system_delay))
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "avg system delay: {:.6} time units", self.avg_system_delay)
    }
}

/// The two-station network and its event loop.
pub struct TandemSim {
    config: SimConfig,
    rng: SmallRng,
    clock: f64,
    events: BinaryHeap<Reverse<Event>>,
    stations: Vec<Station>,
    interarrival: TruncExpon,
    processed_pkts: u64,
    total_service: f64,
    total_queue_delay: f64,
}

impl TandemSim {
    /// Builds the network from a validated configuration and schedules the
    /// first external arrival.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        let interarrival = TruncExpon::new(config.a, config.b, config.mean_interarrival_time)?;
        let stations = vec![
            Station::new("Q1", TruncExpon::new(config.a, config.b, config.mean_service_time_1)?),
            Station::new("Q2", TruncExpon::new(config.a, config.b, config.mean_service_time_2)?),
        ];

        let mut sim = TandemSim {
            config: *config,
            rng: SmallRng::seed_from_u64(config.seed),
            clock: 0.0,
            events: BinaryHeap::new(),
            stations,
            interarrival,
            processed_pkts: 0,
            total_service: 0.0,
            total_queue_delay: 0.0,
        };
        let first = sim.interarrival.sample(&mut sim.rng);
        sim.events.push(Reverse(Event {
            time: first,
            kind: EventKind::Arrival,
            station: 0,
        }));
        Ok(sim)
    }

    /// Runs until `num_pkts` packets have been processed, writing one trace
    /// line per arrival and departure to `trace`.
    ///
    /// A packet counts as processed when the last station starts serving
    /// it, so the final departures may still be scheduled when the loop
    /// stops.
    pub fn run<W: Write>(mut self, trace: &mut W) -> Result<SimReport, SimError> {
        while self.processed_pkts < self.config.num_pkts {
            let Reverse(event) = self
                .events
                .pop()
                .ok_or(SimError::EventListEmpty { clock: self.clock })?;
            self.clock = event.time;
            match event.kind {
                EventKind::Arrival => self.arrival(event.station, trace)?,
                EventKind::Departure => self.departure(event.station, trace)?,
            }
        }

        Ok(SimReport {
            processed_pkts: self.processed_pkts,
            avg_system_delay: (self.total_queue_delay + self.total_service)
                / self.processed_pkts as f64,
        })
    }

    fn next_station(&self, i: usize) -> Option<usize> {
        if i + 1 < self.stations.len() {
            Some(i + 1)
        } else {
            None
        }
    }

    /// Starts service at station `i` and schedules its completion. A packet
    /// entering service at the last station counts as processed.
    fn schedule_departure(&mut self, i: usize) {
        if self.next_station(i).is_none() {
            self.processed_pkts += 1;
        }
        let service = self.stations[i].service;
        let service_time = service.sample(&mut self.rng);
        self.total_service += service_time;
        self.events.push(Reverse(Event {
            time: self.clock + service_time,
            kind: EventKind::Departure,
            station: i,
        }));
    }

    fn arrival<W: Write>(&mut self, i: usize, trace: &mut W) -> Result<(), SimError> {
        writeln!(
            trace,
            "arrival   {}  (sim. time: {:.3}) (queue size: {})",
            self.stations[i].name,
            self.clock,
            self.stations[i].pending.len()
        )?;

        if self.stations[i].busy {
            // The server is taken, keep the packet pending.
            self.stations[i].pending.push_back(self.clock);
            if self.stations[i].pending.len() > self.config.q_limit {
                return Err(SimError::QueueOverflow {
                    station: self.stations[i].name.clone(),
                    clock: self.clock,
                    mean_service_time: self.stations[i].service.mean(),
                    mean_interarrival_time: self.config.mean_interarrival_time,
                });
            }
        } else {
            self.stations[i].busy = true;
            self.schedule_departure(i);
        }

        // Only the first station sees external arrivals; schedule the next
        // one, or the simulation would run dry.
        if i == 0 {
            let gap = self.interarrival.sample(&mut self.rng);
            self.events.push(Reverse(Event {
                time: self.clock + gap,
                kind: EventKind::Arrival,
                station: 0,
            }));
        }
        Ok(())
    }

    fn departure<W: Write>(&mut self, i: usize, trace: &mut W) -> Result<(), SimError> {
        writeln!(
            trace,
            "departure {}  (sim. time: {:.3}) (queue size: {})",
            self.stations[i].name,
            self.clock,
            self.stations[i].pending.len()
        )?;

        // The departing packet arrives at the next station immediately.
        if let Some(next) = self.next_station(i) {
            self.arrival(next, trace)?;
        }

        // Start serving the head of the pending queue, if any.
        if let Some(arrived_at) = self.stations[i].pending.pop_front() {
            self.total_queue_delay += self.clock - arrived_at;
            self.schedule_departure(i);
        } else {
            self.stations[i].busy = false;
        }
        Ok(())
    }
}
