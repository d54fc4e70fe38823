//! Shared fixture: register calibrators on a test bench.
//!
//! Each calibrator trims the registers it owns toward their targets, one
//! step at a time, and optimizes for itself plus its peers. A peer owns
//! the single register named after it.

use std::collections::BTreeMap;

use accord_core::{ActionSet, Agent, EnvAction, Lookahead};

/// Register readings plus the targets they should settle on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bench {
    readings: BTreeMap<String, i64>,
    targets: BTreeMap<String, i64>,
}

impl Bench {
    /// Build from `(register, reading, target)` triples.
    pub fn new(entries: &[(&str, i64, i64)]) -> Self {
        Self {
            readings: entries
                .iter()
                .map(|(register, reading, _)| ((*register).to_string(), *reading))
                .collect(),
            targets: entries
                .iter()
                .map(|(register, _, target)| ((*register).to_string(), *target))
                .collect(),
        }
    }

    pub fn reading(&self, register: &str) -> i64 {
        self.readings.get(register).copied().unwrap_or_default()
    }

    pub fn target(&self, register: &str) -> i64 {
        self.targets.get(register).copied().unwrap_or_default()
    }
}

const RAIL_LOW: i64 = 0;
const RAIL_HIGH: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Raise,
    Lower,
}

/// Move one register by one step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trim {
    pub register: String,
    pub step: Step,
}

impl Trim {
    pub fn raise(register: &str) -> Self {
        Self {
            register: register.to_string(),
            step: Step::Raise,
        }
    }

    pub fn lower(register: &str) -> Self {
        Self {
            register: register.to_string(),
            step: Step::Lower,
        }
    }

    pub fn inverse(&self) -> Self {
        Self {
            register: self.register.clone(),
            step: match self.step {
                Step::Raise => Step::Lower,
                Step::Lower => Step::Raise,
            },
        }
    }
}

impl EnvAction<Bench> for Trim {
    fn apply(&self, env: &Bench) -> Bench {
        let mut next = env.clone();
        let delta = match self.step {
            Step::Raise => 1,
            Step::Lower => -1,
        };
        if let Some(reading) = next.readings.get_mut(&self.register) {
            // Adjusters saturate at the rails.
            *reading = (*reading + delta).clamp(RAIL_LOW, RAIL_HIGH);
        }
        next
    }
}

/// A calibrating agent.
#[derive(Debug, Clone)]
pub struct Calibrator {
    id: String,
    registers: Vec<String>,
    peer_ids: Vec<String>,
    allowed: Option<Step>,
    depth: usize,
}

impl Calibrator {
    pub fn new(id: &str, registers: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            registers: registers.iter().map(|r| (*r).to_string()).collect(),
            peer_ids: Vec::new(),
            allowed: None,
            depth: 0,
        }
    }

    pub fn with_peers(mut self, peer_ids: &[&str]) -> Self {
        self.peer_ids = peer_ids.iter().map(|p| (*p).to_string()).collect();
        self
    }

    /// Restrict the adjusters to a single direction.
    pub fn limited_to(mut self, step: Step) -> Self {
        self.allowed = Some(step);
        self
    }

    pub fn with_search_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    fn peer(id: &str) -> Self {
        Self::new(id, &[id])
    }

    fn distance(&self, env: &Bench) -> i64 {
        self.registers
            .iter()
            .map(|register| (env.reading(register) - env.target(register)).abs())
            .max()
            .unwrap_or(0)
    }
}

impl Agent for Calibrator {
    type Env = Bench;
    type Action = Trim;
    type Criticality = i64;

    fn id(&self) -> &str {
        &self.id
    }

    fn predicted_neighbors(&self, _env: &Bench, _actions: &ActionSet<Trim>) -> Vec<Self> {
        let mut hood = vec![self.clone()];
        hood.extend(self.peer_ids.iter().map(|id| Self::peer(id)));
        hood
    }

    fn possible_actions(&self, _env: &Bench) -> ActionSet<Trim> {
        let mut actions = ActionSet::default();
        for register in &self.registers {
            if self.allowed != Some(Step::Lower) {
                actions.insert(Trim::raise(register));
            }
            if self.allowed != Some(Step::Raise) {
                actions.insert(Trim::lower(register));
            }
        }
        actions
    }

    fn contradictory_actions(&self, _env: &Bench, actions: &ActionSet<Trim>) -> ActionSet<Trim> {
        actions.iter().map(Trim::inverse).collect()
    }

    fn predicted_criticality(&self, env: &Bench, actions: &ActionSet<Trim>, agent: &Self) -> i64 {
        agent.distance(&self.act(env, actions))
    }
}

impl Lookahead for Calibrator {
    fn search_depth(&self) -> usize {
        self.depth
    }
}
