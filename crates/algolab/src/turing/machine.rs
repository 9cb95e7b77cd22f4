//! YAML transition tables compiled into executable machines.
//!
//! Table layout (matching the historical runner):
//!
//! ```yaml
//! initial state: seek_a
//! final states: [done]
//! transitions:
//!   seek_a:
//!     "0,1": {state: seek_a, write: "0,1", move: "R,N"}
//! ```
//!
//! Symbol pairs, writes and moves are comma-separated two-tape tokens.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use thiserror::Error;

use super::tape::SparseTape;

#[derive(Debug, Error)]
pub enum TmError {
    #[error("failed to parse machine table: {0}")]
    Table(#[from] serde_yaml::Error),

    #[error("expected two comma-separated fields in {0:?}")]
    BadPair(String),

    #[error("symbol {0:?} is not a single character")]
    BadSymbol(String),

    #[error("bad move token {0:?} (expected L, R or N)")]
    BadMove(String),

    #[error("target state {0:?} has no transitions and is not final")]
    UnknownState(String),

    #[error("no transition defined for state {state:?} reading ({s1:?}, {s2:?})")]
    UndefinedTransition { state: String, s1: char, s2: char },

    #[error("no halt within {limit} steps (current state {state:?})")]
    StepLimit { limit: u64, state: String },
}

/// Head move per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Stay,
}

impl Move {
    fn parse(tok: &str) -> Result<Self, TmError> {
        match tok.trim() {
            "L" => Ok(Move::Left),
            "R" => Ok(Move::Right),
            "N" => Ok(Move::Stay),
            other => Err(TmError::BadMove(other.to_string())),
        }
    }

    #[inline]
    fn offset(self) -> i64 {
        match self {
            Move::Left => -1,
            Move::Right => 1,
            Move::Stay => 0,
        }
    }
}

/// Interned state handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(usize);

#[derive(Clone, Copy, Debug)]
struct Rule {
    next: StateId,
    write: (char, char),
    mv: (Move, Move),
}

#[derive(Debug, Deserialize)]
struct RawTable {
    #[serde(rename = "initial state")]
    initial: String,
    #[serde(rename = "final states")]
    finals: Vec<String>,
    transitions: BTreeMap<String, BTreeMap<String, RawRule>>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    state: String,
    write: String,
    #[serde(rename = "move")]
    mv: String,
}

/// Compiled two-tape machine: interned state names, rules keyed by
/// `(state, symbol on tape 1, symbol on tape 2)`.
#[derive(Clone, Debug)]
pub struct Machine {
    states: Vec<String>,
    initial: StateId,
    is_final: Vec<bool>,
    delta: HashMap<(StateId, char, char), Rule>,
}

impl Machine {
    pub fn from_yaml(text: &str) -> Result<Self, TmError> {
        let raw: RawTable = serde_yaml::from_str(text)?;
        Self::compile(raw)
    }

    fn compile(raw: RawTable) -> Result<Self, TmError> {
        fn intern(name: &str, states: &mut Vec<String>) -> StateId {
            if let Some(pos) = states.iter().position(|s| s == name) {
                StateId(pos)
            } else {
                states.push(name.to_string());
                StateId(states.len() - 1)
            }
        }

        let mut states: Vec<String> = Vec::new();
        let initial = intern(&raw.initial, &mut states);
        let mut delta = HashMap::new();
        for (from, rules) in &raw.transitions {
            let from_id = intern(from, &mut states);
            for (read_key, rule) in rules {
                let (s1, s2) = split_symbols(read_key)?;
                let (w1, w2) = split_symbols(&rule.write)?;
                let (m1, m2) = split_pair(&rule.mv)?;
                let compiled = Rule {
                    next: intern(&rule.state, &mut states),
                    write: (w1, w2),
                    mv: (Move::parse(m1)?, Move::parse(m2)?),
                };
                delta.insert((from_id, s1, s2), compiled);
            }
        }

        let mut is_final = vec![false; states.len()];
        for name in &raw.finals {
            let id = intern(name, &mut states);
            if id.0 >= is_final.len() {
                is_final.resize(id.0 + 1, false);
            }
            is_final[id.0] = true;
        }

        // Every reachable state must be able to act: a rule target (or the
        // initial state) that neither owns transitions nor is final would
        // only fail later, mid-run, as an undefined transition.
        let can_act = |name: &str, states: &[String], is_final: &[bool]| {
            raw.transitions.contains_key(name)
                || states
                    .iter()
                    .position(|s| s == name)
                    .is_some_and(|pos| is_final.get(pos).copied().unwrap_or(false))
        };
        if !can_act(&raw.initial, &states, &is_final) {
            return Err(TmError::UnknownState(raw.initial.clone()));
        }
        for rules in raw.transitions.values() {
            for rule in rules.values() {
                if !can_act(&rule.state, &states, &is_final) {
                    return Err(TmError::UnknownState(rule.state.clone()));
                }
            }
        }

        Ok(Self {
            states,
            initial,
            is_final,
            delta,
        })
    }

    pub fn state_name(&self, id: StateId) -> &str {
        &self.states[id.0]
    }

    /// Start an execution with `a` on tape 1 and `b` on tape 2, both heads
    /// at cell 0.
    pub fn start(&self, a: &str, b: &str) -> Run<'_> {
        Run {
            machine: self,
            t1: SparseTape::seeded(a),
            t2: SparseTape::seeded(b),
            h1: 0,
            h2: 0,
            state: self.initial,
            steps: 0,
        }
    }
}

fn split_pair(s: &str) -> Result<(&str, &str), TmError> {
    s.split_once(',').ok_or_else(|| TmError::BadPair(s.to_string()))
}

fn split_symbols(s: &str) -> Result<(char, char), TmError> {
    let (a, b) = split_pair(s)?;
    Ok((one_char(a)?, one_char(b)?))
}

fn one_char(tok: &str) -> Result<char, TmError> {
    let mut chars = tok.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TmError::BadSymbol(tok.to_string())),
    }
}

/// One in-flight execution of a [`Machine`].
#[derive(Clone, Debug)]
pub struct Run<'a> {
    machine: &'a Machine,
    pub t1: SparseTape,
    pub t2: SparseTape,
    pub h1: i64,
    pub h2: i64,
    state: StateId,
    pub steps: u64,
}

impl Run<'_> {
    /// Apply one rule. Returns `false` without side effects once a final
    /// state is reached.
    pub fn step(&mut self) -> Result<bool, TmError> {
        if self.halted() {
            return Ok(false);
        }
        let s1 = self.t1.read(self.h1);
        let s2 = self.t2.read(self.h2);
        let rule = self
            .machine
            .delta
            .get(&(self.state, s1, s2))
            .copied()
            .ok_or_else(|| TmError::UndefinedTransition {
                state: self.machine.state_name(self.state).to_string(),
                s1,
                s2,
            })?;
        self.t1.write(self.h1, rule.write.0);
        self.t2.write(self.h2, rule.write.1);
        self.h1 += rule.mv.0.offset();
        self.h2 += rule.mv.1.offset();
        self.state = rule.next;
        self.steps += 1;
        Ok(true)
    }

    /// Step until a final state, erroring if `max_steps` is exhausted first.
    pub fn run(&mut self, max_steps: u64) -> Result<(), TmError> {
        while self.steps < max_steps && self.step()? {}
        if self.halted() {
            Ok(())
        } else {
            Err(TmError::StepLimit {
                limit: max_steps,
                state: self.state_name().to_string(),
            })
        }
    }

    #[inline]
    pub fn halted(&self) -> bool {
        self.machine.is_final[self.state.0]
    }

    pub fn state_name(&self) -> &str {
        self.machine.state_name(self.state)
    }

    /// Conventional output: tape 2 trimmed, leading zeros stripped.
    pub fn result(&self) -> String {
        let s = self.t2.to_string_trimmed();
        let s = s.trim_start_matches('0');
        if s.is_empty() {
            "0".to_string()
        } else {
            s.to_string()
        }
    }
}
