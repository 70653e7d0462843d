//! Single-CPU scheduling simulator.
//!
//! # Algorithm
//!
//! All five disciplines share one loop:
//! 1. Ask the ready set for the next process at the current clock.
//! 2. If it has not arrived yet, advance the clock to its arrival.
//! 3. Run it for its time slice (whole remaining burst unless preemptive).
//! 4. Record the block; finished processes get a detail record.
//! 5. Return the process to the ready set (or drop it when finished).
//!
//! The ready set is either rule-driven (non-preemptive, lowest score
//! among arrived processes, input order on ties) or a circular queue in
//! arrival order with a fixed quantum.
//!
//! # Complexity
//! Rule-driven: O(n^2 * r) for n processes and r rules.
//! Round Robin: O(sum(burst) / quantum + n log n).

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::Algorithm;
use crate::dispatching::{rules, DispatchingRule, RuleEngine};
use crate::error::Result;
use crate::models::{Process, ProcessDetail, ScheduleBlock, ScheduleResult};
use crate::validation::{validate_processes, validate_quantum};

#[derive(Debug, Clone)]
enum Dispatch {
    Rules(RuleEngine),
    RoundRobin { quantum: u64 },
}

/// Single-CPU scheduler.
///
/// # Example
///
/// ```
/// use os_sim::scheduler::{Algorithm, CpuScheduler};
/// use os_sim::models::Process;
///
/// let processes = vec![
///     Process::new(1).with_arrival(0).with_burst(5),
///     Process::new(2).with_arrival(1).with_burst(3),
/// ];
/// let result = CpuScheduler::new(Algorithm::Fcfs).schedule(&processes).unwrap();
/// assert_eq!(result.blocks.len(), 2);
/// assert_eq!(result.total_waiting_time, 4);
/// ```
#[derive(Debug, Clone)]
pub struct CpuScheduler {
    dispatch: Dispatch,
}

impl CpuScheduler {
    /// Creates a scheduler for one of the built-in disciplines.
    pub fn new(algorithm: Algorithm) -> Self {
        let dispatch = match algorithm {
            Algorithm::Fcfs => Dispatch::Rules(RuleEngine::single(rules::Fcfs)),
            Algorithm::Sjf => Dispatch::Rules(RuleEngine::single(rules::Sjf)),
            Algorithm::Ljf => Dispatch::Rules(RuleEngine::single(rules::Ljf)),
            Algorithm::Priority => Dispatch::Rules(RuleEngine::single(rules::PriorityRule)),
            Algorithm::RoundRobin { quantum } => Dispatch::RoundRobin { quantum },
        };
        Self { dispatch }
    }

    /// Creates a non-preemptive scheduler driven by a custom rule.
    pub fn with_rule<R: DispatchingRule + 'static>(rule: R) -> Self {
        Self::with_rule_engine(RuleEngine::single(rule))
    }

    /// Creates a non-preemptive scheduler driven by a rule engine.
    pub fn with_rule_engine(engine: RuleEngine) -> Self {
        Self {
            dispatch: Dispatch::Rules(engine),
        }
    }

    /// Whether this scheduler preempts running processes.
    pub fn is_preemptive(&self) -> bool {
        matches!(self.dispatch, Dispatch::RoundRobin { .. })
    }

    /// Simulates the schedule.
    ///
    /// # Errors
    /// `Error::InvalidInput` for an empty list, duplicate ids, a zero
    /// burst, a timeline running past `u64::MAX`, or a zero Round Robin
    /// quantum.
    pub fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult> {
        validate_processes(processes)?;
        if let Dispatch::RoundRobin { quantum } = self.dispatch {
            validate_quantum(quantum)?;
        }

        let ready = match &self.dispatch {
            Dispatch::Rules(engine) => ReadySet::Rules {
                engine,
                pending: (0..processes.len()).collect(),
            },
            Dispatch::RoundRobin { quantum } => ReadySet::Circular {
                queue: RuleEngine::single(rules::Fcfs)
                    .sort_indices(processes)
                    .into(),
                quantum: *quantum,
            },
        };

        let result = simulate(processes, ready);
        debug!(
            processes = processes.len(),
            blocks = result.blocks.len(),
            makespan = result.makespan(),
            avg_waiting = result.avg_waiting_time,
            "schedule simulated"
        );
        Ok(result)
    }
}

/// Processes still competing for the CPU.
enum ReadySet<'a> {
    /// Unfinished indices in input order; the engine picks among arrivals.
    Rules {
        engine: &'a RuleEngine,
        pending: Vec<usize>,
    },
    /// Arrival-ordered circular queue.
    Circular { queue: VecDeque<usize>, quantum: u64 },
}

impl ReadySet<'_> {
    fn next(&self, processes: &[Process], clock: u64) -> Option<usize> {
        match self {
            ReadySet::Rules { engine, pending } => {
                let earliest = pending.iter().map(|&i| processes[i].arrival_time).min()?;
                // Idle CPU: jump to the earliest pending arrival.
                let horizon = clock.max(earliest);
                let arrived: Vec<usize> = pending
                    .iter()
                    .copied()
                    .filter(|&i| processes[i].has_arrived(horizon))
                    .collect();
                engine.select_best(processes, &arrived)
            }
            ReadySet::Circular { queue, .. } => queue.front().copied(),
        }
    }

    fn time_slice(&self, remaining: u64) -> u64 {
        match self {
            ReadySet::Rules { .. } => remaining,
            ReadySet::Circular { quantum, .. } => remaining.min(*quantum),
        }
    }

    fn release(&mut self, idx: usize, finished: bool) {
        match self {
            ReadySet::Rules { pending, .. } => {
                if finished {
                    pending.retain(|&i| i != idx);
                }
            }
            ReadySet::Circular { queue, .. } => {
                queue.pop_front();
                if !finished {
                    queue.push_back(idx);
                }
            }
        }
    }
}

fn simulate(processes: &[Process], mut ready: ReadySet<'_>) -> ScheduleResult {
    let mut remaining: Vec<u64> = processes.iter().map(|p| p.burst_time).collect();
    let mut first_start: Vec<Option<u64>> = vec![None; processes.len()];
    let mut details = Vec::with_capacity(processes.len());
    let mut blocks = Vec::new();
    let mut clock: u64 = 0;

    while let Some(idx) = ready.next(processes, clock) {
        let process = &processes[idx];
        clock = clock.max(process.arrival_time);

        let run = ready.time_slice(remaining[idx]);
        let start = clock;
        // Bounded by latest arrival + total burst, which validation caps.
        let end = start + run;

        trace!(process = process.id, start, end, "block");
        blocks.push(ScheduleBlock::new(process.id, start, end));

        let start_time = *first_start[idx].get_or_insert(start);
        remaining[idx] -= run;
        clock = end;

        let finished = remaining[idx] == 0;
        if finished {
            details.push(ProcessDetail::new(
                process.id,
                process.arrival_time,
                process.burst_time,
                start_time,
                end,
            ));
        }
        ready.release(idx, finished);
    }

    ScheduleResult::new(details, blocks)
}
