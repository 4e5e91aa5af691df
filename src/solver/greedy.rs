//! Single-pass greedy feasibility solver.
//!
//! # Algorithm
//!
//! 1. Group agents by target slot and count, per resource, the active
//!    agents liking it (`cnt`).
//! 2. Seed a safe pool with every resource whose count is zero, in
//!    increasing id order.
//! 3. Process slots `1..=m` in increasing order:
//!    - **Targeted slot** (`r` targeting agents): build a frequency count
//!      over the resources liked by the group, touching each occurrence
//!      once. A resource is eligible iff all `r` agents like it
//!      (`freq == r`), no outside active agent likes it (`cnt == r`), and
//!      it is unused. Commit the first eligible resource in touch order,
//!      then retire the group: decrement `cnt` per liked resource and
//!      append any resource reaching zero while unused to the safe pool.
//!    - **Free slot** (no targeting agent): advance a forward-only cursor
//!      through the safe pool, skipping used entries, and commit the
//!      first unused one.
//!    Either case failing to commit a resource makes the scenario
//!    infeasible immediately.
//!
//! The slot order is load-bearing: it defines which agents are still
//! active when each slot is decided, and no slot is ever revisited.
//!
//! # Complexity
//! O(m + L) per scenario, where L is the total preference-list length:
//! each liked list is walked once to count, once in its target slot's
//! frequency pass, and once at retirement; the safe-pool cursor never
//! rewinds.

use crate::models::{ResourceId, Scenario, Verdict};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Greedy feasibility solver.
///
/// Stateless: all scratch arrays are scoped to a single [`evaluate`]
/// call, so one solver may evaluate any number of scenarios, repeatedly
/// or concurrently, with identical results.
///
/// Expects validated scenarios (see [`crate::validation`]); ids outside
/// `[1, m]` are not bounds-checked here.
///
/// # Example
///
/// ```
/// use u_assign::models::{Agent, Scenario, Verdict};
/// use u_assign::solver::GreedySolver;
///
/// let scenario = Scenario::new(2)
///     .with_agent(Agent::new(1).with_liked(vec![1, 2]));
///
/// let solver = GreedySolver::new();
/// assert_eq!(solver.evaluate(&scenario), Verdict::Feasible);
/// ```
///
/// [`evaluate`]: GreedySolver::evaluate
#[derive(Debug, Clone, Copy)]
pub struct GreedySolver;

impl GreedySolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Decides whether a valid resource-to-slot bijection exists.
    ///
    /// Deterministic and side-effect free; infeasibility is a normal
    /// [`Verdict::Infeasible`], never an error.
    pub fn evaluate(&self, scenario: &Scenario) -> Verdict {
        Verdict::from(self.feasible(scenario))
    }

    /// Evaluates a batch of scenarios sequentially, in input order.
    pub fn evaluate_all(&self, scenarios: &[Scenario]) -> Vec<Verdict> {
        scenarios.iter().map(|s| self.evaluate(s)).collect()
    }

    /// Evaluates a batch of scenarios in parallel, preserving input order.
    ///
    /// Scenarios share no solver state, so this is coordination-free.
    #[cfg(feature = "parallel")]
    pub fn evaluate_all_parallel(&self, scenarios: &[Scenario]) -> Vec<Verdict> {
        scenarios.par_iter().map(|s| self.evaluate(s)).collect()
    }

    fn feasible(&self, scenario: &Scenario) -> bool {
        let m = scenario.slot_count;

        // Agents grouped by target slot. Index 0 unused (ids are 1-based).
        let mut targeting: Vec<Vec<usize>> = vec![Vec::new(); m + 1];
        for (idx, agent) in scenario.agents.iter().enumerate() {
            targeting[agent.target_slot].push(idx);
        }

        // cnt[h]: still-active agents liking resource h.
        let mut cnt = vec![0usize; m + 1];
        for agent in &scenario.agents {
            for &h in &agent.liked {
                cnt[h] += 1;
            }
        }

        let mut used = vec![false; m + 1];

        // Safe pool: resources observed with cnt == 0, consumed FIFO by
        // free slots through a forward-only cursor. Entries are filtered
        // for `used` at consumption time, never removed.
        let mut safe_pool: Vec<ResourceId> = (1..=m).filter(|&h| cnt[h] == 0).collect();
        let mut safe_cursor = 0usize;

        // Per-slot frequency scratch, cleaned via the touched list so a
        // slot's cost stays proportional to its group's liked lists.
        let mut freq = vec![0usize; m + 1];
        let mut touched: Vec<ResourceId> = Vec::new();

        for slot in 1..=m {
            let group = &targeting[slot];

            if group.is_empty() {
                // Free slot: next unused resource from the safe pool.
                let mut chosen = None;
                while safe_cursor < safe_pool.len() {
                    let candidate = safe_pool[safe_cursor];
                    safe_cursor += 1;
                    if !used[candidate] {
                        chosen = Some(candidate);
                        break;
                    }
                }
                match chosen {
                    Some(h) => used[h] = true,
                    None => return false,
                }
                continue;
            }

            let r = group.len();

            touched.clear();
            for &agent_idx in group {
                for &h in &scenario.agents[agent_idx].liked {
                    if freq[h] == 0 {
                        touched.push(h);
                    }
                    freq[h] += 1;
                }
            }

            // Eligible: liked by the whole group, by nobody outside it,
            // and not yet committed. First match in touch order wins.
            let chosen = touched
                .iter()
                .copied()
                .find(|&h| freq[h] == r && cnt[h] == r && !used[h]);

            for &h in &touched {
                freq[h] = 0;
            }

            let Some(h) = chosen else {
                return false;
            };
            used[h] = true;

            // Retire the group: these agents no longer constrain
            // eligibility. Resources dropping to zero while unused
            // become safe.
            for &agent_idx in group {
                for &liked in &scenario.agents[agent_idx].liked {
                    cnt[liked] -= 1;
                    if cnt[liked] == 0 && !used[liked] {
                        safe_pool.push(liked);
                    }
                }
            }
        }

        true
    }
}

impl Default for GreedySolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Agent;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn agent(target: usize, liked: &[usize]) -> Agent {
        Agent::new(target).with_liked(liked.to_vec())
    }

    fn verdict_of(slot_count: usize, agents: &[Agent]) -> Verdict {
        let scenario = Scenario::new(slot_count).with_agents(agents.to_vec());
        GreedySolver::new().evaluate(&scenario)
    }

    #[test]
    fn test_end_to_end_feasible() {
        // Slots 1, 2, 4 are free and covered by initially-safe resources
        // 1, 2, 3; slot 3 takes resource 4, slot 5 takes resource 5.
        let v = verdict_of(5, &[agent(3, &[4]), agent(5, &[5]), agent(5, &[5])]);
        assert_eq!(v, Verdict::Feasible);
    }

    #[test]
    fn test_end_to_end_infeasible() {
        // Every resource is liked by an active agent when free slot 1 is
        // processed, so the safe pool is empty.
        let v = verdict_of(
            5,
            &[agent(3, &[2, 4]), agent(5, &[1, 3, 5]), agent(5, &[5])],
        );
        assert_eq!(v, Verdict::Infeasible);
    }

    #[test]
    fn test_unconstrained_always_feasible() {
        for m in 1..=6 {
            assert_eq!(verdict_of(m, &[]), Verdict::Feasible);
        }
    }

    #[test]
    fn test_single_slot_single_agent() {
        assert_eq!(verdict_of(1, &[agent(1, &[1])]), Verdict::Feasible);
    }

    #[test]
    fn test_shared_target_disjoint_likes_infeasible() {
        // No resource is liked by both agents, so slot 3 has no resource
        // with group frequency 2.
        let v = verdict_of(3, &[agent(3, &[1]), agent(3, &[2])]);
        assert_eq!(v, Verdict::Infeasible);
    }

    #[test]
    fn test_shared_target_common_resource_feasible() {
        let v = verdict_of(3, &[agent(2, &[3]), agent(2, &[3])]);
        assert_eq!(v, Verdict::Feasible);
    }

    #[test]
    fn test_external_active_agent_blocks_choice() {
        // Resource 1 satisfies slot 1's group locally, but the agent
        // targeting slot 2 still likes it, so the global count is 2 != 1.
        let blocked = verdict_of(2, &[agent(1, &[1]), agent(2, &[1, 2])]);
        assert_eq!(blocked, Verdict::Infeasible);

        // Without the external like, the same shape is feasible.
        let open = verdict_of(2, &[agent(1, &[1]), agent(2, &[2])]);
        assert_eq!(open, Verdict::Feasible);
    }

    #[test]
    fn test_retirement_releases_resource_for_free_slot() {
        // Slot 1 commits resource 1 and retires its agent; resource 2
        // drops to zero likes and fills free slot 4 after the initially
        // safe resource 4 covers slot 2.
        let v = verdict_of(4, &[agent(1, &[1, 2]), agent(3, &[3])]);
        assert_eq!(v, Verdict::Feasible);
    }

    #[test]
    fn test_free_slot_starved_when_all_resources_liked() {
        // Slot 1 is free but agents collectively like all five resources.
        let v = verdict_of(
            5,
            &[
                agent(2, &[1, 2]),
                agent(3, &[3]),
                agent(4, &[4]),
                agent(5, &[5]),
            ],
        );
        assert_eq!(v, Verdict::Infeasible);
    }

    #[test]
    fn test_liked_order_does_not_matter() {
        let forward = verdict_of(2, &[agent(1, &[1, 2])]);
        let backward = verdict_of(2, &[agent(1, &[2, 1])]);
        assert_eq!(forward, Verdict::Feasible);
        assert_eq!(backward, Verdict::Feasible);
    }

    #[test]
    fn test_idempotent_evaluation() {
        let scenario = Scenario::new(5).with_agents(vec![
            agent(3, &[2, 4]),
            agent(5, &[1, 3, 5]),
            agent(5, &[5]),
        ]);
        let solver = GreedySolver::new();
        let first = solver.evaluate(&scenario);
        let second = solver.evaluate(&scenario);
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let feasible = Scenario::new(3);
        let infeasible = Scenario::new(3).with_agents(vec![agent(3, &[1]), agent(3, &[2])]);
        let solver = GreedySolver::new();

        let verdicts = solver.evaluate_all(&[feasible, infeasible]);
        assert_eq!(verdicts, vec![Verdict::Feasible, Verdict::Infeasible]);
    }

    fn random_scenario(rng: &mut SmallRng) -> Scenario {
        let m = rng.random_range(1..=8);
        let n = rng.random_range(0..=m);
        let mut scenario = Scenario::new(m);
        let mut resources: Vec<usize> = (1..=m).collect();
        for _ in 0..n {
            let k = rng.random_range(1..=m);
            resources.shuffle(rng);
            let liked: Vec<usize> = resources[..k].to_vec();
            scenario = scenario.with_agent(Agent::new(rng.random_range(1..=m)).with_liked(liked));
        }
        scenario
    }

    #[test]
    fn test_reorder_invariance_randomized() {
        // The liked list is a set in effect: shuffling each agent's list
        // must never flip the verdict.
        let mut rng = SmallRng::seed_from_u64(42);
        let solver = GreedySolver::new();

        for _ in 0..200 {
            let original = random_scenario(&mut rng);
            let baseline = solver.evaluate(&original);

            let mut shuffled = original.clone();
            for a in &mut shuffled.agents {
                a.liked.shuffle(&mut rng);
            }
            assert_eq!(
                solver.evaluate(&shuffled),
                baseline,
                "verdict changed under reorder for {original:?}"
            );
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = SmallRng::seed_from_u64(7);
        let scenarios: Vec<Scenario> = (0..64).map(|_| random_scenario(&mut rng)).collect();
        let solver = GreedySolver::new();

        assert_eq!(
            solver.evaluate_all_parallel(&scenarios),
            solver.evaluate_all(&scenarios)
        );
    }
}
