use std::collections::HashSet;

use proptest::prelude::*;
use taskorder::errors::ScheduleError;
use taskorder::resolve_schedule;
use taskorder_test_utils::position_of;

/// A random DAG: task names in a shuffled declaration order, plus edges that
/// only point from a higher rank to a lower one, so there is never a cycle.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = (Vec<String>, Vec<(String, String)>)> {
    (0..=max_tasks).prop_flat_map(|num_tasks| {
        let ranks: Vec<usize> = (0..num_tasks).collect();
        let order = Just(ranks).prop_shuffle();
        let raw_edges = proptest::collection::vec((any::<usize>(), any::<usize>()), 0..num_tasks * 2 + 1);

        (order, raw_edges).prop_map(move |(order, raw_edges)| {
            let tasks: Vec<String> = order.iter().map(|r| format!("t{r}")).collect();
            let edges = raw_edges
                .into_iter()
                .filter(|_| num_tasks > 1)
                .filter_map(|(x, y)| {
                    let (x, y) = (x % num_tasks, y % num_tasks);
                    // Sanitize: dependent rank strictly greater than dependency rank.
                    (x > y).then(|| (format!("t{x}"), format!("t{y}")))
                })
                .collect();
            (tasks, edges)
        })
    })
}

/// A DAG plus a cycle threaded through `cycle_len` of its tasks.
fn cyclic_strategy() -> impl Strategy<Value = (Vec<String>, Vec<(String, String)>)> {
    (dag_strategy(10), 1..=4usize, any::<proptest::sample::Index>()).prop_filter_map(
        "needs enough tasks for the cycle",
        |((tasks, mut edges), cycle_len, start)| {
            if tasks.len() < cycle_len {
                return None;
            }
            let start = start.index(tasks.len() - cycle_len + 1);
            let members = &tasks[start..start + cycle_len];
            for (i, member) in members.iter().enumerate() {
                let next = &members[(i + 1) % cycle_len];
                edges.push((member.clone(), next.clone()));
            }
            Some((tasks, edges))
        },
    )
}

fn declarations(edges: &[(String, String)]) -> Vec<String> {
    edges.iter().map(|(a, b)| format!("{a} => {b}")).collect()
}

proptest! {
    #[test]
    fn order_is_a_permutation_of_the_tasks((tasks, edges) in dag_strategy(12)) {
        let deps = declarations(&edges);
        let order = resolve_schedule(Some(&tasks[..]), Some(&deps[..])).unwrap();

        prop_assert_eq!(order.len(), tasks.len());
        let unique: HashSet<&String> = order.iter().collect();
        prop_assert_eq!(unique.len(), order.len());
        let expected: HashSet<&String> = tasks.iter().collect();
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn every_dependency_precedes_its_dependent((tasks, edges) in dag_strategy(12)) {
        let deps = declarations(&edges);
        let order = resolve_schedule(Some(&tasks[..]), Some(&deps[..])).unwrap();

        for (dependent, dependent_on) in &edges {
            prop_assert!(
                position_of(&order, dependent_on) < position_of(&order, dependent),
                "{} should come before {} in {:?}", dependent_on, dependent, order
            );
        }
    }

    #[test]
    fn resolving_is_deterministic((tasks, edges) in dag_strategy(12)) {
        let deps = declarations(&edges);
        let first = resolve_schedule(Some(&tasks[..]), Some(&deps[..])).unwrap();
        let second = resolve_schedule(Some(&tasks[..]), Some(&deps[..])).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_dependencies_is_the_identity((tasks, _edges) in dag_strategy(12)) {
        let order = resolve_schedule::<String, String>(Some(&tasks[..]), Some(&[])).unwrap();
        prop_assert_eq!(order, tasks);
    }

    #[test]
    fn cycles_always_fail((tasks, edges) in cyclic_strategy()) {
        let deps = declarations(&edges);
        let result = resolve_schedule(Some(&tasks[..]), Some(&deps[..]));

        match result {
            Err(ScheduleError::CyclicDependency { cycle }) => {
                prop_assert!(cycle.len() >= 2);
                prop_assert_eq!(cycle.first(), cycle.last());
                for pair in cycle.windows(2) {
                    prop_assert!(
                        edges.contains(&(pair[0].clone(), pair[1].clone())),
                        "{} => {} is not a declared edge", pair[0], pair[1]
                    );
                }
            }
            other => prop_assert!(false, "expected a cycle error, got {:?}", other),
        }
    }

    #[test]
    fn absent_dependencies_always_fail((tasks, _edges) in dag_strategy(8)) {
        let result = resolve_schedule::<String, String>(Some(&tasks[..]), None);
        prop_assert!(matches!(result, Err(ScheduleError::InvalidInput(_))));
    }

    #[test]
    fn absent_tasks_always_fail((_tasks, edges) in dag_strategy(8)) {
        let deps = declarations(&edges);
        let result = resolve_schedule::<String, String>(None, Some(&deps[..]));
        prop_assert!(matches!(result, Err(ScheduleError::InvalidInput(_))));
    }
}
