use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashMap;
use std::sync::RwLock;

/// Identity of a node in the computation graph.
///
/// This is the address of the node's shared `RwLock<ValueData>`. It is stable
/// across clones of the `Value` handle, so it can key the visited set. The
/// pointer is only compared, never dereferenced.
pub type NodeId = *const RwLock<ValueData>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// Entered, inputs still being explored.
    Visiting,
    /// Fully explored and placed in the post-order.
    Visited,
}

/// Sorts every node reachable from `root` so that each node precedes all of its inputs.
///
/// The result is the processing order of the backward pass: `root` first,
/// leaves last. A node consumed several times (shared operand) appears once,
/// after all of its consumers.
///
/// The traversal is a depth-first post-order driven by an explicit stack, so
/// long expression chains do not grow the call stack. Inputs are explored in
/// operand order.
///
/// # Errors
/// Returns `ScalarGradError::CycleDetected` if a node is reached again while its
/// own inputs are still being explored.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, ScalarGradError> {
    let mut states: HashMap<NodeId, VisitState> = HashMap::new();
    let mut post_order: Vec<Value> = Vec::new();
    // (node, inputs_done)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, inputs_done)) = stack.pop() {
        let node_id = node.node_id();

        if inputs_done {
            log::trace!("[topological_sort] Adding node {:?} to post-order", node_id);
            states.insert(node_id, VisitState::Visited);
            post_order.push(node);
            continue;
        }

        match states.get(&node_id) {
            Some(VisitState::Visited) => {
                log::trace!("[topological_sort] Node {:?} already visited", node_id);
                continue;
            }
            Some(VisitState::Visiting) => {
                log::error!("[topological_sort] Node {:?} re-entered while on the stack", node_id);
                return Err(ScalarGradError::CycleDetected);
            }
            None => {}
        }

        states.insert(node_id, VisitState::Visiting);
        let inputs = node.operands()?;
        log::trace!(
            "[topological_sort] Visiting node {:?} (data = {}), {} input(s)",
            node_id,
            node.try_read_data()?.data,
            inputs.len()
        );
        stack.push((node, true));
        // Reversed so the first operand is explored first.
        for input in inputs.into_iter().rev() {
            stack.push((input, false));
        }
    }

    post_order.reverse();
    Ok(post_order)
}
