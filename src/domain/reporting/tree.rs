//! Progress tree - nested line/component/bet/initiative/goal view with rolled-up completion.
//!
//! Construction and aggregation are two separate steps:
//!
//! 1. [`ProgressTreeBuilder`] folds flat rows into builder-local nodes, each
//!    carrying an identity map of its children. One node exists per distinct
//!    id at each level under its parent, in first-seen order. Goals are never
//!    deduplicated.
//! 2. [`ProgressTreeBuilder::build`] converts those nodes into immutable
//!    [`TreeNode`]s, computing each percentage post-order. A goal keeps its
//!    physical completion; any other node takes the unweighted mean of its
//!    direct children, so a child with one goal weighs the same as a child
//!    with a thousand.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::foundation::{NodeId, Percentage};

use super::plan::{GoalProgressRow, HierarchyLevel, NodeRef};
use super::progress::completion;

/// Kind of a node in the progress tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Line,
    Component,
    Bet,
    Initiative,
    Goal,
}

impl From<HierarchyLevel> for NodeKind {
    fn from(level: HierarchyLevel) -> Self {
        match level {
            HierarchyLevel::Line => NodeKind::Line,
            HierarchyLevel::Component => NodeKind::Component,
            HierarchyLevel::Bet => NodeKind::Bet,
            HierarchyLevel::Initiative => NodeKind::Initiative,
        }
    }
}

/// A finished node of the progress tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub children: Vec<TreeNode>,
    pub percentage: Percentage,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Goal
    }

    /// Number of goal leaves under this node (itself included).
    pub fn goal_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(TreeNode::goal_count).sum()
        }
    }
}

/// Node under construction. Never leaves this module.
#[derive(Debug)]
struct PendingNode {
    kind: NodeKind,
    id: Option<i64>,
    name: Option<String>,
    code: Option<String>,
    children: Vec<PendingNode>,
    index: HashMap<Option<NodeId>, usize>,
    goal_percentage: Percentage,
}

impl PendingNode {
    fn hierarchy(level: HierarchyLevel, node: &NodeRef) -> Self {
        Self {
            kind: level.into(),
            id: node.id.map(|id| id.value()),
            name: node.name.clone(),
            code: node.code.clone(),
            children: Vec::new(),
            index: HashMap::new(),
            goal_percentage: Percentage::ZERO,
        }
    }

    fn goal(row: &GoalProgressRow) -> Self {
        Self {
            kind: NodeKind::Goal,
            id: Some(row.goal_id.value()),
            name: Some(row.goal_name.clone()),
            code: Some(row.goal_code.clone()),
            children: Vec::new(),
            index: HashMap::new(),
            goal_percentage: completion(row.physical_quota, row.physical_accumulated),
        }
    }

    fn child(&mut self, level: HierarchyLevel, node: &NodeRef) -> &mut PendingNode {
        find_or_insert(&mut self.children, &mut self.index, level, node)
    }

    /// Converts into the output node, rolling percentages up post-order.
    fn finish(self) -> TreeNode {
        let children: Vec<TreeNode> = self.children.into_iter().map(PendingNode::finish).collect();
        let percentage = match self.kind {
            NodeKind::Goal => self.goal_percentage,
            _ => Percentage::mean(children.iter().map(|c| c.percentage)),
        };
        TreeNode {
            kind: self.kind,
            id: self.id,
            name: self.name,
            code: self.code,
            children,
            percentage,
        }
    }
}

fn find_or_insert<'a>(
    nodes: &'a mut Vec<PendingNode>,
    index: &mut HashMap<Option<NodeId>, usize>,
    level: HierarchyLevel,
    node: &NodeRef,
) -> &'a mut PendingNode {
    let position = *index.entry(node.id).or_insert_with(|| {
        nodes.push(PendingNode::hierarchy(level, node));
        nodes.len() - 1
    });
    &mut nodes[position]
}

/// Folds flat goal rows into a progress tree.
///
/// Rows are consumed in delivery order and never re-sorted.
#[derive(Debug, Default)]
pub struct ProgressTreeBuilder {
    lines: Vec<PendingNode>,
    index: HashMap<Option<NodeId>, usize>,
    rows: usize,
}

impl ProgressTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places one row's goal under its ancestor chain, creating missing ancestors.
    pub fn push(&mut self, row: &GoalProgressRow) {
        let line = row.ancestor(HierarchyLevel::Line);
        let mut node = find_or_insert(&mut self.lines, &mut self.index, HierarchyLevel::Line, line);
        for level in &HierarchyLevel::all()[1..] {
            node = node.child(*level, row.ancestor(*level));
        }
        node.children.push(PendingNode::goal(row));
        self.rows += 1;
    }

    /// Number of rows pushed so far.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Finishes construction, returning the line nodes with rolled-up percentages.
    pub fn build(self) -> Vec<TreeNode> {
        self.lines.into_iter().map(PendingNode::finish).collect()
    }
}

/// Builds the progress tree for a sequence of rows.
pub fn build_tree<'a, I>(rows: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = &'a GoalProgressRow>,
{
    let mut builder = ProgressTreeBuilder::new();
    for row in rows {
        builder.push(row);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::GoalId;
    use proptest::prelude::*;

    fn row(ids: [Option<i64>; 4], goal: i64, quota: f64, accumulated: f64) -> GoalProgressRow {
        let node = |id: Option<i64>, prefix: &str| match id {
            Some(id) => NodeRef::new(id, format!("{}{}", prefix, id), format!("{} {}", prefix, id)),
            None => NodeRef::orphan(),
        };
        GoalProgressRow {
            line: node(ids[0], "L"),
            component: node(ids[1], "C"),
            bet: node(ids[2], "B"),
            initiative: node(ids[3], "I"),
            goal_id: GoalId::new(goal),
            goal_code: format!("M{}", goal),
            goal_name: format!("Goal {}", goal),
            secretariat_id: None,
            secretariat_name: None,
            physical_quota: quota,
            physical_accumulated: accumulated,
            financial_quota: 0.0,
            financial_accumulated: 0.0,
        }
    }

    fn chain(line: i64, component: i64, bet: i64, initiative: i64) -> [Option<i64>; 4] {
        [Some(line), Some(component), Some(bet), Some(initiative)]
    }

    #[test]
    fn single_chain_mirrors_goal_percentage_upward() {
        let tree = build_tree(&[row(chain(1, 1, 1, 1), 1, 50.0, 25.0)]);

        assert_eq!(tree.len(), 1);
        let mut node = &tree[0];
        for kind in [NodeKind::Line, NodeKind::Component, NodeKind::Bet, NodeKind::Initiative] {
            assert_eq!(node.kind, kind);
            assert_eq!(node.percentage.value(), 50.0);
            assert_eq!(node.children.len(), 1);
            node = &node.children[0];
        }
        assert_eq!(node.kind, NodeKind::Goal);
        assert_eq!(node.percentage.value(), 50.0);
    }

    #[test]
    fn shared_ancestors_are_deduplicated() {
        let tree = build_tree(&[
            row(chain(1, 1, 1, 1), 1, 10.0, 10.0),
            row(chain(1, 1, 1, 2), 2, 10.0, 0.0),
        ]);

        assert_eq!(tree.len(), 1);
        let line = &tree[0];
        assert_eq!(line.children.len(), 1);
        let component = &line.children[0];
        assert_eq!(component.children.len(), 1);
        let bet = &component.children[0];
        assert_eq!(bet.children.len(), 2);
        assert_eq!(bet.children[0].id, Some(1));
        assert_eq!(bet.children[1].id, Some(2));
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let tree = build_tree(&[
            row(chain(9, 1, 1, 1), 1, 1.0, 0.0),
            row(chain(2, 5, 1, 1), 2, 1.0, 0.0),
            row(chain(9, 3, 1, 1), 3, 1.0, 0.0),
        ]);

        let line_ids: Vec<_> = tree.iter().map(|n| n.id).collect();
        assert_eq!(line_ids, vec![Some(9), Some(2)]);
        let component_ids: Vec<_> = tree[0].children.iter().map(|n| n.id).collect();
        assert_eq!(component_ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn goals_are_never_deduplicated() {
        let tree = build_tree(&[
            row(chain(1, 1, 1, 1), 7, 10.0, 5.0),
            row(chain(1, 1, 1, 1), 7, 10.0, 5.0),
        ]);

        assert_eq!(tree[0].goal_count(), 2);
    }

    #[test]
    fn same_node_id_under_different_parents_is_distinct() {
        let tree = build_tree(&[
            row(chain(1, 1, 1, 1), 1, 1.0, 1.0),
            row(chain(2, 1, 1, 1), 2, 1.0, 0.0),
        ]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].percentage.value(), 100.0);
        assert_eq!(tree[1].percentage.value(), 0.0);
    }

    #[test]
    fn orphaned_chain_gets_placeholder_ancestors() {
        let tree = build_tree(&[row([None, None, None, Some(4)], 1, 10.0, 5.0)]);

        let line = &tree[0];
        assert_eq!(line.id, None);
        assert_eq!(line.name, None);
        let initiative = &line.children[0].children[0].children[0];
        assert_eq!(initiative.kind, NodeKind::Initiative);
        assert_eq!(initiative.id, Some(4));
        assert_eq!(initiative.children[0].percentage.value(), 50.0);
    }

    #[test]
    fn orphans_share_one_placeholder_per_parent() {
        let tree = build_tree(&[
            row([None, None, None, Some(1)], 1, 1.0, 0.0),
            row([None, None, None, Some(2)], 2, 1.0, 0.0),
        ]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children[0].children[0].children.len(), 2);
    }

    #[test]
    fn rollup_is_unweighted_mean_of_children() {
        // Component 1 holds one goal at 10%, component 2 holds three goals at 90%.
        let mut rows = vec![row(chain(1, 1, 1, 1), 1, 100.0, 10.0)];
        for goal in 2..=4 {
            rows.push(row(chain(1, 2, 2, 2), goal, 100.0, 90.0));
        }

        let tree = build_tree(&rows);

        assert_eq!(tree[0].children[0].percentage.value(), 10.0);
        assert_eq!(tree[0].children[1].percentage.value(), 90.0);
        assert_eq!(tree[0].percentage.value(), 50.0);
    }

    #[test]
    fn empty_input_builds_empty_tree() {
        assert!(build_tree(&[]).is_empty());
    }

    #[test]
    fn builder_counts_rows() {
        let mut builder = ProgressTreeBuilder::new();
        builder.push(&row(chain(1, 1, 1, 1), 1, 1.0, 1.0));
        builder.push(&row(chain(1, 1, 1, 1), 2, 1.0, 1.0));
        assert_eq!(builder.row_count(), 2);
    }

    #[test]
    fn serialized_node_has_only_output_fields() {
        let tree = build_tree(&[row(chain(1, 1, 1, 1), 1, 4.0, 1.0)]);
        let json = serde_json::to_value(&tree[0]).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["children", "code", "id", "name", "percentage", "type"]);
        assert_eq!(json["type"], "line");
    }

    fn assert_mean_rollup(node: &TreeNode) {
        if node.is_leaf() {
            return;
        }
        let expected = Percentage::mean(node.children.iter().map(|c| c.percentage));
        assert_eq!(node.percentage, expected);
        node.children.iter().for_each(assert_mean_rollup);
    }

    proptest! {
        #[test]
        fn every_inner_node_is_mean_of_children(
            specs in prop::collection::vec((0i64..3, 0i64..3, 0i64..3, 0i64..3, 0.0f64..200.0, 0.0f64..300.0), 1..40)
        ) {
            let rows: Vec<_> = specs
                .iter()
                .enumerate()
                .map(|(i, (l, c, b, ini, quota, acc))| row(chain(*l, *c, *b, *ini), i as i64, *quota, *acc))
                .collect();

            let tree = build_tree(&rows);

            let goals: usize = tree.iter().map(TreeNode::goal_count).sum();
            prop_assert_eq!(goals, rows.len());
            for line in &tree {
                assert_mean_rollup(line);
                prop_assert!((0.0..=100.0).contains(&line.percentage.value()));
            }
        }
    }
}
