//! Finite exploration of multiplicative algebras
//!
//! Starting from a few generators, [`generate`] walks every product of
//! generators breadth first until no new element appears. The walk is the
//! backbone of [`cayley_graph`]; [`cayley_table`] and [`order`] answer the
//! usual questions about small finite structures.

use crate::element::Element;
use crate::protocols::{Algebra, Multiplicative, Unital};
use crate::{AlgebraError, Result};
use indexmap::IndexSet;
use petgraph::algo::kosaraju_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, VecDeque};

fn check_members<A: Algebra>(
    algebra: &A,
    elements: &[Element<A>],
    operation: &'static str,
) -> Result<()> {
    if elements.iter().all(|g| g.belongs_to(algebra)) {
        Ok(())
    } else {
        Err(AlgebraError::ForeignOperand { operation })
    }
}

/// Every element reachable as a product of one or more generators,
/// in breadth-first order.
///
/// Fails with [`AlgebraError::ClosureLimitExceeded`] once more than
/// `limit` elements have been found.
pub fn generate<A: Multiplicative>(
    algebra: &A,
    generators: &[Element<A>],
    limit: usize,
) -> Result<Vec<Element<A>>> {
    let closure = explore(algebra, generators, limit, |_, _, _| {})?;
    Ok(closure.into_iter().collect())
}

fn explore<A, F>(
    algebra: &A,
    generators: &[Element<A>],
    limit: usize,
    mut on_edge: F,
) -> Result<IndexSet<Element<A>>>
where
    A: Multiplicative,
    F: FnMut(&Element<A>, usize, &Element<A>),
{
    check_members(algebra, generators, "Generation")?;

    let mut seen: IndexSet<Element<A>> = IndexSet::new();
    let mut queue = VecDeque::new();
    for g in generators {
        if seen.insert(g.clone()) {
            queue.push_back(g.clone());
        }
    }
    if seen.len() > limit {
        return Err(AlgebraError::ClosureLimitExceeded(limit));
    }

    while let Some(x) = queue.pop_front() {
        for (label, g) in generators.iter().enumerate() {
            let product = x.try_mul(g)?;
            on_edge(&x, label, &product);
            if seen.insert(product.clone()) {
                if seen.len() > limit {
                    return Err(AlgebraError::ClosureLimitExceeded(limit));
                }
                queue.push_back(product);
            }
        }
    }

    tracing::debug!(
        algebra = A::KIND,
        generators = generators.len(),
        elements = seen.len(),
        "closure generated"
    );
    Ok(seen)
}

/// Cayley graph of the structure generated by a set of generators.
///
/// Nodes are elements; an edge `x -> x * g` carries the index of the
/// generator `g`.
pub struct CayleyGraph<A: Algebra> {
    graph: DiGraph<Element<A>, usize>,
    nodes: HashMap<Element<A>, NodeIndex>,
    generators: usize,
}

impl<A: Algebra> CayleyGraph<A> {
    /// The underlying petgraph graph
    pub fn graph(&self) -> &DiGraph<Element<A>, usize> {
        &self.graph
    }

    /// Node of an element, if it is part of the graph
    pub fn node(&self, element: &Element<A>) -> Option<NodeIndex> {
        self.nodes.get(element).copied()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of generators labelling the edges
    pub fn generator_count(&self) -> usize {
        self.generators
    }

    /// `x * g` for the generator with the given index
    pub fn successor(&self, element: &Element<A>, generator: usize) -> Option<&Element<A>> {
        let node = self.node(element)?;
        self.graph
            .edges(node)
            .find(|edge| *edge.weight() == generator)
            .map(|edge| &self.graph[edge.target()])
    }

    /// Whether every element reaches every other along generator edges.
    ///
    /// True for the Cayley graph of a finite group.
    pub fn is_strongly_connected(&self) -> bool {
        kosaraju_scc(&self.graph).len() <= 1
    }
}

/// Build the Cayley graph of the closure of `generators`
pub fn cayley_graph<A: Multiplicative>(
    algebra: &A,
    generators: &[Element<A>],
    limit: usize,
) -> Result<CayleyGraph<A>> {
    let mut edges = Vec::new();
    let elements = explore(algebra, generators, limit, |from, label, to| {
        edges.push((from.clone(), label, to.clone()));
    })?;

    let mut graph = DiGraph::with_capacity(elements.len(), edges.len());
    let mut nodes = HashMap::with_capacity(elements.len());
    for element in elements {
        let node = graph.add_node(element.clone());
        nodes.insert(element, node);
    }
    for (from, label, to) in &edges {
        if let (Some(&a), Some(&b)) = (nodes.get(from), nodes.get(to)) {
            graph.add_edge(a, b, *label);
        }
    }

    Ok(CayleyGraph {
        graph,
        nodes,
        generators: generators.len(),
    })
}

/// Multiplication table of a list of elements of `algebra`.
///
/// Entry `[i][j]` is the position of `elements[i] * elements[j]` in the
/// list, or `None` when the product falls outside it.
pub fn cayley_table<A: Multiplicative>(
    algebra: &A,
    elements: &[Element<A>],
) -> Result<Vec<Vec<Option<usize>>>> {
    check_members(algebra, elements, "Multiplication")?;
    let positions: HashMap<&Element<A>, usize> =
        elements.iter().enumerate().map(|(i, e)| (e, i)).collect();

    let mut table = Vec::with_capacity(elements.len());
    for x in elements {
        let mut row = Vec::with_capacity(elements.len());
        for y in elements {
            row.push(positions.get(&x.try_mul(y)?).copied());
        }
        table.push(row);
    }
    Ok(table)
}

/// Smallest `k > 0` with `x^k == one`, if one exists up to `limit`
pub fn order<A: Unital>(element: &Element<A>, limit: u64) -> Option<u64> {
    let mut power = element.clone();
    for k in 1..=limit {
        if power.is_one() {
            return Some(k);
        }
        power = power.try_mul(element).ok()?;
    }
    None
}
