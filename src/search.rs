//! This module contains the logic for solving Sudoku by state-space search.
//!
//! Most importantly, this module contains the definition of the
//! [Strategy](trait.Strategy.html) trait together with five implementations:
//! [BreadthFirst](struct.BreadthFirst.html),
//! [DepthLimited](struct.DepthLimited.html) and
//! [IterativeDeepening](struct.IterativeDeepening.html),
//! [UniformCost](struct.UniformCost.html),
//! [GreedyBestFirst](struct.GreedyBestFirst.html), and
//! [AStar](struct.AStar.html). All of them consume the same
//! [Node](struct.Node.html) representation, the same expansion rule
//! ([Node::expand](struct.Node.html#method.expand)), and the same goal test
//! ([rules::is_solved](crate::rules::is_solved)), so their expansion counts
//! are directly comparable.
//!
//! The [Algorithm](enum.Algorithm.html) enumeration selects one of the five
//! strategies by name or by its one-letter code.

use crate::SIZE;
use crate::SudokuGrid;
use crate::error::AlgorithmParseError;
use crate::heuristic;
use crate::rules;

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::rc::Rc;
use std::str::FromStr;

/// A node of the search tree. It owns a private copy of one grid, remembers
/// the node it was expanded from, and tracks the number of cells filled since
/// the root. Nodes are created by [Node::root] and by [Node::expand] and are
/// immutable afterwards.
///
/// The parent reference points strictly backwards and is never used to alter
/// or reconstruct anything; solved grids are returned directly. It merely
/// keeps the ancestry alive for as long as any descendant is held by a
/// frontier.
pub struct Node {
    state: SudokuGrid,
    parent: Option<Rc<Node>>,
    cost: usize
}

impl Node {

    /// Creates the root node of a search tree over the given grid. Its cost
    /// is 0 and it has no parent.
    pub fn root(state: SudokuGrid) -> Rc<Node> {
        Rc::new(Node {
            state,
            parent: None,
            cost: 0
        })
    }

    /// Gets the grid held by this node.
    pub fn state(&self) -> &SudokuGrid {
        &self.state
    }

    /// Gets the node this one was expanded from, or `None` for a root.
    pub fn parent(&self) -> Option<&Rc<Node>> {
        self.parent.as_ref()
    }

    /// Gets the number of cells that were filled on the path from the root to
    /// this node.
    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Generates the successors of this node. The cells of the grid are
    /// scanned in left-to-right, top-to-bottom order and only the *first*
    /// blank cell found is considered; for every digit from 1 to 9 that
    /// [rules::admits](crate::rules::admits) allows in that cell, in
    /// ascending order, one child is emitted whose grid is a copy of this
    /// node's grid with that cell filled. The branching factor is therefore
    /// the number of admitted digits for that one cell, not the number of
    /// blanks.
    ///
    /// A full grid has no successors and yields an empty vector.
    ///
    /// The fixed cell order is a contract: it determines the shape of the
    /// search tree and thereby the expansion counts every strategy reports.
    pub fn expand(self: &Rc<Node>) -> Vec<Rc<Node>> {
        let first_blank =
            self.state.cells().iter().position(|cell| cell.is_none());
        let (column, row) = match first_blank {
            Some(index) => (index % SIZE, index / SIZE),
            None => return Vec::new()
        };
        let mut children = Vec::new();

        for number in 1..=SIZE {
            if rules::admits(&self.state, column, row, number) {
                let mut state = self.state.clone();
                state.set_cell(column, row, number).unwrap();
                children.push(Rc::new(Node {
                    state,
                    parent: Some(Rc::clone(self)),
                    cost: self.cost + 1
                }));
            }
        }

        children
    }
}

/// An enumeration of the ways a search can end.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchOutcome {

    /// The search found a grid that passes the goal test, which is wrapped in
    /// this instance.
    Solved(SudokuGrid),

    /// The search exhausted its frontier without finding a solution. This is
    /// terminal: retrying the same strategy cannot succeed.
    Failure,

    /// A depth-limited search pruned at least one node at its depth bound and
    /// then ran out of nodes. In contrast to [SearchOutcome::Failure] this is
    /// recoverable: retrying with a larger bound may succeed. Only
    /// [DepthLimited] reports this outcome.
    Cutoff
}

impl SearchOutcome {

    /// Gets the solved grid if this outcome is [SearchOutcome::Solved], and
    /// `None` otherwise.
    pub fn solution(&self) -> Option<&SudokuGrid> {
        match self {
            SearchOutcome::Solved(grid) => Some(grid),
            _ => None
        }
    }
}

/// The result of running a [Strategy]: the outcome together with the number
/// of nodes the strategy expanded along the way. A node counts as expanded
/// once it has been taken from the frontier and has failed the goal test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchReport {
    expanded: usize,
    outcome: SearchOutcome
}

impl SearchReport {

    /// Creates a new search report from the number of expanded nodes and the
    /// outcome.
    pub fn new(expanded: usize, outcome: SearchOutcome) -> SearchReport {
        SearchReport {
            expanded,
            outcome
        }
    }

    /// Gets the number of nodes the strategy expanded.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Gets the outcome of the search.
    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// Consumes this report and returns the outcome of the search.
    pub fn into_outcome(self) -> SearchOutcome {
        self.outcome
    }
}

/// A trait for structs which can search the space of partial Sudoku grids for
/// a solution. Implementations differ only in the order in which they process
/// their frontier and in whether they deduplicate states; node expansion and
/// the goal test are shared.
pub trait Strategy {

    /// Searches for a solution of the given grid and reports the outcome
    /// together with the number of expanded nodes. The grid itself is not
    /// validated beforehand; a grid that already passes the goal test is
    /// reported as solved with 0 expansions.
    fn search(&self, grid: &SudokuGrid) -> SearchReport;
}

/// A [Strategy] which processes its frontier in FIFO order, expanding all
/// nodes at one depth before any node of the next depth. States already
/// present in the frontier or the explored set are never enqueued again;
/// membership is decided by grid content. Children are goal-tested before
/// they are enqueued, so a solution is detected as soon as it is generated.
pub struct BreadthFirst;

impl Strategy for BreadthFirst {
    fn search(&self, grid: &SudokuGrid) -> SearchReport {
        let root = Node::root(grid.clone());

        if rules::is_solved(root.state()) {
            return SearchReport::new(0,
                SearchOutcome::Solved(grid.clone()));
        }

        let mut frontier = VecDeque::new();
        let mut seen: HashSet<SudokuGrid> = HashSet::new();
        let mut expanded = 0;

        seen.insert(grid.clone());
        frontier.push_back(root);

        while let Some(node) = frontier.pop_front() {
            expanded += 1;

            for child in node.expand() {
                if seen.contains(child.state()) {
                    continue;
                }

                if rules::is_solved(child.state()) {
                    return SearchReport::new(expanded,
                        SearchOutcome::Solved(child.state().clone()));
                }

                seen.insert(child.state().clone());
                frontier.push_back(child);
            }
        }

        SearchReport::new(expanded, SearchOutcome::Failure)
    }
}

/// A [Strategy] which processes its frontier in LIFO order, i.e. depth-first,
/// but never expands a node whose cost exceeds the depth limit. When such a
/// node is pruned, the search keeps draining the stack and remembers that a
/// cutoff happened; the terminal outcome is then [SearchOutcome::Cutoff]
/// instead of [SearchOutcome::Failure], signalling that a rerun with a larger
/// limit may succeed.
///
/// Unlike the other strategies, this one performs no state deduplication, so
/// structurally identical states reached along different paths are processed
/// again. Every popped node is goal-tested before the limit applies, so a
/// solution generated just beyond the bound is still recognized.
pub struct DepthLimited {
    limit: usize
}

impl DepthLimited {

    /// Creates a new depth-limited strategy that does not expand nodes whose
    /// cost exceeds `limit`.
    pub fn new(limit: usize) -> DepthLimited {
        DepthLimited {
            limit
        }
    }
}

impl Strategy for DepthLimited {
    fn search(&self, grid: &SudokuGrid) -> SearchReport {
        let mut frontier = vec![Node::root(grid.clone())];
        let mut expanded = 0;
        let mut cutoff = false;

        while let Some(node) = frontier.pop() {
            if rules::is_solved(node.state()) {
                return SearchReport::new(expanded,
                    SearchOutcome::Solved(node.state().clone()));
            }

            expanded += 1;

            if node.cost() > self.limit {
                cutoff = true;
                continue;
            }

            for child in node.expand() {
                frontier.push(child);
            }
        }

        if cutoff {
            SearchReport::new(expanded, SearchOutcome::Cutoff)
        }
        else {
            SearchReport::new(expanded, SearchOutcome::Failure)
        }
    }
}

/// A [Strategy] which runs [DepthLimited] with limits 0, 1, 2, … until the
/// result is no longer [SearchOutcome::Cutoff]. A
/// [SearchOutcome::Failure] from the inner search means the reachable space
/// was exhausted within the bound, so larger bounds cannot help and the
/// failure is final. The report of the last iteration is returned as-is; in
/// particular, the expansion count covers only that iteration.
///
/// There is no upper bound on the limit. On a search tree that keeps growing
/// deeper without ever exhausting (which the single-cell expansion rule
/// cannot produce for 9x9 grids, as paths end after at most 81 fills), this
/// strategy would not terminate.
pub struct IterativeDeepening;

impl Strategy for IterativeDeepening {
    fn search(&self, grid: &SudokuGrid) -> SearchReport {
        let mut limit = 0;

        loop {
            let report = DepthLimited::new(limit).search(grid);

            if report.outcome() != &SearchOutcome::Cutoff {
                return report;
            }

            limit += 1;
        }
    }
}

/// An entry of the priority frontiers used by [UniformCost],
/// [GreedyBestFirst], and [AStar]. Ordering considers only the numeric key
/// and, for equal keys, the insertion sequence number; the grids themselves
/// are never compared. The sequence number makes the ordering total and keeps
/// equal-keyed entries in insertion order.
struct RankedNode {
    key: usize,
    sequence: u64,
    node: Rc<Node>
}

impl PartialEq for RankedNode {
    fn eq(&self, other: &RankedNode) -> bool {
        self.key == other.key && self.sequence == other.sequence
    }
}

impl Eq for RankedNode { }

impl PartialOrd for RankedNode {
    fn partial_cmp(&self, other: &RankedNode) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedNode {
    fn cmp(&self, other: &RankedNode) -> Ordering {
        self.key.cmp(&other.key)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// The common frontier loop of the three best-first strategies: pop the entry
/// with the lowest key, goal-test it, expand it, and push every child that is
/// neither explored nor already waiting in the frontier, keyed by `key`.
fn best_first(grid: &SudokuGrid, mut key: impl FnMut(&Node) -> usize)
        -> SearchReport {
    let root = Node::root(grid.clone());
    let mut frontier = BinaryHeap::new();
    let mut in_frontier: HashSet<SudokuGrid> = HashSet::new();
    let mut explored: HashSet<SudokuGrid> = HashSet::new();
    let mut sequence = 0;
    let mut expanded = 0;

    frontier.push(Reverse(RankedNode {
        key: key(&root),
        sequence,
        node: root
    }));
    in_frontier.insert(grid.clone());

    while let Some(Reverse(entry)) = frontier.pop() {
        let node = entry.node;
        in_frontier.remove(node.state());

        if rules::is_solved(node.state()) {
            return SearchReport::new(expanded,
                SearchOutcome::Solved(node.state().clone()));
        }

        expanded += 1;
        explored.insert(node.state().clone());

        for child in node.expand() {
            if explored.contains(child.state()) ||
                    in_frontier.contains(child.state()) {
                continue;
            }

            sequence += 1;
            in_frontier.insert(child.state().clone());
            frontier.push(Reverse(RankedNode {
                key: key(&child),
                sequence,
                node: child
            }));
        }
    }

    SearchReport::new(expanded, SearchOutcome::Failure)
}

/// A [Strategy] which always expands the frontier node with the lowest
/// accumulated cost. Since every expansion fills exactly one cell, all
/// children of a node share the same cost, making this equivalent to
/// breadth-first order up to tie-breaking; it is provided for comparison of
/// expansion counts.
pub struct UniformCost;

impl Strategy for UniformCost {
    fn search(&self, grid: &SudokuGrid) -> SearchReport {
        best_first(grid, |node| node.cost())
    }
}

/// A [Strategy] which always expands the frontier node with the lowest
/// [heuristic::row_relaxation](crate::heuristic::row_relaxation) value,
/// ignoring accumulated cost entirely. The heuristic is evaluated once per
/// node, when it is pushed.
pub struct GreedyBestFirst;

impl Strategy for GreedyBestFirst {
    fn search(&self, grid: &SudokuGrid) -> SearchReport {
        best_first(grid, |node| heuristic::row_relaxation(node.state()))
    }
}

/// A [Strategy] which always expands the frontier node with the lowest value
/// of f = g + h, where g is the accumulated cost and h is
/// [heuristic::empty_cells](crate::heuristic::empty_cells). Both are
/// evaluated per node when it is pushed. Since h counts exactly the fills
/// still required, f equals the total path length to any full grid below the
/// node.
pub struct AStar;

impl Strategy for AStar {
    fn search(&self, grid: &SudokuGrid) -> SearchReport {
        best_first(grid,
            |node| node.cost() + heuristic::empty_cells(node.state()))
    }
}

/// An enumeration of the five provided search strategies, for callers that
/// select a strategy at runtime. Each variant corresponds to one
/// implementation of [Strategy]; [Algorithm::search] instantiates and runs
/// it.
///
/// `Algorithm` implements [FromStr], accepting the one-letter codes `B`
/// (breadth-first), `I` (iterative deepening), `U` (uniform cost), `G`
/// (greedy best-first), and `A` (A*), case-insensitively.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {

    /// Selects [BreadthFirst].
    BreadthFirst,

    /// Selects [IterativeDeepening], which runs [DepthLimited] with growing
    /// limits.
    IterativeDeepening,

    /// Selects [UniformCost].
    UniformCost,

    /// Selects [GreedyBestFirst].
    GreedyBestFirst,

    /// Selects [AStar].
    AStar
}

impl Algorithm {

    /// Runs the selected strategy on the given grid. See [Strategy::search]
    /// for the contract.
    pub fn search(self, grid: &SudokuGrid) -> SearchReport {
        match self {
            Algorithm::BreadthFirst => BreadthFirst.search(grid),
            Algorithm::IterativeDeepening => IterativeDeepening.search(grid),
            Algorithm::UniformCost => UniformCost.search(grid),
            Algorithm::GreedyBestFirst => GreedyBestFirst.search(grid),
            Algorithm::AStar => AStar.search(grid)
        }
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmParseError;

    fn from_str(s: &str) -> Result<Algorithm, AlgorithmParseError> {
        if s.eq_ignore_ascii_case("B") {
            Ok(Algorithm::BreadthFirst)
        }
        else if s.eq_ignore_ascii_case("I") {
            Ok(Algorithm::IterativeDeepening)
        }
        else if s.eq_ignore_ascii_case("U") {
            Ok(Algorithm::UniformCost)
        }
        else if s.eq_ignore_ascii_case("G") {
            Ok(Algorithm::GreedyBestFirst)
        }
        else if s.eq_ignore_ascii_case("A") {
            Ok(Algorithm::AStar)
        }
        else {
            Err(AlgorithmParseError::UnknownAlgorithm)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const SOLVED: &str = "\
        534678912\
        672195348\
        198342567\
        859761423\
        426853791\
        713924856\
        961537284\
        287419635\
        345286179";

    const ALGORITHMS: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::IterativeDeepening,
        Algorithm::UniformCost,
        Algorithm::GreedyBestFirst,
        Algorithm::AStar
    ];

    fn solved_grid() -> SudokuGrid {
        SudokuGrid::parse(SOLVED).unwrap()
    }

    /// Blanks the given `(column, row)` cells of the solved example grid.
    fn puzzle(blanks: &[(usize, usize)]) -> SudokuGrid {
        let mut grid = solved_grid();

        for &(column, row) in blanks {
            grid.clear_cell(column, row).unwrap();
        }

        grid
    }

    fn contradictory_grid() -> SudokuGrid {
        let mut grid = solved_grid();

        // Duplicates the 3 already present in row 0; the grid stays full.
        grid.set_cell(0, 0, 3).unwrap();
        grid
    }

    #[test]
    fn expansion_branches_only_at_first_blank() {
        // Blanking (0, 0) and (8, 8) leaves exactly one admitted digit in
        // each cell, but only the first blank may be branched on.
        let root = Node::root(puzzle(&[(0, 0), (8, 8)]));
        let children = root.expand();

        assert_eq!(1, children.len());

        let child = &children[0];
        assert_eq!(Some(5), child.state().get_cell(0, 0).unwrap());
        assert_eq!(None, child.state().get_cell(8, 8).unwrap());
        assert_eq!(1, child.cost());
        assert_eq!(root.state(), child.parent().unwrap().state());
    }

    #[test]
    fn expansion_emits_one_child_per_admitted_digit() {
        let root = Node::root(SudokuGrid::new());
        let children = root.expand();

        // On an empty grid, all nine digits are admitted in the first cell.
        assert_eq!(9, children.len());

        for (i, child) in children.iter().enumerate() {
            assert_eq!(Some(i + 1), child.state().get_cell(0, 0).unwrap());

            // All other cells are unchanged.
            let parent_rest = &root.state().cells()[1..];
            let child_rest = &child.state().cells()[1..];
            assert_eq!(parent_rest, child_rest);
        }
    }

    #[test]
    fn expansion_of_full_grid_is_empty() {
        assert!(Node::root(solved_grid()).expand().is_empty());
        assert!(Node::root(contradictory_grid()).expand().is_empty());
    }

    #[test]
    fn solved_grid_costs_no_expansions() {
        let grid = solved_grid();

        for &algorithm in ALGORITHMS.iter() {
            let report = algorithm.search(&grid);
            assert_eq!(
                SearchReport::new(0, SearchOutcome::Solved(grid.clone())),
                report, "{:?} did not return the solved input.", algorithm);
        }

        assert_eq!(SearchReport::new(0, SearchOutcome::Solved(grid.clone())),
            DepthLimited::new(0).search(&grid));
    }

    #[test]
    fn single_blank_solved_in_one_expansion() {
        let grid = puzzle(&[(0, 0)]);
        let solved = solved_grid();

        for &algorithm in ALGORITHMS.iter() {
            let report = algorithm.search(&grid);
            assert_eq!(
                SearchReport::new(1, SearchOutcome::Solved(solved.clone())),
                report, "{:?} failed on the single-blank puzzle.", algorithm);
        }
    }

    #[test]
    fn contradictory_grid_fails_after_root() {
        let grid = contradictory_grid();

        for &algorithm in ALGORITHMS.iter() {
            let report = algorithm.search(&grid);
            assert_eq!(SearchReport::new(1, SearchOutcome::Failure), report,
                "{:?} did not fail on the contradictory grid.", algorithm);
        }
    }

    #[test]
    fn forced_chain_expands_once_per_blank() {
        // The last three cells of the bottom row each admit exactly one
        // digit, so every strategy walks a single chain of three fills.
        let grid = puzzle(&[(6, 8), (7, 8), (8, 8)]);
        let solved = solved_grid();

        for &algorithm in ALGORITHMS.iter() {
            let report = algorithm.search(&grid);
            assert_eq!(
                SearchReport::new(3, SearchOutcome::Solved(solved.clone())),
                report, "{:?} failed on the forced chain.", algorithm);
        }
    }

    #[test]
    fn depth_limits_below_solution_depth() {
        let grid = puzzle(&[(6, 8), (7, 8), (8, 8)]);

        assert_eq!(SearchReport::new(2, SearchOutcome::Cutoff),
            DepthLimited::new(0).search(&grid));
        assert_eq!(SearchReport::new(3, SearchOutcome::Cutoff),
            DepthLimited::new(1).search(&grid));

        // With limit 2 the nodes at cost 2 are still expanded, and their
        // children pass the goal test when popped.
        assert_eq!(
            SearchReport::new(3,
                SearchOutcome::Solved(solved_grid())),
            DepthLimited::new(2).search(&grid));
    }

    #[test]
    fn iterative_deepening_agrees_with_sufficient_depth_limit() {
        let grid = puzzle(&[(6, 8), (7, 8), (8, 8)]);

        assert_eq!(DepthLimited::new(3).search(&grid),
            IterativeDeepening.search(&grid));
    }

    #[test]
    fn branching_puzzle_counts() {
        // Blanking a 2x2 corner creates short-lived branches that every
        // strategy resolves after four expansions.
        let grid = puzzle(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let solved = solved_grid();

        for &algorithm in ALGORITHMS.iter() {
            let report = algorithm.search(&grid);
            assert_eq!(
                SearchReport::new(4, SearchOutcome::Solved(solved.clone())),
                report, "{:?} failed on the 2x2 corner puzzle.", algorithm);
        }
    }

    #[test]
    fn strategies_differ_on_wider_puzzle() {
        // With the bottom two rows blank, the frontier orderings diverge:
        // the heuristics pay off, while the uninformed strategies enumerate
        // large parts of the space of consistent prefixes.
        //
        // The puzzle has a second completion, with the two blank rows
        // exchanged. Iterative deepening fills the highest admitted digit
        // first and reaches that one; the other strategies reach the
        // original grid. Both the counts and the returned grids are fixed
        // by the frontier disciplines.
        let grid = puzzle(&[
            (0, 7), (1, 7), (2, 7), (3, 7), (4, 7), (5, 7), (6, 7), (7, 7),
            (8, 7),
            (0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (6, 8), (7, 8),
            (8, 8)
        ]);
        let solved = SearchOutcome::Solved(solved_grid());
        let row_swapped = SearchOutcome::Solved(SudokuGrid::parse("\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            345286179\
            287419635").unwrap());

        let bfs = BreadthFirst.search(&grid);
        assert_eq!((&solved, 93), (bfs.outcome(), bfs.expanded()));

        let ids = IterativeDeepening.search(&grid);
        assert_eq!((&row_swapped, 60), (ids.outcome(), ids.expanded()));

        let ucs = UniformCost.search(&grid);
        assert_eq!((&solved, 94), (ucs.outcome(), ucs.expanded()));

        let greedy = GreedyBestFirst.search(&grid);
        assert_eq!((&solved, 30), (greedy.outcome(), greedy.expanded()));

        let a_star = AStar.search(&grid);
        assert_eq!((&solved, 94), (a_star.outcome(), a_star.expanded()));
    }

    #[test]
    fn deduplicating_strategies_process_each_state_once() {
        // Rows 7 and 8 are blank and the first two digits of row 6 are
        // exchanged, so columns 0 and 1 each contain a duplicate and the
        // puzzle has no solution while keeping plenty of branching. Every
        // deduplicating strategy must then expand exactly the distinct
        // reachable grids, counted here by an order-independent traversal;
        // a strategy that processed some state twice would report more.
        let mut grid = puzzle(&[
            (0, 7), (1, 7), (2, 7), (3, 7), (4, 7), (5, 7), (6, 7), (7, 7),
            (8, 7),
            (0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (6, 8), (7, 8),
            (8, 8)
        ]);
        grid.set_cell(0, 6, 6).unwrap();
        grid.set_cell(1, 6, 9).unwrap();

        let mut distinct = HashSet::new();
        let mut pending = vec![Node::root(grid.clone())];
        distinct.insert(grid.clone());

        while let Some(node) = pending.pop() {
            for child in node.expand() {
                if distinct.insert(child.state().clone()) {
                    pending.push(child);
                }
            }
        }

        assert_eq!(96, distinct.len());

        let deduplicating = [
            Algorithm::BreadthFirst,
            Algorithm::UniformCost,
            Algorithm::GreedyBestFirst,
            Algorithm::AStar
        ];

        for &algorithm in deduplicating.iter() {
            let report = algorithm.search(&grid);
            assert_eq!(
                SearchReport::new(distinct.len(), SearchOutcome::Failure),
                report, "{:?} did not expand each state exactly once.",
                algorithm);
        }
    }

    #[test]
    fn best_first_frontier_rejects_duplicate_states() {
        // The key closure sees every state that enters the frontier, so it
        // can double as a recorder: no grid may be handed to it twice.
        let grid = puzzle(&[
            (0, 7), (1, 7), (2, 7), (3, 7), (4, 7), (5, 7), (6, 7), (7, 7),
            (8, 7),
            (0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (6, 8), (7, 8),
            (8, 8)
        ]);
        let keys: [fn(&Node) -> usize; 3] = [
            |node| node.cost(),
            |node| heuristic::row_relaxation(node.state()),
            |node| node.cost() + heuristic::empty_cells(node.state())
        ];

        for key in keys.iter() {
            let mut pushed = HashSet::new();
            let report = best_first(&grid, |node| {
                assert!(pushed.insert(node.state().clone()),
                    "a state entered the frontier twice");
                key(node)
            });

            assert!(report.outcome().solution().is_some());
        }
    }

    #[test]
    fn unsolvable_partial_grid_fails() {
        // Clearing one cell and planting its digit elsewhere in the same
        // column makes the single blank inadmissible for every digit: the
        // root has no children.
        let mut grid = solved_grid();
        grid.clear_cell(0, 0).unwrap();
        grid.set_cell(1, 1, 5).unwrap();

        for &algorithm in ALGORITHMS.iter() {
            let report = algorithm.search(&grid);
            assert_eq!(&SearchOutcome::Failure, report.outcome(),
                "{:?} did not fail on the unsolvable puzzle.", algorithm);
            assert_eq!(None, report.outcome().solution());
        }
    }

    #[test]
    fn algorithm_codes() {
        assert_eq!(Ok(Algorithm::BreadthFirst), "B".parse());
        assert_eq!(Ok(Algorithm::IterativeDeepening), "i".parse());
        assert_eq!(Ok(Algorithm::UniformCost), "U".parse());
        assert_eq!(Ok(Algorithm::GreedyBestFirst), "g".parse());
        assert_eq!(Ok(Algorithm::AStar), "A".parse());
        assert_eq!(Err(AlgorithmParseError::UnknownAlgorithm),
            "X".parse::<Algorithm>());
        assert_eq!(Err(AlgorithmParseError::UnknownAlgorithm),
            "".parse::<Algorithm>());
    }
}
