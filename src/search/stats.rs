//! Search statistics and performance metrics
//!
//! Tracks nodes searched, cutoffs, terminal positions and timing.

use std::fmt;
use std::time::{Duration, Instant};

/// Search statistics
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Total nodes searched (root moves included)
    pub nodes: u64,

    /// Nodes at root ply
    pub root_nodes: u64,

    /// Depth-0 nodes scored by the evaluator
    pub leaf_nodes: u64,

    /// Checkmate and stalemate nodes
    pub terminal_nodes: u64,

    /// Alpha-beta cutoffs
    pub cutoffs: u64,

    /// Search start time
    pub start_time: Option<Instant>,

    /// Time spent searching
    pub search_time: Duration,

    /// Nodes per second rate
    pub nps: u64,
}

impl SearchStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing
    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop timing and calculate NPS
    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
            let elapsed_ms = self.search_time.as_millis() as u64;
            if elapsed_ms > 0 {
                self.nps = (self.nodes * 1000) / elapsed_ms;
            }
        }
    }

    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    pub fn inc_root_node(&mut self) {
        self.root_nodes += 1;
    }

    pub fn inc_leaf_node(&mut self) {
        self.leaf_nodes += 1;
    }

    pub fn inc_terminal_node(&mut self) {
        self.terminal_nodes += 1;
    }

    pub fn inc_cutoff(&mut self) {
        self.cutoffs += 1;
    }

    /// Share of interior nodes that ended in a cutoff, in percent
    pub fn cutoff_rate(&self) -> f64 {
        let interior = self.nodes.saturating_sub(self.leaf_nodes + self.terminal_nodes);
        if interior == 0 {
            0.0
        } else {
            self.cutoffs as f64 * 100.0 / interior as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Print formatted summary
    pub fn print_summary(&self) {
        println!("=== Search Statistics ===");
        println!("Nodes searched: {}", self.nodes);
        println!("Root nodes: {}", self.root_nodes);
        println!("Leaf nodes: {}", self.leaf_nodes);
        println!("Terminal nodes: {}", self.terminal_nodes);
        println!("Alpha-Beta cutoffs: {} ({:.1}%)", self.cutoffs, self.cutoff_rate());
        println!("Search time: {} ms", self.search_time.as_millis());
        println!("Nodes per second: {}", self.nps);
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {} leaves {} cutoffs {} time {}ms nps {}",
            self.nodes,
            self.leaf_nodes,
            self.cutoffs,
            self.search_time.as_millis(),
            self.nps
        )
    }
}
