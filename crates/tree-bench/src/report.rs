//! Rendering of [`BenchResult`].

use std::fmt;
use std::time::Duration;

use crate::bench::BenchResult;
use crate::error::Result;

fn ms(d: Duration) -> String {
    format!("{:.3} ms", d.as_nanos() as f64 / 1e6)
}

impl BenchResult {
    /// Both engines answered every query with the same number of entries.
    pub fn hits_agree(&self) -> bool {
        self.bst_hits == self.rbt_hits
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("build", ms(self.bst_build), ms(self.rbt_build)),
            ("query", ms(self.bst_query), ms(self.rbt_query)),
            ("height", self.bst_height.to_string(), self.rbt_height.to_string()),
            ("hits", self.bst_hits.to_string(), self.rbt_hits.to_string()),
        ];
        writeln!(f, "items: {}  queries: {}", self.n_items, self.n_queries)?;
        writeln!(f, "{:<8} {:>14} {:>14}", "", "BST", "RBT")?;
        for (label, bst, rbt) in rows {
            writeln!(f, "{label:<8} {bst:>14} {rbt:>14}")?;
        }
        if !self.hits_agree() {
            writeln!(f, "warning: engines disagree on range hits")?;
        }
        Ok(())
    }
}
