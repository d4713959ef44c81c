// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Named output formatters pairing expanded node and task count lists.
//!
//! The registry is a compile-time table, so the supported set is auditable
//! at a glance. To add a launcher format, write the function and list it in
//! `FORMATTERS`.

/// A formatter turns the expanded node and task count lists into one output
/// line per node, in the notation some MPI launcher expects.
pub type Formatter = fn(&[String], &[u32]) -> Vec<String>;

/// All registered formatters. Names are matched case sensitively.
static FORMATTERS: &[(&str, Formatter)] = &[("HP_MPI", format_hp_mpi)];

/// Look up a formatter by name. `None` simply means "not registered"; the
/// caller decides how to report that.
pub fn lookup(name: &str) -> Option<Formatter> {
    FORMATTERS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, f)| *f)
}

/// Names of all registered formatters, in registration order.
pub fn names() -> Vec<&'static str> {
    FORMATTERS.iter().map(|(n, _)| *n).collect()
}

/// HP-MPI style host list: one `node:count` line per node.
///
/// Nodes and counts are paired positionally. If the lists disagree in length,
/// pairing stops at the shorter one - Slurm always emits matching lengths,
/// and truncating beats failing a real job over a cosmetic mismatch.
fn format_hp_mpi(nodes: &[String], tasks: &[u32]) -> Vec<String> {
    nodes
        .iter()
        .zip(tasks)
        .map(|(node, count)| format!("{}:{}", node, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_hp_mpi_pairs_positionally() {
        let lines = format_hp_mpi(&nodes(&["node01", "node02", "node05"]), &[1, 5, 2]);
        assert_eq!(lines, vec!["node01:1", "node02:5", "node05:2"]);
    }

    #[test]
    fn test_hp_mpi_truncates_to_shorter() {
        let lines = format_hp_mpi(&nodes(&["a", "b", "c"]), &[1, 2]);
        assert_eq!(lines, vec!["a:1", "b:2"]);

        let lines = format_hp_mpi(&nodes(&["a"]), &[1, 2, 3]);
        assert_eq!(lines, vec!["a:1"]);
    }

    #[test]
    fn test_hp_mpi_empty_inputs() {
        assert!(format_hp_mpi(&[], &[]).is_empty());
    }

    #[test]
    fn test_lookup_registered() {
        let formatter = lookup("HP_MPI").expect("HP_MPI must be registered");
        let lines = formatter(&nodes(&["n1"]), &[4]);
        assert_eq!(lines, vec!["n1:4"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup("hp_mpi").is_none());
        assert!(lookup("Hp_Mpi").is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("OPEN_MPI").is_none());
    }

    #[test]
    fn test_names_lists_all() {
        assert_eq!(names(), vec!["HP_MPI"]);
    }
}
