// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Expansion of Slurm's compressed node and task count notations.
//!
//! Slurm describes an allocation compactly: a node list such as
//! `node1[01-10,15],node2[1-5],node05` and a parallel CPU count list such as
//! `1(x2),50`. Both expand into ordered sequences whose positions line up,
//! one count per node.

pub mod error;
pub mod nodelist;
pub mod tasks;

pub use error::ExpandError;
pub use nodelist::expand_nodelist;
pub use tasks::expand_task_counts;
