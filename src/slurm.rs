// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Slurm environment glue: the scheduler hands a job its compressed node and
//! task lists via environment variables.

use std::env;

/// Compact node list for the current job (e.g. "node[001-003]")
pub fn job_nodelist() -> Option<String> {
    env::var("SLURM_JOB_NODELIST").ok()
}

/// Run-length encoded CPU counts per node (e.g. "1(x2),50")
pub fn job_tasklist() -> Option<String> {
    env::var("SLURM_JOB_CPUS_PER_NODE").ok()
}

/// Check whether we are running inside a Slurm job at all
#[allow(dead_code)]
pub fn is_slurm_job() -> bool {
    env::var("SLURM_JOB_ID").is_ok()
}
