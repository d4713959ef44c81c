// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::ExpandError;

/// Expand a run-length encoded Slurm task/CPU count list.
///
/// Slurm writes per-node counts like `1(x2),50`: a bare integer, or an
/// integer with a `(xN)` marker meaning "repeat N times". The expanded
/// positions line up with the expanded node list. Commas are always
/// separators here, no bracket handling needed.
pub fn expand_task_counts(tasklist: &str) -> Result<Vec<u32>, ExpandError> {
    // Mirror the node list edge case: nothing in, nothing out
    if tasklist.is_empty() {
        return Ok(Vec::new());
    }

    let mut counts = Vec::new();
    for token in tasklist.split(',') {
        if let Some(open) = token.find("(x") {
            let base: u32 = token[..open]
                .parse()
                .map_err(|_| ExpandError::NonIntegerToken {
                    token: token.to_string(),
                })?;
            let repeat: usize = token[open + 2..]
                .strip_suffix(')')
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| ExpandError::MalformedRepetition {
                    token: token.to_string(),
                })?;
            counts.extend(std::iter::repeat(base).take(repeat));
        } else {
            let count = token.parse().map_err(|_| ExpandError::NonIntegerToken {
                token: token.to_string(),
            })?;
            counts.push(count);
        }
    }

    Ok(counts)
}
