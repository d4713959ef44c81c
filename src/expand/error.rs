// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

use thiserror::Error;

/// Errors raised while expanding compressed node or task lists.
///
/// Any of these aborts the whole expansion call - there are no partial
/// results. The caller reports the error and exits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// A `start-end` range whose bounds differ in width or do not parse.
    /// Generated indices are zero-padded to the width of `start`, which only
    /// works when both bounds are written at the same width.
    #[error("range '{start}-{end}': start and end must be digit strings of equal length")]
    MalformedRange { start: String, end: String },

    /// Something other than a digit, '-' or ',' inside a bracketed range.
    #[error("unexpected character '{ch}' inside a bracketed range")]
    UnexpectedCharacter { ch: char },

    /// A group like `node[]tail`: text after the brackets but no range to
    /// attach it to.
    #[error("group '{group}' has a suffix but no range to expand")]
    SuffixWithoutRange { group: String },

    /// A second '[' before the previous one closed, or a second bracketed
    /// range in the same group. Slurm never emits either form.
    #[error("nested or repeated '[' within a single node group")]
    NestedBracket,

    /// The node list ended while still inside a '[' ... ']' pair.
    #[error("unterminated '[' at end of node list")]
    UnterminatedBracket,

    /// A `(xN)` repetition marker missing its ')' or with a bad count.
    #[error("malformed repetition marker in task count token '{token}'")]
    MalformedRepetition { token: String },

    /// A task count token that is neither an integer nor an `N(xM)` form.
    #[error("task count token '{token}' is not an integer")]
    NonIntegerToken { token: String },
}
