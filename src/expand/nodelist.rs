// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::ExpandError;

/// Accumulated pieces of one node group while scanning.
///
/// A group is `prefix[ranges]suffix` or a bare literal name. The buffers fill
/// up during the scan and `flush` turns them into concrete node names.
#[derive(Default)]
struct Group {
    prefix: String,
    ranges: String,
    suffix: String,
    saw_bracket: bool,
}

impl Group {
    /// Append all node names this group expands to, then reset the buffers
    /// for the next group.
    fn flush(&mut self, out: &mut Vec<String>) -> Result<(), ExpandError> {
        if self.ranges.is_empty() {
            if !self.suffix.is_empty() {
                return Err(ExpandError::SuffixWithoutRange {
                    group: format!("{}[]{}", self.prefix, self.suffix),
                });
            }
            // A completely empty group (empty input, trailing comma) expands
            // to nothing rather than to one empty name.
            if !self.prefix.is_empty() {
                out.push(std::mem::take(&mut self.prefix));
            }
            *self = Group::default();
            return Ok(());
        }

        for sub in self.ranges.split(',') {
            match sub.split_once('-') {
                Some((start, end)) => {
                    let malformed = || ExpandError::MalformedRange {
                        start: start.to_string(),
                        end: end.to_string(),
                    };
                    if start.len() != end.len() {
                        return Err(malformed());
                    }
                    let lo: u64 = start.parse().map_err(|_| malformed())?;
                    let hi: u64 = end.parse().map_err(|_| malformed())?;
                    // Generated indices keep the fixed width of the bounds
                    let width = start.len();
                    for i in lo..=hi {
                        out.push(format!("{}{:0width$}{}", self.prefix, i, self.suffix));
                    }
                }
                // Bare literal token, used verbatim with no padding
                None => out.push(format!("{}{}{}", self.prefix, sub, self.suffix)),
            }
        }

        *self = Group::default();
        Ok(())
    }
}

/// Expand a compressed Slurm node list into individual node names.
///
/// A node list like `node1[01-10,15],node2[1-5],node05` expands to
/// node101..node110, node115, node21..node25, node05 - order of appearance,
/// duplicates preserved. Nodes are separated by commas, but commas also
/// appear inside the square brackets, so this walks the input character by
/// character instead of splitting.
pub fn expand_nodelist(nodelist: &str) -> Result<Vec<String>, ExpandError> {
    // Slurm reports an empty allocation as "(null)"
    if nodelist == "(null)" {
        return Ok(Vec::new());
    }

    let mut nodes = Vec::new();
    let mut group = Group::default();
    let mut in_bracket = false;

    for ch in nodelist.chars() {
        if in_bracket {
            match ch {
                ']' => in_bracket = false,
                '[' => return Err(ExpandError::NestedBracket),
                '0'..='9' | '-' | ',' => group.ranges.push(ch),
                _ => return Err(ExpandError::UnexpectedCharacter { ch }),
            }
        } else {
            match ch {
                '[' => {
                    // At most one bracketed range per group
                    if group.saw_bracket {
                        return Err(ExpandError::NestedBracket);
                    }
                    group.saw_bracket = true;
                    in_bracket = true;
                }
                ',' => group.flush(&mut nodes)?,
                _ => {
                    if group.saw_bracket {
                        group.suffix.push(ch);
                    } else {
                        group.prefix.push(ch);
                    }
                }
            }
        }
    }

    if in_bracket {
        return Err(ExpandError::UnterminatedBracket);
    }
    // No trailing comma for the last group, flush it explicitly
    group.flush(&mut nodes)?;

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_mixed_groups() {
        let nodes = expand_nodelist("node1[01-10,15],node2[1-5],node05").unwrap();
        assert_eq!(
            nodes,
            vec![
                "node101", "node102", "node103", "node104", "node105", "node106", "node107",
                "node108", "node109", "node110", "node115", "node21", "node22", "node23",
                "node24", "node25", "node05",
            ]
        );
    }

    #[test]
    fn test_expand_empty() {
        assert_eq!(expand_nodelist("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_expand_null_allocation() {
        assert_eq!(expand_nodelist("(null)").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_expand_single_name() {
        assert_eq!(expand_nodelist("login01").unwrap(), vec!["login01"]);
    }

    #[test]
    fn test_padding_keeps_bound_width() {
        assert_eq!(
            expand_nodelist("n[08-11]").unwrap(),
            vec!["n08", "n09", "n10", "n11"]
        );
    }

    #[test]
    fn test_range_length() {
        // start-end generates end - start + 1 names, all padded to the width
        // of the bounds
        let nodes = expand_nodelist("n[003-011]").unwrap();
        assert_eq!(nodes.len(), 9);
        assert!(nodes.iter().all(|n| n.len() == "n003".len()));
        assert_eq!(nodes.first().unwrap(), "n003");
        assert_eq!(nodes.last().unwrap(), "n011");
    }

    #[test]
    fn test_literal_token_not_padded() {
        // A token without '-' is substituted verbatim
        assert_eq!(
            expand_nodelist("gpu[001,5]").unwrap(),
            vec!["gpu001", "gpu5"]
        );
    }

    #[test]
    fn test_suffix_after_range() {
        assert_eq!(
            expand_nodelist("rack[1-2]-ib").unwrap(),
            vec!["rack1-ib", "rack2-ib"]
        );
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(expand_nodelist("a,a").unwrap(), vec!["a", "a"]);
    }

    #[test]
    fn test_trailing_comma_tolerated() {
        assert_eq!(expand_nodelist("node01,").unwrap(), vec!["node01"]);
    }

    #[test]
    fn test_width_mismatch() {
        assert_eq!(
            expand_nodelist("node[01-1]"),
            Err(ExpandError::MalformedRange {
                start: "01".to_string(),
                end: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_unterminated_bracket() {
        assert_eq!(
            expand_nodelist("node[01-10"),
            Err(ExpandError::UnterminatedBracket)
        );
    }

    #[test]
    fn test_nested_bracket() {
        assert_eq!(
            expand_nodelist("node[[01-10]]"),
            Err(ExpandError::NestedBracket)
        );
    }

    #[test]
    fn test_second_range_in_group() {
        assert_eq!(
            expand_nodelist("node[1-2][3-4]"),
            Err(ExpandError::NestedBracket)
        );
    }

    #[test]
    fn test_invalid_character_in_bracket() {
        assert_eq!(
            expand_nodelist("node[1a]"),
            Err(ExpandError::UnexpectedCharacter { ch: 'a' })
        );
    }

    #[test]
    fn test_suffix_without_range() {
        assert_eq!(
            expand_nodelist("node[]x"),
            Err(ExpandError::SuffixWithoutRange {
                group: "node[]x".to_string(),
            })
        );
    }
}
