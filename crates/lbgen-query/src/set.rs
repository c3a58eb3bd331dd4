//! Small set-style helpers over string sequences.

use std::collections::BTreeSet;

/// Distinct strings present in either sequence.
///
/// Consumers treat the result as a set; the implementation keeps
/// first-occurrence order (`a` before `b`) so output is stable across runs.
pub fn concatenate_unique(a: &[String], b: &[String]) -> Vec<String> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut out = Vec::new();
    for s in a.iter().chain(b.iter()) {
        if seen.insert(s.as_str()) {
            out.push(s.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::concatenate_unique;

    fn strs(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unions_and_dedups() {
        let out = concatenate_unique(&strs(&["a", "b"]), &strs(&["b", "c"]));
        assert_eq!(out, strs(&["a", "b", "c"]));
    }

    #[test]
    fn dedups_within_one_input() {
        let out = concatenate_unique(&strs(&["a", "a", "b"]), &[]);
        assert_eq!(out, strs(&["a", "b"]));
    }

    #[test]
    fn empty_inputs_give_empty_result() {
        assert!(concatenate_unique(&[], &[]).is_empty());
    }
}
