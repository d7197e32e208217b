//! Find/replace rules applied to generator output
//!
//! The generator's files drift between releases, so a rule lists every known
//! spelling of the text it targets. A rule set is all-or-nothing: when any
//! rule misses, the source is left untouched and the misses are reported.

/// Replace the first occurrence of any `find` alternative with `replace`
#[derive(Debug, Clone, Copy)]
pub struct PatchRule {
    pub name: &'static str,
    pub find: &'static [&'static str],
    pub replace: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied(String),
    Unmatched(Vec<&'static str>),
}

impl PatchRule {
    fn apply(&self, source: &str) -> Option<String> {
        self.find
            .iter()
            .find(|needle| source.contains(**needle))
            .map(|needle| source.replacen(needle, self.replace, 1))
    }
}

pub fn apply_rules(source: &str, rules: &[PatchRule]) -> PatchOutcome {
    let mut patched = source.to_string();
    let mut unmatched = Vec::new();

    for rule in rules {
        match rule.apply(&patched) {
            Some(next) => patched = next,
            None => unmatched.push(rule.name),
        }
    }

    if unmatched.is_empty() {
        PatchOutcome::Applied(patched)
    } else {
        PatchOutcome::Unmatched(unmatched)
    }
}
