//! Option registry: every job option with its kind and hardcoded default.

use crate::options::value::{OptionKind, OptionValue};

/// Hardcoded default of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Unset,
    Flag(bool),
    Int(i64),
    Text(&'static str),
    EmptyList,
}

impl DefaultValue {
    pub fn to_value(self) -> OptionValue {
        match self {
            DefaultValue::Unset => OptionValue::Unset,
            DefaultValue::Flag(b) => OptionValue::Flag(b),
            DefaultValue::Int(n) => OptionValue::Int(n),
            DefaultValue::Text(s) => OptionValue::Text(s.to_string()),
            DefaultValue::EmptyList => OptionValue::PathList(Vec::new()),
        }
    }
}

/// A single option definition.
#[derive(Debug, Clone, Copy)]
pub struct OptionDef {
    /// Internal (underscored) name, e.g. `gpu_temp_abort`.
    pub name: &'static str,
    pub kind: OptionKind,
    pub default: DefaultValue,
}

const fn def(name: &'static str, kind: OptionKind, default: DefaultValue) -> OptionDef {
    OptionDef {
        name,
        kind,
        default,
    }
}

use DefaultValue::{EmptyList, Flag, Int, Text, Unset};
use OptionKind as K;

/// Options that are never emitted as switches.
///
/// They are consumed by the attack modes as positional inputs instead.
pub const INTERNAL_OPTIONS: &[&str] = &[
    "hash_type",
    "hash_file",
    "words_files",
    "rules_files",
    "masks_file",
    "charset_file",
    "mask",
];

/// The complete option table, in declaration order.
pub const OPTIONS: &[OptionDef] = &[
    // Positional inputs
    def("hash_file", K::Path, Unset),
    def("words_files", K::PathList, EmptyList),
    def("rules_files", K::PathList, EmptyList),
    def("masks_file", K::Path, Unset),
    def("charset_file", K::Path, Unset),
    def("mask", K::Text, Unset),
    def("hash_type", K::Text, Text("0")),
    // General
    def("eula", K::Flag, Flag(false)),
    def("help", K::Flag, Flag(false)),
    def("version", K::Flag, Flag(false)),
    def("quiet", K::Flag, Flag(false)),
    def("show", K::Flag, Flag(false)),
    def("left", K::Flag, Flag(false)),
    def("username", K::Flag, Flag(false)),
    def("remove", K::Flag, Flag(false)),
    def("force", K::Flag, Flag(false)),
    def("runtime", K::Int, Int(0)),
    def("hex_salt", K::Flag, Flag(false)),
    def("hex_charset", K::Flag, Flag(false)),
    def("hex_wordlist", K::Flag, Flag(false)),
    def("segment_size", K::Int, Int(1)),
    def("bitmap_max", K::Int, Unset),
    // Devices
    def("gpu_async", K::Flag, Flag(false)),
    def("gpu_devices", K::Text, Unset),
    def("gpu_accel", K::Int, Unset),
    def("gpu_loops", K::Int, Unset),
    def("gpu_temp_disable", K::Flag, Flag(false)),
    def("gpu_temp_abort", K::Int, Int(90)),
    def("gpu_temp_retain", K::Int, Int(80)),
    def("powertune_disable", K::Flag, Flag(false)),
    // Keyspace
    def("skip", K::Int, Unset),
    def("limit", K::Int, Unset),
    def("keyspace", K::Flag, Flag(false)),
    // Rules
    def("rule_left", K::Text, Text(":")),
    def("rule_right", K::Text, Text(":")),
    def("generate_rules", K::Int, Int(0)),
    def("generate_rules_func_min", K::Int, Int(1)),
    def("generate_rules_func_max", K::Int, Int(4)),
    def("generate_rules_seed", K::Int, Unset),
    def("cleanup_rules", K::Flag, Flag(false)),
    // Increment
    def("increment", K::Flag, Flag(false)),
    def("increment_min", K::Int, Int(1)),
    def("increment_max", K::Int, Int(54)),
    // Benchmark & status
    def("benchmark", K::Flag, Flag(false)),
    def("benchmark_mode", K::Int, Int(1)),
    def("status", K::Flag, Flag(false)),
    def("status_timer", K::Int, Int(10)),
    def("status_automat", K::Flag, Flag(false)),
    def("loopback", K::Flag, Flag(false)),
    def("weak_hash_threshold", K::Int, Int(100)),
    // Markov
    def("markov_hcstat", K::Path, Unset),
    def("markov_disable", K::Flag, Flag(false)),
    def("markov_classic", K::Flag, Flag(false)),
    def("markov_threshold", K::Int, Int(0)),
    // Session
    def("session", K::Text, Text("default_session")),
    def("restore", K::Flag, Flag(false)),
    def("restore_disable", K::Flag, Flag(false)),
    // Output
    def("outfile", K::Path, Unset),
    def("outfile_format", K::Int, Int(3)),
    def("outfile_autohex_disable", K::Flag, Flag(false)),
    def("outfile_check_timer", K::Int, Unset),
    def("outfile_check_dir", K::Path, Unset),
    def("separator", K::Text, Text(":")),
    def("disable_potfile", K::Flag, Flag(false)),
    def("potfile_disable", K::Flag, Flag(false)),
    def("remove_timer", K::Int, Unset),
    def("debug_mode", K::Int, Unset),
    def("debug_file", K::Path, Unset),
    def("induction_dir", K::Path, Unset),
    def("cpu_affinity", K::Text, Unset),
    // Charsets
    def("custom_charset1", K::Text, Text("?|?d?u")),
    def("custom_charset2", K::Text, Text("?|?d")),
    def("custom_charset3", K::Text, Text("?|?d*!$@_")),
    def("custom_charset4", K::Text, Unset),
];

/// Look up an option definition by internal name.
pub fn find_option(name: &str) -> Option<&'static OptionDef> {
    OPTIONS.iter().find(|d| d.name == name)
}

/// Whether `name` is consumed positionally instead of as a switch.
pub fn is_internal(name: &str) -> bool {
    INTERNAL_OPTIONS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for d in OPTIONS {
            assert!(seen.insert(d.name), "duplicate option {}", d.name);
        }
    }

    #[test]
    fn internal_options_are_registered() {
        for name in INTERNAL_OPTIONS {
            assert!(find_option(name).is_some(), "{} missing", name);
        }
    }

    #[test]
    fn defaults_match_their_kind() {
        for d in OPTIONS {
            let value = d.default.to_value();
            assert_eq!(
                value.clone().coerce(d.kind),
                if d.kind == OptionKind::Flag && value.is_unset() {
                    None
                } else {
                    Some(value)
                },
                "{}",
                d.name
            );
        }
    }
}
