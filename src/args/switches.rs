//! Switch tables: how each option is spelled on the engine command line.

/// Options with a single-letter switch, keyed by dashed name.
pub const SHORT_SWITCHES: &[(&str, char)] = &[
    ("attack-mode", 'a'),
    ("hash-type", 'm'),
    ("version", 'V'),
    ("help", 'h'),
    ("benchmark", 'b'),
    ("markov-threshold", 't'),
    ("outfile", 'o'),
    ("separator", 'p'),
    ("segment-size", 'c'),
    ("gpu-devices", 'd'),
    ("workload-profile", 'w'),
    ("gpu-accel", 'n'),
    ("gpu-loops", 'u'),
    ("skip", 's'),
    ("limit", 'l'),
    ("rule-left", 'j'),
    ("rule-right", 'k'),
    ("rules-file", 'r'),
    ("generate-rules", 'g'),
    ("custom-charset1", '1'),
    ("custom-charset2", '2'),
    ("custom-charset3", '3'),
    ("custom-charset4", '4'),
    ("increment", 'i'),
];

/// Long options whose value must be attached as `--name=value`.
pub const EQUALS_REQUIRED: &[&str] = &[
    "benchmark-mode",
    "status-timer",
    "markov-hcstat",
    "markov-threshold",
    "runtime",
    "session",
    "restore-timer",
    "outfile-format",
    "outfile-check-timer",
    "remove-timer",
    "debug-mode",
    "debug-file",
    "induction-dir",
    "outfile-check-dir",
    "cpu-affinity",
    "gpu-temp-abort",
    "gpu-temp-retain",
    "generate-rules-func-min",
    "generate-rules-func-max",
    "generate-rules-seed",
    "increment-min",
    "increment-max",
    "bitmap-max",
    "weak-hash-threshold",
];

/// How a changed option is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchForm {
    /// `-<letter> <value>` (two tokens).
    Short(char),
    /// `--<name>=<value>` (one token).
    Equals,
    /// `--<name>` with no value.
    Flag,
}

/// Convert an internal option name to its dashed command-line name.
pub fn to_dashed(name: &str) -> String {
    name.replace('_', "-")
}

/// Classify a dashed option name. Short switches take precedence.
pub fn switch_form(dashed: &str) -> SwitchForm {
    if let Some((_, letter)) = SHORT_SWITCHES.iter().find(|(name, _)| *name == dashed) {
        return SwitchForm::Short(*letter);
    }
    if EQUALS_REQUIRED.contains(&dashed) {
        return SwitchForm::Equals;
    }
    SwitchForm::Flag
}

/// Render one option as command-line tokens.
pub fn render(dashed: &str, value: &str) -> Vec<String> {
    match switch_form(dashed) {
        SwitchForm::Short(letter) => vec![format!("-{}", letter), value.to_string()],
        SwitchForm::Equals => vec![format!("--{}={}", dashed, value)],
        SwitchForm::Flag => vec![format!("--{}", dashed)],
    }
}
