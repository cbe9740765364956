use std::fmt;
use std::str::FromStr;

/// Engine attack strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackMode {
    /// Dictionary words, optionally mangled by rules files.
    Straight,
    /// Concatenation of words from two dictionaries.
    Combinator,
    BruteForce,
    /// Dictionary words followed by a mask.
    HybridDictMask,
    /// Mask followed by dictionary words.
    HybridMaskDict,
}

impl AttackMode {
    pub const ALL: [AttackMode; 5] = [
        AttackMode::Straight,
        AttackMode::Combinator,
        AttackMode::BruteForce,
        AttackMode::HybridDictMask,
        AttackMode::HybridMaskDict,
    ];

    /// Numeric identifier passed as `-a`.
    pub fn number(self) -> u8 {
        match self {
            AttackMode::Straight => 0,
            AttackMode::Combinator => 1,
            AttackMode::BruteForce => 3,
            AttackMode::HybridDictMask => 6,
            AttackMode::HybridMaskDict => 7,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.number() == n)
    }

    pub fn label(self) -> &'static str {
        match self {
            AttackMode::Straight => "Straight",
            AttackMode::Combinator => "Combinator",
            AttackMode::BruteForce => "Brute-Force",
            AttackMode::HybridDictMask => "Hybrid dict + mask",
            AttackMode::HybridMaskDict => "Hybrid mask + dict",
        }
    }
}

impl fmt::Display for AttackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}

impl FromStr for AttackMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "straight" | "0" => Ok(AttackMode::Straight),
            "combinator" | "1" => Ok(AttackMode::Combinator),
            "brute-force" | "bruteforce" | "3" => Ok(AttackMode::BruteForce),
            "hybrid-dict-mask" | "6" => Ok(AttackMode::HybridDictMask),
            "hybrid-mask-dict" | "7" => Ok(AttackMode::HybridMaskDict),
            other => Err(format!("unknown attack mode '{}'", other)),
        }
    }
}
