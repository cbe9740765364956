use std::fmt;
use std::path::{Path, PathBuf};

/// Semantic type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean switch, emitted without a value when changed.
    Flag,
    /// Integer value.
    Int,
    /// Free-form text (charsets, separators, session names).
    Text,
    /// Single filesystem path.
    Path,
    /// Ordered list of paths (dictionaries, rules files).
    PathList,
}

/// Current value of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// No value configured.
    Unset,
    Flag(bool),
    Int(i64),
    Text(String),
    Path(PathBuf),
    PathList(Vec<PathBuf>),
}

impl OptionValue {
    pub fn is_unset(&self) -> bool {
        matches!(self, OptionValue::Unset)
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            OptionValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            OptionValue::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_path_list(&self) -> &[PathBuf] {
        match self {
            OptionValue::PathList(list) => list,
            _ => &[],
        }
    }

    /// Convert `self` into a value of `kind`, if a lossless reading exists.
    ///
    /// Text is accepted for every kind so values coming from a command line
    /// (`--set name=value`) can be stored as their typed form.
    pub(crate) fn coerce(self, kind: OptionKind) -> Option<OptionValue> {
        match (kind, self) {
            (OptionKind::Flag, OptionValue::Unset) => None,
            (_, OptionValue::Unset) => Some(OptionValue::Unset),
            (OptionKind::Flag, v @ OptionValue::Flag(_)) => Some(v),
            (OptionKind::Flag, OptionValue::Text(s)) => match s.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(OptionValue::Flag(true)),
                "false" | "0" | "no" | "off" => Some(OptionValue::Flag(false)),
                _ => None,
            },
            (OptionKind::Int, v @ OptionValue::Int(_)) => Some(v),
            (OptionKind::Int, OptionValue::Text(s)) => s.trim().parse().ok().map(OptionValue::Int),
            (OptionKind::Text, v @ OptionValue::Text(_)) => Some(v),
            (OptionKind::Text, OptionValue::Int(n)) => Some(OptionValue::Text(n.to_string())),
            (OptionKind::Text, OptionValue::Path(p)) => {
                Some(OptionValue::Text(p.to_string_lossy().into_owned()))
            }
            (OptionKind::Path, v @ OptionValue::Path(_)) => Some(v),
            (OptionKind::Path, OptionValue::Text(s)) => Some(OptionValue::Path(PathBuf::from(s))),
            (OptionKind::PathList, v @ OptionValue::PathList(_)) => Some(v),
            (OptionKind::PathList, OptionValue::Path(p)) => Some(OptionValue::PathList(vec![p])),
            (OptionKind::PathList, OptionValue::Text(s)) => Some(OptionValue::PathList(
                s.split(',')
                    .filter(|part| !part.is_empty())
                    .map(PathBuf::from)
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Unset => Ok(()),
            OptionValue::Flag(b) => write!(f, "{}", b),
            OptionValue::Int(n) => write!(f, "{}", n),
            OptionValue::Text(s) => f.write_str(s),
            OptionValue::Path(p) => write!(f, "{}", p.display()),
            OptionValue::PathList(list) => {
                let joined: Vec<String> = list.iter().map(|p| p.display().to_string()).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<char> for OptionValue {
    fn from(value: char) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<PathBuf> for OptionValue {
    fn from(value: PathBuf) -> Self {
        OptionValue::Path(value)
    }
}

impl From<&Path> for OptionValue {
    fn from(value: &Path) -> Self {
        OptionValue::Path(value.to_path_buf())
    }
}

impl From<Vec<PathBuf>> for OptionValue {
    fn from(value: Vec<PathBuf>) -> Self {
        OptionValue::PathList(value)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(OptionValue::Unset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_coerces_into_typed_kinds() {
        assert_eq!(
            OptionValue::from("42").coerce(OptionKind::Int),
            Some(OptionValue::Int(42))
        );
        assert_eq!(
            OptionValue::from("yes").coerce(OptionKind::Flag),
            Some(OptionValue::Flag(true))
        );
        assert_eq!(
            OptionValue::from("a.dict,b.dict").coerce(OptionKind::PathList),
            Some(OptionValue::PathList(vec![
                PathBuf::from("a.dict"),
                PathBuf::from("b.dict")
            ]))
        );
    }

    #[test]
    fn flag_rejects_unset_and_garbage() {
        assert_eq!(OptionValue::Unset.coerce(OptionKind::Flag), None);
        assert_eq!(OptionValue::from("maybe").coerce(OptionKind::Flag), None);
        assert_eq!(OptionValue::from("x").coerce(OptionKind::Int), None);
    }

    #[test]
    fn display_uses_natural_text() {
        assert_eq!(OptionValue::Int(90).to_string(), "90");
        assert_eq!(OptionValue::from("?|?d").to_string(), "?|?d");
        assert_eq!(OptionValue::Unset.to_string(), "");
    }
}
