//! Agent-side paths.
//!
//! The caller cannot use `PathBuf` for a path that lives on an agent: a
//! Linux controller driving a Windows agent would split `C:\tools\git.exe`
//! on the wrong separator. `AgentPath` keeps the raw string together with
//! the syntax of the host it came from and only offers the two operations
//! tool home resolution needs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path syntax of the host a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    /// `/`-separated, `:`-delimited search path.
    Posix,
    /// `\` or `/` separated, drive letters and UNC roots, `;`-delimited search path.
    Windows,
}

impl PathStyle {
    /// Style of the host this code runs on.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Separator used when joining path segments.
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Separator between entries of a search path such as `PATH`.
    pub const fn list_separator(self) -> char {
        match self {
            Self::Posix => ':',
            Self::Windows => ';',
        }
    }

    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Whether `raw` is absolute under this style.
    pub fn is_absolute(self, raw: &str) -> bool {
        let mut chars = raw.chars();
        match self {
            Self::Posix => raw.starts_with('/'),
            Self::Windows => {
                let first = chars.next();
                let second = chars.next();
                let third = chars.next();
                match (first, second, third) {
                    (Some(a), Some(b), _) if self.is_separator(a) && self.is_separator(b) => true,
                    (Some(drive), Some(':'), Some(sep)) => {
                        drive.is_ascii_alphabetic() && self.is_separator(sep)
                    }
                    _ => false,
                }
            }
        }
    }

    /// Byte length of the root prefix of `raw` (`/`, `C:\`, `\\server\share\`), or 0.
    fn root_len(self, raw: &str) -> usize {
        let bytes = raw.as_bytes();
        let sep_at = |i: usize| bytes.get(i).is_some_and(|b| self.is_separator(char::from(*b)));

        match self {
            Self::Posix => usize::from(sep_at(0)),
            Self::Windows => {
                if sep_at(0) && sep_at(1) {
                    let Some(server_end) = self.find_separator(raw, 2) else {
                        return raw.len();
                    };
                    return self
                        .find_separator(raw, server_end + 1)
                        .map_or(raw.len(), |share_end| share_end + 1);
                }
                if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
                    return if sep_at(2) { 3 } else { 2 };
                }
                usize::from(sep_at(0))
            }
        }
    }

    fn find_separator(self, raw: &str, from: usize) -> Option<usize> {
        raw.get(from..)?
            .find(|c| self.is_separator(c))
            .map(|idx| from + idx)
    }
}

/// A path on an agent, in the agent's own syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentPath {
    raw: String,
    style: PathStyle,
}

impl AgentPath {
    pub fn new(raw: impl Into<String>, style: PathStyle) -> Self {
        Self {
            raw: raw.into(),
            style,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub const fn style(&self) -> PathStyle {
        self.style
    }

    pub fn is_absolute(&self) -> bool {
        self.style.is_absolute(&self.raw)
    }

    /// The containing directory.
    ///
    /// Returns `None` for a root (`/`, `C:\`) and for a single relative
    /// segment, neither of which has a parent segment to strip.
    pub fn parent(&self) -> Option<Self> {
        let root = self.style.root_len(&self.raw);
        let bytes = self.raw.as_bytes();

        let mut end = bytes.len();
        while end > root && self.style.is_separator(char::from(bytes[end - 1])) {
            end -= 1;
        }

        let body = &self.raw[root..end];
        if body.is_empty() {
            return None;
        }

        match body.rfind(|c| self.style.is_separator(c)) {
            Some(idx) => {
                let mut cut = root + idx;
                while cut > root && self.style.is_separator(char::from(bytes[cut - 1])) {
                    cut -= 1;
                }
                Some(Self::new(&self.raw[..cut], self.style))
            }
            None if root > 0 => Some(Self::new(&self.raw[..root], self.style)),
            None => None,
        }
    }

    /// Append `relative` with a single separator.
    ///
    /// No normalization happens: `child("../foo")` keeps the `..` segment.
    #[must_use]
    pub fn child(&self, relative: &str) -> Self {
        if self.raw.is_empty() {
            return Self::new(relative, self.style);
        }
        let ends_with_separator = self
            .raw
            .chars()
            .next_back()
            .is_some_and(|c| self.style.is_separator(c));
        let raw = if ends_with_separator {
            format!("{}{relative}", self.raw)
        } else {
            format!("{}{}{relative}", self.raw, self.style.separator())
        };
        Self::new(raw, self.style)
    }
}

impl fmt::Display for AgentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
