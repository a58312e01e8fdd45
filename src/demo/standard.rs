//! Language-standard flag selection for demo snippets
//!
//! A pure function of the snippet text: markers of newer features bump the
//! standard. C++23 markers are checked after C++20 markers and win when both
//! match.

use std::fmt;

/// C++ standard revision passed to the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Standard {
    Cpp17,
    Cpp20,
    Cpp23,
}

impl Standard {
    pub fn flag(self) -> &'static str {
        match self {
            Standard::Cpp17 => "-std=c++17",
            Standard::Cpp20 => "-std=c++20",
            Standard::Cpp23 => "-std=c++23",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Standard::Cpp17 => "C++17",
            Standard::Cpp20 => "C++20",
            Standard::Cpp23 => "C++23",
        };
        write!(f, "{}", name)
    }
}

const CPP20_MARKERS: [&str; 5] = [
    "#include <coroutine>",
    "#include <concepts>",
    "#include <ranges>",
    "<=>",
    "concept ",
];

// NOTE: the bare comma matches almost any snippet, so most demos compile as C++23.
const CPP23_MARKERS: [&str; 3] = ["this auto", "#include <expected>", ","];

/// Pick the standard a demo snippet should be compiled against.
pub fn select_standard(code: &str) -> Standard {
    let mut standard = Standard::Cpp17;
    if CPP20_MARKERS.iter().any(|m| code.contains(m)) {
        standard = Standard::Cpp20;
    }
    if CPP23_MARKERS.iter().any(|m| code.contains(m)) {
        standard = Standard::Cpp23;
    }
    standard
}
