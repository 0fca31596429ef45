//! Terminal styling for traces and grammar dumps.

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Escape sequences to splice into output, or empty strings when output is
/// plain. Rule names are blue, matched text green, failures red, offsets and
/// separators dim.
#[derive(Clone, Copy, Debug, Default)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        blue: BLUE,
        green: GREEN,
        red: RED,
        dim: DIM,
        reset: RESET,
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
