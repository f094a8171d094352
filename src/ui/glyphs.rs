#[derive(Clone, Copy, Debug)]
pub struct Glyphs {
    pub spinner: &'static [&'static str],
    pub cursor: &'static str,
    pub arrow_right: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
}

pub fn select(fancy_requested: bool) -> Glyphs {
    if fancy_requested {
        fancy()
    } else {
        ascii()
    }
}

impl Glyphs {
    /// Spinner frame for the given tick count.
    pub fn spinner_frame(&self, tick: usize) -> &'static str {
        self.spinner[tick % self.spinner.len()]
    }
}

fn ascii() -> Glyphs {
    Glyphs {
        spinner: &["|", "/", "-", "\\"],
        cursor: "_",
        arrow_right: "->",
        selected: "(*)",
        unselected: "( )",
    }
}

fn fancy() -> Glyphs {
    Glyphs {
        spinner: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        cursor: "█",
        arrow_right: "→",
        selected: "●",
        unselected: "○",
    }
}
