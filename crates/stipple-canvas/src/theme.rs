//! Color themes for the canvas. Each theme pins the chrome colors (canvas
//! face, ticks, annotation dots and edges, text) and carries a cycle of
//! figure colors handed out to figures added without an explicit color.

/// A named canvas color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Canvas background.
    pub face: &'static str,
    /// Tick label color.
    pub tick: &'static str,
    /// Annotation dot color (centroids, single points).
    pub dot: &'static str,
    /// Edge and auxiliary line color.
    pub edge: &'static str,
    /// Annotation text color.
    pub text: &'static str,
    /// Figure colors, cycled in order.
    pub cycle: &'static [&'static str],
}

pub const LIGHT: Theme = Theme {
    name: "light",
    face: "#F9F9F9",
    tick: "#000000",
    dot: "#26272D",
    edge: "#5794DE",
    text: "#26272D",
    cycle: &[
        "#D52753", "#23974A", "#DF631C", "#275FE4", "#823FF1", "#27618D", "#FF6480", "#3CBC66",
        "#C5A332", "#0099E1", "#CE33C0", "#6D93BB",
    ],
};

pub const URA: Theme = Theme {
    name: "ura",
    face: "#FEFFEE",
    tick: "#000000",
    dot: "#000000",
    edge: "#26272D",
    text: "#26272D",
    cycle: &[
        "#C21B6F", "#6FC21B", "#C26F1B", "#1B6FC2", "#6F1BC2", "#1BC26F",
    ],
};

pub const TOMORROW: Theme = Theme {
    name: "tomorrow",
    face: "#FFFFFF",
    tick: "#000000",
    dot: "#000000",
    edge: "#26272D",
    text: "#26272D",
    cycle: &[
        "#C82828", "#718C00", "#EAB700", "#4171AE", "#8959A8", "#3E999F",
    ],
};

pub const SOLARIZED: Theme = Theme {
    name: "solarized",
    face: "#FDF6E3",
    tick: "#002B36",
    dot: "#002B36",
    edge: "#586E75",
    text: "#002B36",
    cycle: &[
        "#DC322F", "#859900", "#B58900", "#268BD2", "#D33682", "#2AA198", "#CB4B16", "#6C71C4",
    ],
};

pub const ROSE: Theme = Theme {
    name: "rose",
    face: "#FAF4ED",
    tick: "#002B36",
    dot: "#002B36",
    edge: "#9893A5",
    text: "#002B36",
    cycle: &[
        "#B4637A", "#56949F", "#EA9D34", "#286983", "#907AA9", "#D7827E", "#575279",
    ],
};

pub const HORIZON: Theme = Theme {
    name: "horizon",
    face: "#FDF0ED",
    tick: "#16161C",
    dot: "#1A1C23",
    edge: "#666666",
    text: "#1A1C23",
    cycle: &[
        "#DA103F", "#1EB980", "#F6661E", "#26BBD9", "#EE64AE", "#1D8991",
    ],
};

pub const GRUVBOX: Theme = Theme {
    name: "gruvbox",
    face: "#FBF1C7",
    tick: "#7C6F64",
    dot: "#3C3836",
    edge: "#7C6F64",
    text: "#3C3836",
    cycle: &[
        "#CC241D", "#98971A", "#D79921", "#458588", "#B16286", "#689D6A",
    ],
};

const ALL: [&Theme; 7] = [
    &LIGHT, &URA, &TOMORROW, &SOLARIZED, &ROSE, &HORIZON, &GRUVBOX,
];

impl Theme {
    /// Look a theme up by name.
    #[must_use]
    pub fn named(name: &str) -> Option<&'static Theme> {
        ALL.into_iter().find(|t| t.name == name)
    }

    /// The names of all built-in themes.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        ALL.into_iter().map(|t| t.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn every_builtin_theme_resolves_by_name() {
        for name in Theme::names() {
            let theme = Theme::named(name).unwrap();
            assert_eq!(theme.name, name);
            assert!(!theme.cycle.is_empty());
        }
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::named("neon").is_none());
    }
}
