use is_terminal::IsTerminal;

/// Environment variables that mark a non-interactive CI runner
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
];

/// Locale variables in lookup precedence
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

/// Forces the ascii icon set regardless of locale
const ASCII_OVERRIDE: &str = "TREESELECT_ASCII";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
    pub height: u16,
}

impl TerminalCapabilities {
    /// An interactive picker needs a real terminal outside CI
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.is_ci
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    let probe = Probe {
        env: |key: &str| std::env::var(key).ok(),
        is_tty: std::io::stdout().is_terminal(),
        size: crossterm::terminal::size().ok(),
    };
    probe.capabilities()
}

struct Probe<F> {
    env: F,
    is_tty: bool,
    size: Option<(u16, u16)>,
}

impl<F: Fn(&str) -> Option<String>> Probe<F> {
    fn capabilities(&self) -> TerminalCapabilities {
        let dumb = self
            .var("TERM")
            .is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let (width, height) = self.size.unwrap_or((80, 24));

        TerminalCapabilities {
            is_tty: self.is_tty,
            supports_color: self.is_tty && !dumb && self.var("NO_COLOR").is_none(),
            supports_unicode: !dumb && self.var(ASCII_OVERRIDE).is_none() && self.utf8_locale(),
            is_ci: CI_MARKERS.iter().any(|key| self.var(key).is_some()),
            width,
            height,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.env)(key).filter(|value| !value.is_empty())
    }

    /// The first locale variable that is set decides; no locale at all means utf-8
    fn utf8_locale(&self) -> bool {
        LOCALE_VARS
            .iter()
            .find_map(|key| self.var(key))
            .map_or(true, |locale| {
                let locale = locale.to_lowercase();
                locale.contains("utf-8") || locale.contains("utf8")
            })
    }
}
