//! Record shapes shared by the static content tables of several pages.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Tailwind-style two-stop gradient used behind card icons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient(pub &'static str, pub &'static str);

impl Gradient {
    pub const PRIMARY: Gradient = Gradient("hsl(142, 76%, 50%)", "#60a5fa");
    pub const VIOLET: Gradient = Gradient("#a855f7", "#ec4899");
    pub const AMBER: Gradient = Gradient("hsl(180, 100%, 50%)", "#fb923c");
    pub const EMERALD: Gradient = Gradient("#22c55e", "#34d399");
    pub const CYAN: Gradient = Gradient("#3b82f6", "#22d3ee");
    pub const RED: Gradient = Gradient("#ef4444", "#f97316");

    pub fn css(self) -> String {
        format!("background: linear-gradient(135deg, {}, {});", self.0, self.1)
    }
}

/// `mailto:` link with a pre-filled, percent-encoded subject line.
pub fn mailto(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject() {
        assert_eq!(
            mailto("careers@taquant.io", "Application: Rust Engineer & SRE"),
            "mailto:careers@taquant.io?subject=Application%3A%20Rust%20Engineer%20%26%20SRE"
        );
    }

    #[test]
    fn gradient_renders_both_stops() {
        assert_eq!(
            Gradient::VIOLET.css(),
            "background: linear-gradient(135deg, #a855f7, #ec4899);"
        );
    }
}
