//! Content compiled into the binary.
//!
//! Levels are listed in campaign order.

/// Default balance configuration.
pub const CONFIG: &str = include_str!("../data/config.toml");

/// Introductory level: one guard, two pieces of loot, no keycard doors.
pub const TUTORIAL: &str = include_str!("../data/levels/tutorial.ron");

/// `(name, source)` for every bundled level, in campaign order.
pub const LEVELS: &[(&str, &str)] = &[
    ("tutorial", TUTORIAL),
    ("vault", include_str!("../data/levels/vault.ron")),
    ("gallery", include_str!("../data/levels/gallery.ron")),
];

/// Looks up a bundled level source by name.
pub fn level(name: &str) -> Option<&'static str> {
    LEVELS
        .iter()
        .find(|(level, _)| level.eq_ignore_ascii_case(name))
        .map(|(_, source)| *source)
}
