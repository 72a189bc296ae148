//! # Profile
//!
//! Everything that differs between site variants, gathered into one value:
//! the command table, header text, prompt, typing speed, whether the snake
//! game is available, and what the ID card shows. Built once at startup from
//! the resolved config and shared read-only afterwards.

use std::time::Duration;

use super::commands::{CommandTable, Variant, header_for};

pub const DEFAULT_NAME: &str = "Vaibhav Patel";
pub const DEFAULT_SUBTITLE: &str = "Networking and Cyber Security Student";
pub const DEFAULT_PROMPT_USER: &str = "vaibhav";

/// What the ID card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct CardProfile {
    pub name: String,
    pub title: String,
    /// Extra line under the title (e.g. a student number)
    pub detail: Option<String>,
    /// Text on the back face; `None` means the card cannot flip
    pub back: Option<String>,
}

impl CardProfile {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self {
                name: DEFAULT_NAME.to_string(),
                title: "Networking & Cyber Security".to_string(),
                detail: Some("Student No.: 100889689".to_string()),
                back: None,
            },
            Variant::Arcade => Self {
                name: DEFAULT_NAME.to_string(),
                title: "Networking & Cyber Security Student".to_string(),
                detail: None,
                back: Some("Back of Card".to_string()),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub variant: Variant,
    /// Page header name
    pub name: String,
    pub subtitle: String,
    pub commands: CommandTable,
    pub header: String,
    pub prompt: String,
    pub typing_delay: Duration,
    pub game_enabled: bool,
    pub card: CardProfile,
}

impl Profile {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            name: DEFAULT_NAME.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            commands: CommandTable::for_variant(variant),
            header: header_for(variant).to_string(),
            prompt: prompt_for(DEFAULT_PROMPT_USER),
            typing_delay: Duration::from_millis(variant.default_typing_delay_ms()),
            game_enabled: variant.game_enabled(),
            card: CardProfile::for_variant(variant),
        }
    }
}

/// `user@portfolio:~$ `
pub fn prompt_for(user: &str) -> String {
    format!("{user}@portfolio:~$ ")
}
