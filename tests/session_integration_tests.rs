use std::collections::HashMap;
use std::time::{Duration, Instant};

use portfolio::core::action::{Action, Effect, Key, update};
use portfolio::core::commands::{GAME_LAUNCH_MESSAGE, Variant};
use portfolio::core::config::{CliOverrides, PortfolioConfig, resolve_with_env};
use portfolio::core::state::App;
use portfolio::core::terminal::SessionState;

// ============================================================================
// Helper Functions
// ============================================================================

fn app_for(toml: &str, cli: CliOverrides, env: &[(&str, &str)]) -> App {
    let config: PortfolioConfig = toml::from_str(toml).unwrap();
    let env: HashMap<String, String> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let resolved = resolve_with_env(&config, &cli, |key| env.get(key).cloned());
    let now = Instant::now();
    let mut app = App::from_config(&resolved, now);
    update(&mut app, Action::Frame(now));
    app
}

fn arcade() -> App {
    app_for(
        "",
        CliOverrides {
            variant: Some(Variant::Arcade),
            skip_cover: true,
            mute: false,
        },
        &[],
    )
}

/// Let every queued write through.
fn settle(app: &mut App) {
    for _ in 0..4 {
        let later = app.last_frame + Duration::from_secs(60);
        update(app, Action::Frame(later));
    }
}

fn type_line(app: &mut App, line: &str) -> Vec<Effect> {
    let mut effects = Vec::new();
    for ch in line.chars() {
        effects.extend(update(app, Action::Key(Key::Char(ch))));
    }
    effects.extend(update(app, Action::Key(Key::Enter)));
    effects
}

fn screen_text(app: &App) -> String {
    app.console.session().screen().text()
}

// ============================================================================
// Terminal Session
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let mut app = arcade();
    type_line(&mut app, "help");
    settle(&mut app);
    let text = screen_text(&app);
    assert!(text.contains("help"));
    assert!(text.contains("game"));
    assert_eq!(app.console.session().state(), SessionState::Idle);
}

#[test]
fn test_unknown_command_reports_not_found() {
    let mut app = arcade();
    type_line(&mut app, "rm -rf /");
    settle(&mut app);
    assert!(screen_text(&app).contains("Command not found: rm -rf /"));
}

#[test]
fn test_clear_leaves_only_a_prompt() {
    let mut app = arcade();
    type_line(&mut app, "about");
    settle(&mut app);
    type_line(&mut app, "clear");
    settle(&mut app);
    let text = screen_text(&app);
    assert!(!text.contains("Welcome"));
    assert!(text.trim_end().ends_with("vaibhav@portfolio:~$"));
}

#[test]
fn test_keys_typed_while_busy_are_replayed() {
    // classic types its output, so the session is busy right after Enter
    let mut app = app_for(
        "[general]\nvariant = \"classic\"\nskip_cover = true\n",
        CliOverrides::default(),
        &[],
    );
    settle(&mut app);
    type_line(&mut app, "about");
    assert_eq!(app.console.session().state(), SessionState::Busy);
    type_line(&mut app, "nope");
    settle(&mut app);
    assert!(screen_text(&app).contains("Command not found: nope"));
}

// ============================================================================
// Game Mode
// ============================================================================

#[test]
fn test_game_launch_and_exit() {
    let mut app = arcade();
    update(
        &mut app,
        Action::SurfaceResized {
            width: 58,
            height: 24,
        },
    );
    type_line(&mut app, "game");
    settle(&mut app);
    assert!(app.console.in_game());
    assert!(screen_text(&app).contains(GAME_LAUNCH_MESSAGE.trim_end()));

    let effects = update(&mut app, Action::Key(Key::Right));
    assert_eq!(effects, vec![Effect::WakeAudio]);
    let effects = update(&mut app, Action::GameTick);
    assert!(matches!(effects.as_slice(), [Effect::Sound(_)]));

    update(&mut app, Action::Key(Key::Esc));
    assert!(!app.console.in_game());
    settle(&mut app);
    assert_eq!(app.console.session().state(), SessionState::Idle);
}

#[test]
fn test_mute_flag_silences_game() {
    let mut app = app_for(
        "[general]\nvariant = \"arcade\"\n",
        CliOverrides {
            variant: None,
            skip_cover: true,
            mute: true,
        },
        &[],
    );
    assert!(app.console.is_muted());
    type_line(&mut app, "game");
    settle(&mut app);
    assert!(app.console.in_game());
    assert!(update(&mut app, Action::GameTick).is_empty());
}

#[test]
fn test_game_command_unknown_in_classic() {
    let mut app = app_for(
        "",
        CliOverrides {
            variant: Some(Variant::Classic),
            skip_cover: true,
            mute: false,
        },
        &[],
    );
    type_line(&mut app, "game");
    settle(&mut app);
    assert!(!app.console.in_game());
    assert!(screen_text(&app).contains("Command not found: game"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_env_variant_and_custom_command() {
    let mut app = app_for(
        "[general]\nskip_cover = true\n\n[commands]\nhobbies = \"Chess and CTFs\\n\"\n",
        CliOverrides::default(),
        &[("PORTFOLIO_VARIANT", "arcade")],
    );
    assert!(app.profile.game_enabled);
    type_line(&mut app, "hobbies");
    settle(&mut app);
    assert!(screen_text(&app).contains("Chess and CTFs"));
}

#[test]
fn test_cover_blocks_input_until_dismissed() {
    let mut app = app_for("", CliOverrides::default(), &[]);
    assert!(app.cover.is_visible());
    type_line(&mut app, "help");
    assert!(!screen_text(&app).contains("Command not found"));
    assert_eq!(app.console.session().input(), "");

    update(&mut app, Action::ClickBulb);
    settle(&mut app);
    assert!(!app.cover.is_visible());
}
