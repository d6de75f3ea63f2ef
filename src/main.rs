//! SwimSwap Dive demo
//!
//! Scores a scripted batch of dives, ranks them on a JSON-file leaderboard
//! and checks that the board reads back unchanged.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use swimswap_dive::{
    VERSION,
    config::AppConfig,
    core::vec2::Vec2,
    dive::{score_dive, DiveGesture, ScoringConfig, ScreenDive},
    leaderboard::{JsonFileStore, Leaderboard, LeaderboardEntry},
};

/// Pool center in screen space.
const POOL_CENTER: Vec2 = Vec2 { x: 300.0, y: 370.0 };

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();

    info!("SwimSwap Dive v{}", VERSION);
    info!(
        "Character: {} {} ({}% fee discount)",
        config.character.emoji(),
        config.character,
        config.character.fee_discount_percent()
    );

    run_demo(&config)
}

/// Scripted dives, one per participant. The last is a tap with no drag.
fn demo_dives() -> Vec<(&'static str, ScreenDive)> {
    let dive = |release: (f64, f64), peak_y: f64, landing: (f64, f64), rotation: f64| ScreenDive {
        grab: Vec2::new(200.0, 100.0),
        release: Vec2::new(release.0, release.1),
        peak_y,
        landing: Vec2::new(landing.0, landing.1),
        pool_center: POOL_CENTER,
        rotation_radians: rotation,
        air_time_ms: 850.0,
    };

    vec![
        ("0x71C7656EC7ab88b098defB751B7401B5f6d8976F", dive((270.0, 75.0), 20.0, (310.0, 380.0), 3.1)),
        ("0x2546BcD3c84621e976D8185a91A922aE77ECEc30", dive((205.0, 60.0), 10.0, (295.0, 365.0), 0.0)),
        ("0xbDA5747bFD65F08deb54cb465eB87D40e51B197E", dive((295.0, 100.0), 90.0, (360.0, 420.0), 12.6)),
        ("0xdD2FD4581271e230360230F9337D5c0430Bf44C0", dive((210.0, 105.0), 140.0, (420.0, 300.0), 0.6)),
        ("0x8626f6940E2eb28930eFb4CeF49B2d1F2C9C1199", dive((200.0, 100.0), f64::NAN, (300.0, 370.0), 0.0)),
    ]
}

fn run_demo(config: &AppConfig) -> Result<()> {
    let scoring = ScoringConfig::for_character(config.character);
    let store = JsonFileStore::new(&config.data_dir);
    let path = store.path_for(&config.leaderboard_key)?;
    info!("Leaderboard file: {}", path.display());

    let mut board = Leaderboard::open(store, config.leaderboard_key.clone());

    info!("=== Scoring Dives ===");
    for (participant, screen) in demo_dives() {
        let gesture = DiveGesture::from_screen(&screen);
        let result = score_dive(&gesture, &scoring);

        info!(
            "{} {}: {} {}/100 ({}), fee {:.2}% - {}",
            result.tier.badge(),
            participant,
            result.style,
            result.score,
            result.tier,
            result.fee_percentage,
            result.fee_rating().message()
        );

        let entry = LeaderboardEntry::from_result(participant, &result, LeaderboardEntry::now_millis())
            .with_character(config.character);
        if !board.state().qualifies(entry.score) {
            info!("{} did not make the top {}", entry.short_participant(), swimswap_dive::leaderboard::MAX_ENTRIES);
        }
        board.submit(entry);
    }

    info!("=== Leaderboard ===");
    for (i, entry) in board.state().entries().iter().enumerate() {
        info!(
            "#{} {} {} - {} ({}) at {}",
            i + 1,
            entry.tier.badge(),
            entry.short_participant(),
            entry.score,
            entry.tier,
            entry.time_label()
        );
    }

    // Verify the stored board reads back identically
    let written = board.state().compute_hash();
    let digest = board.digest();
    let reread = board.reload().compute_hash();

    if written == reread {
        info!("Leaderboard verified: {}", digest);
    } else {
        warn!("Leaderboard readback differs from written state ({})", digest);
    }

    Ok(())
}
