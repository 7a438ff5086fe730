use crate::ui::rgb::{
    DIM_WHITE, EMBER_RED, FORGE_ORANGE, SPARK_YELLOW, STEEL_BLUE, SUCCESS_GREEN,
};
use rand::prelude::*;
use std::sync::LazyLock;

#[derive(Clone)]
pub struct ColoredMessage {
    pub text: String,
    pub color: (u8, u8, u8),
}

static WAITING_MESSAGES: LazyLock<Vec<ColoredMessage>> = LazyLock::new(|| {
    vec![
        ColoredMessage {
            text: "🔥 Stoking the scaffold forge...".to_string(),
            color: FORGE_ORANGE,
        },
        ColoredMessage {
            text: "⚒️ Hammering out controllers and models...".to_string(),
            color: STEEL_BLUE,
        },
        ColoredMessage {
            text: "🏗️ Raising the project skeleton...".to_string(),
            color: SPARK_YELLOW,
        },
        ColoredMessage {
            text: "🧵 Wiring up dependency injection...".to_string(),
            color: SUCCESS_GREEN,
        },
        ColoredMessage {
            text: "📐 Drafting Razor view blueprints...".to_string(),
            color: DIM_WHITE,
        },
        ColoredMessage {
            text: "🧱 Laying down the middleware pipeline...".to_string(),
            color: EMBER_RED,
        },
        ColoredMessage {
            text: "🗜️ Pressing appsettings into shape...".to_string(),
            color: STEEL_BLUE,
        },
        ColoredMessage {
            text: "✨ Polishing namespaces until they shine...".to_string(),
            color: SPARK_YELLOW,
        },
    ]
});

pub fn get_waiting_message() -> ColoredMessage {
    let mut rng = rand::rng();
    WAITING_MESSAGES
        .choose(&mut rng)
        .cloned()
        .unwrap_or_else(|| ColoredMessage {
            text: "Generating your scaffold...".to_string(),
            color: FORGE_ORANGE,
        })
}
