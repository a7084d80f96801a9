//! Angler Raid - a side-scrolling shooter simulation.
//!
//! Core modules:
//! - `entities`: pure data for every game object
//! - `compute`: the per-frame simulation (`tick`) and input-driven transitions
//! - `player`, `enemy`, `projectile`, `particle`, `background`: per-entity behaviour
//! - `collision`: axis-aligned box overlap
//! - `ui`: translates state into draw requests for an external sink
//! - `config`: tuning and field dimensions

pub mod background;
pub mod collision;
pub mod compute;
pub mod config;
pub mod enemy;
pub mod entities;
pub mod particle;
pub mod player;
pub mod projectile;
pub mod ui;

pub use compute::{init_state, player_shoot, tick, toggle_debug, FrameInput};
pub use config::GameConfig;
pub use entities::{EnemyKind, EntireGameStateInfo, GameStatus};
