//! Game constants
//!
//! A flat bundle of physical constants shared by the simulation and the
//! LIDAR sensor. Values are addressed by their canonical upper-case names;
//! unknown names are never inserted.

use serde::{Deserialize, Serialize};

use crate::consts::GROUND_Y_RATIO;

/// Canonical names of the numeric constants
///
/// `FILL_BACKGROUND_COLOR` has no key: it is an RGB triple, not a number, and
/// is only reachable through `GameConstants::fill_background_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantKey {
    PipeVelX,
    PlayerMaxVelY,
    PlayerMinVelY,
    PlayerAccY,
    PlayerVelRot,
    PlayerFlapAcc,
    PlayerWidth,
    PlayerHeight,
    PlayerPrivateZone,
    LidarMaxDistance,
    PipeWidth,
    PipeHeight,
    BaseWidth,
    BaseHeight,
    BackgroundWidth,
    BackgroundHeight,
    PlayerRotThr,
}

impl ConstantKey {
    pub const ALL: [ConstantKey; 17] = [
        ConstantKey::PipeVelX,
        ConstantKey::PlayerMaxVelY,
        ConstantKey::PlayerMinVelY,
        ConstantKey::PlayerAccY,
        ConstantKey::PlayerVelRot,
        ConstantKey::PlayerFlapAcc,
        ConstantKey::PlayerWidth,
        ConstantKey::PlayerHeight,
        ConstantKey::PlayerPrivateZone,
        ConstantKey::LidarMaxDistance,
        ConstantKey::PipeWidth,
        ConstantKey::PipeHeight,
        ConstantKey::BaseWidth,
        ConstantKey::BaseHeight,
        ConstantKey::BackgroundWidth,
        ConstantKey::BackgroundHeight,
        ConstantKey::PlayerRotThr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstantKey::PipeVelX => "PIPE_VEL_X",
            ConstantKey::PlayerMaxVelY => "PLAYER_MAX_VEL_Y",
            ConstantKey::PlayerMinVelY => "PLAYER_MIN_VEL_Y",
            ConstantKey::PlayerAccY => "PLAYER_ACC_Y",
            ConstantKey::PlayerVelRot => "PLAYER_VEL_ROT",
            ConstantKey::PlayerFlapAcc => "PLAYER_FLAP_ACC",
            ConstantKey::PlayerWidth => "PLAYER_WIDTH",
            ConstantKey::PlayerHeight => "PLAYER_HEIGHT",
            ConstantKey::PlayerPrivateZone => "PLAYER_PRIVATE_ZONE",
            ConstantKey::LidarMaxDistance => "LIDAR_MAX_DISTANCE",
            ConstantKey::PipeWidth => "PIPE_WIDTH",
            ConstantKey::PipeHeight => "PIPE_HEIGHT",
            ConstantKey::BaseWidth => "BASE_WIDTH",
            ConstantKey::BaseHeight => "BASE_HEIGHT",
            ConstantKey::BackgroundWidth => "BACKGROUND_WIDTH",
            ConstantKey::BackgroundHeight => "BACKGROUND_HEIGHT",
            ConstantKey::PlayerRotThr => "PLAYER_ROT_THR",
        }
    }

    /// Exact, case-sensitive lookup by canonical name
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == s)
    }
}

/// Physical constants of the game world
///
/// Velocities and accelerations are in pixels per tick, dimensions in pixels
/// and rotations in degrees. Screen coordinates grow downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GameConstants {
    // === Speed and acceleration ===
    /// Horizontal pipe velocity (negative = scrolling left)
    pub pipe_vel_x: f32,
    /// Max descend speed
    pub player_max_vel_y: f32,
    /// Max ascend speed
    pub player_min_vel_y: f32,
    /// Downward acceleration
    pub player_acc_y: f32,
    /// Angular speed
    pub player_vel_rot: f32,
    /// Vertical speed applied on flap
    pub player_flap_acc: f32,

    // === Dimensions ===
    pub player_width: f32,
    pub player_height: f32,
    /// Radius of the zone around the player considered "too close"
    pub player_private_zone: f32,
    /// Reach of every LIDAR ray
    pub lidar_max_distance: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub base_width: f32,
    pub base_height: f32,
    pub background_width: f32,
    pub background_height: f32,

    /// Rotation above which the player's visible rotation is clamped
    pub player_rot_thr: f32,

    /// Surface fill when no background image is loaded
    pub fill_background_color: [u8; 3],
}

impl Default for GameConstants {
    fn default() -> Self {
        let player_width = 34.0;
        let player_height = 24.0;
        let background_width: f32 = 288.0;

        Self {
            pipe_vel_x: -4.0,

            player_max_vel_y: 10.0,
            player_min_vel_y: -8.0,
            player_acc_y: 1.0,
            player_vel_rot: 3.0,
            player_flap_acc: -9.0,

            player_width,
            player_height,
            player_private_zone: (f32::max(player_width, player_height) + 30.0) / 2.0,
            lidar_max_distance: (background_width * 0.8).floor() - player_width,

            pipe_width: 52.0,
            pipe_height: 320.0,

            base_width: 336.0,
            base_height: 112.0,

            background_width,
            background_height: 512.0,

            player_rot_thr: 20.0,

            fill_background_color: [200, 200, 200],
        }
    }
}

impl GameConstants {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: ConstantKey) -> &f32 {
        match key {
            ConstantKey::PipeVelX => &self.pipe_vel_x,
            ConstantKey::PlayerMaxVelY => &self.player_max_vel_y,
            ConstantKey::PlayerMinVelY => &self.player_min_vel_y,
            ConstantKey::PlayerAccY => &self.player_acc_y,
            ConstantKey::PlayerVelRot => &self.player_vel_rot,
            ConstantKey::PlayerFlapAcc => &self.player_flap_acc,
            ConstantKey::PlayerWidth => &self.player_width,
            ConstantKey::PlayerHeight => &self.player_height,
            ConstantKey::PlayerPrivateZone => &self.player_private_zone,
            ConstantKey::LidarMaxDistance => &self.lidar_max_distance,
            ConstantKey::PipeWidth => &self.pipe_width,
            ConstantKey::PipeHeight => &self.pipe_height,
            ConstantKey::BaseWidth => &self.base_width,
            ConstantKey::BaseHeight => &self.base_height,
            ConstantKey::BackgroundWidth => &self.background_width,
            ConstantKey::BackgroundHeight => &self.background_height,
            ConstantKey::PlayerRotThr => &self.player_rot_thr,
        }
    }

    fn slot_mut(&mut self, key: ConstantKey) -> &mut f32 {
        match key {
            ConstantKey::PipeVelX => &mut self.pipe_vel_x,
            ConstantKey::PlayerMaxVelY => &mut self.player_max_vel_y,
            ConstantKey::PlayerMinVelY => &mut self.player_min_vel_y,
            ConstantKey::PlayerAccY => &mut self.player_acc_y,
            ConstantKey::PlayerVelRot => &mut self.player_vel_rot,
            ConstantKey::PlayerFlapAcc => &mut self.player_flap_acc,
            ConstantKey::PlayerWidth => &mut self.player_width,
            ConstantKey::PlayerHeight => &mut self.player_height,
            ConstantKey::PlayerPrivateZone => &mut self.player_private_zone,
            ConstantKey::LidarMaxDistance => &mut self.lidar_max_distance,
            ConstantKey::PipeWidth => &mut self.pipe_width,
            ConstantKey::PipeHeight => &mut self.pipe_height,
            ConstantKey::BaseWidth => &mut self.base_width,
            ConstantKey::BaseHeight => &mut self.base_height,
            ConstantKey::BackgroundWidth => &mut self.background_width,
            ConstantKey::BackgroundHeight => &mut self.background_height,
            ConstantKey::PlayerRotThr => &mut self.player_rot_thr,
        }
    }

    /// Current value of a named constant, `None` for unknown names
    ///
    /// Only numeric constants are addressable; `FILL_BACKGROUND_COLOR` reads
    /// as `None` here.
    pub fn get(&self, name: &str) -> Option<f32> {
        ConstantKey::from_str(name).map(|key| self.value(key))
    }

    /// Update a named constant
    ///
    /// Unknown names are ignored and never inserted. Returns whether the
    /// value was written.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        match ConstantKey::from_str(name) {
            Some(key) => {
                self.set_value(key, value);
                true
            }
            None => {
                log::debug!("Ignoring unknown constant {name:?}");
                false
            }
        }
    }

    #[inline]
    pub fn value(&self, key: ConstantKey) -> f32 {
        *self.slot(key)
    }

    #[inline]
    pub fn set_value(&mut self, key: ConstantKey, value: f32) {
        *self.slot_mut(key) = value;
    }

    /// Restore every constant to its default, discarding prior `set` calls
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Ground line for a screen of `background_height`
    pub fn ground_y(&self) -> f32 {
        self.background_height * GROUND_Y_RATIO
    }

    /// Parse constants from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load constants from the JSON file named by `FLAPPY_CONSTANTS`
    pub fn load() -> Self {
        Self::load_from(std::env::var("FLAPPY_CONSTANTS").ok().as_deref())
    }

    /// Load constants from a JSON file
    ///
    /// No path, an unreadable file or invalid JSON all fall back to the
    /// defaults; keys missing from the file keep their defaults.
    pub fn load_from(path: Option<&str>) -> Self {
        let Some(path) = path else {
            log::info!("Using default constants");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(constants) => {
                    log::info!("Loaded constants from {path}");
                    constants
                }
                Err(e) => {
                    log::warn!("Invalid constants file {path}: {e}, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read constants file {path}: {e}, using defaults");
                Self::default()
            }
        }
    }
}
