use std::path::PathBuf;

pub const DEFAULT_FPS: u64 = 60;
/// Player moves this many times per second at any frame rate.
const MOVES_PER_SECOND: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fps: u64,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Reads `MAZE_FPS` and `MAZE_LOG_DIR`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("MAZE_FPS").ok(),
            std::env::var_os("MAZE_LOG_DIR").map(PathBuf::from),
        )
    }

    fn from_vars(fps: Option<String>, log_dir: Option<PathBuf>) -> Self {
        let fps = fps
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_FPS);
        let log_dir = log_dir
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(default_log_dir);
        Self { fps, log_dir }
    }

    pub fn frames_per_move(&self) -> u32 {
        (self.fps / MOVES_PER_SECOND).max(1) as u32
    }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("nibble-maze")
}
