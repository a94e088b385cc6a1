//! BubbleApp struct definition and constructor.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;
use winit::window::Window;

use bubble_config::schema::BubbleConfig;
use bubble_renderer::{BubbleScene, FrameTimer, RenderState};

use crate::cli::Overrides;
use crate::controls::ControlPanel;

/// Top-level application state.
pub struct BubbleApp {
    pub(super) config: BubbleConfig,
    /// File that `S` saves to, `R` reloads from, and the watcher follows.
    pub(super) config_path: PathBuf,
    pub(super) overrides: Overrides,

    // Live reload
    pub(super) config_rx: Option<watch::Receiver<BubbleConfig>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Animation
    pub(super) scene: BubbleScene,
    pub(super) timer: FrameTimer,
    pub(super) paused: bool,

    // Input
    pub(super) controls: ControlPanel,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) last_title_update: Instant,
}

impl BubbleApp {
    pub fn new(config: BubbleConfig, config_path: PathBuf, overrides: Overrides) -> Self {
        let scene = BubbleScene::new(&config);
        Self {
            config,
            config_path,
            overrides,
            config_rx: None,
            tokio_runtime: None,
            window: None,
            render_state: None,
            scene,
            timer: FrameTimer::new(),
            paused: false,
            controls: ControlPanel::new(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            last_title_update: Instant::now(),
        }
    }

    /// Directory relative image paths in the config resolve against.
    pub(super) fn image_root(&self) -> &Path {
        self.config_path.parent().unwrap_or_else(|| Path::new("."))
    }
}
