//! Keyboard-driven tuning of the live config.
//!
//! Every tunable parameter is a [`Control`]: a named, clamped view onto one
//! field of [`BubbleConfig`]. Arrow keys pick and step controls; a few
//! letter keys save, reload, pause, and switch the scene variant.

use bubble_config::schema::{BloomKernelSize, BubbleConfig, SceneVariant};
use winit::keyboard::{Key, NamedKey};

/// Step multiplier while Shift is held.
pub const COARSE_STEP_FACTOR: f32 = 10.0;

/// How a control's value is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Plain number, shown with the precision of its step.
    Scalar,
    /// Boolean stored as 0 or 1, shown as on/off.
    Toggle,
    /// Index into [`BloomKernelSize::ALL`], shown by name.
    KernelSize,
}

/// One tunable parameter.
pub struct Control {
    pub name: &'static str,
    pub kind: ControlKind,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    get: fn(&BubbleConfig) -> f32,
    set: fn(&mut BubbleConfig, f32),
}

impl Control {
    pub fn value(&self, config: &BubbleConfig) -> f32 {
        (self.get)(config)
    }

    /// Write `value` clamped to the control's range. Returns the stored value.
    pub fn set(&self, config: &mut BubbleConfig, value: f32) -> f32 {
        (self.set)(config, value.clamp(self.min, self.max));
        self.value(config)
    }

    /// Move the value by `steps` increments, snapped to the step grid.
    pub fn step_by(&self, config: &mut BubbleConfig, steps: f32) -> f32 {
        let raw = self.value(config) + steps * self.step;
        let snapped = self.min + ((raw - self.min) / self.step).round() * self.step;
        self.set(config, snapped)
    }

    /// Human readable value with as many decimals as the step needs.
    pub fn format_value(&self, config: &BubbleConfig) -> String {
        let value = self.value(config);
        match self.kind {
            ControlKind::KernelSize => format!("{:?}", BloomKernelSize::from_index(value as usize)),
            ControlKind::Toggle => if value >= 0.5 { "on" } else { "off" }.to_string(),
            ControlKind::Scalar => {
                let decimals = if self.step >= 1.0 {
                    0
                } else if self.step >= 0.1 {
                    1
                } else {
                    2
                };
                format!("{value:.decimals$}")
            }
        }
    }
}

pub const CONTROLS: &[Control] = &[
    Control {
        name: "noise intensity",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 0.5,
        step: 0.01,
        get: |c| c.noise.intensity,
        set: |c, v| c.noise.intensity = v,
    },
    Control {
        name: "noise speed",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 0.5,
        step: 0.01,
        get: |c| c.noise.speed,
        set: |c, v| c.noise.speed = v,
    },
    Control {
        name: "thickness",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 3.0,
        step: 0.05,
        get: |c| c.material.thickness,
        set: |c, v| c.material.thickness = v,
    },
    Control {
        name: "roughness",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 1.0,
        step: 0.1,
        get: |c| c.material.roughness,
        set: |c, v| c.material.roughness = v,
    },
    Control {
        name: "ior",
        kind: ControlKind::Scalar,
        min: 0.8,
        max: 1.2,
        step: 0.01,
        get: |c| c.material.ior,
        set: |c, v| c.material.ior = v,
    },
    Control {
        name: "chromatic aberration",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 0.5,
        step: 0.01,
        get: |c| c.material.chromatic_aberration,
        set: |c, v| c.material.chromatic_aberration = v,
    },
    Control {
        name: "distortion",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 1.0,
        step: 0.05,
        get: |c| c.material.distortion,
        set: |c, v| c.material.distortion = v,
    },
    Control {
        name: "temporal distortion",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 0.3,
        step: 0.01,
        get: |c| c.material.temporal_distortion,
        set: |c, v| c.material.temporal_distortion = v,
    },
    Control {
        name: "distortion scale",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 1.0,
        step: 0.05,
        get: |c| c.material.distortion_scale,
        set: |c, v| c.material.distortion_scale = v,
    },
    Control {
        name: "anisotropic blur",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 10.0,
        step: 0.05,
        get: |c| c.material.anisotropic_blur,
        set: |c, v| c.material.anisotropic_blur = v,
    },
    Control {
        name: "hue",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 2.0,
        step: 0.05,
        get: |c| c.effects.hue_saturation.hue,
        set: |c, v| c.effects.hue_saturation.hue = v,
    },
    Control {
        name: "saturation",
        kind: ControlKind::Scalar,
        min: 0.2,
        max: 0.8,
        step: 0.01,
        get: |c| c.effects.hue_saturation.saturation,
        set: |c, v| c.effects.hue_saturation.saturation = v,
    },
    Control {
        name: "bloom intensity",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 5.0,
        step: 0.1,
        get: |c| c.effects.bloom.intensity,
        set: |c, v| c.effects.bloom.intensity = v,
    },
    Control {
        name: "bloom kernel size",
        kind: ControlKind::KernelSize,
        min: 0.0,
        max: (BloomKernelSize::ALL.len() - 1) as f32,
        step: 1.0,
        get: |c| c.effects.bloom.kernel_size.index() as f32,
        set: |c, v| c.effects.bloom.kernel_size = BloomKernelSize::from_index(v.round() as usize),
    },
    Control {
        name: "bloom threshold",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 1.0,
        step: 0.01,
        get: |c| c.effects.bloom.luminance_threshold,
        set: |c, v| c.effects.bloom.luminance_threshold = v,
    },
    Control {
        name: "bloom smoothing",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 1.0,
        step: 0.01,
        get: |c| c.effects.bloom.luminance_smoothing,
        set: |c, v| c.effects.bloom.luminance_smoothing = v,
    },
    Control {
        name: "bloom mipmap blur",
        kind: ControlKind::Toggle,
        min: 0.0,
        max: 1.0,
        step: 1.0,
        get: |c| if c.effects.bloom.mipmap_blur { 1.0 } else { 0.0 },
        set: |c, v| c.effects.bloom.mipmap_blur = v >= 0.5,
    },
    Control {
        name: "bloom resolution x",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 2048.0,
        step: 1.0,
        get: |c| c.effects.bloom.resolution_x as f32,
        set: |c, v| c.effects.bloom.resolution_x = v.round() as u32,
    },
    Control {
        name: "bloom resolution y",
        kind: ControlKind::Scalar,
        min: 0.0,
        max: 2048.0,
        step: 1.0,
        get: |c| c.effects.bloom.resolution_y as f32,
        set: |c, v| c.effects.bloom.resolution_y = v.round() as u32,
    },
];

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SelectPrevious,
    SelectNext,
    /// Step the selected control by this many increments.
    Adjust(f32),
    Save,
    Reload,
    SetVariant(SceneVariant),
    TogglePause,
}

impl Command {
    pub fn from_key(key: &Key, shift: bool) -> Option<Self> {
        let factor = if shift { COARSE_STEP_FACTOR } else { 1.0 };
        match key {
            Key::Named(NamedKey::ArrowUp) => Some(Command::SelectPrevious),
            Key::Named(NamedKey::ArrowDown) => Some(Command::SelectNext),
            Key::Named(NamedKey::ArrowLeft) => Some(Command::Adjust(-factor)),
            Key::Named(NamedKey::ArrowRight) => Some(Command::Adjust(factor)),
            Key::Named(NamedKey::Space) => Some(Command::TogglePause),
            Key::Character(c) => match c.to_ascii_lowercase().as_str() {
                "s" => Some(Command::Save),
                "r" => Some(Command::Reload),
                "1" => Some(Command::SetVariant(SceneVariant::Masked)),
                "2" => Some(Command::SetVariant(SceneVariant::Bloom)),
                "3" => Some(Command::SetVariant(SceneVariant::Graded)),
                " " => Some(Command::TogglePause),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Which control the arrow keys act on.
#[derive(Debug, Default)]
pub struct ControlPanel {
    selected: usize,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &'static Control {
        &CONTROLS[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CONTROLS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + CONTROLS.len() - 1) % CONTROLS.len();
    }

    /// Step the selected control. Returns `true` if the config changed.
    pub fn adjust(&self, config: &mut BubbleConfig, steps: f32) -> bool {
        let control = self.selected();
        let before = control.value(config);
        let after = control.step_by(config, steps);
        tracing::debug!(control = control.name, before, after, "control adjusted");
        before != after
    }

    /// `name: value` for the selected control.
    pub fn status(&self, config: &BubbleConfig) -> String {
        let control = self.selected();
        format!("{}: {}", control.name, control.format_value(config))
    }
}
