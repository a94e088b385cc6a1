//! Default TOML config template with inline documentation comments.

/// The default config file content. Every value is commented out so the
/// built-in defaults apply until the user edits a line.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Bubble Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The file is watched: saved edits are applied to the running scene.

[noise]
# intensity = 0.08           # 0.0-0.5
# speed = 0.36               # 0.0-0.5

[sphere]
# radius = 0.4               # 0.01-10.0
# width_segments = 64        # 3-512
# height_segments = 64       # 2-512

[material]
# thickness = 3.0            # 0.0-3.0
# roughness = 0.0            # 0.0-1.0
# ior = 1.02                 # 0.8-1.2
# chromatic_aberration = 0.01  # 0.0-0.5
# distortion = 1.0           # 0.0-1.0
# temporal_distortion = 0.09 # 0.0-0.3
# distortion_scale = 0.2     # 0.0-1.0
# anisotropic_blur = 0.8     # 0.0-10.0
# color = "#fdf1ff"

[effects.hue_saturation]
# hue = 0.0                  # 0.0-2.0 (radians)
# saturation = 0.48          # 0.2-0.8

[effects.bloom]
# intensity = 0.2            # 0.0-5.0
# kernel_size = "medium"     # very_small, small, medium, large, very_large, huge
# luminance_threshold = 0.34 # 0.0-1.0
# luminance_smoothing = 0.0  # 0.0-1.0
# mipmap_blur = true
# resolution_x = 0           # 0-2048, 0 = window size
# resolution_y = 0           # 0-2048, 0 = window size

[scene]
# variant = "graded"         # masked, bloom, graded
# mask = false               # override the variant's preset
# bloom = true
# hue_saturation = true
# background = "#ffffff"
# image = "medias/portrait.jpg"
# image_scale = 1.0          # 0.1-10.0

[window]
# title = "Bubble"
# width = 1280
# height = 800

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
}
