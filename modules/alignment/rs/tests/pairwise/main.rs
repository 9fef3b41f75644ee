mod local;
mod presets;
