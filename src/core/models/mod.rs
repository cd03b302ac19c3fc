mod application_state;
mod camera_frame;
mod generated_script;
mod image_data_url;
mod image_payload;
mod script_generation_error;
mod user_settings;

pub use application_state::{ApplicationState, RenderBranch};
pub use camera_frame::CameraFrame;
pub use generated_script::GeneratedScript;
pub use image_data_url::strip_image_data_url_prefix;
pub use image_payload::ImagePayload;
pub use script_generation_error::ScriptGenerationError;
pub use user_settings::{ThemeMode, UserSettings};
