pub const APPLICATION_TITLE: &str = "Deep Image Prompt";
pub const APPLICATION_SUBTITLE: &str =
    "Transform any photo into a highly detailed AI prompt. Upload an image, and the AI will write the script to recreate it.";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_CAMERA: &str = "[CAMERA]";
pub const LOG_TAG_GEMINI: &str = "[GEMINI]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_DIALOG: &str = "[DIALOG]";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";
pub const API_KEY_ENVIRONMENT_VARIABLES: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

pub const GENERATION_TEMPERATURE: f32 = 0.4;
pub const FALLBACK_IMAGE_MIME_TYPE: &str = "image/jpeg";

pub const USER_INSTRUCTION: &str = "Analyze this image and generate the deep prompt script.";

pub const SYSTEM_INSTRUCTION: &str = r#"
You are a Deep Image Script Generator.

Your job is to analyze any photo the user uploads or captures. After analyzing the image, create a complete, detailed prompt that can recreate the picture as close as possible.

Write the script in a clear and structured way.

Your generated script must include:

1. Subject description
2. Face details (eyes, beard, hair, skin tone, expression)
3. Clothing details
4. Background and environment
5. Lighting + color tones
6. Text written in the image (names, titles, banners)
7. Objects in the image
8. Style (realistic, portrait, cartoon, 3D, etc.)
9. Camera details (angle, lens type, depth of field)
10. Extra artistic notes to match the exact mood

Rules:
- Do NOT mention "in this image" or "uploaded picture."
- Describe everything as if you are creating it fresh.
- Keep the script long, deep, and accurate.
- Always produce a final copy-paste prompt.
- Format the output exactly as requested in the template below.

OUTPUT FORMAT:
Here is your complete image-generation script:

-------------------------------------
IMAGE SCRIPT:

[Auto-generated deep prompt goes here]
-------------------------------------

Copy the script above and use it in any AI image generator.
"#;

pub const GENERATION_FAILED_MESSAGE: &str = "Failed to analyze the image. Please try again.";
pub const CAMERA_UNAVAILABLE_MESSAGE: &str = "Unable to access camera. Please check permissions.";
pub const CAMERA_CAPTURE_FAILED_MESSAGE: &str = "Unable to capture a photo from the camera.";
pub const IMAGE_LOAD_FAILED_MESSAGE: &str = "Unable to read the selected file as an image.";

pub const DEFAULT_CAMERA_INDEX: u32 = 0;
pub const CAMERA_PREVIEW_INTERVAL_MILLISECONDS: u64 = 100;
pub const CAMERA_RESOLUTION_WIDTH: u32 = 1280;
pub const CAMERA_RESOLUTION_HEIGHT: u32 = 720;
pub const CAMERA_FRAME_RATE: u32 = 30;
pub const SNAPSHOT_JPEG_QUALITY: u8 = 92;

pub const COPIED_BADGE_DURATION_SECONDS: u64 = 2;

pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 8] =
    ["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"];

pub const SETTINGS_DIRECTORY_NAME: &str = "deep-image-prompt";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
