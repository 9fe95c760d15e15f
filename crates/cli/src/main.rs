use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use face_outline_core::annotation::infrastructure::polygon_outliner::PolygonOutliner;
use face_outline_core::detection::infrastructure::vision_api_detector::VisionApiDetector;
use face_outline_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use face_outline_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use face_outline_core::pipeline::outline_faces_use_case::OutlineFacesUseCase;
use face_outline_core::shared::constants::{
    IMAGE_EXTENSIONS, MAX_OUTLINE_THICKNESS, OUTLINE_COLOR,
};
use face_outline_core::shared::settings::Settings;

/// Outlines the faces a cloud vision service finds in an image.
#[derive(Parser)]
#[command(name = "face-outline")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file (format follows the extension).
    output: PathBuf,

    /// Maximum number of faces to request.
    #[arg(long)]
    max_results: Option<u32>,

    /// Vision API key (overrides VISION_API_KEY).
    #[arg(long)]
    api_key: Option<String>,

    /// OAuth2 access token (overrides VISION_ACCESS_TOKEN).
    #[arg(long)]
    access_token: Option<String>,

    /// Vision service base URL (overrides VISION_API_ENDPOINT).
    #[arg(long)]
    endpoint: Option<String>,

    /// Outline thickness in pixels.
    #[arg(long)]
    thickness: Option<u32>,

    /// Settings file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    validate(&cli, &settings)?;

    let detector = VisionApiDetector::from_settings(&settings)?;
    let use_case = OutlineFacesUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(detector),
        Box::new(PolygonOutliner::new(
            OUTLINE_COLOR,
            settings.outline_thickness,
        )),
        settings.max_results,
    );
    use_case.execute(&cli.input, &cli.output)?;
    Ok(())
}

/// Settings file and environment first, then command-line flags.
fn resolve_settings(cli: &Cli) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    apply_flags(cli, &mut settings);
    Ok(settings)
}

fn apply_flags(cli: &Cli, settings: &mut Settings) {
    if let Some(n) = cli.max_results {
        settings.max_results = n;
    }
    if let Some(key) = &cli.api_key {
        settings.api_key = Some(key.clone());
    }
    if let Some(token) = &cli.access_token {
        settings.access_token = Some(token.clone());
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.endpoint = endpoint.clone();
    }
    if let Some(t) = cli.thickness {
        settings.outline_thickness = t;
    }
}

fn validate(cli: &Cli, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if settings.max_results == 0 {
        return Err("Max results must be at least 1".into());
    }
    if !(1..=MAX_OUTLINE_THICKNESS).contains(&settings.outline_thickness) {
        return Err(format!(
            "Thickness must be between 1 and {MAX_OUTLINE_THICKNESS}, got {}",
            settings.outline_thickness
        )
        .into());
    }
    if !is_image(&cli.output) {
        return Err(format!(
            "Output must have an image extension ({}), got {}",
            IMAGE_EXTENSIONS.join(", "),
            cli.output.display()
        )
        .into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
