//! Tests for the relief and overlay pipelines.

use std::path::{Path, PathBuf};

use clap::Parser;
use gdal::raster::Buffer;
use gdal::DriverManager;
use raster_parser::ElevationRaster;
use relief_viewer::{
    render_overlay, render_relief, resolve_config, run, Args, RenderOutcome, ViewerConfig,
};
use terrain_common::{
    Grid, RasterMetadata, RenderRequest, SimulationDataset, SimulationLayer, TerrainError,
};
use test_utils::{create_cone_dem, create_plume_layer, transforms};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
const RED: [u8; 4] = [255, 0, 0, 255];

// ============================================================================
// Helper functions
// ============================================================================

/// 200x200 pixels of 0.05 degrees covering (0, 0) to (10, 10).
fn ten_degree_raster() -> ElevationRaster {
    ElevationRaster {
        grid: Grid::new(create_cone_dem(200, 200, 3000.0), 200, 200).unwrap(),
        metadata: RasterMetadata::north_up(0.0, 10.0, 0.05, -0.05, 200, 200),
    }
}

/// 512x512 pixels of 1/64 degree covering (0, 0) to (8, 8).
fn fine_raster() -> ElevationRaster {
    ElevationRaster {
        grid: Grid::new(create_cone_dem(512, 512, 3000.0), 512, 512).unwrap(),
        metadata: RasterMetadata::north_up(0.0, 8.0, 0.015625, -0.015625, 512, 512),
    }
}

fn simulation(terrain_position: [f64; 2]) -> SimulationDataset {
    let layer = |name: &str, max: f32| {
        SimulationLayer::new(
            name,
            Grid::new(create_plume_layer(60, 40, 20, 3, max), 60, 40).unwrap(),
        )
    };
    SimulationDataset {
        source: "synthetic".to_string(),
        layers: vec![layer("pm1", 2.0), layer("pm2", 0.5)],
        terrain_position,
        cell_size: 100.0,
    }
}

fn pixel(pixels: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let idx = (y * width + x) * 4;
    [pixels[idx], pixels[idx + 1], pixels[idx + 2], pixels[idx + 3]]
}

fn write_geotiff(path: &Path) {
    let (width, height) = (100, 100);
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let mut ds = driver
        .create_with_band_type::<f32, _>(path, width, height, 1)
        .unwrap();
    ds.set_geo_transform(&transforms::FIVE_DEGREE_BOX).unwrap();
    let mut band = ds.rasterband(1).unwrap();
    let mut buffer = Buffer::new((width, height), create_cone_dem(width, height, 2500.0));
    band.write((0, 0), (width, height), &mut buffer).unwrap();
}

fn write_simulation(path: &Path) {
    let (rows, cols) = (150, 200);
    let mut file = netcdf::create(path).unwrap();
    file.add_dimension("y", rows).unwrap();
    file.add_dimension("x", cols).unwrap();
    file.add_attribute("terrain_position", vec![-1500.0f64, -1000.0])
        .unwrap();
    file.add_attribute("simulation_dx", vec![100.0f64]).unwrap();
    for (name, max) in [("deposit_a", 1.0f32), ("deposit_b", 4.0)] {
        let mut var = file.add_variable::<f32>(name, &["y", "x"]).unwrap();
        var.put_values(&create_plume_layer(cols, rows, 75, 10, max), ..)
            .unwrap();
    }
}

// ============================================================================
// Relief pipeline
// ============================================================================

#[test]
fn test_full_raster_without_center() {
    let raster = ten_degree_raster();
    let image = render_relief(&raster, &RenderRequest::default(), None)
        .unwrap()
        .unwrap();
    assert_eq!((image.width, image.height), (200, 200));
    assert_eq!(image.pixels.len(), 200 * 200 * 4);
    assert!(image.marker.is_none());
    assert!(image.pixels.chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn test_cropped_window_marks_rebased_center() {
    let raster = ten_degree_raster();
    // 2 degrees of latitude, roughly 2 of longitude.
    let request = RenderRequest::default()
        .with_center(Some(5.0), Some(5.0))
        .unwrap()
        .with_extent(Some(222.0), Some(221.148))
        .unwrap();

    let image = render_relief(&raster, &request, None).unwrap().unwrap();
    assert!(image.width < 200 && image.height < 200);
    assert!((39..=41).contains(&image.height));

    let marker = image.marker.unwrap();
    assert!(marker.x >= 0.0 && marker.x <= image.width as f64);
    assert!(marker.y >= 0.0 && marker.y <= image.height as f64);
    assert_eq!(
        pixel(&image.pixels, image.width, marker.x as usize, marker.y as usize),
        RED
    );
}

#[test]
fn test_out_of_bounds_center_marks_centroid() {
    let raster = ten_degree_raster();
    let request = RenderRequest::default()
        .with_center(Some(50.0), Some(50.0))
        .unwrap();

    let image = render_relief(&raster, &request, None).unwrap().unwrap();
    let marker = image.marker.unwrap();
    assert!((marker.x - 100.0).abs() < 1e-6);
    assert!((marker.y - 100.0).abs() < 1e-6);
    assert_eq!(pixel(&image.pixels, 200, 100, 100), RED);
}

#[test]
fn test_degenerate_window_renders_nothing() {
    let raster = ten_degree_raster();
    let request = RenderRequest::default()
        .with_center(Some(5.0), Some(5.0))
        .unwrap()
        .with_extent(Some(0.001), Some(0.001))
        .unwrap();
    assert!(render_relief(&raster, &request, None).unwrap().is_none());
}

#[test]
fn test_zero_extent_renders_nothing() {
    let raster = ten_degree_raster();
    let request = RenderRequest::default()
        .with_center(Some(5.0), Some(5.0))
        .unwrap()
        .with_extent(Some(0.0), Some(0.0))
        .unwrap();
    assert!(render_relief(&raster, &request, None).unwrap().is_none());
}

#[test]
fn test_negative_extent_matches_positive() {
    let raster = ten_degree_raster();
    let request = |w: f64, h: f64| {
        RenderRequest::default()
            .with_center(Some(5.0), Some(5.0))
            .unwrap()
            .with_extent(Some(w), Some(h))
            .unwrap()
    };
    let positive = render_relief(&raster, &request(200.0, 150.0), None)
        .unwrap()
        .unwrap();
    let negative = render_relief(&raster, &request(-200.0, -150.0), None)
        .unwrap()
        .unwrap();
    assert_eq!(
        (negative.width, negative.height),
        (positive.width, positive.height)
    );
    assert_eq!(negative.pixels, positive.pixels);
}

#[test]
fn test_opacity_sets_alpha() {
    let raster = ten_degree_raster();
    let request = RenderRequest {
        opacity: 0.5,
        ..RenderRequest::default()
    };
    let image = render_relief(&raster, &request, None).unwrap().unwrap();
    assert!(image.pixels.chunks_exact(4).all(|p| p[3] == 128));
}

#[test]
fn test_unknown_style_is_config_error() {
    let raster = ten_degree_raster();
    let request = RenderRequest {
        style: "no-such-palette".to_string(),
        ..RenderRequest::default()
    };
    assert!(matches!(
        render_relief(&raster, &request, None),
        Err(TerrainError::InvalidConfig(_))
    ));
}

// ============================================================================
// Overlay pipeline
// ============================================================================

#[test]
fn test_overlay_marks_grid_origin() {
    let raster = fine_raster();
    let mut request = RenderRequest::default()
        .with_center(Some(4.0), Some(4.0))
        .unwrap();
    request.overlay_path = Some(PathBuf::from("synthetic"));

    let image = render_overlay(&raster, &request, &simulation([-1500.0, -1000.0]), None)
        .unwrap()
        .unwrap();
    assert!(image.width > 0 && image.height > 0);
    assert_eq!(image.pixels.len(), image.width * image.height * 4);

    // The image is flipped, so data row y lands at height - 1 - y.
    let marker = image.marker.unwrap();
    let (x, y) = (marker.x as usize, marker.y as usize);
    assert!(x < image.width && y < image.height);
    assert_eq!(pixel(&image.pixels, image.width, x, image.height - 1 - y), RED);
}

#[test]
fn test_overlay_off_raster_renders_nothing() {
    let raster = fine_raster();
    let mut request = RenderRequest::default()
        .with_center(Some(4.0), Some(4.0))
        .unwrap();
    request.overlay_path = Some(PathBuf::from("synthetic"));

    // Grid origin far west of the raster.
    let result = render_overlay(&raster, &request, &simulation([-500_000.0, 0.0]), None).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_overlay_rejects_empty_simulation() {
    let raster = fine_raster();
    let mut request = RenderRequest::default()
        .with_center(Some(4.0), Some(4.0))
        .unwrap();
    request.overlay_path = Some(PathBuf::from("synthetic"));

    let mut empty = simulation([0.0, 0.0]);
    empty.layers.clear();
    assert!(matches!(
        render_overlay(&raster, &request, &empty, None),
        Err(TerrainError::EmptySimulationGrid(_))
    ));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_flags_override_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = dir.path().join("viewer.yaml");
    std::fs::write(&yaml, "img: from-yaml.tif\nrender: gray\nangle: 45\n").unwrap();

    let args = Args::try_parse_from([
        "relief-viewer",
        "--config",
        yaml.to_str().unwrap(),
        "--render",
        "terrain",
        "--posx",
        "-16.5",
        "--posy",
        "28.2",
    ])
    .unwrap();

    let config = resolve_config(&args).unwrap();
    assert_eq!(config.img, Some(PathBuf::from("from-yaml.tif")));
    assert_eq!(config.render.as_deref(), Some("terrain"));
    assert_eq!(config.angle, Some(45.0));
    assert_eq!(config.posx, Some(-16.5));
}

#[test]
fn test_missing_yaml_file_is_io_error() {
    let args = Args::try_parse_from(["relief-viewer", "--config", "/nonexistent/viewer.yaml"])
        .unwrap();
    assert!(matches!(resolve_config(&args), Err(TerrainError::Io(_))));
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_run_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let dem = dir.path().join("dem.tif");
    let output = dir.path().join("out.png");
    write_geotiff(&dem);

    let config = ViewerConfig {
        img: Some(dem),
        posx: Some(2.5),
        posy: Some(2.5),
        width: Some(100.0),
        height: Some(100.0),
        output: Some(output.clone()),
        ..Default::default()
    };

    let outcome = run(&config).unwrap();
    assert!(matches!(outcome, RenderOutcome::Written { ref path, .. } if *path == output));
    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn test_run_with_zero_extent_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let dem = dir.path().join("dem.tif");
    let output = dir.path().join("out.png");
    write_geotiff(&dem);

    let config = ViewerConfig {
        img: Some(dem),
        posx: Some(2.5),
        posy: Some(2.5),
        width: Some(0.0),
        height: Some(0.0),
        output: Some(output.clone()),
        ..Default::default()
    };

    assert!(matches!(run(&config).unwrap(), RenderOutcome::Empty));
    assert!(!output.exists());
}

#[test]
fn test_run_with_ash_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let dem = dir.path().join("dem.tif");
    let ash = dir.path().join("ash.nc");
    let output = dir.path().join("ash.png");
    write_geotiff(&dem);
    write_simulation(&ash);

    let config = ViewerConfig {
        img: Some(dem),
        posx: Some(2.5),
        posy: Some(2.5),
        ash: Some(ash),
        alpha: Some(0.6),
        output: Some(output.clone()),
        ..Default::default()
    };

    match run(&config).unwrap() {
        RenderOutcome::Written { width, height, .. } => assert!(width > 0 && height > 0),
        RenderOutcome::Empty => panic!("expected an image"),
    }
    assert!(output.exists());
}

#[test]
fn test_run_with_custom_palette() {
    let dir = tempfile::tempdir().unwrap();
    let dem = dir.path().join("dem.tif");
    let palettes = dir.path().join("palettes.json");
    let output = dir.path().join("custom.png");
    write_geotiff(&dem);
    std::fs::write(
        &palettes,
        r##"{
            "version": "1.0",
            "styles": {
                "lava": {
                    "name": "lava",
                    "type": "gradient",
                    "stops": [
                        {"value": 0.0, "color": "#000000"},
                        {"value": 1.0, "color": "#FF4500"}
                    ]
                }
            }
        }"##,
    )
    .unwrap();

    let config = ViewerConfig {
        img: Some(dem),
        render: Some("lava".to_string()),
        palettes: Some(palettes),
        output: Some(output.clone()),
        ..Default::default()
    };
    assert!(matches!(run(&config).unwrap(), RenderOutcome::Written { .. }));
    assert!(output.exists());
}

#[test]
fn test_run_requires_image() {
    let config = ViewerConfig::default();
    assert!(matches!(run(&config), Err(TerrainError::InvalidConfig(_))));
}

#[test]
fn test_run_ash_without_center_is_rejected() {
    let config = ViewerConfig {
        img: Some(PathBuf::from("dem.tif")),
        ash: Some(PathBuf::from("ash.nc")),
        ..Default::default()
    };
    assert!(matches!(run(&config), Err(TerrainError::InvalidConfig(_))));
}
