//! The per-render configuration aggregate.

use tracing::{info, warn};

use terrain_common::{
    GeoPoint, Grid, PixelPoint, PixelWindow, RasterMetadata, RenderRequest, TerrainResult,
};

use crate::geotransform::GeoTransformContext;
use crate::window::{capped_extent_degrees, extract_window, ExtractedWindow};

/// Outcome of resolving the requested center against the raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CenterResolution {
    /// The requested center lies inside the raster.
    Inside(GeoPoint),
    /// The requested center was outside and the centroid was used instead.
    Substituted { requested: GeoPoint, centroid: GeoPoint },
}

impl CenterResolution {
    pub fn point(&self) -> GeoPoint {
        match self {
            CenterResolution::Inside(point) => *point,
            CenterResolution::Substituted { centroid, .. } => *centroid,
        }
    }
}

/// Raster metadata and user request, plus the geometry derived from them.
///
/// Derived fields start empty and are filled by [`RenderContext::resolve_center`]
/// and [`RenderContext::crop`].
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub metadata: RasterMetadata,
    pub request: RenderRequest,
    pub geo: GeoTransformContext,
    pub center: Option<GeoPoint>,
    pub extent_degrees: Option<(f64, f64)>,
    pub center_pixel: Option<PixelPoint>,
    pub window: Option<PixelWindow>,
}

impl RenderContext {
    /// Validate the request and derive the raster geometry.
    pub fn new(metadata: RasterMetadata, request: RenderRequest) -> TerrainResult<Self> {
        request.validate()?;
        let geo = GeoTransformContext::from_metadata(&metadata)?;
        Ok(Self {
            metadata,
            request,
            geo,
            center: None,
            extent_degrees: None,
            center_pixel: None,
            window: None,
        })
    }

    /// Resolve the requested center, if any.
    ///
    /// A center outside the raster is replaced by the bounding box
    /// centroid and a warning listing the raster extrema is logged.
    pub fn resolve_center(&mut self) -> Option<CenterResolution> {
        let requested = self.request.center?;
        let resolution = match self.geo.locate_center(requested) {
            Ok(point) => CenterResolution::Inside(point),
            Err(err) => {
                let centroid = self.geo.centroid();
                warn!(
                    error = %err,
                    centroid_lon = centroid.lon,
                    centroid_lat = centroid.lat,
                    "Center outside raster, using centroid"
                );
                CenterResolution::Substituted { requested, centroid }
            }
        };

        let center = resolution.point();
        self.center = Some(center);
        self.center_pixel = Some(self.geo.geo_to_pixel(&center));
        Some(resolution)
    }

    /// Crop the elevation grid when both a center and an extent are known.
    ///
    /// Returns `None` when either is missing; the caller then renders the
    /// whole raster.
    pub fn crop(&mut self, elevation: &Grid) -> Option<ExtractedWindow> {
        let center = self.center?;
        let extent = self.request.extent?;

        let extracted = extract_window(elevation, &self.geo, &center, &extent);
        self.extent_degrees = Some(capped_extent_degrees(&extent, &self.geo));
        self.center_pixel = Some(extracted.center);
        self.window = Some(extracted.window);

        info!(
            width = extracted.window.width(),
            height = extracted.window.height(),
            "Cropped elevation window"
        );
        Some(extracted)
    }
}
