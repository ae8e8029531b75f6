use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};

use super::{LabelLayout, LabelStyle, SceneAttachment, TextRasterizer};

/// World units per pixel per unit of viewpoint distance, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self {
            x: 0.0025,
            y: 0.0025,
            z: 0.0020,
        }
    }
}

/// Scale that keeps a `width` x `height` pixel billboard at a constant
/// on-screen size when seen from `distance`.
#[must_use]
pub fn billboard_scale(width: f64, height: f64, distance: f64, factors: &ScaleFactors) -> Vector3 {
    let aspect = if width > 0.0 { height / width } else { 1.0 };
    Vector3::new(
        factors.x * distance * width,
        factors.y * distance * width * aspect,
        factors.z * distance,
    )
}

struct Billboard<N> {
    node: N,
    width: f64,
    height: f64,
}

/// A text label that follows a parent node and keeps its on-screen size.
///
/// The tooltip owns an anchor group attached under the parent; the label
/// billboard hangs off the anchor. Call [`Tooltip::update`] whenever the
/// viewpoint or the parent moves.
pub struct Tooltip<S: SceneAttachment> {
    anchor: S::Node,
    parent: Option<S::Node>,
    billboard: Option<Billboard<S::Node>>,
    factors: ScaleFactors,
}

impl<S: SceneAttachment> Tooltip<S> {
    /// Creates an empty tooltip attached under `parent`.
    pub fn new(scene: &mut S, parent: S::Node) -> Self {
        let anchor = scene.create_group();
        scene.attach(parent, anchor);
        Self {
            anchor,
            parent: Some(parent),
            billboard: None,
            factors: ScaleFactors::default(),
        }
    }

    #[must_use]
    pub fn with_scale_factors(mut self, factors: ScaleFactors) -> Self {
        self.factors = factors;
        self
    }

    /// The group node everything else hangs off.
    #[must_use]
    pub fn anchor(&self) -> S::Node {
        self.anchor
    }

    #[must_use]
    pub fn parent(&self) -> Option<S::Node> {
        self.parent
    }

    /// Billboard node, once text has been set.
    #[must_use]
    pub fn billboard(&self) -> Option<S::Node> {
        self.billboard.as_ref().map(|b| b.node)
    }

    /// Pixel size of the current label.
    #[must_use]
    pub fn label_size(&self) -> Option<(f64, f64)> {
        self.billboard.as_ref().map(|b| (b.width, b.height))
    }

    /// Moves the tooltip under another parent.
    pub fn set_parent(&mut self, scene: &mut S, parent: S::Node) {
        if let Some(old) = self.parent.take() {
            scene.detach(old, self.anchor);
        }
        scene.attach(parent, self.anchor);
        self.parent = Some(parent);
    }

    /// Detaches the tooltip from its parent, if any.
    pub fn remove_from_parent(&mut self, scene: &mut S) {
        if let Some(old) = self.parent.take() {
            scene.detach(old, self.anchor);
        }
    }

    pub fn show(&self, scene: &mut S, visible: bool) {
        scene.set_visible(self.anchor, visible);
    }

    /// Sets the label text, creating the billboard on first use.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the style has invalid metrics
    /// or the laid-out label has no width.
    pub fn set_text<R>(
        &mut self,
        scene: &mut S,
        rasterizer: &mut R,
        text: &str,
        style: &LabelStyle,
    ) -> Result<()>
    where
        R: TextRasterizer<Bitmap = S::Bitmap>,
    {
        let layout = LabelLayout::compute(text, style, rasterizer)?;
        if layout.width <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "label {text:?} has zero width"
            ))
            .into());
        }
        let bitmap = rasterizer.rasterize(&layout, style);

        match &mut self.billboard {
            Some(billboard) => {
                scene.replace_bitmap(billboard.node, bitmap);
                billboard.width = layout.width;
                billboard.height = layout.height;
            }
            None => {
                let node = scene.create_billboard(bitmap);
                scene.attach(self.anchor, node);
                debug!(?node, "tooltip: billboard created");
                self.billboard = Some(Billboard {
                    node,
                    width: layout.width,
                    height: layout.height,
                });
            }
        }
        self.update(scene);
        Ok(())
    }

    /// Moves the anchor relative to the parent. Call [`Tooltip::update`] afterwards.
    pub fn set_position(&self, scene: &mut S, position: Point3) {
        scene.set_position(self.anchor, position);
    }

    #[must_use]
    pub fn position(&self, scene: &S) -> Point3 {
        scene.position(self.anchor)
    }

    /// Rescales the billboard for the current viewpoint distance.
    pub fn update(&self, scene: &mut S) {
        let Some(billboard) = &self.billboard else {
            return;
        };
        let distance = (scene.world_position(self.anchor) - scene.viewpoint_position()).norm();
        let scale = billboard_scale(billboard.width, billboard.height, distance, &self.factors);
        trace!(distance, ?scale, "tooltip: rescaled");
        scene.set_scale(billboard.node, scale);
    }
}
