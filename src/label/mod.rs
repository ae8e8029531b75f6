mod layout;
mod style;
mod tooltip;

pub use layout::{LabelLayout, LabelLine, LINE_HEIGHT};
pub use style::{LabelStyle, Rgba};
pub use tooltip::{billboard_scale, ScaleFactors, Tooltip};

use crate::math::{Point3, Vector3};

/// Text-to-bitmap capability.
///
/// Labels never draw anything themselves; the host turns a laid-out string
/// into whatever bitmap type it uses.
pub trait TextRasterizer {
    /// Image type produced for a label.
    type Bitmap;

    /// Rendered width of one line of text in pixels.
    fn measure_line(&self, line: &str, style: &LabelStyle) -> f64;

    /// Draws `layout` into a `layout.width` by `layout.height` image.
    fn rasterize(&mut self, layout: &LabelLayout, style: &LabelStyle) -> Self::Bitmap;
}

/// Scene-attachment capability.
///
/// Places label nodes in the host's scene graph. Labels only compute geometry
/// and drive these calls.
pub trait SceneAttachment {
    /// Handle to a node in the host scene.
    type Node: Copy + Eq + std::fmt::Debug;
    /// Image type a billboard displays.
    type Bitmap;

    /// Creates an empty, detached grouping node.
    fn create_group(&mut self) -> Self::Node;

    /// Creates a detached, screen-facing node showing `bitmap`.
    fn create_billboard(&mut self, bitmap: Self::Bitmap) -> Self::Node;

    /// Swaps the image shown by an existing billboard.
    fn replace_bitmap(&mut self, billboard: Self::Node, bitmap: Self::Bitmap);

    fn attach(&mut self, parent: Self::Node, child: Self::Node);

    fn detach(&mut self, parent: Self::Node, child: Self::Node);

    /// Sets a node's position relative to its parent.
    fn set_position(&mut self, node: Self::Node, position: Point3);

    /// A node's position relative to its parent.
    fn position(&self, node: Self::Node) -> Point3;

    fn set_scale(&mut self, node: Self::Node, scale: Vector3);

    fn set_visible(&mut self, node: Self::Node, visible: bool);

    /// A node's position in world coordinates.
    fn world_position(&self, node: Self::Node) -> Point3;

    /// World position of the active viewpoint (camera).
    fn viewpoint_position(&self) -> Point3;
}
