//! Shape definitions for the document tree.

mod bezier;
mod container;
mod ellipse;
mod figure;
mod group;
mod image;
mod line;
mod path;
mod point;
mod rectangle;
mod scribble;
mod text;

pub use bezier::{CubicBezierShape, QuadraticBezierShape};
pub use container::ContainerShape;
pub use ellipse::{ArcShape, CircleShape, EllipseShape};
pub use figure::FigureShape;
pub use group::GroupShape;
pub use image::ImageShape;
pub use line::LineShape;
pub use path::PathShape;
pub use point::{PointShape, SharedPoint};
pub use rectangle::RectangleShape;
pub use scribble::ScribbleShape;
pub use text::TextShape;

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use uuid::Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// Default color for snap guides.
    pub fn guide() -> Self {
        Self::new(0, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
///
/// Styles are shared between shapes through `Rc` and never owned by a single
/// shape. Hit-testing ignores them entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
}

impl ShapeStyle {
    /// Thin unfilled stroke used for snap guides.
    pub fn guide() -> Self {
        Self {
            stroke_color: SerializableColor::guide(),
            stroke_width: 1.0,
            fill_color: None,
        }
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill_color: None,
        }
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Runtime tag of a [`Shape`], used as the bounds registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Line,
    CubicBezier,
    QuadraticBezier,
    Arc,
    Circle,
    Ellipse,
    Rectangle,
    Text,
    Image,
    Path,
    Figure,
    Group,
    Container,
    Scribble,
}

impl ShapeKind {
    /// Every concrete shape kind.
    pub const ALL: [ShapeKind; 15] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::CubicBezier,
        ShapeKind::QuadraticBezier,
        ShapeKind::Arc,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Rectangle,
        ShapeKind::Text,
        ShapeKind::Image,
        ShapeKind::Path,
        ShapeKind::Figure,
        ShapeKind::Group,
        ShapeKind::Container,
        ShapeKind::Scribble,
    ];

    /// Whether shapes of this kind own child shapes.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            ShapeKind::Path | ShapeKind::Figure | ShapeKind::Group | ShapeKind::Container
        )
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the runtime kind tag.
    fn kind(&self) -> ShapeKind;

    /// Points of this shape in hit-test order. Composite shapes aggregate
    /// their children's points.
    fn points(&self) -> Vec<SharedPoint>;

    /// Point slots owned directly by this shape, in the same order as
    /// [`ShapeTrait::points`]. Composites without own points return nothing.
    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint>;

    /// Get the shared style, if any.
    fn style(&self) -> Option<&Rc<ShapeStyle>>;

    /// Replace the shared style.
    fn set_style(&mut self, style: Option<Rc<ShapeStyle>>);
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone)]
pub enum Shape {
    Point(PointShape),
    Line(LineShape),
    CubicBezier(CubicBezierShape),
    QuadraticBezier(QuadraticBezierShape),
    Arc(ArcShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Rectangle(RectangleShape),
    Text(TextShape),
    Image(ImageShape),
    Path(PathShape),
    Figure(FigureShape),
    Group(GroupShape),
    Container(ContainerShape),
    Scribble(ScribbleShape),
}

impl Shape {
    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Point(s) => s,
            Shape::Line(s) => s,
            Shape::CubicBezier(s) => s,
            Shape::QuadraticBezier(s) => s,
            Shape::Arc(s) => s,
            Shape::Circle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Text(s) => s,
            Shape::Image(s) => s,
            Shape::Path(s) => s,
            Shape::Figure(s) => s,
            Shape::Group(s) => s,
            Shape::Container(s) => s,
            Shape::Scribble(s) => s,
        }
    }

    fn as_trait_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Point(s) => s,
            Shape::Line(s) => s,
            Shape::CubicBezier(s) => s,
            Shape::QuadraticBezier(s) => s,
            Shape::Arc(s) => s,
            Shape::Circle(s) => s,
            Shape::Ellipse(s) => s,
            Shape::Rectangle(s) => s,
            Shape::Text(s) => s,
            Shape::Image(s) => s,
            Shape::Path(s) => s,
            Shape::Figure(s) => s,
            Shape::Group(s) => s,
            Shape::Container(s) => s,
            Shape::Scribble(s) => s,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.as_trait().id()
    }

    pub fn kind(&self) -> ShapeKind {
        self.as_trait().kind()
    }

    pub fn points(&self) -> Vec<SharedPoint> {
        self.as_trait().points()
    }

    pub fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        self.as_trait_mut().point_slots_mut()
    }

    pub fn style(&self) -> Option<&Rc<ShapeStyle>> {
        self.as_trait().style()
    }

    pub fn set_style(&mut self, style: Option<Rc<ShapeStyle>>) {
        self.as_trait_mut().set_style(style);
    }

    /// Child shapes of a composite, in order. Empty for primitives.
    pub fn children(&self) -> &[Shape] {
        match self {
            Shape::Path(s) => s.figures(),
            Shape::Figure(s) => &s.shapes,
            Shape::Group(s) => &s.shapes,
            Shape::Container(s) => &s.shapes,
            _ => &[],
        }
    }

    fn children_mut(&mut self) -> &mut [Shape] {
        match self {
            Shape::Path(s) => s.figures_mut(),
            Shape::Figure(s) => &mut s.shapes,
            Shape::Group(s) => &mut s.shapes,
            Shape::Container(s) => &mut s.shapes,
            _ => &mut [],
        }
    }

    /// Get the line if this shape is a line.
    pub fn as_line(&self) -> Option<&LineShape> {
        match self {
            Shape::Line(line) => Some(line),
            _ => None,
        }
    }

    /// Find a shape by ID, searching composites depth-first.
    pub fn find(&self, id: ShapeId) -> Option<&Shape> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`Shape::find`].
    pub fn find_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        if self.id() == id {
            return Some(self);
        }
        self.children_mut()
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}

/// Collect points from `shapes` in order, keeping only the first occurrence
/// of each shared point.
pub(crate) fn unique_points<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Vec<SharedPoint> {
    let mut points: Vec<SharedPoint> = Vec::new();
    for shape in shapes {
        for point in shape.points() {
            if !points.iter().any(|p| p.ptr_eq(&point)) {
                points.push(point);
            }
        }
    }
    points
}
