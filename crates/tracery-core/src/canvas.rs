//! Canvas document and the query front door tools call into.

use crate::bounds::BoundsRegistry;
use crate::camera::Camera;
use crate::error::HitResult;
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::selection::SelectionState;
use crate::settings::EditorSettings;
use crate::shapes::{ContainerShape, Shape, ShapeId, SharedPoint};
use crate::snap::{
    apply_filters, clear_filters, FilterContext, GridSnapPointFilter, LineSnapPointFilter,
    PointFilter,
};
use kurbo::{Point, Rect};

/// A page being edited: the current layer plus a transient working layer.
#[derive(Debug, Clone)]
pub struct CanvasDocument {
    /// Document name.
    pub name: String,
    /// Page width; guides span it.
    pub width: f64,
    /// Page height.
    pub height: f64,
    /// Layer tools draw into and queries run against.
    pub current: ContainerShape,
    /// Transient shapes such as snap guides. Never persisted or hit-tested.
    pub working: ContainerShape,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl CanvasDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            name: "Untitled".to_string(),
            width,
            height,
            current: ContainerShape::new("Layer"),
            working: ContainerShape::new("Working"),
        }
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.current.add_shape(shape);
    }

    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        self.current.remove_shape(id)
    }

    /// Find a shape anywhere in the current layer.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.current.shapes.iter().find_map(|shape| shape.find(id))
    }

    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.current
            .shapes
            .iter_mut()
            .find_map(|shape| shape.find_mut(id))
    }

    /// Top-level shapes of the current layer, in hit-test order.
    pub fn shapes(&self) -> &[Shape] {
        &self.current.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }
}

/// Runtime canvas state: the document, view, selection and the hit-test
/// engine with its snapping filters.
///
/// Points passed in are in document coordinates; tolerances come from
/// [`EditorSettings::hit_radius`] in screen pixels and are divided by the
/// camera zoom.
#[derive(Debug)]
pub struct Canvas {
    pub document: CanvasDocument,
    pub camera: Camera,
    pub selection: SelectionState,
    settings: EditorSettings,
    hit: HitTest,
    filters: Vec<Box<dyn PointFilter>>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a canvas with an empty document and default settings.
    pub fn new() -> Self {
        Self::with_document(CanvasDocument::default())
    }

    pub fn with_document(document: CanvasDocument) -> Self {
        Self::with_parts(document, EditorSettings::default(), BoundsRegistry::with_defaults())
    }

    /// Create a canvas with explicit settings and bounds registry.
    pub fn with_parts(
        document: CanvasDocument,
        settings: EditorSettings,
        registry: BoundsRegistry,
    ) -> Self {
        let filters = build_filters(&settings);
        Self {
            document,
            camera: Camera::new(),
            selection: SelectionState::new(),
            settings,
            hit: HitTest::new(registry),
            filters,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Replace the settings, rebuilding the snapping filters.
    pub fn set_settings(&mut self, settings: EditorSettings) {
        self.clear_guides();
        self.filters = build_filters(&settings);
        self.settings = settings;
    }

    pub fn hit_test(&self) -> &HitTest {
        &self.hit
    }

    /// First existing point under `target`.
    pub fn try_to_get_point(
        &self,
        target: Point,
        modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        self.hit.try_get_point(
            self.document.shapes(),
            target,
            self.settings.hit_radius,
            self.camera.scale(),
            modifier,
        )
    }

    /// Shape to select for a click at `target`.
    pub fn contains(&self, target: Point, modifier: ModifierFlags) -> HitResult<Option<&Shape>> {
        self.hit.contains(
            self.document.shapes(),
            target,
            self.settings.hit_radius,
            self.camera.scale(),
            modifier,
        )
    }

    /// First shape touched by `rect`.
    pub fn overlaps(&self, rect: Rect, modifier: ModifierFlags) -> HitResult<Option<&Shape>> {
        self.hit.overlaps(
            self.document.shapes(),
            rect,
            self.settings.hit_radius,
            self.camera.scale(),
            modifier,
        )
    }

    /// The point a drawing tool should use at (`x`, `y`).
    ///
    /// With `connect`, an existing point within `radius` screen pixels is
    /// reused so the new shape shares it; otherwise a fresh point is made.
    pub fn get_next_point(&self, x: f64, y: f64, connect: bool, radius: f64) -> HitResult<SharedPoint> {
        if connect {
            let existing = self.hit.try_get_point(
                self.document.shapes(),
                Point::new(x, y),
                radius,
                self.camera.scale(),
                ModifierFlags::empty(),
            )?;
            if let Some(point) = existing {
                log::debug!("Connecting to existing point at {:?}", point.position());
                return Ok(point);
            }
        }
        Ok(SharedPoint::new(x, y))
    }

    /// The point a drawing tool should use at (`x`, `y`), connecting and
    /// measuring tolerance as the editor settings say.
    pub fn next_point(&self, x: f64, y: f64) -> HitResult<SharedPoint> {
        self.get_next_point(x, y, self.settings.connect_points, self.settings.hit_radius)
    }

    /// Select whatever is under `target`.
    ///
    /// Shift toggles the hit shape in the selection; otherwise the hit
    /// replaces the selection and a miss clears it. Returns the hit shape.
    pub fn select_at(&mut self, target: Point, modifier: ModifierFlags) -> HitResult<Option<ShapeId>> {
        let found = self.contains(target, modifier)?.map(Shape::id);
        let toggle = modifier.contains(ModifierFlags::SHIFT);
        match found {
            Some(id) if toggle => {
                self.selection.toggle(id);
            }
            Some(id) => self.selection.select(id),
            None if !toggle => self.selection.clear(),
            None => {}
        }
        Ok(found)
    }

    /// Replace the selection with every top-level shape touched by `rect`.
    /// Returns how many were selected.
    pub fn select_in_rect(&mut self, rect: Rect) -> HitResult<usize> {
        let ids: Vec<ShapeId> = self
            .hit
            .overlaps_all(
                self.document.shapes(),
                rect,
                self.settings.hit_radius,
                self.camera.scale(),
                ModifierFlags::empty(),
            )?
            .into_iter()
            .map(Shape::id)
            .collect();
        self.selection.set(ids);
        Ok(self.selection.len())
    }

    /// Update the hovered shape for a pointer at `target`.
    pub fn hover_at(&mut self, target: Point) -> HitResult<Option<ShapeId>> {
        let found = self.contains(target, ModifierFlags::empty())?.map(Shape::id);
        self.selection.set_hovered(found);
        Ok(found)
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// Run a pointer position through the snapping filters, replacing the
    /// guides shown for the previous position. The first filter that snaps
    /// decides the point. Returns whether it snapped.
    pub fn filter_point(&mut self, x: &mut f64, y: &mut f64) -> bool {
        let Self {
            document, filters, ..
        } = self;
        let mut ctx = FilterContext::new(
            &document.current,
            &mut document.working,
            document.width,
            document.height,
        );
        clear_filters(filters, &mut ctx);
        apply_filters(filters, &mut ctx, x, y)
    }

    /// Remove every snapping guide.
    pub fn clear_guides(&mut self) {
        let Self {
            document, filters, ..
        } = self;
        let mut ctx = FilterContext::new(
            &document.current,
            &mut document.working,
            document.width,
            document.height,
        );
        clear_filters(filters, &mut ctx);
    }

    /// Make slot `slot` of shape `shape_id` share `point`.
    ///
    /// Slots follow the shape's point order. Returns false if the shape or
    /// slot does not exist.
    pub fn connect(&mut self, shape_id: ShapeId, slot: usize, point: SharedPoint) -> bool {
        let Some(shape) = self.document.get_shape_mut(shape_id) else {
            log::warn!("Cannot connect: no shape {shape_id}");
            return false;
        };
        let mut slots = shape.point_slots_mut();
        let Some(target) = slots.get_mut(slot) else {
            log::warn!("Cannot connect: shape {shape_id} has no point slot {slot}");
            return false;
        };
        **target = point;
        true
    }
}

fn build_filters(settings: &EditorSettings) -> Vec<Box<dyn PointFilter>> {
    vec![
        Box::new(GridSnapPointFilter::new(settings.grid.clone())),
        Box::new(LineSnapPointFilter::new(settings.line.clone())),
    ]
}
