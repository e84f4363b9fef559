//! Layout helpers for common educational-video patterns.
//!
//! Nothing here renders. Each helper returns a [`Group`] of positioned
//! [`Element`]s that an animation backend can turn into real objects. Text
//! extents are estimated from font size and character count, which is close
//! enough for placement relative to the frame and to other elements.

use serde::{Deserialize, Serialize};

use crate::geometry::{
    sign, BoundingBox, Point3, DOWN, FRAME_HEIGHT, FRAME_WIDTH, LEFT, ORIGIN, RIGHT, UL, UP,
};

/// Estimated glyph height per point of font size.
const TEXT_HEIGHT_PER_POINT: f64 = 0.0125;
/// Estimated glyph advance per point of font size.
const CHAR_WIDTH_PER_POINT: f64 = 0.0075;
/// Visual thickness of a stroke per unit of stroke width.
const STROKE_THICKNESS: f64 = 0.01;
/// Arrow tips are this long and set the minimum arrow thickness.
const ARROW_TIP_LENGTH: f64 = 0.35;

pub const WHITE: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Text { content: String, font_size: f64 },
    Math { tex: String, font_size: f64 },
    Line { start: Point3, end: Point3, stroke_width: f64 },
    Arrow { start: Point3, end: Point3, stroke_width: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub color: String,
    pub bounds: BoundingBox,
}

impl Element {
    /// Text centered on the origin.
    pub fn text(content: impl Into<String>, color: impl Into<String>, font_size: f64) -> Self {
        let content = content.into();
        let bounds = text_bounds(content.chars().count(), font_size);
        Self {
            kind: ElementKind::Text { content, font_size },
            color: color.into(),
            bounds,
        }
    }

    /// Typeset math centered on the origin. Width is estimated from the
    /// source length, so markup-heavy input reads wider than it renders.
    pub fn math(tex: impl Into<String>, color: impl Into<String>, font_size: f64) -> Self {
        let tex = tex.into();
        let bounds = text_bounds(tex.chars().count(), font_size);
        Self {
            kind: ElementKind::Math { tex, font_size },
            color: color.into(),
            bounds,
        }
    }

    pub fn line(start: Point3, end: Point3, color: impl Into<String>, stroke_width: f64) -> Self {
        let bounds = segment_bounds(start, end, stroke_width * STROKE_THICKNESS);
        Self {
            kind: ElementKind::Line {
                start,
                end,
                stroke_width,
            },
            color: color.into(),
            bounds,
        }
    }

    /// Arrow from `start` to `end`, pulled in by `buff` at both ends.
    pub fn arrow(
        start: Point3,
        end: Point3,
        color: impl Into<String>,
        stroke_width: f64,
        buff: f64,
    ) -> Self {
        let delta = end - start;
        let length = (delta.x * delta.x + delta.y * delta.y + delta.z * delta.z).sqrt();
        let (start, end) = if length > 2.0 * buff {
            let unit = delta * (1.0 / length);
            (start + unit * buff, end - unit * buff)
        } else {
            let mid = start + delta * 0.5;
            (mid, mid)
        };
        let bounds = segment_bounds(start, end, ARROW_TIP_LENGTH);
        Self {
            kind: ElementKind::Arrow {
                start,
                end,
                stroke_width,
            },
            color: color.into(),
            bounds,
        }
    }

    pub fn font_size(&self) -> Option<f64> {
        match self.kind {
            ElementKind::Text { font_size, .. } | ElementKind::Math { font_size, .. } => {
                Some(font_size)
            }
            _ => None,
        }
    }
}

fn text_bounds(chars: usize, font_size: f64) -> BoundingBox {
    BoundingBox::new(
        ORIGIN,
        chars as f64 * font_size * CHAR_WIDTH_PER_POINT,
        font_size * TEXT_HEIGHT_PER_POINT,
    )
}

fn segment_bounds(start: Point3, end: Point3, thickness: f64) -> BoundingBox {
    let width = (end.x - start.x).abs();
    let height = (end.y - start.y).abs();
    BoundingBox::new(
        (start + end) * 0.5,
        width.max(thickness),
        height.max(thickness),
    )
}

/// Positioning shared by everything with a bounding box.
pub trait Placement {
    fn bounds(&self) -> BoundingBox;

    fn shift_by(&mut self, by: Point3);

    /// Places `self` beside `target` in `direction`, `buff` apart, lining up
    /// the `aligned_edge` sides.
    fn next_to(
        &mut self,
        target: &BoundingBox,
        direction: Point3,
        buff: f64,
        aligned_edge: Point3,
    ) {
        let target_point = target.critical_point(aligned_edge + direction);
        let point_to_align = self.bounds().critical_point(aligned_edge - direction);
        self.shift_by(target_point - point_to_align + direction * buff);
    }

    /// Pushes `self` against the frame border in `direction`, leaving `buff`
    /// of space. Axes where `direction` is zero are left untouched.
    fn to_edge(&mut self, direction: Point3, buff: f64) {
        let frame = BoundingBox::new(ORIGIN, FRAME_WIDTH, FRAME_HEIGHT);
        let target = frame.critical_point(direction);
        let current = self.bounds().critical_point(direction);
        let axis = |t: f64, c: f64, d: f64| if d == 0.0 { 0.0 } else { t - c - buff * sign(d) };
        self.shift_by(Point3::new(
            axis(target.x, current.x, direction.x),
            axis(target.y, current.y, direction.y),
            0.0,
        ));
    }

    /// Corner variant of [`Placement::to_edge`]; `corner` is one of `UL`,
    /// `UR`, `DL`, `DR`.
    fn to_corner(&mut self, corner: Point3, buff: f64) {
        self.to_edge(corner, buff);
    }
}

impl Placement for Element {
    fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn shift_by(&mut self, by: Point3) {
        self.bounds.center += by;
        match &mut self.kind {
            ElementKind::Line { start, end, .. } | ElementKind::Arrow { start, end, .. } => {
                *start += by;
                *end += by;
            }
            ElementKind::Text { .. } | ElementKind::Math { .. } => {}
        }
    }
}

impl Placement for Node {
    fn bounds(&self) -> BoundingBox {
        match self {
            Node::Element(element) => element.bounds,
            Node::Group(group) => group.bounds(),
        }
    }

    fn shift_by(&mut self, by: Point3) {
        match self {
            Node::Element(element) => element.shift_by(by),
            Node::Group(group) => group.shift_by(by),
        }
    }
}

impl Placement for Group {
    /// Combined bounds; an empty group is a zero-sized box at the origin.
    fn bounds(&self) -> BoundingBox {
        let boxes: Vec<BoundingBox> = self.children.iter().map(Placement::bounds).collect();
        BoundingBox::union(&boxes).unwrap_or(BoundingBox::new(ORIGIN, 0.0, 0.0))
    }

    fn shift_by(&mut self, by: Point3) {
        for child in &mut self.children {
            child.shift_by(by);
        }
    }
}

/// Either a single element or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Group(Group),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            Node::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

/// Ordered collection of nodes moved and measured as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Lays children out one after another in `direction`, then centers the
    /// whole group on the origin. Where the children started is irrelevant.
    pub fn arrange(&mut self, direction: Point3, buff: f64, aligned_edge: Point3) -> &mut Self {
        if self.children.is_empty() {
            return self;
        }
        for i in 1..self.children.len() {
            let previous = self.children[i - 1].bounds();
            self.children[i].next_to(&previous, direction, buff, aligned_edge);
        }
        let center = self.bounds().center;
        self.shift_by(ORIGIN - center);
        self
    }
}

/// Options for [`make_title`].
#[derive(Debug, Clone, PartialEq)]
pub struct TitleOptions {
    pub subtitle: Option<String>,
    pub color: String,
    pub font_size: f64,
    pub subtitle_font_size: f64,
    pub buff: f64,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            subtitle: None,
            color: WHITE.to_string(),
            font_size: 48.0,
            subtitle_font_size: 28.0,
            buff: 0.3,
        }
    }
}

const SUBTITLE_GAP: f64 = 0.15;

/// Title pinned to the top edge, with an optional subtitle underneath.
pub fn make_title(text: &str, options: TitleOptions) -> Group {
    let mut title = Element::text(text, options.color.as_str(), options.font_size);
    title.to_edge(UP, options.buff);

    let Some(subtitle) = options.subtitle else {
        return Group::new([Node::from(title)]);
    };

    let mut sub = Element::text(subtitle, options.color, options.subtitle_font_size);
    sub.next_to(&title.bounds, DOWN, SUBTITLE_GAP, ORIGIN);
    Group::new([Node::from(title), Node::from(sub)])
}

/// Options for [`equation_stack`].
#[derive(Debug, Clone, PartialEq)]
pub struct StackOptions {
    /// Frame edge the stack is pushed against; `ORIGIN` leaves it centered.
    pub position: Point3,
    /// Gap between consecutive equations.
    pub buff: f64,
    /// Extra offset applied after positioning.
    pub shift: Point3,
    pub aligned_edge: Point3,
    /// Gap between the stack and the frame edge.
    pub outer_buff: f64,
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            position: RIGHT,
            buff: 0.2,
            shift: ORIGIN,
            aligned_edge: LEFT,
            outer_buff: 0.3,
        }
    }
}

/// Stacks equations top to bottom and pins the stack to a frame edge.
pub fn equation_stack(
    equations: impl IntoIterator<Item = Element>,
    options: StackOptions,
) -> Group {
    let mut stack = Group::new(equations.into_iter().map(Node::from));
    stack.arrange(DOWN, options.buff, options.aligned_edge);

    stack.to_edge(options.position, options.outer_buff);
    if !options.shift.is_origin() {
        stack.shift_by(options.shift);
    }
    stack
}

/// Options for [`make_legend`].
#[derive(Debug, Clone, PartialEq)]
pub struct LegendOptions {
    pub position: Point3,
    pub font_size: f64,
    pub buff: f64,
    pub line_width: f64,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            position: UL,
            font_size: 16.0,
            buff: 0.3,
            line_width: 2.5,
        }
    }
}

const SWATCH_HALF_WIDTH: f64 = 0.3;
const LEGEND_GAP: f64 = 0.1;

/// Color-coded legend: one `swatch label` row per `(color, label)` item,
/// tucked into a frame corner.
pub fn make_legend<C, L>(items: impl IntoIterator<Item = (C, L)>, options: LegendOptions) -> Group
where
    C: Into<String>,
    L: Into<String>,
{
    let mut rows = Group::default();
    for (color, label) in items {
        let color = color.into();
        let swatch = Element::line(
            LEFT * SWATCH_HALF_WIDTH,
            RIGHT * SWATCH_HALF_WIDTH,
            color.as_str(),
            options.line_width,
        );
        let label = Element::text(label, color, options.font_size);
        let mut row = Group::new([Node::from(swatch), Node::from(label)]);
        row.arrange(RIGHT, LEGEND_GAP, ORIGIN);
        rows.push(row);
    }

    rows.arrange(DOWN, LEGEND_GAP, LEFT);
    rows.to_corner(options.position, options.buff);
    rows
}

/// Options for [`labeled_arrow`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowOptions {
    pub color: String,
    pub font_size: f64,
    pub label_buff: f64,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            color: WHITE.to_string(),
            font_size: 24.0,
            label_buff: 0.1,
        }
    }
}

const ARROW_STROKE_WIDTH: f64 = 2.0;
const ARROW_END_BUFF: f64 = 0.1;

/// Arrow with a text label sitting above it.
pub fn labeled_arrow(start: Point3, end: Point3, label: &str, options: ArrowOptions) -> Group {
    let arrow = Element::arrow(
        start,
        end,
        options.color.as_str(),
        ARROW_STROKE_WIDTH,
        ARROW_END_BUFF,
    );
    let mut text = Element::text(label, options.color, options.font_size);
    text.next_to(&arrow.bounds, UP, options.label_buff, ORIGIN);
    Group::new([Node::from(arrow), Node::from(text)])
}
