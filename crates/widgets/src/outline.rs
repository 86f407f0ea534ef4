//! Title bar shapes, one pure function per [`MenuBarStyle`].
//!
//! Coordinates are computed in `f64` and stored as `f32` points.

use menu_config::MenuBarStyle;
use menu_core::Point;

/// Horizontal gap between the title text and the end of a title-sized shape.
const TITLE_GAP: f64 = 5.0;
/// Extra width of the diagonal cut on the adaptive and diagonal styles.
const DIAGONAL_RUN: f64 = 25.0;
/// Share of the title height covered by the full-width band / back-box.
const BAND: f64 = 0.6;
/// Where underline bars start, as a share of the title height.
const UNDERLINE_TOP: f64 = 0.91;

/// Inputs every shape is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleFrame {
    pub x: f64,
    pub y: f64,
    /// Rendered title size.
    pub title_width:  f64,
    pub title_height: f64,
    /// Full bar width, usually the menu width.
    pub bar_width: f64,
    pub offset_x:  f64,
}

impl TitleFrame {
    /// Right edge of the full-width shapes.
    fn bar_right(&self) -> f64 {
        self.x + self.bar_width - 1.0
    }

    /// Right edge of the title-sized shapes.
    fn title_right(&self) -> f64 {
        self.x + self.title_width + TITLE_GAP + self.offset_x
    }
}

/// A computed shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Point>,
    /// Side of the square the back-box is fitted in.
    pub cross_size: f64,
    /// Height added below the title by the shape.
    pub dy: i32,
}

pub type Geometry = fn(&TitleFrame) -> Outline;

/// Shape function for `style`.
pub fn geometry(style: MenuBarStyle) -> Geometry {
    match style {
        MenuBarStyle::Adaptive => adaptive,
        MenuBarStyle::Simple => simple,
        MenuBarStyle::TitleOnly => title_only,
        MenuBarStyle::TitleOnlyDiagonal => title_only_diagonal,
        MenuBarStyle::None => none,
        MenuBarStyle::Underline => underline,
        MenuBarStyle::UnderlineTitle => underline_title,
    }
}

pub fn compute(style: MenuBarStyle, frame: &TitleFrame) -> Outline {
    geometry(style)(frame)
}

/// Styles without a filled band are read against the menu background
/// rather than the bar's own colour.
pub fn uses_menu_background(style: MenuBarStyle) -> bool {
    matches!(
        style,
        MenuBarStyle::None | MenuBarStyle::Underline | MenuBarStyle::UnderlineTitle
    )
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x as f32, y as f32)
}

/// ```text
/// A-------------------B
/// |****             x |   0.6 h
/// |      D------------C
/// F----E/
/// ```
fn adaptive(f: &TitleFrame) -> Outline {
    let band = f.y + f.title_height * BAND;
    Outline {
        points: vec![
            pt(f.x, f.y),
            pt(f.bar_right(), f.y),
            pt(f.bar_right(), band),
            pt(f.x + f.title_width + DIAGONAL_RUN + f.offset_x, band),
            pt(f.title_right(), f.y + f.title_height),
            pt(f.x, f.y + f.title_height),
        ],
        cross_size: f.title_height * BAND,
        dy: 0,
    }
}

/// ```text
/// A-------------------B
/// |****             x |
/// D-------------------C
/// ```
fn simple(f: &TitleFrame) -> Outline {
    let bottom = f.y + f.title_height;
    Outline {
        points: vec![
            pt(f.x, f.y),
            pt(f.bar_right(), f.y),
            pt(f.bar_right(), bottom),
            pt(f.x, bottom),
        ],
        cross_size: f.title_height,
        dy: 0,
    }
}

/// ```text
/// A-----B
/// | *** |           x
/// D-----C
/// ```
fn title_only(f: &TitleFrame) -> Outline {
    let bottom = f.y + f.title_height;
    Outline {
        points: vec![
            pt(f.x, f.y),
            pt(f.title_right(), f.y),
            pt(f.title_right(), bottom),
            pt(f.x, bottom),
        ],
        cross_size: f.title_height * BAND,
        dy: 0,
    }
}

/// ```text
/// A--------B
/// | **** /          x
/// D-----C
/// ```
fn title_only_diagonal(f: &TitleFrame) -> Outline {
    let bottom = f.y + f.title_height;
    Outline {
        points: vec![
            pt(f.x, f.y),
            pt(f.x + f.title_width + DIAGONAL_RUN + f.offset_x, f.y),
            pt(f.title_right(), bottom),
            pt(f.x, bottom),
        ],
        cross_size: f.title_height * BAND,
        dy: 0,
    }
}

/// ```text
/// A------------------B
///  ****             x
/// ```
fn none(f: &TitleFrame) -> Outline {
    Outline {
        points: vec![pt(f.x, f.y), pt(f.bar_right(), f.y)],
        cross_size: f.title_height * BAND,
        dy: 0,
    }
}

/// ```text
///  ****             x
/// A-------------------B
/// D-------------------C
/// ```
fn underline(f: &TitleFrame) -> Outline {
    underline_to(f, f.bar_right(), 4)
}

/// ```text
///  ****               x
/// A----B
/// D----C
/// ```
fn underline_title(f: &TitleFrame) -> Outline {
    underline_to(f, f.title_right(), 3)
}

fn underline_to(f: &TitleFrame, right: f64, dy: i32) -> Outline {
    let top = f.y + UNDERLINE_TOP * f.title_height + f64::from(dy);
    let bottom = f.y + f.title_height + f64::from(dy);
    Outline {
        points: vec![pt(f.x, top), pt(right, top), pt(right, bottom), pt(f.x, bottom)],
        cross_size: BAND * f.title_height,
        dy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: TitleFrame = TitleFrame {
        x: 0.0,
        y: 0.0,
        title_width: 100.0,
        title_height: 50.0,
        bar_width: 600.0,
        offset_x: 5.0,
    };

    fn xy(outline: &Outline) -> Vec<(f32, f32)> {
        outline.points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn point_counts() {
        let expected = [
            (MenuBarStyle::Adaptive, 6),
            (MenuBarStyle::Simple, 4),
            (MenuBarStyle::TitleOnly, 4),
            (MenuBarStyle::TitleOnlyDiagonal, 4),
            (MenuBarStyle::None, 2),
            (MenuBarStyle::Underline, 4),
            (MenuBarStyle::UnderlineTitle, 4),
        ];
        for (style, count) in expected {
            assert_eq!(compute(style, &FRAME).points.len(), count, "{style}");
        }
    }

    #[test]
    fn adaptive_shape() {
        let o = compute(MenuBarStyle::Adaptive, &FRAME);
        assert_eq!(
            xy(&o),
            vec![(0.0, 0.0), (599.0, 0.0), (599.0, 30.0), (130.0, 30.0), (110.0, 50.0), (0.0, 50.0)]
        );
        assert_eq!(o.cross_size, 30.0);
        assert_eq!(o.dy, 0);
    }

    #[test]
    fn simple_cross_is_full_height() {
        let o = compute(MenuBarStyle::Simple, &FRAME);
        assert_eq!(xy(&o), vec![(0.0, 0.0), (599.0, 0.0), (599.0, 50.0), (0.0, 50.0)]);
        assert_eq!(o.cross_size, 50.0);
    }

    #[test]
    fn title_shapes_follow_text_width() {
        let o = compute(MenuBarStyle::TitleOnly, &FRAME);
        assert_eq!(xy(&o), vec![(0.0, 0.0), (110.0, 0.0), (110.0, 50.0), (0.0, 50.0)]);

        let o = compute(MenuBarStyle::TitleOnlyDiagonal, &FRAME);
        assert_eq!(xy(&o), vec![(0.0, 0.0), (130.0, 0.0), (110.0, 50.0), (0.0, 50.0)]);
    }

    #[test]
    fn underlines_sit_below_the_title() {
        let o = compute(MenuBarStyle::Underline, &FRAME);
        assert_eq!(xy(&o), vec![(0.0, 49.5), (599.0, 49.5), (599.0, 54.0), (0.0, 54.0)]);
        assert_eq!(o.dy, 4);

        let o = compute(MenuBarStyle::UnderlineTitle, &FRAME);
        assert_eq!(xy(&o), vec![(0.0, 48.5), (110.0, 48.5), (110.0, 53.0), (0.0, 53.0)]);
        assert_eq!(o.dy, 3);
    }

    #[test]
    fn none_is_a_single_edge() {
        let o = compute(MenuBarStyle::None, &FRAME);
        assert_eq!(xy(&o), vec![(0.0, 0.0), (599.0, 0.0)]);
        assert_eq!(o.cross_size, 30.0);
    }

    #[test]
    fn menu_background_styles() {
        let on_menu: Vec<_> = MenuBarStyle::ALL
            .into_iter()
            .filter(|s| uses_menu_background(*s))
            .collect();
        assert_eq!(
            on_menu,
            vec![MenuBarStyle::None, MenuBarStyle::Underline, MenuBarStyle::UnderlineTitle]
        );
    }
}
