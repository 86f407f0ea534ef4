use crate::host::MenuHost;
use crate::outline::{self, TitleFrame};
use menu_config::{MenuBarStyle, Position};
use menu_core::{InputEvent, MenuError, Point, Rect, Result, JOY_BUTTON_BACK};
use menu_renderer::Surface;
use menu_theme::{Color, TitleStyle};
use std::fmt;
use tracing::{debug, warn};

/// Gap between the back-box and the square it is fitted in (px).
const BACKBOX_MARGIN: f64 = 4.0;
/// Per-channel difference below which title and background look alike.
const CONTRAST_TOLERANCE: u8 = 5;

/// What the back-box does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxMode {
    /// Root menu: a cross that closes the menu.
    #[default]
    Close,
    /// Submenu: an arrow that goes back one level.
    Back,
}

/// How close the title colour is to the colour behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast {
    Equal,
    Similar,
}

/// Compare title and background colours; `None` means readable.
pub fn title_contrast(font: Color, background: Color) -> Option<Contrast> {
    let diff = font.rgb_distance(background);
    if diff.iter().any(|d| *d >= CONTRAST_TOLERANCE) {
        return None;
    }
    if diff == [0, 0, 0] {
        Some(Contrast::Equal)
    } else {
        Some(Contrast::Similar)
    }
}

/// Inputs the cached geometry was computed from.
#[derive(Debug, Clone, PartialEq)]
struct RenderKey {
    menu_id:    String,
    x:          i32,
    y:          i32,
    title:      String,
    font_color: Color,
    at_root:    bool,
    visible:    bool,
}

/// Title bar of a menu.
///
/// Draws one of seven [`MenuBarStyle`] shapes behind the title and, when
/// enabled, a back-box button: a cross at the root menu, an arrow inside a
/// submenu.  Geometry is recomputed lazily; [`MenuBar::render`] skips the
/// work while the inputs it depends on are unchanged.
pub struct MenuBar {
    id:                   String,
    title:                String,
    width:                i32,
    offset:               (f32, f32),
    background_color:     Color,
    style:                MenuBarStyle,
    font_color:           Color,
    font_size:            u16,
    backbox:              bool,
    backbox_border_width: u32,
    modify_scrollarea:    bool,
    floating:             bool,

    mouse_enabled:       bool,
    joystick_enabled:    bool,
    touchscreen_enabled: bool,
    readonly:            bool,
    visible:             bool,

    rect:          Rect,
    box_mode:      BoxMode,
    polygon:       Vec<Point>,
    backbox_rect:  Option<Rect>,
    backbox_glyph: Vec<Point>,
    mouse_over:    bool,
    render_key:    Option<RenderKey>,

    on_return: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for MenuBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuBar")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("style", &self.style)
            .field("rect", &self.rect)
            .field("box_mode", &self.box_mode)
            .field("polygon", &self.polygon)
            .field("backbox_rect", &self.backbox_rect)
            .finish_non_exhaustive()
    }
}

impl MenuBar {
    pub fn new(
        title: impl Into<String>,
        width: i32,
        background_color: Color,
        style: MenuBarStyle,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            width,
            offset: (0.0, 0.0),
            background_color,
            style,
            font_color: Color::WHITE,
            font_size: 40,
            backbox: false,
            backbox_border_width: 1,
            modify_scrollarea: true,
            floating: false,
            mouse_enabled: true,
            joystick_enabled: true,
            touchscreen_enabled: false,
            readonly: false,
            visible: true,
            rect: Rect::default(),
            box_mode: BoxMode::default(),
            polygon: Vec::new(),
            backbox_rect: None,
            backbox_glyph: Vec::new(),
            mouse_over: false,
            render_key: None,
            on_return: None,
        }
    }

    /// Bar configured from a theme's title settings.
    pub fn from_theme(title: impl Into<String>, width: i32, theme: &TitleStyle) -> Self {
        Self::new(title, width, theme.background, theme.style)
            .with_font(theme.font_color, theme.font_size)
            .with_offset(theme.offset.0, theme.offset.1)
            .with_back_box(theme.close_button)
            .with_modify_scrollarea(theme.modify_scrollarea)
    }

    // ── Builder ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_font(mut self, color: Color, size: u16) -> Self {
        self.font_color = color;
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = (x, y);
        self
    }

    /// Request the close/back button.
    #[must_use]
    pub fn with_back_box(mut self, backbox: bool) -> Self {
        self.backbox = backbox;
        self
    }

    /// Let the adaptive style shrink the scroll area's east scrollbar.
    #[must_use]
    pub fn with_modify_scrollarea(mut self, modify: bool) -> Self {
        self.modify_scrollarea = modify;
        self
    }

    /// Callback run when the back-box is activated.
    #[must_use]
    pub fn on_return(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_return = Some(Box::new(callback));
        self
    }

    // ── Setters ───────────────────────────────────────────────────────────────

    /// Change the title and its offset.  Geometry follows on the next render.
    pub fn set_title(&mut self, title: impl Into<String>, offset_x: f32, offset_y: f32) -> &mut Self {
        self.title = title.into();
        if self.offset != (offset_x, offset_y) {
            self.offset = (offset_x, offset_y);
            self.invalidate();
        }
        self
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    /// Border width of the back-box, in pixels.
    pub fn set_backbox_border_width(&mut self, width: u32) -> Result<()> {
        if width == 0 {
            return Err(MenuError::Range(
                "back-box border width must be greater than zero".into(),
            ));
        }
        self.backbox_border_width = width;
        Ok(())
    }

    /// A floating bar sits over the content and takes no layout height.
    pub fn set_float(&mut self, floating: bool) {
        if self.floating != floating {
            self.floating = floating;
            self.invalidate();
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    pub fn set_mouse_enabled(&mut self, enabled: bool) {
        self.mouse_enabled = enabled;
    }

    pub fn set_joystick_enabled(&mut self, enabled: bool) {
        self.joystick_enabled = enabled;
    }

    pub fn set_touchscreen_enabled(&mut self, enabled: bool) {
        self.touchscreen_enabled = enabled;
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn style(&self) -> MenuBarStyle {
        self.style
    }

    /// Title offset `(x, y)` in whole pixels.
    pub fn title_offset(&self) -> (i32, i32) {
        (self.offset.0 as i32, self.offset.1 as i32)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Layout height; zero while floating.
    pub fn height(&self) -> i32 {
        if self.floating {
            0
        } else {
            self.rect.height
        }
    }

    pub fn box_mode(&self) -> BoxMode {
        self.box_mode
    }

    /// Bar outline from the last render.
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    pub fn backbox_rect(&self) -> Option<Rect> {
        self.backbox_rect
    }

    /// Cross (9 points) or arrow (8 points) inside the back-box.
    pub fn backbox_glyph(&self) -> &[Point] {
        &self.backbox_glyph
    }

    pub fn is_mouse_over(&self) -> bool {
        self.mouse_over
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // ── Geometry ──────────────────────────────────────────────────────────────

    fn invalidate(&mut self) {
        self.render_key = None;
    }

    /// Recompute the geometry if any input changed.
    ///
    /// Returns `false` when the cached geometry is still current and nothing
    /// was recomputed.
    pub fn render(&mut self, host: &dyn MenuHost) -> bool {
        let at_root = host.is_at_root();
        let key = RenderKey {
            menu_id:    host.id().to_string(),
            x:          self.rect.x,
            y:          self.rect.y,
            title:      self.title.clone(),
            font_color: self.font_color,
            at_root,
            visible:    self.visible,
        };
        if self.render_key.as_ref() == Some(&key) {
            return false;
        }

        self.box_mode = if at_root { BoxMode::Close } else { BoxMode::Back };

        let (title_width, title_height) = host.text_size(&self.title, self.font_size);
        self.rect.width = title_width;
        self.rect.height = title_height;

        let frame = TitleFrame {
            x:            f64::from(self.rect.x),
            y:            f64::from(self.rect.y),
            title_width:  f64::from(title_width),
            title_height: f64::from(title_height),
            bar_width:    f64::from(self.width),
            offset_x:     f64::from(self.offset.0),
        };
        let shape = outline::compute(self.style, &frame);
        self.check_title_color(host);
        self.polygon = shape.points;
        self.rect.height += shape.dy;

        if self.backbox {
            let scroll_delta = if self.floating {
                host.width() - host.inner_width()
            } else {
                0
            };
            let rect = backbox_rect(&frame, shape.cross_size, scroll_delta);
            self.backbox_glyph = backbox_glyph(rect, self.box_mode);
            self.backbox_rect = Some(rect);
        } else {
            self.backbox_rect = None;
            self.backbox_glyph.clear();
        }

        debug!(
            title = %self.title,
            style = %self.style,
            mode = ?self.box_mode,
            "menubar geometry recomputed"
        );
        self.render_key = Some(key);
        true
    }

    /// Warn when the title would be hard to read against its background.
    fn check_title_color(&self, host: &dyn MenuHost) {
        let menu_background = outline::uses_menu_background(self.style);
        let background = if menu_background {
            match host.background_color() {
                Some(color) => color,
                None => return,
            }
        } else {
            self.background_color
        };

        if let Some(contrast) = title_contrast(self.font_color, background) {
            warn!(
                "title font color {:?} is {} to the {} background color {:?}, consider editing your theme",
                self.font_color,
                match contrast {
                    Contrast::Equal => "equal",
                    Contrast::Similar => "similar",
                },
                if menu_background { "menu" } else { "title" },
                background,
            );
        }
    }

    /// How much the scroll area must shrink the scrollbar at `position`, and
    /// where to move it: `(length_delta, (dx, dy))`.
    pub fn scrollbar_style_change(&mut self, host: &dyn MenuHost, position: Position) -> (i32, (i32, i32)) {
        self.render(host);
        if !self.modify_scrollarea {
            return (0, (0, 0));
        }
        if self.style == MenuBarStyle::Adaptive && position == Position::East {
            if let (Some(c), Some(e)) = (self.polygon.get(2), self.polygon.get(4)) {
                let t = (e.y - c.y) as i32;
                return (t, (0, -t));
            }
        }
        (0, (0, 0))
    }

    // ── Interaction ───────────────────────────────────────────────────────────

    /// A close button is pointless when closing the root menu does nothing.
    fn backbox_visible(&self, host: &dyn MenuHost) -> bool {
        self.mouse_enabled
            && self.backbox
            && !(self.box_mode == BoxMode::Close && !host.has_close_action())
    }

    /// Back-box rect if it can currently be clicked.
    fn active_backbox(&self, host: &dyn MenuHost) -> Option<Rect> {
        if self.backbox_visible(host) {
            self.backbox_rect
        } else {
            None
        }
    }

    fn check_mouseover(&mut self, event: &InputEvent) {
        let (Some(position), Some(rect)) = (event.mouse_position(), self.backbox_rect) else {
            return;
        };
        let over = rect.contains(position);
        if over != self.mouse_over {
            self.mouse_over = over;
            debug!(over, "back-box hover changed");
        }
    }

    fn apply(&mut self) {
        debug!(mode = ?self.box_mode, "back-box applied");
        if let Some(callback) = self.on_return.as_mut() {
            callback();
        }
    }

    /// Feed one batch of input events.  Returns `true` if any of them
    /// activated the back-box.
    pub fn update(&mut self, host: &dyn MenuHost, events: &[InputEvent]) -> bool {
        if self.readonly || !self.visible {
            return false;
        }

        let backbox = self.active_backbox(host);
        if backbox.is_none() {
            self.mouse_over = false;
        }
        let mut updated = false;

        for event in events {
            if backbox.is_some() {
                self.check_mouseover(event);
            }

            let hit = |position: Point| backbox.is_some_and(|rect| rect.contains(position));

            let activated = match *event {
                InputEvent::MouseButtonUp { button, position } => {
                    self.mouse_enabled && button.is_click() && hit(position)
                }
                InputEvent::JoyButtonDown { button } => {
                    self.joystick_enabled && button == JOY_BUTTON_BACK
                }
                InputEvent::FingerUp { x, y } => {
                    self.touchscreen_enabled && hit(host.finger_position(x, y))
                }
                _ => false,
            };

            if activated {
                self.apply();
                updated = true;
            }
        }

        updated
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    /// Render if needed, then draw the outline, back-box and title.
    pub fn draw<S: Surface + ?Sized>(&mut self, host: &dyn MenuHost, surface: &mut S) {
        self.render(host);
        if !self.visible {
            return;
        }

        if self.polygon.len() > 2 {
            surface.fill_polygon(&self.polygon, self.background_color);
        }

        if let Some(rect) = self.active_backbox(host) {
            surface.stroke_rect(rect, self.font_color, self.backbox_border_width);
            surface.fill_polygon(&self.backbox_glyph, self.font_color);
        }

        let origin = Point::new(
            self.rect.x as f32 + self.offset.0,
            self.rect.y as f32 + self.offset.1,
        );
        surface.draw_text(&self.title, origin, self.font_size, self.font_color);
    }
}

/// Square button rect at the right end of the bar, `scroll_delta` px further
/// left when a scrollbar sits under a floating bar.
fn backbox_rect(frame: &TitleFrame, cross_size: f64, scroll_delta: i32) -> Rect {
    let side = (cross_size - 2.0 * BACKBOX_MARGIN) as i32;
    Rect::new(
        (frame.x + frame.bar_width - cross_size + BACKBOX_MARGIN - f64::from(scroll_delta)) as i32,
        (frame.y + BACKBOX_MARGIN) as i32,
        side,
        side,
    )
}

/// Glyph traced inside the back-box: a cross for [`BoxMode::Close`], an
/// arrow for [`BoxMode::Back`].
fn backbox_glyph(r: Rect, mode: BoxMode) -> Vec<Point> {
    let (cx, cy) = (r.center_x(), r.center_y());
    let pts: &[(i32, i32)] = match mode {
        BoxMode::Close => &[
            (r.left() + 4, r.top() + 4),
            (cx, cy),
            (r.right() - 4, r.top() + 4),
            (cx, cy),
            (r.right() - 4, r.bottom() - 4),
            (cx, cy),
            (r.left() + 4, r.bottom() - 4),
            (cx, cy),
            (r.left() + 4, r.top() + 4),
        ],
        BoxMode::Back => &[
            (r.left() + 5, cy),
            (cx, r.top() + 5),
            (cx, cy - 2),
            (r.right() - 5, cy - 2),
            (r.right() - 5, cy + 2),
            (cx, cy + 2),
            (cx, r.bottom() - 5),
            (r.left() + 5, cy),
        ],
    };
    pts.iter().copied().map(Point::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MenuFrame;
    use menu_config::Preset;
    use menu_core::MouseButton;
    use menu_renderer::{DrawCommand, DrawList};
    use menu_theme::Theme;
    use std::cell::Cell;
    use std::rc::Rc;

    const BAR_BG: Color = Color::rgb(220, 40, 40);

    fn bar(style: MenuBarStyle) -> MenuBar {
        MenuBar::new("Menu", 600, BAR_BG, style).with_back_box(true)
    }

    fn root() -> MenuFrame {
        MenuFrame::new("main", 600, 400).with_close_action(true)
    }

    fn xy(points: &[Point]) -> Vec<(f32, f32)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    fn counter(bar: MenuBar) -> (MenuBar, Rc<Cell<u32>>) {
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        (bar.on_return(move || seen.set(seen.get() + 1)), hits)
    }

    fn click(x: f32, y: f32, button: MouseButton) -> InputEvent {
        InputEvent::MouseButtonUp {
            button,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn adaptive_outline_and_backbox() {
        let host = root();
        let mut bar = bar(MenuBarStyle::Adaptive);
        assert!(bar.render(&host));

        assert_eq!(
            xy(bar.polygon()),
            vec![
                (0.0, 0.0),
                (599.0, 0.0),
                (599.0, 30.0),
                (113.0, 30.0),
                (93.0, 50.0),
                (0.0, 50.0),
            ]
        );
        assert_eq!(bar.rect(), Rect::new(0, 0, 88, 50));
        assert_eq!(bar.backbox_rect(), Some(Rect::new(574, 4, 22, 22)));
        assert_eq!(bar.box_mode(), BoxMode::Close);
    }

    #[test]
    fn close_glyph_is_a_cross() {
        let mut bar = bar(MenuBarStyle::Adaptive);
        bar.render(&root());

        let expected: Vec<Point> = [
            (578, 8),
            (585, 15),
            (592, 8),
            (585, 15),
            (592, 22),
            (585, 15),
            (578, 22),
            (585, 15),
            (578, 8),
        ]
        .into_iter()
        .map(Point::from)
        .collect();
        assert_eq!(bar.backbox_glyph(), expected.as_slice());
    }

    #[test]
    fn submenu_switches_to_arrow() {
        let mut host = root();
        let mut bar = bar(MenuBarStyle::Simple);
        bar.render(&host);
        assert_eq!(bar.backbox_glyph().len(), 9);

        host.open_submenu();
        assert!(bar.render(&host));
        assert_eq!(bar.box_mode(), BoxMode::Back);
        assert_eq!(bar.backbox_glyph().len(), 8);

        // Simple bar: the box fills the whole height.
        assert_eq!(bar.backbox_rect(), Some(Rect::new(554, 4, 42, 42)));
        assert_eq!(bar.backbox_glyph()[0], Point::new(559.0, 25.0));
    }

    #[test]
    fn render_skips_when_unchanged() {
        let mut host = root();
        let mut bar = bar(MenuBarStyle::Adaptive);
        assert!(bar.render(&host));
        let first = bar.polygon().to_vec();
        assert!(!bar.render(&host));
        assert_eq!(bar.polygon(), first.as_slice());

        bar.set_position(10, 20);
        assert!(bar.render(&host));
        assert!(!bar.render(&host));
        assert_eq!(bar.polygon()[0], Point::new(10.0, 20.0));

        bar.set_title("Settings", 0.0, 0.0);
        assert!(bar.render(&host));

        bar.set_font_color(Color::BLACK);
        assert!(bar.render(&host));

        host.open_submenu();
        assert!(bar.render(&host));

        host.id = "other".into();
        assert!(bar.render(&host));
        assert!(!bar.render(&host));
    }

    #[test]
    fn every_style_is_stable_between_renders() {
        let host = root();
        for style in MenuBarStyle::ALL {
            let mut bar = bar(style);
            assert!(bar.render(&host), "{style}");
            let polygon = bar.polygon().to_vec();
            let height = bar.rect().height;

            assert!(!bar.render(&host), "{style}");
            assert_eq!(bar.polygon(), polygon.as_slice(), "{style}");
            assert_eq!(bar.rect().height, height, "{style}");
        }
    }

    #[test]
    fn geometry_setters_force_render() {
        let host = root();
        let mut bar = bar(MenuBarStyle::TitleOnly);
        bar.render(&host);

        bar.set_title("Menu", 12.0, 0.0);
        assert!(bar.render(&host));
        assert_eq!(bar.polygon()[1], Point::new(105.0, 0.0));

        bar.set_float(true);
        assert!(bar.render(&host));
    }

    #[test]
    fn underline_adds_height() {
        let host = root();
        let mut plain = bar(MenuBarStyle::Simple);
        let mut under = bar(MenuBarStyle::Underline);
        let mut under_title = bar(MenuBarStyle::UnderlineTitle);
        plain.render(&host);
        under.render(&host);
        under_title.render(&host);

        assert_eq!(plain.height(), 50);
        assert_eq!(under.height(), 54);
        assert_eq!(under_title.height(), 53);
    }

    #[test]
    fn floating_bar_has_no_height_and_dodges_scrollbar() {
        let host = root().with_scrollbar(20);
        let mut bar = bar(MenuBarStyle::Adaptive);
        bar.set_float(true);
        bar.render(&host);

        assert_eq!(bar.height(), 0);
        assert_eq!(bar.rect().height, 50);
        assert_eq!(bar.backbox_rect().map(|r| r.x), Some(554));
    }

    #[test]
    fn adaptive_shrinks_east_scrollbar() {
        let host = root();
        let mut bar = bar(MenuBarStyle::Adaptive);
        assert_eq!(bar.scrollbar_style_change(&host, Position::East), (20, (0, -20)));
        assert_eq!(bar.scrollbar_style_change(&host, Position::West), (0, (0, 0)));

        let mut simple = self::bar(MenuBarStyle::Simple);
        assert_eq!(simple.scrollbar_style_change(&host, Position::East), (0, (0, 0)));

        let mut fixed = self::bar(MenuBarStyle::Adaptive).with_modify_scrollarea(false);
        assert_eq!(fixed.scrollbar_style_change(&host, Position::East), (0, (0, 0)));
    }

    #[test]
    fn click_inside_backbox_fires_callback() {
        let host = root();
        let (mut bar, hits) = counter(bar(MenuBarStyle::Adaptive));
        bar.render(&host);

        assert!(bar.update(&host, &[click(580.0, 10.0, MouseButton::Left)]));
        assert!(bar.update(&host, &[click(580.0, 10.0, MouseButton::Right)]));
        assert_eq!(hits.get(), 2);

        assert!(!bar.update(&host, &[click(580.0, 10.0, MouseButton::WheelUp)]));
        assert!(!bar.update(&host, &[click(10.0, 10.0, MouseButton::Left)]));
        // Right edge is exclusive.
        assert!(!bar.update(&host, &[click(596.0, 10.0, MouseButton::Left)]));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn every_qualifying_event_applies() {
        let host = root();
        let (mut bar, hits) = counter(bar(MenuBarStyle::Adaptive));
        bar.render(&host);

        let events = [
            click(580.0, 10.0, MouseButton::Left),
            click(5.0, 5.0, MouseButton::Left),
            InputEvent::JoyButtonDown { button: JOY_BUTTON_BACK },
        ];
        assert!(bar.update(&host, &events));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn hover_tracks_mouse_motion() {
        let host = root();
        let mut bar = bar(MenuBarStyle::Adaptive);
        bar.render(&host);

        let over = InputEvent::MouseMotion { position: Point::new(585.0, 15.0) };
        let away = InputEvent::MouseMotion { position: Point::new(100.0, 15.0) };
        assert!(!bar.update(&host, &[over]));
        assert!(bar.is_mouse_over());
        bar.update(&host, &[away]);
        assert!(!bar.is_mouse_over());
    }

    #[test]
    fn hover_clears_when_backbox_hides() {
        let mut host = root();
        let mut bar = bar(MenuBarStyle::Adaptive);
        bar.render(&host);
        bar.update(&host, &[InputEvent::MouseMotion { position: Point::new(585.0, 15.0) }]);
        assert!(bar.is_mouse_over());

        host.close_action = false;
        bar.update(&host, &[InputEvent::MouseMotion { position: Point::new(100.0, 15.0) }]);
        assert!(!bar.is_mouse_over());
    }

    #[test]
    fn root_without_close_action_hides_backbox() {
        let host = MenuFrame::new("main", 600, 400);
        let (mut bar, hits) = counter(bar(MenuBarStyle::Adaptive));
        bar.render(&host);

        assert!(bar.backbox_rect().is_some());
        assert!(!bar.update(&host, &[click(580.0, 10.0, MouseButton::Left)]));

        let mut list = DrawList::new();
        bar.draw(&host, &mut list);
        assert!(!list
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::StrokeRect { .. })));

        // The joystick back button works without a visible box.
        assert!(bar.update(&host, &[InputEvent::JoyButtonDown { button: JOY_BUTTON_BACK }]));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn joystick_respects_button_and_toggle() {
        let host = root();
        let mut bar = bar(MenuBarStyle::Simple);
        bar.render(&host);

        assert!(!bar.update(&host, &[InputEvent::JoyButtonDown { button: 0 }]));
        bar.set_joystick_enabled(false);
        assert!(!bar.update(&host, &[InputEvent::JoyButtonDown { button: JOY_BUTTON_BACK }]));
    }

    #[test]
    fn finger_release_needs_touchscreen() {
        let host = root();
        let mut bar = bar(MenuBarStyle::Adaptive);
        bar.render(&host);

        let tap = InputEvent::FingerUp { x: 580.0 / 600.0, y: 10.0 / 400.0 };
        assert!(!bar.update(&host, &[tap.clone()]));
        bar.set_touchscreen_enabled(true);
        assert!(bar.update(&host, &[tap]));
    }

    #[test]
    fn readonly_or_hidden_ignores_input() {
        let host = root();
        let mut bar = bar(MenuBarStyle::Adaptive);
        bar.render(&host);
        let joy = InputEvent::JoyButtonDown { button: JOY_BUTTON_BACK };

        bar.set_readonly(true);
        assert!(!bar.update(&host, &[joy.clone()]));
        bar.set_readonly(false);
        bar.set_visible(false);
        assert!(!bar.update(&host, &[joy]));
    }

    #[test]
    fn mouse_disabled_hides_backbox() {
        let host = root();
        let mut bar = bar(MenuBarStyle::Adaptive);
        bar.render(&host);
        bar.set_mouse_enabled(false);
        assert!(!bar.update(&host, &[click(580.0, 10.0, MouseButton::Left)]));
    }

    #[test]
    fn backbox_border_must_be_positive() {
        let mut bar = bar(MenuBarStyle::Simple);
        assert!(matches!(bar.set_backbox_border_width(0), Err(MenuError::Range(_))));
        assert!(bar.set_backbox_border_width(3).is_ok());
    }

    #[test]
    fn draw_emits_outline_box_and_title() {
        let host = root();
        let mut bar = bar(MenuBarStyle::Adaptive).with_offset(5.0, 2.0);
        let mut list = DrawList::new();
        bar.draw(&host, &mut list);

        assert_eq!(list.commands.len(), 4);
        assert!(matches!(
            &list.commands[0],
            DrawCommand::FillPolygon { points, color } if points.len() == 6 && *color == BAR_BG
        ));
        assert_eq!(
            list.commands[1],
            DrawCommand::StrokeRect {
                rect:  Rect::new(574, 4, 22, 22),
                color: Color::WHITE,
                width: 1,
            }
        );
        assert!(matches!(
            &list.commands[2],
            DrawCommand::FillPolygon { points, .. } if points.len() == 9
        ));
        assert_eq!(
            list.commands[3],
            DrawCommand::Text {
                text:     "Menu".into(),
                position: Point::new(5.0, 2.0),
                size:     40,
                color:    Color::WHITE,
            }
        );
    }

    #[test]
    fn none_style_draws_only_text() {
        let host = MenuFrame::new("main", 600, 400);
        let mut bar = MenuBar::new("Menu", 600, BAR_BG, MenuBarStyle::None);
        let mut list = DrawList::new();
        bar.draw(&host, &mut list);

        assert_eq!(bar.polygon().len(), 2);
        assert_eq!(list.commands.len(), 1);
        assert!(matches!(list.commands[0], DrawCommand::Text { .. }));
    }

    #[test]
    fn hidden_bar_draws_nothing() {
        let mut bar = bar(MenuBarStyle::Simple);
        bar.set_visible(false);
        let mut list = DrawList::new();
        bar.draw(&root(), &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn contrast_levels() {
        assert_eq!(title_contrast(Color::WHITE, Color::WHITE), Some(Contrast::Equal));
        assert_eq!(
            title_contrast(Color::WHITE, Color::rgb(252, 255, 251)),
            Some(Contrast::Similar)
        );
        assert_eq!(title_contrast(Color::WHITE, Color::rgb(250, 255, 255)), None);
        assert_eq!(title_contrast(Color::WHITE, Color::BLACK), None);
    }

    #[test]
    fn built_from_theme() {
        let theme = Theme::preset(Preset::Dark).unwrap();
        let style = theme.title_style();
        let mut bar = MenuBar::from_theme("Dark", 600, &style);
        assert_eq!(bar.style(), style.style);
        assert_eq!(bar.title_offset(), (style.offset.0 as i32, style.offset.1 as i32));

        let host = MenuFrame::from_theme("main", &theme, 600, 400);
        assert!(bar.render(&host));
        assert_eq!(bar.backbox_rect().is_some(), style.close_button);
    }
}
