//! Scene drawing
//!
//! `render` only reads the game state. World layers are drawn under the
//! camera transform; the HUD is drawn afterwards in screen space.

use glam::Vec2;

use super::{Color, Paint, Rect, Surface, TextAlign, TextStyle};
use crate::consts::*;
use crate::settings::{Settings, Skin};
use crate::sim::{GameState, PLATFORMS, RunPhase};

const SKY_TOP: Color = Color::hex(0x0d1b2a);
const SKY_BOTTOM: Color = Color::hex(0x1b263b);
const GRID_SPACING: f32 = 80.0;
const PLATFORM_COLOR: Color = Color::hex(0x2d2d54);
const PLATFORM_CORNER: f32 = 10.0;
const COIN_CORE: Color = Color::hex(0xfff4b0);
const COIN_RIM: Color = Color::hex(0xf0a500);
const HUD_COLOR: Color = Color::hex(0xe0eaf5);
const BANNER_TEXT: Color = Color::hex(0xfefefe);

/// Drawable area in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Colors for a ball skin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinPalette {
    pub ball: Color,
    pub outline: Color,
    pub trail: Color,
}

impl SkinPalette {
    pub fn for_skin(skin: Skin) -> Self {
        let ball = match skin {
            Skin::Azure => Color::hex(0x5bd1ff),
            Skin::Ember => Color::hex(0xff8a4c),
            Skin::Lime => Color::hex(0x9be15d),
            Skin::Violet => Color::hex(0xb48cff),
        };
        Self {
            ball,
            outline: Color::WHITE,
            trail: ball.with_alpha(0.25),
        }
    }
}

/// Horizontal scroll so the ball sits a little left of center
pub fn camera_offset(ball_x: f32, viewport_width: f32) -> f32 {
    (ball_x - viewport_width * CAMERA_LEAD).clamp(0.0, CAMERA_MAX)
}

/// Draw one frame
pub fn render<S: Surface>(surface: &mut S, state: &GameState, settings: &Settings, viewport: Viewport) {
    surface.clear(viewport.width, viewport.height);

    let camera = camera_offset(state.ball.pos.x, viewport.width);
    let palette = SkinPalette::for_skin(state.skin);

    surface.save();
    surface.translate(Vec2::new(-camera, 0.0));
    draw_background(surface, camera, viewport);
    draw_platforms(surface, camera, viewport);
    draw_coins(surface, state, camera, viewport);
    if settings.trails {
        draw_trail(surface, state, &palette);
    }
    draw_ball(surface, state, &palette);
    surface.restore();

    draw_hud(surface, state, settings, viewport);
}

/// Whether a horizontal world span overlaps the view
fn in_view(left: f32, right: f32, camera: f32, viewport: Viewport) -> bool {
    right >= camera && left <= camera + viewport.width
}

fn draw_background<S: Surface>(surface: &mut S, camera: f32, viewport: Viewport) {
    let sky = Paint::Linear {
        start: Vec2::ZERO,
        end: Vec2::new(0.0, viewport.height),
        stops: vec![(0.0, SKY_TOP), (1.0, SKY_BOTTOM)],
    };
    surface.fill_rect(Rect::new(camera, 0.0, viewport.width, viewport.height), &sky);

    let grid = Color::WHITE.with_alpha(0.05);
    let mut x = camera - camera % GRID_SPACING;
    while x < camera + viewport.width + GRID_SPACING {
        surface.line(Vec2::new(x, 0.0), Vec2::new(x, viewport.height), grid, 1.0);
        x += GRID_SPACING;
    }
}

fn draw_platforms<S: Surface>(surface: &mut S, camera: f32, viewport: Viewport) {
    let paint = Paint::Solid(PLATFORM_COLOR);
    for platform in PLATFORMS
        .iter()
        .filter(|p| in_view(p.left(), p.right(), camera, viewport))
    {
        let rect = Rect::new(platform.x, platform.y, platform.width, platform.height);
        surface.fill_round_rect(rect, PLATFORM_CORNER, &paint);
    }
}

fn draw_coins<S: Surface>(surface: &mut S, state: &GameState, camera: f32, viewport: Viewport) {
    for coin in state
        .coins
        .iter()
        .filter(|c| in_view(c.pos.x - c.radius, c.pos.x + c.radius, camera, viewport))
    {
        // Highlight sits up and to the left
        let highlight = coin.pos - Vec2::splat(coin.radius * 0.3);
        let paint = Paint::Radial {
            inner_center: highlight,
            inner_radius: 1.0,
            outer_center: coin.pos,
            outer_radius: coin.radius,
            stops: vec![(0.0, COIN_CORE), (1.0, COIN_RIM)],
        };
        surface.fill_circle(coin.pos, coin.radius, &paint);
    }
}

fn draw_trail<S: Surface>(surface: &mut S, state: &GameState, palette: &SkinPalette) {
    if state.trail.is_empty() {
        return;
    }
    let paint = Paint::Solid(palette.trail);
    for point in &state.trail {
        surface.set_alpha(point.opacity);
        surface.fill_circle(point.pos, TRAIL_DOT_RADIUS, &paint);
    }
    surface.set_alpha(1.0);
}

fn draw_ball<S: Surface>(surface: &mut S, state: &GameState, palette: &SkinPalette) {
    let ball = &state.ball;
    surface.save();
    surface.translate(ball.pos);
    surface.rotate(ball.rotation);

    surface.fill_circle(Vec2::ZERO, ball.radius, &Paint::Solid(palette.ball));
    surface.stroke_circle(Vec2::ZERO, ball.radius, palette.outline, 2.0);

    // Orientation marks make the roll visible
    let marks = Color::WHITE.with_alpha(0.7);
    surface.line(Vec2::ZERO, Vec2::new(ball.radius, 0.0), marks, 2.0);
    surface.line(Vec2::ZERO, Vec2::new(0.0, -ball.radius), marks, 2.0);

    surface.restore();
}

/// Status word for the HUD
pub fn status_label(phase: RunPhase) -> &'static str {
    match phase {
        RunPhase::Menu => "Status: ready",
        RunPhase::Running => "Status: rolling",
        RunPhase::Lost => "Status: fallen",
    }
}

fn draw_hud<S: Surface>(surface: &mut S, state: &GameState, settings: &Settings, viewport: Viewport) {
    let hud = TextStyle {
        size_px: 16.0,
        color: HUD_COLOR,
        align: TextAlign::Left,
    };
    surface.text(
        &format!("Distance: {:.0} px", state.distance.floor()),
        Vec2::new(16.0, 28.0),
        &hud,
    );
    surface.text(&format!("Time: {:.1}s", state.elapsed), Vec2::new(16.0, 48.0), &hud);
    surface.text(
        &format!("Coins: {}", state.coins_collected),
        Vec2::new(16.0, 68.0),
        &hud,
    );
    surface.text(status_label(state.phase), Vec2::new(16.0, 88.0), &hud);

    let right = TextStyle {
        align: TextAlign::Right,
        ..hud.clone()
    };
    if state.muted {
        surface.text("Muted", Vec2::new(viewport.width - 16.0, 28.0), &right);
    }
    if settings.show_controls {
        surface.text(
            "Controls: A/Left to roll left, D/Right to roll right, Space to hop, R to reset, M to mute",
            Vec2::new(viewport.width - 16.0, viewport.height - 20.0),
            &right,
        );
    }

    match state.phase {
        RunPhase::Lost => draw_banner(
            surface,
            viewport,
            &["You tumbled off the course! Press R to reset."],
        ),
        RunPhase::Menu => draw_banner(
            surface,
            viewport,
            &[
                "Rolling Balance - press Space or Enter to roll",
                &format!("Skin: {} (1-4 to change)", state.skin.as_str()),
            ],
        ),
        RunPhase::Running => {}
    }
}

/// Dimmed strip across the middle of the screen with centered lines of text
fn draw_banner<S: Surface>(surface: &mut S, viewport: Viewport, lines: &[&str]) {
    let line_height = 30.0;
    let height = 100.0_f32.max(lines.len() as f32 * line_height + 40.0);
    let top = viewport.height / 2.0 - height / 2.0;
    surface.fill_rect(
        Rect::new(0.0, top, viewport.width, height),
        &Paint::Solid(Color::BLACK.with_alpha(0.4)),
    );

    let style = TextStyle {
        size_px: 24.0,
        color: BANNER_TEXT,
        align: TextAlign::Center,
    };
    let first_y = viewport.height / 2.0 + 8.0 - (lines.len() as f32 - 1.0) * line_height / 2.0;
    for (i, line) in lines.iter().enumerate() {
        surface.text(
            line,
            Vec2::new(viewport.width / 2.0, first_y + i as f32 * line_height),
            &style,
        );
    }
}
