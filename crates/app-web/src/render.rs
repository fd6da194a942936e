//! Canvas2D painter for the drive scene. One unconditional entry point,
//! `paint`, used by the frame loop and by one-off repaints (resize, theme
//! change while paused, the Intro frame).

use crate::draw;
use app_core::constants::*;
use app_core::{
    grid_fan_line, grid_rung, obstacle_placement, star_alpha, vanish_x, window_lit, Palette,
    SceneState, Theme, Viewport, OBSTACLE_PALETTE,
};
use web_sys as web;

pub fn paint(ctx: &web::CanvasRenderingContext2d, vp: &Viewport, scene: &SceneState, theme: Theme) {
    let pal = theme.palette();
    let (w, h) = (vp.w as f64, vp.h as f64);
    let horizon = vp.horizon_y() as f64;
    let t = scene.elapsed;

    ctx.clear_rect(0.0, 0.0, w, h);

    paint_sky(ctx, vp, pal);
    paint_stars(ctx, vp, scene, t);
    paint_sun(ctx, vp, pal);
    paint_buildings(ctx, vp, scene, pal);

    // Ground
    let ground = ctx.create_linear_gradient(0.0, horizon, 0.0, h);
    for (off, color) in pal.ground {
        _ = ground.add_color_stop(*off, color);
    }
    draw::fill_style_gradient(ctx, &ground);
    ctx.fill_rect(0.0, horizon, w, h - horizon);

    let vanish = vanish_x(vp, t);
    paint_grid(ctx, vp, scene, pal, vanish, t);

    for obs in &scene.obstacles {
        if let Some(p) = obstacle_placement(vp, vanish, obs) {
            draw_obstacle_car(
                ctx,
                p.x as f64,
                p.y as f64,
                p.w as f64,
                p.h as f64,
                OBSTACLE_PALETTE[obs.color],
            );
        }
    }

    draw_player_car(
        ctx,
        vp.player_x(scene.car_x) as f64,
        vp.player_y() as f64,
        PLAYER_W_PX as f64,
        PLAYER_H_PX as f64,
        pal.car_body,
        pal.car_glow,
    );

    // Controls hint
    draw::fill_style(ctx, pal.hint_text);
    ctx.set_font("11px \"Space Grotesk\", sans-serif");
    ctx.set_text_align("center");
    _ = ctx.fill_text("\u{2190} A/D or Arrow Keys to drive \u{2192}", w / 2.0, h - 8.0);
}

fn paint_sky(ctx: &web::CanvasRenderingContext2d, vp: &Viewport, pal: &Palette) {
    let horizon = vp.horizon_y() as f64;
    let sky = ctx.create_linear_gradient(0.0, 0.0, 0.0, horizon);
    for (off, color) in pal.sky {
        _ = sky.add_color_stop(*off, color);
    }
    draw::fill_style_gradient(ctx, &sky);
    ctx.fill_rect(0.0, 0.0, vp.w as f64, horizon);
}

fn paint_stars(ctx: &web::CanvasRenderingContext2d, vp: &Viewport, scene: &SceneState, t: f32) {
    for star in &scene.stars {
        let alpha = star_alpha(star, t);
        draw::fill_style(ctx, &format!("rgba(255,255,255,{:.3})", alpha.max(0.0)));
        ctx.fill_rect(
            (star.x * vp.w) as f64,
            (star.y * vp.h) as f64,
            star.size as f64,
            star.size as f64,
        );
    }
}

fn paint_sun(ctx: &web::CanvasRenderingContext2d, vp: &Viewport, pal: &Palette) {
    let w = vp.w as f64;
    let horizon = vp.horizon_y() as f64;
    let sun_x = w * 0.5;
    let sun_y = horizon - vp.h as f64 * 0.02;
    let sun_r = (vp.w.min(vp.h) * SUN_RADIUS_FRAC) as f64;

    // Radial glow behind the disc
    if let Ok(glow) =
        ctx.create_radial_gradient(sun_x, sun_y, sun_r * 0.3, sun_x, sun_y, sun_r * 2.5)
    {
        _ = glow.add_color_stop(0.0, "rgba(255,240,100,0.3)");
        _ = glow.add_color_stop(0.4, "rgba(255,120,60,0.1)");
        _ = glow.add_color_stop(1.0, "rgba(255,60,120,0)");
        draw::fill_style_gradient(ctx, &glow);
        ctx.fill_rect(0.0, horizon - sun_r * 3.0, w, sun_r * 4.0);
    }

    // Upper half disc
    let body = ctx.create_linear_gradient(sun_x, sun_y - sun_r, sun_x, sun_y + sun_r * 0.3);
    _ = body.add_color_stop(0.0, "#fff8a0");
    _ = body.add_color_stop(0.4, "#ffaa44");
    _ = body.add_color_stop(0.7, "#ff6688");
    _ = body.add_color_stop(1.0, "#cc44aa");
    draw::fill_style_gradient(ctx, &body);
    ctx.begin_path();
    _ = ctx.arc(sun_x, sun_y, sun_r, std::f64::consts::PI, 0.0);
    ctx.fill();

    // Horizontal scanline occlusion bands, clipped to the disc
    ctx.save();
    ctx.begin_path();
    _ = ctx.arc(sun_x, sun_y, sun_r, std::f64::consts::PI, 0.0);
    ctx.clip();
    draw::fill_style(ctx, pal.scanline);
    for i in 0..SUN_SCANLINES {
        let line_y = sun_y - sun_r + i as f64 * (sun_r / 6.0);
        let line_h = 1.0 + i as f64 * 0.5;
        ctx.fill_rect(sun_x - sun_r, line_y, sun_r * 2.0, line_h);
    }
    ctx.restore();
}

fn paint_buildings(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    scene: &SceneState,
    pal: &Palette,
) {
    let horizon = vp.horizon_y() as f64;
    for b in &scene.buildings {
        let bx = (b.x * vp.w) as f64;
        let bw = (b.w * vp.w) as f64;
        let bh = (b.h * vp.h) as f64;
        let by = horizon - bh;
        draw::fill_style(ctx, pal.building);
        ctx.fill_rect(bx, by, bw, bh + 4.0);

        // Stable lit-window pattern derived from the building seed
        draw::fill_style(ctx, pal.window);
        let rows = b.window_rows;
        let cols = ((bw / 8.0).floor() as u32).max(2);
        for r in 0..rows {
            for c in 0..cols {
                if window_lit(b.seed, r, c) {
                    ctx.fill_rect(
                        bx + 3.0 + c as f64 * (bw - 6.0) / cols as f64,
                        by + 4.0 + r as f64 * (bh - 8.0) / rows as f64,
                        2.5,
                        2.5,
                    );
                }
            }
        }
    }
}

fn paint_grid(
    ctx: &web::CanvasRenderingContext2d,
    vp: &Viewport,
    scene: &SceneState,
    pal: &Palette,
    vanish: f32,
    t: f32,
) {
    let w = vp.w as f64;
    let h = vp.h as f64;
    let fan_y = (vp.horizon_y() + app_core::drift_y(t)) as f64;

    // Receding horizontal rungs
    for i in 0..GRID_H_LINES {
        let rung = grid_rung(vp, i, scene.road_offset);
        draw::stroke_style(ctx, &pal.grid_h.rgba(rung.alpha));
        ctx.set_line_width(rung.width as f64);
        draw::line(ctx, 0.0, rung.y as f64, w, rung.y as f64);
    }

    // Converging vertical fan
    ctx.set_line_width(0.6);
    for i in 0..=GRID_V_LINES {
        let (bottom_x, alpha) = grid_fan_line(vp, i);
        draw::stroke_style(ctx, &pal.grid_v.rgba(alpha));
        draw::line(ctx, vanish as f64, fan_y, bottom_x as f64, h);
    }

    // Road center line glow
    draw::stroke_style(ctx, pal.center_line);
    ctx.set_line_width(1.5);
    draw::line(ctx, vanish as f64, fan_y, w * 0.5, h);
}

/// Player vehicle: trapezoid body, inset windshield, roof tier, tail and
/// head lights, glow via shadow blur.
fn draw_player_car(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: &str,
    glow: &str,
) {
    ctx.save();
    ctx.set_shadow_color(glow);
    ctx.set_shadow_blur(18.0);

    // Body
    draw::fill_style(ctx, color);
    ctx.begin_path();
    ctx.move_to(x - w / 2.0, y);
    ctx.line_to(x + w / 2.0, y);
    ctx.line_to(x + w / 2.0 - 4.0, y - h * 0.45);
    ctx.line_to(x - w / 2.0 + 4.0, y - h * 0.45);
    ctx.close_path();
    ctx.fill();

    // Windshield
    draw::fill_style(ctx, "rgba(0,0,0,0.4)");
    ctx.begin_path();
    ctx.move_to(x - w / 2.0 + 8.0, y - h * 0.45);
    ctx.line_to(x + w / 2.0 - 8.0, y - h * 0.45);
    ctx.line_to(x + w / 2.0 - 14.0, y - h * 0.82);
    ctx.line_to(x - w / 2.0 + 14.0, y - h * 0.82);
    ctx.close_path();
    ctx.fill();

    // Roof
    draw::fill_style(ctx, color);
    ctx.begin_path();
    ctx.move_to(x - w / 2.0 + 14.0, y - h * 0.82);
    ctx.line_to(x + w / 2.0 - 14.0, y - h * 0.82);
    ctx.line_to(x + w / 2.0 - 16.0, y - h);
    ctx.line_to(x - w / 2.0 + 16.0, y - h);
    ctx.close_path();
    ctx.fill();

    // Tail lights
    ctx.set_shadow_blur(12.0);
    ctx.set_shadow_color("#ff2244");
    draw::fill_style(ctx, "#ff2244");
    ctx.fill_rect(x - w / 2.0 + 1.0, y - 6.0, 5.0, 3.0);
    ctx.fill_rect(x + w / 2.0 - 6.0, y - 6.0, 5.0, 3.0);

    // Headlight glow
    ctx.set_shadow_color("#ffee88");
    draw::fill_style(ctx, "#ffee88");
    ctx.fill_rect(x - w / 2.0 + 2.0, y - h * 0.42, 4.0, 2.0);
    ctx.fill_rect(x + w / 2.0 - 6.0, y - h * 0.42, 4.0, 2.0);

    ctx.set_shadow_blur(0.0);
    ctx.restore();
}

/// Obstacle vehicle: single-tier variant of the player sprite.
fn draw_obstacle_car(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: &str,
) {
    ctx.save();
    ctx.set_shadow_color(color);
    ctx.set_shadow_blur(10.0);

    draw::fill_style(ctx, color);
    ctx.begin_path();
    ctx.move_to(x - w / 2.0, y);
    ctx.line_to(x + w / 2.0, y);
    ctx.line_to(x + w / 2.0 - 3.0, y - h * 0.5);
    ctx.line_to(x - w / 2.0 + 3.0, y - h * 0.5);
    ctx.close_path();
    ctx.fill();

    draw::fill_style(ctx, "rgba(0,0,0,0.5)");
    ctx.begin_path();
    ctx.move_to(x - w / 2.0 + 5.0, y - h * 0.5);
    ctx.line_to(x + w / 2.0 - 5.0, y - h * 0.5);
    ctx.line_to(x + w / 2.0 - 9.0, y - h * 0.85);
    ctx.line_to(x - w / 2.0 + 9.0, y - h * 0.85);
    ctx.close_path();
    ctx.fill();

    ctx.set_shadow_blur(8.0);
    ctx.set_shadow_color("#ff4466");
    draw::fill_style(ctx, "#ff4466");
    ctx.fill_rect(x - w / 2.0 + 1.0, y - 4.0, 4.0, 2.0);
    ctx.fill_rect(x + w / 2.0 - 5.0, y - 4.0, 4.0, 2.0);
    ctx.set_shadow_blur(0.0);
    ctx.restore();
}
