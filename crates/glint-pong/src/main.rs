//! Two-player pong. W/S moves the left paddle, Up/Down the right one, Space
//! serves. Scores show as pip rows since no font ships with the demo.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use glint_engine::{Color, Config, Context, Key, Vec2};

const W: f32 = 1024.0;
const H: f32 = 720.0;

const PADDLE_SPEED: f32 = 520.0;
const BALL_RADIUS: f32 = 12.0;
const SERVE_SPEED_X: f32 = 320.0;
const SERVE_SPEED_Y: f32 = 180.0;
const MAX_BALL_SPEED_Y: f32 = 520.0;

/// Center-anchored box.
#[derive(Debug, Copy, Clone)]
struct Aabb {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl Aabb {
    fn intersects(&self, other: &Aabb) -> bool {
        (self.x - other.x).abs() * 2.0 < self.w + other.w
            && (self.y - other.y).abs() * 2.0 < self.h + other.h
    }
}

struct Ball {
    pos: Vec2,
    vel: Vec2,
    radius: f32,
}

impl Ball {
    fn paused(&self) -> bool {
        self.vel.x == 0.0 && self.vel.y == 0.0
    }

    fn serve(&mut self, dir: f32) {
        self.pos = Vec2::new(W * 0.5, H * 0.5);
        self.vel = Vec2::new(SERVE_SPEED_X * dir, coin_flip_sign() * SERVE_SPEED_Y);
    }

    fn aabb(&self) -> Aabb {
        Aabb {
            x: self.pos.x,
            y: self.pos.y,
            w: self.radius * 2.0,
            h: self.radius * 2.0,
        }
    }
}

/// ±1 from the system clock's nanosecond parity. Good enough for a serve
/// direction; pulls in no RNG dependency.
fn coin_flip_sign() -> f32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    if nanos & 1 == 0 { 1.0 } else { -1.0 }
}

fn bounce_from_paddle(ball: &mut Ball, paddle: &Aabb, dir: f32) {
    if !ball.aabb().intersects(paddle) {
        return;
    }
    ball.pos.x = paddle.x + (paddle.w * 0.5 + ball.radius + 1.0) * dir;
    ball.vel.x = ball.vel.x.abs() * dir;

    // Exit angle steers by where the ball struck the paddle.
    let dy = (ball.pos.y - paddle.y) / (paddle.h * 0.5);
    ball.vel.y = (ball.vel.y + dy * 240.0).clamp(-MAX_BALL_SPEED_Y, MAX_BALL_SPEED_Y);
    ball.vel.x *= 1.03;
    ball.vel.y *= 1.02;
}

fn draw_pips(
    ctx: &mut Context<impl glint_engine::Backend>,
    start: Vec2,
    count: u32,
    right_side: bool,
) -> Result<()> {
    let size = 14.0;
    let gap = 6.0;
    for i in 0..count {
        let step = (size + gap) * i as f32;
        let x = if right_side { start.x - step } else { start.x + step };
        ctx.draw_rect(
            Vec2::new(x, start.y),
            Vec2::new(size, size),
            0.0,
            Color::rgb(180, 220, 180),
        )?;
    }
    Ok(())
}

fn main() -> Result<()> {
    glint_engine::logging::init_logging(glint_engine::logging::LoggingConfig::default());

    let mut ctx = Context::new()?;
    {
        let cfg: &mut Config = ctx.config_mut()?;
        cfg.title = "glint pong".to_string();
        cfg.width = W as u32;
        cfg.height = H as u32;
        cfg.vsync = true;
    }
    ctx.create_surface()?;
    ctx.set_clear_color(Color::rgb(18, 18, 22));

    let mut left = Aabb { x: 40.0, y: H * 0.5, w: 20.0, h: 120.0 };
    let mut right = Aabb { x: W - 40.0, y: H * 0.5, w: 20.0, h: 120.0 };

    let mut ball = Ball {
        pos: Vec2::new(W * 0.5, H * 0.5),
        vel: Vec2::zero(), // start paused
        radius: BALL_RADIUS,
    };

    let mut score_l: u32 = 0;
    let mut score_r: u32 = 0;

    while ctx.is_surface_open() {
        if ctx.poll_events()?.should_close {
            break;
        }
        let dt = ctx.delta_time()?.min(0.02); // clamp spikes

        if ctx.is_key_down(Key::W) {
            left.y -= PADDLE_SPEED * dt;
        }
        if ctx.is_key_down(Key::S) {
            left.y += PADDLE_SPEED * dt;
        }
        if ctx.is_key_down(Key::ArrowUp) {
            right.y -= PADDLE_SPEED * dt;
        }
        if ctx.is_key_down(Key::ArrowDown) {
            right.y += PADDLE_SPEED * dt;
        }

        left.y = left.y.clamp(left.h * 0.5, H - left.h * 0.5);
        right.y = right.y.clamp(right.h * 0.5, H - right.h * 0.5);

        if ctx.is_key_down(Key::Space) && ball.paused() {
            ball.serve(coin_flip_sign());
        }

        ball.pos = ball.pos + ball.vel * dt;

        if ball.pos.y - ball.radius < 0.0 {
            ball.pos.y = ball.radius;
            ball.vel.y = -ball.vel.y;
        }
        if ball.pos.y + ball.radius > H {
            ball.pos.y = H - ball.radius;
            ball.vel.y = -ball.vel.y;
        }

        bounce_from_paddle(&mut ball, &left, 1.0);
        bounce_from_paddle(&mut ball, &right, -1.0);

        // A goal pauses the ball until the next serve.
        if ball.pos.x < -60.0 {
            score_r = (score_r + 1).min(10);
            ball.vel = Vec2::zero();
            log::info!("point right: {score_l}-{score_r}");
        }
        if ball.pos.x > W + 60.0 {
            score_l = (score_l + 1).min(10);
            ball.vel = Vec2::zero();
            log::info!("point left: {score_l}-{score_r}");
        }

        ctx.begin_frame()?;

        // mid dashed line
        let mut y = 20.0;
        while y < H {
            ctx.draw_rect(
                Vec2::new(W * 0.5, y),
                Vec2::new(6.0, 16.0),
                0.0,
                Color::rgb(80, 80, 95),
            )?;
            y += 40.0;
        }

        let paddle_color = Color::rgb(220, 220, 220);
        ctx.draw_rect(Vec2::new(left.x, left.y), Vec2::new(left.w, left.h), 0.0, paddle_color)?;
        ctx.draw_rect(Vec2::new(right.x, right.y), Vec2::new(right.w, right.h), 0.0, paddle_color)?;

        ctx.draw_circle(ball.pos, ball.radius, 0.0, Color::rgb(250, 250, 250))?;

        draw_pips(&mut ctx, Vec2::new(80.0, 40.0), score_l, false)?;
        draw_pips(&mut ctx, Vec2::new(W - 80.0, 40.0), score_r, true)?;

        // serve hint made of bars, near the bottom center
        if ball.paused() {
            let cx = W * 0.5;
            let y = H - 36.0;
            let bar = Color::rgb(150, 170, 190);
            ctx.draw_rect(Vec2::new(cx - 40.0, y), Vec2::new(20.0, 6.0), 0.0, bar)?;
            ctx.draw_rect(Vec2::new(cx, y), Vec2::new(20.0, 6.0), 0.0, bar)?;
            ctx.draw_rect(Vec2::new(cx + 40.0, y), Vec2::new(20.0, 6.0), 0.0, bar)?;
            ctx.draw_rect(
                Vec2::new(cx, y + 18.0),
                Vec2::new(120.0, 12.0),
                0.0,
                Color::rgb(110, 130, 150),
            )?;
        }

        ctx.end_frame()?;
    }

    ctx.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = Aabb { x: 20.0, y: 0.0, w: 10.0, h: 10.0 };
        assert!(!a.intersects(&b));
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = Aabb { x: 8.0, y: 2.0, w: 10.0, h: 10.0 };
        assert!(a.intersects(&b));
    }

    #[test]
    fn paddle_bounce_reflects_and_speeds_up() {
        let paddle = Aabb { x: 40.0, y: 360.0, w: 20.0, h: 120.0 };
        let mut ball = Ball {
            pos: Vec2::new(48.0, 360.0),
            vel: Vec2::new(-320.0, 100.0),
            radius: BALL_RADIUS,
        };

        bounce_from_paddle(&mut ball, &paddle, 1.0);

        assert!(ball.vel.x > 320.0);
        assert!(ball.pos.x > paddle.x + paddle.w * 0.5 + ball.radius);
    }

    #[test]
    fn bounce_misses_when_not_touching() {
        let paddle = Aabb { x: 40.0, y: 360.0, w: 20.0, h: 120.0 };
        let mut ball = Ball {
            pos: Vec2::new(200.0, 360.0),
            vel: Vec2::new(-320.0, 0.0),
            radius: BALL_RADIUS,
        };

        bounce_from_paddle(&mut ball, &paddle, 1.0);

        assert_eq!(ball.vel.x, -320.0);
        assert_eq!(ball.pos.x, 200.0);
    }
}
