use arkanoid::Settings;
use arkanoid::sim::*;

fn block_env(rects: &[Rectangle]) -> GameEnvironment<Block> {
    let mut env: GameEnvironment<Block> = GameEnvironment::new();
    for rect in rects {
        env.add_collidable(Block::new(*rect, Color::BLUE));
    }
    env
}

#[test]
fn test_ball_bounces_off_block_top() {
    // Block spans x in [390, 440], y in [310, 330]
    let env = block_env(&[Rectangle::new(Point::new(390.0, 310.0), 50.0, 20.0)]);
    let radius = 6;
    let mut ball = Ball::new(Point::new(400.0, 300.0), radius, Color::WHITE)
        .with_velocity(Velocity::new(2.0, 3.0));

    // Extended trajectory ends at y = 309, one short of the block
    assert_eq!(ball.advance(&env), Advance::Moved);
    assert_eq!(ball.center(), Point::new(402.0, 303.0));

    let outcome = ball.advance(&env);
    match outcome {
        Advance::Bounced { collidable, point } => {
            assert_eq!(collidable.index(), 0);
            assert!((point.y() - 310.0).abs() < 1e-9);
        }
        other => panic!("expected bounce, got {:?}", other),
    }

    assert!(ball.center().y() < 310.0 - radius as f64);
    assert!(ball.velocity().dy() < 0.0, "dy sign must flip");
    assert_eq!(ball.velocity().dx(), 2.0);
}

#[test]
fn test_closest_collision_is_order_independent() {
    let near = Rectangle::new(Point::new(100.0, 0.0), 20.0, 100.0);
    let far = Rectangle::new(Point::new(300.0, 0.0), 20.0, 100.0);
    let trajectory = Line::from_coords(0.0, 50.0, 500.0, 50.0);

    for (rects, expected) in [([near, far], 0), ([far, near], 1)] {
        let env = block_env(&rects);
        let info = env.closest_collision(&trajectory).info().expect("hit");
        assert_eq!(info.collidable().index(), expected);
        assert!(info.collision_point().approx_eq(Point::new(100.0, 50.0)));
    }
}

#[test]
fn test_ball_rebounds_off_paddle() {
    let settings = Settings::default();
    let mut env: GameEnvironment = GameEnvironment::new();
    let paddle = env.add_collidable(Paddle::new(
        Rectangle::new(Point::new(20.0, 560.0), 760.0, 20.0),
        Color::ORANGE,
        settings.border_size,
        settings.screen_width - settings.border_size,
    ));

    // Straight down onto the middle region
    let mut ball = Ball::new(Point::new(400.0, 550.0), 6, Color::WHITE)
        .with_velocity(Velocity::new(0.0, 4.0));
    let outcome = ball.advance(&env);
    assert_eq!(
        outcome,
        Advance::Bounced {
            collidable: paddle,
            point: Point::new(400.0, 560.0)
        }
    );
    assert_eq!(ball.velocity(), Velocity::new(0.0, -4.0));

    // Far left region fans out up and to the left
    let mut ball = Ball::new(Point::new(30.0, 550.0), 6, Color::WHITE)
        .with_velocity(Velocity::new(0.0, 4.0));
    ball.advance(&env);
    assert!(ball.velocity().dx() < 0.0);
    assert!(ball.velocity().dy() < 0.0);
    assert!((ball.velocity().speed() - 4.0).abs() < 1e-9);
}

#[test]
fn test_full_game_runs_deterministically() {
    let settings = Settings::default();
    let mut a = GameState::new(&settings);
    let mut b = GameState::new(&settings);
    let input = TickInput::default();

    let mut bounces = 0;
    for _ in 0..1000 {
        let ra = tick(&mut a, &input);
        let rb = tick(&mut b, &input);
        assert_eq!(ra, rb);
        bounces += ra.bounces.len();
    }

    assert!(bounces > 0);
    assert_eq!(a.balls, b.balls);
    for ball in &a.balls {
        assert!(ball.center().x().is_finite() && ball.center().y().is_finite());
    }
}

#[test]
fn test_state_serializes() {
    let state = GameState::new(&Settings::default());
    let json = serde_json::to_string(&state).expect("serializes");
    let back: GameState = serde_json::from_str(&json).expect("parses");
    assert_eq!(back.balls, state.balls);
    assert_eq!(back.environment.len(), state.environment.len());
    assert_eq!(back.paddle, state.paddle);
}
