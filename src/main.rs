use arboard::Clipboard;
use lumaze::action_log::{Action, ActionLog};
use lumaze::config::Config;
use lumaze::minimap::{MiniMap, TileKind};
use lumaze::{Frame, Grid, Player, RayCaster, Rgb8, WallCatalog};
use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::{random, SeedableRng};
use std::sync::OnceLock;

fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(Config::load)
}

fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: config.render.width as i32,
        window_height: config.render.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn to_color(c: Rgb8) -> Color {
    Color::from_rgba(c.r, c.g, c.b, 255)
}

/// Running game state
struct Session {
    catalog: WallCatalog,
    grid: Grid,
    player: Player,
    minimap: MiniMap,
    minimap_visible: bool,
    log: ActionLog,
}

impl Session {
    fn new(config: &Config) -> Self {
        let catalog = WallCatalog::default();
        let seed = config.world.seed.unwrap_or_else(random);
        let (grid, player) = build_world(config, &catalog, seed);
        Session {
            catalog,
            grid,
            player,
            minimap: MiniMap::new(config.minimap.radius, config.minimap.size),
            minimap_visible: config.minimap.enabled,
            log: ActionLog::new(),
        }
    }

    fn regenerate(&mut self, config: &Config) {
        let seed: u64 = random();
        let (grid, player) = build_world(config, &self.catalog, seed);
        self.grid = grid;
        self.player = player;
        self.log.log(Action::Regenerate { seed });
        println!("Generated maze with seed {}", seed);
    }

    fn handle_input(&mut self, config: &Config) {
        let mut step = 0.0;
        let mut angle = 0.0;
        if is_key_down(KeyCode::W) || is_key_down(KeyCode::Up) {
            step = config.player.move_step;
        } else if is_key_down(KeyCode::S) || is_key_down(KeyCode::Down) {
            step = -config.player.move_step;
        }
        if is_key_down(KeyCode::A) || is_key_down(KeyCode::Left) {
            angle = -config.player.rotation_step;
        } else if is_key_down(KeyCode::D) || is_key_down(KeyCode::Right) {
            angle = config.player.rotation_step;
        }

        if step != 0.0 || angle != 0.0 {
            if self.player.try_move(step, angle, &self.grid) {
                if step != 0.0 {
                    self.log.log(Action::Move {
                        x: self.player.x,
                        y: self.player.y,
                    });
                }
                if angle != 0.0 {
                    self.log.log(Action::Rotate {
                        direction: self.player.direction,
                    });
                }
            } else {
                self.log.log(Action::Blocked {
                    x: self.player.x,
                    y: self.player.y,
                });
            }
        }

        if is_key_pressed(KeyCode::M) {
            self.minimap_visible = !self.minimap_visible;
            self.log.log(Action::ToggleMiniMap {
                visible: self.minimap_visible,
            });
        }
        if is_key_pressed(KeyCode::C) {
            self.copy_to_clipboard();
        }
        if is_key_pressed(KeyCode::R) {
            self.regenerate(config);
        }
    }

    fn copy_to_clipboard(&mut self) {
        let maze = self.grid.to_ascii();
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&maze) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Maze (seed {}) copied to clipboard!", self.grid.seed());
                    self.log.log(Action::CopyMaze);
                    // Keep clipboard alive for a moment to ensure clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn draw(&self, config: &Config, frame: &Frame) {
        let [r, g, b] = config.visual.background;
        let background = Color::from_rgba(r, g, b, 255);
        let height = config.render.height as f64;

        match frame.fill {
            Some(fill) => clear_background(to_color(fill)),
            None => {
                clear_background(background);
                for (i, hit) in frame.columns.iter().enumerate() {
                    if hit.is_miss() {
                        continue;
                    }
                    let (top, span) = hit.column_span(height);
                    draw_rectangle(i as f32, top as f32, 1.0, span as f32, to_color(hit.color));
                }
            }
        }

        if frame.is_player_in_light(&self.player) {
            let (cx, cy) = (config.render.width as f32 / 2.0, height as f32 / 2.0);
            draw_text("You are in light!", cx, cy, 24.0, Color::from_rgba(10, 10, 10, 255));
        }

        if self.minimap_visible {
            self.draw_minimap();
        }

        let info = format!(
            "Seed: {}   Lights seen: {}   WASD/arrows: move  M: map  C: copy  R: new maze",
            self.grid.seed(),
            frame.visible_lights.len()
        );
        draw_text(&info, 10.0, height as f32 - 10.0, 18.0, GRAY);
    }

    fn draw_minimap(&self) {
        let scale = self.minimap.scale();
        for tile in self.minimap.tiles(&self.grid, &self.player) {
            let (x, y) = self.minimap.tile_origin(tile.dx, tile.dy);
            match tile.kind {
                TileKind::Wall(color) => draw_rectangle(x, y, scale, scale, to_color(color)),
                TileKind::Light(color) => {
                    draw_circle(x + scale / 2.0, y + scale / 2.0, scale * 3.0 / 8.0, to_color(color))
                }
            }
        }

        let (px, py) = self.minimap.tile_origin(0, 0);
        draw_circle(px + scale / 2.0, py + scale / 2.0, scale / 3.0, RED);
        let size = self.minimap.size();
        draw_rectangle_lines(0.0, 0.0, size, size, 1.0, WHITE);
    }
}

fn build_world(config: &Config, catalog: &WallCatalog, seed: u64) -> (Grid, Player) {
    let grid = Grid::new(config.world.dimension, config.world.lights, seed, catalog);
    let mut rng = StdRng::seed_from_u64(seed);
    let player = Player::at_spawn(&grid, &mut rng);
    (grid, player)
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    let mut session = Session::new(config);
    println!(
        "Maze {}x{} with seed {}",
        session.grid.dimension(),
        session.grid.dimension(),
        session.grid.seed()
    );

    loop {
        session.handle_input(config);
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let caster = RayCaster::new(&session.grid, config.render.width, config.render.height);
        let frame = caster.render(&session.player);
        session.draw(config, &frame);

        next_frame().await
    }

    println!("{}", session.log.summary());
    if config.logging.enable_action_log {
        match session.log.save_to_file(&config.logging.action_log_path) {
            Ok(()) => println!("Action log saved to {}", config.logging.action_log_path),
            Err(e) => eprintln!("Failed to save action log: {}", e),
        }
    }
}
