//! Salto Katze entry point
//!
//! The browser build is driven from `salto_katze::web`. Natively this runs a
//! headless demo: the autopilot plays one seeded run at 60 Hz and the best
//! score is kept in a JSON file next to the working directory.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use salto_katze::best::JsonFileStore;
    use salto_katze::sim::{Viewport, seeded};
    use salto_katze::{Autopilot, Session, Tuning};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345u64);
    let tuning = args.next().map(Tuning::load).unwrap_or_default();

    log::info!("Salto Katze (headless) starting with seed {}", seed);

    let pilot = Autopilot::new(&tuning);
    let mut session = Session::new(
        tuning,
        Viewport::new(960.0, 540.0),
        JsonFileStore::new("salto_katze_best.json"),
        seeded(seed),
    );

    // Ten minutes of simulated play at most
    let frame_ms = 1000.0 / 60.0;
    let mut now = 0.0;
    let mut snapshot = session.frame(now, &Default::default());
    for _ in 0..60 * 60 * 10 {
        if !snapshot.is_alive() {
            break;
        }
        let input = pilot.decide(&snapshot);
        now += frame_ms;
        snapshot = session.frame(now, &input);
    }

    let status = snapshot.status_text().unwrap_or_else(|| String::from("still running"));
    println!("Score: {}  Speed: {}  Best: {}", snapshot.score, snapshot.speed, snapshot.best);
    println!("{status}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
